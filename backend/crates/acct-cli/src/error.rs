use acct_config::ConfigError;
use acct_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("{source}")]
    Db {
        #[from]
        source: DbError,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error: {message} {location}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("JSON serialization error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io<S: Into<String>>(message: S, source: std::io::Error) -> Self {
        CliError::Io {
            message: message.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable code printed alongside the message
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Db { source } => source.error_code(),
            Self::Config { .. } => "CONFIG_ERROR",
            Self::Logger { .. } => "LOGGER_ERROR",
            Self::Io { .. } => "IO_ERROR",
            Self::Json { .. } => "JSON_ERROR",
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CliError::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
