use acct_core::{CoreError, ErrorLocation};

use std::panic::Location;

use thiserror::Error;

/// Coarse error classes callers branch on (e.g. to pick an HTTP status).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidIdentityFormat,
    NotFound,
    DuplicateAccount,
    Storage,
}

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid identity format: '{subject}' {location}")]
    InvalidIdentityFormat {
        subject: String,
        location: ErrorLocation,
    },

    #[error("Account not found: auth0id={auth0_id} {location}")]
    NotFound {
        auth0_id: String,
        location: ErrorLocation,
    },

    #[error("Account already exists: auth0id={auth0_id} {location}")]
    DuplicateAccount {
        auth0_id: String,
        #[source]
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Storage error while {context}: {source} {location}")]
    Storage {
        context: String,
        #[source]
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Corrupt row in {table}.{column}: {message} {location}")]
    CorruptRow {
        table: &'static str,
        column: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// Wrap a driver error with a description of the statement that failed.
    /// Unique-constraint violations on insert are classified by the caller.
    #[track_caller]
    pub fn storage(context: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Storage {
            context: context.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidIdentityFormat { .. } => ErrorKind::InvalidIdentityFormat,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::DuplicateAccount { .. } => ErrorKind::DuplicateAccount,
            Self::Sqlx { .. }
            | Self::Storage { .. }
            | Self::CorruptRow { .. }
            | Self::Migration { .. }
            | Self::Initialization { .. } => ErrorKind::Storage,
        }
    }

    /// Stable machine-readable code for responses and logs
    pub fn error_code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidIdentityFormat => "INVALID_IDENTITY_FORMAT",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::DuplicateAccount => "DUPLICATE_ACCOUNT",
            ErrorKind::Storage => "STORAGE_ERROR",
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for DbError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidIdentityFormat { subject, location } => {
                Self::InvalidIdentityFormat { subject, location }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
