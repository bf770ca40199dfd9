use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Subject string has no non-empty segment after the provider separator.
    #[error("Invalid identity format: '{subject}' {location}")]
    InvalidIdentityFormat {
        subject: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
