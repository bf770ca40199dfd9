//! Identity key extraction.
//!
//! Authentication middleware hands us a subject of the form
//! `<provider>|<local-id>`. The local id is the account's natural key and is
//! what the `auth0id` column stores. The provider segment is not inspected.

use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::panic::Location;

/// Separator between the provider and the provider-local id in a subject.
pub const SUBJECT_SEPARATOR: char = '|';

/// Returns the provider-local id (second `|`-separated segment) of `subject`.
///
/// Fails with [`CoreError::InvalidIdentityFormat`] when the subject has no
/// separator or the segment after it is empty. Segments past the second are
/// ignored, so `"p|x|y"` yields `"x"`.
#[track_caller]
pub fn extract_local_id(subject: &str) -> CoreErrorResult<&str> {
    match subject.split(SUBJECT_SEPARATOR).nth(1) {
        Some(local_id) if !local_id.is_empty() => Ok(local_id),
        _ => Err(CoreError::InvalidIdentityFormat {
            subject: subject.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
