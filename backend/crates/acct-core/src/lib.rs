pub mod error;
pub mod identity;
pub mod models;

pub use error::{CoreError, Result};
pub use identity::{SUBJECT_SEPARATOR, extract_local_id};
pub use models::account::Account;
pub use models::account_update::AccountUpdate;
pub use models::new_account::NewAccount;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
