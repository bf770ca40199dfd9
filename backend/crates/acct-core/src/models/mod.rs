pub mod account;
pub mod account_update;
pub mod new_account;
