pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::connection_manager::ConnectionManager;
pub use error::{DbError, ErrorKind, Result};
pub use repositories::user_repository::UserRepository;
