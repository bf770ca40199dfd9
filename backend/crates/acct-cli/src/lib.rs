//! acct-cli library
//!
//! Command parsing and execution for the `acct` binary, exported so the
//! commands can be driven against a test database.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliErrorResult};
pub use logger::LogTarget;

use acct_config::Config;
use acct_db::{ConnectionManager, UserRepository};

use log::info;

/// Open the configured database (running migrations) and wrap it in a repository
pub async fn open_repository(config: &Config) -> CliErrorResult<UserRepository> {
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = ConnectionManager::new(database_path)
        .max_connections(config.database.max_connections)
        .busy_timeout(config.database.busy_timeout())
        .acquire_timeout(config.database.acquire_timeout())
        .connect()
        .await?;

    Ok(UserRepository::new(pool))
}

/// Execute the parsed command and render the resulting account as JSON
pub async fn run(cli: Cli, repo: &UserRepository) -> CliErrorResult<String> {
    let account = cli.command.execute(repo).await?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&account)?
    } else {
        serde_json::to_string(&account)?
    };

    Ok(json)
}
