//! acct - user account store CLI
//!
//! # Examples
//!
//! ```bash
//! # Create an account
//! acct create --subject 'auth0|5f7c8ec7' --email ada@example.com --email-verified
//!
//! # Look it up again
//! acct find 'auth0|5f7c8ec7' --pretty
//! ```

use acct_cli::{Cli, CliErrorResult, LogTarget, logger};

use acct_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error [{}]: {}", e.error_code(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<String> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let target = match config.log_file_path()? {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Stderr {
            colored: config.logging.colored,
        },
    };
    logger::initialize(config.logging.level, target)?;

    info!("Starting acct v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let repo = acct_cli::open_repository(&config).await?;
    let result = acct_cli::run(cli, &repo).await;
    repo.close().await;

    result
}
