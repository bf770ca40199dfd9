use crate::error::{CliError, Result as CliErrorResult};

use std::fmt::{Arguments, Display};
use std::path::PathBuf;
use std::time::SystemTime;

use fern::{Dispatch, FormatCallback};
use fern::colors::{Color, ColoredLevelConfig};
use log::{Record, debug};

/// Where log records go and how they look
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append plain lines to a file
    File(PathBuf),
    /// stderr, so stdout stays clean JSON
    Stderr { colored: bool },
}

/// Initialize the global logger with fern
#[track_caller]
pub fn initialize(log_level: acct_config::LogLevel, target: LogTarget) -> CliErrorResult<()> {
    let level_filter = log_level.0;

    let dispatch = match target {
        LogTarget::File(ref log_path) => {
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    CliError::io(format!("creating log directory {}", parent.display()), e)
                })?;
            }

            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .map_err(|e| {
                    CliError::logger(format!(
                        "Failed to open log file {}: {}",
                        log_path.display(),
                        e
                    ))
                })?;

            Dispatch::new()
                .format(|out, message, record| {
                    finish_line(out, record.level(), message, record)
                })
                .chain(file)
        }
        LogTarget::Stderr { colored: true } => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    finish_line(out, colors.color(record.level()), message, record)
                })
                .chain(std::io::stderr())
        }
        LogTarget::Stderr { colored: false } => Dispatch::new()
            .format(|out, message, record| {
                finish_line(out, record.level(), message, record)
            })
            .chain(std::io::stderr()),
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx statement logging is noisy below warn
        .level_for("sqlx", log::LevelFilter::Warn)
        .chain(dispatch)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    debug!("Logger initialized: level={:?}, target={:?}", level_filter, target);

    Ok(())
}

fn finish_line(
    out: FormatCallback<'_>,
    level: impl Display,
    message: &Arguments<'_>,
    record: &Record<'_>,
) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = level,
        message = message,
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}
