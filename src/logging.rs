//! Diagnostic logging for the CLI.
//!
//! Logs go to stderr so `generate --dry-run` output on stdout stays clean.
//! `RUST_LOG` takes precedence over `--log-level`.

use crate::error::{GenError, Result};
use std::io;
use tracing::Level;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log level options for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    /// Default: only duplicate identifiers and similar surprises.
    #[default]
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

fn default_directive(level: LogLevel) -> String {
    let level = Level::from(level).as_str().to_lowercase();
    format!("yamato_jobs={level}")
}

/// Install the global subscriber.
pub fn init_logging(level: LogLevel) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(level)))
        .map_err(|e| GenError::UserError(format!("failed to create log filter: {}", e)))?;

    let layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init()
        .map_err(|e| GenError::UserError(format!("failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_maps_to_tracing_level() {
        assert_eq!(Level::from(LogLevel::Trace), Level::TRACE);
        assert_eq!(Level::from(LogLevel::Warn), Level::WARN);
        assert_eq!(Level::from(LogLevel::default()), Level::WARN);
    }

    #[test]
    fn default_directive_targets_crate() {
        assert_eq!(default_directive(LogLevel::Debug), "yamato_jobs=debug");
    }
}
