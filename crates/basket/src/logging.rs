//! Tracing setup.
//!
//! The TUI owns the terminal while it runs, so interactive sessions only log
//! when a log file is given. `--print-html` never draws and logs to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::AppError;

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV: &str = "BASKET_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid.
pub const DEFAULT_FILTER: &str = "basket=info,basket_list=info,warn";

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file, created if missing.
    File(PathBuf),
    Stderr,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(target: LogTarget) -> Result<(), AppError> {
    let registry = tracing_subscriber::registry().with(env_filter());

    match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|source| AppError::LogFile { path, source })?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()?;
        }
        LogTarget::Stderr => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .try_init()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn unwritable_log_file_is_reported() {
        let path = PathBuf::from("/nonexistent-basket-dir/basket.log");
        let err = init_tracing(LogTarget::File(path.clone())).unwrap_err();
        match err {
            AppError::LogFile { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
