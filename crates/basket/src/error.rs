use std::path::PathBuf;

use basket_core::ProgramError;

/// Errors that end a `basket` session.
///
/// Rejected list operations are not in here: they are reported in the status
/// line and the session continues.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Program(#[from] ProgramError),

    #[error("could not open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to install the tracing subscriber: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
