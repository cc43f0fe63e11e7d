//! Terminal host error types.

use dataset_backend::FixtureError;
use repl_engine::SessionError;
use thiserror::Error;

/// Failures that stop the terminal host. Command failures never reach this type; they are
/// recorded in the session transcript.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// Invalid command-line arguments.
    #[error("{0}")]
    Usage(String),
    /// Unreadable or invalid configuration.
    #[error("config: {0}")]
    Config(String),
    /// Dataset fixtures could not be loaded.
    #[error(transparent)]
    Fixtures(#[from] FixtureError),
    /// A lifecycle transition was rejected.
    #[error(transparent)]
    Session(#[from] SessionError),
    /// Reading input or writing output failed.
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for the terminal host.
pub type TerminalResult<T> = Result<T, TerminalError>;
