use crate::collector::OutputMode;

/// Error type for metrics-appender operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Collector not found: {0}")]
    CollectorNotFound(String),

    #[error("Collector failed in {mode} mode (exit code {code}): {stderr}")]
    CollectorFailed {
        mode: OutputMode,
        code: i32,
        stderr: String,
    },

    #[error("Invalid collector output: {0}")]
    InvalidOutput(String),

    #[error("Collector timed out: {0}")]
    Timeout(String),
}

impl Error {
    pub(crate) fn collector_not_found(msg: impl Into<String>) -> Self {
        Error::CollectorNotFound(msg.into())
    }

    pub(crate) fn invalid_output(msg: impl Into<String>) -> Self {
        Error::InvalidOutput(msg.into())
    }

    pub(crate) fn timeout(msg: impl Into<String>) -> Self {
        Error::Timeout(msg.into())
    }
}

/// Result type for metrics-appender operations
pub type Result<T> = std::result::Result<T, Error>;
