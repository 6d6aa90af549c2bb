//! Error types for the SetSim cache simulator.

use std::io;

use thiserror::Error;

/// The result type used throughout SetSim.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for SetSim operations.
///
/// Configuration errors are raised once, at construction, before any cache
/// state exists. Contract violations inside the cache (for example asking an
/// empty set for its least recently used slot during eviction) are bugs and
/// panic instead of surfacing here.
#[derive(Error, Debug)]
pub enum Error {
    /// Words per block is below 2 or not a power of two.
    #[error("words per block invalid: {0} (must be a power of two >= 2)")]
    InvalidWordsPerBlock(usize),

    /// Block count is below 4 or not a power of two.
    #[error("block count invalid: {0} (must be a power of two >= 4)")]
    InvalidBlockCount(usize),

    /// An invalid argument was provided.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A summary could not be rendered.
    #[error("Invalid summary: {0}")]
    InvalidSummary(String),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// An I/O error occurred while exporting a report.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Creates a new invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Creates a new invalid summary error.
    pub fn invalid_summary(msg: impl Into<String>) -> Self {
        Error::InvalidSummary(msg.into())
    }

    /// Returns true for errors raised while validating a cache configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidWordsPerBlock(_) | Error::InvalidBlockCount(_) | Error::InvalidArgument(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
