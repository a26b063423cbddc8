//! Error types for the sizing crate

use thiserror::Error;

/// Errors that can occur during size parsing and space calculations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Size string could not be parsed
    #[error("invalid size format: '{0}' (expected <number><unit> with unit B, KB, MB, GB or TB)")]
    InvalidSizeFormat(String),

    /// Per-file threshold is unusable for file-count calculation
    #[error("invalid threshold: {0}")]
    InvalidThreshold(String),

    /// Input out of range for a space computation
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for sizing operations
pub type Result<T> = std::result::Result<T, Error>;
