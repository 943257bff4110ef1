//! Error types for coop-output.

use thiserror::Error;

/// Errors that can occur when writing run results.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// A snapshot's matrix does not match the entity list the writer was
    /// opened with.
    #[error("snapshot at tick {tick} has {got} entities, expected {expected}")]
    SizeMismatch { tick: u64, got: usize, expected: usize },
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
