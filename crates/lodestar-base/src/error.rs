//! Unified error types for Lodestar.

use thiserror::Error;

/// The main error type for Lodestar operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
