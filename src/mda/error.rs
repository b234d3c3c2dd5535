//! Error types for persistence operations
//!
//! Only stream I/O can fail recoverably; precondition violations elsewhere
//! in the core are assertion failures, not errors.

use std::io;
use thiserror::Error;

/// Persistence error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error from the underlying stream
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The stream ended before the full region was read
    #[error("truncated capture: expected {expected} cells, stream ended after {got}")]
    TruncatedCapture { expected: usize, got: usize },
}

/// Result type for persistence operations
pub type Result<T> = std::result::Result<T, Error>;
