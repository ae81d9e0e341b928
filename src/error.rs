//! Error types for the Polarity library.
//!
//! All fallible operations return [`PolarityError`] through the crate-wide
//! [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use polarity::error::{PolarityError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PolarityError::config("Unknown model: SVM"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Polarity operations.
///
/// Growth-protocol violations (a weight vector shorter than a referenced
/// feature index) are programming errors and panic instead of surfacing here.
#[derive(Error, Debug)]
pub enum PolarityError {
    /// I/O errors (reading corpora, writing predictions)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unrecognized model or feature selection, invalid hyper-parameters
    #[error("Configuration error: {0}")]
    Config(String),

    /// A key was queried from a vocabulary indexer that does not hold it
    #[error("Lookup error: {0}")]
    Lookup(String),

    /// Malformed corpus input
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A malformed value outside a corpus file, such as a label out of range
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Training diverged to a non-finite value
    #[error("Training error: {0}")]
    Training(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with PolarityError.
pub type Result<T> = std::result::Result<T, PolarityError>;

impl PolarityError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        PolarityError::Config(msg.into())
    }

    /// Create a new lookup error.
    pub fn lookup<S: Into<String>>(msg: S) -> Self {
        PolarityError::Lookup(msg.into())
    }

    /// Create a new invalid data error.
    pub fn invalid_data<S: Into<String>>(msg: S) -> Self {
        PolarityError::InvalidData(msg.into())
    }

    /// Create a new training error.
    pub fn training<S: Into<String>>(msg: S) -> Self {
        PolarityError::Training(msg.into())
    }

    /// Create a new parse error for a 1-based line number.
    pub fn parse<S: Into<String>>(line: usize, msg: S) -> Self {
        PolarityError::Parse {
            line,
            message: msg.into(),
        }
    }
}
