//! Error types for the FastSpell library.
//!
//! All fallible operations return [`FastSpellError`]. Validation failures
//! ([`FastSpellError::CapacityExceeded`], [`FastSpellError::DistanceOutOfRange`])
//! are raised before any state is touched, so a failed call never leaves a
//! dictionary half-updated.
//!
//! "No match" is not an error: queries return `Ok(None)` for it.
//!
//! # Examples
//!
//! ```
//! use fastspell::error::{FastSpellError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FastSpellError::invalid_config("max_word_length must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for FastSpell operations.
#[derive(Error, Debug)]
pub enum FastSpellError {
    /// A word (inserted or queried) is longer than the configured capacity.
    #[error("Capacity exceeded: word length {length} exceeds the maximum word length {max}")]
    CapacityExceeded { length: usize, max: usize },

    /// The requested edit distance is beyond the configured capacity.
    #[error("Distance out of range: {distance} exceeds the max distance capacity {max}")]
    DistanceOutOfRange { distance: usize, max: usize },

    /// Rejected dictionary configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O errors (word lists, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with FastSpellError.
pub type Result<T> = std::result::Result<T, FastSpellError>;

impl FastSpellError {
    /// Create a new capacity error for a word of `length` characters.
    pub fn capacity_exceeded(length: usize, max: usize) -> Self {
        FastSpellError::CapacityExceeded { length, max }
    }

    /// Create a new distance error.
    pub fn distance_out_of_range(distance: usize, max: usize) -> Self {
        FastSpellError::DistanceOutOfRange { distance, max }
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        FastSpellError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        FastSpellError::Other(msg.into())
    }
}
