//! Error types for the Plume library.
//!
//! All failures are represented by the [`PlumeError`] enum. The core performs
//! no I/O of its own, so every error here propagates synchronously to the
//! caller; nothing is retried or treated as transient.
//!
//! # Examples
//!
//! ```
//! use plume::error::{PlumeError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PlumeError::invalid_state("no notebook has been bound"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for Plume operations.
#[derive(Error, Debug)]
pub enum PlumeError {
    /// An operation was attempted in a state that does not permit it,
    /// e.g. searching before a notebook has been bound.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A user-supplied regular expression failed to compile. Carries the
    /// underlying compiler message; the engine never falls back to literal
    /// matching.
    #[error("invalid regex pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Notebook-level errors (page limit reached, etc.)
    #[error("notebook error: {0}")]
    Notebook(String),

    /// Page-level errors (unknown page identifier, etc.)
    #[error("page error: {0}")]
    Page(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with PlumeError.
pub type Result<T> = std::result::Result<T, PlumeError>;

impl PlumeError {
    /// Create a new invalid-state error.
    pub fn invalid_state<S: Into<String>>(msg: S) -> Self {
        PlumeError::InvalidState(msg.into())
    }

    /// Create a new notebook error.
    pub fn notebook<S: Into<String>>(msg: S) -> Self {
        PlumeError::Notebook(msg.into())
    }

    /// Create a new page error.
    pub fn page<S: Into<String>>(msg: S) -> Self {
        PlumeError::Page(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlumeError::invalid_state("no notebook has been bound");
        assert_eq!(
            err.to_string(),
            "invalid state: no notebook has been bound"
        );

        let err = PlumeError::notebook("maximum of 2 pages reached");
        assert_eq!(err.to_string(), "notebook error: maximum of 2 pages reached");
    }

    #[test]
    fn test_pattern_error_carries_message() {
        let err: PlumeError = regex::Regex::new("[unclosed").unwrap_err().into();
        assert!(matches!(err, PlumeError::Pattern(_)));
        assert!(err.to_string().starts_with("invalid regex pattern:"));
    }
}
