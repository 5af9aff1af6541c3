//! Error types for the MWE detector.
//!
//! All fallible operations return [`MweError`] through the crate-wide
//! [`Result`] alias. A candidate that fails to match or is rejected by a
//! filter is not an error; it simply yields no match.
//!
//! # Examples
//!
//! ```
//! use mwe_detector::error::{MweError, Result};
//!
//! fn load_config() -> Result<()> {
//!     Err(MweError::config("unknown filter id 'f9'"))
//! }
//!
//! match load_config() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for MWE detector operations.
#[derive(Error, Debug)]
pub enum MweError {
    /// I/O errors (reading corpora, model files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid filter configuration (unknown filter id or POS tag)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Persisted lexicon absent or corrupt for the requested language
    #[error("Missing lexicon: {0}")]
    MissingLexicon(String),

    /// A training example that cannot be learned from
    #[error("Training error: {0}")]
    Training(String),

    /// Malformed annotated input (unknown tag, bad head index, bad CUPT line)
    #[error("Annotation error: {0}")]
    Annotation(String),

    /// Label or table parsing errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with MweError.
pub type Result<T> = std::result::Result<T, MweError>;

impl MweError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        MweError::Config(msg.into())
    }

    /// Create a new missing-lexicon error.
    pub fn missing_lexicon<S: Into<String>>(msg: S) -> Self {
        MweError::MissingLexicon(msg.into())
    }

    /// Create a new training error.
    pub fn training<S: Into<String>>(msg: S) -> Self {
        MweError::Training(msg.into())
    }

    /// Create a new annotation error.
    pub fn annotation<S: Into<String>>(msg: S) -> Self {
        MweError::Annotation(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        MweError::Parse(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        MweError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        MweError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Whether this error is fatal for loading a model.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, MweError::Config(_) | MweError::MissingLexicon(_))
    }
}
