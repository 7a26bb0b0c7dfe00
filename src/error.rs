//! Error types for the Lexis library.
//!
//! Compiling a lexicon never fails: problems found while deriving, resolving
//! or validating entries are reported as [`Diagnostic`](crate::lexicon::diagnostic::Diagnostic)
//! values. [`LexisError`] covers the fallible edges around the pipeline:
//! reading configuration, compiling rewrite patterns and building the
//! translator.
//!
//! # Examples
//!
//! ```
//! use lexis::error::{LexisError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexisError::config("entry `give` has no formation"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexis operations.
#[derive(Error, Debug)]
pub enum LexisError {
    /// I/O errors (reading lexicon files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A rewrite rule or phonotactic pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// The key matcher used for translation could not be built
    #[error("Translation error: {0}")]
    Translation(#[from] aho_corasick::BuildError),

    /// Malformed lexicon configuration (duplicate keys, ambiguous entries, ...)
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for operations that may fail with LexisError.
pub type Result<T> = std::result::Result<T, LexisError>;

impl LexisError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexisError::Config(msg.into())
    }
}
