//! Error types for phrasefind.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side is
//! the [`PhraseFindError`] enum. Nothing is retried internally: a malformed
//! dictionary line, a duplicate phrase or an unreadable cache is surfaced to
//! the immediate caller.
//!
//! # Examples
//!
//! ```
//! use phrasefind::error::{PhraseFindError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PhraseFindError::cache_format("bad magic number"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for phrasefind operations.
#[derive(Error, Debug)]
pub enum PhraseFindError {
    /// I/O errors (reading dictionaries, reading or writing caches)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis errors (invalid word pattern, tokenization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A line of a text dictionary does not have one or two tab-separated fields
    #[error("Dictionary format error on line {line}: {message}")]
    DictionaryFormat { line: usize, message: String },

    /// The same word sequence was registered twice
    #[error("Duplicate phrase '{phrase}': already registered as '{existing_id}', cannot add as '{new_id}'")]
    DuplicatePhrase {
        phrase: String,
        existing_id: String,
        new_id: String,
    },

    /// The binary trie cache is unreadable or corrupt
    #[error("Cache format error: {0}")]
    CacheFormat(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with PhraseFindError.
pub type Result<T> = std::result::Result<T, PhraseFindError>;

impl PhraseFindError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PhraseFindError::Analysis(msg.into())
    }

    /// Create a new dictionary format error for a 1-based line number.
    pub fn dictionary_format<S: Into<String>>(line: usize, msg: S) -> Self {
        PhraseFindError::DictionaryFormat {
            line,
            message: msg.into(),
        }
    }

    /// Create a new duplicate phrase error.
    pub fn duplicate_phrase<P, E, N>(phrase: P, existing_id: E, new_id: N) -> Self
    where
        P: Into<String>,
        E: Into<String>,
        N: Into<String>,
    {
        PhraseFindError::DuplicatePhrase {
            phrase: phrase.into(),
            existing_id: existing_id.into(),
            new_id: new_id.into(),
        }
    }

    /// Create a new cache format error.
    pub fn cache_format<S: Into<String>>(msg: S) -> Self {
        PhraseFindError::CacheFormat(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        PhraseFindError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PhraseFindError::Other(msg.into())
    }

    /// Returns true if this error means a cache should be rebuilt from its text source.
    pub fn is_cache_error(&self) -> bool {
        matches!(self, PhraseFindError::CacheFormat(_))
    }
}
