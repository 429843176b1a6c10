//! # phrasefind
//!
//! Fast dictionary phrase matching for text mining: find gene, disease, drug
//! or any other dictionary names in documents.
//!
//! ## Features
//!
//! - Word-level trie built from `id<TAB>name1|name2|...` dictionaries
//! - Longest-match, non-overlapping search with byte offsets into the text
//! - Configurable word pattern and case folding
//! - Compressed binary dictionary cache for fast startup
//!
//! ## Example
//!
//! ```
//! use phrasefind::prelude::*;
//!
//! let dictionary = PhraseDictionary::from_entries(vec![("p1", vec!["alzheimer's disease"])]).unwrap();
//! let matches = find_matches("alzheimer's disease", &dictionary, DEFAULT_WORD_PATTERN, false).unwrap();
//! assert_eq!(matches, vec![Match::new(0, 19, "p1")]);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod matcher;

pub mod prelude {
    pub use crate::analysis::tokenizer::regex::{DEFAULT_WORD_PATTERN, RegexTokenizer};
    pub use crate::config::MatchConfig;
    pub use crate::dictionary::{DictionaryEntry, PhraseDictionary};
    pub use crate::error::{PhraseFindError, Result};
    pub use crate::matcher::{Match, PhraseMatcher, find_matches};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
