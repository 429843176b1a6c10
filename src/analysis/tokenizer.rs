//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split a text into [`Token`](crate::analysis::token::Token)s that
//! carry their byte span in the original text. The phrase matcher runs every
//! document through a tokenizer before walking the dictionary trie.
//!
//! # Available Tokenizers
//!
//! - [`regex::RegexTokenizer`] - Configurable word-pattern tokenization with
//!   optional case folding
//!
//! # Examples
//!
//! ```
//! use phrasefind::analysis::tokenizer::Tokenizer;
//! use phrasefind::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so one tokenizer can serve several
/// concurrent searches.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;

pub use regex::RegexTokenizer;
