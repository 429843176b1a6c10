//! Text analysis module for phrasefind.
//!
//! Turns raw document text into word tokens with byte offsets, which the
//! phrase matcher then walks through the dictionary trie.

pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use token::*;
pub use tokenizer::*;
