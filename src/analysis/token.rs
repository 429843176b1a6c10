//! Token types for text analysis.
//!
//! A [`Token`] is one word found in a text: its content, its index in the
//! token sequence and the byte span it covers in the original text.
//!
//! # Examples
//!
//! ```
//! use phrasefind::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single word produced by a tokenizer.
///
/// Offsets are byte offsets into the original text, so
/// `&text[token.start_offset..token.end_offset]` is the token's source span.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token (case-folded if the tokenizer folds case)
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text and position and no offsets.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let end_offset = text.len();
        Token {
            text,
            position,
            start_offset: 0,
            end_offset,
        }
    }

    /// Create a new token with explicit byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Length of the source span in bytes.
    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    /// Check if the token covers no text.
    pub fn is_empty(&self) -> bool {
        self.start_offset == self.end_offset
    }

    /// The `(start, end, word)` triple form of this token.
    pub fn into_triple(self) -> (usize, usize, String) {
        (self.start_offset, self.end_offset, self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}..{}", self.text, self.start_offset, self.end_offset)
    }
}

/// A boxed stream of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 5);
    }

    #[test]
    fn test_token_span() {
        let token = Token::with_offsets("pigs", 3, 18, 22);
        assert_eq!(token.len(), 4);
        assert!(!token.is_empty());
        assert_eq!(token.to_string(), "pigs@18..22");
        assert_eq!(token.into_triple(), (18, 22, "pigs".to_string()));
    }
}
