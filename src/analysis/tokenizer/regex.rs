//! Regex-based tokenizer implementation.

use std::borrow::Cow;
use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{PhraseFindError, Result};

/// Default word pattern: word characters, apostrophes, square brackets,
/// parentheses and hyphens.
pub const DEFAULT_WORD_PATTERN: &str = r"[\w'\[\]()\-]+";

/// A regex-based tokenizer that extracts every match of a word pattern.
///
/// With [`lowercase`](RegexTokenizer::lowercase) enabled the whole text is
/// case-folded before matching. Folding never changes the byte length of the
/// text, so token offsets always refer to the caller's original string.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
    /// Whether to fold the text to lower case before tokenizing
    lowercase: bool,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with [`DEFAULT_WORD_PATTERN`].
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_WORD_PATTERN)
    }

    /// Create a new regex tokenizer with a custom word pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| PhraseFindError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
            lowercase: false,
        })
    }

    /// Enable or disable case folding.
    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check if this tokenizer folds case.
    pub fn is_lowercase(&self) -> bool {
        self.lowercase
    }

    /// Lazily iterate over the words of `text`.
    ///
    /// The returned iterator covers this one text only; clone it to restart.
    pub fn words<'a>(&'a self, text: &'a str) -> Words<'a> {
        let text = if self.lowercase {
            fold_case(text)
        } else {
            Cow::Borrowed(text)
        };

        Words {
            regex: self.pattern.as_ref(),
            text,
            cursor: 0,
            position: 0,
        }
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("Default regex pattern should be valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self.words(text).collect();
        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

/// Lazy iterator over the words of a single text.
#[derive(Clone, Debug)]
pub struct Words<'a> {
    regex: &'a Regex,
    text: Cow<'a, str>,
    cursor: usize,
    position: usize,
}

impl Iterator for Words<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if self.cursor > self.text.len() {
                return None;
            }

            let (start, end) = {
                let mat = self.regex.find_at(&self.text, self.cursor)?;
                (mat.start(), mat.end())
            };

            if start == end {
                // Empty matches are skipped; step over the next character.
                self.cursor = match self.text[end..].chars().next() {
                    Some(c) => end + c.len_utf8(),
                    None => self.text.len() + 1,
                };
                continue;
            }

            self.cursor = end;
            let token = Token::with_offsets(&self.text[start..end], self.position, start, end);
            self.position += 1;
            return Some(token);
        }
    }
}

/// Fold `text` to lower case without changing its byte length.
///
/// Characters whose lower-case form is longer or shorter in UTF-8, or maps to
/// several characters, are kept as they are.
pub fn fold_case(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| c.to_lowercase().next() != Some(c)) {
        return Cow::Borrowed(text);
    }

    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) if l.len_utf8() == c.len_utf8() => folded.push(l),
            _ => folded.push(c),
        }
    }
    Cow::Owned(folded)
}
