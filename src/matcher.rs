//! Longest-match phrase search.
//!
//! The matcher tokenizes a text, then tries every token as the start of a
//! phrase, walking the dictionary trie one word at a time. From each start it
//! keeps only the longest phrase that ends on a terminal node. A candidate is
//! accepted only if it starts strictly after the end of the previously
//! accepted match, so results never overlap and never touch.
//!
//! # Examples
//!
//! ```
//! use phrasefind::dictionary::PhraseDictionary;
//! use phrasefind::matcher::find_matches;
//! use phrasefind::analysis::tokenizer::regex::DEFAULT_WORD_PATTERN;
//!
//! let dictionary = PhraseDictionary::from_entries(vec![
//!     ("p1", vec!["how are"]),
//!     ("p2", vec!["you doing", "are you"]),
//!     ("p3", vec!["how are you"]),
//! ])
//! .unwrap();
//!
//! let matches = find_matches("how   are  you doing?", &dictionary, DEFAULT_WORD_PATTERN, false).unwrap();
//! assert_eq!(matches.len(), 1);
//! assert_eq!((matches[0].start, matches[0].end, matches[0].id.as_str()), (0, 14, "p3"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::config::MatchConfig;
use crate::dictionary::{PhraseDictionary, TrieNode};
use crate::error::Result;

/// A phrase found in a text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    /// Byte offset of the first word of the phrase in the original text
    pub start: usize,
    /// Byte offset just past the last word of the phrase
    pub end: usize,
    /// Id stored for the phrase in the dictionary
    pub id: String,
}

impl Match {
    /// Create a new match.
    pub fn new<S: Into<String>>(start: usize, end: usize, id: S) -> Self {
        Match {
            start,
            end,
            id: id.into(),
        }
    }

    /// The span of `text` covered by this match.
    ///
    /// `text` must be the text the match was found in.
    pub fn matched_text<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }
}

impl From<Match> for (usize, usize, String) {
    fn from(m: Match) -> Self {
        (m.start, m.end, m.id)
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.start, self.end, self.id)
    }
}

/// Searches texts for the phrases of one dictionary.
///
/// The matcher only borrows the dictionary and can be shared between threads.
#[derive(Debug, Clone)]
pub struct PhraseMatcher<'a> {
    dictionary: &'a PhraseDictionary,
    tokenizer: RegexTokenizer,
}

impl<'a> PhraseMatcher<'a> {
    /// Create a matcher that tokenizes texts with `tokenizer`.
    pub fn new(dictionary: &'a PhraseDictionary, tokenizer: RegexTokenizer) -> Self {
        if dictionary.is_lowercase() && !tokenizer.is_lowercase() {
            log::warn!("Dictionary was built lower-cased but the tokenizer keeps case");
        }
        PhraseMatcher {
            dictionary,
            tokenizer,
        }
    }

    /// Create a matcher from a word pattern and case-folding setting.
    pub fn with_config(dictionary: &'a PhraseDictionary, config: &MatchConfig) -> Result<Self> {
        Ok(Self::new(dictionary, config.tokenizer()?))
    }

    /// The tokenizer used for texts.
    pub fn tokenizer(&self) -> &RegexTokenizer {
        &self.tokenizer
    }

    /// Find all longest non-overlapping phrase matches in `text`.
    ///
    /// Matches are returned in increasing start order.
    pub fn find(&self, text: &str) -> Vec<Match> {
        let words: Vec<Token> = self.tokenizer.words(text).collect();
        find_in_tokens(self.dictionary.root(), &words)
    }
}

/// Find all longest non-overlapping phrase matches in already tokenized words.
pub fn find_in_tokens(root: &TrieNode, words: &[Token]) -> Vec<Match> {
    let mut matches: Vec<Match> = Vec::new();

    for (index, first) in words.iter().enumerate() {
        let Some((end, id)) = longest_from(root, &words[index..]) else {
            continue;
        };

        let start = first.start_offset;
        if matches.last().is_none_or(|previous| previous.end < start) {
            matches.push(Match::new(start, end, id));
        }
    }

    matches
}

/// Longest phrase starting at `words[0]` below `node`, as `(end offset, id)`.
///
/// A deeper terminal always wins over the terminal at the current node, so a
/// shorter phrase is only reported when nothing longer continues the path.
fn longest_from<'d>(node: &'d TrieNode, words: &[Token]) -> Option<(usize, &'d str)> {
    let (word, rest) = words.split_first()?;
    let child = node.child(&word.text)?;

    longest_from(child, rest).or_else(|| child.terminal().map(|id| (word.end_offset, id)))
}

/// Find all longest non-overlapping matches of `dictionary` in `text`.
///
/// `word_pattern` is the regex that defines a word. With `lowercase` set the
/// text is case-folded before tokenizing; the dictionary must then have been
/// built from lower-case phrases too. Fails only if `word_pattern` is not a
/// valid regex.
pub fn find_matches(
    text: &str,
    dictionary: &PhraseDictionary,
    word_pattern: &str,
    lowercase: bool,
) -> Result<Vec<Match>> {
    let tokenizer = RegexTokenizer::with_pattern(word_pattern)?.lowercase(lowercase);
    Ok(PhraseMatcher::new(dictionary, tokenizer).find(text))
}
