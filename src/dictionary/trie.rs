//! Word-level prefix trie for phrase dictionaries.
//!
//! Each node maps the next word of a phrase to a child node. A node whose
//! `terminal` is set marks the end of a phrase and stores that phrase's id.
//! Prefixes are shared, so the trie holds one node per distinct word-sequence
//! prefix across the whole dictionary.

use std::collections::HashMap;

use ahash::RandomState;
use serde::{Deserialize, Serialize};

use crate::error::{PhraseFindError, Result};

/// One `(id, phrases)` line of a phrase dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Opaque identifier reported for every phrase of this entry
    pub id: String,
    /// Space-separated phrases registered under `id`
    pub phrases: Vec<String>,
}

impl DictionaryEntry {
    /// Create a new entry.
    pub fn new<S: Into<String>>(id: S, phrases: Vec<String>) -> Self {
        DictionaryEntry {
            id: id.into(),
            phrases,
        }
    }
}

impl<S: Into<String>, P: Into<String>> From<(S, Vec<P>)> for DictionaryEntry {
    fn from((id, phrases): (S, Vec<P>)) -> Self {
        DictionaryEntry::new(id, phrases.into_iter().map(Into::into).collect())
    }
}

type Children = HashMap<String, TrieNode, RandomState>;

/// A node of the phrase trie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieNode {
    children: Children,
    terminal: Option<String>,
}

impl TrieNode {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the word sequence `words` under `id`.
    ///
    /// Fails without modifying the terminal if the exact sequence is already
    /// registered, whatever id it was registered under. An empty sequence
    /// marks this node itself.
    pub fn insert<W: AsRef<str>>(&mut self, words: &[W], id: &str) -> Result<()> {
        let mut node = self;
        for word in words {
            node = node.children.entry(word.as_ref().to_string()).or_default();
        }

        if let Some(existing) = &node.terminal {
            let phrase = words
                .iter()
                .map(|w| w.as_ref())
                .collect::<Vec<&str>>()
                .join(" ");
            return Err(PhraseFindError::duplicate_phrase(phrase, existing.as_str(), id));
        }

        node.terminal = Some(id.to_string());
        Ok(())
    }

    /// Child node reached by `word`, if any.
    pub fn child(&self, word: &str) -> Option<&TrieNode> {
        self.children.get(word)
    }

    /// Id of the phrase ending at this node, if any.
    pub fn terminal(&self) -> Option<&str> {
        self.terminal.as_deref()
    }

    /// Check if the node has neither children nor a terminal.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.terminal.is_none()
    }

    /// Number of nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(TrieNode::node_count).sum::<usize>()
    }

    /// Number of phrases ending in this subtree.
    pub fn phrase_count(&self) -> usize {
        usize::from(self.terminal.is_some())
            + self
                .children
                .values()
                .map(TrieNode::phrase_count)
                .sum::<usize>()
    }

    /// Length in words of the longest path below this node.
    pub fn max_depth(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.max_depth())
            .max()
            .unwrap_or(0)
    }
}

/// Build a trie from dictionary entries.
///
/// Every phrase is split on single spaces, so phrases must already be
/// normalized the way the query-time tokenizer will see them. The build
/// aborts on the first duplicate phrase.
pub fn build_trie<I, E>(entries: I) -> Result<TrieNode>
where
    I: IntoIterator<Item = E>,
    E: Into<DictionaryEntry>,
{
    let mut root = TrieNode::new();
    for entry in entries {
        let entry = entry.into();
        for phrase in &entry.phrases {
            let words: Vec<&str> = phrase.split(' ').collect();
            root.insert(&words, &entry.id)?;
        }
    }
    Ok(root)
}
