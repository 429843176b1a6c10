//! Compiled phrase dictionaries.
//!
//! A [`PhraseDictionary`] wraps the word trie built from `(id, phrases)`
//! entries. It is built once, either from entries in memory, from a text
//! dictionary file or from a compressed cache, and is read-only afterwards,
//! so one instance can serve any number of concurrent searches.
//!
//! # Examples
//!
//! ```
//! use phrasefind::dictionary::PhraseDictionary;
//!
//! let dictionary = PhraseDictionary::from_entries(vec![
//!     ("p1", vec!["guinea pigs", "Pichia pastoris"]),
//!     ("p2", vec!["pig"]),
//! ])
//! .unwrap();
//! assert_eq!(dictionary.phrase_count(), 3);
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod cache;
pub mod loader;
pub mod trie;

pub use cache::CACHE_SUFFIX;
pub use trie::{DictionaryEntry, TrieNode, build_trie};

/// A built, ready-to-query phrase dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseDictionary {
    root: TrieNode,
    entry_count: usize,
    lowercase: bool,
}

/// Summary figures about a dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryStats {
    /// Number of entries the dictionary was built from
    pub entries: usize,
    /// Number of distinct phrases
    pub phrases: usize,
    /// Number of trie nodes, the root included
    pub nodes: usize,
    /// Length in words of the longest phrase
    pub max_phrase_words: usize,
    /// Whether names were case-folded at build time
    pub lowercase: bool,
}

impl PhraseDictionary {
    /// Build a dictionary from `(id, phrases)` entries.
    ///
    /// Fails with [`DuplicatePhrase`](crate::error::PhraseFindError::DuplicatePhrase)
    /// if any word sequence is registered twice.
    pub fn from_entries<I, E>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<DictionaryEntry>,
    {
        let mut entry_count = 0;
        let root = build_trie(entries.into_iter().inspect(|_| entry_count += 1))?;

        Ok(PhraseDictionary {
            root,
            entry_count,
            lowercase: false,
        })
    }

    /// Build a dictionary from a text dictionary file (`.gz` allowed).
    ///
    /// With `lowercase` set the names are case-folded; search such a
    /// dictionary with a lower-casing tokenizer.
    pub fn from_path<P: AsRef<Path>>(path: P, lowercase: bool) -> Result<Self> {
        let entries = loader::read_entries(path, lowercase)?;
        let mut dictionary = Self::from_entries(entries)?;
        dictionary.lowercase = lowercase;
        Ok(dictionary)
    }

    /// Build a dictionary from a text file and write its cache next to it.
    ///
    /// Returns the dictionary and the path of the written cache.
    pub fn compile<P: AsRef<Path>>(path: P, lowercase: bool) -> Result<(Self, PathBuf)> {
        let path = path.as_ref();
        let dictionary = Self::from_path(path, lowercase)?;
        let cache_path = cache_path_for(path);
        dictionary.write_cache(&cache_path)?;
        Ok((dictionary, cache_path))
    }

    /// Load a dictionary from a compressed cache file.
    pub fn load_cache<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let dictionary = cache::read_cache(BufReader::new(File::open(path)?))?;
        log::info!(
            "Loaded {} phrases from cache {}",
            dictionary.phrase_count(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Write this dictionary as a compressed cache file.
    pub fn write_cache<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        cache::write_cache(self, &mut writer)?;
        writer.flush()?;
        log::info!("Wrote dictionary cache {}", path.display());
        Ok(())
    }

    /// Open a dictionary from either a cache file or a text dictionary.
    ///
    /// Paths ending in [`CACHE_SUFFIX`] are loaded as caches; `lowercase` only
    /// applies to text dictionaries, a cache keeps the setting it was built with.
    pub fn open<P: AsRef<Path>>(path: P, lowercase: bool) -> Result<Self> {
        let path = path.as_ref();
        if is_cache_path(path) {
            Self::load_cache(path)
        } else {
            Self::from_path(path, lowercase)
        }
    }

    /// Root of the phrase trie.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Whether the phrases were case-folded when the dictionary was built.
    pub fn is_lowercase(&self) -> bool {
        self.lowercase
    }

    /// Number of entries the dictionary was built from.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Number of distinct phrases.
    pub fn phrase_count(&self) -> usize {
        self.root.phrase_count()
    }

    /// Check if the dictionary holds no phrase.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Summary figures about this dictionary.
    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            entries: self.entry_count,
            phrases: self.root.phrase_count(),
            nodes: self.root.node_count(),
            max_phrase_words: self.root.max_depth(),
            lowercase: self.lowercase,
        }
    }
}

/// Cache path used for the text dictionary at `path`.
///
/// `.gz`, `.tsv` and `.txt` suffixes are dropped before [`CACHE_SUFFIX`] is
/// appended, so `genes.tsv.gz` becomes `genes.trie.gz`.
pub fn cache_path_for(path: &Path) -> PathBuf {
    let mut stem = path.to_path_buf();
    for suffix in ["gz", "tsv", "txt"] {
        if stem.extension().is_some_and(|ext| ext == suffix) {
            stem.set_extension("");
        }
    }

    let mut name = stem.into_os_string();
    name.push(CACHE_SUFFIX);
    PathBuf::from(name)
}

/// Check whether a path names a dictionary cache.
pub fn is_cache_path(path: &Path) -> bool {
    path.to_string_lossy().ends_with(CACHE_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhraseFindError;

    #[test]
    fn test_from_entries() {
        let dictionary = PhraseDictionary::from_entries(vec![
            ("p1", vec!["how are"]),
            ("p2", vec!["you doing", "are you"]),
            ("p3", vec!["how are you"]),
        ])
        .unwrap();

        let stats = dictionary.stats();
        assert_eq!(stats.entries, 3);
        assert_eq!(stats.phrases, 4);
        assert_eq!(stats.max_phrase_words, 3);
        assert!(!stats.lowercase);
        assert!(!dictionary.is_empty());
    }

    #[test]
    fn test_duplicate_phrase_aborts_build() {
        let result = PhraseDictionary::from_entries(vec![
            ("id1", vec!["same phrase"]),
            ("id2", vec!["same phrase"]),
        ]);
        assert!(matches!(result, Err(PhraseFindError::DuplicatePhrase { .. })));
    }

    #[test]
    fn test_cache_path_for() {
        assert_eq!(
            cache_path_for(Path::new("data/genes.tsv.gz")),
            PathBuf::from("data/genes.trie.gz")
        );
        assert_eq!(
            cache_path_for(Path::new("diseases.txt")),
            PathBuf::from("diseases.trie.gz")
        );
        assert_eq!(
            cache_path_for(Path::new("drugs.dict")),
            PathBuf::from("drugs.dict.trie.gz")
        );
        assert!(is_cache_path(&cache_path_for(Path::new("drugs.dict"))));
        assert!(!is_cache_path(Path::new("drugs.dict")));
    }
}
