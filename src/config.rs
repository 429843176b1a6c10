//! Configuration for phrase matching.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::regex::{DEFAULT_WORD_PATTERN, RegexTokenizer};
use crate::error::{PhraseFindError, Result};

/// Configuration for tokenizing and matching texts.
///
/// Missing fields in a configuration file take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Regex defining one word.
    pub word_pattern: String,

    /// Whether to fold texts (and text dictionaries) to lower case.
    pub lowercase: bool,

    /// Thread pool size for scanning several files.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            word_pattern: DEFAULT_WORD_PATTERN.to_string(),
            lowercase: false,
            thread_pool_size: None,
        }
    }
}

impl MatchConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PhraseFindError::invalid_config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: MatchConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for invalid values.
    pub fn validate(&self) -> Result<()> {
        if self.word_pattern.is_empty() {
            return Err(PhraseFindError::invalid_config("word_pattern must not be empty"));
        }
        if self.thread_pool_size == Some(0) {
            return Err(PhraseFindError::invalid_config(
                "thread_pool_size must be at least 1",
            ));
        }
        Ok(())
    }

    /// Build the tokenizer described by this configuration.
    pub fn tokenizer(&self) -> Result<RegexTokenizer> {
        Ok(RegexTokenizer::with_pattern(&self.word_pattern)?.lowercase(self.lowercase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.word_pattern, DEFAULT_WORD_PATTERN);
        assert!(!config.lowercase);
        assert!(config.validate().is_ok());

        let tokenizer = config.tokenizer().unwrap();
        assert_eq!(tokenizer.pattern(), DEFAULT_WORD_PATTERN);
        assert!(!tokenizer.is_lowercase());
    }

    #[test]
    fn test_partial_json() {
        let config: MatchConfig = serde_json::from_str(r#"{"lowercase": true}"#).unwrap();
        assert!(config.lowercase);
        assert_eq!(config.word_pattern, DEFAULT_WORD_PATTERN);
        assert_eq!(config.thread_pool_size, None);
    }

    #[test]
    fn test_invalid_values() {
        let config = MatchConfig {
            thread_pool_size: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = MatchConfig {
            word_pattern: "[".to_string(),
            ..Default::default()
        };
        assert!(config.tokenizer().is_err());
    }
}
