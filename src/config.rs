use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::detect::FilterOptions;

/// Default cap on `text` length, in characters.
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 500;

/// Service configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Everything has a default,
/// so an empty environment yields a working service.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Longest accepted `text`, in characters. `None` disables the check
    /// (BADWORDS_MAX_TEXT_LENGTH=0).
    pub max_text_length: Option<usize>,
    /// Optional newline-separated term file added to both detectors
    /// (BADWORDS_EXTRA_WORDS).
    pub extra_words: Option<PathBuf>,
    /// Whole-word matching for the boundary detector (BADWORDS_WHOLE_WORD).
    pub whole_word: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_text_length: Some(DEFAULT_MAX_TEXT_LENGTH),
            extra_words: None,
            whole_word: false,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup. Lets tests
    /// exercise parsing without touching the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_text_length = match lookup("BADWORDS_MAX_TEXT_LENGTH") {
            Some(raw) => {
                let limit: usize = raw.trim().parse().with_context(|| {
                    format!("BADWORDS_MAX_TEXT_LENGTH must be a non-negative integer, got {raw:?}")
                })?;
                // 0 means "no limit"
                (limit > 0).then_some(limit)
            }
            None => Some(DEFAULT_MAX_TEXT_LENGTH),
        };

        let extra_words = lookup("BADWORDS_EXTRA_WORDS")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let whole_word = match lookup("BADWORDS_WHOLE_WORD").as_deref().map(str::trim) {
            None | Some("") | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => anyhow::bail!("BADWORDS_WHOLE_WORD must be true/false, got {other:?}"),
        };

        Ok(Self {
            max_text_length,
            extra_words,
            whole_word,
        })
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            whole_word: self.whole_word,
            extra_words: self.extra_words.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(load(&[]).unwrap(), Config::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = load(&[
            ("BADWORDS_MAX_TEXT_LENGTH", "1000"),
            ("BADWORDS_EXTRA_WORDS", "/etc/badwords/extra.txt"),
            ("BADWORDS_WHOLE_WORD", "true"),
        ])
        .unwrap();
        assert_eq!(config.max_text_length, Some(1000));
        assert_eq!(
            config.extra_words,
            Some(PathBuf::from("/etc/badwords/extra.txt"))
        );
        assert!(config.whole_word);
    }

    #[test]
    fn zero_length_disables_limit() {
        let config = load(&[("BADWORDS_MAX_TEXT_LENGTH", "0")]).unwrap();
        assert_eq!(config.max_text_length, None);
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(load(&[("BADWORDS_MAX_TEXT_LENGTH", "lots")]).is_err());
        assert!(load(&[("BADWORDS_WHOLE_WORD", "maybe")]).is_err());
    }
}
