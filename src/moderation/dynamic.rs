//! Admin-configurable banned-word filter.
//!
//! The word list comes from the caller on every call; nothing is stored.

use super::pattern::{compile_term, mask_matches};
use crate::config::{read_to_string, DynamicFilterConfig};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// One entry of a banned-word policy.
///
/// Deserializes from either a bare string or `{"word": ..., "isActive": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BannedWordEntry {
    Plain(String),
    #[serde(rename_all = "camelCase")]
    Record {
        word: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        is_active: Option<bool>,
    },
}

impl BannedWordEntry {
    pub fn active(word: impl Into<String>) -> Self {
        BannedWordEntry::Record {
            word: word.into(),
            is_active: Some(true),
        }
    }

    pub fn inactive(word: impl Into<String>) -> Self {
        BannedWordEntry::Record {
            word: word.into(),
            is_active: Some(false),
        }
    }

    /// Normalize to `(word, is_active)`. Records are active unless
    /// explicitly switched off.
    pub fn resolve(&self) -> (&str, bool) {
        match self {
            BannedWordEntry::Plain(word) => (word.as_str(), true),
            BannedWordEntry::Record { word, is_active } => {
                (word.as_str(), *is_active != Some(false))
            }
        }
    }

    /// The word, if this entry should be applied
    fn enforced_word(&self) -> Option<&str> {
        match self.resolve() {
            (word, true) if !word.is_empty() => Some(word),
            _ => None,
        }
    }
}

impl From<&str> for BannedWordEntry {
    fn from(word: &str) -> Self {
        BannedWordEntry::Plain(word.to_string())
    }
}

impl From<String> for BannedWordEntry {
    fn from(word: String) -> Self {
        BannedWordEntry::Plain(word)
    }
}

/// Parse a banned-word list from loosely-typed JSON.
///
/// Anything other than an array yields an empty list; elements that are
/// neither a string nor a `{word, isActive}` record are skipped.
pub fn parse_banned_words(value: &Value) -> Vec<BannedWordEntry> {
    let Some(items) = value.as_array() else {
        log::debug!("Banned word list is not an array, ignoring");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match BannedWordEntry::deserialize(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("Skipping malformed banned word entry {}: {}", item, e);
                None
            }
        })
        .collect()
}

/// Read a JSON banned-word file and parse it with [`parse_banned_words`]
pub fn load_banned_words(path: impl AsRef<Path>) -> Result<Vec<BannedWordEntry>> {
    let raw = read_to_string(path.as_ref())?;
    Ok(parse_banned_words(&serde_json::from_str(&raw)?))
}

/// Redacts or detects caller-supplied banned words
#[derive(Debug, Clone, Default)]
pub struct DynamicWordFilter {
    config: DynamicFilterConfig,
}

impl DynamicWordFilter {
    pub fn new(config: DynamicFilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DynamicFilterConfig {
        &self.config
    }

    /// Mask every active entry's word in `text`, in list order
    pub fn redact(&self, text: &str, entries: &[BannedWordEntry]) -> String {
        if text.is_empty() || entries.is_empty() {
            return text.to_string();
        }

        let mut result = text.to_string();
        for word in entries.iter().filter_map(BannedWordEntry::enforced_word) {
            match compile_term(word, self.config.match_mode) {
                Ok(pattern) => result = mask_matches(&result, &pattern),
                Err(e) => log::warn!("Skipping banned word: {}", e),
            }
        }
        result
    }

    /// Whether any active entry's word occurs in `text`
    pub fn contains(&self, text: &str, entries: &[BannedWordEntry]) -> bool {
        if text.is_empty() || entries.is_empty() {
            return false;
        }

        entries
            .iter()
            .filter_map(BannedWordEntry::enforced_word)
            .any(|word| match compile_term(word, self.config.match_mode) {
                Ok(pattern) => pattern.is_match(text),
                Err(e) => {
                    log::warn!("Skipping banned word: {}", e);
                    false
                }
            })
    }
}
