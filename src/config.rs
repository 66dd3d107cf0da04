//! Classifier configuration

use crate::error::{FilterError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How a term is matched against text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Term matches anywhere, including inside longer words ("ass" in "class")
    #[default]
    Substring,

    /// Term must start and end on a word boundary
    WordBoundary,
}

/// Static classifier configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Term matching mode
    pub match_mode: MatchMode,

    /// A token repeated more than this many times is spam
    pub repetition_threshold: usize,

    /// Shortest token (in chars) counted for repetition
    pub repetition_min_token_len: usize,

    /// Remove zero-width / invisible characters before detection
    pub strip_invisible: bool,

    /// Fall back to rustrict's severe-slur check (needs `slur-backstop` feature)
    pub severe_slur_backstop: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Substring,
            repetition_threshold: 5,
            repetition_min_token_len: 3,
            strip_invisible: true,
            severe_slur_backstop: false,
        }
    }
}

impl ClassifierConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&read_to_string(path.as_ref())?)
    }
}

/// Dynamic (admin list) filter configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicFilterConfig {
    /// Term matching mode
    pub match_mode: MatchMode,
}

impl DynamicFilterConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

pub(crate) fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| FilterError::Io {
        path: path.to_path_buf(),
        source,
    })
}
