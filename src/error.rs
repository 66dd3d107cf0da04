//! Error types for catalog and config loading

use std::path::PathBuf;
use thiserror::Error;

/// Moderation errors
///
/// Only construction-time paths fail. Matching never returns an error: a
/// term that cannot be compiled is logged and skipped.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid pattern for term {word:?}: {source}")]
    InvalidPattern {
        word: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_wraps_serde_message() {
        let err: FilterError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(err.to_string().starts_with("Invalid configuration:"));
    }

    #[test]
    fn io_error_names_the_path() {
        let err = FilterError::Io {
            path: PathBuf::from("/tmp/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "Failed to read /tmp/missing.json: gone");
    }
}
