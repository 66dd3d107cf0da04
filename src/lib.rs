//! Content Moderation Library
//!
//! Two independent, pure text filters for user-generated content:
//!
//! - [`StaticContentClassifier`] checks text against a bundled term catalog,
//!   obfuscated spellings and repetition spam, and validates name + message
//!   pairs.
//! - [`DynamicWordFilter`] redacts or detects words from an admin-supplied
//!   banned-word list.
//!
//! The two never call each other; callers compose them.

pub mod config;
pub mod error;
pub mod moderation;

pub use config::{ClassifierConfig, DynamicFilterConfig, MatchMode};
pub use error::{FilterError, Result};
pub use moderation::{
    load_banned_words, parse_banned_words, BannedWordEntry, ClassificationVerdict,
    DynamicWordFilter, StaticContentClassifier, TermCatalog, TermCategory, ValidationField,
    ValidationResult,
};

use once_cell::sync::Lazy;

/// Process-wide classifier over the bundled catalog
static DEFAULT_CLASSIFIER: Lazy<StaticContentClassifier> =
    Lazy::new(StaticContentClassifier::default);

/// Shared classifier built from the bundled catalog and default config
pub fn default_classifier() -> &'static StaticContentClassifier {
    &DEFAULT_CLASSIFIER
}

/// Classify `text` with the default classifier
pub fn detect(text: &str) -> ClassificationVerdict {
    DEFAULT_CLASSIFIER.detect(text)
}

/// Mask bundled terms in `text` with the default classifier
pub fn redact(text: &str) -> String {
    DEFAULT_CLASSIFIER.redact(text)
}

/// Validate a name + message pair with the default classifier
pub fn validate(name: &str, message: &str) -> ValidationResult {
    DEFAULT_CLASSIFIER.validate(name, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_classifier_is_built_once() {
        assert!(std::ptr::eq(default_classifier(), default_classifier()));
    }

    #[test]
    fn crate_level_helpers_use_default_classifier() {
        assert_eq!(detect("this is bobo").word.as_deref(), Some("bobo"));
        assert_eq!(redact("fuck this"), "**** this");
        assert_eq!(validate("Bobo", "hello").field, Some(ValidationField::Name));
    }

    #[test]
    fn static_then_dynamic_pipeline() {
        let name = "Maria";
        let message = "you are so annoying";
        assert!(validate(name, message).is_valid);

        let entries = parse_banned_words(&serde_json::json!([
            { "word": "annoying", "isActive": true },
            { "word": "so", "isActive": false }
        ]));
        let filter = DynamicWordFilter::default();

        assert!(filter.contains(message, &entries));
        assert_eq!(filter.redact(message, &entries), "you are so ********");
    }
}
