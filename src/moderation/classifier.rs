//! Static content classifier.
//!
//! Detection runs three passes over the text and stops at the first hit:
//!
//! 1. catalog terms, in list order
//! 2. obfuscated variants, reported as their canonical term
//! 3. repetition spam (a token longer than two chars seen more than five times)
//!
//! Redaction only masks catalog terms, applied one after another over the
//! already-masked text.

use super::pattern::{compile_term, mask_matches, strip_invisible};
use super::terms::{TermCatalog, TermCategory};
use super::verdict::{ClassificationVerdict, ValidationField, ValidationResult};
use crate::config::{ClassifierConfig, MatchMode};
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;

struct CompiledTerm {
    word: String,
    category: TermCategory,
    /// `None` when the term failed to compile; it is skipped
    pattern: Option<Regex>,
}

struct CompiledVariant {
    canonical: String,
    spelling: String,
    pattern: Option<Regex>,
}

/// Classifier over a fixed [`TermCatalog`]
pub struct StaticContentClassifier {
    catalog: Arc<TermCatalog>,
    config: ClassifierConfig,
    terms: Vec<CompiledTerm>,
    variants: Vec<CompiledVariant>,
    slur_backstop: bool,
}

impl Default for StaticContentClassifier {
    fn default() -> Self {
        Self::new(TermCatalog::builtin(), ClassifierConfig::default())
    }
}

impl StaticContentClassifier {
    pub fn new(catalog: Arc<TermCatalog>, config: ClassifierConfig) -> Self {
        let terms = catalog
            .terms()
            .iter()
            .map(|t| CompiledTerm {
                word: t.word.clone(),
                category: t.category,
                pattern: compile_or_skip(&t.word, config.match_mode),
            })
            .collect();

        let variants = catalog
            .variants()
            .iter()
            .flat_map(|group| {
                group.variants.iter().map(|spelling| CompiledVariant {
                    canonical: group.canonical.clone(),
                    spelling: spelling.clone(),
                    pattern: compile_or_skip(spelling, config.match_mode),
                })
            })
            .collect();

        let slur_backstop = backstop_available(&config);

        Self {
            catalog,
            config,
            terms,
            variants,
            slur_backstop,
        }
    }

    pub fn catalog(&self) -> &TermCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify `text`
    pub fn detect(&self, text: &str) -> ClassificationVerdict {
        if text.is_empty() {
            return ClassificationVerdict::clean();
        }

        let text = if self.config.strip_invisible {
            strip_invisible(text)
        } else {
            text.to_string()
        };
        let lower = text.to_lowercase();

        if let Some(term) = self.terms.iter().find(|t| hits(&text, t.pattern.as_ref())) {
            log::debug!("Matched term {:?} ({:?})", term.word, term.category);
            return ClassificationVerdict::language(&term.word, Some(term.category));
        }

        if let Some(variant) = self.variants.iter().find(|v| hits(&text, v.pattern.as_ref())) {
            log::debug!(
                "Matched variant {:?} of {:?}",
                variant.spelling,
                variant.canonical
            );
            return ClassificationVerdict::language(
                &variant.canonical,
                self.catalog.category_of(&variant.canonical),
            );
        }

        if let Some(token) = self.repeated_token(&lower) {
            log::debug!("Excessive repetition of {:?}", token);
            return ClassificationVerdict::repetition(&token);
        }

        if self.slur_backstop {
            if let Some(verdict) = self.severe_slur_check(&text) {
                return verdict;
            }
        }

        ClassificationVerdict::clean()
    }

    /// Mask every catalog term in `text` with `*`, keeping its length
    pub fn redact(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        self.terms
            .iter()
            .filter_map(|t| t.pattern.as_ref())
            .fold(text.to_string(), |acc, pattern| mask_matches(&acc, pattern))
    }

    /// Check a display name, then a message. The name is checked first.
    pub fn validate(&self, name: &str, message: &str) -> ValidationResult {
        let verdict = self.detect(name);
        if verdict.is_inappropriate {
            return ValidationResult::rejected(ValidationField::Name, &verdict);
        }

        let verdict = self.detect(message);
        if verdict.is_inappropriate {
            return ValidationResult::rejected(ValidationField::Message, &verdict);
        }

        ValidationResult::valid()
    }

    /// First token (by first appearance) seen more than the threshold
    fn repeated_token(&self, lower: &str) -> Option<String> {
        let tokens: Vec<&str> = lower
            .split_whitespace()
            .filter(|t| t.chars().count() >= self.config.repetition_min_token_len)
            .collect();

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in &tokens {
            *counts.entry(*token).or_insert(0) += 1;
        }

        tokens
            .iter()
            .find(|t| counts.get(*t).copied().unwrap_or(0) > self.config.repetition_threshold)
            .map(|t| (*t).to_string())
    }

    #[cfg(feature = "slur-backstop")]
    fn severe_slur_check(&self, text: &str) -> Option<ClassificationVerdict> {
        use rustrict::{CensorStr, Type};

        if text.is(Type::OFFENSIVE & Type::SEVERE) {
            log::debug!("Severe slur backstop triggered");
            return Some(ClassificationVerdict {
                is_inappropriate: true,
                reason: Some("Contains severe offensive language".to_string()),
                word: None,
                category: Some(TermCategory::Slur),
            });
        }
        None
    }

    #[cfg(not(feature = "slur-backstop"))]
    fn severe_slur_check(&self, _text: &str) -> Option<ClassificationVerdict> {
        None
    }
}

/// Detection and redaction share one compiled pattern per term, so both agree
/// on Unicode case folding. A term that failed to compile never matches.
fn hits(text: &str, pattern: Option<&Regex>) -> bool {
    pattern.is_some_and(|p| p.is_match(text))
}

fn backstop_available(config: &ClassifierConfig) -> bool {
    if !config.severe_slur_backstop {
        return false;
    }
    if cfg!(feature = "slur-backstop") {
        true
    } else {
        log::warn!("severe_slur_backstop is set but the slur-backstop feature is not enabled");
        false
    }
}

fn compile_or_skip(word: &str, mode: MatchMode) -> Option<Regex> {
    match compile_term(word, mode) {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            log::warn!("Skipping term: {}", e);
            None
        }
    }
}
