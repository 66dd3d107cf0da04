//! Result types returned to callers

use super::terms::TermCategory;
use serde::{Deserialize, Serialize};

/// Outcome of a single detection call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationVerdict {
    pub is_inappropriate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Canonical offending term (or the repeated token)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<TermCategory>,
}

impl ClassificationVerdict {
    pub fn clean() -> Self {
        Self::default()
    }

    pub fn language(word: &str, category: Option<TermCategory>) -> Self {
        Self {
            is_inappropriate: true,
            reason: Some(format!("Contains inappropriate language: \"{word}\"")),
            word: Some(word.to_string()),
            category,
        }
    }

    pub fn repetition(word: &str) -> Self {
        Self {
            is_inappropriate: true,
            reason: Some(format!("Excessive repetition of word: \"{word}\"")),
            word: Some(word.to_string()),
            category: None,
        }
    }
}

/// Which input of a name + message pair failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationField {
    Name,
    Message,
}

impl ValidationField {
    fn label(self) -> &'static str {
        match self {
            ValidationField::Name => "Name",
            ValidationField::Message => "Message",
        }
    }
}

/// Outcome of a combined name + message check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<ValidationField>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
            field: None,
        }
    }

    pub fn rejected(field: ValidationField, verdict: &ClassificationVerdict) -> Self {
        let reason = verdict.reason.as_deref().unwrap_or("inappropriate content");
        Self {
            is_valid: false,
            error: Some(format!(
                "{} contains inappropriate content: {}",
                field.label(),
                reason
            )),
            field: Some(field),
        }
    }
}
