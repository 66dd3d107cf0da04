//! Text moderation: static classifier and dynamic banned-word filter

mod classifier;
mod dynamic;
mod pattern;
mod terms;
mod verdict;

pub use classifier::StaticContentClassifier;
pub use dynamic::{load_banned_words, parse_banned_words, BannedWordEntry, DynamicWordFilter};
pub use pattern::{compile_term, mask_matches, strip_invisible};
pub use terms::{Term, TermCatalog, TermCategory, VariantGroup};
pub use verdict::{ClassificationVerdict, ValidationField, ValidationResult};
