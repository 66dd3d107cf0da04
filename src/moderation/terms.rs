//! Built-in disallowed-term taxonomy and obfuscated variant table.

use crate::config::read_to_string;
use crate::error::Result;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Category a disallowed term belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermCategory {
    Profanity,
    Slur,
    Violence,
    Substance,
    Sexual,
    School,
    /// Filipino informal insults
    Tagalog,
}

/// A single disallowed term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub word: String,
    pub category: TermCategory,
}

/// Obfuscated spellings of one canonical term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantGroup {
    pub canonical: String,
    pub variants: Vec<String>,
}

/// Immutable term list plus variant table.
///
/// Order is significant in both: the first matching term (then the first
/// matching variant group) is the one reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCatalog")]
pub struct TermCatalog {
    terms: Vec<Term>,
    variants: Vec<VariantGroup>,
}

/// Catalog as written on disk, before normalization
#[derive(Deserialize)]
struct RawCatalog {
    terms: Vec<Term>,
    #[serde(default)]
    variants: Vec<VariantGroup>,
}

impl From<RawCatalog> for TermCatalog {
    fn from(raw: RawCatalog) -> Self {
        Self::new(raw.terms, raw.variants)
    }
}

static BUILTIN: Lazy<Arc<TermCatalog>> = Lazy::new(|| Arc::new(TermCatalog::builtin_tables()));

impl TermCatalog {
    /// Build a catalog, lowercasing every term and variant.
    pub fn new(terms: Vec<Term>, variants: Vec<VariantGroup>) -> Self {
        let terms = terms
            .into_iter()
            .filter(|t| !t.word.trim().is_empty())
            .map(|t| Term {
                word: t.word.to_lowercase(),
                category: t.category,
            })
            .collect();
        let variants = variants
            .into_iter()
            .map(|g| VariantGroup {
                canonical: g.canonical.to_lowercase(),
                variants: g
                    .variants
                    .into_iter()
                    .filter(|v| !v.is_empty())
                    .map(|v| v.to_lowercase())
                    .collect(),
            })
            .collect();
        Self { terms, variants }
    }

    /// Shared handle to the bundled catalog
    pub fn builtin() -> Arc<TermCatalog> {
        Arc::clone(&BUILTIN)
    }

    /// Load a catalog from JSON (`{"terms": [...], "variants": [...]}`)
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&read_to_string(path.as_ref())?)
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn variants(&self) -> &[VariantGroup] {
        &self.variants
    }

    /// Category of a canonical term, if listed
    pub fn category_of(&self, word: &str) -> Option<TermCategory> {
        self.terms
            .iter()
            .find(|t| t.word == word)
            .map(|t| t.category)
    }

    fn builtin_tables() -> Self {
        use TermCategory::*;

        let groups: [(TermCategory, &[&str]); 7] = [
            (
                Profanity,
                &[
                    "fuck", "motherfucker", "shit", "bullshit", "bitch", "bastard", "asshole",
                    "dickhead", "cunt", "pussy", "wanker", "douchebag", "crap", "damn", "ass",
                ],
            ),
            (
                Slur,
                &["nigger", "nigga", "faggot", "retard", "tranny", "chink", "spic", "kike"],
            ),
            (
                Violence,
                &[
                    "kill yourself", "kys", "murder", "shoot up", "stab you", "bomb threat",
                    "suicide",
                ],
            ),
            (
                Substance,
                &["cocaine", "heroin", "methamphetamine", "marijuana", "weed", "ecstasy", "lsd"],
            ),
            (
                Sexual,
                &["porn", "nudes", "naked", "blowjob", "dildo", "horny", "sexy", "hot"],
            ),
            (School, &["stupid", "idiot", "loser", "dumbass", "ugly", "fatso"]),
            (
                Tagalog,
                &[
                    "putangina", "tangina", "puta", "gago", "ulol", "tarantado", "bobo",
                    "inutil", "leche", "pakyu", "bwisit", "hayop ka", "tanga",
                ],
            ),
        ];

        let terms = groups
            .iter()
            .flat_map(|(category, words)| {
                words.iter().map(move |w| Term {
                    word: (*w).to_string(),
                    category: *category,
                })
            })
            .collect();

        let variant_rows: &[(&str, &[&str])] = &[
            ("fuck", &["f*ck", "f**k", "fck", "fuk", "phuck", "f u c k", "fvck"]),
            ("shit", &["sh*t", "sh1t", "$hit", "shyt"]),
            ("bitch", &["b*tch", "b1tch", "biatch", "bytch"]),
            ("asshole", &["a$$hole", "@sshole", "a**hole"]),
            ("cunt", &["c*nt", "kunt"]),
            ("nigger", &["n*gger", "n1gger", "nigg3r"]),
            ("faggot", &["f*ggot", "f@ggot", "fag0t"]),
            ("retard", &["r3tard", "ret@rd"]),
            ("porn", &["p0rn", "pr0n"]),
            ("putangina", &["put4ngina", "ptngina", "p*tangina"]),
            ("gago", &["g@go", "g4g0", "gag0"]),
            ("bobo", &["b0b0", "b0bo", "bob0"]),
            ("tanga", &["t@nga", "t4nga", "tang@"]),
            ("ulol", &["ul0l", "0lol"]),
        ];

        let variants = variant_rows
            .iter()
            .map(|(canonical, spellings)| VariantGroup {
                canonical: (*canonical).to_string(),
                variants: spellings.iter().map(|s| (*s).to_string()).collect(),
            })
            .collect();

        Self::new(terms, variants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_shared() {
        let a = TermCatalog::builtin();
        let b = TermCatalog::builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn builtin_terms_are_lowercase_and_non_empty() {
        let catalog = TermCatalog::builtin();

        assert!(!catalog.terms().is_empty());
        for term in catalog.terms() {
            assert_eq!(term.word, term.word.to_lowercase());
            assert!(!term.word.is_empty());
        }
    }

    #[test]
    fn every_variant_group_points_at_a_listed_term() {
        let catalog = TermCatalog::builtin();
        for group in catalog.variants() {
            assert!(
                catalog.category_of(&group.canonical).is_some(),
                "{} has no term entry",
                group.canonical
            );
        }
    }

    #[test]
    fn all_categories_are_populated() {
        let catalog = TermCatalog::builtin();
        for category in [
            TermCategory::Profanity,
            TermCategory::Slur,
            TermCategory::Violence,
            TermCategory::Substance,
            TermCategory::Sexual,
            TermCategory::School,
            TermCategory::Tagalog,
        ] {
            assert!(catalog.terms().iter().any(|t| t.category == category));
        }
    }

    #[test]
    fn catalog_from_json_normalizes_case_and_drops_blanks() {
        let catalog = TermCatalog::from_json(
            r#"{
                "terms": [
                    {"word": "Zonk", "category": "profanity"},
                    {"word": "  ", "category": "school"}
                ],
                "variants": [{"canonical": "ZONK", "variants": ["Z0NK", ""]}]
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.terms().len(), 1);
        assert_eq!(catalog.terms()[0].word, "zonk");
        assert_eq!(catalog.variants()[0].canonical, "zonk");
        assert_eq!(catalog.variants()[0].variants, vec!["z0nk".to_string()]);
    }

    #[test]
    fn variants_are_optional_in_json() {
        let catalog =
            TermCatalog::from_json(r#"{"terms": [{"word": "zonk", "category": "slur"}]}"#)
                .unwrap();
        assert!(catalog.variants().is_empty());
        assert_eq!(catalog.category_of("zonk"), Some(TermCategory::Slur));
    }

    #[test]
    fn direct_deserialize_is_normalized() {
        let catalog: TermCatalog = serde_json::from_value(serde_json::json!({
            "terms": [
                {"word": "ZONK", "category": "profanity"},
                {"word": "", "category": "school"}
            ],
            "variants": [{"canonical": "Zonk", "variants": ["Z0NK"]}]
        }))
        .unwrap();

        assert_eq!(catalog.terms().len(), 1);
        assert_eq!(catalog.terms()[0].word, "zonk");
        assert_eq!(catalog.variants()[0].canonical, "zonk");
        assert_eq!(catalog.variants()[0].variants, vec!["z0nk".to_string()]);
    }

    #[test]
    fn serialized_catalog_reloads_unchanged() {
        let catalog = TermCatalog::builtin();
        let json = serde_json::to_string(catalog.as_ref()).unwrap();
        assert_eq!(TermCatalog::from_json(&json).unwrap(), *catalog);
    }
}
