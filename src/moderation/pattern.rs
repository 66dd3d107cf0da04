//! Literal-term pattern compilation and asterisk redaction.

use crate::config::MatchMode;
use crate::error::{FilterError, Result};
use regex::{Regex, RegexBuilder};

/// Compile `term` into a case-insensitive pattern that matches it literally.
///
/// In word-boundary mode an end of the term is only anchored with `\b` when
/// that end is itself a word character; "$hit" still matches after a space.
pub fn compile_term(term: &str, mode: MatchMode) -> Result<Regex> {
    let escaped = regex::escape(term);
    let source = match mode {
        MatchMode::Substring => escaped,
        MatchMode::WordBoundary => {
            let lead = if term.chars().next().is_some_and(is_word_char) {
                r"\b"
            } else {
                ""
            };
            let tail = if term.chars().next_back().is_some_and(is_word_char) {
                r"\b"
            } else {
                ""
            };
            format!("{lead}{escaped}{tail}")
        }
    };

    RegexBuilder::new(&source)
        .case_insensitive(true)
        .build()
        .map_err(|source| FilterError::InvalidPattern {
            word: term.to_string(),
            source,
        })
}

/// Replace every match of `pattern` with one `*` per matched character.
pub fn mask_matches(text: &str, pattern: &Regex) -> String {
    pattern
        .replace_all(text, |caps: &regex::Captures| {
            let len = caps.get(0).map_or(0, |m| m.as_str().chars().count());
            "*".repeat(len)
        })
        .into_owned()
}

/// Strip zero-width and invisible Unicode characters that could be used to
/// split a term and slip past matching.
pub fn strip_invisible(text: &str) -> String {
    text.chars().filter(|c| !is_invisible(*c)).collect()
}

fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{200b}' // zero-width space
        | '\u{200c}' // zero-width non-joiner
        | '\u{200d}' // zero-width joiner
        | '\u{200e}' // LTR mark
        | '\u{200f}' // RTL mark
        | '\u{2060}' // word joiner
        | '\u{feff}' // BOM / zero-width no-break space
        | '\u{00ad}' // soft hyphen
        | '\u{034f}' // combining grapheme joiner
        | '\u{061c}' // Arabic letter mark
        | '\u{115f}' // Hangul choseong filler
        | '\u{1160}' // Hangul jungseong filler
        | '\u{17b4}' // Khmer vowel inherent aq
        | '\u{17b5}' // Khmer vowel inherent aa
        | '\u{180e}' // Mongolian vowel separator
    )
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
