//! Exemplar alphabet → candidate characters.
//!
//! CLDR lists exemplar characters lower-case only, e.g.
//! `"[a á â b c d e é è ê ë f … {dž} … z]"`. Plain ASCII letters can never be
//! diacritics, so they are dropped before anything else; what is left is
//! emitted once in lower case and once in upper case, using the casing rules
//! of the language itself.

use crate::lang::{to_locale_lowercase, to_locale_uppercase};

/// Candidate characters of an exemplar set, lower case first then upper case.
///
/// `language` is the primary subtag whose casing rules apply. Clusters such
/// as `{dž}` are passed through as single tokens; the resolver rejects them.
pub fn extract_alphabet(exemplars: &str, language: &str) -> Vec<String> {
    let inner = strip_brackets(exemplars.trim());
    let remaining: String = inner.chars().filter(|c| !c.is_ascii_alphabetic()).collect();
    let remaining = remaining.trim();
    if remaining.is_empty() {
        return Vec::new();
    }

    let lower = to_locale_lowercase(remaining, language);
    let upper = to_locale_uppercase(remaining, language);
    lower
        .split_whitespace()
        .chain(upper.split_whitespace())
        .map(str::to_owned)
        .collect()
}

#[inline]
fn strip_brackets(s: &str) -> &str {
    let s = s.strip_prefix('[').unwrap_or(s);
    s.strip_suffix(']').unwrap_or(s)
}
