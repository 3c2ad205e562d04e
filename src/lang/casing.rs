//! Locale-sensitive case mapping.
//!
//! Unicode's default case mapping is right for almost every language. The
//! exceptions live in a small static table keyed by primary language subtag;
//! anything not listed falls through to `str::to_lowercase` /
//! `str::to_uppercase`, which already handle multi-char expansions (`ß` → `SS`)
//! and the Greek final sigma.
//!
//! These are general case-mapping functions: the tables cover both directions
//! even though exemplar extraction only upper-cases lower-case, non-ASCII input.

use phf::{Map, phf_map};

#[derive(Clone, Copy, Debug)]
pub struct CaseMap {
    pub from: char,
    pub to: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct LocaleCase {
    pub lower: &'static [CaseMap],
    pub upper: &'static [CaseMap],
}

// Dotted and dotless i.
const TURKIC: LocaleCase = LocaleCase {
    lower: &[
        CaseMap { from: 'I', to: "ı" },
        CaseMap { from: 'İ', to: "i" },
    ],
    upper: &[CaseMap { from: 'i', to: "İ" }],
};

// Keep the dot above when an accented capital I is lowered.
const LITHUANIAN: LocaleCase = LocaleCase {
    lower: &[
        CaseMap { from: 'Ì', to: "i\u{0307}\u{0300}" },
        CaseMap { from: 'Í', to: "i\u{0307}\u{0301}" },
        CaseMap { from: 'Ĩ', to: "i\u{0307}\u{0303}" },
    ],
    upper: &[],
};

pub static LOCALE_CASE: Map<&'static str, LocaleCase> = phf_map! {
    "tr" => TURKIC,
    "az" => TURKIC,
    "lt" => LITHUANIAN,
};

#[inline]
pub fn locale_case(language: &str) -> Option<&'static LocaleCase> {
    LOCALE_CASE.get(language)
}

/// Lower-case `text` with the rules of `language` (a primary subtag).
pub fn to_locale_lowercase(text: &str, language: &str) -> String {
    match locale_case(language) {
        Some(rules) if !rules.lower.is_empty() => {
            map_chars(text, rules.lower, |c, out| out.extend(c.to_lowercase()))
        }
        _ => text.to_lowercase(),
    }
}

/// Upper-case `text` with the rules of `language` (a primary subtag).
pub fn to_locale_uppercase(text: &str, language: &str) -> String {
    match locale_case(language) {
        Some(rules) if !rules.upper.is_empty() => {
            map_chars(text, rules.upper, |c, out| out.extend(c.to_uppercase()))
        }
        _ => text.to_uppercase(),
    }
}

fn map_chars(text: &str, table: &[CaseMap], fallback: impl Fn(char, &mut String)) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match table.iter().find(|m| m.from == c) {
            Some(m) => out.push_str(m.to),
            None => fallback(c, &mut out),
        }
    }
    out
}
