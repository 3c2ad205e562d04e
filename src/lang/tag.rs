//! CLDR language tags as they appear in the `main/` directory listing.
//!
//! A tag is either a bare language (`de`) or a language qualified by one or
//! more subtags (`de-AT`, `sr-Cyrl-BA`). `sr-Latn` is irregular: it carries a
//! separator but is treated as a language in its own right when variants are
//! compared, and it is written to `sr/sr.json`.

use std::fmt;

pub const SEPARATOR: char = '-';

/// The one tag with a separator that is not a variant of its language.
pub const SCRIPT_EXCEPTION: &str = "sr-Latn";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_exception(&self) -> bool {
        self.0 == SCRIPT_EXCEPTION
    }

    #[inline]
    pub fn has_separator(&self) -> bool {
        self.0.contains(SEPARATOR)
    }

    /// `true` for region/script qualified tags, except `sr-Latn`.
    #[inline]
    pub fn is_variant(&self) -> bool {
        self.has_separator() && !self.is_exception()
    }

    /// The primary language subtag: `de-AT` → `de`, `sr-Latn` → `sr`.
    ///
    /// Script, continents and the English name are all looked up with it.
    #[inline]
    pub fn language(&self) -> &str {
        self.0.split(SEPARATOR).next().unwrap_or(&self.0)
    }

    /// The tag variants of this tag are compared against.
    ///
    /// Same as [`language`](Self::language) except that `sr-Latn` is its own
    /// root.
    #[inline]
    pub fn root(&self) -> &str {
        if self.is_exception() {
            &self.0
        } else {
            self.language()
        }
    }

    /// Every shorter prefix of the tag cut at a separator, longest first.
    ///
    /// `sr-Latn-BA` yields `sr-Latn`, then `sr`.
    pub fn ancestors(&self) -> impl Iterator<Item = &str> + '_ {
        self.0
            .rmatch_indices(SEPARATOR)
            .map(move |(idx, _)| &self.0[..idx])
    }

    /// `(folder, file stem)` of the generated file.
    ///
    /// `fr-CA` → `("fr", "CA")`, `sr-Latn` → `("sr", "sr")`, `de` → `("de", "de")`.
    pub fn output_location(&self) -> (&str, &str) {
        match self.0.split_once(SEPARATOR) {
            Some((folder, _)) if self.is_exception() => (folder, folder),
            Some((folder, rest)) => (folder, rest),
            None => (&self.0, &self.0),
        }
    }

    /// A write collision on this tag is expected and stays silent.
    ///
    /// `sr-Latn` lands on the same file as `sr`.
    #[inline]
    pub fn collision_expected(&self) -> bool {
        self.is_exception()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
