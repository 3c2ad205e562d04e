//! Diacritic resolution: exemplar character → unaccented base.
//!
//! Uses **NFD (Canonical Decomposition)** before stripping marks, so
//! compatibility characters keep their identity:
//! - `é` → `e` + combining acute → `e`
//! - `ḉ` → `c` + cedilla + acute → `c`
//! - `ł`, `đ`, `ø` have no canonical decomposition and are not diacritics
//! - ligatures (`ﬁ`) and superscripts (`²`) are left alone

use crate::unicode::{base_letters, is_cluster};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A qualifying exemplar character and its base. `base` is never empty and
/// never equal to `character`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiacriticMapping {
    pub character: String,
    pub base: String,
}

/// Resolve one exemplar token. `None` for clusters and non-diacritics.
pub fn resolve(entry: &str) -> Option<DiacriticMapping> {
    if entry.is_empty() || is_cluster(entry) {
        return None;
    }
    let base = base_letters(entry);
    if base.is_empty() || base == entry {
        return None;
    }
    Some(DiacriticMapping {
        character: entry.to_owned(),
        base,
    })
}

/// Character → base, keyed by character, in first-seen order.
///
/// Serializes as `{ "<char>": { "mapping": { "base": "<base>" } }, … }`.
/// Equality ignores key order.
#[derive(Debug, Clone, Default)]
pub struct DiacriticTable {
    entries: Vec<DiacriticMapping>,
}

impl DiacriticTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every entry and keep the diacritics.
    pub fn from_alphabet<I, S>(alphabet: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for entry in alphabet {
            if let Some(mapping) = resolve(entry.as_ref()) {
                table.insert(mapping);
            }
        }
        table
    }

    /// Insert, replacing the base of an existing character in place.
    pub fn insert(&mut self, mapping: DiacriticMapping) {
        match self
            .entries
            .iter_mut()
            .find(|m| m.character == mapping.character)
        {
            Some(existing) => existing.base = mapping.base,
            None => self.entries.push(mapping),
        }
    }

    pub fn get(&self, character: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|m| m.character == character)
            .map(|m| m.base.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiacriticMapping> {
        self.entries.iter()
    }
}

impl PartialEq for DiacriticTable {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|m| other.get(&m.character) == Some(m.base.as_str()))
    }
}

impl Eq for DiacriticTable {}

impl Serialize for DiacriticTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        struct Base<'a> {
            base: &'a str,
        }
        #[derive(serde::Serialize)]
        struct Entry<'a> {
            mapping: Base<'a>,
        }

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for m in &self.entries {
            map.serialize_entry(&m.character, &Entry {
                mapping: Base { base: &m.base },
            })?;
        }
        map.end()
    }
}
