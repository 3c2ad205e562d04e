use crate::{diacritic::DiacriticTable, lang::ContinentList, lang::LanguageTag};
use serde::Serialize;

/// Provenance of every generated record.
pub const SOURCE_URL: &str =
    "http://www.unicode.org/cldr/charts/latest/by_type/core_data.alphabetic_information.main.html";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// Primary script, e.g. `Latn`. Empty when unknown.
    pub alphabet: String,
    pub continent: ContinentList,
    /// English display name of the language.
    pub language: String,
    /// Display name of the tag in its own language.
    pub native: String,
    pub source: Vec<String>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            alphabet: String::new(),
            continent: ContinentList::new(),
            language: String::new(),
            native: String::new(),
            source: vec![SOURCE_URL.to_owned()],
        }
    }
}

/// The unit of output: metadata plus the diacritic table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LanguageRecord {
    pub metadata: Metadata,
    pub data: DiacriticTable,
}

impl LanguageRecord {
    pub fn new(metadata: Metadata, data: DiacriticTable) -> Self {
        Self { metadata, data }
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }

    /// Two-space indented JSON, the body placed into the output template.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A record together with the tag it was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageResult {
    pub tag: LanguageTag,
    pub record: LanguageRecord,
}
