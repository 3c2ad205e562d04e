//! Per-language metadata.
//!
//! Script, continents and English name describe the *language* and are looked
//! up with its primary subtag. The native name describes the exact tag, so
//! `de-AT` carries "Österreichisches Deutsch" while sharing `de`'s script.

use crate::{
    corpus::{DisplayNames, LanguageData},
    lang::{ContinentIndex, ContinentList, LanguageTag},
    record::Metadata,
};

pub struct MetadataAssembler<'a> {
    language_data: &'a LanguageData,
    english: &'a DisplayNames,
    continents: &'a ContinentIndex,
}

impl<'a> MetadataAssembler<'a> {
    pub fn new(
        language_data: &'a LanguageData,
        english: &'a DisplayNames,
        continents: &'a ContinentIndex,
    ) -> Self {
        Self {
            language_data,
            english,
            continents,
        }
    }

    pub fn assemble(&self, tag: &LanguageTag, native: Option<&str>) -> Metadata {
        // Primary subtag, not the root tag: sr-Latn takes sr's tables.
        let language = tag.language();
        Metadata {
            alphabet: self.script(language).unwrap_or_default().to_owned(),
            continent: self.continents(language),
            language: self.english.get(language).unwrap_or_default().to_owned(),
            native: native.unwrap_or_default().to_owned(),
            ..Default::default()
        }
    }

    /// First listed script.
    pub fn script(&self, language: &str) -> Option<&'a str> {
        self.language_data
            .get(language)
            .and_then(|info| info.scripts.first())
            .map(String::as_str)
    }

    /// Continents of the primary territories followed by the
    /// `-alt-secondary` ones.
    pub fn continents(&self, language: &str) -> ContinentList {
        let primary = self.language_data.get(language).into_iter();
        let secondary = self.language_data.secondary(language).into_iter();
        let territories = primary
            .chain(secondary)
            .flat_map(|info| info.territories.iter().map(String::as_str));
        self.continents.continents_of(territories)
    }
}
