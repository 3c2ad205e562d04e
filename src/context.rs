// src/context.rs
// Everything one extraction run needs, owned by that run and dropped with it.

use crate::{
    alphabet::extract_alphabet,
    config::Config,
    corpus::{Corpus, CorpusError, DisplayNames, LanguageData},
    diacritic::DiacriticTable,
    lang::{ContinentIndex, LanguageTag},
    metadata::MetadataAssembler,
    pipeline::ExtractError,
    record::LanguageRecord,
    reference::{ValidatedSet, load_continents},
};
use std::collections::{HashMap, hash_map::Entry};
use tracing::info;

/// Raw locale data of one tag, as loaded from the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub exemplars: String,
    pub native: Option<String>,
}

/// Reference tables plus the cache of loaded locales.
#[derive(Debug, Default)]
pub struct Context {
    pub continents: ContinentIndex,
    pub validated: ValidatedSet,
    pub language_data: LanguageData,
    pub english: DisplayNames,
    locales: HashMap<LanguageTag, Locale>,
}

impl Context {
    pub fn new(
        continents: ContinentIndex,
        validated: ValidatedSet,
        language_data: LanguageData,
        english: DisplayNames,
    ) -> Self {
        Self {
            continents,
            validated,
            language_data,
            english,
            locales: HashMap::new(),
        }
    }

    /// Load every static table. Any failure here aborts the run.
    pub fn load<C: Corpus>(config: &Config, corpus: &C) -> Result<Self, ExtractError> {
        let continents = load_continents(&config.continents)?;
        let validated = ValidatedSet::load(&config.validated)?;
        let language_data = corpus.language_data()?;
        let english = corpus.english_names()?;
        info!(
            territories = continents.territory_count(),
            validated = validated.len(),
            languages = language_data.len(),
            "reference data loaded"
        );
        Ok(Self::new(continents, validated, language_data, english))
    }

    /// Load `tag` from the corpus once; later calls hit the cache.
    pub fn load_locale<C: Corpus>(
        &mut self,
        corpus: &C,
        tag: &LanguageTag,
    ) -> Result<&Locale, CorpusError> {
        match self.locales.entry(tag.clone()) {
            Entry::Occupied(cached) => Ok(cached.into_mut()),
            Entry::Vacant(slot) => {
                let locale = Locale {
                    exemplars: corpus.exemplar_characters(tag)?,
                    native: corpus.native_name(tag)?,
                };
                Ok(slot.insert(locale))
            }
        }
    }

    #[inline]
    pub fn locale(&self, tag: &LanguageTag) -> Option<&Locale> {
        self.locales.get(tag)
    }

    pub fn assembler(&self) -> MetadataAssembler<'_> {
        MetadataAssembler::new(&self.language_data, &self.english, &self.continents)
    }

    /// Build the record of a loaded tag. `None` if the tag was never loaded.
    pub fn build_record(&self, tag: &LanguageTag) -> Option<LanguageRecord> {
        let locale = self.locale(tag)?;
        let alphabet = extract_alphabet(&locale.exemplars, tag.language());
        let metadata = self.assembler().assemble(tag, locale.native.as_deref());
        Some(LanguageRecord::new(metadata, DiacriticTable::from_alphabet(alphabet)))
    }
}
