//! Locale data access.
//!
//! [`Corpus`] is the seam between the extraction core and wherever the CLDR
//! data lives. [`CldrCorpus`] reads the `cldr-json` tree from disk;
//! [`MemoryCorpus`] holds everything in maps and backs the tests.

use crate::lang::LanguageTag;
use serde::{Deserialize, de::DeserializeOwned};
use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("no {file} data for `{tag}`")]
    Missing { tag: String, file: &'static str },

    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse `{}`: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CorpusError {
    /// Missing data skips the tag; everything else is a broken corpus.
    #[inline]
    pub fn is_missing(&self) -> bool {
        matches!(self, CorpusError::Missing { .. })
    }
}

/// Script and territory information of one `languageData` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LanguageInfo {
    #[serde(rename = "_scripts", default)]
    pub scripts: Vec<String>,
    #[serde(rename = "_territories", default)]
    pub territories: Vec<String>,
}

/// `supplemental/languageData`, keyed by language (and `<lang>-alt-secondary`).
#[derive(Debug, Clone, Default)]
pub struct LanguageData(HashMap<String, LanguageInfo>);

impl LanguageData {
    pub fn new(entries: HashMap<String, LanguageInfo>) -> Self {
        Self(entries)
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&LanguageInfo> {
        self.0.get(key)
    }

    /// The `<language>-alt-secondary` entry, if any.
    pub fn secondary(&self, language: &str) -> Option<&LanguageInfo> {
        self.0.get(&format!("{language}-alt-secondary"))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, LanguageInfo)> for LanguageData {
    fn from_iter<T: IntoIterator<Item = (K, LanguageInfo)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Language display names of one locale (`localeDisplayNames.languages`).
#[derive(Debug, Clone, Default)]
pub struct DisplayNames(HashMap<String, String>);

impl DisplayNames {
    pub fn new(names: HashMap<String, String>) -> Self {
        Self(names)
    }

    #[inline]
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.0.get(tag).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DisplayNames {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

pub trait Corpus {
    /// Every language tag, roots immediately before their variants.
    fn tags(&self) -> Result<Vec<LanguageTag>, CorpusError>;

    /// Raw `exemplarCharacters` string of `tag`.
    fn exemplar_characters(&self, tag: &LanguageTag) -> Result<String, CorpusError>;

    /// Display name of `tag` in its own language, if the corpus has one.
    fn native_name(&self, tag: &LanguageTag) -> Result<Option<String>, CorpusError>;

    fn language_data(&self) -> Result<LanguageData, CorpusError>;

    /// Language display names in English.
    fn english_names(&self) -> Result<DisplayNames, CorpusError>;
}

// ---------------------------------------------------------------------------
// cldr-json on disk
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct MainFile<T> {
    main: HashMap<String, T>,
}

#[derive(Deserialize)]
struct CharactersLocale {
    characters: Characters,
}

#[derive(Deserialize)]
struct Characters {
    #[serde(rename = "exemplarCharacters")]
    exemplar_characters: Option<String>,
}

#[derive(Deserialize)]
struct LanguagesLocale {
    #[serde(rename = "localeDisplayNames")]
    display_names: LocaleDisplayNames,
}

#[derive(Deserialize)]
struct LocaleDisplayNames {
    #[serde(default)]
    languages: HashMap<String, String>,
}

#[derive(Deserialize)]
struct SupplementalFile {
    supplemental: Supplemental,
}

#[derive(Deserialize)]
struct Supplemental {
    #[serde(rename = "languageData")]
    language_data: HashMap<String, LanguageInfo>,
}

const CHARACTERS: &str = "characters.json";
const LANGUAGES: &str = "languages.json";

/// The `cldr-json` layout: `main/<tag>/{characters,languages}.json` and
/// `supplemental/languageData.json`.
#[derive(Debug, Clone)]
pub struct CldrCorpus {
    root: PathBuf,
}

impl CldrCorpus {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn main_dir(&self) -> PathBuf {
        self.root.join("main")
    }

    fn locale_file(&self, tag: &str, file: &str) -> PathBuf {
        self.main_dir().join(tag).join(file)
    }

    fn read_json<T: DeserializeOwned>(
        path: &Path,
        tag: &str,
        file: &'static str,
    ) -> Result<T, CorpusError> {
        let text = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                CorpusError::Missing {
                    tag: tag.to_owned(),
                    file,
                }
            } else {
                CorpusError::Io {
                    path: path.to_owned(),
                    source,
                }
            }
        })?;
        serde_json::from_str(&text).map_err(|source| CorpusError::Json {
            path: path.to_owned(),
            source,
        })
    }

    fn display_names(&self, tag: &str) -> Result<HashMap<String, String>, CorpusError> {
        let path = self.locale_file(tag, LANGUAGES);
        let file: MainFile<LanguagesLocale> = Self::read_json(&path, tag, LANGUAGES)?;
        file.main
            .into_iter()
            .find(|(key, _)| key == tag)
            .map(|(_, locale)| locale.display_names.languages)
            .ok_or_else(|| CorpusError::Missing {
                tag: tag.to_owned(),
                file: LANGUAGES,
            })
    }
}

impl Corpus for CldrCorpus {
    fn tags(&self) -> Result<Vec<LanguageTag>, CorpusError> {
        let dir = self.main_dir();
        let io_err = |source| CorpusError::Io {
            path: dir.clone(),
            source,
        };
        let mut tags = Vec::new();
        for entry in fs::read_dir(&dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            if !entry.file_type().map_err(io_err)?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                tags.push(LanguageTag::new(name));
            }
        }
        // read_dir order is platform-defined; byte order keeps `de` before `de-AT`
        tags.sort();
        debug!(count = tags.len(), dir = %dir.display(), "discovered locale directories");
        Ok(tags)
    }

    fn exemplar_characters(&self, tag: &LanguageTag) -> Result<String, CorpusError> {
        let path = self.locale_file(tag.as_str(), CHARACTERS);
        let file: MainFile<CharactersLocale> = Self::read_json(&path, tag.as_str(), CHARACTERS)?;
        file.main
            .into_iter()
            .find(|(key, _)| key == tag.as_str())
            .and_then(|(_, locale)| locale.characters.exemplar_characters)
            .ok_or_else(|| CorpusError::Missing {
                tag: tag.to_string(),
                file: CHARACTERS,
            })
    }

    fn native_name(&self, tag: &LanguageTag) -> Result<Option<String>, CorpusError> {
        match self.display_names(tag.as_str()) {
            Ok(mut names) => Ok(names.remove(tag.as_str())),
            Err(e) if e.is_missing() => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn language_data(&self) -> Result<LanguageData, CorpusError> {
        let path = self.root.join("supplemental").join("languageData.json");
        let file: SupplementalFile = Self::read_json(&path, "supplemental", "languageData.json")?;
        Ok(LanguageData::new(file.supplemental.language_data))
    }

    fn english_names(&self) -> Result<DisplayNames, CorpusError> {
        self.display_names("en").map(DisplayNames::new)
    }
}

// ---------------------------------------------------------------------------
// In memory
// ---------------------------------------------------------------------------

/// A corpus held in memory. Tags are reported in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    tags: Vec<LanguageTag>,
    exemplars: HashMap<LanguageTag, String>,
    natives: HashMap<LanguageTag, String>,
    language_data: LanguageData,
    english: DisplayNames,
}

impl MemoryCorpus {
    pub fn new(language_data: LanguageData, english: DisplayNames) -> Self {
        Self {
            language_data,
            english,
            ..Default::default()
        }
    }

    /// Add a locale. `exemplars: None` models a locale without a
    /// `characters.json`.
    pub fn with_locale(
        mut self,
        tag: &str,
        exemplars: Option<&str>,
        native: Option<&str>,
    ) -> Self {
        let tag = LanguageTag::new(tag);
        if let Some(exemplars) = exemplars {
            self.exemplars.insert(tag.clone(), exemplars.to_owned());
        }
        if let Some(native) = native {
            self.natives.insert(tag.clone(), native.to_owned());
        }
        self.tags.push(tag);
        self
    }
}

impl Corpus for MemoryCorpus {
    fn tags(&self) -> Result<Vec<LanguageTag>, CorpusError> {
        Ok(self.tags.clone())
    }

    fn exemplar_characters(&self, tag: &LanguageTag) -> Result<String, CorpusError> {
        self.exemplars
            .get(tag)
            .cloned()
            .ok_or_else(|| CorpusError::Missing {
                tag: tag.to_string(),
                file: CHARACTERS,
            })
    }

    fn native_name(&self, tag: &LanguageTag) -> Result<Option<String>, CorpusError> {
        Ok(self.natives.get(tag).cloned())
    }

    fn language_data(&self) -> Result<LanguageData, CorpusError> {
        Ok(self.language_data.clone())
    }

    fn english_names(&self) -> Result<DisplayNames, CorpusError> {
        Ok(self.english.clone())
    }
}
