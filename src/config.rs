use crate::{dedup::Baseline, pipeline::RunOptions, reference::strip_json_comments};
use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config `{}`: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Paths and switches of one extraction run. Missing keys take the defaults
/// of the usual repository layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the cldr-json tree (`main/`, `supplemental/`).
    pub cldr_dir: PathBuf,
    pub continents: PathBuf,
    pub validated: PathBuf,
    /// Output template; the built-in one when unset.
    pub template: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub baseline: Baseline,
    pub dry_run: bool,
    pub purge: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cldr_dir: PathBuf::from("node_modules/cldr-data"),
            continents: PathBuf::from("build/data/continents.tsv"),
            validated: PathBuf::from("src/validated-languages.json"),
            template: None,
            output_dir: PathBuf::from("src"),
            baseline: Baseline::default(),
            dry_run: false,
            purge: true,
        }
    }
}

impl Config {
    /// Parse a JSON config; comments are allowed.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(&strip_json_comments(text))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::Json {
            path: path.to_owned(),
            source,
        })
    }

    pub fn options(&self) -> RunOptions {
        RunOptions {
            baseline: self.baseline,
            dry_run: self.dry_run,
            purge: self.purge,
        }
    }
}
