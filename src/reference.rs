//! Static reference tables loaded once at startup: the continent/territory
//! cross-reference and the list of hand-validated languages.
//!
//! Any failure here is fatal; every record depends on them.

use crate::lang::{Continent, ContinentIndex};
use std::{
    collections::HashSet,
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed continent table: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown continent `{code}` on line {line}")]
    UnknownContinent { code: String, line: u64 },

    #[error("malformed validated language list: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// continents.tsv
// ---------------------------------------------------------------------------

/// Parse `<continent>\t<territory>` rows. Rows without a territory are skipped.
pub fn read_continents<R: Read>(reader: R) -> Result<ContinentIndex, ReferenceError> {
    let mut rows = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut index = ContinentIndex::new();
    for row in rows.records() {
        let row = row?;
        let territory = row.get(1).map(str::trim).unwrap_or_default();
        if territory.is_empty() {
            continue;
        }
        let code = row.get(0).map(str::trim).unwrap_or_default();
        let continent = Continent::from_code(code).ok_or_else(|| ReferenceError::UnknownContinent {
            code: code.to_owned(),
            line: row.position().map_or(0, |p| p.line()),
        })?;
        index.insert(continent, territory);
    }
    Ok(index)
}

pub fn load_continents(path: &Path) -> Result<ContinentIndex, ReferenceError> {
    let file = fs::File::open(path).map_err(|source| ReferenceError::Io {
        path: path.to_owned(),
        source,
    })?;
    let index = read_continents(file)?;
    debug!(territories = index.territory_count(), path = %path.display(), "loaded continent index");
    Ok(index)
}

// ---------------------------------------------------------------------------
// validated-languages.json
// ---------------------------------------------------------------------------

/// Languages whose files are curated by hand and never regenerated.
#[derive(Debug, Clone, Default)]
pub struct ValidatedSet(HashSet<String>);

impl ValidatedSet {
    /// Parse a JSON array of tags; `//` and `/* */` comments are allowed.
    pub fn parse(text: &str) -> Result<Self, ReferenceError> {
        let tags: Vec<String> = serde_json::from_str(&strip_json_comments(text))?;
        Ok(Self(tags.into_iter().collect()))
    }

    pub fn load(path: &Path) -> Result<Self, ReferenceError> {
        let text = fs::read_to_string(path).map_err(|source| ReferenceError::Io {
            path: path.to_owned(),
            source,
        })?;
        let set = Self::parse(&text)?;
        debug!(languages = set.len(), path = %path.display(), "loaded validated languages");
        Ok(set)
    }

    #[inline]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ValidatedSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Blank out `//` and `/* */` comments that are not inside string literals.
///
/// Line breaks inside comments are kept so parse errors still point at the
/// right line.
pub fn strip_json_comments(text: &str) -> String {
    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Code,
        Str,
        StrEscape,
        Line,
        Block,
    }

    let mut out = String::with_capacity(text.len());
    let mut state = State::Code;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        state = match (state, c) {
            (State::Code, '"') => {
                out.push(c);
                State::Str
            }
            (State::Code, '/') if chars.peek() == Some(&'/') => {
                chars.next();
                State::Line
            }
            (State::Code, '/') if chars.peek() == Some(&'*') => {
                chars.next();
                State::Block
            }
            (State::Code, _) => {
                out.push(c);
                State::Code
            }
            (State::Str, '\\') => {
                out.push(c);
                State::StrEscape
            }
            (State::Str, '"') => {
                out.push(c);
                State::Code
            }
            (State::Str | State::StrEscape, _) => {
                out.push(c);
                State::Str
            }
            (State::Line, '\n') => {
                out.push(c);
                State::Code
            }
            (State::Line, _) => State::Line,
            (State::Block, '*') if chars.peek() == Some(&'/') => {
                chars.next();
                State::Code
            }
            (State::Block, '\n') => {
                out.push(c);
                State::Block
            }
            (State::Block, _) => State::Block,
        };
    }
    out
}
