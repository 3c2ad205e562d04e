//! Writing generated language files.
//!
//! Files land in `<root>/<folder>/<stem>.json` (see
//! [`LanguageTag::output_location`]). An existing file is never overwritten;
//! the collision is reported and the run moves on.

use crate::{
    lang::LanguageTag,
    record::LanguageRecord,
    reference::ValidatedSet,
};
use std::{
    fs, io,
    io::Write,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{debug, info};

/// Replaced by the record JSON, matched case-insensitively.
pub const PLACEHOLDER: &str = "//<%= contents %>";

const DEFAULT_TEMPLATE: &str = "\
/**
 * Generated from the CLDR exemplar characters of this locale.
 * Review the mappings before adding the language to validated-languages.json.
 */
//<%= contents %>
";

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("`{}` already exists", path.display())]
    Collision { path: PathBuf },

    #[error("i/o error on `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("template has no `{}` placeholder", PLACEHOLDER)]
    Template,
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> WriteError + '_ {
    move |source| WriteError::Io {
        path: path.to_owned(),
        source,
    }
}

/// Write `body` into the freshly created `path`. On failure the partial file
/// is removed so the next run does not see it as a collision.
fn fill<W: Write>(path: &Path, mut out: W, body: &[u8]) -> Result<(), WriteError> {
    match out.write_all(body).and_then(|()| out.flush()) {
        Ok(()) => Ok(()),
        Err(e) => {
            drop(out);
            let _ = fs::remove_file(path);
            Err(io_error(path)(e))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn parse(text: impl Into<String>) -> Result<Self, WriteError> {
        let text = text.into();
        if !text.to_ascii_lowercase().contains(PLACEHOLDER) {
            return Err(WriteError::Template);
        }
        Ok(Self { text })
    }

    pub fn load(path: &Path) -> Result<Self, WriteError> {
        Self::parse(fs::read_to_string(path).map_err(io_error(path))?)
    }

    /// Substitute every placeholder with `contents`.
    pub fn render(&self, contents: &str) -> String {
        // ASCII lowering keeps byte offsets intact
        let folded = self.text.to_ascii_lowercase();
        let mut out = String::with_capacity(self.text.len() + contents.len());
        let mut last = 0;
        for (idx, _) in folded.match_indices(PLACEHOLDER) {
            out.push_str(&self.text[last..idx]);
            out.push_str(contents);
            last = idx + PLACEHOLDER.len();
        }
        out.push_str(&self.text[last..]);
        out
    }
}

impl Default for Template {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEMPLATE.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(PathBuf),
    /// The `sr-Latn` → `sr/sr.json` collision; nothing written, nothing to report.
    ExpectedCollision(PathBuf),
}

pub struct OutputWriter {
    root: PathBuf,
    template: Template,
}

impl OutputWriter {
    pub fn new(root: impl Into<PathBuf>, template: Template) -> Self {
        Self {
            root: root.into(),
            template,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, tag: &LanguageTag) -> PathBuf {
        let (folder, stem) = tag.output_location();
        self.root.join(folder).join(format!("{stem}.json"))
    }

    pub fn write(
        &self,
        tag: &LanguageTag,
        record: &LanguageRecord,
    ) -> Result<WriteOutcome, WriteError> {
        let path = self.path_for(tag);
        if let Some(folder) = path.parent() {
            fs::create_dir_all(folder).map_err(io_error(folder))?;
        }

        let body = self.template.render(&record.to_json_pretty()?);
        let file = match fs::OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return if tag.collision_expected() {
                    debug!(tag = %tag, path = %path.display(), "expected collision");
                    Ok(WriteOutcome::ExpectedCollision(path))
                } else {
                    Err(WriteError::Collision { path })
                };
            }
            Err(e) => return Err(io_error(&path)(e)),
        };
        fill(&path, file, body.as_bytes())?;
        debug!(
            tag = %tag,
            path = %path.display(),
            entries = record.data.len(),
            "wrote language file"
        );
        Ok(WriteOutcome::Written(path))
    }

    /// Remove every generated language folder, keeping the folders of
    /// validated languages. Returns the removed folders.
    pub fn purge(&self, validated: &ValidatedSet) -> Result<Vec<PathBuf>, WriteError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error(&self.root)(e)),
        };

        let mut removed = Vec::new();
        for entry in entries {
            let entry = entry.map_err(io_error(&self.root))?;
            let path = entry.path();
            if !entry.file_type().map_err(io_error(&path))?.is_dir() {
                continue;
            }
            let name = entry.file_name();
            let keep = name
                .to_str()
                .is_some_and(|n| validated.contains(LanguageTag::new(n).language()));
            if keep {
                continue;
            }
            fs::remove_dir_all(&path).map_err(io_error(&path))?;
            removed.push(path);
        }
        removed.sort();
        info!(removed = removed.len(), root = %self.root.display(), "purged generated output");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diacritic::DiacriticTable;
    use tempfile::TempDir;

    fn record(chars: &[&str]) -> LanguageRecord {
        LanguageRecord::new(Default::default(), DiacriticTable::from_alphabet(chars))
    }

    /// Accepts `budget` bytes, then fails like a full disk.
    struct ShortWrite {
        file: fs::File,
        budget: usize,
    }

    impl Write for ShortWrite {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::other("no space left on device"));
            }
            let n = buf.len().min(self.budget);
            self.budget -= n;
            self.file.write(&buf[..n])
        }

        fn flush(&mut self) -> io::Result<()> {
            self.file.flush()
        }
    }

    #[test]
    fn paths() {
        let w = OutputWriter::new("/out", Template::default());
        assert_eq!(w.path_for(&"fr-CA".into()), Path::new("/out/fr/CA.json"));
        assert_eq!(w.path_for(&"sr-Latn".into()), Path::new("/out/sr/sr.json"));
        assert_eq!(w.path_for(&"de".into()), Path::new("/out/de/de.json"));
    }

    #[test]
    fn template_requires_placeholder() {
        assert!(matches!(Template::parse("{}"), Err(WriteError::Template)));
        assert!(Template::parse("//<%= CONTENTS %>").is_ok());
    }

    #[test]
    fn template_replaces_every_placeholder() {
        let t = Template::parse("a //<%= contents %> b //<%= Contents %>").unwrap();
        assert_eq!(t.render("X"), "a X b X");
    }

    #[test]
    fn writes_rendered_record() {
        let dir = TempDir::new().unwrap();
        let w = OutputWriter::new(dir.path(), Template::parse("//<%= contents %>\n").unwrap());
        let outcome = w.write(&"es".into(), &record(&["á"])).unwrap();
        let path = dir.path().join("es/es.json");
        assert_eq!(outcome, WriteOutcome::Written(path.clone()));

        let text = fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["data"]["á"]["mapping"]["base"], "a");
    }

    #[test]
    fn never_overwrites() {
        let dir = TempDir::new().unwrap();
        let w = OutputWriter::new(dir.path(), Template::default());
        w.write(&"fr-CA".into(), &record(&["é"])).unwrap();
        let before = fs::read_to_string(dir.path().join("fr/CA.json")).unwrap();

        let err = w.write(&"fr-CA".into(), &record(&["è"])).unwrap_err();
        assert!(matches!(err, WriteError::Collision { .. }));
        assert_eq!(fs::read_to_string(dir.path().join("fr/CA.json")).unwrap(), before);
    }

    #[test]
    fn failed_write_leaves_no_partial_file() {
        let dir = TempDir::new().unwrap();
        let w = OutputWriter::new(dir.path(), Template::default());
        let path = w.path_for(&"pt-BR".into());
        fs::create_dir_all(path.parent().unwrap()).unwrap();

        let file = fs::OpenOptions::new().write(true).create_new(true).open(&path).unwrap();
        let err = fill(&path, ShortWrite { file, budget: 8 }, b"{\"data\": {}}").unwrap_err();
        assert!(matches!(err, WriteError::Io { .. }));
        assert!(!path.exists());

        let outcome = w.write(&"pt-BR".into(), &record(&["ã"])).unwrap();
        assert_eq!(outcome, WriteOutcome::Written(path));
    }

    #[test]
    fn serbian_latin_collision_is_silent() {
        let dir = TempDir::new().unwrap();
        let w = OutputWriter::new(dir.path(), Template::default());
        w.write(&"sr".into(), &record(&["ђ"])).unwrap();
        let outcome = w.write(&"sr-Latn".into(), &record(&["č"])).unwrap();
        let path = dir.path().join("sr/sr.json");
        assert_eq!(outcome, WriteOutcome::ExpectedCollision(path));
    }

    #[test]
    fn purge_keeps_validated_and_files() {
        let dir = TempDir::new().unwrap();
        for folder in ["de", "fr", "sr"] {
            fs::create_dir_all(dir.path().join(folder)).unwrap();
            fs::write(dir.path().join(folder).join("x.json"), "{}").unwrap();
        }
        fs::write(dir.path().join("validated-languages.json"), "[]").unwrap();

        let validated: ValidatedSet = ["de"].into_iter().collect();
        let w = OutputWriter::new(dir.path(), Template::default());
        let removed = w.purge(&validated).unwrap();

        assert_eq!(removed, [dir.path().join("fr"), dir.path().join("sr")]);
        assert!(dir.path().join("de/x.json").exists());
        assert!(dir.path().join("validated-languages.json").exists());
    }

    #[test]
    fn purge_of_missing_root_is_noop() {
        let dir = TempDir::new().unwrap();
        let w = OutputWriter::new(dir.path().join("absent"), Template::default());
        assert!(w.purge(&ValidatedSet::default()).unwrap().is_empty());
    }
}
