//! Lexicon persistence.
//!
//! A lexicon is stored as one JSON document per language:
//!
//! ```json
//! {
//!   "mwes": {
//!     "take off:VERB": {"POS": "VERB", "lemmas": ["take", "off"], "f1": [["ADP", "VERB"]], ...}
//!   },
//!   "active_filters": {"NOUN": ["f1", "f7"]}
//! }
//! ```
//!
//! A [`LexiconStore`] names the file of a language `<lang>_data.json` inside
//! its directory.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{MweError, Result};
use crate::lexicon::MweLexicon;
use crate::lexicon::config::ActiveFilterConfig;
use crate::lexicon::entry::{ExpressionKey, MweEntry};

/// Suffix of per-language lexicon files.
pub const LEXICON_FILE_SUFFIX: &str = "_data.json";

/// The persisted form of a lexicon.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LexiconRecord {
    /// Entries by expression key
    pub mwes: BTreeMap<String, MweEntry>,

    /// Filter ids by part-of-speech tag
    #[serde(default)]
    pub active_filters: BTreeMap<String, Vec<String>>,
}

impl LexiconRecord {
    /// Snapshot a lexicon.
    pub fn from_lexicon(lexicon: &MweLexicon) -> Self {
        LexiconRecord {
            mwes: lexicon
                .entries()
                .map(|(key, entry)| (key.to_string(), entry.clone()))
                .collect(),
            active_filters: lexicon.active_filters().to_record(),
        }
    }

    /// Rebuild the lexicon, validating the active filter configuration.
    ///
    /// F1 multisets are re-sorted so that retraining a stored multiset is a
    /// no-op whatever order the record lists its tags in.
    pub fn into_lexicon(self) -> Result<MweLexicon> {
        let active_filters = ActiveFilterConfig::from_record(&self.active_filters)?;
        let mut lexicon = MweLexicon::new().with_active_filters(active_filters);
        for (key, mut entry) in self.mwes {
            entry.evidence.f1.sort_patterns();
            lexicon.insert(ExpressionKey::from_raw(key), entry);
        }
        Ok(lexicon)
    }
}

impl MweLexicon {
    /// Serialize to a writer as JSON.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, &LexiconRecord::from_lexicon(self))?;
        Ok(())
    }

    /// Deserialize from a JSON reader.
    pub fn read_json<R: Read>(reader: R) -> Result<Self> {
        let record: LexiconRecord = serde_json::from_reader(reader)?;
        record.into_lexicon()
    }

    /// Write the lexicon to a file, creating parent directories as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(path)?);
        self.write_json(&mut writer)?;
        writer.flush()?;

        info!("Saved {} entries to {}", self.len(), path.display());
        Ok(())
    }

    /// Read a lexicon from a file.
    ///
    /// A missing or undecodable file is a [`MweError::MissingLexicon`]; an
    /// invalid filter configuration is a [`MweError::Config`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            MweError::missing_lexicon(format!("cannot open {}: {}", path.display(), e))
        })?;
        let record: LexiconRecord = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            MweError::missing_lexicon(format!("corrupt lexicon {}: {}", path.display(), e))
        })?;
        let lexicon = record.into_lexicon()?;

        info!("Loaded {} entries from {}", lexicon.len(), path.display());
        Ok(lexicon)
    }
}

/// A directory of per-language lexicon files.
#[derive(Clone, Debug)]
pub struct LexiconStore {
    directory: PathBuf,
}

impl LexiconStore {
    /// Create a store rooted at `directory`. Nothing is touched on disk.
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        LexiconStore {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// The store directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the lexicon file for a language.
    pub fn path_for(&self, language: &str) -> PathBuf {
        self.directory
            .join(format!("{language}{LEXICON_FILE_SUFFIX}"))
    }

    /// Whether a lexicon exists for a language.
    pub fn contains(&self, language: &str) -> bool {
        self.path_for(language).is_file()
    }

    /// Save the lexicon of a language.
    pub fn save(&self, language: &str, lexicon: &MweLexicon) -> Result<()> {
        if language.is_empty() {
            return Err(MweError::invalid_argument("language code is empty"));
        }
        debug!("Saving '{}' lexicon into {}", language, self.directory.display());
        lexicon.save(self.path_for(language))
    }

    /// Load the lexicon of a language.
    pub fn load(&self, language: &str) -> Result<MweLexicon> {
        let path = self.path_for(language);
        if !path.is_file() {
            return Err(MweError::missing_lexicon(format!(
                "no lexicon for language '{}' in {}",
                language,
                self.directory.display()
            )));
        }
        MweLexicon::load(path)
    }

    /// Languages with a lexicon in the store, sorted.
    pub fn languages(&self) -> Result<Vec<String>> {
        if !self.directory.is_dir() {
            return Ok(Vec::new());
        }
        let mut languages = Vec::new();
        for dir_entry in std::fs::read_dir(&self.directory)? {
            let name = dir_entry?.file_name();
            if let Some(language) = name
                .to_str()
                .and_then(|n| n.strip_suffix(LEXICON_FILE_SUFFIX))
            {
                if !language.is_empty() {
                    languages.push(language.to_string());
                }
            }
        }
        languages.sort();
        Ok(languages)
    }
}
