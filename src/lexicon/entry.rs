//! Lexicon entries and their keys.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::annotation::pos::PartOfSpeech;
use crate::filter::FilterEvidence;

/// Identifier of one expression: `<canonical lemma>:<part of speech>`.
///
/// Occurrences with the same lemma and tag accumulate into the same entry
/// regardless of the sentence they come from.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpressionKey(String);

impl ExpressionKey {
    /// Build the key of an expression.
    pub fn new(lemma: &str, pos: PartOfSpeech) -> Self {
        ExpressionKey(format!("{lemma}:{pos}"))
    }

    /// Wrap an already formatted key.
    pub fn from_raw<S: Into<String>>(raw: S) -> Self {
        ExpressionKey(raw.into())
    }

    /// The key as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpressionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ExpressionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A trained expression: its components and the evidence of every filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MweEntry {
    /// Part of speech of the whole expression
    #[serde(rename = "POS")]
    pub pos: PartOfSpeech,

    /// Component lemmas, in canonical order
    pub lemmas: Vec<String>,

    /// Per-filter evidence (`f1`..`f8`)
    #[serde(flatten)]
    pub evidence: FilterEvidence,
}

impl MweEntry {
    /// An entry with no evidence yet.
    pub fn new(pos: PartOfSpeech) -> Self {
        MweEntry {
            pos,
            lemmas: Vec::new(),
            evidence: FilterEvidence::default(),
        }
    }

    /// Set the component lemmas.
    pub fn with_lemmas<I, S>(mut self, lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lemmas = lemmas.into_iter().map(|s| s.into()).collect();
        self
    }
}
