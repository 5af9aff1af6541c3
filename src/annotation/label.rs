//! The `<id>:<lemma>:<pos>` MWE label scheme.
//!
//! Gold corpora and detector output share one scheme: `*` marks a token that
//! belongs to no expression, otherwise the token carries one or more labels
//! joined by `|`. The lemma part may itself contain `:`; the id ends at the
//! first colon and the tag starts after the last one.

use std::fmt;
use std::str::FromStr;

use crate::annotation::pos::PartOfSpeech;
use crate::error::{MweError, Result};

/// Separator between co-occurring labels on one token.
pub const LABEL_SEPARATOR: char = '|';

/// A parsed MWE label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MweLabel {
    /// Occurrence id, unique within a sentence
    pub id: String,
    /// Canonical lemma of the whole expression
    pub lemma: String,
    /// Part of speech of the whole expression
    pub pos: PartOfSpeech,
}

impl MweLabel {
    /// Create a label.
    pub fn new<I, L>(id: I, lemma: L, pos: PartOfSpeech) -> Self
    where
        I: Into<String>,
        L: Into<String>,
    {
        MweLabel {
            id: id.into(),
            lemma: lemma.into(),
            pos,
        }
    }
}

impl FromStr for MweLabel {
    type Err = MweError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (id, rest) = s
            .split_once(':')
            .ok_or_else(|| MweError::parse(format!("label '{s}' has no ':' separator")))?;
        let (lemma, pos) = rest
            .rsplit_once(':')
            .ok_or_else(|| MweError::parse(format!("label '{s}' has no part-of-speech")))?;

        if id.is_empty() || lemma.is_empty() {
            return Err(MweError::parse(format!("label '{s}' has an empty id or lemma")));
        }
        let pos = pos
            .parse::<PartOfSpeech>()
            .map_err(|e| MweError::parse(format!("label '{s}': {e}")))?;

        Ok(MweLabel::new(id, lemma, pos))
    }
}

impl fmt::Display for MweLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.id, self.lemma, self.pos)
    }
}
