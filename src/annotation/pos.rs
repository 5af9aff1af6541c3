//! Universal part-of-speech tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MweError, Result};

/// Closed set of part-of-speech tags produced by the annotation pipeline.
///
/// This is the Universal Dependencies tag set plus the legacy `CONJ` tag and
/// the `SPACE` tag emitted by some taggers for whitespace tokens. Tags are
/// serialized in upper case (`"NOUN"`, `"PROPN"`, ...). Declaration order
/// follows the tag strings, so sorting tags sorts their strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    /// Adjective
    Adj,
    /// Adposition
    Adp,
    /// Adverb
    Adv,
    /// Auxiliary
    Aux,
    /// Coordinating conjunction
    Cconj,
    /// Conjunction (UD v1)
    Conj,
    /// Determiner
    Det,
    /// Interjection
    Intj,
    /// Noun
    Noun,
    /// Numeral
    Num,
    /// Particle
    Part,
    /// Pronoun
    Pron,
    /// Proper noun
    Propn,
    /// Punctuation
    Punct,
    /// Subordinating conjunction
    Sconj,
    /// Whitespace
    Space,
    /// Symbol
    Sym,
    /// Verb
    Verb,
    /// Other
    X,
}

impl PartOfSpeech {
    /// Every tag, in declaration order.
    pub const ALL: [PartOfSpeech; 19] = [
        PartOfSpeech::Adj,
        PartOfSpeech::Adp,
        PartOfSpeech::Adv,
        PartOfSpeech::Aux,
        PartOfSpeech::Cconj,
        PartOfSpeech::Conj,
        PartOfSpeech::Det,
        PartOfSpeech::Intj,
        PartOfSpeech::Noun,
        PartOfSpeech::Num,
        PartOfSpeech::Part,
        PartOfSpeech::Pron,
        PartOfSpeech::Propn,
        PartOfSpeech::Punct,
        PartOfSpeech::Sconj,
        PartOfSpeech::Space,
        PartOfSpeech::Sym,
        PartOfSpeech::Verb,
        PartOfSpeech::X,
    ];

    /// The canonical upper-case tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Cconj => "CCONJ",
            PartOfSpeech::Conj => "CONJ",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Intj => "INTJ",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Part => "PART",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Sconj => "SCONJ",
            PartOfSpeech::Space => "SPACE",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::X => "X",
        }
    }
}

impl FromStr for PartOfSpeech {
    type Err = MweError;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_ascii_uppercase();
        PartOfSpeech::ALL
            .iter()
            .copied()
            .find(|pos| pos.as_str() == upper)
            .ok_or_else(|| MweError::annotation(format!("unknown part-of-speech tag '{s}'")))
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("noun".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Noun);
        assert_eq!("PROPN".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Propn);
        assert!("NOUNISH".parse::<PartOfSpeech>().is_err());
    }

    #[test]
    fn test_order_follows_tag_strings() {
        for pair in PartOfSpeech::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].as_str() < pair[1].as_str(), "{} / {}", pair[0], pair[1]);
        }
        assert!(PartOfSpeech::Space < PartOfSpeech::X);
    }

    #[test]
    fn test_serde_uses_tag_strings() {
        for pos in PartOfSpeech::ALL {
            let json = serde_json::to_string(&pos).unwrap();
            assert_eq!(json, format!("\"{}\"", pos.as_str()));
            let back: PartOfSpeech = serde_json::from_str(&json).unwrap();
            assert_eq!(back, pos);
        }
    }
}
