//! Lemma normalization.
//!
//! Some lemmatizers leave clitics or contractions unresolved (`'ve`, `d'`).
//! A [`LemmaNormalizer`] rewrites such lemmas through a lookup table so that
//! training and detection agree on the canonical form.
//!
//! ```
//! use mwe_detector::annotation::LemmaNormalizer;
//!
//! let normalizer = LemmaNormalizer::for_language("en");
//! assert_eq!(normalizer.normalize("'ve"), "have");
//! assert_eq!(normalizer.normalize("do"), "do");
//! ```

use ahash::AHashMap;

use crate::annotation::sentence::AnnotatedSentence;

/// Table-driven lemma rewriting.
#[derive(Clone, Debug, Default)]
pub struct LemmaNormalizer {
    table: AHashMap<String, String>,
}

impl LemmaNormalizer {
    /// Create a normalizer from a lemma → replacement table.
    pub fn new<I, K, V>(table: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        LemmaNormalizer {
            table: table
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The built-in table for a language code; identity for unknown languages.
    pub fn for_language(lang: &str) -> Self {
        match lang {
            "en" => LemmaNormalizer::new([("'ve", "have")]),
            "fr" => LemmaNormalizer::new([("d'", "de")]),
            _ => LemmaNormalizer::default(),
        }
    }

    /// Normalize a single lemma.
    pub fn normalize<'a>(&'a self, lemma: &'a str) -> &'a str {
        self.table.get(lemma).map(|s| s.as_str()).unwrap_or(lemma)
    }

    /// Rewrite every lemma of a sentence in place.
    pub fn apply(&self, sentence: &mut AnnotatedSentence) {
        if self.table.is_empty() {
            return;
        }
        for token in sentence.tokens_mut() {
            if let Some(replacement) = self.table.get(&token.lemma) {
                token.lemma = replacement.clone();
            }
        }
    }

    /// Number of table entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
