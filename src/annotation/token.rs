//! Annotated tokens.
//!
//! An [`AnnotatedToken`] is the read contract between the external annotation
//! pipeline (tokenizer, lemmatizer, tagger, parser) and the detector. Tokens
//! are built with chained `with_*` setters:
//!
//! ```
//! use mwe_detector::annotation::{AnnotatedToken, PartOfSpeech};
//!
//! let token = AnnotatedToken::new(3, "dogs", "dog", PartOfSpeech::Noun)
//!     .with_head(4)
//!     .with_dependency("nsubj")
//!     .with_feature("Number", "Plur");
//!
//! assert_eq!(token.lemma, "dog");
//! assert_eq!(token.morph.first("Number"), Some("Plur"));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::annotation::pos::PartOfSpeech;

/// Marker carried by tokens that belong to no MWE.
pub const NO_LABEL: &str = "*";

/// Morphological features of a token (`Number → [Sing]`, ...).
///
/// Values keep the order given by the annotator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MorphFeatures(BTreeMap<String, Vec<String>>);

impl MorphFeatures {
    /// Create an empty feature map.
    pub fn new() -> Self {
        MorphFeatures(BTreeMap::new())
    }

    /// Parse the CoNLL-U `FEATS` notation, e.g. `Number=Sing|PronType=Int,Rel`.
    ///
    /// `_` and the empty string denote no features. Malformed pairs without
    /// `=` are ignored.
    pub fn parse(feats: &str) -> Self {
        let mut features = MorphFeatures::new();
        let feats = feats.trim();
        if feats.is_empty() || feats == "_" {
            return features;
        }

        for pair in feats.split('|') {
            if let Some((name, values)) = pair.split_once('=') {
                for value in values.split(',').filter(|v| !v.is_empty()) {
                    features.insert(name, value);
                }
            }
        }
        features
    }

    /// Append a value to a feature.
    pub fn insert<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.entry(name.into()).or_default().push(value.into());
    }

    /// All values of a feature.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(|values| values.as_slice())
    }

    /// The first value of a feature.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|values| values.first())
            .map(|value| value.as_str())
    }

    /// Check if no features are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MorphFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("_");
        }
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(|(name, values)| format!("{}={}", name, values.join(",")))
            .collect();
        f.write_str(&rendered.join("|"))
    }
}

/// A single token of an annotated sentence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// Position in the sentence (0-based)
    pub index: usize,

    /// Surface form
    pub form: String,

    /// Lemma; compared case-insensitively during matching
    pub lemma: String,

    /// Part-of-speech tag
    pub pos: PartOfSpeech,

    /// Index of the syntactic head; equals `index` for the root
    pub head: usize,

    /// Dependency relation to the head
    pub dependency: String,

    /// Morphological features
    #[serde(default)]
    pub morph: MorphFeatures,

    /// MWE label (`*` or `|`-joined `<id>:<lemma>:<pos>` labels)
    #[serde(default = "default_label")]
    pub mwe: String,
}

fn default_label() -> String {
    NO_LABEL.to_string()
}

impl AnnotatedToken {
    /// Create a root token with no features and no MWE label.
    pub fn new<F, L>(index: usize, form: F, lemma: L, pos: PartOfSpeech) -> Self
    where
        F: Into<String>,
        L: Into<String>,
    {
        AnnotatedToken {
            index,
            form: form.into(),
            lemma: lemma.into(),
            pos,
            head: index,
            dependency: String::new(),
            morph: MorphFeatures::new(),
            mwe: default_label(),
        }
    }

    /// Set the head index.
    pub fn with_head(mut self, head: usize) -> Self {
        self.head = head;
        self
    }

    /// Set the dependency relation.
    pub fn with_dependency<S: Into<String>>(mut self, dependency: S) -> Self {
        self.dependency = dependency.into();
        self
    }

    /// Add a morphological feature value.
    pub fn with_feature<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.morph.insert(name, value);
        self
    }

    /// Replace all morphological features.
    pub fn with_morph(mut self, morph: MorphFeatures) -> Self {
        self.morph = morph;
        self
    }

    /// Set the MWE label column.
    pub fn with_mwe<S: Into<String>>(mut self, mwe: S) -> Self {
        self.mwe = mwe.into();
        self
    }

    /// Whether this token is the root of its sentence.
    pub fn is_root(&self) -> bool {
        self.head == self.index
    }

    /// Whether the token carries at least one MWE label.
    pub fn has_mwe(&self) -> bool {
        !self.mwe.is_empty() && self.mwe != NO_LABEL
    }

    /// Iterate over the individual labels of the MWE column.
    pub fn mwe_labels(&self) -> impl Iterator<Item = &str> {
        self.mwe
            .split('|')
            .map(str::trim)
            .filter(|label| !label.is_empty() && *label != NO_LABEL)
    }
}

impl fmt::Display for AnnotatedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.form)
    }
}
