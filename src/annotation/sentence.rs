//! Annotated sentences.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::annotation::pos::PartOfSpeech;
use crate::annotation::token::AnnotatedToken;
use crate::error::{MweError, Result};

/// An ordered, 0-indexed sequence of annotated tokens.
///
/// Construction checks that every token's `index` equals its position and
/// that every head index points inside the sentence, so filters can index
/// tokens and follow heads without bounds checks.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AnnotatedToken>", into = "Vec<AnnotatedToken>")]
pub struct AnnotatedSentence {
    tokens: Vec<AnnotatedToken>,
}

impl AnnotatedSentence {
    /// Create a sentence from tokens, validating indices and heads.
    pub fn new(tokens: Vec<AnnotatedToken>) -> Result<Self> {
        let len = tokens.len();
        for (position, token) in tokens.iter().enumerate() {
            if token.index != position {
                return Err(MweError::annotation(format!(
                    "token '{}' has index {} but sits at position {}",
                    token.form, token.index, position
                )));
            }
            if token.head >= len {
                return Err(MweError::annotation(format!(
                    "token '{}' at {} has head {} outside a sentence of {} tokens",
                    token.form, position, token.head, len
                )));
            }
        }
        Ok(AnnotatedSentence { tokens })
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the sentence has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All tokens in order.
    pub fn tokens(&self) -> &[AnnotatedToken] {
        &self.tokens
    }

    /// The token at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&AnnotatedToken> {
        self.tokens.get(index)
    }

    /// Iterate over tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, AnnotatedToken> {
        self.tokens.iter()
    }

    /// Lemmas of all tokens, in order.
    pub fn lemmas(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.lemma.as_str()).collect()
    }

    /// Part-of-speech tags at the given indices, in the given order.
    pub fn pos_at(&self, indices: &[usize]) -> Vec<PartOfSpeech> {
        indices.iter().map(|&i| self.tokens[i].pos).collect()
    }

    /// Head index of the token at `index`.
    pub fn head(&self, index: usize) -> usize {
        self.tokens[index].head
    }

    /// Surface text, tokens joined by single spaces.
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.form.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The MWE column of every token.
    pub fn labels(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.mwe.as_str()).collect()
    }

    /// Overwrite the MWE column of every token.
    ///
    /// `labels` must have one entry per token.
    pub fn set_labels(&mut self, labels: Vec<String>) -> Result<()> {
        if labels.len() != self.tokens.len() {
            return Err(MweError::invalid_argument(format!(
                "{} labels for a sentence of {} tokens",
                labels.len(),
                self.tokens.len()
            )));
        }
        for (token, label) in self.tokens.iter_mut().zip(labels) {
            token.mwe = label;
        }
        Ok(())
    }

    /// Mutable access for in-place lemma rewriting.
    pub(crate) fn tokens_mut(&mut self) -> &mut [AnnotatedToken] {
        &mut self.tokens
    }
}

impl Index<usize> for AnnotatedSentence {
    type Output = AnnotatedToken;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl TryFrom<Vec<AnnotatedToken>> for AnnotatedSentence {
    type Error = MweError;

    fn try_from(tokens: Vec<AnnotatedToken>) -> Result<Self> {
        AnnotatedSentence::new(tokens)
    }
}

impl From<AnnotatedSentence> for Vec<AnnotatedToken> {
    fn from(sentence: AnnotatedSentence) -> Self {
        sentence.tokens
    }
}

impl<'a> IntoIterator for &'a AnnotatedSentence {
    type Item = &'a AnnotatedToken;
    type IntoIter = std::slice::Iter<'a, AnnotatedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
