//! Acceptance filters for candidate matches.
//!
//! Every candidate produced by the [`matcher`](crate::matcher) is run through
//! the filters configured for its entry's part of speech; it becomes a match
//! only if all of them accept. Each filter learns its own evidence from gold
//! examples during training.
//!
//! # Available Filters
//!
//! | Id | Filter | Evidence | Scope |
//! |----|--------|----------|-------|
//! | f1 | [`pos_multiset::PosMultisetFilter`] | POS multisets | local |
//! | f2 | [`pos_order::PosOrderFilter`] | POS sequences | local |
//! | f3 | [`pos_span::PosSpanFilter`] | POS sequences over the span | local |
//! | f4 | [`gap::MaxGapFilter`] | observed gaps | local |
//! | f5 | [`closest::ClosestMatchFilter`] | none | global |
//! | f6 | [`syntax::SyntacticConnectivityFilter`] | none | global |
//! | f7 | [`inflection::NounInflectionFilter`] | noun `Number` values | local |
//! | f8 | [`nesting::NestingFilter`] | none | local (always accepts) |
//!
//! Global filters judge a candidate against the rest of the sentence rather
//! than against trained evidence.
//!
//! # Examples
//!
//! ```
//! use mwe_detector::annotation::{AnnotatedSentence, AnnotatedToken, PartOfSpeech};
//! use mwe_detector::filter::{Filter, TrainingExample};
//! use mwe_detector::filter::pos_order::PosOrderFilter;
//!
//! let sentence = AnnotatedSentence::new(vec![
//!     AnnotatedToken::new(0, "kick", "kick", PartOfSpeech::Verb),
//!     AnnotatedToken::new(1, "the", "the", PartOfSpeech::Det).with_head(2),
//!     AnnotatedToken::new(2, "bucket", "bucket", PartOfSpeech::Noun).with_head(0),
//! ]).unwrap();
//! let lemmas = vec!["kick".to_string(), "the".to_string(), "bucket".to_string()];
//!
//! let filter = PosOrderFilter;
//! let mut evidence = filter.default_evidence();
//! filter.train(&mut evidence, &TrainingExample {
//!     lemma: "kick the bucket",
//!     lemmas: &lemmas,
//!     sentence: &sentence,
//!     indices: &[0, 1, 2],
//!     pos: PartOfSpeech::Verb,
//! });
//!
//! assert!(filter.test(&evidence, &sentence, &[0, 1, 2]));
//! assert!(!filter.test(&evidence, &sentence, &[2, 1, 0]));
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::annotation::pos::PartOfSpeech;
use crate::annotation::sentence::AnnotatedSentence;
use crate::error::{MweError, Result};

pub mod closest;
pub mod gap;
pub mod inflection;
pub mod nesting;
pub mod pos_multiset;
pub mod pos_order;
pub mod pos_span;
pub mod syntax;

#[cfg(test)]
pub(crate) mod test_support;

pub use closest::ClosestMatchFilter;
pub use gap::{GapEvidence, MaxGapFilter};
pub use inflection::NounInflectionFilter;
pub use nesting::NestingFilter;
pub use pos_multiset::PosMultisetFilter;
pub use pos_order::PosOrderFilter;
pub use pos_span::PosSpanFilter;
pub use syntax::SyntacticConnectivityFilter;

/// One gold occurrence of an expression, as seen by the filters.
#[derive(Clone, Copy, Debug)]
pub struct TrainingExample<'a> {
    /// Canonical lemma of the expression
    pub lemma: &'a str,
    /// Component lemmas
    pub lemmas: &'a [String],
    /// Sentence containing the occurrence
    pub sentence: &'a AnnotatedSentence,
    /// Token indices of the occurrence, ascending
    pub indices: &'a [usize],
    /// Part of speech of the expression
    pub pos: PartOfSpeech,
}

/// Whether a filter decides from its own evidence or from the sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterScope {
    /// Decision depends only on the entry's trained evidence
    Local,
    /// Decision depends on other candidates in the same sentence
    Global,
}

/// Trait implemented by every acceptance filter.
///
/// `test` must be total over well-formed input: indices inside the sentence.
pub trait Filter: Send + Sync {
    /// The evidence this filter accumulates per entry.
    type Evidence;

    /// Evidence of an entry that has seen no examples.
    fn default_evidence(&self) -> Self::Evidence;

    /// Learn from one gold example.
    fn train(&self, evidence: &mut Self::Evidence, example: &TrainingExample<'_>);

    /// Decide whether a candidate survives.
    fn test(&self, evidence: &Self::Evidence, sentence: &AnnotatedSentence, indices: &[usize])
    -> bool;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Local or global.
    fn scope(&self) -> FilterScope {
        FilterScope::Local
    }
}

/// Set of part-of-speech sequences, kept in first-seen order.
///
/// Used as the evidence of F1 (sorted multisets), F2 (index order) and F3
/// (full span). Inserting a sequence that is already present is a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PosPatterns(Vec<Vec<PartOfSpeech>>);

impl PosPatterns {
    /// Create an empty set.
    pub fn new() -> Self {
        PosPatterns(Vec::new())
    }

    /// Insert a pattern; returns `false` if it was already known.
    pub fn insert(&mut self, pattern: Vec<PartOfSpeech>) -> bool {
        if self.0.contains(&pattern) {
            return false;
        }
        self.0.push(pattern);
        true
    }

    /// Sort every pattern by tag string and drop the duplicates this exposes.
    ///
    /// Only meaningful for multisets (F1); F2 and F3 sequences are ordered.
    pub fn sort_patterns(&mut self) {
        let patterns = std::mem::take(&mut self.0);
        for mut pattern in patterns {
            pattern.sort_by_key(|pos| pos.as_str());
            self.insert(pattern);
        }
    }

    /// Check whether a pattern is known.
    pub fn contains(&self, pattern: &[PartOfSpeech]) -> bool {
        self.0.iter().any(|p| p.as_slice() == pattern)
    }

    /// Iterate over known patterns.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<PartOfSpeech>> {
        self.0.iter()
    }

    /// Number of known patterns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no pattern is known.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Identifier of a filter in the fixed registry `f1`..`f8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterId {
    /// Components should be disambiguated
    F1,
    /// Components should appear in specific orders, disregarding discontinuities
    F2,
    /// Components should appear in specific orders, considering discontinuities
    F3,
    /// Components should not be too far apart
    F4,
    /// Closer components are preferred over distant ones
    F5,
    /// Components should be syntactically connected
    F6,
    /// Nominal components should appear with a seen inflection
    F7,
    /// Nested expressions should be annotated as in training
    F8,
}

impl FilterId {
    /// The complete registry, in order.
    pub const ALL: [FilterId; 8] = [
        FilterId::F1,
        FilterId::F2,
        FilterId::F3,
        FilterId::F4,
        FilterId::F5,
        FilterId::F6,
        FilterId::F7,
        FilterId::F8,
    ];

    /// The persisted id string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterId::F1 => "f1",
            FilterId::F2 => "f2",
            FilterId::F3 => "f3",
            FilterId::F4 => "f4",
            FilterId::F5 => "f5",
            FilterId::F6 => "f6",
            FilterId::F7 => "f7",
            FilterId::F8 => "f8",
        }
    }

    /// The descriptive name of the filter behind this id.
    pub fn name(&self) -> &'static str {
        match self {
            FilterId::F1 => PosMultisetFilter.name(),
            FilterId::F2 => PosOrderFilter.name(),
            FilterId::F3 => PosSpanFilter.name(),
            FilterId::F4 => MaxGapFilter.name(),
            FilterId::F5 => ClosestMatchFilter.name(),
            FilterId::F6 => SyntacticConnectivityFilter.name(),
            FilterId::F7 => NounInflectionFilter.name(),
            FilterId::F8 => NestingFilter.name(),
        }
    }

    /// Local or global.
    pub fn scope(&self) -> FilterScope {
        match self {
            FilterId::F1 => PosMultisetFilter.scope(),
            FilterId::F2 => PosOrderFilter.scope(),
            FilterId::F3 => PosSpanFilter.scope(),
            FilterId::F4 => MaxGapFilter.scope(),
            FilterId::F5 => ClosestMatchFilter.scope(),
            FilterId::F6 => SyntacticConnectivityFilter.scope(),
            FilterId::F7 => NounInflectionFilter.scope(),
            FilterId::F8 => NestingFilter.scope(),
        }
    }

    /// Feed one example into this filter's slot of `evidence`.
    pub fn train(&self, evidence: &mut FilterEvidence, example: &TrainingExample<'_>) {
        match self {
            FilterId::F1 => PosMultisetFilter.train(&mut evidence.f1, example),
            FilterId::F2 => PosOrderFilter.train(&mut evidence.f2, example),
            FilterId::F3 => PosSpanFilter.train(&mut evidence.f3, example),
            FilterId::F4 => MaxGapFilter.train(&mut evidence.f4, example),
            FilterId::F5 => ClosestMatchFilter.train(&mut evidence.f5, example),
            FilterId::F6 => SyntacticConnectivityFilter.train(&mut evidence.f6, example),
            FilterId::F7 => NounInflectionFilter.train(&mut evidence.f7, example),
            FilterId::F8 => NestingFilter.train(&mut evidence.f8, example),
        }
    }

    /// Run this filter on a candidate against this filter's slot of `evidence`.
    pub fn test(
        &self,
        evidence: &FilterEvidence,
        sentence: &AnnotatedSentence,
        indices: &[usize],
    ) -> bool {
        match self {
            FilterId::F1 => PosMultisetFilter.test(&evidence.f1, sentence, indices),
            FilterId::F2 => PosOrderFilter.test(&evidence.f2, sentence, indices),
            FilterId::F3 => PosSpanFilter.test(&evidence.f3, sentence, indices),
            FilterId::F4 => MaxGapFilter.test(&evidence.f4, sentence, indices),
            FilterId::F5 => ClosestMatchFilter.test(&evidence.f5, sentence, indices),
            FilterId::F6 => SyntacticConnectivityFilter.test(&evidence.f6, sentence, indices),
            FilterId::F7 => NounInflectionFilter.test(&evidence.f7, sentence, indices),
            FilterId::F8 => NestingFilter.test(&evidence.f8, sentence, indices),
        }
    }
}

impl FromStr for FilterId {
    type Err = MweError;

    fn from_str(s: &str) -> Result<Self> {
        FilterId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| MweError::config(format!("unknown filter id '{s}'")))
    }
}

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-entry evidence, one slot per filter id.
///
/// Filters without evidence hold `()`, persisted as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterEvidence {
    /// POS multisets (sorted tag lists)
    pub f1: PosPatterns,
    /// POS sequences in index order
    pub f2: PosPatterns,
    /// POS sequences over the full span
    pub f3: PosPatterns,
    /// Observed maximal gaps
    pub f4: GapEvidence,
    #[serde(default)]
    pub f5: (),
    #[serde(default)]
    pub f6: (),
    /// Observed `Number` values of single-noun occurrences
    pub f7: BTreeSet<String>,
    #[serde(default)]
    pub f8: (),
}

impl Default for FilterEvidence {
    fn default() -> Self {
        FilterEvidence {
            f1: PosMultisetFilter.default_evidence(),
            f2: PosOrderFilter.default_evidence(),
            f3: PosSpanFilter.default_evidence(),
            f4: MaxGapFilter.default_evidence(),
            f5: ClosestMatchFilter.default_evidence(),
            f6: SyntacticConnectivityFilter.default_evidence(),
            f7: NounInflectionFilter.default_evidence(),
            f8: NestingFilter.default_evidence(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_id_parse() {
        assert_eq!("f3".parse::<FilterId>().unwrap(), FilterId::F3);
        assert_eq!("F7".parse::<FilterId>().unwrap(), FilterId::F7);
        assert!(matches!("f9".parse::<FilterId>(), Err(MweError::Config(_))));
    }

    #[test]
    fn test_scopes() {
        let global: Vec<_> = FilterId::ALL
            .iter()
            .filter(|id| id.scope() == FilterScope::Global)
            .collect();
        assert_eq!(global, vec![&FilterId::F5, &FilterId::F6]);
    }

    #[test]
    fn test_pos_patterns_are_sets() {
        let mut patterns = PosPatterns::new();
        assert!(patterns.insert(vec![PartOfSpeech::Adj, PartOfSpeech::Noun]));
        assert!(!patterns.insert(vec![PartOfSpeech::Adj, PartOfSpeech::Noun]));
        assert_eq!(patterns.len(), 1);
        assert!(patterns.contains(&[PartOfSpeech::Adj, PartOfSpeech::Noun]));
    }

    #[test]
    fn test_default_evidence_json_shape() {
        let json = serde_json::to_value(FilterEvidence::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "f1": [], "f2": [], "f3": [], "f4": [1],
                "f5": null, "f6": null, "f7": [], "f8": null
            })
        );
    }
}
