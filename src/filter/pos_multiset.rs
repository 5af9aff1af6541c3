//! F1: components should be disambiguated.
//!
//! Keeps every multiset of part-of-speech tags observed for the entry during
//! training. A candidate passes if, for at least one trained multiset, it has
//! at least as many tokens of every tag.
//!
//! Automatically tagged training data weakens this filter: every wrong tag
//! adds a multiset and loosens it. The same holds for F2 and F3.

use ahash::AHashMap;

use crate::annotation::pos::PartOfSpeech;
use crate::annotation::sentence::AnnotatedSentence;
use crate::filter::{Filter, PosPatterns, TrainingExample};

/// Filter on the multiset of part-of-speech tags.
#[derive(Clone, Copy, Debug, Default)]
pub struct PosMultisetFilter;

impl PosMultisetFilter {
    fn multiset(sentence: &AnnotatedSentence, indices: &[usize]) -> Vec<PartOfSpeech> {
        let mut tags = sentence.pos_at(indices);
        tags.sort_by_key(|pos| pos.as_str());
        tags
    }

    fn counts(tags: &[PartOfSpeech]) -> AHashMap<PartOfSpeech, usize> {
        let mut counts = AHashMap::new();
        for &tag in tags {
            *counts.entry(tag).or_insert(0) += 1;
        }
        counts
    }
}

impl Filter for PosMultisetFilter {
    type Evidence = PosPatterns;

    fn default_evidence(&self) -> PosPatterns {
        PosPatterns::new()
    }

    fn train(&self, evidence: &mut PosPatterns, example: &TrainingExample<'_>) {
        evidence.insert(Self::multiset(example.sentence, example.indices));
    }

    fn test(&self, evidence: &PosPatterns, sentence: &AnnotatedSentence, indices: &[usize]) -> bool {
        let candidate = Self::counts(&sentence.pos_at(indices));
        evidence.iter().any(|trained| {
            Self::counts(trained)
                .iter()
                .all(|(tag, &needed)| candidate.get(tag).copied().unwrap_or(0) >= needed)
        })
    }

    fn name(&self) -> &'static str {
        "pos_multiset"
    }
}
