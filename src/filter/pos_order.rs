//! F2: components should appear in specific orders, disregarding
//! discontinuities.
//!
//! Keeps the part-of-speech sequences of trained occurrences, read in the
//! order the indices are given. A candidate passes only if its own sequence,
//! read the same way, was observed.

use crate::annotation::sentence::AnnotatedSentence;
use crate::filter::{Filter, PosPatterns, TrainingExample};

/// Filter on the order of part-of-speech tags.
#[derive(Clone, Copy, Debug, Default)]
pub struct PosOrderFilter;

impl Filter for PosOrderFilter {
    type Evidence = PosPatterns;

    fn default_evidence(&self) -> PosPatterns {
        PosPatterns::new()
    }

    fn train(&self, evidence: &mut PosPatterns, example: &TrainingExample<'_>) {
        evidence.insert(example.sentence.pos_at(example.indices));
    }

    fn test(&self, evidence: &PosPatterns, sentence: &AnnotatedSentence, indices: &[usize]) -> bool {
        evidence.contains(&sentence.pos_at(indices))
    }

    fn name(&self) -> &'static str {
        "pos_order"
    }
}
