//! F3: components should appear in specific orders, considering
//! discontinuities.
//!
//! Like F2, but the sequence covers every token from the first to the last
//! index of the occurrence, so intervening tokens count too.

use crate::annotation::pos::PartOfSpeech;
use crate::annotation::sentence::AnnotatedSentence;
use crate::filter::{Filter, PosPatterns, TrainingExample};

/// Filter on the tags of the whole span covered by a candidate.
#[derive(Clone, Copy, Debug, Default)]
pub struct PosSpanFilter;

impl PosSpanFilter {
    fn span(sentence: &AnnotatedSentence, indices: &[usize]) -> Vec<PartOfSpeech> {
        match (indices.iter().min(), indices.iter().max()) {
            (Some(&first), Some(&last)) => {
                (first..=last).map(|i| sentence[i].pos).collect()
            }
            _ => Vec::new(),
        }
    }
}

impl Filter for PosSpanFilter {
    type Evidence = PosPatterns;

    fn default_evidence(&self) -> PosPatterns {
        PosPatterns::new()
    }

    fn train(&self, evidence: &mut PosPatterns, example: &TrainingExample<'_>) {
        evidence.insert(Self::span(example.sentence, example.indices));
    }

    fn test(&self, evidence: &PosPatterns, sentence: &AnnotatedSentence, indices: &[usize]) -> bool {
        evidence.contains(&Self::span(sentence, indices))
    }

    fn name(&self) -> &'static str {
        "pos_span"
    }
}
