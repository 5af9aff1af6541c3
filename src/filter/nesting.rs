//! F8: nested expressions should be annotated as in training.
//!
//! Reserved hook for suppressing candidates nested inside another occurrence
//! of the same lemma multiset. It currently accepts every candidate.

use crate::annotation::sentence::AnnotatedSentence;
use crate::filter::{Filter, TrainingExample};

/// Placeholder filter that accepts everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NestingFilter;

impl Filter for NestingFilter {
    type Evidence = ();

    fn default_evidence(&self) {}

    fn train(&self, _evidence: &mut (), _example: &TrainingExample<'_>) {}

    fn test(&self, _evidence: &(), _sentence: &AnnotatedSentence, _indices: &[usize]) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "nesting"
    }
}
