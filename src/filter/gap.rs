//! F4: components should not be too far apart.
//!
//! Records the largest discontinuity of every trained occurrence and accepts
//! candidates whose largest discontinuity does not exceed the largest one
//! observed. The evidence starts at `[1]`, so adjacent tokens always pass.

use serde::{Deserialize, Serialize};

use crate::annotation::sentence::AnnotatedSentence;
use crate::filter::{Filter, TrainingExample};
use crate::matcher::max_gap;

/// Distinct maximal gaps observed during training.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GapEvidence(Vec<usize>);

impl GapEvidence {
    /// Evidence from explicit observations.
    pub fn from_observed<I: IntoIterator<Item = usize>>(observed: I) -> Self {
        let mut evidence = GapEvidence(Vec::new());
        for gap in observed {
            evidence.observe(gap);
        }
        evidence
    }

    /// Record a gap; duplicates are ignored.
    pub fn observe(&mut self, gap: usize) {
        if !self.0.contains(&gap) {
            self.0.push(gap);
        }
    }

    /// Largest gap accepted.
    pub fn max(&self) -> usize {
        self.0.iter().copied().max().unwrap_or(1)
    }

    /// All observed gaps, in first-seen order.
    pub fn observed(&self) -> &[usize] {
        &self.0
    }
}

impl Default for GapEvidence {
    fn default() -> Self {
        GapEvidence(vec![1])
    }
}

/// Filter on the largest distance between adjacent components.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxGapFilter;

impl Filter for MaxGapFilter {
    type Evidence = GapEvidence;

    fn default_evidence(&self) -> GapEvidence {
        GapEvidence::default()
    }

    fn train(&self, evidence: &mut GapEvidence, example: &TrainingExample<'_>) {
        if let Some(gap) = max_gap(example.indices) {
            evidence.observe(gap);
        }
    }

    fn test(&self, evidence: &GapEvidence, _sentence: &AnnotatedSentence, indices: &[usize]) -> bool {
        match max_gap(indices) {
            Some(gap) => gap <= evidence.max(),
            None => true,
        }
    }

    fn name(&self) -> &'static str {
        "max_gap"
    }
}
