//! F5: closer components are preferred over distant ones.
//!
//! A global filter: among all occurrences of the candidate's lemma multiset in
//! the sentence, only those with the smallest largest-gap survive. Ties all
//! pass.

use crate::annotation::sentence::AnnotatedSentence;
use crate::filter::{Filter, FilterScope, TrainingExample};
use crate::matcher::{find_candidates, max_gap};

/// Filter keeping only the tightest occurrences of a lemma multiset.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClosestMatchFilter;

impl Filter for ClosestMatchFilter {
    type Evidence = ();

    fn default_evidence(&self) {}

    fn train(&self, _evidence: &mut (), _example: &TrainingExample<'_>) {}

    fn test(&self, _evidence: &(), sentence: &AnnotatedSentence, indices: &[usize]) -> bool {
        let Some(own) = max_gap(indices) else {
            return true;
        };

        let lemmas: Vec<&str> = indices.iter().map(|&i| sentence[i].lemma.as_str()).collect();
        let tightest = find_candidates(&lemmas, &sentence.lemmas())
            .iter()
            .filter_map(|other| max_gap(other))
            .min()
            .unwrap_or(own);

        own <= tightest
    }

    fn name(&self) -> &'static str {
        "closest_match"
    }

    fn scope(&self) -> FilterScope {
        FilterScope::Global
    }
}
