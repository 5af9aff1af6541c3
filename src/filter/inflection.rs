//! F7: nominal components should appear with a seen inflection.
//!
//! If a candidate contains exactly one noun, that noun's `Number` must have
//! been observed on the noun of a trained occurrence. Candidates with no noun
//! or several nouns always pass.

use std::collections::BTreeSet;

use crate::annotation::pos::PartOfSpeech;
use crate::annotation::sentence::AnnotatedSentence;
use crate::annotation::token::AnnotatedToken;
use crate::filter::{Filter, TrainingExample};

const NUMBER: &str = "Number";

/// Filter on the grammatical number of a single nominal component.
#[derive(Clone, Copy, Debug, Default)]
pub struct NounInflectionFilter;

impl NounInflectionFilter {
    fn single_noun<'a>(sentence: &'a AnnotatedSentence, indices: &[usize]) -> Option<&'a AnnotatedToken> {
        let mut nouns = indices
            .iter()
            .map(|&i| &sentence[i])
            .filter(|token| token.pos == PartOfSpeech::Noun);
        match (nouns.next(), nouns.next()) {
            (Some(noun), None) => Some(noun),
            _ => None,
        }
    }
}

impl Filter for NounInflectionFilter {
    type Evidence = BTreeSet<String>;

    fn default_evidence(&self) -> BTreeSet<String> {
        BTreeSet::new()
    }

    fn train(&self, evidence: &mut BTreeSet<String>, example: &TrainingExample<'_>) {
        if let Some(number) = Self::single_noun(example.sentence, example.indices)
            .and_then(|noun| noun.morph.first(NUMBER))
        {
            evidence.insert(number.to_string());
        }
    }

    fn test(&self, evidence: &BTreeSet<String>, sentence: &AnnotatedSentence, indices: &[usize]) -> bool {
        match Self::single_noun(sentence, indices) {
            Some(noun) => noun
                .morph
                .first(NUMBER)
                .is_some_and(|number| evidence.contains(number)),
            None => true,
        }
    }

    fn name(&self) -> &'static str {
        "noun_inflection"
    }
}
