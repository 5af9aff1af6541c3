//! Training and detection.
//!
//! [`MweDetector`] drives the lexicon. Training reads gold labels off
//! annotated sentences and folds each labelled occurrence into its entry.
//! Detection runs, for every entry in key order, the candidate generator
//! selected by the entry's part of speech and keeps the candidates accepted
//! by every filter active for that tag.
//!
//! Accepted matches are numbered from 1 in the order they are found, across
//! all entries of the sentence, and each matched token receives the label
//! `<n>:<key>`. Tokens matched more than once accumulate labels joined by
//! `|`; unmatched tokens are labelled `*`.

pub mod shared;

use ahash::AHashMap;
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::annotation::annotator::Annotator;
use crate::annotation::label::{LABEL_SEPARATOR, MweLabel};
use crate::annotation::sentence::AnnotatedSentence;
use crate::annotation::token::NO_LABEL;
use crate::error::Result;
use crate::filter::TrainingExample;
use crate::lexicon::{ExpressionKey, LexiconStore, MweLexicon, RankTable};
use crate::matcher::MatchStrategy;

pub use shared::SharedDetector;

/// One accepted match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DetectedMatch {
    /// Sentence-wide serial number, starting at 1
    pub serial: usize,
    /// Entry the match instantiates
    pub key: ExpressionKey,
    /// Matched token indices, ascending
    pub indices: Vec<usize>,
}

impl DetectedMatch {
    /// The label written onto each matched token.
    pub fn label(&self) -> String {
        format!("{}:{}", self.serial, self.key)
    }
}

/// Counts gathered during a training pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TrainingReport {
    /// Sentences read
    pub sentences: usize,
    /// Gold occurrences folded into the lexicon
    pub examples: usize,
    /// Gold occurrences dropped as malformed
    pub skipped: usize,
}

/// A lexicon-backed expression detector.
#[derive(Clone, Debug, Default)]
pub struct MweDetector {
    lexicon: MweLexicon,
}

impl MweDetector {
    /// Create a detector with an empty lexicon.
    pub fn new() -> Self {
        MweDetector::default()
    }

    /// Create a detector over an existing lexicon.
    pub fn with_lexicon(lexicon: MweLexicon) -> Self {
        MweDetector { lexicon }
    }

    /// Load the lexicon of `language` from a store.
    pub fn load(store: &LexiconStore, language: &str) -> Result<Self> {
        Ok(MweDetector::with_lexicon(store.load(language)?))
    }

    /// Save the lexicon under `language` in a store.
    pub fn save(&self, store: &LexiconStore, language: &str) -> Result<()> {
        store.save(language, &self.lexicon)
    }

    /// The lexicon.
    pub fn lexicon(&self) -> &MweLexicon {
        &self.lexicon
    }

    /// Mutable access to the lexicon.
    pub fn lexicon_mut(&mut self) -> &mut MweLexicon {
        &mut self.lexicon
    }

    /// Consume the detector, returning its lexicon.
    pub fn into_lexicon(self) -> MweLexicon {
        self.lexicon
    }

    /// Train on gold-labelled sentences.
    ///
    /// Each distinct label of a sentence is one occurrence; its indices are
    /// the tokens carrying the label. Unparseable labels and occurrences the
    /// lexicon rejects are logged and counted as skipped.
    pub fn train<'a, I>(&mut self, sentences: I, ranks: Option<&RankTable>) -> TrainingReport
    where
        I: IntoIterator<Item = &'a AnnotatedSentence>,
    {
        let mut report = TrainingReport::default();

        for sentence in sentences {
            report.sentences += 1;

            for (raw, indices) in gold_occurrences(sentence) {
                let label: MweLabel = match raw.parse() {
                    Ok(label) => label,
                    Err(e) => {
                        warn!("Skipping gold label in sentence {}: {}", report.sentences, e);
                        report.skipped += 1;
                        continue;
                    }
                };

                let lemmas: Vec<String> = indices
                    .iter()
                    .map(|&i| sentence[i].lemma.clone())
                    .collect();
                let example = TrainingExample {
                    lemma: &label.lemma,
                    lemmas: &lemmas,
                    sentence,
                    indices: &indices,
                    pos: label.pos,
                };

                match self.lexicon.train_example(&example, ranks) {
                    Ok(key) => {
                        debug!("Trained '{}' on tokens {:?}", key, indices);
                        report.examples += 1;
                    }
                    Err(e) => {
                        warn!("Skipping '{}': {}", raw, e);
                        report.skipped += 1;
                    }
                }
            }
        }

        info!(
            "Trained on {} sentences: {} examples, {} skipped, {} entries",
            report.sentences,
            report.examples,
            report.skipped,
            self.lexicon.len()
        );
        report
    }

    /// Every accepted match in a sentence, numbered in discovery order.
    pub fn find_matches(&self, sentence: &AnnotatedSentence) -> Vec<DetectedMatch> {
        let lemmas = sentence.lemmas();
        let mut matches = Vec::new();

        for (key, entry) in self.lexicon.entries() {
            let filters = self.lexicon.filters_for(entry.pos);
            let strategy = MatchStrategy::for_pos(entry.pos);

            for candidate in strategy.find(entry.lemmas.as_slice(), lemmas.as_slice()) {
                if candidate.is_empty() {
                    continue;
                }
                if filters
                    .iter()
                    .all(|id| id.test(&entry.evidence, sentence, &candidate))
                {
                    matches.push(DetectedMatch {
                        serial: matches.len() + 1,
                        key: key.clone(),
                        indices: candidate,
                    });
                }
            }
        }

        debug!(
            "Found {} matches in a sentence of {} tokens",
            matches.len(),
            sentence.len()
        );
        matches
    }

    /// The label of every token of a sentence.
    pub fn labels(&self, sentence: &AnnotatedSentence) -> Vec<String> {
        let mut per_token: Vec<Vec<String>> = vec![Vec::new(); sentence.len()];
        for found in self.find_matches(sentence) {
            let label = found.label();
            for &index in &found.indices {
                per_token[index].push(label.clone());
            }
        }

        let separator = LABEL_SEPARATOR.to_string();
        per_token
            .into_iter()
            .map(|labels| {
                if labels.is_empty() {
                    NO_LABEL.to_string()
                } else {
                    labels.join(&separator)
                }
            })
            .collect()
    }

    /// A copy of the sentence with detected labels in place of its MWE column.
    pub fn detect(&self, sentence: &AnnotatedSentence) -> AnnotatedSentence {
        let labels = self.labels(sentence);
        let mut detected = sentence.clone();
        for (token, label) in detected.tokens_mut().iter_mut().zip(labels) {
            token.mwe = label;
        }
        detected
    }

    /// Detect in many sentences in parallel. Output order follows input.
    pub fn detect_batch(&self, sentences: &[AnnotatedSentence]) -> Vec<AnnotatedSentence> {
        sentences
            .par_iter()
            .map(|sentence| self.detect(sentence))
            .collect()
    }

    /// Annotate raw text with `annotator`, then detect.
    pub fn detect_text(&self, annotator: &dyn Annotator, text: &str) -> Result<AnnotatedSentence> {
        let sentence = annotator.annotate(text)?;
        Ok(self.detect(&sentence))
    }
}

/// Distinct gold labels of a sentence in first-seen order, with the tokens
/// carrying each.
fn gold_occurrences(sentence: &AnnotatedSentence) -> Vec<(String, Vec<usize>)> {
    let mut occurrences: Vec<(String, Vec<usize>)> = Vec::new();
    let mut slot: AHashMap<&str, usize> = AHashMap::new();

    for token in sentence.iter() {
        for label in token.mwe_labels() {
            match slot.get(label) {
                Some(&i) => {
                    if !occurrences[i].1.contains(&token.index) {
                        occurrences[i].1.push(token.index);
                    }
                }
                None => {
                    slot.insert(label, occurrences.len());
                    occurrences.push((label.to_string(), vec![token.index]));
                }
            }
        }
    }
    occurrences
}
