//! The trained lexicon.
//!
//! A [`MweLexicon`] maps each [`ExpressionKey`] to an [`MweEntry`] holding the
//! component lemmas and the evidence every filter has learned from gold
//! occurrences. Entries are created on first use and iterate in key order.

pub mod config;
pub mod entry;
pub mod rank;
pub mod store;

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use log::warn;

use crate::annotation::pos::PartOfSpeech;
use crate::error::{MweError, Result};
use crate::filter::{FilterId, TrainingExample};

pub use config::{ActiveFilterConfig, DEFAULT_FILTERS};
pub use entry::{ExpressionKey, MweEntry};
pub use rank::RankTable;
pub use store::{LexiconRecord, LexiconStore};

/// Expression key → entry, plus the per-tag filter configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MweLexicon {
    entries: BTreeMap<ExpressionKey, MweEntry>,
    active_filters: ActiveFilterConfig,
}

impl MweLexicon {
    /// Create an empty lexicon applying every filter.
    pub fn new() -> Self {
        MweLexicon::default()
    }

    /// Set the active filter configuration.
    pub fn with_active_filters(mut self, active_filters: ActiveFilterConfig) -> Self {
        self.active_filters = active_filters;
        self
    }

    /// The active filter configuration.
    pub fn active_filters(&self) -> &ActiveFilterConfig {
        &self.active_filters
    }

    /// Mutable access to the active filter configuration.
    pub fn active_filters_mut(&mut self) -> &mut ActiveFilterConfig {
        &mut self.active_filters
    }

    /// Filters applied to an entry of the given tag.
    pub fn filters_for(&self, pos: PartOfSpeech) -> &[FilterId] {
        self.active_filters.filters_for(pos)
    }

    /// Look up an entry.
    pub fn get(&self, key: &ExpressionKey) -> Option<&MweEntry> {
        self.entries.get(key)
    }

    /// The entry for `key`, created with empty evidence when absent.
    pub fn get_or_create(&mut self, key: ExpressionKey, pos: PartOfSpeech) -> &mut MweEntry {
        self.entries
            .entry(key)
            .or_insert_with(|| MweEntry::new(pos))
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, key: ExpressionKey, entry: MweEntry) -> Option<MweEntry> {
        self.entries.insert(key, entry)
    }

    /// Remove an entry.
    pub fn remove(&mut self, key: &ExpressionKey) -> Option<MweEntry> {
        self.entries.remove(key)
    }

    /// Entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&ExpressionKey, &MweEntry)> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fold one gold occurrence into the lexicon.
    ///
    /// The occurrence is stored under `<lemma>:<POS>`. Its component lemmas
    /// replace those of an existing entry (reordered by `ranks` when given),
    /// and every filter in the registry trains on it, whichever filters are
    /// active for the tag. Returns the key that was trained.
    pub fn train_example(
        &mut self,
        example: &TrainingExample<'_>,
        ranks: Option<&RankTable>,
    ) -> Result<ExpressionKey> {
        validate_example(example)?;

        let key = ExpressionKey::new(example.lemma, example.pos);
        let lemmas = match ranks {
            Some(ranks) => ranks.order(example.lemmas),
            None => example.lemmas.to_vec(),
        };

        let entry = match self.entries.entry(key.clone()) {
            Entry::Vacant(vacant) => vacant.insert(MweEntry::new(example.pos)),
            Entry::Occupied(occupied) => {
                let entry = occupied.into_mut();
                if entry.lemmas != lemmas {
                    warn!(
                        "Overwriting lemmas of '{}': {:?} -> {:?}",
                        key, entry.lemmas, lemmas
                    );
                }
                entry
            }
        };
        entry.pos = example.pos;
        entry.lemmas = lemmas;

        for id in FilterId::ALL {
            id.train(&mut entry.evidence, example);
        }
        Ok(key)
    }
}

fn validate_example(example: &TrainingExample<'_>) -> Result<()> {
    if example.indices.is_empty() {
        return Err(MweError::training(format!(
            "'{}' has no token indices",
            example.lemma
        )));
    }
    if example.lemmas.len() != example.indices.len() {
        return Err(MweError::training(format!(
            "'{}' has {} lemmas for {} indices",
            example.lemma,
            example.lemmas.len(),
            example.indices.len()
        )));
    }
    if let Some(&index) = example
        .indices
        .iter()
        .find(|&&i| i >= example.sentence.len())
    {
        return Err(MweError::training(format!(
            "'{}' index {} is outside a sentence of {} tokens",
            example.lemma,
            index,
            example.sentence.len()
        )));
    }
    let mut seen = example.indices.to_vec();
    seen.sort_unstable();
    seen.dedup();
    if seen.len() != example.indices.len() {
        return Err(MweError::training(format!(
            "'{}' repeats a token index",
            example.lemma
        )));
    }
    Ok(())
}
