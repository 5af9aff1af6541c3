//! Per-part-of-speech filter selection.
//!
//! Entries are gated by the filters configured for their part of speech.
//! Tags without a configuration fall back to the whole registry.
//!
//! ```
//! use mwe_detector::annotation::PartOfSpeech;
//! use mwe_detector::filter::FilterId;
//! use mwe_detector::lexicon::ActiveFilterConfig;
//!
//! let config = ActiveFilterConfig::new()
//!     .with_filters(PartOfSpeech::Noun, [FilterId::F1, FilterId::F7]);
//!
//! assert_eq!(config.filters_for(PartOfSpeech::Noun), &[FilterId::F1, FilterId::F7]);
//! assert_eq!(config.filters_for(PartOfSpeech::Verb), &FilterId::ALL);
//! ```

use std::collections::BTreeMap;

use crate::annotation::pos::PartOfSpeech;
use crate::error::{MweError, Result};
use crate::filter::FilterId;

/// Filters applied when a part of speech has no explicit configuration.
pub const DEFAULT_FILTERS: [FilterId; 8] = FilterId::ALL;

/// Mapping from part of speech to the ordered set of filters to apply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveFilterConfig {
    by_pos: BTreeMap<PartOfSpeech, Vec<FilterId>>,
}

impl ActiveFilterConfig {
    /// A configuration that applies every filter to every tag.
    pub fn new() -> Self {
        ActiveFilterConfig::default()
    }

    /// Set the filters for a tag (builder form).
    pub fn with_filters<I>(mut self, pos: PartOfSpeech, filters: I) -> Self
    where
        I: IntoIterator<Item = FilterId>,
    {
        self.set_filters(pos, filters);
        self
    }

    /// Set the filters for a tag. Repeated ids keep their first position.
    pub fn set_filters<I>(&mut self, pos: PartOfSpeech, filters: I)
    where
        I: IntoIterator<Item = FilterId>,
    {
        let mut ordered: Vec<FilterId> = Vec::new();
        for id in filters {
            if !ordered.contains(&id) {
                ordered.push(id);
            }
        }
        self.by_pos.insert(pos, ordered);
    }

    /// Drop the configuration of a tag so it falls back to the default.
    pub fn clear_filters(&mut self, pos: PartOfSpeech) {
        self.by_pos.remove(&pos);
    }

    /// The filters applied to entries of `pos`.
    pub fn filters_for(&self, pos: PartOfSpeech) -> &[FilterId] {
        self.by_pos
            .get(&pos)
            .map(|filters| filters.as_slice())
            .unwrap_or(&DEFAULT_FILTERS)
    }

    /// Explicitly configured tags and their filters.
    pub fn iter(&self) -> impl Iterator<Item = (PartOfSpeech, &[FilterId])> {
        self.by_pos
            .iter()
            .map(|(pos, filters)| (*pos, filters.as_slice()))
    }

    /// The persisted form: tag string → filter id strings.
    pub fn to_record(&self) -> BTreeMap<String, Vec<String>> {
        self.by_pos
            .iter()
            .map(|(pos, filters)| {
                (
                    pos.to_string(),
                    filters.iter().map(|id| id.to_string()).collect(),
                )
            })
            .collect()
    }

    /// Rebuild from the persisted form.
    ///
    /// Fails with a configuration error on an unknown tag or filter id.
    pub fn from_record(record: &BTreeMap<String, Vec<String>>) -> Result<Self> {
        let mut config = ActiveFilterConfig::new();
        for (pos, ids) in record {
            let pos: PartOfSpeech = pos
                .parse()
                .map_err(|_| MweError::config(format!("unknown part-of-speech tag '{pos}' in active filters")))?;
            let filters = ids
                .iter()
                .map(|id| id.parse::<FilterId>())
                .collect::<Result<Vec<_>>>()?;
            config.set_filters(pos, filters);
        }
        Ok(config)
    }
}
