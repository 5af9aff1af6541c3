//! Component lemma ranking.
//!
//! A rank table orders the component lemmas of an entry before they are
//! stored, typically by corpus frequency. Lemmas without letters
//! (punctuation, numbers) rank first; alphabetic lemmas missing from the
//! table rank last. The sort is stable, so equally ranked lemmas keep their
//! sentence order.
//!
//! ```
//! use mwe_detector::lexicon::RankTable;
//!
//! let ranks = RankTable::from_pairs([("off", 3), ("take", 10)]);
//! let lemmas = vec!["take".to_string(), "zzz".to_string(), "off".to_string(), "1".to_string()];
//! assert_eq!(ranks.order(&lemmas), vec!["1", "off", "take", "zzz"]);
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MweError, Result};

/// Rank given to alphabetic lemmas absent from the table.
pub const UNSEEN_RANK: u64 = u64::MAX;

/// Lemma → rank table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankTable(HashMap<String, u64>);

impl RankTable {
    /// Create an empty table.
    pub fn new() -> Self {
        RankTable::default()
    }

    /// Build a table from `(lemma, rank)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        RankTable(pairs.into_iter().map(|(l, r)| (l.into(), r)).collect())
    }

    /// Load a table from a JSON object of `lemma: rank` pairs.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            MweError::parse(format!("failed to open rank table '{}': {}", path.display(), e))
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            MweError::parse(format!("failed to parse rank table '{}': {}", path.display(), e))
        })
    }

    /// Rank of a lemma.
    pub fn rank(&self, lemma: &str) -> u64 {
        if !lemma.chars().any(char::is_alphabetic) {
            return 0;
        }
        self.0
            .get(lemma)
            .or_else(|| self.0.get(&lemma.to_lowercase()))
            .copied()
            .unwrap_or(UNSEEN_RANK)
    }

    /// The lemmas sorted by rank.
    pub fn order(&self, lemmas: &[String]) -> Vec<String> {
        let mut ordered = lemmas.to_vec();
        ordered.sort_by_key(|lemma| self.rank(lemma));
        ordered
    }

    /// Number of ranked lemmas.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
