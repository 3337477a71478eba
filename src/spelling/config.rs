//! Construction-time configuration of a dictionary.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FastSpellError, Result};
use crate::util::levenshtein::EditMetric;

/// Default cap on the edit distance of queries and indexing passes.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Default cap on the length (in characters) of any accepted word.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 255;

/// Hard ceiling for `max_distance`.
pub const MAX_DISTANCE_LIMIT: usize = 8;

/// Ceiling on the deletion variants a single word of `max_word_length`
/// characters may produce at depth `max_distance`. Both indexing a word and
/// probing a query enumerate that many variants.
pub const MAX_VARIANTS_PER_WORD: u64 = 1_000_000;

/// Capacities of a dictionary, fixed for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Maximum edit distance for queries; also the deletion depth of the index.
    pub max_distance: usize,
    /// Maximum word length, in characters, for added and queried words.
    pub max_word_length: usize,
    /// Edit operations counted by the distance.
    pub metric: EditMetric,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig {
            max_distance: DEFAULT_MAX_DISTANCE,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            metric: EditMetric::Levenshtein,
        }
    }
}

impl DictionaryConfig {
    /// Check the capacities.
    pub fn validate(&self) -> Result<()> {
        if self.max_word_length == 0 {
            return Err(FastSpellError::invalid_config(
                "max_word_length must be greater than 0",
            ));
        }
        if self.max_distance > MAX_DISTANCE_LIMIT {
            return Err(FastSpellError::invalid_config(format!(
                "max_distance {} exceeds the supported limit {MAX_DISTANCE_LIMIT}",
                self.max_distance
            )));
        }
        let variants = self.max_variants_per_word();
        if variants > MAX_VARIANTS_PER_WORD {
            return Err(FastSpellError::invalid_config(format!(
                "max_distance {} with max_word_length {} yields {variants} deletion variants per word, above {MAX_VARIANTS_PER_WORD}",
                self.max_distance, self.max_word_length
            )));
        }
        Ok(())
    }

    /// Deletion variants of a word of `max_word_length` characters with up to
    /// `max_distance` deletions: `sum(C(L, i) for i in 0..=k)`, saturating at
    /// `u64::MAX`.
    pub fn max_variants_per_word(&self) -> u64 {
        let length = self.max_word_length as u128;
        let depth = self.max_distance.min(self.max_word_length) as u128;

        let mut term: u128 = 1;
        let mut total: u128 = 1;
        for i in 1..=depth {
            // C(L, i) = C(L, i - 1) * (L - i + 1) / i, exact at every step
            term = term * (length - i + 1) / i;
            total += term;
            if total > u128::from(u64::MAX) {
                return u64::MAX;
            }
        }
        u64::try_from(total).unwrap_or(u64::MAX)
    }

    /// Load and validate a configuration from a JSON file. Missing fields
    /// take their default value.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: DictionaryConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}
