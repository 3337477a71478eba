//! # FastSpell
//!
//! A fuzzy-matching dictionary engine: given an append-only set of reference
//! words, find the closest ones to a query within a bounded number of edits.
//!
//! ## Features
//!
//! - Symmetric-deletion index for sub-linear candidate lookup
//! - Banded, early-terminating edit distance (Levenshtein or OSA)
//! - Deterministic best match with the number of equally close words
//! - Pluggable word normalization
//! - Thread-safe reads with parallel batch lookups
//!
//! ```
//! use fastspell::spelling::Dictionary;
//!
//! let dictionary = Dictionary::default();
//! dictionary.extend(["prout", "pret", "part", "tourte"]).unwrap();
//!
//! let m = dictionary.best_match("pro", None).unwrap().unwrap();
//! assert_eq!((m.word.as_str(), m.distance, m.count), ("part", 2, 3));
//! ```

pub mod cli;
pub mod error;
pub mod spelling;
pub mod util;

pub mod prelude {
    pub use crate::error::{FastSpellError, Result};
    pub use crate::spelling::{
        Dictionary, DictionaryConfig, DictionaryMatch, DictionaryStats, Normalizer,
    };
    pub use crate::util::levenshtein::EditMetric;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
