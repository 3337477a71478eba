//! Fuzzy word matching for FastSpell.
//!
//! The engine finds the dictionary words closest to a query within a bounded
//! number of edits. Words are indexed by their deletion variants
//! ([`index`]), candidates are verified with a banded edit distance
//! ([`crate::util::levenshtein`]) and aggregated into a single
//! [`DictionaryMatch`] ([`query`]). [`Dictionary`] is the thread-safe entry
//! point tying it together with normalization and capacity checks.

pub mod config;
pub mod dictionary;
pub mod index;
pub mod loader;
pub mod normalize;
pub mod query;
pub mod store;

pub use config::DictionaryConfig;
pub use dictionary::{Dictionary, DictionaryStats};
pub use normalize::{AccentFoldingNormalizer, IdentityNormalizer, LowercaseNormalizer, Normalizer};
pub use query::DictionaryMatch;
pub use store::WordId;
