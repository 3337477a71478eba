//! Symmetric-deletion index.
//!
//! Every string reachable by deleting up to `max_distance` characters from a
//! reference word is mapped to the ids of the words that produce it. Two
//! strings within edit distance `k` always share a variant with at most `k`
//! deletions on each side, so probing the query's own variants finds every
//! candidate without comparing against the whole dictionary.

use std::ops::ControlFlow;

use ahash::AHashMap;

use crate::spelling::store::WordId;
use crate::util::deletion::for_each_deletion;

/// Deletion variant to word ids.
#[derive(Debug, Clone, Default)]
pub struct DeletionIndex {
    buckets: AHashMap<Box<str>, Vec<WordId>>,
    postings: usize,
}

impl DeletionIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `word_id` to the bucket of every deletion variant of `word` with
    /// `0..=max_distance` characters removed. Returns the number of postings
    /// added.
    ///
    /// Words must be indexed once each, in increasing id order; a bucket then
    /// holds each id at most once.
    pub fn index(&mut self, word_id: WordId, word: &[char], max_distance: usize) -> usize {
        let mut key = String::with_capacity(word.len() * 4);
        let mut added = 0;

        let _ = for_each_deletion(word, max_distance, |variant| {
            key.clear();
            key.extend(variant.iter());

            if let Some(bucket) = self.buckets.get_mut(key.as_str()) {
                debug_assert!(bucket.last().is_none_or(|&last| last <= word_id));
                if bucket.last() != Some(&word_id) {
                    bucket.push(word_id);
                    added += 1;
                }
            } else {
                self.buckets.insert(Box::from(key.as_str()), vec![word_id]);
                added += 1;
            }

            ControlFlow::Continue(())
        });

        self.postings += added;
        added
    }

    /// Ids of the words that have `variant` as a deletion variant.
    pub fn lookup(&self, variant: &str) -> &[WordId] {
        self.buckets.get(variant).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct deletion variants.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether nothing has been indexed.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of (variant, word id) pairs.
    pub fn entry_count(&self) -> usize {
        self.postings
    }
}
