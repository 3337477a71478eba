//! Candidate generation, verification and aggregation.
//!
//! A query probes the deletion index with its own deletion variants one
//! deletion level at a time. A word at edit distance `t` from the query is
//! always reached by some variant with at most `t` deletions, so once level
//! `k` is exhausted every word at distance `<= k` has been verified. The
//! search therefore stops as soon as the best distance found is below the
//! next level.

use std::fmt;
use std::ops::ControlFlow;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::spelling::index::DeletionIndex;
use crate::spelling::store::{WordId, WordStore};
use crate::util::deletion::{CharBuf, for_each_deletion_exact};
use crate::util::levenshtein::EditMetric;

/// Best match of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryMatch {
    /// Representative closest word: the lexicographically smallest one when
    /// several words share the minimum distance.
    pub word: String,
    /// Edit distance between the query and `word`.
    pub distance: usize,
    /// Number of distinct dictionary words at `distance`.
    pub count: usize,
}

impl fmt::Display for DictionaryMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, d={}, c={})", self.word, self.distance, self.count)
    }
}

/// Running minimum while candidates are verified.
struct Best {
    id: WordId,
    distance: usize,
    count: usize,
}

/// Read-only query view over a word store and its deletion index.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    store: &'a WordStore,
    index: &'a DeletionIndex,
    metric: EditMetric,
}

impl<'a> QueryEngine<'a> {
    /// Create a query engine over an index built from `store`.
    pub fn new(store: &'a WordStore, index: &'a DeletionIndex, metric: EditMetric) -> Self {
        QueryEngine {
            store,
            index,
            metric,
        }
    }

    /// Find the closest words within `max_distance` edits of `word`.
    ///
    /// `max_distance` must not exceed the depth the index was built with.
    pub fn query(&self, word: &str, max_distance: usize) -> Option<DictionaryMatch> {
        let query: CharBuf = word.chars().collect();
        let mut best: Option<Best> = None;
        let mut seen: AHashSet<WordId> = AHashSet::new();
        let mut candidate = CharBuf::new();
        let mut key = String::with_capacity(word.len());
        let mut probes = 0usize;

        for depth in 0..=max_distance.min(query.len()) {
            if best.as_ref().is_some_and(|b| b.distance < depth) {
                break;
            }

            let flow = for_each_deletion_exact(&query, depth, |variant| {
                key.clear();
                key.extend(variant.iter());
                probes += 1;

                for &id in self.index.lookup(&key) {
                    if !seen.insert(id) {
                        continue;
                    }

                    let limit = best.as_ref().map_or(max_distance, |b| b.distance);
                    let text = self.store.get(id);
                    candidate.clear();
                    candidate.extend(text.chars());

                    let Some(distance) = self.metric.bounded_distance(&query, &candidate, limit)
                    else {
                        continue;
                    };

                    match best.as_mut() {
                        Some(b) if distance == b.distance => {
                            b.count += 1;
                            if text < self.store.get(b.id) {
                                b.id = id;
                            }
                        }
                        _ => {
                            best = Some(Best {
                                id,
                                distance,
                                count: 1,
                            })
                        }
                    }

                    // Words are distinct: nothing else can be at distance 0.
                    if distance == 0 {
                        return ControlFlow::Break(());
                    }
                }

                ControlFlow::Continue(())
            });

            if flow.is_break() {
                break;
            }
        }

        log::trace!(
            "query {word:?} (d={max_distance}): {probes} probes, {} candidates",
            seen.len()
        );

        best.map(|b| DictionaryMatch {
            word: self.store.get(b.id).to_string(),
            distance: b.distance,
            count: b.count,
        })
    }

    /// Whether any word lies within `max_distance` edits of `word`.
    ///
    /// Stops at the first verified candidate.
    pub fn exists_within(&self, word: &str, max_distance: usize) -> bool {
        let query: CharBuf = word.chars().collect();
        let mut seen: AHashSet<WordId> = AHashSet::new();
        let mut candidate = CharBuf::new();
        let mut key = String::with_capacity(word.len());

        (0..=max_distance.min(query.len())).any(|depth| {
            for_each_deletion_exact(&query, depth, |variant| {
                key.clear();
                key.extend(variant.iter());

                for &id in self.index.lookup(&key) {
                    if !seen.insert(id) {
                        continue;
                    }
                    candidate.clear();
                    candidate.extend(self.store.get(id).chars());
                    if self
                        .metric
                        .bounded_distance(&query, &candidate, max_distance)
                        .is_some()
                    {
                        return ControlFlow::Break(());
                    }
                }

                ControlFlow::Continue(())
            })
            .is_break()
        })
    }
}
