//! Append-only storage of the distinct reference words.

use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;

use crate::error::{FastSpellError, Result};

/// Dense handle of a stored word, assigned in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(u32);

impl WordId {
    /// Position of the word in insertion order.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The set of reference words.
///
/// Each distinct word is stored once and keeps its [`WordId`] forever; there
/// is no removal.
#[derive(Debug, Clone)]
pub struct WordStore {
    /// Words in id order.
    words: Vec<Arc<str>>,
    /// Reverse mapping for idempotent inserts.
    ids: AHashMap<Arc<str>, WordId>,
    /// Capacity in characters.
    max_word_length: usize,
}

impl WordStore {
    /// Create an empty store accepting words of up to `max_word_length` characters.
    pub fn new(max_word_length: usize) -> Self {
        WordStore {
            words: Vec::new(),
            ids: AHashMap::new(),
            max_word_length,
        }
    }

    /// Insert a word, returning its id and whether it was newly added.
    ///
    /// Re-inserting a stored word returns the existing id.
    pub fn insert(&mut self, word: &str) -> Result<(WordId, bool)> {
        let length = word.chars().count();
        if length > self.max_word_length {
            return Err(FastSpellError::capacity_exceeded(length, self.max_word_length));
        }

        if let Some(&id) = self.ids.get(word) {
            return Ok((id, false));
        }

        let id = u32::try_from(self.words.len())
            .map(WordId)
            .map_err(|_| FastSpellError::other("word store is full"))?;
        let word: Arc<str> = Arc::from(word);
        self.words.push(Arc::clone(&word));
        self.ids.insert(word, id);

        Ok((id, true))
    }

    /// Get the word stored under `id`.
    ///
    /// Ids are only handed out by [`WordStore::insert`] and never invalidated,
    /// so an unknown id is a caller bug and panics.
    pub fn get(&self, id: WordId) -> &str {
        &self.words[id.as_usize()]
    }

    /// Find the id of a stored word.
    pub fn lookup(&self, word: &str) -> Option<WordId> {
        self.ids.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the store holds no word.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Capacity in characters.
    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    /// Iterate over `(id, word)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &str)> + '_ {
        self.words
            .iter()
            .enumerate()
            .map(|(i, word)| (WordId(i as u32), word.as_ref()))
    }
}
