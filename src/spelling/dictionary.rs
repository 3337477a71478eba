//! The dictionary facade.
//!
//! [`Dictionary`] owns the word store and the deletion index behind a single
//! reader–writer lock, applies the configured [`Normalizer`] and enforces the
//! capacity limits before any engine work starts. Queries share the read
//! lock; `add`, `extend` and `load` take the write lock, so a word is never
//! visible in the store without its index entries.

use std::fmt;
use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{FastSpellError, Result};
use crate::spelling::config::DictionaryConfig;
use crate::spelling::index::DeletionIndex;
use crate::spelling::loader::{read_words, read_words_from_file};
use crate::spelling::normalize::{IdentityNormalizer, Normalizer};
use crate::spelling::query::{DictionaryMatch, QueryEngine};
use crate::spelling::store::WordStore;
use crate::util::deletion::CharBuf;
use crate::util::levenshtein::EditMetric;

/// Size figures of a dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryStats {
    /// Distinct words.
    pub words: usize,
    /// Distinct deletion variants in the index.
    pub variants: usize,
    /// (variant, word) pairs in the index.
    pub postings: usize,
    /// Configured maximum query distance, also the index depth.
    pub max_distance: usize,
    /// Configured maximum word length, in characters.
    pub max_word_length: usize,
}

/// Store and index, always mutated together.
#[derive(Debug)]
struct Tables {
    store: WordStore,
    index: DeletionIndex,
}

impl Tables {
    fn new(config: &DictionaryConfig) -> Self {
        Tables {
            store: WordStore::new(config.max_word_length),
            index: DeletionIndex::new(),
        }
    }

    fn insert(&mut self, word: &str, max_distance: usize) -> Result<bool> {
        let (id, added) = self.store.insert(word)?;
        if added {
            let chars: CharBuf = word.chars().collect();
            self.index.index(id, &chars, max_distance);
        }
        Ok(added)
    }

    fn engine(&self, metric: EditMetric) -> QueryEngine<'_> {
        QueryEngine::new(&self.store, &self.index, metric)
    }
}

/// Append-only fuzzy-matching dictionary.
///
/// # Examples
///
/// ```
/// use fastspell::spelling::{Dictionary, DictionaryConfig};
///
/// let dictionary = Dictionary::new(DictionaryConfig::default()).unwrap();
/// dictionary.extend(["prout", "pret", "part", "tourte"]).unwrap();
///
/// let m = dictionary.best_match("pet", Some(2)).unwrap().unwrap();
/// assert_eq!(m.word, "pret");
/// assert_eq!(m.distance, 1);
/// ```
pub struct Dictionary {
    config: DictionaryConfig,
    normalizer: Arc<dyn Normalizer>,
    tables: RwLock<Tables>,
}

impl Dictionary {
    /// Create an empty dictionary that does not normalize words.
    pub fn new(config: DictionaryConfig) -> Result<Self> {
        Self::with_normalizer(config, IdentityNormalizer)
    }

    /// Create an empty dictionary applying `normalizer` to every added and
    /// queried word.
    pub fn with_normalizer<N>(config: DictionaryConfig, normalizer: N) -> Result<Self>
    where
        N: Normalizer + 'static,
    {
        config.validate()?;
        log::debug!(
            "creating dictionary (max_distance={}, max_word_length={}, metric={}, normalizer={})",
            config.max_distance,
            config.max_word_length,
            config.metric.name(),
            normalizer.name()
        );
        Ok(Self::from_parts(config, Arc::new(normalizer)))
    }

    fn from_parts(config: DictionaryConfig, normalizer: Arc<dyn Normalizer>) -> Self {
        let tables = RwLock::new(Tables::new(&config));
        Dictionary {
            config,
            normalizer,
            tables,
        }
    }

    /// Add a word. Returns `false` if the (normalized) word was already present.
    pub fn add(&self, word: &str) -> Result<bool> {
        let word = self.prepare_word(word)?;
        self.tables.write().insert(&word, self.config.max_distance)
    }

    /// Add several words, returning how many were new.
    ///
    /// Every word is validated first: if any is rejected nothing is added.
    pub fn extend<I, S>(&self, words: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = self.prepare_words(words)?;

        let mut tables = self.tables.write();
        let mut added = 0;
        for word in &words {
            if tables.insert(word, self.config.max_distance)? {
                added += 1;
            }
        }

        log::debug!(
            "added {added} of {} words ({} words, {} variants, {} postings)",
            words.len(),
            tables.store.len(),
            tables.index.len(),
            tables.index.entry_count()
        );
        Ok(added)
    }

    /// Replace the whole content with `words`, returning the new word count.
    ///
    /// The new tables are built aside and swapped in, so readers see either
    /// the old or the new dictionary and a rejected word leaves the old one
    /// in place.
    pub fn load<I, S>(&self, words: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = self.prepare_words(words)?;

        let mut fresh = Tables::new(&self.config);
        for word in &words {
            fresh.insert(word, self.config.max_distance)?;
        }
        let count = fresh.store.len();

        *self.tables.write() = fresh;
        log::debug!("loaded {count} distinct words");
        Ok(count)
    }

    /// Add the words of a line-oriented reader, see [`read_words`].
    pub fn extend_from_reader<R: BufRead>(&self, reader: R) -> Result<usize> {
        self.extend(read_words(reader)?)
    }

    /// Add the words of a word list file, see [`read_words`].
    pub fn extend_from_file<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        self.extend(read_words_from_file(path)?)
    }

    /// Best match of `word` within `max_distance` edits (the configured
    /// maximum when `None`). `Ok(None)` means no word is close enough.
    pub fn best_match(&self, word: &str, max_distance: Option<usize>) -> Result<Option<DictionaryMatch>> {
        let max_distance = self.resolve_distance(max_distance)?;
        let word = self.prepare_word(word)?;

        let tables = self.tables.read();
        Ok(tables.engine(self.config.metric).query(&word, max_distance))
    }

    /// Whether any word lies within `max_distance` edits of `word`.
    pub fn has_matches(&self, word: &str, max_distance: Option<usize>) -> Result<bool> {
        let max_distance = self.resolve_distance(max_distance)?;
        let word = self.prepare_word(word)?;

        let tables = self.tables.read();
        Ok(tables.engine(self.config.metric).exists_within(&word, max_distance))
    }

    /// Exact membership of the normalized word.
    pub fn contains(&self, word: &str) -> Result<bool> {
        self.has_matches(word, Some(0))
    }

    /// [`Dictionary::best_match`] for a batch of words, evaluated in parallel
    /// against one consistent snapshot.
    pub fn best_matches<S>(
        &self,
        words: &[S],
        max_distance: Option<usize>,
    ) -> Result<Vec<Option<DictionaryMatch>>>
    where
        S: AsRef<str>,
    {
        let max_distance = self.resolve_distance(max_distance)?;
        let queries = self.prepare_words(words)?;

        let tables = self.tables.read();
        let engine = tables.engine(self.config.metric);
        Ok(queries
            .par_iter()
            .map(|word| engine.query(word, max_distance))
            .collect())
    }

    /// Capacity in characters of added and queried words.
    pub fn max_word_length(&self) -> usize {
        self.config.max_word_length
    }

    /// Largest accepted query distance.
    pub fn max_distance_capacity(&self) -> usize {
        self.config.max_distance
    }

    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    /// Name of the configured normalizer.
    pub fn normalizer_name(&self) -> &'static str {
        self.normalizer.name()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.tables.read().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.read().store.is_empty()
    }

    pub fn stats(&self) -> DictionaryStats {
        let tables = self.tables.read();
        DictionaryStats {
            words: tables.store.len(),
            variants: tables.index.len(),
            postings: tables.index.entry_count(),
            max_distance: self.config.max_distance,
            max_word_length: self.config.max_word_length,
        }
    }

    fn resolve_distance(&self, max_distance: Option<usize>) -> Result<usize> {
        let capacity = self.config.max_distance;
        match max_distance {
            None => Ok(capacity),
            Some(d) if d <= capacity => Ok(d),
            Some(d) => Err(FastSpellError::distance_out_of_range(d, capacity)),
        }
    }

    fn prepare_word(&self, word: &str) -> Result<String> {
        let word = self.normalizer.normalize(word);
        let length = word.chars().count();
        if length > self.config.max_word_length {
            return Err(FastSpellError::capacity_exceeded(
                length,
                self.config.max_word_length,
            ));
        }
        Ok(word)
    }

    fn prepare_words<I, S>(&self, words: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|word| self.prepare_word(word.as_ref()))
            .collect()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::from_parts(DictionaryConfig::default(), Arc::new(IdentityNormalizer))
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("config", &self.config)
            .field("normalizer", &self.normalizer.name())
            .field("words", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::spelling::normalize::LowercaseNormalizer;

    fn dictionary() -> Dictionary {
        let dictionary = Dictionary::default();
        dictionary
            .extend(["prout", "pret", "part", "tourte"])
            .unwrap();
        dictionary
    }

    #[test]
    fn test_add_and_query() {
        let dictionary = Dictionary::default();
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.best_match("part", None).unwrap(), None);

        assert!(dictionary.add("part").unwrap());
        assert!(!dictionary.add("part").unwrap());
        assert_eq!(dictionary.len(), 1);

        let m = dictionary.best_match("port", None).unwrap().unwrap();
        assert_eq!((m.word.as_str(), m.distance, m.count), ("part", 1, 1));
    }

    #[test]
    fn test_default_distance_is_capacity() {
        let dictionary = dictionary();
        assert_eq!(
            dictionary.best_match("tour", None).unwrap(),
            dictionary.best_match("tour", Some(2)).unwrap()
        );
        assert!(dictionary.has_matches("tour", None).unwrap());
        assert!(!dictionary.has_matches("tour", Some(1)).unwrap());
    }

    #[test]
    fn test_distance_out_of_range() {
        let dictionary = dictionary();
        match dictionary.best_match("tour", Some(3)) {
            Err(FastSpellError::DistanceOutOfRange { distance, max }) => {
                assert_eq!((distance, max), (3, 2));
            }
            other => panic!("Expected distance error, got {other:?}"),
        }
        assert!(dictionary.has_matches("tour", Some(3)).is_err());
    }

    #[test]
    fn test_capacity_exceeded() {
        let config = DictionaryConfig {
            max_word_length: 5,
            ..Default::default()
        };
        let dictionary = Dictionary::new(config).unwrap();

        assert!(dictionary.add("prout").is_ok());
        assert!(matches!(
            dictionary.add("tourte"),
            Err(FastSpellError::CapacityExceeded { length: 6, max: 5 })
        ));
        assert!(dictionary.best_match("tourte", None).is_err());
        assert!(dictionary.has_matches("tourte", None).is_err());
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn test_extend_is_all_or_nothing() {
        let config = DictionaryConfig {
            max_word_length: 5,
            ..Default::default()
        };
        let dictionary = Dictionary::new(config).unwrap();

        assert!(dictionary.extend(["pret", "tourte", "part"]).is_err());
        assert!(dictionary.is_empty());

        assert_eq!(dictionary.extend(["pret", "part", "pret"]).unwrap(), 2);
    }

    #[test]
    fn test_load_replaces_content() {
        let dictionary = dictionary();
        assert_eq!(dictionary.load(["Saint Denis"]).unwrap(), 1);
        assert!(!dictionary.contains("part").unwrap());

        let m = dictionary.best_match("saint denis", Some(2)).unwrap().unwrap();
        assert_eq!((m.word.as_str(), m.distance, m.count), ("Saint Denis", 2, 1));
    }

    #[test]
    fn test_failed_load_keeps_content() {
        let config = DictionaryConfig {
            max_word_length: 6,
            ..Default::default()
        };
        let dictionary = Dictionary::new(config).unwrap();
        dictionary.extend(["part"]).unwrap();

        assert!(dictionary.load(["pret", "much too long"]).is_err());
        assert!(dictionary.contains("part").unwrap());
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn test_normalizer_applies_to_add_and_query() {
        let dictionary =
            Dictionary::with_normalizer(DictionaryConfig::default(), LowercaseNormalizer).unwrap();
        dictionary.add("Saint Denis").unwrap();

        assert!(dictionary.contains("SAINT DENIS").unwrap());
        let m = dictionary.best_match("saint deni", None).unwrap().unwrap();
        assert_eq!((m.word.as_str(), m.distance), ("saint denis", 1));
        assert_eq!(dictionary.normalizer_name(), "lowercase");
    }

    #[test]
    fn test_contains_is_exact() {
        let dictionary = dictionary();
        assert!(dictionary.contains("pret").unwrap());
        assert!(!dictionary.contains("pet").unwrap());
        assert!(!dictionary.contains("Pret").unwrap());
    }

    #[test]
    fn test_best_matches_batch() {
        let dictionary = dictionary();
        let results = dictionary
            .best_matches(&["tour", "pet", "xyzzy", "pro"], Some(2))
            .unwrap();

        let words: Vec<Option<&str>> = results
            .iter()
            .map(|m| m.as_ref().map(|m| m.word.as_str()))
            .collect();
        assert_eq!(words, vec![Some("tourte"), Some("pret"), None, Some("part")]);
        assert!(dictionary.best_matches(&["tour"], Some(5)).is_err());
    }

    #[test]
    fn test_extend_from_reader_and_stats() {
        let dictionary = Dictionary::new(DictionaryConfig {
            max_distance: 1,
            ..Default::default()
        })
        .unwrap();
        let added = dictionary
            .extend_from_reader(Cursor::new("abc\nabd  \n\nabc\n"))
            .unwrap();
        assert_eq!(added, 2);

        let stats = dictionary.stats();
        assert_eq!(stats.words, 2);
        assert_eq!(stats.variants, 7);
        assert_eq!(stats.postings, 8);
        assert_eq!(stats.max_distance, 1);
    }

    #[test]
    fn test_extend_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tourte\npart\n\ntourte").unwrap();
        file.flush().unwrap();

        let dictionary = Dictionary::default();
        assert_eq!(dictionary.extend_from_file(file.path()).unwrap(), 2);
        assert!(dictionary.contains("tourte").unwrap());
        assert!(dictionary.extend_from_file("/nonexistent/words.txt").is_err());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = DictionaryConfig {
            max_word_length: 0,
            ..Default::default()
        };
        assert!(matches!(
            Dictionary::new(config),
            Err(FastSpellError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_dictionary_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dictionary>();
    }
}
