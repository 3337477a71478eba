//! Reading word lists.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// Read one word per line.
///
/// Trailing whitespace (including `\r`) is trimmed and empty lines are
/// skipped. Leading whitespace is part of the word.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim_end();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Read a word list file, see [`read_words`].
pub fn read_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let words = read_words(BufReader::new(file))?;
    log::info!("read {} words from {}", words.len(), path.display());
    Ok(words)
}
