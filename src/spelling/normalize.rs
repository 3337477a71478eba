//! Word normalization applied before words reach the engine.
//!
//! The engine compares words byte for byte. Case folding, accent stripping
//! or any other canonicalization is the job of a [`Normalizer`], which the
//! dictionary applies to every added and queried word.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// A pure `string -> string` transformation.
pub trait Normalizer: Send + Sync {
    /// Normalize a single word.
    fn normalize(&self, word: &str) -> String;

    /// Name of this normalizer.
    fn name(&self) -> &'static str;
}

impl<F> Normalizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn normalize(&self, word: &str) -> String {
        self(word)
    }

    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Leaves words untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNormalizer;

impl Normalizer for IdentityNormalizer {
    fn normalize(&self, word: &str) -> String {
        word.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

/// Lowercases words.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseNormalizer;

impl Normalizer for LowercaseNormalizer {
    fn normalize(&self, word: &str) -> String {
        word.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

/// Strips accents by decomposing words (NFD) and dropping combining marks,
/// optionally lowercasing the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccentFoldingNormalizer {
    lowercase: bool,
}

impl AccentFoldingNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also lowercase the folded word.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }
}

impl Normalizer for AccentFoldingNormalizer {
    fn normalize(&self, word: &str) -> String {
        let folded = word.nfd().filter(|c| !is_combining_mark(*c));
        if self.lowercase {
            folded.flat_map(char::to_lowercase).collect()
        } else {
            folded.collect()
        }
    }

    fn name(&self) -> &'static str {
        if self.lowercase {
            "accent_folding_lowercase"
        } else {
            "accent_folding"
        }
    }
}
