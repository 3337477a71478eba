//! Shared utility modules used across FastSpell components.

pub mod deletion;
pub mod levenshtein;
