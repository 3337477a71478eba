//! Edit distance algorithms.
//!
//! The hot path is [`bounded_distance`], which only explores a diagonal band
//! of the dynamic-programming table and gives up as soon as the threshold is
//! provably exceeded. The unbounded [`levenshtein_distance`] and
//! [`osa_distance`] compute the full table and are kept for verification and
//! diagnostics.
//!
//! All functions operate on Unicode scalar values: a multi-byte character
//! counts as a single edit.

use std::cmp::min;

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

/// Inline capacity of a DP row; longer inputs spill to the heap.
const INLINE_ROW: usize = 64;

type Row = SmallVec<[usize; INLINE_ROW]>;

/// The set of edit operations a distance is measured with.
///
/// Both metrics are compatible with symmetric-deletion candidate generation:
/// any pair of strings within distance `k` shares a common deletion variant
/// with at most `k` deletions on each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMetric {
    /// Insertions, deletions and substitutions.
    #[default]
    Levenshtein,
    /// Levenshtein plus transposition of two adjacent characters, where no
    /// substring is edited more than once.
    OptimalStringAlignment,
}

impl EditMetric {
    /// Short identifier used in logs and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            EditMetric::Levenshtein => "levenshtein",
            EditMetric::OptimalStringAlignment => "osa",
        }
    }

    /// Unbounded distance between two strings under this metric.
    pub fn distance(&self, s1: &str, s2: &str) -> usize {
        match self {
            EditMetric::Levenshtein => levenshtein_distance(s1, s2),
            EditMetric::OptimalStringAlignment => osa_distance(s1, s2),
        }
    }

    /// Bounded distance under this metric, see [`bounded_distance`].
    pub fn bounded_distance(&self, a: &[char], b: &[char], limit: usize) -> Option<usize> {
        bounded_distance(a, b, limit, *self)
    }
}

/// Compute the edit distance between `a` and `b` if it is at most `limit`.
///
/// Returns `None` as soon as the distance is known to exceed `limit`. Only the
/// band of cells with `|i - j| <= limit` is evaluated, and the sweep stops at
/// the first row whose cells all exceed `limit`.
pub fn bounded_distance(a: &[char], b: &[char], limit: usize, metric: EditMetric) -> Option<usize> {
    let (a, b) = strip_common_affixes(a, b);
    let (a, b) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let (m, n) = (a.len(), b.len());

    if n - m > limit {
        return None;
    }
    if m == 0 {
        return Some(n);
    }

    // Cells outside the band hold `big`, which is already over the limit.
    let big = limit + 1;
    let transpositions = metric == EditMetric::OptimalStringAlignment;

    let mut prev2: Row = smallvec![big; n + 1];
    let mut prev: Row = (0..=n).map(|j| min(j, big)).collect();
    let mut curr: Row = smallvec![big; n + 1];

    for i in 1..=m {
        let lo = if i > limit { i - limit } else { 1 };
        let hi = min(n, i + limit);

        curr[0] = min(i, big);
        if lo > 1 {
            curr[lo - 1] = big;
        }

        let ca = a[i - 1];
        let mut row_min = if lo == 1 { curr[0] } else { big };

        for j in lo..=hi {
            let cb = b[j - 1];
            let cost = usize::from(ca != cb);

            let mut value = min(
                prev[j - 1] + cost,             // substitution
                min(prev[j], curr[j - 1]) + 1, // deletion, insertion
            );

            if transpositions && cost == 1 && i > 1 && j > 1 && ca == b[j - 2] && a[i - 2] == cb {
                value = min(value, prev2[j - 2] + 1);
            }

            let value = min(value, big);
            curr[j] = value;
            row_min = min(row_min, value);
        }

        if hi < n {
            curr[hi + 1] = big;
        }

        if row_min > limit {
            return None;
        }

        std::mem::swap(&mut prev2, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[n];
    (distance <= limit).then_some(distance)
}

/// Drop the longest common prefix and suffix; neither can change the distance.
fn strip_common_affixes<'a>(a: &'a [char], b: &'a [char]) -> (&'a [char], &'a [char]) {
    let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let (a, b) = (&a[prefix..], &b[prefix..]);

    let suffix = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();

    (&a[..a.len() - suffix], &b[..b.len() - suffix])
}

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    full_table_distance(s1, s2, false)
}

/// Calculate the optimal string alignment distance, which also considers
/// transpositions of adjacent characters.
pub fn osa_distance(s1: &str, s2: &str) -> usize {
    full_table_distance(s1, s2, true)
}

#[allow(clippy::needless_range_loop)]
fn full_table_distance(s1: &str, s2: &str, transpositions: bool) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = usize::from(s1_chars[i - 1] != s2_chars[j - 1]);

            matrix[i][j] = min(
                min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );

            if transpositions
                && i > 1
                && j > 1
                && s1_chars[i - 1] == s2_chars[j - 2]
                && s1_chars[i - 2] == s2_chars[j - 1]
            {
                matrix[i][j] = min(matrix[i][j], matrix[i - 2][j - 2] + cost);
            }
        }
    }

    matrix[len1][len2]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn bounded(a: &str, b: &str, limit: usize) -> Option<usize> {
        bounded_distance(&chars(a), &chars(b), limit, EditMetric::Levenshtein)
    }

    fn bounded_osa(a: &str, b: &str, limit: usize) -> Option<usize> {
        bounded_distance(&chars(a), &chars(b), limit, EditMetric::OptimalStringAlignment)
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("search", "serach"), 2);
    }

    #[test]
    fn test_osa_distance() {
        assert_eq!(osa_distance("ab", "ba"), 1);
        assert_eq!(osa_distance("search", "serach"), 1);
        assert_eq!(osa_distance("kitten", "sitting"), 3);
        // OSA never edits a substring twice
        assert_eq!(osa_distance("ca", "abc"), 3);
    }

    #[test]
    fn test_bounded_distance_within_limit() {
        assert_eq!(bounded("kitten", "sitting", 3), Some(3));
        assert_eq!(bounded("search", "search", 0), Some(0));
        assert_eq!(bounded("a", "ab", 1), Some(1));
        assert_eq!(bounded("pro", "part", 2), Some(2));
        assert_eq!(bounded("tour", "tourte", 2), Some(2));
        assert_eq!(bounded("", "ab", 2), Some(2));
    }

    #[test]
    fn test_bounded_distance_exceeds_limit() {
        assert_eq!(bounded("kitten", "sitting", 2), None);
        assert_eq!(bounded("a", "abc", 1), None);
        assert_eq!(bounded("abc", "xyz", 2), None);
        assert_eq!(bounded("", "abc", 2), None);
        assert_eq!(bounded("abcdefgh", "hgfedcba", 3), None);
    }

    #[test]
    fn test_bounded_distance_is_symmetric() {
        let pairs = [
            ("abab", "abba"),
            ("pet", "pret"),
            ("rue des marguettes", "rue des marguattes"),
            ("a", "ba"),
            ("xyzzy", "zzyxy"),
        ];
        for (a, b) in pairs {
            for limit in 0..4 {
                assert_eq!(bounded(a, b, limit), bounded(b, a, limit), "{a} / {b} @ {limit}");
            }
        }
    }

    #[test]
    fn test_bounded_agrees_with_full_table() {
        let words = [
            "", "a", "ab", "ba", "abc", "acb", "abab", "abba", "aba", "bab", "aaab", "prout",
            "pret", "part", "tourte", "tour", "pro", "saint denis", "Saint Denis",
        ];
        for a in words {
            for b in words {
                let lev = levenshtein_distance(a, b);
                let osa = osa_distance(a, b);
                for limit in 0..4 {
                    assert_eq!(bounded(a, b, limit), (lev <= limit).then_some(lev));
                    assert_eq!(bounded_osa(a, b, limit), (osa <= limit).then_some(osa));
                }
            }
        }
    }

    #[test]
    fn test_transposition_policy() {
        assert_eq!(bounded("abab", "abba", 2), Some(2));
        assert_eq!(bounded_osa("abab", "abba", 2), Some(1));
        assert_eq!(bounded("teh", "the", 1), None);
        assert_eq!(bounded_osa("teh", "the", 1), Some(1));
    }

    #[test]
    fn test_multibyte_characters_are_single_edits() {
        assert_eq!(bounded("café", "cafe", 1), Some(1));
        assert_eq!(bounded("naïve", "naive", 0), None);
        assert_eq!(levenshtein_distance("日本語", "日本"), 1);
    }

    #[test]
    fn test_metric_names() {
        assert_eq!(EditMetric::default(), EditMetric::Levenshtein);
        assert_eq!(EditMetric::Levenshtein.name(), "levenshtein");
        assert_eq!(EditMetric::OptimalStringAlignment.name(), "osa");
        assert_eq!(EditMetric::OptimalStringAlignment.distance("ab", "ba"), 1);
    }
}
