//! Deletion variant enumeration.
//!
//! A deletion variant of a word is obtained by removing some of its
//! characters while keeping the order of the rest. Symmetric-deletion
//! matching indexes every variant of every dictionary word and probes the
//! variants of the query, so both sides share this enumeration.
//!
//! A word of length `L` has `sum(C(L, i) for i in 0..=k)` deletion position
//! sets with at most `k` removals. Each set is visited once, except that
//! removing one character from a run of equal characters is only tried at the
//! first position of the run. Variants can still repeat (`"aba"` minus `{0,1}`
//! and minus `{1,2}` are both `"a"`), so callers must tolerate duplicates.

use std::ops::ControlFlow;

use smallvec::SmallVec;

/// Inline capacity of a word buffer; longer words spill to the heap.
pub const INLINE_WORD: usize = 32;

/// Character buffer used on the hot paths.
pub type CharBuf = SmallVec<[char; INLINE_WORD]>;

/// Visit every variant of `word` with `0..=max_deletions` characters removed.
///
/// The word itself is visited first. The walk stops early if `visit`
/// returns [`ControlFlow::Break`].
pub fn for_each_deletion<F>(word: &[char], max_deletions: usize, mut visit: F) -> ControlFlow<()>
where
    F: FnMut(&[char]) -> ControlFlow<()>,
{
    let mut buf: CharBuf = word.iter().copied().collect();
    walk(&mut buf, 0, max_deletions, 0, &mut visit)
}

/// Visit every variant of `word` with exactly `deletions` characters removed.
pub fn for_each_deletion_exact<F>(word: &[char], deletions: usize, mut visit: F) -> ControlFlow<()>
where
    F: FnMut(&[char]) -> ControlFlow<()>,
{
    if deletions > word.len() {
        return ControlFlow::Continue(());
    }
    let mut buf: CharBuf = word.iter().copied().collect();
    walk(&mut buf, 0, deletions, deletions, &mut visit)
}

/// Depth-first walk over deletion sets in increasing position order.
///
/// `remaining` is the number of further deletions allowed and `skip_above`
/// the number of those that must still happen before `visit` is called.
fn walk<F>(
    buf: &mut CharBuf,
    start: usize,
    remaining: usize,
    skip_above: usize,
    visit: &mut F,
) -> ControlFlow<()>
where
    F: FnMut(&[char]) -> ControlFlow<()>,
{
    if skip_above == 0 {
        visit(buf)?;
    }
    if remaining == 0 {
        return ControlFlow::Continue(());
    }

    for i in start..buf.len() {
        // Same string as removing buf[i - 1] at this level.
        if i > start && buf[i] == buf[i - 1] {
            continue;
        }
        let removed = buf.remove(i);
        let flow = walk(buf, i, remaining - 1, skip_above.saturating_sub(1), visit);
        buf.insert(i, removed);
        flow?;
    }

    ControlFlow::Continue(())
}
