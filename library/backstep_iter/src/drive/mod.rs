//! Driving loops over a [`PullIterator`].
//!
//! The iterator never loops on its own; these helpers are the caller side of
//! the protocol. Each one pulls until it has what it needs or sees
//! `Exhausted`, and leaves the iterator wherever it stopped.

use crate::error::PullError;
use crate::pull::{Pull, PullIterator};

/// Pull every remaining element, in the order produced.
pub fn drain<I>(iter: &mut I) -> Vec<I::Item>
where
    I: PullIterator + ?Sized,
{
    let mut items = Vec::new();
    while let Pull::Yielded(item) = iter.advance() {
        items.push(item);
    }
    items
}

/// Pull at most `limit` elements. Stops early on exhaustion.
pub fn take_up_to<I>(iter: &mut I, limit: usize) -> Vec<I::Item>
where
    I: PullIterator + ?Sized,
{
    let mut items = Vec::new();
    while items.len() < limit {
        match iter.advance() {
            Pull::Yielded(item) => items.push(item),
            Pull::Exhausted => break,
        }
    }
    items
}

/// Pull exactly `count` elements or fail.
///
/// On failure the elements that were pulled are consumed and dropped; the
/// error records how many there were.
pub fn take_exact<I>(iter: &mut I, count: usize) -> Result<Vec<I::Item>, PullError>
where
    I: PullIterator + ?Sized,
{
    let items = take_up_to(iter, count);
    if items.len() < count {
        return Err(PullError::ShortSequence {
            wanted: count,
            got: items.len(),
        });
    }
    Ok(items)
}

/// Pull one element, treating exhaustion as an error.
///
/// For callers that have no sensible fallback. Use [`next_or`] when one exists.
pub fn require_next<I>(iter: &mut I) -> Result<I::Item, PullError>
where
    I: PullIterator + ?Sized,
{
    match iter.advance() {
        Pull::Yielded(item) => Ok(item),
        Pull::Exhausted => Err(PullError::Exhausted),
    }
}

/// Pull one element, or return `default` if exhausted.
pub fn next_or<I>(iter: &mut I, default: I::Item) -> I::Item
where
    I: PullIterator + ?Sized,
{
    iter.advance().unwrap_or(default)
}

/// Feed every remaining element to `f`. Returns how many were fed.
pub fn for_each_pulled<I, F>(iter: &mut I, mut f: F) -> usize
where
    I: PullIterator + ?Sized,
    F: FnMut(I::Item),
{
    let mut count: usize = 0;
    while let Pull::Yielded(item) = iter.advance() {
        f(item);
        count = count.saturating_add(1);
    }
    count
}
