//! Reverse iterator over an ordered sequence.
//!
//! Walks from the last position to the first, one element per pull, then
//! reports exhaustion forever after. The cursor only moves down; there is no
//! reset. Iterating again means building a new `Reverse`.
//!
//! ```text
//! source = [a, b, c]        cursor = 3   Active
//!   advance -> Yielded(c)   cursor = 2   Active
//!   advance -> Yielded(b)   cursor = 1   Active
//!   advance -> Yielded(a)   cursor = 0   Exhausted
//!   advance -> Exhausted    cursor = 0   Exhausted
//! ```

use std::fmt;
use std::iter::FusedIterator;

use backstep_seq::Sequence;

use crate::pull::{Pull, PullIterator};

/// Lifecycle of a [`Reverse`] iterator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IterState {
    /// At least one element remains.
    Active,
    /// Cursor reached zero. Terminal.
    Exhausted,
}

/// Pulls the elements of `source` last-to-first.
///
/// `cursor` is "one past the next element to yield" and always satisfies
/// `0 <= cursor <= source.len()`. Each successful pull decrements it by one
/// and reads `source.at(cursor)` at the new value, so no read ever falls
/// outside `[0, len)`.
///
/// Not `Clone`: an iterator has one owner and one position.
pub struct Reverse<S> {
    source: S,
    cursor: usize,
}

impl<S: Sequence> Reverse<S> {
    /// Start at the end of `source`. An empty source is exhausted immediately.
    pub fn new(source: S) -> Self {
        let cursor = source.len();
        tracing::trace!(len = cursor, "reverse iterator created");
        Reverse { source, cursor }
    }

    #[inline]
    pub fn state(&self) -> IterState {
        if self.cursor == 0 {
            IterState::Exhausted
        } else {
            IterState::Active
        }
    }

    /// Current cursor: one past the index the next pull will read.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Elements left to yield. Equal to the cursor.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.cursor
    }

    /// Elements yielded so far.
    #[inline]
    pub fn pulled(&self) -> usize {
        self.source.len().saturating_sub(self.cursor)
    }

    #[inline]
    pub fn len_source(&self) -> usize {
        self.source.len()
    }

    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Give back the source, abandoning the position.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: Sequence> PullIterator for Reverse<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Pull<S::Item> {
        let Some(index) = self.cursor.checked_sub(1) else {
            tracing::trace!("pull on exhausted reverse iterator");
            return Pull::Exhausted;
        };
        self.cursor = index;
        tracing::trace!(index, "reverse iterator yielded");
        if index == 0 {
            tracing::debug!(
                pulled = self.source.len(),
                "reverse iterator exhausted"
            );
        }
        Pull::Yielded(self.source.at(index))
    }
}

impl<S: Sequence> From<S> for Reverse<S> {
    fn from(source: S) -> Self {
        Reverse::new(source)
    }
}

impl<S: Sequence> Iterator for Reverse<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<S::Item> {
        self.advance().yielded()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor, Some(self.cursor))
    }
}

impl<S: Sequence> ExactSizeIterator for Reverse<S> {}

impl<S: Sequence> FusedIterator for Reverse<S> {}

impl<S: Sequence> fmt::Debug for Reverse<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ReverseIterator(cursor={}, len={})",
            self.cursor,
            self.source.len()
        )
    }
}
