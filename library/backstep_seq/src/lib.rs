//! Ordered sequences for the backstep iterators.
//!
//! A [`Sequence`] is anything with a fixed length and positional lookup.
//! Iterators built on top of it only ever ask for `len()` and `at(i)` with
//! `i < len()`, so the trait stays small enough to implement for borrowed
//! slices, owned containers, and shared buffers alike.
//!
//! # Ownership
//!
//! Borrowed sequences (`&[T]`, `&Vec<T>`, `&VecDeque<T>`) yield `&T` and tie
//! the iterator to the borrow, which also rules out mutation while iterating.
//! Owned sequences (`Vec<T>`, `VecDeque<T>`, `[T; N]`, `Box<[T]>`, `Rc<[T]>`,
//! `Arc<[T]>`) yield clones of their elements.
//!
//! Strings are not sequences directly: byte offsets are not character
//! positions. Materialize them with [`Chars`] first.

mod chars;

use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

pub use chars::Chars;

/// Read-only, indexable, fixed-length collection.
///
/// # Contract
///
/// - `len()` does not change while a consumer holds the sequence.
/// - `at(i)` is only called with `i < len()`.
///
/// Implementations index directly and panic on an out-of-range position,
/// the same as slice indexing. A sequence whose length shifts underneath a
/// consumer (through interior mutability, say) is outside this contract and
/// is not detected.
pub trait Sequence {
    /// Element produced by positional lookup.
    type Item;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Element at `index`.
    fn at(&self, index: usize) -> Self::Item;

    /// Whether the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, T> Sequence for &'a [T] {
    type Item = &'a T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &'a T {
        let slice: &'a [T] = *self;
        &slice[index]
    }
}

impl<'a, T> Sequence for &'a Vec<T> {
    type Item = &'a T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &'a T {
        let items: &'a Vec<T> = *self;
        &items[index]
    }
}

impl<'a, T> Sequence for &'a VecDeque<T> {
    type Item = &'a T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &'a T {
        let items: &'a VecDeque<T> = *self;
        &items[index]
    }
}

/// Owned containers that deref to a slice yield clones of their elements.
macro_rules! impl_owned_slice_sequence {
    ($($container:ty),* $(,)?) => {
        $(
            impl<T: Clone> Sequence for $container {
                type Item = T;

                #[inline]
                fn len(&self) -> usize {
                    let slice: &[T] = self;
                    slice.len()
                }

                #[inline]
                fn at(&self, index: usize) -> T {
                    let slice: &[T] = self;
                    slice[index].clone()
                }
            }
        )*
    };
}

impl_owned_slice_sequence!(Vec<T>, Box<[T]>, Rc<[T]>, Arc<[T]>);

impl<T: Clone> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, index: usize) -> T {
        self[index].clone()
    }
}

#[cfg(test)]
mod tests;
