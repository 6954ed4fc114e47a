//! The pull protocol: one step of iteration and its result.

/// Result of a single pull.
///
/// Exhaustion is a variant rather than an error so it travels through the
/// ordinary return path. `Pull<Option<T>>` keeps `Yielded(None)` and
/// `Exhausted` apart, which `Option<Option<T>>` would only do by nesting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub enum Pull<T> {
    /// One produced element.
    Yielded(T),
    /// No further elements. Terminal: every later pull returns this too.
    Exhausted,
}

impl<T> Pull<T> {
    #[inline]
    pub fn is_yielded(&self) -> bool {
        matches!(self, Pull::Yielded(_))
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Pull::Exhausted)
    }

    /// The yielded element as an `Option`.
    #[inline]
    pub fn yielded(self) -> Option<T> {
        match self {
            Pull::Yielded(item) => Some(item),
            Pull::Exhausted => None,
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Pull<&T> {
        match self {
            Pull::Yielded(item) => Pull::Yielded(item),
            Pull::Exhausted => Pull::Exhausted,
        }
    }

    /// Transform the yielded element, leaving exhaustion untouched.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Pull<U> {
        match self {
            Pull::Yielded(item) => Pull::Yielded(f(item)),
            Pull::Exhausted => Pull::Exhausted,
        }
    }

    /// The yielded element, or `default` if exhausted.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Pull::Yielded(item) => item,
            Pull::Exhausted => default,
        }
    }
}

impl<T> From<Option<T>> for Pull<T> {
    #[inline]
    fn from(item: Option<T>) -> Self {
        match item {
            Some(item) => Pull::Yielded(item),
            None => Pull::Exhausted,
        }
    }
}

impl<T> From<Pull<T>> for Option<T> {
    #[inline]
    fn from(pull: Pull<T>) -> Self {
        pull.yielded()
    }
}

/// A stateful, pull-driven iterator.
///
/// Implementors are both the thing iterated and the thing that advances:
/// [`to_iterator`](PullIterator::to_iterator) hands back `self` unchanged,
/// cursor and all, so there is no separate adaptation step.
pub trait PullIterator {
    /// Element produced by each successful pull.
    type Item;

    /// Advance one step.
    ///
    /// Callable at any time, including after exhaustion.
    fn advance(&mut self) -> Pull<Self::Item>;

    /// The iterator itself.
    ///
    /// Not a copy and not a wrapper: pulling from the result continues from
    /// exactly where `self` was.
    #[inline]
    fn to_iterator(self) -> Self
    where
        Self: Sized,
    {
        self
    }
}

impl<I: PullIterator + ?Sized> PullIterator for &mut I {
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) -> Pull<I::Item> {
        (**self).advance()
    }
}
