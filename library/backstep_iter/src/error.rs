//! Errors for callers that demand values from an iterator.
//!
//! Plain pulls never fail; exhaustion is [`Pull::Exhausted`](crate::Pull).
//! These errors only come from the strict helpers in [`drive`](crate::drive),
//! where the caller asked for a value and none was left.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PullError {
    /// A single required element was not available.
    #[error("iterator is exhausted")]
    Exhausted,

    /// Fewer elements remained than the caller asked for.
    #[error("expected {wanted} elements, iterator was exhausted after {got}")]
    ShortSequence { wanted: usize, got: usize },
}
