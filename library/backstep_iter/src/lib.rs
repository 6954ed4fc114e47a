#![deny(clippy::arithmetic_side_effects)]
//! Backstep Iter - pull-based reverse iteration.
//!
//! This crate provides:
//! - The pull protocol (`Pull`, `PullIterator`)
//! - The reverse iterator over any [`Sequence`] (`Reverse`, `IterState`)
//! - Driving helpers that pull until exhaustion (`drive`)
//! - The error raised when a caller demands a value that isn't there (`PullError`)
//!
//! # Protocol
//!
//! An iterator here has two capabilities and no others:
//!
//! ```text
//! to_iterator(self) -> Self          // an iterator is its own iterator
//! advance(&mut self) -> Pull<Item>   // Yielded(item) | Exhausted
//! ```
//!
//! `Exhausted` is an ordinary return value, not an error. It is a separate
//! variant, so it cannot be confused with any yielded item, including
//! `None`, `0`, or `""`.
//!
//! # Example
//!
//! ```
//! use backstep_iter::{Pull, PullIterator, Reverse};
//! use backstep_seq::Chars;
//!
//! let mut rev = Reverse::new(Chars::from("rev"));
//! assert_eq!(rev.advance(), Pull::Yielded('v'));
//!
//! let rest: String = rev.collect();
//! assert_eq!(rest, "er");
//! ```

pub mod drive;
mod error;
mod pull;
mod reverse;

pub use backstep_seq::Sequence;
pub use error::PullError;
pub use pull::{Pull, PullIterator};
pub use reverse::{IterState, Reverse};
