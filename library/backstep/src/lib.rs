#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
//! Backstep - reverse text by pulling from a reverse iterator.
//!
//! The binary is a thin shell over this library:
//!
//! ```text
//! args ──► parse_args() ──► Action
//!                             │
//!                             ▼ Reverse(Invocation)
//!          init_tracing() ──► run() ──► Reverse<S>::advance() ... ──► stdout
//! ```
//!
//! # Commands
//!
//! - `chars <text...>` - characters last to first (`test` becomes `tset`)
//! - `words <word...>` - arguments last to first
//! - `lines` - stdin lines last to first

pub mod cli;
pub mod config;
mod error;
mod tracing_setup;

pub use cli::{parse_args, run, Action, Command, Invocation};
pub use config::RunConfig;
pub use error::CliError;
pub use tracing_setup::init_tracing;
