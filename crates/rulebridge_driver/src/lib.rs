//! Translation driver for rulebridge.
//!
//! This crate provides:
//! - [`Driver`] - Sequences documents through a [`Translator`](rulebridge_translate::Translator)
//! - [`RunReport`] - What a successful run did
//! - [`RunState`] - Progress of a run

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod driver;
pub mod state;

pub use driver::{Driver, RunReport, SEPARATOR};
pub use state::RunState;
