//! Translation of parsed rule documents into target formalisms.
//!
//! This crate provides:
//! - [`Translator`] - The capability the driver depends on
//! - [`Target`] - Selection of a concrete backend
//! - [`PrologTranslator`] and [`TptpTranslator`] - The backends
//! - [`SignatureTable`] - Arity bookkeeping shared across a run
//!
//! Every backend renders a whole document in memory before writing it, so a
//! rejected document contributes nothing to the output.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod naming;
pub mod normalize;
pub mod prolog;
pub mod signature;
pub mod tptp;
pub mod translator;

pub use normalize::{Clause, normalize};
pub use prolog::PrologTranslator;
pub use signature::SignatureTable;
pub use tptp::TptpTranslator;
pub use translator::{Target, Translator, UnknownTarget, read_source};
