//! Core types, errors, and document sources for rulebridge.
//!
//! This crate provides:
//! - [`Error`] - Error type shared by every layer
//! - [`DocumentRef`] - Lazily opened document handles
//! - [`DocumentSource`] - Resolution of handles into input streams
//! - [`RunRequest`] - The validated description of a translation run

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod document;
pub mod error;
pub mod request;

pub use document::{DocumentRef, DocumentSource, FileSource, MemorySource};
pub use error::{AccessFailure, Error, ErrorKind};
pub use request::RunRequest;

/// Result type alias using the rulebridge error.
pub type Result<T> = std::result::Result<T, Error>;
