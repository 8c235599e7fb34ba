//! Command-line interface, logging, and run configuration for rulebridge.
//!
//! This crate provides:
//! - [`Cli`] - Command-line arguments
//! - [`RunConfig`] - The validated configuration of a run
//! - [`execute`] - Runs the driver over the filesystem
//! - [`logging`] - Subscriber setup for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod config;
pub mod logging;

use std::io::Write;

pub use cli::{Cli, LogLevel};
pub use config::{OutputTarget, RunConfig};
use rulebridge_driver::{Driver, RunReport};
use rulebridge_foundation::{DocumentSource, FileSource, Result};
use tracing::debug;

/// Runs `config` against the filesystem, writing to its output destination.
///
/// # Errors
/// Returns the first error of the run, or an `Output` error if the
/// destination cannot be opened.
pub fn execute(config: &RunConfig) -> Result<RunReport> {
    let mut output = config.output().open()?;
    execute_with(config, FileSource::new(), &mut output)
}

/// Runs `config` against any document source and sink.
///
/// The configured output destination is ignored.
///
/// # Errors
/// Returns the first error of the run.
pub fn execute_with<S, W>(config: &RunConfig, source: S, output: &mut W) -> Result<RunReport>
where
    S: DocumentSource,
    W: Write,
{
    debug!(?config, "resolved configuration");
    let mut translator = config.target().translator();
    Driver::new(source).run(config.request(), translator.as_mut(), output)
}
