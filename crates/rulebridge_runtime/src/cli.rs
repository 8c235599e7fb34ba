//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rulebridge_translate::Target;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Translate rule-language documents into Prolog or TPTP.
#[derive(Debug, Parser)]
#[command(name = "rulebridge")]
#[command(version)]
pub struct Cli {
    /// Rule-base documents, translated in the order given
    #[arg(value_name = "RULE_BASE", required = true)]
    pub rule_bases: Vec<PathBuf>,

    /// Query document, translated after every rule base
    #[arg(short, long, value_name = "FILE")]
    pub query: Option<PathBuf>,

    /// Request import-closure resolution (accepted but not acted on)
    #[arg(short, long)]
    pub import_closure: bool,

    /// Target formalism (prolog, tptp)
    #[arg(short, long, default_value_t = Target::Prolog)]
    pub target: Target,

    /// Write the translation to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Set log level (off, error, warn, info, debug, trace)
    /// Overridden by RULEBRIDGE_LOG when set; defaults to 'warn'
    #[arg(short = 'l', long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The log level the flags ask for.
    #[must_use]
    pub fn level_filter(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::DEBUG
        } else {
            self.log_level.map_or(LevelFilter::WARN, Into::into)
        }
    }
}
