//! Resolved run configuration.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use rulebridge_foundation::{Error, Result, RunRequest};
use rulebridge_translate::Target;
use tracing_subscriber::filter::LevelFilter;

use crate::cli::Cli;

/// Where translated output goes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output.
    #[default]
    Stdout,
    /// A file, created or truncated when the run starts.
    File(PathBuf),
}

impl OutputTarget {
    /// Opens a buffered sink for this destination.
    ///
    /// # Errors
    /// Returns an `Output` error if the file cannot be created.
    pub fn open(&self) -> Result<Box<dyn Write>> {
        match self {
            Self::Stdout => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
            Self::File(path) => {
                let file = File::create(path).map_err(Error::output)?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

/// Everything a run needs, validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    request: RunRequest,
    target: Target,
    output: OutputTarget,
    log_level: LevelFilter,
}

impl RunConfig {
    /// Creates a configuration translating `request` to Prolog on stdout.
    #[must_use]
    pub fn new(request: RunRequest) -> Self {
        Self {
            request,
            target: Target::default(),
            output: OutputTarget::default(),
            log_level: LevelFilter::WARN,
        }
    }

    /// Builds a configuration from parsed arguments.
    ///
    /// # Errors
    /// Returns `InvalidRequest` if no rule base was given.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut request =
            RunRequest::new(cli.rule_bases.iter().cloned())?.with_import_closure(cli.import_closure);
        if let Some(query) = &cli.query {
            request = request.with_query(query.clone());
        }

        let output = cli
            .output
            .clone()
            .map_or(OutputTarget::Stdout, OutputTarget::File);

        Ok(Self::new(request)
            .with_target(cli.target)
            .with_output(output)
            .with_log_level(cli.level_filter()))
    }

    /// Sets the target formalism.
    #[must_use]
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Sets the output destination.
    #[must_use]
    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    /// Sets the log level used when `RULEBRIDGE_LOG` is unset.
    #[must_use]
    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// The documents to translate.
    #[must_use]
    pub fn request(&self) -> &RunRequest {
        &self.request
    }

    /// The target formalism.
    #[must_use]
    pub fn target(&self) -> Target {
        self.target
    }

    /// The output destination.
    #[must_use]
    pub fn output(&self) -> &OutputTarget {
        &self.output
    }

    /// The requested log level.
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}
