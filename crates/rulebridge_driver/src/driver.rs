//! The translation driver.
//!
//! The driver opens every document of a [`RunRequest`] in order, hands each
//! to one run-scoped [`Translator`], and writes everything to a single sink:
//! rule-base translations, one [`SEPARATOR`], then the query translation.
//! The first failure stops the run; documents after it are never opened and
//! output already written stays in the sink.

use std::io::{Read, Write};

use rulebridge_foundation::{
    AccessFailure, DocumentRef, DocumentSource, Error, ErrorKind, Result, RunRequest,
};
use rulebridge_translate::Translator;
use tracing::{debug, info, warn};

use crate::state::RunState;

/// Written once between the rule-base translations and the query.
pub const SEPARATOR: &str = "\n";

/// Summary of a successful run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Number of rule bases translated.
    pub rule_bases_translated: usize,
    /// Whether a query was translated.
    pub query_translated: bool,
    /// Final state of the run. Always [`RunState::Done`].
    pub state: RunState,
}

/// Sequences documents through a translator.
#[derive(Clone, Debug, Default)]
pub struct Driver<S> {
    source: S,
}

impl<S: DocumentSource> Driver<S> {
    /// Creates a driver that resolves documents through `source`.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// The document source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Translates every document of `request` into `output`.
    ///
    /// # Errors
    /// Returns `DocumentAccess` if a document cannot be opened or read,
    /// `Translation` if the translator rejects a document, and `Output` if
    /// the sink fails. Output written before the failure is kept.
    pub fn run<T, W>(
        &self,
        request: &RunRequest,
        translator: &mut T,
        output: &mut W,
    ) -> Result<RunReport>
    where
        T: Translator + ?Sized,
        W: Write,
    {
        info!(
            target_formalism = %translator.target(),
            rule_bases = request.rule_bases().len(),
            query = request.query().is_some(),
            "starting translation run"
        );
        if request.import_closure() {
            warn!("import closure requested; imports are not resolved");
        }

        let mut state = RunState::Idle;
        match self.run_steps(request, translator, output, &mut state) {
            Ok(report) => {
                info!(
                    rule_bases = report.rule_bases_translated,
                    query = report.query_translated,
                    "translation run finished"
                );
                Ok(report)
            }
            Err(error) => {
                transition(&mut state, RunState::Failed);
                Err(error)
            }
        }
    }

    fn run_steps<T>(
        &self,
        request: &RunRequest,
        translator: &mut T,
        output: &mut dyn Write,
        state: &mut RunState,
    ) -> Result<RunReport>
    where
        T: Translator + ?Sized,
    {
        for (index, document) in request.rule_bases().iter().enumerate() {
            transition(state, RunState::TranslatingRuleBases { index });
            self.translate_document(document, output, |input, sink| {
                translator.translate_rule_base(input, sink)
            })?;
            output.flush().map_err(Error::output)?;
        }

        output
            .write_all(SEPARATOR.as_bytes())
            .map_err(Error::output)?;
        output.flush().map_err(Error::output)?;
        transition(state, RunState::EmittedSeparator);

        let query_translated = match request.query() {
            Some(query) => {
                transition(state, RunState::TranslatingQuery);
                self.translate_document(query, output, |input, sink| {
                    translator.translate_query(input, sink)
                })?;
                output.flush().map_err(Error::output)?;
                true
            }
            None => false,
        };

        transition(state, RunState::Done);
        Ok(RunReport {
            rule_bases_translated: request.rule_bases().len(),
            query_translated,
            state: *state,
        })
    }

    /// Opens `document`, translates it, and releases the stream on every path.
    fn translate_document<F>(
        &self,
        document: &DocumentRef,
        output: &mut dyn Write,
        translate: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut dyn Read, &mut dyn Write) -> Result<()>,
    {
        let mut reader = self.source.open(document)?;
        debug!(%document, "opened document");
        let input: &mut dyn Read = &mut reader;
        translate(input, output).map_err(|error| attribute(document, error))?;
        debug!(%document, "translated document");
        Ok(())
    }
}

/// Attributes a translator failure to `document`.
///
/// Read failures become `DocumentAccess`, sink failures pass through, and
/// everything else is wrapped as a `Translation` error with the cause intact.
fn attribute(document: &DocumentRef, error: Error) -> Error {
    match error.kind {
        ErrorKind::InputRead(cause) => {
            Error::document_access(document.clone(), AccessFailure::Unreadable(cause))
        }
        kind @ (ErrorKind::Output(_) | ErrorKind::DocumentAccess { .. }) => Error::new(kind),
        kind => Error::translation(document.clone(), Error::new(kind)),
    }
}

fn transition(state: &mut RunState, next: RunState) {
    debug!(from = %state, to = %next, "run state");
    *state = next;
}
