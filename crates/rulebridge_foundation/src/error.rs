//! Error types for the rulebridge system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::document::DocumentRef;

/// The main error type for rulebridge operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a document access error.
    #[must_use]
    pub fn document_access(document: DocumentRef, cause: AccessFailure) -> Self {
        Self::new(ErrorKind::DocumentAccess { document, cause })
    }

    /// Wraps a translator failure with the document it occurred in.
    #[must_use]
    pub fn translation(document: DocumentRef, cause: Error) -> Self {
        Self::new(ErrorKind::Translation {
            document,
            cause: Box::new(cause),
        })
    }

    /// Creates an arity conflict error.
    #[must_use]
    pub fn arity_conflict(symbol: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::ArityConflict {
            symbol: symbol.into(),
            expected,
            actual,
        })
    }

    /// Creates an error for a construct that is well-formed syntax but
    /// semantically invalid.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Malformed(message.into()))
    }

    /// Creates an error for a construct the target formalism cannot express.
    #[must_use]
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unsupported(message.into()))
    }

    /// Creates an input read error.
    #[must_use]
    pub fn input_read(cause: io::Error) -> Self {
        Self::new(ErrorKind::InputRead(cause))
    }

    /// Creates an output sink error.
    #[must_use]
    pub fn output(cause: io::Error) -> Self {
        Self::new(ErrorKind::Output(cause))
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRequest(message.into()))
    }

    /// Returns true if a referenced document could not be opened or read.
    #[must_use]
    pub const fn is_document_access(&self) -> bool {
        matches!(self.kind, ErrorKind::DocumentAccess { .. })
    }

    /// Returns true if a translator rejected a document.
    #[must_use]
    pub const fn is_translation(&self) -> bool {
        matches!(self.kind, ErrorKind::Translation { .. })
    }

    /// Returns the document this error is attributed to, if any.
    #[must_use]
    pub fn document(&self) -> Option<&DocumentRef> {
        match &self.kind {
            ErrorKind::DocumentAccess { document, .. } | ErrorKind::Translation { document, .. } => {
                Some(document)
            }
            _ => None,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A referenced document could not be opened or read.
    #[error("cannot access document {document}: {cause}")]
    DocumentAccess {
        /// The document that was requested.
        document: DocumentRef,
        /// Why it could not be accessed.
        cause: AccessFailure,
    },

    /// A translator failed on a document's content.
    #[error("failed to translate {document}: {cause}")]
    Translation {
        /// The document being translated.
        document: DocumentRef,
        /// The translator's own diagnostic, unchanged.
        cause: Box<Error>,
    },

    /// Syntax error in a source document.
    #[error("parse error at {line}:{column}: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// A predicate or function symbol was used with inconsistent arities.
    #[error("arity conflict for {symbol}: declared with {expected} argument(s), used with {actual}")]
    ArityConflict {
        /// The symbol name.
        symbol: String,
        /// The arity first recorded for the symbol.
        expected: usize,
        /// The arity of the conflicting use.
        actual: usize,
    },

    /// A construct that parses but violates the language's rules.
    #[error("malformed construct: {0}")]
    Malformed(String),

    /// A construct the target formalism cannot express.
    #[error("unsupported construct: {0}")]
    Unsupported(String),

    /// Reading a document stream failed part way.
    #[error("failed to read input: {0}")]
    InputRead(io::Error),

    /// Writing to the output sink failed.
    #[error("failed to write output: {0}")]
    Output(io::Error),

    /// A run request violated its invariants.
    #[error("invalid run request: {0}")]
    InvalidRequest(String),
}

/// Reason a document could not be accessed.
#[derive(Debug)]
pub enum AccessFailure {
    /// No document exists at the referenced location.
    NotFound,
    /// The document exists but could not be opened or read.
    Unreadable(io::Error),
}

impl AccessFailure {
    /// Classifies an I/O error raised while opening or reading a document.
    #[must_use]
    pub fn from_io(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::NotFound
        } else {
            Self::Unreadable(err)
        }
    }
}

impl fmt::Display for AccessFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::Unreadable(err) => write!(f, "unreadable ({err})"),
        }
    }
}
