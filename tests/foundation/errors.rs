//! Integration tests for Error types
//!
//! Tests error construction, display, and attribution.

use std::io;

use rulebridge_foundation::{AccessFailure, DocumentRef, Error, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_document_access_not_found() {
    let err = Error::document_access(DocumentRef::from("missing.rb"), AccessFailure::NotFound);
    assert!(err.is_document_access());
    assert!(!err.is_translation());
    assert_eq!(err.to_string(), "cannot access document missing.rb: not found");
}

#[test]
fn error_document_access_unreadable() {
    let cause = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    let err = Error::document_access(
        DocumentRef::from("secret.rb"),
        AccessFailure::Unreadable(cause),
    );
    let msg = format!("{err}");
    assert!(msg.contains("secret.rb"));
    assert!(msg.contains("unreadable"));
    assert!(msg.contains("denied"));
}

#[test]
fn error_translation_keeps_cause() {
    let cause = Error::arity_conflict("predicate parent", 2, 3);
    let err = Error::translation(DocumentRef::from("kb.rb"), cause);
    assert!(err.is_translation());
    assert_eq!(err.document(), Some(&DocumentRef::from("kb.rb")));

    let ErrorKind::Translation { cause, .. } = &err.kind else {
        panic!("expected translation error");
    };
    assert!(matches!(
        cause.kind,
        ErrorKind::ArityConflict {
            expected: 2,
            actual: 3,
            ..
        }
    ));
    assert!(err.to_string().starts_with("failed to translate kb.rb: arity conflict"));
}

#[test]
fn error_without_document() {
    let err = Error::unsupported("negation");
    assert_eq!(err.document(), None);
    assert!(err.to_string().contains("negation"));
}

#[test]
fn error_output() {
    let err = Error::output(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
    assert!(matches!(err.kind, ErrorKind::Output(_)));
    assert!(err.to_string().contains("pipe closed"));
}

// =============================================================================
// Access Classification
// =============================================================================

#[test]
fn access_failure_from_io() {
    let not_found = AccessFailure::from_io(io::Error::from(io::ErrorKind::NotFound));
    assert!(matches!(not_found, AccessFailure::NotFound));

    let denied = AccessFailure::from_io(io::Error::from(io::ErrorKind::PermissionDenied));
    assert!(matches!(denied, AccessFailure::Unreadable(_)));
}
