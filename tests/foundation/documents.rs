//! Integration tests for document sources

use std::io::Read;

use rulebridge_foundation::{
    AccessFailure, DocumentRef, DocumentSource, ErrorKind, FileSource, MemorySource,
};

fn read_all(source: &impl DocumentSource, document: &str) -> String {
    let mut reader = source.open(&DocumentRef::from(document)).unwrap();
    let mut text = String::new();
    reader.read_to_string(&mut text).unwrap();
    text
}

#[test]
fn file_source_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kb.rb");
    std::fs::write(&path, "_p(_x)").unwrap();

    let text = read_all(&FileSource::new(), path.to_str().unwrap());
    assert_eq!(text, "_p(_x)");
}

#[test]
fn file_source_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let document = DocumentRef::new(dir.path().join("missing.rb"));
    let err = FileSource::new().open(&document).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::DocumentAccess {
            cause: AccessFailure::NotFound,
            ..
        }
    ));
    assert_eq!(err.document(), Some(&document));
}

#[test]
fn memory_source_round_trip() {
    let source = MemorySource::new().with("a.rb", "_p(_a)").with("b.rb", "_q(_b)");
    assert_eq!(source.len(), 2);
    assert_eq!(read_all(&source, "b.rb"), "_q(_b)");
    assert_eq!(read_all(&&source, "a.rb"), "_p(_a)");
}

#[test]
fn memory_source_missing_document() {
    let err = MemorySource::new()
        .open(&DocumentRef::from("nope.rb"))
        .unwrap_err();
    assert!(err.is_document_access());
}

#[test]
fn memory_source_opens_are_independent() {
    let source = MemorySource::new().with("a.rb", "abc");
    let mut first = source.open(&DocumentRef::from("a.rb")).unwrap();
    let mut buf = [0u8; 2];
    first.read_exact(&mut buf).unwrap();
    assert_eq!(read_all(&source, "a.rb"), "abc");
}
