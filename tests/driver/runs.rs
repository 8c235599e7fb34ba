//! Integration tests for complete driver runs over the filesystem

use std::fs;
use std::path::{Path, PathBuf};

use rulebridge_driver::{Driver, RunState};
use rulebridge_foundation::{AccessFailure, ErrorKind, FileSource, RunRequest};
use rulebridge_translate::{PrologTranslator, Target};

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn single_fact_then_separator() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.rb", "_p(_x)");

    let request = RunRequest::new([a]).unwrap();
    let mut out = Vec::new();
    let report = Driver::new(FileSource::new())
        .run(&request, &mut PrologTranslator::new(), &mut out)
        .unwrap();

    assert_eq!(out, b"p(x).\n\n");
    assert_eq!(report.rule_bases_translated, 1);
    assert_eq!(report.state, RunState::Done);
}

#[test]
fn missing_second_rule_base() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.rb", "_p(_x)");
    let missing = dir.path().join("missing.rb");
    let c = write(dir.path(), "c.rb", "_q(_y)");

    let request = RunRequest::new([a, missing.clone(), c]).unwrap();
    let mut out = Vec::new();
    let err = Driver::new(FileSource::new())
        .run(&request, &mut PrologTranslator::new(), &mut out)
        .unwrap_err();

    assert_eq!(out, b"p(x).\n");
    assert!(matches!(
        err.kind,
        ErrorKind::DocumentAccess {
            cause: AccessFailure::NotFound,
            ..
        }
    ));
    assert_eq!(err.document().unwrap().path(), missing);
}

#[test]
fn query_translated_against_rule_bases() {
    let dir = tempfile::tempdir().unwrap();
    let kb = write(
        dir.path(),
        "kb.rb",
        "Forall ?X ( _mortal(?X) :- ?X#_Human )\n_socrates#_Human",
    );
    let q = write(dir.path(), "q.rq", "_mortal(?Who)");

    let request = RunRequest::new([kb]).unwrap().with_query(q);
    let mut translator = Target::Tptp.translator();
    let mut out = Vec::new();
    let report = Driver::new(FileSource::new())
        .run(&request, translator.as_mut(), &mut out)
        .unwrap();

    assert!(report.query_translated);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "fof(ax1, axiom, ! [QX] : (member(QX,'Human') => mortal(QX))).\n\
         fof(ax2, axiom, member(socrates,'Human')).\n\
         \n\
         fof(query1, conjecture, ? [QWho] : mortal(QWho)).\n"
    );
}

#[test]
fn arity_conflict_across_rule_bases() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.rb", "_parent(_alice _bob)");
    let b = write(dir.path(), "b.rb", "_parent(_carol)");

    let request = RunRequest::new([a, b.clone()]).unwrap();
    let mut out = Vec::new();
    let err = Driver::new(FileSource::new())
        .run(&request, &mut PrologTranslator::new(), &mut out)
        .unwrap_err();

    assert!(err.is_translation());
    assert_eq!(err.document().unwrap().path(), b);
    assert_eq!(out, b"parent(alice,bob).\n");
}

#[test]
fn missing_query_after_rule_bases() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.rb", "_p(_x)");

    let request = RunRequest::new([a])
        .unwrap()
        .with_query(dir.path().join("missing.rq"));
    let mut out = Vec::new();
    let err = Driver::new(FileSource::new())
        .run(&request, &mut PrologTranslator::new(), &mut out)
        .unwrap_err();

    assert!(err.is_document_access());
    assert_eq!(out, b"p(x).\n\n");
}
