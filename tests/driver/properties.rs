//! Property tests for run ordering and repeatability

use std::cell::RefCell;
use std::io::Cursor;

use proptest::prelude::*;
use rulebridge_driver::Driver;
use rulebridge_foundation::{DocumentRef, DocumentSource, MemorySource, Result, RunRequest};
use rulebridge_translate::{PrologTranslator, Translator};

/// Serves documents from memory and records every open.
struct RecordingSource {
    inner: MemorySource,
    opened: RefCell<Vec<DocumentRef>>,
}

impl DocumentSource for RecordingSource {
    type Reader = Cursor<Vec<u8>>;

    fn open(&self, document: &DocumentRef) -> Result<Self::Reader> {
        self.opened.borrow_mut().push(document.clone());
        self.inner.open(document)
    }
}

/// One fact per document, each with its own predicate so arities never clash.
fn documents(facts: &[(u8, u8)]) -> Vec<(String, String)> {
    facts
        .iter()
        .enumerate()
        .map(|(i, (a, b))| (format!("doc{i}.rb"), format!("_p{i}(_c{a} _c{b})")))
        .collect()
}

fn translate_alone(source: &str) -> Vec<u8> {
    let mut out = Vec::new();
    PrologTranslator::new()
        .translate_rule_base(&mut Cursor::new(source), &mut out)
        .unwrap();
    out
}

fn source_for(docs: &[(String, String)]) -> RecordingSource {
    let mut inner = MemorySource::new();
    for (name, content) in docs {
        inner.insert(name.as_str(), content.as_str());
    }
    RecordingSource {
        inner,
        opened: RefCell::new(Vec::new()),
    }
}

fn run(docs: &[(String, String)]) -> (Result<()>, Vec<u8>, Vec<DocumentRef>) {
    let source = source_for(docs);
    let request = RunRequest::new(docs.iter().map(|(name, _)| name.as_str())).unwrap();
    let mut out = Vec::new();
    let result = Driver::new(&source)
        .run(&request, &mut PrologTranslator::new(), &mut out)
        .map(|_| ());
    (result, out, source.opened.into_inner())
}

proptest! {
    #[test]
    fn output_is_ordered_concatenation(facts in prop::collection::vec((0u8..5, 0u8..5), 1..12)) {
        let docs = documents(&facts);
        let (result, out, opened) = run(&docs);
        prop_assert!(result.is_ok());

        let mut expected = Vec::new();
        for (_, content) in &docs {
            expected.extend(translate_alone(content));
        }
        expected.push(b'\n');
        prop_assert_eq!(out, expected);

        let names: Vec<String> = opened.iter().map(ToString::to_string).collect();
        let wanted: Vec<String> = docs.iter().map(|(name, _)| name.clone()).collect();
        prop_assert_eq!(names, wanted);
    }

    #[test]
    fn runs_are_repeatable(facts in prop::collection::vec((0u8..5, 0u8..5), 1..12)) {
        let docs = documents(&facts);
        let (_, first, _) = run(&docs);
        let (_, second, _) = run(&docs);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn failure_stops_at_first_bad_document(
        facts in prop::collection::vec((0u8..5, 0u8..5), 2..12),
        bad in any::<prop::sample::Index>(),
    ) {
        let mut docs = documents(&facts);
        let bad = bad.index(docs.len());
        docs[bad].1 = "_broken(".to_string();

        let (result, out, opened) = run(&docs);
        prop_assert!(result.is_err());

        let mut expected = Vec::new();
        for (_, content) in &docs[..bad] {
            expected.extend(translate_alone(content));
        }
        prop_assert_eq!(out, expected);
        prop_assert_eq!(opened.len(), bad + 1);
    }
}

