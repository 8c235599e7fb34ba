//! Integration tests for run requests

use proptest::prelude::*;
use rulebridge_foundation::{DocumentRef, ErrorKind, RunRequest};

#[test]
fn empty_request_is_rejected() {
    let err = RunRequest::new(Vec::<String>::new()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidRequest(_)));
}

#[test]
fn query_and_flag_are_carried() {
    let request = RunRequest::new(["kb.rb"])
        .unwrap()
        .with_query("q.rq")
        .with_import_closure(true);
    assert_eq!(request.query(), Some(&DocumentRef::from("q.rq")));
    assert!(request.import_closure());
}

proptest! {
    #[test]
    fn rule_base_order_is_preserved(names in prop::collection::vec("[a-z]{1,8}\\.rb", 1..20)) {
        let request = RunRequest::new(names.clone()).unwrap();
        let kept: Vec<String> = request.rule_bases().iter().map(ToString::to_string).collect();
        prop_assert_eq!(kept, names);
    }
}
