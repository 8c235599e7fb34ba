//! Integration tests for the Prolog backend

use std::io::Cursor;

use rulebridge_foundation::{ErrorKind, Result};
use rulebridge_translate::{PrologTranslator, Translator};

fn rule_base(translator: &mut dyn Translator, source: &str) -> Result<String> {
    let mut out = Vec::new();
    translator.translate_rule_base(&mut Cursor::new(source), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn query(translator: &mut dyn Translator, source: &str) -> Result<String> {
    let mut out = Vec::new();
    translator.translate_query(&mut Cursor::new(source), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

const FAMILY: &str = "\
% A small family knowledge base
Document(
  Import(<http://example.org/people>)
  Group(
    Forall ?X ?Y ( _ancestor(?X ?Y) :- _parent(?X ?Y) )
    Forall ?X ?Y ?Z ( _ancestor(?X ?Z) :- And(_parent(?X ?Y) _ancestor(?Y ?Z)) )
    _parent(_alice _bob)
    _parent(_bob _carol)
    _alice#_Person
  )
)
";

#[test]
fn family_document() {
    let mut translator = PrologTranslator::new();
    assert_eq!(
        rule_base(&mut translator, FAMILY).unwrap(),
        "ancestor(QX,QY) :- parent(QX,QY).\n\
         ancestor(QX,QZ) :- parent(QX,QY), ancestor(QY,QZ).\n\
         parent(alice,bob).\n\
         parent(bob,carol).\n\
         memterm(alice,'Person').\n"
    );
}

#[test]
fn conjunctive_conclusion_splits() {
    let mut translator = PrologTranslator::new();
    assert_eq!(
        rule_base(
            &mut translator,
            "Forall ?X ( And(_a(?X) _b(?X)) :- _c(?X) )"
        )
        .unwrap(),
        "a(QX) :- c(QX).\nb(QX) :- c(QX).\n"
    );
}

#[test]
fn quoting() {
    let mut translator = PrologTranslator::new();
    assert_eq!(
        rule_base(
            &mut translator,
            "_label(_item \"it's\" <http://x.org/a> has-part Big)"
        )
        .unwrap(),
        "label(item,'it\\'s','http://x.org/a',':has-part',':Big').\n"
    );
}

#[test]
fn control_characters_in_strings_are_escaped() {
    let mut translator = PrologTranslator::new();
    let out = rule_base(&mut translator, "_note(_a \"line one\\nline two\")").unwrap();
    assert_eq!(out, "note(a,'line one\\nline two').\n");
    assert!(!out.trim_end().contains('\n'));
}

#[test]
fn global_and_local_names_never_merge() {
    let mut translator = PrologTranslator::new();
    rule_base(&mut translator, "_p(_a)").unwrap();
    assert_eq!(
        rule_base(&mut translator, "p(_a _b)").unwrap(),
        "':p'(a,b).\n"
    );
    assert_eq!(query(&mut translator, "_p(?X)").unwrap(), "p(QX).\n");
}

#[test]
fn query_existentials_get_fresh_names() {
    let mut translator = PrologTranslator::new();
    rule_base(&mut translator, FAMILY).unwrap();
    assert_eq!(
        query(
            &mut translator,
            "And(Exists ?Y ( _parent(?X ?Y) ) Exists ?Y ( _parent(?Y ?X) ))"
        )
        .unwrap(),
        "parent(QX,E1_Y), parent(E2_Y,QX).\n"
    );
}

#[test]
fn state_carries_into_query() {
    let mut translator = PrologTranslator::new();
    rule_base(&mut translator, FAMILY).unwrap();
    rule_base(&mut translator, "_parent(_carol _dave)").unwrap();

    let err = query(&mut translator, "_ancestor(_alice)").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ArityConflict { .. }));
    assert_eq!(
        query(&mut translator, "_ancestor(_alice ?Who)").unwrap(),
        "ancestor(alice,QWho).\n"
    );
}

#[test]
fn undeclared_variable_is_rejected() {
    let mut translator = PrologTranslator::new();
    let err = rule_base(&mut translator, "_p(?X)").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Malformed(_)));
}

#[test]
fn syntax_error_is_parse_error() {
    let mut translator = PrologTranslator::new();
    let err = rule_base(&mut translator, "Forall ?X _p(?X)").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ParseError { .. }));
}
