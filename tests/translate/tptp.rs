//! Integration tests for the TPTP backend

use std::io::Cursor;

use rulebridge_foundation::{ErrorKind, Result};
use rulebridge_translate::{Target, Translator};

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

#[test]
fn axioms_and_conjecture() {
    let mut translator = Target::Tptp.translator();
    let rules = rule_base(
        translator.as_mut(),
        "Forall ?X ?Y ( _ancestor(?X ?Y) :- _parent(?X ?Y) )\n_parent(_alice _bob)",
    )
    .unwrap();
    assert_eq!(
        rules,
        "fof(ax1, axiom, ! [QX,QY] : (parent(QX,QY) => ancestor(QX,QY))).\n\
         fof(ax2, axiom, parent(alice,bob)).\n"
    );

    let goal = query(translator.as_mut(), "_ancestor(_alice ?Who)").unwrap();
    assert_eq!(
        goal,
        "fof(query1, conjecture, ? [QWho] : ancestor(alice,QWho)).\n"
    );
}

#[test]
fn membership_and_strings() {
    let mut translator = Target::Tptp.translator();
    assert_eq!(
        rule_base(translator.as_mut(), "_alice#_Person\n_name(_alice \"Alice\")").unwrap(),
        "fof(ax1, axiom, member(alice,'Person')).\nfof(ax2, axiom, name(alice,\"Alice\")).\n"
    );
}

#[test]
fn equality_conclusion_is_allowed() {
    let mut translator = Target::Tptp.translator();
    assert_eq!(
        rule_base(translator.as_mut(), "_morning_star = _evening_star").unwrap(),
        "fof(ax1, axiom, (morning_star = evening_star)).\n"
    );
}

#[test]
fn negation_in_query_is_unsupported() {
    let mut translator = Target::Tptp.translator();
    let err = query(translator.as_mut(), "Naf(_p(_a))").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Unsupported(_)));
}

#[test]
fn control_characters_in_strings_are_escaped() {
    let mut translator = Target::Tptp.translator();
    assert_eq!(
        rule_base(translator.as_mut(), "_note(_a \"tab\\there\")").unwrap(),
        "fof(ax1, axiom, note(a,\"tab\\there\")).\n"
    );
}

#[test]
fn global_names_are_marked() {
    let mut translator = Target::Tptp.translator();
    assert_eq!(
        rule_base(translator.as_mut(), "_p(_a)\np(_a _b)").unwrap(),
        "fof(ax1, axiom, p(a)).\nfof(ax2, axiom, ':p'(a,b)).\n"
    );
}
