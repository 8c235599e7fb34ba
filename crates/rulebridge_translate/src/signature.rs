//! Arity bookkeeping shared across the documents of a run.
//!
//! The table is backed by persistent maps, so translators stage changes on a
//! cheap clone and keep the original untouched until a document succeeds.

use im::OrdMap;
use rulebridge_foundation::{Error, Result};
use rulebridge_language::{Formula, Term};

use crate::naming::symbol;

/// Predicate and function arities seen so far in a run.
///
/// Symbols are keyed by their rendered spelling, so a local `_p` and a
/// global `p` are tracked separately.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignatureTable {
    predicates: OrdMap<String, usize>,
    functions: OrdMap<String, usize>,
}

impl SignatureTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name` as a predicate of `arity` arguments.
    ///
    /// # Errors
    /// Returns `ArityConflict` if the predicate was seen with another arity.
    pub fn declare_predicate(&mut self, name: &str, arity: usize) -> Result<()> {
        declare(&mut self.predicates, "predicate", name, arity)
    }

    /// Records `name` as a function (or constant, for arity 0).
    ///
    /// # Errors
    /// Returns `ArityConflict` if the function was seen with another arity.
    pub fn declare_function(&mut self, name: &str, arity: usize) -> Result<()> {
        declare(&mut self.functions, "function", name, arity)
    }

    /// The recorded arity of a predicate.
    #[must_use]
    pub fn predicate_arity(&self, name: &str) -> Option<usize> {
        self.predicates.get(name).copied()
    }

    /// The recorded arity of a function or constant.
    #[must_use]
    pub fn function_arity(&self, name: &str) -> Option<usize> {
        self.functions.get(name).copied()
    }

    /// Number of distinct predicates recorded.
    #[must_use]
    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }

    /// Records every predicate and function symbol used in `formula`.
    ///
    /// # Errors
    /// Returns `ArityConflict` on the first inconsistent use.
    pub fn record_formula(&mut self, formula: &Formula) -> Result<()> {
        match formula {
            Formula::Atom(atom) => {
                self.declare_predicate(&symbol(&atom.predicate), atom.args.len())?;
                atom.args.iter().try_for_each(|t| self.record_term(t))
            }
            Formula::Member {
                instance, class, ..
            } => {
                self.record_term(instance)?;
                self.record_term(class)
            }
            Formula::Equal(left, right, _) => {
                self.record_term(left)?;
                self.record_term(right)
            }
            Formula::And(parts, _) | Formula::Or(parts, _) => {
                parts.iter().try_for_each(|p| self.record_formula(p))
            }
            Formula::Exists(_, inner, _) | Formula::Naf(inner, _) => self.record_formula(inner),
        }
    }

    fn record_term(&mut self, term: &Term) -> Result<()> {
        match term {
            Term::Const(name, _) => self.declare_function(&symbol(name), 0),
            Term::Apply(name, args, _) => {
                self.declare_function(&symbol(name), args.len())?;
                args.iter().try_for_each(|a| self.record_term(a))
            }
            _ => Ok(()),
        }
    }

    /// Predicates used in `formula` that the table has never recorded, in
    /// order of first use.
    #[must_use]
    pub fn unknown_predicates(&self, formula: &Formula) -> Vec<String> {
        let mut unknown = Vec::new();
        self.collect_unknown(formula, &mut unknown);
        unknown
    }

    fn collect_unknown(&self, formula: &Formula, unknown: &mut Vec<String>) {
        match formula {
            Formula::Atom(atom) => {
                let name = symbol(&atom.predicate);
                if !self.predicates.contains_key(&name) && !unknown.contains(&name) {
                    unknown.push(name);
                }
            }
            Formula::And(parts, _) | Formula::Or(parts, _) => {
                for part in parts {
                    self.collect_unknown(part, unknown);
                }
            }
            Formula::Exists(_, inner, _) | Formula::Naf(inner, _) => {
                self.collect_unknown(inner, unknown);
            }
            Formula::Member { .. } | Formula::Equal(..) => {}
        }
    }
}

fn declare(table: &mut OrdMap<String, usize>, kind: &str, name: &str, arity: usize) -> Result<()> {
    match table.get(name) {
        Some(&expected) if expected != arity => {
            Err(Error::arity_conflict(format!("{kind} {name}"), expected, arity))
        }
        Some(_) => Ok(()),
        None => {
            table.insert(name.to_string(), arity);
            Ok(())
        }
    }
}
