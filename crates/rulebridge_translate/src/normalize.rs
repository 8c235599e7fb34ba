//! Sentence normalisation shared by every backend.
//!
//! A sentence becomes one clause per conjunct of its conclusion, each clause
//! carrying only the quantified variables it actually uses.

use rulebridge_foundation::{Error, Result};
use rulebridge_language::{Formula, Sentence};

/// A single-conclusion clause ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct Clause {
    /// Universally quantified variables used by this clause, in
    /// declaration order.
    pub variables: Vec<String>,
    /// An atom, a membership, or an equality.
    pub head: Formula,
    /// The condition, if any.
    pub body: Option<Formula>,
}

impl Clause {
    /// Returns true if this clause has no condition.
    #[must_use]
    pub const fn is_fact(&self) -> bool {
        self.body.is_none()
    }
}

/// Splits `sentence` into clauses and checks that it is closed.
///
/// # Errors
/// Returns `Malformed` if a variable is not declared by the sentence's
/// `Forall`, or if the conclusion is not a conjunction of atomic formulas.
pub fn normalize(sentence: &Sentence) -> Result<Vec<Clause>> {
    let mut heads = Vec::new();
    split_head(&sentence.head, &mut heads)?;

    let mut undeclared = sentence.head.free_variables();
    if let Some(body) = &sentence.body {
        undeclared.extend(body.free_variables());
    }
    if let Some(name) = undeclared
        .iter()
        .find(|v| !sentence.variables.contains(v))
    {
        return Err(Error::malformed(format!(
            "variable ?{name} at line {} is not quantified by Forall",
            sentence.span.line
        )));
    }

    Ok(heads
        .into_iter()
        .map(|head| {
            let mut used = head.free_variables();
            if let Some(body) = &sentence.body {
                used.extend(body.free_variables());
            }
            Clause {
                variables: sentence
                    .variables
                    .iter()
                    .filter(|v| used.contains(v))
                    .cloned()
                    .collect(),
                head: head.clone(),
                body: sentence.body.clone(),
            }
        })
        .collect())
}

fn split_head<'a>(head: &'a Formula, out: &mut Vec<&'a Formula>) -> Result<()> {
    match head {
        Formula::Atom(_) | Formula::Member { .. } | Formula::Equal(..) => {
            out.push(head);
            Ok(())
        }
        Formula::And(parts, _) => parts.iter().try_for_each(|p| split_head(p, out)),
        Formula::Or(_, span) | Formula::Exists(_, _, span) | Formula::Naf(_, span) => {
            Err(Error::malformed(format!(
                "rule conclusion at line {} must be an atom or a conjunction of atoms",
                span.line
            )))
        }
    }
}
