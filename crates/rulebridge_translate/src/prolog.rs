//! Prolog backend.
//!
//! Facts become `head.`, rules `head :- body.`, and a query becomes a goal
//! terminated by `.`. Class membership is encoded as `memterm(Instance,Class)`.

use std::io::{Read, Write};

use rulebridge_foundation::{Error, Result};
use rulebridge_language::{Formula, Term, parse_document, parse_query};
use tracing::{debug, warn};

use crate::naming::{application_in, term_in, variable};
use crate::normalize::{Clause, normalize};
use crate::signature::SignatureTable;
use crate::translator::{Target, Translator, emit, read_source};

/// Translates rule documents into Prolog clauses.
#[derive(Clone, Debug, Default)]
pub struct PrologTranslator {
    signatures: SignatureTable,
}

impl PrologTranslator {
    /// Creates a translator with an empty signature table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Symbols recorded by the documents translated so far.
    #[must_use]
    pub fn signatures(&self) -> &SignatureTable {
        &self.signatures
    }
}

impl Translator for PrologTranslator {
    fn target(&self) -> Target {
        Target::Prolog
    }

    fn translate_rule_base(
        &mut self,
        input: &mut dyn Read,
        output: &mut dyn Write,
    ) -> Result<()> {
        let source = read_source(input)?;
        let document = parse_document(&source)?;
        if !document.imports.is_empty() {
            debug!(imports = ?document.imports, "import directives recorded, not followed");
        }

        let mut staged = self.signatures.clone();
        let mut text = String::new();
        let mut clauses = 0usize;
        for sentence in &document.sentences {
            for clause in normalize(sentence)? {
                staged.record_formula(&clause.head)?;
                if let Some(body) = &clause.body {
                    staged.record_formula(body)?;
                }
                text.push_str(&render_clause(&clause)?);
                text.push('\n');
                clauses += 1;
            }
        }

        emit(output, &text)?;
        self.signatures = staged;
        debug!(clauses, "translated rule base to Prolog");
        Ok(())
    }

    fn translate_query(&mut self, input: &mut dyn Read, output: &mut dyn Write) -> Result<()> {
        let source = read_source(input)?;
        let query = parse_query(&source)?;

        for predicate in self.signatures.unknown_predicates(&query.formula) {
            warn!(predicate, "query uses a predicate no rule base declares");
        }
        let mut staged = self.signatures.clone();
        staged.record_formula(&query.formula)?;

        let text = format!("{}.\n", Scope::default().goal(&query.formula)?);
        emit(output, &text)?;
        self.signatures = staged;
        debug!("translated query to Prolog");
        Ok(())
    }
}

/// Renders a clause as a Prolog fact or rule, without the trailing newline.
fn render_clause(clause: &Clause) -> Result<String> {
    let mut scope = Scope::default();
    let head = scope.conclusion(&clause.head)?;
    match &clause.body {
        None => Ok(format!("{head}.")),
        Some(body) => Ok(format!("{head} :- {}.", scope.goal(body)?)),
    }
}

/// Variable spellings for one clause or query.
///
/// Prolog has no existential quantifier, so every `Exists` binding gets a
/// fresh `E<n>_<name>` variable. Source variables always spell as `Q<name>`,
/// so the two never meet.
#[derive(Debug, Default)]
struct Scope {
    bound: Vec<(String, String)>,
    fresh: usize,
}

impl Scope {
    fn spell(&self, name: &str) -> String {
        self.bound
            .iter()
            .rev()
            .find(|(bound, _)| bound == name)
            .map_or_else(|| variable(name), |(_, spelled)| spelled.clone())
    }

    fn term(&self, t: &Term) -> String {
        term_in(t, Target::Prolog, &|name| self.spell(name))
    }

    fn conclusion(&mut self, formula: &Formula) -> Result<String> {
        match formula {
            Formula::Equal(..) => Err(Error::unsupported(format!(
                "equality at line {} cannot be a Prolog clause head",
                formula.span().line
            ))),
            _ => self.goal(formula),
        }
    }

    fn goal(&mut self, formula: &Formula) -> Result<String> {
        Ok(match formula {
            Formula::Atom(atom) => application_in(
                &atom.predicate,
                &atom.args,
                Target::Prolog,
                &|name| self.spell(name),
            ),
            Formula::Member {
                instance, class, ..
            } => format!("memterm({},{})", self.term(instance), self.term(class)),
            Formula::Equal(left, right, _) => {
                format!("{} = {}", self.term(left), self.term(right))
            }
            Formula::And(parts, _) => match parts.as_slice() {
                [] => "true".to_string(),
                [only] => self.goal(only)?,
                _ => self.join(parts, ", ")?,
            },
            Formula::Or(parts, _) => match parts.as_slice() {
                [] => "fail".to_string(),
                [only] => self.goal(only)?,
                _ => format!("({})", self.join(parts, " ; ")?),
            },
            Formula::Exists(variables, inner, _) => {
                let depth = self.bound.len();
                for name in variables {
                    self.fresh += 1;
                    let spelled = format!("E{}_{name}", self.fresh);
                    self.bound.push((name.clone(), spelled));
                }
                let inner_goal = self.goal(inner);
                self.bound.truncate(depth);
                inner_goal?
            }
            Formula::Naf(inner, _) => {
                let inner_goal = self.goal(inner)?;
                if is_simple(inner) {
                    format!("\\+ {inner_goal}")
                } else {
                    format!("\\+ ({inner_goal})")
                }
            }
        })
    }

    fn join(&mut self, parts: &[Formula], separator: &str) -> Result<String> {
        let goals = parts
            .iter()
            .map(|part| self.goal(part))
            .collect::<Result<Vec<_>>>()?;
        Ok(goals.join(separator))
    }
}

/// True when the goal needs no parentheses under a prefix operator.
fn is_simple(formula: &Formula) -> bool {
    match formula {
        Formula::Atom(_) | Formula::Member { .. } => true,
        Formula::Exists(_, inner, _) => is_simple(inner),
        Formula::And(parts, _) | Formula::Or(parts, _) => {
            parts.len() <= 1 && parts.iter().all(is_simple)
        }
        Formula::Equal(..) | Formula::Naf(..) => false,
    }
}
