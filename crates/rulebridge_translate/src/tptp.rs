//! TPTP backend.
//!
//! Every clause becomes a numbered `fof(axN, axiom, ...)` annotated formula
//! and a query becomes `fof(queryN, conjecture, ...)`, with its free
//! variables bound existentially. Numbering runs across all documents that
//! one translator sees.

use std::io::{Read, Write};

use rulebridge_foundation::{Error, Result};
use rulebridge_language::{Formula, parse_document, parse_query};
use tracing::{debug, warn};

use crate::naming::{application, term, variable};
use crate::normalize::{Clause, normalize};
use crate::signature::SignatureTable;
use crate::translator::{Target, Translator, emit, read_source};

/// Translates rule documents into TPTP first-order form.
#[derive(Clone, Debug, Default)]
pub struct TptpTranslator {
    signatures: SignatureTable,
    axioms: usize,
    queries: usize,
}

impl TptpTranslator {
    /// Creates a translator with no numbered formulas yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of axioms emitted so far.
    #[must_use]
    pub const fn axiom_count(&self) -> usize {
        self.axioms
    }

    /// Symbols recorded by the documents translated so far.
    #[must_use]
    pub fn signatures(&self) -> &SignatureTable {
        &self.signatures
    }
}

impl Translator for TptpTranslator {
    fn target(&self) -> Target {
        Target::Tptp
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
        let mut axioms = self.axioms;
        let mut text = String::new();
        for sentence in &document.sentences {
            for clause in normalize(sentence)? {
                staged.record_formula(&clause.head)?;
                if let Some(body) = &clause.body {
                    staged.record_formula(body)?;
                }
                axioms += 1;
                text.push_str(&format!(
                    "fof(ax{axioms}, axiom, {}).\n",
                    render_clause(&clause)?
                ));
            }
        }

        emit(output, &text)?;
        debug!(
            axioms = axioms - self.axioms,
            "translated rule base to TPTP"
        );
        self.signatures = staged;
        self.axioms = axioms;
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

        let number = self.queries + 1;
        let body = formula(&query.formula)?;
        let free = query.formula.free_variables();
        let text = format!(
            "fof(query{number}, conjecture, {}).\n",
            quantify("?", &free, body)
        );
        emit(output, &text)?;
        self.signatures = staged;
        self.queries = number;
        debug!("translated query to TPTP");
        Ok(())
    }
}

/// Renders the formula of a clause, universally closed.
fn render_clause(clause: &Clause) -> Result<String> {
    let head = formula(&clause.head)?;
    let matrix = match &clause.body {
        None => head,
        Some(body) => format!("({} => {head})", formula(body)?),
    };
    Ok(quantify("!", &clause.variables, matrix))
}

/// Prefixes `matrix` with `quantifier [vars] :` unless there are no vars.
fn quantify(quantifier: &str, variables: &[String], matrix: String) -> String {
    if variables.is_empty() {
        return matrix;
    }
    let bound: Vec<String> = variables.iter().map(|v| variable(v)).collect();
    format!("{quantifier} [{}] : {matrix}", bound.join(","))
}

fn formula(formula_ref: &Formula) -> Result<String> {
    Ok(match formula_ref {
        Formula::Atom(atom) => application(&atom.predicate, &atom.args, Target::Tptp),
        Formula::Member {
            instance, class, ..
        } => format!(
            "member({},{})",
            term(instance, Target::Tptp),
            term(class, Target::Tptp)
        ),
        Formula::Equal(left, right, _) => format!(
            "({} = {})",
            term(left, Target::Tptp),
            term(right, Target::Tptp)
        ),
        Formula::And(parts, _) => connective(parts, " & ", "$true")?,
        Formula::Or(parts, _) => connective(parts, " | ", "$false")?,
        Formula::Exists(variables, inner, _) => {
            format!("({})", quantify("?", variables, formula(inner)?))
        }
        Formula::Naf(_, span) => {
            return Err(Error::unsupported(format!(
                "negation as failure at line {} has no TPTP counterpart",
                span.line
            )));
        }
    })
}

fn connective(parts: &[Formula], operator: &str, empty: &str) -> Result<String> {
    match parts {
        [] => Ok(empty.to_string()),
        [only] => formula(only),
        _ => {
            let rendered = parts.iter().map(formula).collect::<Result<Vec<_>>>()?;
            Ok(format!("({})", rendered.join(operator)))
        }
    }
}
