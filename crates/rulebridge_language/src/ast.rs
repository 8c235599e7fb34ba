//! Abstract syntax tree for rule documents and queries.

use crate::span::Span;

/// A parsed rule-base document.
///
/// Nested groups are flattened: `sentences` holds every sentence of the
/// document in source order.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    /// IRIs named by `Import(...)` directives, in source order.
    pub imports: Vec<String>,
    /// Every sentence of the document.
    pub sentences: Vec<Sentence>,
    /// Span of the whole document.
    pub span: Span,
}

/// A fact or rule, optionally closed by `Forall`.
#[derive(Clone, Debug, PartialEq)]
pub struct Sentence {
    /// Variables declared by the enclosing `Forall`, in declaration order.
    pub variables: Vec<String>,
    /// The conclusion.
    pub head: Formula,
    /// The condition after `:-`, absent for facts.
    pub body: Option<Formula>,
    /// Span of the sentence.
    pub span: Span,
}

impl Sentence {
    /// Returns true if this sentence has no condition.
    #[must_use]
    pub const fn is_fact(&self) -> bool {
        self.body.is_none()
    }
}

/// A parsed query document.
#[derive(Clone, Debug, PartialEq)]
pub struct Query {
    /// The goal formula. Free variables are answer variables.
    pub formula: Formula,
}

/// A logical formula.
#[derive(Clone, Debug, PartialEq)]
pub enum Formula {
    /// Predicate application like `_parent(_alice _bob)`.
    Atom(Atom),
    /// Class membership like `_bob#_Person`.
    Member {
        /// The instance.
        instance: Term,
        /// The class.
        class: Term,
        /// Source span.
        span: Span,
    },
    /// Equality like `?X = _f(_a)`.
    Equal(Term, Term, Span),
    /// Conjunction `And(...)`.
    And(Vec<Formula>, Span),
    /// Disjunction `Or(...)`.
    Or(Vec<Formula>, Span),
    /// Existential `Exists ?X ( ... )`.
    Exists(Vec<String>, Box<Formula>, Span),
    /// Negation as failure `Naf( ... )`.
    Naf(Box<Formula>, Span),
}

impl Formula {
    /// Returns the source span of this formula.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Atom(atom) => atom.span,
            Self::Member { span, .. }
            | Self::Equal(_, _, span)
            | Self::And(_, span)
            | Self::Or(_, span)
            | Self::Exists(_, _, span)
            | Self::Naf(_, span) => *span,
        }
    }

    /// Calls `f` for every variable occurrence, in source order.
    ///
    /// Variables bound by a nested `Exists` are reported too; callers that
    /// need scoping use [`Formula::free_variables`].
    pub fn for_each_variable(&self, f: &mut impl FnMut(&str)) {
        match self {
            Self::Atom(atom) => atom.args.iter().for_each(|t| t.for_each_variable(f)),
            Self::Member {
                instance, class, ..
            } => {
                instance.for_each_variable(f);
                class.for_each_variable(f);
            }
            Self::Equal(left, right, _) => {
                left.for_each_variable(f);
                right.for_each_variable(f);
            }
            Self::And(parts, _) | Self::Or(parts, _) => {
                parts.iter().for_each(|p| p.for_each_variable(f));
            }
            Self::Exists(_, inner, _) | Self::Naf(inner, _) => inner.for_each_variable(f),
        }
    }

    /// Returns the variables not bound by an `Exists`, in order of first
    /// occurrence and without duplicates.
    #[must_use]
    pub fn free_variables(&self) -> Vec<String> {
        let mut free = Vec::new();
        self.collect_free(&mut Vec::new(), &mut free);
        free
    }

    fn collect_free(&self, bound: &mut Vec<String>, free: &mut Vec<String>) {
        if let Self::Exists(vars, inner, _) = self {
            let depth = bound.len();
            bound.extend(vars.iter().cloned());
            inner.collect_free(bound, free);
            bound.truncate(depth);
            return;
        }
        match self {
            Self::And(parts, _) | Self::Or(parts, _) => {
                for part in parts {
                    part.collect_free(bound, free);
                }
            }
            Self::Naf(inner, _) => inner.collect_free(bound, free),
            _ => self.for_each_variable(&mut |name| {
                if !bound.iter().any(|b| b == name) && !free.iter().any(|v| v == name) {
                    free.push(name.to_string());
                }
            }),
        }
    }
}

/// A predicate applied to positional arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct Atom {
    /// Predicate name.
    pub predicate: Name,
    /// Positional arguments.
    pub args: Vec<Term>,
    /// Source span.
    pub span: Span,
}

/// A constant name as written in source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Name {
    /// Local constant `_name`.
    Local(String),
    /// Bare identifier `name`.
    Global(String),
}

impl Name {
    /// The name without its sigil.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Local(s) | Self::Global(s) => s,
        }
    }
}

/// A term.
#[derive(Clone, Debug, PartialEq)]
pub enum Term {
    /// Variable `?X`, stored without `?`.
    Var(String, Span),
    /// Constant.
    Const(Name, Span),
    /// String literal.
    String(String, Span),
    /// Integer literal.
    Int(i64, Span),
    /// Float literal.
    Float(f64, Span),
    /// IRI literal.
    Iri(String, Span),
    /// Function application like `_succ(?N)`.
    Apply(Name, Vec<Term>, Span),
}

impl Term {
    /// Returns the source span of this term.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Var(_, s)
            | Self::Const(_, s)
            | Self::String(_, s)
            | Self::Int(_, s)
            | Self::Float(_, s)
            | Self::Iri(_, s)
            | Self::Apply(_, _, s) => *s,
        }
    }

    /// Calls `f` for every variable occurrence in this term.
    pub fn for_each_variable(&self, f: &mut impl FnMut(&str)) {
        match self {
            Self::Var(name, _) => f(name),
            Self::Apply(_, args, _) => args.iter().for_each(|a| a.for_each_variable(f)),
            _ => {}
        }
    }
}
