//! Token types for the rule language.
//!
//! Tokens are the output of the lexer and input to the parser.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Token types for the rule language.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `:-` separating a conclusion from its condition
    Implies,
    /// `#` between an instance and its class
    Hash,
    /// `=`
    Equals,

    /// Variable like `?X`, stored without the `?`
    Variable(String),
    /// Local constant like `_alice`, stored without the `_`
    Local(String),
    /// Bare identifier like `Forall` or `parent`
    Ident(String),
    /// String literal like `"ice cream"`
    String(String),
    /// Integer literal like `42` or `-17`
    Int(i64),
    /// Float literal like `2.5`
    Float(f64),
    /// IRI like `<http://example.org/kb>`, stored without brackets
    Iri(String),

    /// Comment text (including `%`)
    Comment(String),
    /// End of input
    Eof,
    /// Lexer error
    Error(String),
}

impl TokenKind {
    /// Returns true if this token kind should be ignored during parsing.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Comment(_))
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Implies => "':-'",
            Self::Hash => "'#'",
            Self::Equals => "'='",
            Self::Variable(_) => "variable",
            Self::Local(_) => "local constant",
            Self::Ident(_) => "identifier",
            Self::String(_) => "string",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Iri(_) => "IRI",
            Self::Comment(_) => "comment",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }
}
