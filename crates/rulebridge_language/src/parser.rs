//! Parser for rule documents and queries.
//!
//! A recursive-descent parser over the token stream. Rule bases may be
//! wrapped in `Document( ... )` or be a bare sequence of sentences and
//! groups; queries are a single formula.

use rulebridge_foundation::{Error, ErrorKind, Result};

use crate::ast::{Atom, Document, Formula, Name, Query, Sentence, Term};
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

const KEYWORDS: &[&str] = &[
    "Document", "Group", "Import", "Forall", "Exists", "And", "Or", "Naf",
];

/// Parser for rule-language source code.
pub struct Parser<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token (lookahead).
    current: Token,
    /// Source text (for error messages).
    source: &'src str,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        let mut parser = Self {
            lexer,
            current,
            source,
        };
        parser.skip_trivia();
        parser
    }

    /// Parses a complete rule-base document.
    ///
    /// # Errors
    /// Returns a parse error if the source is not a well-formed document.
    pub fn parse_document(&mut self) -> Result<Document> {
        let start = self.current.span;
        let mut imports = Vec::new();
        let mut sentences = Vec::new();

        if self.at_keyword("Document") {
            self.advance();
            self.expect(&TokenKind::LParen)?;
            self.parse_items(&mut imports, &mut sentences, "document")?;
            self.expect(&TokenKind::RParen)?;
        } else {
            while self.current.kind != TokenKind::Eof {
                self.parse_item(&mut imports, &mut sentences)?;
            }
        }

        let end = self.current.span;
        self.expect_eof()?;
        Ok(Document {
            imports,
            sentences,
            span: start.to(end),
        })
    }

    /// Parses a query: exactly one formula.
    ///
    /// # Errors
    /// Returns a parse error if the source is not a single formula.
    pub fn parse_query(&mut self) -> Result<Query> {
        if self.current.kind == TokenKind::Eof {
            return Err(self.error("expected a query formula, found end of input"));
        }
        let formula = self.parse_formula()?;
        self.expect_eof()?;
        Ok(Query { formula })
    }

    /// Parses items until the closing `)` of a document or group.
    fn parse_items(
        &mut self,
        imports: &mut Vec<String>,
        sentences: &mut Vec<Sentence>,
        what: &str,
    ) -> Result<()> {
        let open = self.current.span;
        while self.current.kind != TokenKind::RParen {
            if self.current.kind == TokenKind::Eof {
                return Err(self.error_at(open, &format!("unterminated {what}")));
            }
            self.parse_item(imports, sentences)?;
        }
        Ok(())
    }

    /// Parses an import, a group, or a sentence.
    fn parse_item(
        &mut self,
        imports: &mut Vec<String>,
        sentences: &mut Vec<Sentence>,
    ) -> Result<()> {
        if self.at_keyword("Import") {
            self.advance();
            self.expect(&TokenKind::LParen)?;
            let TokenKind::Iri(iri) = &self.current.kind else {
                return Err(self.unexpected("an IRI"));
            };
            imports.push(iri.clone());
            self.advance();
            self.expect(&TokenKind::RParen)
        } else if self.at_keyword("Group") {
            self.advance();
            self.expect(&TokenKind::LParen)?;
            self.parse_items(imports, sentences, "group")?;
            self.expect(&TokenKind::RParen)
        } else {
            let sentence = self.parse_sentence()?;
            sentences.push(sentence);
            Ok(())
        }
    }

    /// Parses `Forall ?V+ ( clause )` or a bare clause.
    fn parse_sentence(&mut self) -> Result<Sentence> {
        let start = self.current.span;
        if !self.at_keyword("Forall") {
            return self.parse_clause(Vec::new(), start);
        }

        self.advance();
        let variables = self.parse_variables("Forall")?;
        self.expect(&TokenKind::LParen)?;
        let mut sentence = self.parse_clause(variables, start)?;
        sentence.span = start.to(self.current.span);
        self.expect(&TokenKind::RParen)?;
        Ok(sentence)
    }

    /// Parses `formula [:- formula]`.
    fn parse_clause(&mut self, variables: Vec<String>, start: Span) -> Result<Sentence> {
        let head = self.parse_formula()?;
        let body = if self.current.kind == TokenKind::Implies {
            self.advance();
            Some(self.parse_formula()?)
        } else {
            None
        };
        let end = body.as_ref().map_or_else(|| head.span(), Formula::span);
        Ok(Sentence {
            variables,
            head,
            body,
            span: start.to(end),
        })
    }

    /// Parses one or more variables following a quantifier.
    fn parse_variables(&mut self, quantifier: &str) -> Result<Vec<String>> {
        let mut variables = Vec::new();
        while let TokenKind::Variable(name) = &self.current.kind {
            variables.push(name.clone());
            self.advance();
        }
        if variables.is_empty() {
            return Err(self.error(&format!("expected at least one variable after {quantifier}")));
        }
        Ok(variables)
    }

    /// Parses a formula.
    fn parse_formula(&mut self) -> Result<Formula> {
        let start = self.current.span;
        let keyword = match &self.current.kind {
            TokenKind::Ident(name) if is_keyword(name) => name.clone(),
            _ => return self.parse_atomic(),
        };

        match keyword.as_str() {
            "And" | "Or" => {
                self.advance();
                self.expect(&TokenKind::LParen)?;
                let mut parts = Vec::new();
                while self.current.kind != TokenKind::RParen {
                    if self.current.kind == TokenKind::Eof {
                        return Err(self.error_at(start, &format!("unterminated {keyword}")));
                    }
                    parts.push(self.parse_formula()?);
                }
                let span = start.to(self.current.span);
                self.advance();
                if keyword == "And" {
                    Ok(Formula::And(parts, span))
                } else {
                    Ok(Formula::Or(parts, span))
                }
            }
            "Exists" => {
                self.advance();
                let variables = self.parse_variables("Exists")?;
                self.expect(&TokenKind::LParen)?;
                let inner = self.parse_formula()?;
                let span = start.to(self.current.span);
                self.expect(&TokenKind::RParen)?;
                Ok(Formula::Exists(variables, Box::new(inner), span))
            }
            "Naf" => {
                self.advance();
                self.expect(&TokenKind::LParen)?;
                let inner = self.parse_formula()?;
                let span = start.to(self.current.span);
                self.expect(&TokenKind::RParen)?;
                Ok(Formula::Naf(Box::new(inner), span))
            }
            other => Err(self.error(&format!("unexpected '{other}' in formula"))),
        }
    }

    /// Parses an atom, a membership, or an equality.
    fn parse_atomic(&mut self) -> Result<Formula> {
        let left = self.parse_term()?;
        match self.current.kind {
            TokenKind::Hash => {
                self.advance();
                let class = self.parse_term()?;
                let span = left.span().to(class.span());
                Ok(Formula::Member {
                    instance: left,
                    class,
                    span,
                })
            }
            TokenKind::Equals => {
                self.advance();
                let right = self.parse_term()?;
                let span = left.span().to(right.span());
                Ok(Formula::Equal(left, right, span))
            }
            _ => match left {
                Term::Const(predicate, span) => Ok(Formula::Atom(Atom {
                    predicate,
                    args: Vec::new(),
                    span,
                })),
                Term::Apply(predicate, args, span) => Ok(Formula::Atom(Atom {
                    predicate,
                    args,
                    span,
                })),
                other => Err(self.error_at(other.span(), "expected a formula")),
            },
        }
    }

    /// Parses a term.
    fn parse_term(&mut self) -> Result<Term> {
        let span = self.current.span;
        let term = match &self.current.kind {
            TokenKind::Variable(name) => Term::Var(name.clone(), span),
            TokenKind::String(s) => Term::String(s.clone(), span),
            TokenKind::Int(n) => Term::Int(*n, span),
            TokenKind::Float(n) => Term::Float(*n, span),
            TokenKind::Iri(iri) => Term::Iri(iri.clone(), span),
            TokenKind::Local(name) => {
                let name = Name::Local(name.clone());
                self.advance();
                return self.parse_application(name, span);
            }
            TokenKind::Ident(name) if !is_keyword(name) => {
                let name = Name::Global(name.clone());
                self.advance();
                return self.parse_application(name, span);
            }
            TokenKind::Error(msg) => return Err(self.error(msg)),
            _ => return Err(self.unexpected("a term")),
        };
        self.advance();
        Ok(term)
    }

    /// Parses the argument list after a name, if one follows.
    fn parse_application(&mut self, name: Name, start: Span) -> Result<Term> {
        if self.current.kind != TokenKind::LParen {
            return Ok(Term::Const(name, start));
        }
        self.advance();

        let mut args = Vec::new();
        while self.current.kind != TokenKind::RParen {
            if self.current.kind == TokenKind::Eof {
                return Err(self.error_at(start, "unterminated argument list"));
            }
            args.push(self.parse_term()?);
        }
        let span = start.to(self.current.span);
        self.advance();
        Ok(Term::Apply(name, args, span))
    }

    /// Returns true if the current token is the given keyword.
    fn at_keyword(&self, keyword: &str) -> bool {
        matches!(&self.current.kind, TokenKind::Ident(name) if name == keyword)
    }

    /// Skips comment tokens.
    fn skip_trivia(&mut self) {
        while self.current.kind.is_trivia() {
            self.current = self.lexer.next_token();
        }
    }

    /// Advances to the next non-trivia token.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
        self.skip_trivia();
    }

    /// Expects the current token to be of a specific kind, then advances.
    fn expect(&mut self, expected: &TokenKind) -> Result<()> {
        if std::mem::discriminant(&self.current.kind) == std::mem::discriminant(expected) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(expected.name()))
        }
    }

    fn expect_eof(&self) -> Result<()> {
        if self.current.kind == TokenKind::Eof {
            Ok(())
        } else {
            Err(self.unexpected("end of input"))
        }
    }

    /// Creates an "expected X, found Y" error, surfacing lexer errors as-is.
    fn unexpected(&self, expected: &str) -> Error {
        if let TokenKind::Error(msg) = &self.current.kind {
            return self.error(msg);
        }
        self.error(&format!(
            "expected {expected}, found {}",
            self.current.kind.name()
        ))
    }

    /// Creates a parse error at the current position.
    fn error(&self, message: &str) -> Error {
        self.error_at(self.current.span, message)
    }

    /// Creates a parse error at a specific span.
    fn error_at(&self, span: Span, message: &str) -> Error {
        Error::new(ErrorKind::ParseError {
            message: message.to_string(),
            line: span.line,
            column: span.column,
            context: self.context_at(span),
        })
    }

    /// Returns the source line containing `span`.
    fn context_at(&self, span: Span) -> String {
        let line_start = self.source[..span.start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = self.source[span.start..]
            .find('\n')
            .map_or(self.source.len(), |i| span.start + i);

        self.source[line_start..line_end].to_string()
    }
}

fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// Parses a rule-base document.
///
/// # Errors
/// Returns an error if the source cannot be parsed.
pub fn parse_document(source: &str) -> Result<Document> {
    Parser::new(source).parse_document()
}

/// Parses a query document.
///
/// # Errors
/// Returns an error if the source is not exactly one formula.
pub fn parse_query(source: &str) -> Result<Query> {
    Parser::new(source).parse_query()
}
