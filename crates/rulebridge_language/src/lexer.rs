//! Lexer for the rule language.
//!
//! The lexer converts source text into a stream of tokens. It never fails:
//! malformed input becomes a [`TokenKind::Error`] token for the parser to
//! report with a position.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for rule-language source code.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Token::new(
                TokenKind::Eof,
                Span::new(start, start, start_line, start_column),
            );
        };

        let kind = match c {
            '(' => {
                self.advance();
                TokenKind::LParen
            }
            ')' => {
                self.advance();
                TokenKind::RParen
            }
            '#' => {
                self.advance();
                TokenKind::Hash
            }
            '=' => {
                self.advance();
                TokenKind::Equals
            }
            ':' => {
                self.advance();
                if self.peek_char() == Some('-') {
                    self.advance();
                    TokenKind::Implies
                } else {
                    TokenKind::Error("expected '-' after ':'".into())
                }
            }
            '%' => self.scan_comment(),
            '"' => self.scan_string(),
            '<' => self.scan_iri(),
            '?' => {
                self.advance();
                let name = self.scan_while(is_variable_char);
                if name.is_empty() {
                    TokenKind::Error("expected variable name after '?'".into())
                } else {
                    TokenKind::Variable(name)
                }
            }
            '_' => {
                self.advance();
                let name = self.scan_while(is_name_char);
                if name.is_empty() {
                    TokenKind::Error("expected constant name after '_'".into())
                } else {
                    TokenKind::Local(name)
                }
            }
            c if c.is_ascii_digit() => self.scan_number(),
            '-' | '+' if self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.scan_number()
            }
            c if c.is_alphabetic() => TokenKind::Ident(self.scan_while(is_name_char)),
            c => {
                self.advance();
                TokenKind::Error(format!("unexpected character: {c}"))
            }
        };

        Token::new(
            kind,
            Span::new(start, self.position, start_line, start_column),
        )
    }

    /// Tokenizes all source and returns a vector of tokens.
    ///
    /// Comments are included in the output; the last token is always `Eof`.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Consumes characters while `pred` holds and returns them.
    fn scan_while(&mut self, pred: fn(char) -> bool) -> String {
        let start = self.position;
        while self.peek_char().is_some_and(pred) {
            self.advance();
        }
        self.source[start..self.position].to_string()
    }

    /// Scans a comment starting with `%`.
    fn scan_comment(&mut self) -> TokenKind {
        TokenKind::Comment(self.scan_while(|c| c != '\n'))
    }

    /// Scans a string literal.
    fn scan_string(&mut self) -> TokenKind {
        self.advance(); // opening '"'
        let mut text = String::new();
        loop {
            match self.peek_char() {
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    let escaped = match self.peek_char() {
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some('\\') => '\\',
                        Some('"') => '"',
                        Some(c) => {
                            return TokenKind::Error(format!("invalid escape sequence: \\{c}"));
                        }
                        None => {
                            return TokenKind::Error(
                                "unexpected end of input in string escape".into(),
                            );
                        }
                    };
                    self.advance();
                    text.push(escaped);
                }
                Some(c) => {
                    self.advance();
                    text.push(c);
                }
                None => return TokenKind::Error("unterminated string literal".into()),
            }
        }
        TokenKind::String(text)
    }

    /// Scans an IRI enclosed in angle brackets.
    fn scan_iri(&mut self) -> TokenKind {
        self.advance(); // '<'
        let iri = self.scan_while(|c| c != '>' && !c.is_whitespace());
        if self.peek_char() == Some('>') {
            self.advance();
            TokenKind::Iri(iri)
        } else {
            TokenKind::Error("unterminated IRI".into())
        }
    }

    /// Scans a number (integer or float).
    fn scan_number(&mut self) -> TokenKind {
        let start = self.position;
        let mut has_dot = false;

        if matches!(self.peek_char(), Some('-' | '+')) {
            self.advance();
        }

        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                self.advance();
            } else if c == '.'
                && !has_dot
                && self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit())
            {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.source[start..self.position];
        if has_dot {
            match text.parse::<f64>() {
                Ok(n) => TokenKind::Float(n),
                Err(e) => TokenKind::Error(format!("invalid float: {e}")),
            }
        } else {
            match text.parse::<i64>() {
                Ok(n) => TokenKind::Int(n),
                Err(e) => TokenKind::Error(format!("invalid integer: {e}")),
            }
        }
    }
}

/// Returns true if `c` can appear in a variable name.
fn is_variable_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Returns true if `c` can appear in a constant or identifier.
fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}
