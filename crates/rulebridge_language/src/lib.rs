//! Lexer, parser, and syntax tree for the rulebridge source rule language.
//!
//! The language is a presentation syntax for positional rules:
//!
//! ```text
//! Document(
//!   Group(
//!     Forall ?X ?Y ( _ancestor(?X ?Y) :- _parent(?X ?Y) )
//!     _parent(_alice _bob)
//!   )
//! )
//! ```
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of rule-language source
//! - [`Parser`] - Parsing tokens into a [`Document`] or a [`Query`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;

pub use ast::{Atom, Document, Formula, Name, Query, Sentence, Term};
pub use lexer::Lexer;
pub use parser::{Parser, parse_document, parse_query};
pub use span::Span;
pub use token::{Token, TokenKind};
