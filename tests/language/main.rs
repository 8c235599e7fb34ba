//! Integration tests for Layer 1: Language
//!
//! Tests for lexer and parser.
