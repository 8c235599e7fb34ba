//! Integration tests for Layer 1: Translate
//!
//! Tests for the Prolog and TPTP backends and cross-document state.

mod prolog;
mod tptp;
