//! Integration tests for Layer 0: Foundation
//!
//! Tests for errors, document sources, and run requests.

mod documents;
mod errors;
mod requests;
