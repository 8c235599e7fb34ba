//! Integration tests for Layer 2: Driver
//!
//! Tests for document ordering, the failure contract, and run properties.

mod properties;
mod runs;
