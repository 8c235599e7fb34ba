//! rulebridge - Translation of positional rule documents into Prolog and TPTP
//!
//! This crate re-exports all layers of the rulebridge system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: rulebridge_runtime    - CLI, logging setup, run configuration
//! Layer 2: rulebridge_driver     - Document sequencing, failure contract
//! Layer 1: rulebridge_translate  - Translator capability, Prolog and TPTP backends
//!          rulebridge_language   - Lexer, parser, syntax tree
//! Layer 0: rulebridge_foundation - Core types (Error, DocumentRef, RunRequest)
//! ```

pub use rulebridge_driver as driver;
pub use rulebridge_foundation as foundation;
pub use rulebridge_language as language;
pub use rulebridge_runtime as runtime;
pub use rulebridge_translate as translate;
