//! Blockscript - single-line arithmetic statements for visual script editors
//!
//! This crate re-exports all layers of the blockscript system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: blockscript_runtime    - Variable store, executor, sessions, REPL, CLI
//! Layer 1: blockscript_parser     - Statement model, parser, serializer, descriptors
//! Layer 0: blockscript_foundation - Core types (Value, Error)
//! ```

pub use blockscript_foundation as foundation;
pub use blockscript_parser as parser;
pub use blockscript_runtime as runtime;
