//! Parser and serializer for single-line blockscript statements.
//!
//! This crate maps between a statement line and its structured form.
//!
//! # Architecture
//!
//! ```text
//! #total SUM "<X>" "6" -> VAR "Y"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   CURSOR        │  → label "total", name SUM, literals, arrow, VAR, "Y"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   PARSER        │  → Statement { kind: Sum, operands, output: VAR Y }
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   SERIALIZER    │  → #total SUM "<X>" "6" -> VAR "Y"
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cursor`] - Line scanner for labels, literals, words, and the arrow
//! - [`kind`] - Statement kinds with their arity and operation
//! - [`statement`] - The structured statement model
//! - [`parser`] - Line → statement
//! - [`serializer`] - Statement → canonical line
//! - [`descriptor`] - Display and form metadata for host applications

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cursor;
pub mod descriptor;
pub mod kind;
pub mod parser;
pub mod serializer;
pub mod statement;

pub use blockscript_foundation::{ParseError, ParseErrorKind};
pub use descriptor::{BlockDescriptor, FieldDescriptor};
pub use kind::BlockKind;
pub use parser::{Parser, ParserConfig, parse, parse_as};
pub use serializer::{Serializer, SerializerConfig, serialize};
pub use statement::{Output, OutputKind, Statement};
