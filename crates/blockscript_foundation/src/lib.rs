//! Core values and error types for blockscript.
//!
//! This crate provides:
//! - [`Value`] - Values held by a runtime variable context
//! - [`Error`] - The aggregate error type, with [`ParseError`] and
//!   [`ExecError`] for the parsing and execution layers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod value;

pub use error::{Error, ExecError, ParseError, ParseErrorKind, Result};
pub use value::Value;
