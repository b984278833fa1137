//! Variable store, executor, REPL, and CLI for blockscript.
//!
//! This crate provides:
//! - [`RuntimeContext`] - What the executor needs from a variable context
//! - [`VariableStore`] - The stock context: variables, captures, and a log
//! - [`execute`] - Runs one parsed statement against a context
//! - [`Session`] - Runs, checks, and formats whole scripts line by line
//! - [`Repl`] - Interactive read-eval-print loop

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod context;
pub mod editor;
pub mod executor;
pub mod highlight;
pub mod repl;
pub mod session;
pub mod store;

pub use config::RuntimeConfig;
pub use context::RuntimeContext;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use executor::{Outcome, execute};
pub use repl::Repl;
pub use session::{LineOutcome, ScriptReport, Session};
pub use store::VariableStore;
