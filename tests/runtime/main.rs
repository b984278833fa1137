//! Integration tests for the blockscript_runtime crate.
//!
//! Tests for statement execution and everything built around it:
//! - Executor against custom and stock contexts
//! - Variable store substitution and snapshots
//! - Script sessions and formatting

mod session_tests;
mod store_tests;
