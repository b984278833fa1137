//! The runtime context seen by the executor.
//!
//! The executor never owns variable state. It resolves operand templates,
//! writes results, and reports what it did through [`RuntimeContext`].

use blockscript_foundation::Value;

/// Mutable variable context a statement executes against.
pub trait RuntimeContext {
    /// Replaces variable references in `raw` with their current values.
    fn substitute(&self, raw: &str) -> String;

    /// Binds `name` to `value`, replacing any previous binding.
    ///
    /// `is_capture` files the binding as a capture rather than an ordinary
    /// variable.
    fn set(&mut self, name: &str, value: Value, is_capture: bool);

    /// Records a human-readable log line.
    fn log(&mut self, message: &str);
}
