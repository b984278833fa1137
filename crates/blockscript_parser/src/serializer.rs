//! Canonical statement writer.
//!
//! Mirrors the parser's grammar without sharing its scanner. Output always
//! re-parses to a statement with the same kind, operands, and output; labels
//! equal to the kind's default are omitted and spacing is normalized.
//!
//! # Example
//!
//! ```
//! use blockscript_parser::{Output, Statement, serialize};
//!
//! let stmt = Statement::sum("<X>", "6").with_output(Output::variable("Y"));
//! assert_eq!(serialize(&stmt), r#"SUM "<X>" "6" -> VAR "Y""#);
//! ```

use crate::cursor::{ARROW, DISABLED_MARKER, LABEL_MARKER, QUOTE, is_valid_label};
use crate::statement::Statement;

/// Serializer configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SerializerConfig {
    /// Number of spaces written before an indented line.
    pub indent_width: usize,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}

impl SerializerConfig {
    /// Builder method to set the indentation width.
    #[must_use]
    pub const fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

/// Writes statements back to source text.
#[derive(Clone, Copy, Debug, Default)]
pub struct Serializer {
    config: SerializerConfig,
}

impl Serializer {
    /// Creates a serializer with the given configuration.
    #[must_use]
    pub const fn new(config: SerializerConfig) -> Self {
        Self { config }
    }

    /// Writes `statement` as one line.
    ///
    /// `indent` prefixes the configured indentation; `disabled` prefixes the
    /// disable marker. Neither changes the statement's tokens. A label that
    /// would not read back (see [`is_valid_label`]) is omitted, as is the
    /// kind's default label.
    #[must_use]
    pub fn serialize(&self, statement: &Statement, indent: bool, disabled: bool) -> String {
        let mut out = String::new();
        if indent {
            out.extend(std::iter::repeat_n(' ', self.config.indent_width));
        }
        if disabled {
            out.push(DISABLED_MARKER);
        }
        if !statement.has_default_label() && is_valid_label(&statement.label) {
            out.push(LABEL_MARKER);
            out.push_str(&statement.label);
            out.push(' ');
        }
        out.push_str(statement.kind.name());
        for operand in &statement.operands {
            out.push(' ');
            push_literal(&mut out, operand);
        }
        if let Some(output) = &statement.output {
            out.push(' ');
            out.push_str(ARROW);
            out.push(' ');
            out.push_str(output.kind.token());
            out.push(' ');
            push_literal(&mut out, &output.name);
        }
        out
    }

    /// Writes `statement` unindented, with its own disabled flag.
    #[must_use]
    pub fn line(&self, statement: &Statement) -> String {
        self.serialize(statement, false, statement.disabled)
    }
}

fn push_literal(out: &mut String, text: &str) {
    out.push(QUOTE);
    out.push_str(text);
    out.push(QUOTE);
}

/// Writes `statement` with the default configuration.
#[must_use]
pub fn serialize(statement: &Statement) -> String {
    Serializer::default().line(statement)
}
