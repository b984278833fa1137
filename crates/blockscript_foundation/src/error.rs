//! Error types for blockscript.
//!
//! Uses `thiserror` for error definition. Parsing and execution each have
//! their own error type; [`Error`] aggregates them for callers that drive
//! both (sessions, the REPL, the CLI).

use thiserror::Error;

/// An error raised while parsing a single statement line.
///
/// A failed parse never yields a partial statement.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} (column {column})")]
pub struct ParseError {
    /// The kind of error that occurred.
    pub kind: ParseErrorKind,
    /// 1-based column where the error was detected.
    pub column: usize,
}

impl ParseError {
    /// Creates a new parse error at the given 1-based column.
    #[must_use]
    pub const fn new(kind: ParseErrorKind, column: usize) -> Self {
        Self { kind, column }
    }
}

/// Categorized parse error kinds for pattern matching.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The line contained nothing but whitespace.
    #[error("empty statement line")]
    EmptyLine,

    /// A label marker was not followed by a name.
    #[error("label marker is not followed by a name")]
    MissingLabel,

    /// A label is empty, contains whitespace, or starts with the label
    /// marker.
    #[error("invalid label: {0:?}")]
    InvalidLabel(String),

    /// A required quoted operand was not found.
    #[error("missing {0} operand")]
    MissingOperand(&'static str),

    /// A quoted literal was opened but never closed.
    #[error("unterminated literal")]
    UnterminatedLiteral,

    /// A required `->` marker was not found.
    #[error("expected `->`")]
    MissingArrow,

    /// A required bare word was not found.
    #[error("expected a parameter")]
    MissingParameter,

    /// A required quoted literal was not found.
    #[error("expected a quoted literal")]
    MissingLiteral,

    /// The output clause kind was absent or not one of `VAR`/`CAP`.
    #[error("invalid output kind{}", .0.as_ref().map(|k| format!(": {k}")).unwrap_or_default())]
    InvalidOutputKind(Option<String>),

    /// The output clause had no (or an empty) variable name.
    #[error("missing output variable name")]
    MissingOutputName,

    /// The statement name is not a known block kind.
    #[error("unknown statement: {0}")]
    UnknownStatement(String),

    /// The statement name did not match the kind the caller asked for.
    #[error("expected {expected} statement, found {found}")]
    UnexpectedStatement {
        /// The statement name the caller required.
        expected: String,
        /// The statement name actually present.
        found: String,
    },

    /// Text remained after a complete statement in strict mode.
    #[error("unexpected trailing content: {0}")]
    TrailingContent(String),
}

/// An error raised while executing a parsed statement.
///
/// Execution errors abort the statement before any context write.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExecError {
    /// An operand did not substitute to a base-10 signed integer.
    #[error("{which} operand is not an integer: {raw:?}")]
    OperandNotInteger {
        /// The operand field name (`First`, `Second`).
        which: &'static str,
        /// The substituted text that failed to parse.
        raw: String,
    },

    /// The result does not fit in a 64-bit signed integer.
    #[error("{operation} overflowed: {left} {symbol} {right}")]
    Overflow {
        /// The statement name.
        operation: &'static str,
        /// The operator symbol.
        symbol: &'static str,
        /// Left operand.
        left: i64,
        /// Right operand.
        right: i64,
    },

    /// A hand-built statement has the wrong number of operands.
    #[error("{operation} takes {expected} operands, got {actual}")]
    ArityMismatch {
        /// The statement name.
        operation: &'static str,
        /// Operands the kind takes.
        expected: usize,
        /// Operands present.
        actual: usize,
    },
}

/// The main error type for blockscript operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A statement line failed to parse.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A statement failed to execute.
    #[error("execution error: {0}")]
    Exec(#[from] ExecError),

    /// An error attributed to a line of a multi-line script.
    #[error("line {line}: {source}")]
    AtLine {
        /// 1-based line number.
        line: usize,
        /// The underlying error.
        #[source]
        source: Box<Error>,
    },

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding a store snapshot failed.
    #[error("snapshot error: {0}")]
    Snapshot(String),

    /// The line editor failed.
    #[error("editor error: {0}")]
    Editor(String),
}

impl Error {
    /// Wraps this error with a 1-based script line number.
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        Self::AtLine {
            line,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping line attribution.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::AtLine { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type alias using the blockscript [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
