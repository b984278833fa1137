//! The structured form of one statement line.

use std::fmt;

use blockscript_foundation::ParseErrorKind;

use crate::cursor::is_valid_label;
use crate::kind::BlockKind;

/// Whether a result is stored as an ordinary variable or flagged as a capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutputKind {
    /// An ordinary variable (`VAR`).
    Variable,
    /// A capture, reported to downstream consumers (`CAP`).
    Capture,
}

impl OutputKind {
    /// Source token for this kind.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Variable => "VAR",
            Self::Capture => "CAP",
        }
    }

    /// Resolves a source token, ignoring ASCII case.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("VAR") {
            Some(Self::Variable)
        } else if token.eq_ignore_ascii_case("CAP") {
            Some(Self::Capture)
        } else {
            None
        }
    }

    /// Returns true for [`OutputKind::Capture`].
    #[must_use]
    pub const fn is_capture(self) -> bool {
        matches!(self, Self::Capture)
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Where a statement stores its result.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Variable or capture.
    pub kind: OutputKind,
    /// Target name; never empty.
    pub name: String,
}

impl Output {
    /// Creates an ordinary variable output.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self {
            kind: OutputKind::Variable,
            name: name.into(),
        }
    }

    /// Creates a capture output.
    #[must_use]
    pub fn capture(name: impl Into<String>) -> Self {
        Self {
            kind: OutputKind::Capture,
            name: name.into(),
        }
    }
}

/// One parsed block statement.
///
/// Built by the parser or assembled directly by editing tools. Operands are
/// kept raw; variable references inside them are resolved at execution time.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statement {
    /// The statement kind.
    pub kind: BlockKind,
    /// Reference label; the kind's default label when none was written.
    pub label: String,
    /// Raw operand literals, exactly `kind.arity()` of them.
    pub operands: Vec<String>,
    /// Result destination, if any.
    pub output: Option<Output>,
    /// Whether an execution driver should skip this statement.
    pub disabled: bool,
}

impl Statement {
    /// Creates an enabled statement with the default label and no output.
    #[must_use]
    pub fn new(kind: BlockKind, first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            kind,
            label: kind.default_label().to_string(),
            operands: vec![first.into(), second.into()],
            output: None,
            disabled: false,
        }
    }

    /// Creates a `SUM` statement.
    #[must_use]
    pub fn sum(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::new(BlockKind::Sum, first, second)
    }

    /// Sets the label.
    ///
    /// # Errors
    ///
    /// Returns [`ParseErrorKind::InvalidLabel`] if the label is empty,
    /// contains whitespace, or starts with `#`; such a label would not read
    /// back from serialized text.
    pub fn with_label(mut self, label: impl Into<String>) -> Result<Self, ParseErrorKind> {
        let label = label.into();
        if !is_valid_label(&label) {
            return Err(ParseErrorKind::InvalidLabel(label));
        }
        self.label = label;
        Ok(self)
    }

    /// Sets the output destination.
    #[must_use]
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = Some(output);
        self
    }

    /// Sets the disabled flag.
    #[must_use]
    pub const fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Returns true if the label is the kind's default.
    #[must_use]
    pub fn has_default_label(&self) -> bool {
        self.label == self.kind.default_label()
    }

    /// Returns the raw operand for `field` (`First`, `Second`).
    #[must_use]
    pub fn operand(&self, field: &str) -> Option<&str> {
        self.kind
            .operand_fields()
            .iter()
            .position(|f| *f == field)
            .and_then(|index| self.operands.get(index))
            .map(String::as_str)
    }
}
