//! Statement kinds.
//!
//! Each kind fixes its statement name token, its default label, its operand
//! arity, and the integer operation the executor applies.

use std::fmt;

use crate::descriptor::{self, BlockDescriptor};

/// Operand field names, in declaration order.
pub const OPERAND_FIELDS: [&str; 2] = ["First", "Second"];

/// The kinds of block statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockKind {
    /// Integer addition.
    Sum,
    /// Integer subtraction (first minus second).
    Subtract,
    /// Integer multiplication.
    Multiply,
}

impl BlockKind {
    /// All kinds, in palette order.
    pub const ALL: [Self; 3] = [Self::Sum, Self::Subtract, Self::Multiply];

    /// Statement name token as written in source.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sum => "SUM",
            Self::Subtract => "SUBTRACT",
            Self::Multiply => "MULTIPLY",
        }
    }

    /// Label given to statements written without one.
    #[must_use]
    pub const fn default_label(self) -> &'static str {
        self.descriptor().name
    }

    /// Operator symbol used in log records.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Sum => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
        }
    }

    /// Operand field names; the length is the kind's arity.
    #[must_use]
    pub const fn operand_fields(self) -> &'static [&'static str] {
        &OPERAND_FIELDS
    }

    /// Number of quoted operands the statement takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        self.operand_fields().len()
    }

    /// Applies the kind's operation, returning `None` on overflow.
    #[must_use]
    pub const fn apply(self, left: i64, right: i64) -> Option<i64> {
        match self {
            Self::Sum => left.checked_add(right),
            Self::Subtract => left.checked_sub(right),
            Self::Multiply => left.checked_mul(right),
        }
    }

    /// Host-facing display metadata.
    #[must_use]
    pub const fn descriptor(self) -> &'static BlockDescriptor {
        match self {
            Self::Sum => &descriptor::SUM,
            Self::Subtract => &descriptor::SUBTRACT,
            Self::Multiply => &descriptor::MULTIPLY,
        }
    }

    /// Resolves a statement name token, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
