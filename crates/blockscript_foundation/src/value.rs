//! Runtime values stored in a variable context.

use std::fmt;

/// A value bound to a variable or capture.
///
/// Statements only ever write scalars, but a context may hold lists seeded by
/// the host; list elements are addressable through `<NAME[i]>` references.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// A single string.
    Str(String),
    /// An ordered sequence of strings.
    List(Vec<String>),
}

impl Value {
    /// Returns the scalar string, if this is a [`Value::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::List(_) => None,
        }
    }

    /// Returns the list elements, if this is a [`Value::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Str(_) => None,
            Self::List(items) => Some(items),
        }
    }

    /// Returns the list element at `index`.
    ///
    /// Negative indices count from the end, so `-1` is the last element.
    #[must_use]
    pub fn element(&self, index: isize) -> Option<&str> {
        let items = self.as_list()?;
        let resolved = if index < 0 {
            items.len().checked_sub(index.unsigned_abs())?
        } else {
            index.unsigned_abs()
        };
        items.get(resolved).map(String::as_str)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Str(n.to_string())
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}
