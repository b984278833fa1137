//! Statement line parser.
//!
//! Grammar:
//!
//! ```text
//! line          := ["!"] [label] NAME literal{arity} [arrow output-clause]
//! label         := "#" IDENT
//! output-clause := ("VAR" | "CAP") literal
//! ```

use blockscript_foundation::{ParseError, ParseErrorKind};

use crate::cursor::{Cursor, DISABLED_MARKER, TokenKind};
use crate::kind::BlockKind;
use crate::statement::{Output, OutputKind, Statement};

/// Parser configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Reject text left over after a complete statement.
    pub strict: bool,
}

impl ParserConfig {
    /// Creates a configuration that rejects trailing content.
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    /// Builder method to set strictness.
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Parses statement lines into [`Statement`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Creates a parser with the given configuration.
    #[must_use]
    pub const fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the parser configuration.
    #[must_use]
    pub const fn config(&self) -> ParserConfig {
        self.config
    }

    /// Parses a line, resolving the statement kind from its name token.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first malformed element.
    pub fn parse_line(&self, line: &str) -> Result<Statement, ParseError> {
        self.parse_inner(line, None)
    }

    /// Parses a line that must be a statement of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseErrorKind::UnexpectedStatement`] if the name token
    /// names a different statement, or any other [`ParseError`] for a
    /// malformed line.
    pub fn parse_as(&self, kind: BlockKind, line: &str) -> Result<Statement, ParseError> {
        self.parse_inner(line, Some(kind))
    }

    fn parse_inner(&self, line: &str, expected: Option<BlockKind>) -> Result<Statement, ParseError> {
        let mut cursor = Cursor::new(line.trim());
        if cursor.is_at_end() {
            return Err(cursor.error(ParseErrorKind::EmptyLine));
        }

        let disabled = cursor.eat_char(DISABLED_MARKER);
        cursor.skip_whitespace();
        let label = cursor.peek_label()?;

        cursor.skip_whitespace();
        let name_column = cursor.column();
        let name = cursor
            .take_token(TokenKind::Parameter, true)?
            .unwrap_or_default();
        let kind = resolve_kind(name, expected).map_err(|kind| ParseError::new(kind, name_column))?;

        let operands = kind
            .operand_fields()
            .iter()
            .map(|&field| cursor.take_literal(field).map(str::to_string))
            .collect::<Result<Vec<_>, _>>()?;

        let output = parse_output(&mut cursor)?;

        if self.config.strict && !cursor.is_at_end() {
            cursor.skip_whitespace();
            let trailing = cursor.rest().to_string();
            return Err(cursor.error(ParseErrorKind::TrailingContent(trailing)));
        }

        Ok(Statement {
            kind,
            label: label.map_or_else(|| kind.default_label().to_string(), str::to_string),
            operands,
            output,
            disabled,
        })
    }
}

fn resolve_kind(name: &str, expected: Option<BlockKind>) -> Result<BlockKind, ParseErrorKind> {
    match (expected, BlockKind::from_name(name)) {
        (Some(expected), found) if found != Some(expected) => {
            Err(ParseErrorKind::UnexpectedStatement {
                expected: expected.name().to_string(),
                found: name.to_string(),
            })
        }
        (_, Some(found)) => Ok(found),
        (_, None) => Err(ParseErrorKind::UnknownStatement(name.to_string())),
    }
}

/// Reads the optional `-> KIND "name"` clause.
fn parse_output(cursor: &mut Cursor<'_>) -> Result<Option<Output>, ParseError> {
    if cursor.take_token(TokenKind::Arrow, false)?.is_none() {
        return Ok(None);
    }

    cursor.skip_whitespace();
    let kind_column = cursor.column();
    let Some(token) = cursor.take_token(TokenKind::Parameter, false)? else {
        return Err(cursor.error(ParseErrorKind::InvalidOutputKind(None)));
    };
    let kind = OutputKind::from_token(token).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::InvalidOutputKind(Some(token.to_string())),
            kind_column,
        )
    })?;

    match cursor.take_token(TokenKind::Literal, false)? {
        Some(name) if !name.is_empty() => Ok(Some(Output {
            kind,
            name: name.to_string(),
        })),
        _ => Err(cursor.error(ParseErrorKind::MissingOutputName)),
    }
}

/// Parses a line with the default (lenient) configuration.
///
/// # Errors
///
/// Returns a [`ParseError`] for a malformed line.
pub fn parse(line: &str) -> Result<Statement, ParseError> {
    Parser::default().parse_line(line)
}

/// Parses a line that must be a statement of `kind`, leniently.
///
/// # Errors
///
/// Returns a [`ParseError`] for a malformed line or a different statement.
pub fn parse_as(kind: BlockKind, line: &str) -> Result<Statement, ParseError> {
    Parser::default().parse_as(kind, line)
}
