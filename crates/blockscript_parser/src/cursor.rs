//! Single-line scanner.
//!
//! The cursor walks a statement line left to right and never moves back past
//! a consumed position. Failed probes leave the position untouched.

use blockscript_foundation::{ParseError, ParseErrorKind};

/// Marker that introduces a label.
pub const LABEL_MARKER: char = '#';

/// Marker that flags a statement as disabled.
pub const DISABLED_MARKER: char = '!';

/// Delimiter around quoted literals.
pub const QUOTE: char = '"';

/// Marker that introduces an output clause.
pub const ARROW: &str = "->";

/// Returns true if `label` can follow the label marker and read back
/// unchanged: non-empty, no whitespace, and not starting with the marker.
#[must_use]
pub fn is_valid_label(label: &str) -> bool {
    !label.is_empty() && !label.starts_with(LABEL_MARKER) && !label.contains(char::is_whitespace)
}

/// The kinds of token [`Cursor::take_token`] can read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// The `->` marker.
    Arrow,
    /// A bare whitespace-delimited word.
    Parameter,
    /// A quoted literal; the token text excludes the quotes.
    Literal,
}

impl TokenKind {
    const fn missing(self) -> ParseErrorKind {
        match self {
            Self::Arrow => ParseErrorKind::MissingArrow,
            Self::Parameter => ParseErrorKind::MissingParameter,
            Self::Literal => ParseErrorKind::MissingLiteral,
        }
    }
}

/// A scanner over one statement line.
#[derive(Clone, Debug)]
pub struct Cursor<'src> {
    /// The full line.
    source: &'src str,
    /// Current byte offset into `source`.
    position: usize,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor at the start of `source`.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the current byte offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the 1-based column of the current position, counted in chars.
    #[must_use]
    pub fn column(&self) -> usize {
        self.source[..self.position].chars().count() + 1
    }

    /// Returns the unconsumed text.
    #[must_use]
    pub fn rest(&self) -> &'src str {
        &self.source[self.position..]
    }

    /// Returns true if only whitespace remains.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.rest().trim_start().is_empty()
    }

    /// Builds an error located at the current position.
    #[must_use]
    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.column())
    }

    /// Advances past any whitespace.
    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.position += rest.len() - rest.trim_start().len();
    }

    /// Consumes `marker` if it is the next non-whitespace character.
    pub fn eat_char(&mut self, marker: char) -> bool {
        self.skip_whitespace();
        if self.rest().starts_with(marker) {
            self.position += marker.len_utf8();
            true
        } else {
            false
        }
    }

    /// Reads a leading `#label`.
    ///
    /// Returns `Ok(None)` without consuming anything when no label marker is
    /// present.
    ///
    /// # Errors
    ///
    /// Returns [`ParseErrorKind::MissingLabel`] if the marker is not followed
    /// by a name and [`ParseErrorKind::InvalidLabel`] if the name itself
    /// starts with the marker.
    pub fn peek_label(&mut self) -> Result<Option<&'src str>, ParseError> {
        let rest = self.rest();
        let Some(after_marker) = rest.strip_prefix(LABEL_MARKER) else {
            return Ok(None);
        };
        let end = after_marker
            .find(char::is_whitespace)
            .unwrap_or(after_marker.len());
        if end == 0 {
            return Err(self.error(ParseErrorKind::MissingLabel));
        }
        let label = &after_marker[..end];
        if !is_valid_label(label) {
            return Err(self.error(ParseErrorKind::InvalidLabel(label.to_string())));
        }
        self.position += LABEL_MARKER.len_utf8() + end;
        Ok(Some(label))
    }

    /// Reads a required quoted literal for the operand named `field`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseErrorKind::MissingOperand`] if no opening quote is found
    /// and [`ParseErrorKind::UnterminatedLiteral`] if the closing quote is
    /// missing.
    pub fn take_literal(&mut self, field: &'static str) -> Result<&'src str, ParseError> {
        match self.take_token(TokenKind::Literal, true) {
            Ok(Some(text)) => Ok(text),
            Ok(None) => Err(self.error(ParseErrorKind::MissingOperand(field))),
            Err(err) if err.kind == ParseErrorKind::MissingLiteral => Err(ParseError::new(
                ParseErrorKind::MissingOperand(field),
                err.column,
            )),
            Err(err) => Err(err),
        }
    }

    /// Reads the next token of the given kind.
    ///
    /// With `required = false` an absent token yields `Ok(None)` and consumes
    /// nothing but leading whitespace.
    ///
    /// # Errors
    ///
    /// Returns the kind-specific missing-token error when `required` is set
    /// and the token is absent, and [`ParseErrorKind::UnterminatedLiteral`]
    /// for an opened but unclosed literal regardless of `required`.
    pub fn take_token(
        &mut self,
        kind: TokenKind,
        required: bool,
    ) -> Result<Option<&'src str>, ParseError> {
        self.skip_whitespace();
        let token = match kind {
            TokenKind::Arrow => self.scan_arrow(),
            TokenKind::Parameter => self.scan_word(),
            TokenKind::Literal => self.scan_literal()?,
        };
        match token {
            None if required => Err(self.error(kind.missing())),
            other => Ok(other),
        }
    }

    fn scan_arrow(&mut self) -> Option<&'src str> {
        let rest = self.rest();
        if rest.starts_with(ARROW) {
            self.position += ARROW.len();
            Some(&rest[..ARROW.len()])
        } else {
            None
        }
    }

    // Words stop at a quote so `SUM"1""2"` still splits.
    fn scan_word(&mut self) -> Option<&'src str> {
        let rest = self.rest();
        let end = rest
            .find(|c: char| c.is_whitespace() || c == QUOTE)
            .unwrap_or(rest.len());
        if end == 0 {
            return None;
        }
        self.position += end;
        Some(&rest[..end])
    }

    fn scan_literal(&mut self) -> Result<Option<&'src str>, ParseError> {
        let rest = self.rest();
        let Some(body) = rest.strip_prefix(QUOTE) else {
            return Ok(None);
        };
        let Some(end) = body.find(QUOTE) else {
            return Err(self.error(ParseErrorKind::UnterminatedLiteral));
        };
        self.position += 2 * QUOTE.len_utf8() + end;
        Ok(Some(&body[..end]))
    }
}
