//! Syntax highlighting for the REPL.

use std::borrow::Cow;

use blockscript_parser::BlockKind;

const RESET: &str = "\x1b[0m";
const DIM_ITALIC: &str = "\x1b[2;3m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const MAGENTA: &str = "\x1b[35m";
const BOLD_GREEN: &str = "\x1b[1;32m";
const BLUE: &str = "\x1b[34m";
const RED: &str = "\x1b[31m";

/// Highlighter for statement lines.
pub struct BlockscriptHighlighter;

impl BlockscriptHighlighter {
    /// Creates a new highlighter.
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim_start().starts_with("##") {
            return Cow::Owned(format!("{DIM_ITALIC}{line}{RESET}"));
        }
        if line.trim_start().starts_with(':') {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut chars = line.chars().peekable();
        let mut in_string = false;

        while let Some(c) = chars.next() {
            match c {
                '"' if in_string => {
                    result.push(c);
                    result.push_str(RESET);
                    in_string = false;
                }
                '"' => {
                    result.push_str(YELLOW);
                    result.push(c);
                    in_string = true;
                }
                _ if in_string => result.push(c),

                // Disable marker
                '!' => {
                    result.push_str(RED);
                    result.push(c);
                    result.push_str(RESET);
                }

                // Labels
                '#' => {
                    result.push_str(CYAN);
                    result.push(c);
                    while let Some(&next) = chars.peek() {
                        if next.is_whitespace() {
                            break;
                        }
                        result.push(next);
                        chars.next();
                    }
                    result.push_str(RESET);
                }

                // Arrow
                '-' if chars.peek() == Some(&'>') => {
                    chars.next();
                    result.push_str(MAGENTA);
                    result.push_str("->");
                    result.push_str(RESET);
                }

                c if c.is_alphabetic() => {
                    let mut word = String::from(c);
                    while let Some(&next) = chars.peek() {
                        if next.is_whitespace() || next == '"' {
                            break;
                        }
                        word.push(next);
                        chars.next();
                    }
                    let color = if BlockKind::from_name(&word).is_some() {
                        BOLD_GREEN
                    } else if word.eq_ignore_ascii_case("VAR") || word.eq_ignore_ascii_case("CAP")
                    {
                        BLUE
                    } else {
                        ""
                    };
                    if color.is_empty() {
                        result.push_str(&word);
                    } else {
                        result.push_str(color);
                        result.push_str(&word);
                        result.push_str(RESET);
                    }
                }

                _ => result.push(c),
            }
        }

        if in_string {
            result.push_str(RESET);
        }

        Cow::Owned(result)
    }
}

impl Default for BlockscriptHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
