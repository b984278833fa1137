//! Line editor abstraction for the REPL.
//!
//! The REPL reads through [`LineEditor`] so tests can feed it scripted input
//! while the binary uses rustyline.

use std::borrow::Cow;

use blockscript_foundation::{Error, Result};
use blockscript_parser::BlockKind;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator as RLValidator};

use crate::highlight::BlockscriptHighlighter;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

/// Helper for rustyline that provides completion, hints, and highlighting.
#[derive(Helper, Completer, Hinter, RLValidator)]
struct BlockscriptHelper {
    #[rustyline(Completer)]
    completer: KeywordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: BlockscriptHighlighter,
}

impl Highlighter for BlockscriptHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes statement names, output kinds, and REPL commands.
struct KeywordCompleter {
    keywords: Vec<String>,
}

impl KeywordCompleter {
    fn new() -> Self {
        let mut keywords: Vec<String> = BlockKind::ALL
            .iter()
            .map(|kind| kind.name().to_string())
            .collect();
        keywords.extend(
            ["VAR", "CAP", ":vars", ":caps", ":fmt", ":describe", ":reset", ":help"]
                .map(String::from),
        );
        Self { keywords }
    }
}

impl Completer for KeywordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // No completion inside a literal
        if line[..pos].chars().filter(|&c| c == '"').count() % 2 == 1 {
            return Ok((pos, Vec::new()));
        }

        let start = line[..pos]
            .rfind(|c: char| c.is_whitespace() || c == '"')
            .map_or(0, |i| i + 1);
        let word = &line[start..pos];

        let candidates = self
            .keywords
            .iter()
            .filter(|kw| kw.len() >= word.len() && kw[..word.len()].eq_ignore_ascii_case(word))
            .map(|kw| Pair {
                display: kw.clone(),
                replacement: kw.clone(),
            })
            .collect();

        Ok((start, candidates))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<BlockscriptHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::Editor(e.to_string()))?
            .build();

        let helper = BlockscriptHelper {
            completer: KeywordCompleter::new(),
            hinter: HistoryHinter::new(),
            highlighter: BlockscriptHighlighter::new(),
        };

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::Editor(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::Editor(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
