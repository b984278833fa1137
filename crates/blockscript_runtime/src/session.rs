//! Script sessions.
//!
//! A [`Session`] owns a [`VariableStore`] and drives statements through it
//! one line at a time. Sequencing lives here; the executor only ever sees a
//! single statement.

use std::fs;
use std::path::Path;

use blockscript_foundation::{Error, Result};
use blockscript_parser::{Parser, Serializer, Statement};

use crate::config::RuntimeConfig;
use crate::executor::{Outcome, execute};
use crate::store::VariableStore;

/// Prefix of a comment line. A single `#` introduces a label instead.
pub const COMMENT_PREFIX: &str = "##";

/// What happened to one script line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line was empty.
    Blank,
    /// The line was a `##` comment.
    Comment,
    /// The statement was disabled and not executed.
    Skipped(Statement),
    /// The statement ran.
    Executed {
        /// The parsed statement.
        statement: Statement,
        /// What it computed.
        outcome: Outcome,
    },
}

/// Summary of a script run.
#[derive(Debug, Default)]
pub struct ScriptReport {
    /// Per-line outcomes with 1-based line numbers.
    pub lines: Vec<(usize, LineOutcome)>,
    /// Errors recorded when `halt_on_error` is off.
    pub errors: Vec<Error>,
}

impl ScriptReport {
    /// Number of statements executed.
    #[must_use]
    pub fn executed(&self) -> usize {
        self.lines
            .iter()
            .filter(|(_, o)| matches!(o, LineOutcome::Executed { .. }))
            .count()
    }

    /// Number of disabled statements skipped.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.lines
            .iter()
            .filter(|(_, o)| matches!(o, LineOutcome::Skipped(_)))
            .count()
    }
}

/// A variable store plus the configuration used to run lines against it.
#[derive(Debug, Default)]
pub struct Session {
    store: VariableStore,
    config: RuntimeConfig,
}

impl Session {
    /// Creates a session with an empty store and default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with the given configuration.
    #[must_use]
    pub fn with_config(config: RuntimeConfig) -> Self {
        Self {
            store: VariableStore::new(),
            config,
        }
    }

    /// Replaces the session's store.
    #[must_use]
    pub fn with_store(mut self, store: VariableStore) -> Self {
        self.store = store;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Returns the store.
    #[must_use]
    pub const fn store(&self) -> &VariableStore {
        &self.store
    }

    /// Returns the store mutably.
    pub fn store_mut(&mut self) -> &mut VariableStore {
        &mut self.store
    }

    fn parser(&self) -> Parser {
        Parser::new(self.config.parser)
    }

    fn serializer(&self) -> Serializer {
        Serializer::new(self.config.serializer)
    }

    /// Parses and, unless disabled, executes one line.
    ///
    /// # Errors
    ///
    /// Returns a parse or execution error. A failed line leaves the store's
    /// bindings unchanged.
    pub fn run_line(&mut self, line: &str) -> Result<LineOutcome> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(LineOutcome::Blank);
        }
        if trimmed.starts_with(COMMENT_PREFIX) {
            return Ok(LineOutcome::Comment);
        }

        let statement = self.parser().parse_line(trimmed)?;
        if statement.disabled && self.config.skip_disabled {
            log::debug!("skipping disabled statement {}", statement.label);
            return Ok(LineOutcome::Skipped(statement));
        }

        let outcome = execute(&statement, &mut self.store)?;
        Ok(LineOutcome::Executed { statement, outcome })
    }

    /// Runs every line of `source` in order.
    ///
    /// # Errors
    ///
    /// With `halt_on_error` set, returns the first failure wrapped with its
    /// line number; otherwise failures are collected in the report.
    pub fn run_script(&mut self, source: &str) -> Result<ScriptReport> {
        let mut report = ScriptReport::default();
        for (index, line) in source.lines().enumerate() {
            let number = index + 1;
            match self.run_line(line) {
                Ok(outcome) => report.lines.push((number, outcome)),
                Err(err) if self.config.halt_on_error => return Err(err.at_line(number)),
                Err(err) => {
                    log::warn!("line {number}: {err}");
                    report.errors.push(err.at_line(number));
                }
            }
        }
        Ok(report)
    }

    /// Reads and runs a script file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or any error from
    /// [`Session::run_script`].
    pub fn eval_file(&mut self, path: &Path) -> Result<ScriptReport> {
        let source = fs::read_to_string(path)?;
        log::info!("running {}", path.display());
        self.run_script(&source)
    }

    /// Parses every statement line of `source` without executing anything.
    ///
    /// # Errors
    ///
    /// Returns the first parse error wrapped with its line number.
    pub fn check_script(&self, source: &str) -> Result<Vec<Statement>> {
        let parser = self.parser();
        source
            .lines()
            .enumerate()
            .filter(|(_, line)| !is_passive(line))
            .map(|(index, line)| {
                parser
                    .parse_line(line)
                    .map_err(|err| Error::from(err).at_line(index + 1))
            })
            .collect()
    }

    /// Rewrites one statement line canonically.
    ///
    /// Leading whitespace on the input becomes one level of indentation.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the line is not a statement.
    pub fn format_line(&self, line: &str) -> Result<String> {
        let statement = self.parser().parse_line(line)?;
        let indent = line.starts_with(char::is_whitespace);
        Ok(self
            .serializer()
            .serialize(&statement, indent, statement.disabled))
    }

    /// Rewrites every statement line of `source` canonically.
    ///
    /// Blank and comment lines are kept as written, minus trailing
    /// whitespace. A trailing newline on `source` is kept.
    ///
    /// # Errors
    ///
    /// Returns the first parse error wrapped with its line number.
    pub fn format_script(&self, source: &str) -> Result<String> {
        let mut out = Vec::new();
        for (index, line) in source.lines().enumerate() {
            if is_passive(line) {
                out.push(line.trim_end().to_string());
            } else {
                out.push(
                    self.format_line(line)
                        .map_err(|err| err.at_line(index + 1))?,
                );
            }
        }
        let mut formatted = out.join("\n");
        if source.ends_with('\n') {
            formatted.push('\n');
        }
        Ok(formatted)
    }
}

/// Blank lines and comments are neither parsed nor executed.
fn is_passive(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX)
}
