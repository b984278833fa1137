//! The interactive REPL.
//!
//! Statement lines run against the session store as they are entered.
//! Lines starting with `:` are REPL commands.

use std::fmt::Write as _;
use std::io::{self, Write};

use blockscript_foundation::{Result, Value};
use blockscript_parser::BlockKind;
use blockscript_parser::descriptor::ControlKind;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::{LineOutcome, Session};

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (store, configuration).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "bs> ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop until EOF.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.editor.add_history(&line);
                    match self.eval(&line) {
                        Ok(output) if output.is_empty() => {}
                        Ok(output) => println!("{output}"),
                        Err(e) => eprintln!("\x1b[31mError: {e}\x1b[0m"),
                    }
                }
                ReadResult::Interrupted => println!(),
                ReadResult::Eof => break,
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Evaluates one line and returns the text to print.
    ///
    /// # Errors
    ///
    /// Returns an error if the line fails to parse or execute.
    pub fn eval(&mut self, input: &str) -> Result<String> {
        let trimmed = input.trim();
        if let Some(command) = trimmed.strip_prefix(':') {
            return self.eval_command(command);
        }

        let outcome = self.session.run_line(input)?;
        let mut out = self.session.store_mut().take_logs().join("\n");
        match outcome {
            LineOutcome::Executed { outcome, .. } => {
                if let Some(output) = outcome.written {
                    let _ = write!(out, "\n{} {} = {}", output.kind, output.name, outcome.result);
                }
            }
            LineOutcome::Skipped(statement) => {
                let _ = write!(out, "skipped disabled statement {}", statement.label);
            }
            LineOutcome::Blank | LineOutcome::Comment => {}
        }
        Ok(out)
    }

    fn eval_command(&mut self, command: &str) -> Result<String> {
        let (name, arg) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(n, a)| (n, a.trim()));
        let out = match name {
            "vars" => list_bindings(self.session.store().variables()),
            "caps" => list_bindings(self.session.store().captures()),
            "fmt" => self.session.format_line(arg)?,
            "describe" => describe(arg),
            "reset" => {
                self.session.store_mut().clear();
                "store cleared".to_string()
            }
            "help" => HELP.to_string(),
            other => format!("unknown command :{other} (try :help)"),
        };
        Ok(out)
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mblockscript\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Type statements to run them, :help for commands, Ctrl+D to exit.\n");
        let _ = io::stdout().flush();
    }
}

const HELP: &str = "\
:vars              List variables
:caps              List captures
:fmt <line>        Print a statement in canonical form
:describe <NAME>   Show a statement's form fields
:reset             Clear all variables and captures
:help              Show this help";

fn list_bindings<'a>(
    bindings: impl Iterator<Item = (&'a String, &'a Value)>,
) -> String {
    let lines: Vec<String> = bindings.map(|(k, v)| format!("{k} = {v}")).collect();
    if lines.is_empty() {
        "(none)".to_string()
    } else {
        lines.join("\n")
    }
}

fn describe(name: &str) -> String {
    let Some(kind) = BlockKind::from_name(name) else {
        return format!("unknown statement: {name}");
    };
    let descriptor = kind.descriptor();
    let mut out = format!(
        "{} ({}) color {}{}",
        descriptor.name,
        kind.name(),
        descriptor.color,
        if descriptor.light_foreground {
            ", light text"
        } else {
            ""
        }
    );
    for field in descriptor.fields {
        let control = match field.control {
            ControlKind::TextBox => "text".to_string(),
            ControlKind::CheckBox => "checkbox".to_string(),
            ControlKind::Dropdown(choices) => format!("one of {}", choices.join("/")),
        };
        let _ = write!(out, "\n  {:<12} {} [{control}]", field.field, field.label);
    }
    out
}
