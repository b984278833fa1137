//! Configuration for sessions and the REPL.

use blockscript_parser::{ParserConfig, SerializerConfig};

/// Configuration for running scripts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// How statement lines are parsed.
    pub parser: ParserConfig,

    /// How statements are written back by the formatter.
    pub serializer: SerializerConfig,

    /// Whether disabled statements are skipped (true) or executed anyway.
    pub skip_disabled: bool,

    /// Whether a failing line stops the script (true) or is recorded and
    /// skipped.
    pub halt_on_error: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            serializer: SerializerConfig::default(),
            skip_disabled: true,
            halt_on_error: true,
        }
    }
}

impl RuntimeConfig {
    /// Creates a configuration with a strict parser.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            parser: ParserConfig::strict(),
            ..Self::default()
        }
    }

    /// Builder method to set the parser configuration.
    #[must_use]
    pub const fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }

    /// Builder method to set the serializer configuration.
    #[must_use]
    pub const fn with_serializer(mut self, serializer: SerializerConfig) -> Self {
        self.serializer = serializer;
        self
    }

    /// Builder method to set whether disabled statements are skipped.
    #[must_use]
    pub const fn with_skip_disabled(mut self, skip: bool) -> Self {
        self.skip_disabled = skip;
        self
    }

    /// Builder method to set whether errors stop a script.
    #[must_use]
    pub const fn with_halt_on_error(mut self, halt: bool) -> Self {
        self.halt_on_error = halt;
        self
    }
}
