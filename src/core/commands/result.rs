//! Command execution result type.

use crate::core::error::ShellError;
use crate::models::{Theme, TranscriptLine, VirtualPath};

/// Session change requested by a command.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Adopt a new working directory (`cd`)
    ChangeDirectory(VirtualPath),
    /// Switch the active theme (`theme <name>`)
    SwitchTheme(&'static Theme),
    /// Drop every transcript line (`clear`)
    ClearTranscript,
}

/// Result of executing a command.
///
/// Commands produce output and optionally request one session change.
#[derive(Clone, Debug)]
pub struct CommandResult {
    /// Output lines to append
    pub output: Vec<TranscriptLine>,
    pub effect: Option<Effect>,
}

impl CommandResult {
    /// Create a result with just output, no effect.
    pub fn output(lines: Vec<TranscriptLine>) -> Self {
        Self {
            output: lines,
            effect: None,
        }
    }

    /// Create a result with a single error line.
    pub fn error(err: ShellError) -> Self {
        Self::output(vec![TranscriptLine::error(err.to_string())])
    }

    /// Create a result that only applies an effect.
    pub fn effect(effect: Effect) -> Self {
        Self {
            output: vec![],
            effect: Some(effect),
        }
    }

    /// Attach output lines to this result.
    pub fn with_output(mut self, lines: Vec<TranscriptLine>) -> Self {
        self.output.extend(lines);
        self
    }

    /// Create an empty result (no output, no effect).
    pub fn empty() -> Self {
        Self {
            output: vec![],
            effect: None,
        }
    }
}
