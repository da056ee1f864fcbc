//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` for command execution results
//! - `execute_command` for running a parsed command
//!
//! # Architecture
//!
//! Raw input is split on single spaces by [`Command::parse_input`]. The first
//! token selects the command (case-insensitively); only the first argument is
//! ever consulted. Execution is pure: handlers return output lines plus an
//! optional [`Effect`] that the session applies afterwards.

mod execute;
mod result;

pub use execute::{execute_command, ExecContext};
pub use result::{CommandResult, Effect};

use std::fmt;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `cat bar.md`).
///
/// Stored as typed; validation happens during execution against the
/// virtual filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    Whoami,
    Neofetch,
    Ls,
    /// `None` = go home
    Cd(Option<PathArg>),
    /// `None` = missing operand
    Cat(Option<PathArg>),
    /// `None` = list themes
    Theme(Option<String>),
    /// Unrecognized command name, as typed
    Unknown(String),
}

impl Command {
    /// Command names offered by Tab completion, in match priority order.
    pub fn names() -> &'static [&'static str] {
        &["help", "ls", "cd", "cat", "clear", "whoami", "neofetch", "theme"]
    }

    /// Parse a trimmed, non-empty input line.
    ///
    /// Tokens are separated by single spaces, so `cd  x` yields an empty first
    /// argument, which counts as no argument at all.
    pub fn parse_input(input: &str) -> Self {
        let mut tokens = input.split(' ');
        let name = tokens.next().unwrap_or_default();
        let arg = tokens.next().filter(|arg| !arg.is_empty());
        Self::parse(name, arg)
    }

    /// Parse command from name and first argument.
    pub fn parse(name: &str, arg: Option<&str>) -> Self {
        match name.to_lowercase().as_str() {
            "help" => Self::Help,
            "clear" => Self::Clear,
            "whoami" => Self::Whoami,
            "neofetch" => Self::Neofetch,
            "ls" => Self::Ls,
            "cd" => Self::Cd(arg.map(PathArg::new)),
            "cat" => Self::Cat(arg.map(PathArg::new)),
            "theme" => Self::Theme(arg.map(str::to_string)),
            _ => Self::Unknown(name.to_string()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
