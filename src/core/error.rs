//! Custom error types for the application.
//!
//! - [`ShellError`] - user-facing command failures, rendered as error lines
//! - [`DatasetError`] - malformed virtual filesystem dataset

use thiserror::Error;

/// Command failures. None of these are fatal: each becomes one error line
/// in the transcript and leaves the session otherwise untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// `cd` target missing or not a directory
    #[error("bash: cd: {0}: No such directory")]
    NoSuchDirectory(String),
    /// `cat` target missing
    #[error("cat: {0}: No such file")]
    NoSuchFile(String),
    /// `cat` target is a directory
    #[error("cat: {0}: Is a directory")]
    IsADirectory(String),
    /// Required operand missing; holds the usage synopsis
    #[error("usage: {0}")]
    MissingArgument(&'static str),
    #[error("bash: {0}: command not found")]
    UnknownCommand(String),
}

/// Errors found while loading the filesystem dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("malformed filesystem dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("filesystem root must be a directory")]
    RootNotDirectory,
    #[error("empty entry name in '{parent}'")]
    EmptyName { parent: String },
    #[error("entry name '{name}' in '{parent}' contains '/'")]
    SlashInName { parent: String, name: String },
    #[error("duplicate entry '{name}' in '{parent}'")]
    DuplicateName { parent: String, name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_error_messages() {
        assert_eq!(
            ShellError::NoSuchDirectory("nope".into()).to_string(),
            "bash: cd: nope: No such directory"
        );
        assert_eq!(
            ShellError::NoSuchFile("x".into()).to_string(),
            "cat: x: No such file"
        );
        assert_eq!(
            ShellError::IsADirectory("projects".into()).to_string(),
            "cat: projects: Is a directory"
        );
        assert_eq!(
            ShellError::MissingArgument("cat [file]").to_string(),
            "usage: cat [file]"
        );
        assert_eq!(
            ShellError::UnknownCommand("foo".into()).to_string(),
            "bash: foo: command not found"
        );
    }
}
