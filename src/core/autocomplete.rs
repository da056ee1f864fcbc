//! Tab autocomplete functionality for terminal commands and paths.
//!
//! - One token: completes a command name (e.g., "cl" → "clear ")
//! - Two tokens: completes the second token against the names in the
//!   current directory, whatever the command is
//! - Anything else: no completion
//!
//! The first match in declaration order wins; there is no cycling.

use crate::core::{Command, VirtualFs};
use crate::models::VirtualPath;

// ============================================================================
// Completion Context
// ============================================================================

/// Determines what type of completion is needed for an input line.
#[derive(Debug, Clone, Copy, PartialEq)]
enum CompletionMode<'a> {
    /// Complete a command name.
    Command(&'a str),
    /// Complete a child name of the current directory.
    Entry { cmd: &'a str, partial: &'a str },
    /// No completion available.
    None,
}

impl<'a> CompletionMode<'a> {
    fn from_input(input: &'a str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self::None;
        }

        let parts: Vec<&str> = trimmed.split(' ').collect();
        match parts[..] {
            [cmd] => Self::Command(cmd),
            [cmd, partial] => Self::Entry { cmd, partial },
            _ => Self::None,
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Perform autocomplete on Tab press.
///
/// Returns the replacement input line, or `None` when nothing matches.
pub fn autocomplete(input: &str, cwd: &VirtualPath, fs: &VirtualFs) -> Option<String> {
    match CompletionMode::from_input(input) {
        CompletionMode::Command(partial) => {
            complete_command(partial).map(|name| format!("{} ", name))
        }
        CompletionMode::Entry { cmd, partial } => {
            complete_entry(partial, cwd, fs).map(|name| format!("{} {}", cmd, name))
        }
        CompletionMode::None => None,
    }
}

/// Get autocomplete suggestion for ghost text hint (while typing).
///
/// Returns the suffix Tab would append, or `None` if Tab would not extend
/// the input.
pub fn get_hint(input: &str, cwd: &VirtualPath, fs: &VirtualFs) -> Option<String> {
    let completed = autocomplete(input, cwd, fs)?;
    completed
        .strip_prefix(input)
        .filter(|suffix| !suffix.trim().is_empty())
        .map(str::to_string)
}

// ============================================================================
// Matching
// ============================================================================

/// First command name starting with `partial`.
fn complete_command(partial: &str) -> Option<&'static str> {
    Command::names()
        .iter()
        .copied()
        .find(|name| name.starts_with(partial))
}

/// First child of the current directory starting with `partial`.
fn complete_entry<'a>(partial: &str, cwd: &VirtualPath, fs: &'a VirtualFs) -> Option<&'a str> {
    fs.list_dir(cwd)?
        .into_iter()
        .map(|(name, _)| name)
        .find(|name| name.starts_with(partial))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(input: &str, cwd: &VirtualPath) -> Option<String> {
        autocomplete(input, cwd, VirtualFs::builtin())
    }

    #[test]
    fn test_command_completion_first_match_wins() {
        let home = VirtualPath::home();
        assert_eq!(complete("cl", &home), Some("clear ".to_string()));
        // "cd" is declared before "cat" and "clear"
        assert_eq!(complete("c", &home), Some("cd ".to_string()));
        assert_eq!(complete("th", &home), Some("theme ".to_string()));
        assert_eq!(complete("xyz", &home), None);
    }

    #[test]
    fn test_command_completion_is_case_sensitive() {
        assert_eq!(complete("CL", &VirtualPath::home()), None);
    }

    #[test]
    fn test_entry_completion() {
        let home = VirtualPath::home();
        assert_eq!(complete("cat ab", &home), Some("cat about.txt".to_string()));
        assert_eq!(complete("cd p", &home), Some("cd projects".to_string()));
        // Declaration order: skills.md comes before anything else starting with "s"
        assert_eq!(complete("cat s", &home), Some("cat skills.md".to_string()));
        assert_eq!(complete("cat zz", &home), None);
    }

    #[test]
    fn test_entry_completion_uses_current_directory() {
        let projects = VirtualPath::from_segments(["projects"]);
        assert_eq!(
            complete("cat m", &projects),
            Some("cat monitor.sh".to_string())
        );
        assert_eq!(complete("cat ab", &projects), None);
    }

    #[test]
    fn test_entry_completion_keeps_first_token() {
        assert_eq!(
            complete("CAT con", &VirtualPath::home()),
            Some("CAT contact.txt".to_string())
        );
    }

    #[test]
    fn test_no_completion_for_zero_or_many_tokens() {
        let home = VirtualPath::home();
        assert_eq!(complete("", &home), None);
        assert_eq!(complete("   ", &home), None);
        assert_eq!(complete("cat a b", &home), None);
    }

    #[test]
    fn test_completion_mode() {
        assert_eq!(CompletionMode::from_input("cd"), CompletionMode::Command("cd"));
        assert_eq!(
            CompletionMode::from_input(" cd pro "),
            CompletionMode::Entry {
                cmd: "cd",
                partial: "pro"
            }
        );
        assert_eq!(CompletionMode::from_input("a b c"), CompletionMode::None);
    }

    #[test]
    fn test_hint() {
        let home = VirtualPath::home();
        let fs = VirtualFs::builtin();
        assert_eq!(get_hint("neo", &home, fs), Some("fetch ".to_string()));
        assert_eq!(get_hint("cat pro", &home, fs), Some("jects".to_string()));
        // Complete already: Tab would only add the trailing space
        assert_eq!(get_hint("help", &home, fs), None);
        assert_eq!(get_hint("cat projects", &home, fs), None);
        assert_eq!(get_hint("", &home, fs), None);
    }
}
