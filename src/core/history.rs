//! Command recall buffer for Up/Down navigation.

use std::collections::VecDeque;

use crate::config::MAX_COMMAND_HISTORY;

/// Previously submitted commands plus a recall cursor.
///
/// Position 0 is the most recent command. The cursor is `None` while the
/// user is editing a fresh line, and otherwise always in `0..len`.
#[derive(Clone, Debug)]
pub struct CommandRecall {
    /// Newest first
    entries: VecDeque<String>,
    capacity: usize,
    cursor: Option<usize>,
}

impl CommandRecall {
    pub fn new() -> Self {
        Self::with_capacity(MAX_COMMAND_HISTORY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            cursor: None,
        }
    }

    /// Record a submitted command as the newest entry and reset the cursor.
    ///
    /// The oldest entry is dropped once the buffer is full.
    pub fn push(&mut self, command: impl Into<String>) {
        self.entries.push_front(command.into());
        self.entries.truncate(self.capacity);
        self.cursor = None;
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    /// Entry at a recall position (0 = most recent).
    pub fn get(&self, position: usize) -> Option<&str> {
        self.entries.get(position).map(String::as_str)
    }

    /// Step one entry older, stopping at the oldest.
    ///
    /// Returns the recalled command, or `None` if nothing was ever submitted.
    pub fn older(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let oldest = self.entries.len() - 1;
        let position = match self.cursor {
            None => 0,
            Some(i) => (i + 1).min(oldest),
        };
        self.cursor = Some(position);
        self.get(position)
    }

    /// Step one entry newer.
    ///
    /// Moving past the newest entry leaves recall mode and returns `None`,
    /// meaning the input line should be emptied.
    pub fn newer(&mut self) -> Option<&str> {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                self.get(i - 1)
            }
            _ => {
                self.cursor = None;
                None
            }
        }
    }
}

#[cfg(test)]
impl CommandRecall {
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Commands from most recent to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl Default for CommandRecall {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recall_with(commands: &[&str]) -> CommandRecall {
        let mut recall = CommandRecall::new();
        for cmd in commands {
            recall.push(*cmd);
        }
        recall
    }

    #[test]
    fn test_most_recent_first() {
        let recall = recall_with(&["ls", "cd projects", "cat monitor.sh"]);
        assert_eq!(
            recall.iter().collect::<Vec<_>>(),
            vec!["cat monitor.sh", "cd projects", "ls"]
        );
    }

    #[test]
    fn test_previous_on_empty() {
        let mut recall = CommandRecall::new();
        assert_eq!(recall.older(), None);
        assert_eq!(recall.cursor(), None);
    }

    #[test]
    fn test_previous_bounded_at_oldest() {
        let mut recall = recall_with(&["ls", "whoami"]);
        assert_eq!(recall.older(), Some("whoami"));
        assert_eq!(recall.older(), Some("ls"));
        assert_eq!(recall.older(), Some("ls"));
        assert_eq!(recall.cursor(), Some(1));
    }

    #[test]
    fn test_next_walks_back_to_fresh_line() {
        let mut recall = recall_with(&["ls", "whoami", "help"]);
        recall.older();
        recall.older();
        assert_eq!(recall.newer(), Some("help"));
        assert_eq!(recall.cursor(), Some(0));
        assert_eq!(recall.newer(), None);
        assert_eq!(recall.cursor(), None);
        assert_eq!(recall.newer(), None);
    }

    #[test]
    fn test_push_resets_cursor() {
        let mut recall = recall_with(&["ls", "whoami"]);
        recall.older();
        recall.push("help");
        assert_eq!(recall.cursor(), None);
        assert_eq!(recall.older(), Some("help"));
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut recall = CommandRecall::with_capacity(2);
        recall.push("one");
        recall.push("two");
        recall.push("three");
        assert_eq!(recall.len(), 2);
        assert_eq!(recall.iter().collect::<Vec<_>>(), vec!["three", "two"]);
    }
}
