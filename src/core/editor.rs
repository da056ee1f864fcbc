//! Line editor: turns key events into session transitions.
//!
//! Plain character editing belongs to the browser's text input; the editor
//! only sees the resulting buffer through [`LineEditor::set_buffer`].

use crate::core::{autocomplete, Session, VirtualFs};

/// Key-level events the editor reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorEvent {
    /// Enter
    Submit,
    /// ArrowUp
    RecallPrevious,
    /// ArrowDown
    RecallNext,
    /// Tab
    Complete,
    /// Ctrl+C: abandon the current line
    Cancel,
    /// Ctrl+L: wipe the screen without recording a command
    ClearScreen,
}

/// The input line being edited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineEditor {
    buffer: String,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Replace the buffer with what the text field now holds.
    pub fn set_buffer(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
    }

    /// Apply one event to the editor and the session.
    pub fn apply(&mut self, event: EditorEvent, session: &mut Session, fs: &VirtualFs) {
        match event {
            EditorEvent::Submit => {
                let line = std::mem::take(&mut self.buffer);
                session.execute(&line, fs);
            }
            EditorEvent::RecallPrevious => {
                if let Some(cmd) = session.recall_mut().older() {
                    self.buffer = cmd.to_string();
                }
            }
            EditorEvent::RecallNext => {
                self.buffer = session
                    .recall_mut()
                    .newer()
                    .map(str::to_string)
                    .unwrap_or_default();
            }
            EditorEvent::Complete => {
                if let Some(completed) = autocomplete(&self.buffer, session.cwd(), fs) {
                    self.buffer = completed;
                }
            }
            EditorEvent::Cancel => {
                self.buffer.clear();
                session.recall_mut().reset_cursor();
            }
            EditorEvent::ClearScreen => session.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineData;

    fn fs() -> &'static VirtualFs {
        VirtualFs::builtin()
    }

    fn submit(editor: &mut LineEditor, session: &mut Session, line: &str) {
        editor.set_buffer(line);
        editor.apply(EditorEvent::Submit, session, fs());
    }

    #[test]
    fn test_submit_executes_and_clears_buffer() {
        let mut editor = LineEditor::new();
        let mut session = Session::new();
        submit(&mut editor, &mut session, "whoami");
        assert_eq!(editor.buffer(), "");
        assert_eq!(session.transcript().len(), 2);
    }

    #[test]
    fn test_recall_previous_and_next() {
        let mut editor = LineEditor::new();
        let mut session = Session::new();
        for cmd in ["ls", "whoami", "help"] {
            submit(&mut editor, &mut session, cmd);
        }

        editor.apply(EditorEvent::RecallPrevious, &mut session, fs());
        assert_eq!(editor.buffer(), "help");
        editor.apply(EditorEvent::RecallPrevious, &mut session, fs());
        assert_eq!(editor.buffer(), "whoami");
        editor.apply(EditorEvent::RecallNext, &mut session, fs());
        assert_eq!(editor.buffer(), "help");
        editor.apply(EditorEvent::RecallNext, &mut session, fs());
        assert_eq!(editor.buffer(), "");
        assert_eq!(session.recall().cursor(), None);
    }

    #[test]
    fn test_recall_round_trip_returns_to_empty() {
        let mut editor = LineEditor::new();
        let mut session = Session::new();
        let commands = ["ls", "cd projects", "ls", "cat monitor.sh"];
        for cmd in commands {
            submit(&mut editor, &mut session, cmd);
        }

        for _ in 0..commands.len() {
            editor.apply(EditorEvent::RecallPrevious, &mut session, fs());
        }
        assert_eq!(editor.buffer(), "ls");
        for _ in 0..commands.len() {
            editor.apply(EditorEvent::RecallNext, &mut session, fs());
        }
        assert_eq!(editor.buffer(), "");
    }

    #[test]
    fn test_recall_previous_with_empty_history_keeps_buffer() {
        let mut editor = LineEditor::new();
        let mut session = Session::new();
        editor.set_buffer("partial");
        editor.apply(EditorEvent::RecallPrevious, &mut session, fs());
        assert_eq!(editor.buffer(), "partial");
    }

    #[test]
    fn test_complete_uses_session_directory() {
        let mut editor = LineEditor::new();
        let mut session = Session::new();
        submit(&mut editor, &mut session, "cd projects");

        editor.set_buffer("cat po");
        editor.apply(EditorEvent::Complete, &mut session, fs());
        assert_eq!(editor.buffer(), "cat portfolio.md");

        editor.set_buffer("nothing matches here");
        editor.apply(EditorEvent::Complete, &mut session, fs());
        assert_eq!(editor.buffer(), "nothing matches here");
    }

    #[test]
    fn test_cancel_clears_line() {
        let mut editor = LineEditor::new();
        let mut session = Session::new();
        submit(&mut editor, &mut session, "ls");
        editor.apply(EditorEvent::RecallPrevious, &mut session, fs());
        editor.apply(EditorEvent::Cancel, &mut session, fs());
        assert_eq!(editor.buffer(), "");
        assert_eq!(session.recall().cursor(), None);
    }

    #[test]
    fn test_clear_screen_is_not_recorded() {
        let mut editor = LineEditor::new();
        let mut session = Session::new();
        submit(&mut editor, &mut session, "help");
        editor.set_buffer("half typed");
        editor.apply(EditorEvent::ClearScreen, &mut session, fs());
        assert!(session.transcript().is_empty());
        assert_eq!(session.recall().len(), 1);
        assert_eq!(editor.buffer(), "half typed");
    }

    #[test]
    fn test_blank_submit_records_nothing() {
        let mut editor = LineEditor::new();
        let mut session = Session::new();
        submit(&mut editor, &mut session, "   ");
        assert!(session.transcript().is_empty());
        assert!(session.recall().is_empty());
        assert!(!session
            .transcript()
            .iter()
            .any(|line| matches!(line.data, LineData::Input { .. })));
    }
}
