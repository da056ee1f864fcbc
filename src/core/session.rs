//! Terminal session state and command dispatch.

use crate::config::{APP_HOST, APP_USER};
use crate::core::commands::{execute_command, Command, Effect, ExecContext};
use crate::core::history::CommandRecall;
use crate::core::VirtualFs;
use crate::models::{Fragment, TextStyle, Theme, TranscriptLine, VirtualPath};
use crate::utils::log;

/// Everything one page load knows about the terminal.
///
/// The transcript only grows, except for `clear`, which empties it.
#[derive(Clone, Debug)]
pub struct Session {
    cwd: VirtualPath,
    theme: &'static Theme,
    transcript: Vec<TranscriptLine>,
    recall: CommandRecall,
}

impl Session {
    /// Fresh session: home directory, default theme, empty transcript.
    pub fn new() -> Self {
        Self {
            cwd: VirtualPath::home(),
            theme: Theme::default_theme(),
            transcript: Vec::new(),
            recall: CommandRecall::new(),
        }
    }

    pub fn cwd(&self) -> &VirtualPath {
        &self.cwd
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    pub fn transcript(&self) -> &[TranscriptLine] {
        &self.transcript
    }

    #[cfg(test)]
    pub fn recall(&self) -> &CommandRecall {
        &self.recall
    }

    pub fn recall_mut(&mut self) -> &mut CommandRecall {
        &mut self.recall
    }

    /// Live prompt without the trailing `$`: `hooman@devops:~/projects`.
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}", APP_USER, APP_HOST, self.cwd.display())
    }

    /// Run one line of input.
    ///
    /// Blank input is ignored entirely. Otherwise the command is echoed with
    /// the prompt path it was typed at, recorded for recall, executed, and
    /// its output appended.
    pub fn execute(&mut self, raw: &str, fs: &VirtualFs) {
        let input = raw.trim();
        if input.is_empty() {
            return;
        }

        self.transcript
            .push(TranscriptLine::input(self.cwd.display(), input));
        self.recall.push(input);

        let ctx = ExecContext {
            cwd: &self.cwd,
            theme: self.theme,
            fs,
        };
        let result = execute_command(Command::parse_input(input), ctx);

        if let Some(effect) = result.effect {
            self.apply(effect);
        }
        self.transcript.extend(result.output);
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::ChangeDirectory(path) => self.cwd = path,
            Effect::SwitchTheme(theme) => {
                log::info(&format!("theme switched to {}", theme.id));
                self.theme = theme;
            }
            Effect::ClearTranscript => self.clear(),
        }
    }

    pub fn clear(&mut self) {
        self.transcript = Vec::new();
    }

    pub fn push_boot_line(&mut self, text: &str) {
        self.transcript.push(TranscriptLine::boot(text));
    }

    /// Hint printed once booting finishes.
    pub fn push_welcome(&mut self) {
        self.transcript.push(TranscriptLine::fragments(vec![
            Fragment::plain("Type "),
            Fragment::new("help", TextStyle::Secondary),
            Fragment::plain(" to view available commands."),
        ]));
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
