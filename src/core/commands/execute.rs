//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and returns results.

use crate::config::{
    APP_HOST, APP_USER, HELP_ENTRIES, NEOFETCH_FIELDS, NEOFETCH_LOGO, WHOAMI_TEXT,
};
use crate::core::error::ShellError;
use crate::core::VirtualFs;
use crate::models::{
    FsNode, Fragment, InfoBlock, InfoField, LineContent, ListEntry, TextStyle, Theme,
    TranscriptLine, VirtualPath,
};
use crate::utils::log;

use super::{Command, CommandResult, Effect, PathArg};

/// Read-only view of the session a command runs against.
#[derive(Clone, Copy, Debug)]
pub struct ExecContext<'a> {
    pub cwd: &'a VirtualPath,
    pub theme: &'static Theme,
    pub fs: &'a VirtualFs,
}

/// Execute a parsed command.
///
/// Never mutates anything: state changes are returned as an [`Effect`].
pub fn execute_command(cmd: Command, ctx: ExecContext<'_>) -> CommandResult {
    match cmd {
        Command::Help => execute_help(),
        Command::Clear => CommandResult::effect(Effect::ClearTranscript),
        Command::Whoami => CommandResult::output(vec![TranscriptLine::text(WHOAMI_TEXT)]),
        Command::Neofetch => execute_neofetch(ctx.theme),
        Command::Ls => execute_ls(ctx),
        Command::Cd(path) => execute_cd(path, ctx),
        Command::Cat(file) => execute_cat(file, ctx),
        Command::Theme(name) => execute_theme(name),
        Command::Unknown(name) => {
            log::debug(&format!("unknown command: {}", name));
            CommandResult::error(ShellError::UnknownCommand(name))
        }
    }
}

/// Execute `help` command.
fn execute_help() -> CommandResult {
    let mut lines = vec![TranscriptLine::text("Available Commands:")];
    lines.extend(HELP_ENTRIES.iter().map(|(usage, description)| {
        TranscriptLine::fragments(vec![
            Fragment::new(*usage, TextStyle::Secondary),
            Fragment::plain(format!(" - {}", description)),
        ])
    }));
    CommandResult::output(lines)
}

/// Execute `neofetch` command.
fn execute_neofetch(theme: &Theme) -> CommandResult {
    let mut fields: Vec<InfoField> = NEOFETCH_FIELDS
        .iter()
        .map(|(label, value)| InfoField {
            label: label.to_string(),
            value: value.to_string(),
        })
        .collect();
    fields.push(InfoField {
        label: "Theme".to_string(),
        value: theme.name.to_string(),
    });

    CommandResult::output(vec![TranscriptLine::output(LineContent::Info(InfoBlock {
        logo: NEOFETCH_LOGO.trim_end().to_string(),
        user: APP_USER.to_string(),
        host: APP_HOST.to_string(),
        fields,
    }))])
}

/// Execute `ls` command.
fn execute_ls(ctx: ExecContext<'_>) -> CommandResult {
    let entries: Vec<ListEntry> = ctx
        .fs
        .list_dir(ctx.cwd)
        .unwrap_or_default()
        .into_iter()
        .map(|(name, is_dir)| ListEntry {
            name: name.to_string(),
            is_dir,
        })
        .collect();

    if entries.is_empty() {
        return CommandResult::empty();
    }
    CommandResult::output(vec![TranscriptLine::output(LineContent::Listing(entries))])
}

/// Execute `cd` command.
fn execute_cd(path: Option<PathArg>, ctx: ExecContext<'_>) -> CommandResult {
    let Some(path) = path else {
        return CommandResult::effect(Effect::ChangeDirectory(VirtualPath::home()));
    };

    let resolved = ctx.fs.resolve(ctx.cwd, path.as_str());
    match resolved.node {
        Some(node) if node.is_directory() => {
            CommandResult::effect(Effect::ChangeDirectory(resolved.path))
        }
        _ => CommandResult::error(ShellError::NoSuchDirectory(path.to_string())),
    }
}

/// Execute `cat` command.
fn execute_cat(file: Option<PathArg>, ctx: ExecContext<'_>) -> CommandResult {
    let Some(file) = file else {
        return CommandResult::error(ShellError::MissingArgument("cat [file]"));
    };

    match ctx.fs.resolve(ctx.cwd, file.as_str()).node {
        Some(FsNode::File { content }) => {
            CommandResult::output(vec![TranscriptLine::output(content.clone())])
        }
        Some(FsNode::Directory { .. }) => {
            CommandResult::error(ShellError::IsADirectory(file.to_string()))
        }
        None => CommandResult::error(ShellError::NoSuchFile(file.to_string())),
    }
}

/// Execute `theme` command.
fn execute_theme(name: Option<String>) -> CommandResult {
    match name.as_deref().and_then(Theme::find) {
        Some(theme) => CommandResult::effect(Effect::SwitchTheme(theme)).with_output(vec![
            TranscriptLine::text(format!("Theme changed to {}", theme.name)),
        ]),
        None => CommandResult::output(vec![TranscriptLine::text(format!(
            "Available themes: {}",
            Theme::ids().collect::<Vec<_>>().join(", ")
        ))]),
    }
}

// =============================================================================
// Tests
// =============================================================================
