//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FsNode`], [`DirEntry`], [`VirtualPath`] - Virtual filesystem representation
//! - [`TranscriptLine`], [`LineContent`] - Terminal transcript types
//! - [`Theme`], [`Palette`] - Color themes

mod filesystem;
mod terminal;
mod theme;

pub use filesystem::{FsNode, VirtualPath};
#[cfg(test)]
pub use filesystem::DirEntry;
pub use terminal::{
    Fragment, InfoBlock, InfoField, LineContent, LineData, LineKind, ListEntry, ScreenMode,
    TextStyle, TranscriptLine,
};
pub use theme::{Palette, Theme};
