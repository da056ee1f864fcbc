//! Core business logic for the terminal application.
//!
//! This module provides:
//! - [`Session`] state and command dispatch via [`Command`]
//! - [`VirtualFs`] read-only filesystem and path resolution
//! - [`LineEditor`] key handling, with [`autocomplete`] and [`get_hint`]
//! - [`BootSequence`] for the startup animation

mod autocomplete;
mod boot;
mod commands;
mod editor;
pub mod error;
mod filesystem;
mod history;
mod session;

pub use autocomplete::{autocomplete, get_hint};
pub use boot::{BootSequence, BootStep};
pub use commands::Command;
pub use editor::{EditorEvent, LineEditor};
pub use filesystem::VirtualFs;
pub use session::Session;
