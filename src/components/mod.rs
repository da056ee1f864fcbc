//! UI components built with Leptos.
//!
//! - [`Shell`] - CRT frame, theme palette and boot sequence
//! - [`terminal`] - Terminal emulator interface

pub mod terminal;

pub use terminal::Shell;
