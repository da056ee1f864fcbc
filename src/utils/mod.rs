//! Utility modules for browser and logging operations.
//!
//! Provides:
//! - [`dom`] - focus helpers for the prompt input
//! - [`log`] - console logging that is a no-op off the browser

pub mod dom;
pub mod log;
