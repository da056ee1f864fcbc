//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

use crate::models::{Palette, Theme};

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// ASCII logo shown by `neofetch`.
pub const NEOFETCH_LOGO: &str = include_str!("../assets/text/logo.txt");

/// Virtual filesystem dataset.
pub const FILESYSTEM_DATA: &str = include_str!("../assets/filesystem.json");

// =============================================================================
// Identity
// =============================================================================

/// User name shown in the prompt.
pub const APP_USER: &str = "hooman";

/// Host name shown in the prompt.
pub const APP_HOST: &str = "devops";

/// Output of `whoami`.
pub const WHOAMI_TEXT: &str = "hooman (IT Support -> DevOps Engineer)";

/// Fixed `neofetch` fields. The theme line is appended at runtime.
pub const NEOFETCH_FIELDS: &[(&str, &str)] = &[
    ("OS", "WebOS Arch"),
    ("Host", "Browser"),
    ("Uptime", "29 Years"),
];

// =============================================================================
// Commands
// =============================================================================

/// `help` listing: usage and description, in display order.
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("ls", "List directory content"),
    ("cd [dir]", "Change directory"),
    ("cat [file]", "Read file content"),
    ("clear", "Clear terminal"),
    ("theme [name]", "Change theme (default, retro, amber)"),
    ("neofetch", "System Info"),
    ("whoami", "About current user"),
];

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 100;

// =============================================================================
// Boot Sequence Configuration
// =============================================================================

/// Delay between boot lines in milliseconds.
pub const BOOT_INTERVAL_MS: u32 = 150;

/// Lines printed one per tick while booting.
pub const BOOT_SEQUENCE: &[&str] = &[
    "BIOS Date 01/15/2025 14:22:51 Ver: 1.0.0",
    "CPU: Intel(R) Core(TM) i9-14900K @ 6.00GHz",
    "Memory Test: 65536K OK",
    "Detecting Primary Master ... Hooman-SSD 2TB",
    "Detecting Primary Slave ... None",
    "Booting from Hard Disk...",
    "Loading Kernel modules...",
    "Mounting root filesystem...",
    "Starting sshd...",
    "Welcome to HoomanOS v1.0",
];

// =============================================================================
// Themes
// =============================================================================

/// Theme registry. The first entry is the startup theme.
pub const THEMES: &[Theme] = &[
    Theme {
        id: "default",
        name: "Tokyo Night",
        palette: Palette {
            bg: "#1a1b26",
            text: "#a9b1d6",
            primary: "#7aa2f7",
            secondary: "#9ece6a",
            error: "#f7768e",
            info: "#e0af68",
            glow: "rgba(122, 162, 247, 0.15)",
        },
    },
    Theme {
        id: "retro",
        name: "Matrix Green",
        palette: Palette {
            bg: "#0d1117",
            text: "#00ff41",
            primary: "#00ff41",
            secondary: "#008F11",
            error: "#00ff41",
            info: "#00ff41",
            glow: "rgba(0, 255, 65, 0.4)",
        },
    },
    Theme {
        id: "amber",
        name: "Retro Amber",
        palette: Palette {
            bg: "#1a1200",
            text: "#ffb000",
            primary: "#ffb000",
            secondary: "#cc8800",
            error: "#ffb000",
            info: "#ffb000",
            glow: "rgba(255, 176, 0, 0.4)",
        },
    },
];
