//! Color themes.
//!
//! Themes are immutable values selected by id from [`crate::config::THEMES`].

use crate::config::THEMES;

/// Color palette applied to the whole terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub bg: &'static str,
    pub text: &'static str,
    /// Prompt / user color
    pub primary: &'static str,
    /// Command / highlight color
    pub secondary: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub glow: &'static str,
}

impl Palette {
    /// Inline CSS custom properties consumed by the stylesheet.
    pub fn css_vars(&self) -> String {
        format!(
            "--bg: {}; --text: {}; --primary: {}; --secondary: {}; --error: {}; --info: {}; --glow: {};",
            self.bg, self.text, self.primary, self.secondary, self.error, self.info, self.glow
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Registry key used by `theme <id>`
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    pub palette: Palette,
}

impl Theme {
    /// The theme active when a session starts.
    pub fn default_theme() -> &'static Theme {
        &THEMES[0]
    }

    /// Look up a registered theme by id (case-insensitive).
    pub fn find(id: &str) -> Option<&'static Theme> {
        let id = id.to_lowercase();
        THEMES.iter().find(|theme| theme.id == id)
    }

    /// Registered theme ids in declaration order.
    pub fn ids() -> impl Iterator<Item = &'static str> {
        THEMES.iter().map(|theme| theme.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_case_insensitive() {
        assert_eq!(Theme::find("retro").map(|t| t.name), Some("Matrix Green"));
        assert_eq!(Theme::find("AMBER").map(|t| t.name), Some("Retro Amber"));
        assert!(Theme::find("solarized").is_none());
        assert!(Theme::find("").is_none());
    }

    #[test]
    fn test_registry_ids() {
        assert_eq!(Theme::ids().collect::<Vec<_>>(), vec!["default", "retro", "amber"]);
        assert_eq!(Theme::default_theme().id, "default");
    }

    #[test]
    fn test_css_vars() {
        let vars = Theme::default_theme().palette.css_vars();
        assert!(vars.contains("--bg: #1a1b26;"));
        assert!(vars.contains("--primary: #7aa2f7;"));
        assert!(vars.contains("--glow: rgba(122, 162, 247, 0.15);"));
    }

    #[test]
    fn test_retro_css_vars() {
        let retro = Theme::find("retro").expect("retro theme is registered");
        let vars = retro.palette.css_vars();
        assert!(vars.contains("--bg: #0d1117;"));
        assert!(vars.contains("--text: #00ff41;"));
        assert!(vars.contains("--secondary: #008F11;"));
        assert_ne!(vars, Theme::default_theme().palette.css_vars());
    }
}
