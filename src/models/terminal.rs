//! Terminal-related data types for transcript rendering.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Deserialize;

/// Styling tag for a text fragment.
///
/// The renderer maps each tag to a palette color or font treatment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    /// Body text color
    #[default]
    Plain,
    /// Bold body text
    Bold,
    /// Bold, underlined section heading
    Heading,
    /// Prompt/user color
    Primary,
    /// Command/highlight color
    Secondary,
    /// Label color (yellow in the default palette)
    Info,
    /// Preformatted code block (dimmed, no wrapping)
    Code,
}

/// A run of text sharing one style. Newlines inside `text` are preserved.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Fragment {
    pub text: String,
    #[serde(default)]
    pub style: TextStyle,
}

impl Fragment {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextStyle::Plain)
    }
}

/// One name in a directory listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListEntry {
    pub name: String,
    pub is_dir: bool,
}

impl ListEntry {
    /// Name as displayed: directories get a trailing `/`.
    pub fn display_name(&self) -> String {
        if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// A labelled value in an info block.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct InfoField {
    pub label: String,
    pub value: String,
}

/// System-info card (`neofetch`): logo on the left, `user@host` and fields on the right.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct InfoBlock {
    pub logo: String,
    pub user: String,
    pub host: String,
    pub fields: Vec<InfoField>,
}

/// Renderable payload of a transcript line.
///
/// File contents in the virtual filesystem use the same type, so `cat`
/// hands them to the renderer untouched.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineContent {
    /// Plain text
    Text(String),
    /// Styled fragments rendered inline
    Fragments(Vec<Fragment>),
    /// Directory listing (ls)
    #[serde(skip)]
    Listing(Vec<ListEntry>),
    /// Key-value info card
    Info(InfoBlock),
}

#[cfg(test)]
impl LineContent {
    /// Concatenated text without styling, used for plain-text comparisons.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Fragments(fragments) => fragments.iter().map(|f| f.text.as_str()).collect(),
            Self::Listing(entries) => entries
                .iter()
                .map(ListEntry::display_name)
                .collect::<Vec<_>>()
                .join("  "),
            Self::Info(block) => {
                let mut out = format!("{}@{}", block.user, block.host);
                for field in &block.fields {
                    out.push_str(&format!("\n{}: {}", field.label, field.value));
                }
                out
            }
        }
    }
}

/// Kind of a transcript line, as seen by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Input,
    Output,
    Boot,
    Error,
}

/// The actual content of a transcript line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineData {
    /// Submitted command with the prompt path active when it was issued
    Input { path: String, command: String },
    /// Command output
    Output(LineContent),
    /// Boot animation text
    Boot(String),
    /// Error message
    Error(String),
}

/// A single line of the terminal transcript with a unique ID
#[derive(Clone, Debug)]
pub struct TranscriptLine {
    /// Unique ID for keying in For loops
    pub id: usize,
    pub data: LineData,
}

// Global counter for generating unique IDs
static LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl TranscriptLine {
    fn new(data: LineData) -> Self {
        Self {
            id: LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    pub fn input(path: impl Into<String>, command: impl Into<String>) -> Self {
        Self::new(LineData::Input {
            path: path.into(),
            command: command.into(),
        })
    }

    pub fn output(content: LineContent) -> Self {
        Self::new(LineData::Output(content))
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::output(LineContent::Text(s.into()))
    }

    pub fn fragments(fragments: Vec<Fragment>) -> Self {
        Self::output(LineContent::Fragments(fragments))
    }

    pub fn boot(s: impl Into<String>) -> Self {
        Self::new(LineData::Boot(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(LineData::Error(s.into()))
    }

    pub fn kind(&self) -> LineKind {
        match self.data {
            LineData::Input { .. } => LineKind::Input,
            LineData::Output(_) => LineKind::Output,
            LineData::Boot(_) => LineKind::Boot,
            LineData::Error(_) => LineKind::Error,
        }
    }
}

impl PartialEq for TranscriptLine {
    fn eq(&self, other: &Self) -> bool {
        // Only compare data, not ID
        self.data == other.data
    }
}

/// Current screen mode of the application
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenMode {
    Booting,
    Terminal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_constructors() {
        assert_eq!(
            TranscriptLine::text("hello").data,
            LineData::Output(LineContent::Text("hello".to_string()))
        );
        assert_eq!(
            TranscriptLine::error("oops").data,
            LineData::Error("oops".to_string())
        );
        assert_eq!(
            TranscriptLine::boot("BIOS").data,
            LineData::Boot("BIOS".to_string())
        );
    }

    #[test]
    fn test_line_kinds() {
        assert_eq!(TranscriptLine::input("~", "ls").kind(), LineKind::Input);
        assert_eq!(TranscriptLine::text("x").kind(), LineKind::Output);
        assert_eq!(TranscriptLine::boot("x").kind(), LineKind::Boot);
        assert_eq!(TranscriptLine::error("x").kind(), LineKind::Error);
    }

    #[test]
    fn test_input_line_keeps_path() {
        match TranscriptLine::input("~/projects", "cat monitor.sh").data {
            LineData::Input { path, command } => {
                assert_eq!(path, "~/projects");
                assert_eq!(command, "cat monitor.sh");
            }
            _ => panic!("Expected Input variant"),
        }
    }

    #[test]
    fn test_unique_ids() {
        let line1 = TranscriptLine::text("first");
        let line2 = TranscriptLine::text("second");
        let line3 = TranscriptLine::text("first");

        assert_ne!(line1.id, line2.id);
        assert_ne!(line1.id, line3.id);
        assert_ne!(line2.id, line3.id);

        // But content equality works
        assert_eq!(line1, line3);
    }

    #[test]
    fn test_list_entry_display_name() {
        let dir = ListEntry {
            name: "projects".to_string(),
            is_dir: true,
        };
        let file = ListEntry {
            name: "about.txt".to_string(),
            is_dir: false,
        };
        assert_eq!(dir.display_name(), "projects/");
        assert_eq!(file.display_name(), "about.txt");
    }

    #[test]
    fn test_fragments_plain_text() {
        let content = LineContent::Fragments(vec![
            Fragment::plain("Hi! I'm "),
            Fragment::new("Hooman", TextStyle::Bold),
            Fragment::plain("."),
        ]);
        assert_eq!(content.plain_text(), "Hi! I'm Hooman.");
    }

    #[test]
    fn test_content_deserialize() {
        let text: LineContent = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(text, LineContent::Text("hello".to_string()));

        let fragments: LineContent = serde_json::from_str(
            r#"{"fragments": [{"text": "a"}, {"text": "b", "style": "heading"}]}"#,
        )
        .unwrap();
        assert_eq!(
            fragments,
            LineContent::Fragments(vec![
                Fragment::plain("a"),
                Fragment::new("b", TextStyle::Heading),
            ])
        );
    }
}
