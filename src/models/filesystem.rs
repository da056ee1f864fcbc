use std::fmt;

use serde::Deserialize;

use super::LineContent;

// =============================================================================
// Filesystem Nodes
// =============================================================================

/// A node of the virtual filesystem tree.
///
/// Each directory owns its children outright; the tree is built once from the
/// embedded dataset and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FsNode {
    File {
        content: LineContent,
    },
    Directory {
        /// Children in declaration (= listing) order
        #[serde(default)]
        children: Vec<DirEntry>,
    },
}

/// A named child of a directory.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DirEntry {
    pub name: String,
    #[serde(flatten)]
    pub node: FsNode,
}

impl FsNode {
    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    /// Children of a directory, `None` for files.
    pub fn children(&self) -> Option<&[DirEntry]> {
        match self {
            Self::Directory { children } => Some(children),
            Self::File { .. } => None,
        }
    }

    /// Direct child lookup by exact name.
    pub fn child(&self, name: &str) -> Option<&FsNode> {
        self.children()?
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.node)
    }
}

// Tree builders for hand-written fixtures; the app only deserializes.
#[cfg(test)]
impl FsNode {
    pub fn file(content: LineContent) -> Self {
        Self::File { content }
    }

    pub fn directory(children: Vec<DirEntry>) -> Self {
        Self::Directory { children }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }
}

#[cfg(test)]
impl DirEntry {
    pub fn new(name: impl Into<String>, node: FsNode) -> Self {
        Self {
            name: name.into(),
            node,
        }
    }
}

// =============================================================================
// Virtual Path
// =============================================================================

/// Session working directory: directory names from root to the current location.
///
/// The empty path is the root (displayed as `~`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VirtualPath(Vec<String>);

impl VirtualPath {
    /// The root (home) directory.
    pub fn home() -> Self {
        Self(Vec::new())
    }

    pub fn is_home(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Path with one more segment appended.
    pub fn join(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.to_string());
        Self(segments)
    }

    /// Path with the last segment removed. The root is its own parent.
    pub fn parent(&self) -> Self {
        let mut segments = self.0.clone();
        segments.pop();
        Self(segments)
    }

    /// Prompt form: `~` at root, `~/seg1/seg2` otherwise.
    pub fn display(&self) -> String {
        if self.is_home() {
            "~".to_string()
        } else {
            format!("~/{}", self.0.join("/"))
        }
    }
}

#[cfg(test)]
impl VirtualPath {
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_display() {
        assert_eq!(VirtualPath::home().display(), "~");
        assert_eq!(VirtualPath::from_segments(["projects"]).display(), "~/projects");
        assert_eq!(VirtualPath::from_segments(["a", "b"]).to_string(), "~/a/b");
    }

    #[test]
    fn test_path_join_and_parent() {
        let path = VirtualPath::home().join("projects");
        assert_eq!(path.segments(), &["projects".to_string()]);
        assert_eq!(path.last(), Some("projects"));
        assert!(path.parent().is_home());
        assert!(VirtualPath::home().parent().is_home());
    }

    #[test]
    fn test_node_child_lookup() {
        let dir = FsNode::directory(vec![
            DirEntry::new("a.txt", FsNode::file(LineContent::Text("a".into()))),
            DirEntry::new("sub", FsNode::directory(vec![])),
        ]);
        assert!(dir.child("a.txt").is_some_and(FsNode::is_file));
        assert!(dir.child("sub").is_some_and(FsNode::is_directory));
        assert!(dir.child("missing").is_none());

        let file = FsNode::file(LineContent::Text("x".into()));
        assert!(file.children().is_none());
        assert!(file.child("anything").is_none());
    }

    #[test]
    fn test_node_deserialize_keeps_order() {
        let node: FsNode = serde_json::from_str(
            r#"{
                "type": "directory",
                "children": [
                    {"name": "zeta", "type": "directory"},
                    {"name": "alpha", "type": "file", "content": {"text": "hi"}}
                ]
            }"#,
        )
        .unwrap();
        let names: Vec<&str> = node
            .children()
            .unwrap()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(node.child("zeta").and_then(FsNode::children), Some(&[][..]));
    }
}
