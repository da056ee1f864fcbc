use std::collections::HashSet;
use std::sync::LazyLock;

use crate::config::FILESYSTEM_DATA;
use crate::core::error::DatasetError;
use crate::models::{FsNode, VirtualPath};
use crate::utils::log;

/// Outcome of resolving a path argument against the working directory.
#[derive(Clone, Debug)]
pub struct Resolved<'a> {
    /// Target node, `None` if nothing matched
    pub node: Option<&'a FsNode>,
    /// Path of the target; equals the working directory when nothing matched
    pub path: VirtualPath,
}

/// Read-only virtual filesystem.
///
/// # Path Resolution
///
/// Only three special forms and single child names are understood:
///
/// - `/` or `~`: the root
/// - `..`: the parent of the working directory (root stays root)
/// - anything else: a direct child of the working directory, matched literally
///
/// Arguments such as `projects/monitor.sh` are not split on `/`; they are
/// looked up as one name and normally fail to match.
#[derive(Clone, Debug)]
pub struct VirtualFs {
    root: FsNode,
}

static BUILTIN: LazyLock<VirtualFs> = LazyLock::new(|| match VirtualFs::from_json(FILESYSTEM_DATA) {
    Ok(fs) => {
        log::debug("virtual filesystem loaded");
        fs
    }
    // The dataset is compiled in; failing here means the build itself is broken.
    Err(e) => panic!("built-in filesystem dataset is corrupt: {e}"),
});

impl VirtualFs {
    /// The filesystem compiled into the binary, parsed on first access.
    pub fn builtin() -> &'static VirtualFs {
        &BUILTIN
    }

    /// Build a filesystem from a root node after checking its invariants.
    pub fn new(root: FsNode) -> Result<Self, DatasetError> {
        if !root.is_directory() {
            return Err(DatasetError::RootNotDirectory);
        }
        validate(&root, &VirtualPath::home())?;
        Ok(Self { root })
    }

    /// Parse a JSON dataset (see `assets/filesystem.json`).
    pub fn from_json(data: &str) -> Result<Self, DatasetError> {
        let root: FsNode = serde_json::from_str(data)?;
        Self::new(root)
    }

    pub fn root(&self) -> &FsNode {
        &self.root
    }

    /// Walk from the root along `path`.
    ///
    /// Returns `None` if any segment is missing or passes through a file.
    pub fn node_at(&self, path: &VirtualPath) -> Option<&FsNode> {
        path.segments()
            .iter()
            .try_fold(self.root(), |node, segment| node.child(segment))
    }

    /// Resolve a single path argument relative to `current`.
    pub fn resolve(&self, current: &VirtualPath, arg: &str) -> Resolved<'_> {
        match arg {
            "/" | "~" => Resolved {
                node: Some(self.root()),
                path: VirtualPath::home(),
            },
            ".." => {
                let parent = current.parent();
                match self.node_at(&parent) {
                    Some(node) => Resolved {
                        node: Some(node),
                        path: parent,
                    },
                    None => Resolved {
                        node: None,
                        path: current.clone(),
                    },
                }
            }
            name => match self.node_at(current).and_then(|dir| dir.child(name)) {
                Some(node) => Resolved {
                    node: Some(node),
                    path: current.join(name),
                },
                None => Resolved {
                    node: None,
                    path: current.clone(),
                },
            },
        }
    }

    /// Children of the directory at `path` as `(name, is_dir)`, in declaration order.
    pub fn list_dir(&self, path: &VirtualPath) -> Option<Vec<(&str, bool)>> {
        let children = self.node_at(path)?.children()?;
        Some(
            children
                .iter()
                .map(|entry| (entry.name.as_str(), entry.node.is_directory()))
                .collect(),
        )
    }
}

/// Check entry names of every directory below `node`.
fn validate(node: &FsNode, path: &VirtualPath) -> Result<(), DatasetError> {
    let Some(children) = node.children() else {
        return Ok(());
    };

    let mut seen = HashSet::new();
    for entry in children {
        if entry.name.is_empty() {
            return Err(DatasetError::EmptyName {
                parent: path.display(),
            });
        }
        if entry.name.contains('/') {
            return Err(DatasetError::SlashInName {
                parent: path.display(),
                name: entry.name.clone(),
            });
        }
        if !seen.insert(entry.name.as_str()) {
            return Err(DatasetError::DuplicateName {
                parent: path.display(),
                name: entry.name.clone(),
            });
        }
        validate(&entry.node, &path.join(&entry.name))?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
