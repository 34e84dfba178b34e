//! Tree nodes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Size reported for every directory by `ls -l` and `du`.
pub const DIRECTORY_SIZE: usize = 4096;

/// A file or directory in the virtual tree.
///
/// Serializes to the seed format:
/// `{"type": "file", "content": "..."}` or
/// `{"type": "directory", "children": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File {
        #[serde(default)]
        content: String,
        /// Permission string recorded by `chmod`; never enforced.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mode: Option<String>,
    },
    Directory {
        /// Children keyed by name; iteration is sorted by name.
        #[serde(default)]
        children: BTreeMap<String, Node>,
    },
}

impl Node {
    /// A file with the given content and no recorded mode.
    pub fn file(content: impl Into<String>) -> Self {
        Self::File {
            content: content.into(),
            mode: None,
        }
    }

    /// An empty directory.
    pub fn dir() -> Self {
        Self::Directory {
            children: BTreeMap::new(),
        }
    }

    /// A directory populated from `(name, node)` pairs.
    pub fn dir_with<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Node)>,
        S: Into<String>,
    {
        Self::Directory {
            children: entries
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    pub fn children(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Self::Directory { children } => Some(children),
            Self::File { .. } => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut BTreeMap<String, Node>> {
        match self {
            Self::Directory { children } => Some(children),
            Self::File { .. } => None,
        }
    }

    /// File content, or `None` for a directory.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::File { content, .. } => Some(content),
            Self::Directory { .. } => None,
        }
    }

    pub fn mode(&self) -> Option<&str> {
        match self {
            Self::File { mode, .. } => mode.as_deref(),
            Self::Directory { .. } => None,
        }
    }

    /// Content length in bytes for a file; [`DIRECTORY_SIZE`] for a directory.
    pub fn size(&self) -> usize {
        match self {
            Self::File { content, .. } => content.len(),
            Self::Directory { .. } => DIRECTORY_SIZE,
        }
    }

    /// Total bytes of file content at or below this node.
    pub fn content_bytes(&self) -> usize {
        match self {
            Self::File { content, .. } => content.len(),
            Self::Directory { children } => children.values().map(Node::content_bytes).sum(),
        }
    }
}
