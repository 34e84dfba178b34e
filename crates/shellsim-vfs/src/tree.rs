//! The per-session filesystem tree.

use shellsim_types::error::{FsError, Result, SimError};

use crate::node::Node;
use crate::path;

/// Counts over a subtree, used by `df`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub directories: usize,
    pub files: usize,
    pub bytes: usize,
}

/// A single-rooted tree of [`Node`]s.
///
/// The root is always a directory. Every session owns its own
/// `Filesystem`, built by deep-copying a seed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filesystem {
    root: Node,
}

impl Filesystem {
    /// An empty filesystem containing only `/`.
    pub fn new() -> Self {
        Self { root: Node::dir() }
    }

    /// Deep-copy a seed template. The seed must be a directory.
    pub fn from_seed(seed: &Node) -> Result<Self> {
        if !seed.is_dir() {
            return Err(SimError::Seed("root node must be a directory".to_string()));
        }
        Ok(Self { root: seed.clone() })
    }

    /// Parse a JSON snapshot (see [`crate::seed::parse_seed`]).
    pub fn from_json(src: &str) -> Result<Self> {
        let root = crate::seed::parse_seed(src)?;
        Ok(Self { root })
    }

    /// Serialize the whole tree in the seed format.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Resolve a path expression against `cwd`.
    ///
    /// Returns `None` for empty input, for missing segments, for a file used
    /// as an intermediate segment, and for any `.` or `..` inside a longer
    /// path.
    pub fn resolve(&self, expr: &str, cwd: &str) -> Option<&Node> {
        if expr.is_empty() {
            return None;
        }
        self.lookup(&path::absolute_path(expr, cwd))
    }

    /// Look up an absolute path.
    pub fn lookup(&self, abs: &str) -> Option<&Node> {
        let mut node = &self.root;
        for seg in path::segments(abs) {
            if matches!(seg, "." | "..") {
                return None;
            }
            node = node.children()?.get(seg)?;
        }
        Some(node)
    }

    /// Mutable variant of [`Filesystem::lookup`].
    pub fn lookup_mut(&mut self, abs: &str) -> Option<&mut Node> {
        let mut node = &mut self.root;
        for seg in path::segments(abs) {
            if matches!(seg, "." | "..") {
                return None;
            }
            node = node.children_mut()?.get_mut(seg)?;
        }
        Some(node)
    }

    pub fn exists(&self, abs: &str) -> bool {
        self.lookup(abs).is_some()
    }

    pub fn is_dir(&self, abs: &str) -> bool {
        self.lookup(abs).is_some_and(Node::is_dir)
    }

    /// Add `node` as `name` under the directory `dir`.
    ///
    /// Fails if `dir` is missing or is a file, if `name` is taken, or if
    /// `name` is not a single plain segment.
    pub fn insert_child(
        &mut self,
        dir: &str,
        name: &str,
        node: Node,
    ) -> std::result::Result<(), FsError> {
        if name.is_empty() || name == "." || name == ".." || name.contains('/') {
            return Err(FsError::InvalidName(name.to_string()));
        }
        let parent = self
            .lookup_mut(dir)
            .ok_or_else(|| FsError::NotFound(dir.to_string()))?;
        let children = parent
            .children_mut()
            .ok_or_else(|| FsError::NotADirectory(dir.to_string()))?;
        if children.contains_key(name) {
            return Err(FsError::AlreadyExists(path::join(dir, name)));
        }
        children.insert(name.to_string(), node);
        Ok(())
    }

    /// Detach and return the node at `abs`. The root cannot be removed.
    pub fn remove(&mut self, abs: &str) -> std::result::Result<Node, FsError> {
        let (dir, name) =
            path::split_parent(abs).ok_or_else(|| FsError::InvalidName(abs.to_string()))?;
        let children = self
            .lookup_mut(dir)
            .and_then(Node::children_mut)
            .ok_or_else(|| FsError::NotFound(abs.to_string()))?;
        children
            .remove(name)
            .ok_or_else(|| FsError::NotFound(abs.to_string()))
    }

    /// Every node strictly below `abs`, pre-order, siblings sorted by name.
    /// Paths are built by joining names onto `abs`.
    pub fn walk(&self, abs: &str) -> Vec<(String, &Node)> {
        let mut out = Vec::new();
        if let Some(node) = self.lookup(abs) {
            walk_into(abs, node, &mut out);
        }
        out
    }

    /// Directory, file and byte counts for the whole tree (root included).
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            directories: 1,
            ..TreeStats::default()
        };
        for (_, node) in self.walk("/") {
            match node {
                Node::Directory { .. } => stats.directories += 1,
                Node::File { content, .. } => {
                    stats.files += 1;
                    stats.bytes += content.len();
                },
            }
        }
        stats
    }
}

impl Default for Filesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn walk_into<'a>(base: &str, node: &'a Node, out: &mut Vec<(String, &'a Node)>) {
    let Some(children) = node.children() else {
        return;
    };
    for (name, child) in children {
        let child_path = path::join(base, name);
        out.push((child_path.clone(), child));
        walk_into(&child_path, child, out);
    }
}
