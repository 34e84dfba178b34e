//! Virtual filesystem for shellsim.
//!
//! A session's filesystem is a single tree of [`Node`]s rooted at `/`, owned
//! by a [`Filesystem`]. Paths are plain strings; [`path`] turns user input
//! into normalized absolute paths and [`Filesystem::resolve`] walks the tree.
//! Nothing here touches the host filesystem.

pub mod node;
pub mod path;
pub mod seed;
mod tree;

pub use node::Node;
pub use seed::default_seed;
pub use tree::{Filesystem, TreeStats};
