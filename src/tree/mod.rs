//! Tree-control view of a [`MediaLibraryList`](crate::medialib::MediaLibraryList).
//!
//! [`TreeNode`] borrows one of three library handles (the list itself, a
//! grouping item, or a track) and answers the questions a tree widget asks:
//! how many children, which child at an index, and what label to draw.
//! Nodes are cheap `Copy` values built on demand; nothing is cached, so
//! every answer reflects the snapshot the node borrows from.

mod node;
mod source;

pub use node::{NodeKind, TreeNode};
pub use source::TreeDataSource;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("child index {index} out of range (node has {count} children)")]
    IndexOutOfRange { index: usize, count: usize },
}
