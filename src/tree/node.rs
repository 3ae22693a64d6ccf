use super::{TreeDataSource, TreeError};
use crate::medialib::{MediaLibraryItem, MediaLibraryList, PlayItem};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Branch,
    Leaf,
}

/// One row of the library tree, borrowing the handle it shows.
///
/// The lifetime ties every node to the snapshot it was built from: a node
/// cannot outlive its [`MediaLibraryList`], so swapping in a rescanned
/// library forces the view to start again from the new root.
#[derive(Debug, Clone, Copy)]
pub enum TreeNode<'a> {
    Root(&'a MediaLibraryList),
    Branch(&'a MediaLibraryItem),
    Leaf(&'a PlayItem),
}

impl<'a> TreeNode<'a> {
    pub fn root(list: &'a MediaLibraryList) -> Self {
        TreeNode::Root(list)
    }

    pub fn branch(item: &'a MediaLibraryItem) -> Self {
        TreeNode::Branch(item)
    }

    pub fn leaf(track: &'a PlayItem) -> Self {
        TreeNode::Leaf(track)
    }

    // Track items become leaves, everything else a branch.
    fn from_item(item: &'a MediaLibraryItem) -> Self {
        match item.play_item() {
            Some(track) => TreeNode::Leaf(track),
            None => TreeNode::Branch(item),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            TreeNode::Root(_) => NodeKind::Root,
            TreeNode::Branch(_) => NodeKind::Branch,
            TreeNode::Leaf(_) => NodeKind::Leaf,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf(_))
    }

    pub fn track(&self) -> Option<&'a PlayItem> {
        match *self {
            TreeNode::Leaf(track) => Some(track),
            _ => None,
        }
    }

    fn items(&self) -> &'a [MediaLibraryItem] {
        match *self {
            TreeNode::Root(list) => list.items(),
            TreeNode::Branch(item) => item.children(),
            TreeNode::Leaf(_) => &[],
        }
    }
}

impl<'a> TreeDataSource for TreeNode<'a> {
    fn child_count(&self) -> usize {
        self.items().len()
    }

    fn child_at(&self, index: usize) -> Result<Self, TreeError> {
        let items = self.items();
        items
            .get(index)
            .map(TreeNode::from_item)
            .ok_or(TreeError::IndexOutOfRange {
                index,
                count: items.len(),
            })
    }

    fn display_text(&self) -> Cow<'_, str> {
        match self {
            TreeNode::Root(list) => Cow::Borrowed(list.label()),
            TreeNode::Branch(item) => Cow::Borrowed(item.text()),
            TreeNode::Leaf(track) => Cow::Owned(track.display_text()),
        }
    }

    fn detail_text(&self) -> Option<Cow<'_, str>> {
        match self {
            TreeNode::Leaf(track) if track.duration_ms.is_some() => {
                Some(Cow::Owned(track.duration_label()))
            }
            TreeNode::Root(list) => Some(Cow::Owned(format!("{} tracks", list.track_count()))),
            _ => None,
        }
    }

    fn children(&self) -> Vec<Self> {
        self.items().iter().map(TreeNode::from_item).collect()
    }
}
