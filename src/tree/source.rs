use super::TreeError;
use std::borrow::Cow;

/// What a tree widget needs from its data: child count, indexed child
/// access, and a row label.
pub trait TreeDataSource: Sized {
    fn child_count(&self) -> usize;

    /// Child at `index`, or [`TreeError::IndexOutOfRange`] when
    /// `index >= child_count()`.
    fn child_at(&self, index: usize) -> Result<Self, TreeError>;

    fn display_text(&self) -> Cow<'_, str>;

    /// Secondary text drawn right-aligned on the row, if any.
    fn detail_text(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// All direct children, in order.
    fn children(&self) -> Vec<Self> {
        (0..self.child_count())
            .filter_map(|i| self.child_at(i).ok())
            .collect()
    }

    fn has_children(&self) -> bool {
        self.child_count() > 0
    }

    /// Follow `path` (child indices from this node) down the tree.
    fn descend(&self, path: &[usize]) -> Result<Self, TreeError>
    where
        Self: Clone,
    {
        let mut node = self.clone();
        for &index in path {
            node = node.child_at(index)?;
        }
        Ok(node)
    }
}
