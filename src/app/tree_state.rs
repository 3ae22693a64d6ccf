use crate::tree::TreeDataSource;
use std::collections::HashSet;

/// One visible line of the tree view, flattened from the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    /// Child indices from the root; empty for the root row itself.
    pub path: Vec<usize>,
    /// For each guide column: was the node at that level the last sibling?
    pub guides: Vec<bool>,
    pub label: String,
    pub detail: Option<String>,
    pub expandable: bool,
    pub expanded: bool,
}

impl VisibleRow {
    pub fn depth(&self) -> usize {
        self.guides.len()
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

/// Expansion and selection state of the tree view 🌲
///
/// Only index paths are kept. Rows are rebuilt from the data source each
/// time they are needed, so a swapped-in library is picked up on the next
/// frame.
#[derive(Debug, Clone)]
pub struct TreeViewState {
    pub selected: usize,
    pub offset: usize,
    expanded: HashSet<Vec<usize>>,
}

impl Default for TreeViewState {
    fn default() -> Self {
        let mut expanded = HashSet::new();
        expanded.insert(Vec::new());
        Self {
            selected: 0,
            offset: 0,
            expanded,
        }
    }
}

impl TreeViewState {
    pub fn is_expanded(&self, path: &[usize]) -> bool {
        self.expanded.contains(path)
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    pub fn visible_rows<T>(&self, root: &T, show_root: bool) -> Vec<VisibleRow>
    where
        T: TreeDataSource,
    {
        let mut rows = Vec::new();
        let mut path = Vec::new();
        let mut last = Vec::new();

        if show_root {
            rows.push(self.make_row(root, &path, &last, show_root));
            if !self.is_expanded(&path) {
                return rows;
            }
        }
        self.walk(root, &mut path, &mut last, show_root, &mut rows);
        rows
    }

    fn walk<T>(
        &self,
        node: &T,
        path: &mut Vec<usize>,
        last: &mut Vec<bool>,
        show_root: bool,
        rows: &mut Vec<VisibleRow>,
    ) where
        T: TreeDataSource,
    {
        let children = node.children();
        let count = children.len();
        for (i, child) in children.iter().enumerate() {
            path.push(i);
            last.push(i + 1 == count);

            rows.push(self.make_row(child, path, last, show_root));
            if child.has_children() && self.is_expanded(path) {
                self.walk(child, path, last, show_root, rows);
            }

            path.pop();
            last.pop();
        }
    }

    fn make_row<T>(&self, node: &T, path: &[usize], last: &[bool], show_root: bool) -> VisibleRow
    where
        T: TreeDataSource,
    {
        // Top-level rows get no guide column when the root row is hidden
        let guides = if show_root || last.is_empty() {
            last.to_vec()
        } else {
            last[1..].to_vec()
        };
        let expandable = node.has_children();
        VisibleRow {
            path: path.to_vec(),
            guides,
            label: node.display_text().into_owned(),
            detail: node.detail_text().map(|d| d.into_owned()),
            expandable,
            expanded: expandable && self.is_expanded(path),
        }
    }

    pub fn select_next(&mut self, row_count: usize) {
        if self.selected + 1 < row_count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, row_count: usize) {
        self.selected = row_count.saturating_sub(1);
    }

    pub fn clamp(&mut self, row_count: usize) {
        if self.selected >= row_count {
            self.selected = row_count.saturating_sub(1);
        }
    }

    pub fn expand(&mut self, row: &VisibleRow) -> bool {
        if !row.expandable {
            return false;
        }
        self.expanded.insert(row.path.clone())
    }

    /// Collapse the selected row, or move to its parent when there is
    /// nothing to collapse.
    pub fn collapse(&mut self, rows: &[VisibleRow]) {
        let Some(row) = rows.get(self.selected) else {
            return;
        };
        if row.expanded {
            self.expanded.remove(&row.path);
            return;
        }
        if let Some((_, parent)) = row.path.split_last() {
            if let Some(pos) = rows.iter().position(|r| r.path == parent) {
                self.selected = pos;
            }
        }
    }

    pub fn toggle(&mut self, row: &VisibleRow) {
        if row.expanded {
            self.expanded.remove(&row.path);
        } else {
            self.expand(row);
        }
    }

    /// Back to a freshly opened tree: root expanded, first row selected.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Capture expansion and selection by label so they can be re-applied
    /// to a rebuilt data source whose child indices may have shifted.
    pub fn remember<T>(&self, root: &T, rows: &[VisibleRow]) -> RememberedView
    where
        T: TreeDataSource + Clone,
    {
        RememberedView {
            expanded: self
                .expanded
                .iter()
                .filter_map(|path| label_path(root, path))
                .collect(),
            selected: rows
                .get(self.selected)
                .and_then(|row| label_path(root, &row.path)),
        }
    }

    /// Re-apply a remembered view. Nodes that are gone lose their
    /// expansion; a vanished selection falls back to its nearest surviving
    /// visible ancestor, then to a clamped row.
    pub fn restore<T>(&mut self, root: &T, view: RememberedView, show_root: bool)
    where
        T: TreeDataSource + Clone,
    {
        self.expanded = view
            .expanded
            .iter()
            .filter_map(|labels| index_path(root, labels))
            .filter(|path| {
                path.is_empty() || root.descend(path).is_ok_and(|node| node.has_children())
            })
            .collect();

        let rows = self.visible_rows(root, show_root);
        let target = view.selected.and_then(|labels| {
            (0..=labels.len()).rev().find_map(|len| {
                let path = index_path(root, &labels[..len])?;
                rows.iter().position(|row| row.path == path)
            })
        });
        match target {
            Some(pos) => self.selected = pos,
            None => self.clamp(rows.len()),
        }
    }

    /// Keep the selection inside a window of `height` rows.
    pub fn scroll_into_view(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + height {
            self.offset = self.selected + 1 - height;
        }
    }
}

/// One step of a [`LabelPath`]: the child's label and how many earlier
/// siblings carry the same label.
pub type LabelStep = (String, usize);

/// A node addressed by labels instead of child indices.
pub type LabelPath = Vec<LabelStep>;

/// Expansion and selection of a [`TreeViewState`], keyed by label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RememberedView {
    expanded: Vec<LabelPath>,
    selected: Option<LabelPath>,
}

/// Labels along `path`, or `None` when the path doesn't resolve.
pub fn label_path<T>(root: &T, path: &[usize]) -> Option<LabelPath>
where
    T: TreeDataSource + Clone,
{
    let mut node = root.clone();
    let mut labels = Vec::with_capacity(path.len());
    for &index in path {
        let mut children = node.children();
        if index >= children.len() {
            return None;
        }
        let label = children[index].display_text().into_owned();
        let nth = children[..index]
            .iter()
            .filter(|c| c.display_text() == label.as_str())
            .count();
        labels.push((label, nth));
        node = children.swap_remove(index);
    }
    Some(labels)
}

/// Child indices for a label path in `root`, if every step still exists.
pub fn index_path<T>(root: &T, labels: &[LabelStep]) -> Option<Vec<usize>>
where
    T: TreeDataSource + Clone,
{
    let mut node = root.clone();
    let mut path = Vec::with_capacity(labels.len());
    for (label, nth) in labels {
        let mut children = node.children();
        let index = children
            .iter()
            .enumerate()
            .filter(|(_, c)| c.display_text() == label.as_str())
            .nth(*nth)
            .map(|(i, _)| i)?;
        path.push(index);
        node = children.swap_remove(index);
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medialib::{LibraryIndex, MediaLibrary, PlayItem};
    use crate::tree::TreeNode;
    use std::path::PathBuf;

    fn library() -> MediaLibrary {
        let track = |path: &str, artist: &str, album: &str, title: &str, n: u32| {
            PlayItem::new(path)
                .with_artist(artist)
                .with_album(album)
                .with_title(title)
                .with_track_number(n)
        };
        MediaLibrary::from_tracks(
            vec![PathBuf::from("/m")],
            vec![
                track("/m/1.mp3", "Can", "Tago Mago", "Paperhouse", 1),
                track("/m/2.mp3", "Can", "Tago Mago", "Mushroom", 2),
                track("/m/3.mp3", "Can", "Ege Bamyasi", "Vitamin C", 4),
                track("/m/4.mp3", "Neu!", "Neu!", "Hallogallo", 1),
            ],
        )
    }

    fn labels(rows: &[VisibleRow]) -> Vec<&str> {
        rows.iter().map(|r| r.label.as_str()).collect()
    }

    #[test]
    fn test_fresh_state_shows_root_and_top_level() {
        let list = library().list(LibraryIndex::Artist);
        let state = TreeViewState::default();
        let rows = state.visible_rows(&TreeNode::root(&list), true);
        assert_eq!(labels(&rows), vec!["All Artists", "Can", "Neu!"]);
        assert!(rows[0].expanded);
        assert_eq!(rows[1].depth(), 1);
        assert_eq!(rows[2].guides, vec![true]);
    }

    #[test]
    fn test_hidden_root_drops_a_guide_level() {
        let list = library().list(LibraryIndex::Artist);
        let state = TreeViewState::default();
        let rows = state.visible_rows(&TreeNode::root(&list), false);
        assert_eq!(labels(&rows), vec!["Can", "Neu!"]);
        assert_eq!(rows[0].depth(), 0);
    }

    #[test]
    fn test_expand_reveals_children_with_details() {
        let lib = library();
        let list = lib.list(LibraryIndex::Artist);
        let root = TreeNode::root(&list);
        let mut state = TreeViewState::default();

        let rows = state.visible_rows(&root, true);
        assert!(state.expand(&rows[1])); // Can
        let rows = state.visible_rows(&root, true);
        assert_eq!(labels(&rows), vec!["All Artists", "Can", "Ege Bamyasi", "Tago Mago", "Neu!"]);

        state.expand(&rows[3]); // Tago Mago
        let rows = state.visible_rows(&root, true);
        assert_eq!(rows[4].label, "01. Paperhouse");
        assert!(!rows[4].expandable);
        assert_eq!(rows[4].guides, vec![false, true, false]);
        assert_eq!(rows[4].detail, None);
        assert_eq!(rows[0].detail.as_deref(), Some("4 tracks"));
    }

    #[test]
    fn test_collapse_then_jump_to_parent() {
        let list = library().list(LibraryIndex::Artist);
        let root = TreeNode::root(&list);
        let mut state = TreeViewState::default();

        let rows = state.visible_rows(&root, true);
        state.expand(&rows[1]);
        let rows = state.visible_rows(&root, true);
        state.selected = 2; // Ege Bamyasi (collapsed)

        state.collapse(&rows);
        assert_eq!(state.selected, 1, "moved to parent");

        state.collapse(&rows);
        let rows = state.visible_rows(&root, true);
        assert_eq!(labels(&rows), vec!["All Artists", "Can", "Neu!"]);
    }

    #[test]
    fn test_collapsing_root_hides_everything_else() {
        let list = library().list(LibraryIndex::Album);
        let root = TreeNode::root(&list);
        let mut state = TreeViewState::default();
        let rows = state.visible_rows(&root, true);
        state.toggle(&rows[0]);
        assert_eq!(state.visible_rows(&root, true).len(), 1);
    }

    fn swap<'a>(
        state: &mut TreeViewState,
        old: &TreeNode<'a>,
        new: &TreeNode<'a>,
    ) -> Vec<VisibleRow> {
        let view = state.remember(old, &state.visible_rows(old, true));
        state.restore(new, view, true);
        state.visible_rows(new, true)
    }

    #[test]
    fn test_restore_drops_nodes_missing_from_new_snapshot() {
        let lib = library();
        let list = lib.list(LibraryIndex::Artist);
        let root = TreeNode::root(&list);
        let mut state = TreeViewState::default();
        let rows = state.visible_rows(&root, true);
        state.expand(&rows[2]); // Neu!
        state.selected = 3; // Neu! > Neu!
        assert_eq!(state.expanded_count(), 2);

        let smaller = MediaLibrary::from_tracks(
            vec![PathBuf::from("/m")],
            vec![PlayItem::new("/m/1.mp3").with_artist("Can").with_album("Tago Mago")],
        );
        let new_list = smaller.list(LibraryIndex::Artist);
        let rows = swap(&mut state, &root, &TreeNode::root(&new_list));

        assert_eq!(labels(&rows), vec!["All Artists", "Can"]);
        assert_eq!(state.expanded_count(), 1);
        assert!(state.is_expanded(&[]));
        // Neu! and its album are both gone: nearest surviving ancestor is the root
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_restore_follows_nodes_when_indices_shift() {
        let lib = library();
        let list = lib.list(LibraryIndex::Artist);
        let root = TreeNode::root(&list);
        let mut state = TreeViewState::default();
        let rows = state.visible_rows(&root, true);
        state.expand(&rows[2]); // Neu!
        state.selected = 2;

        let mut tracks: Vec<PlayItem> = lib.tracks().iter().map(|t| (**t).clone()).collect();
        tracks.push(
            PlayItem::new("/m/5.mp3")
                .with_artist("Kraftwerk")
                .with_album("Ralf und Florian"),
        );
        let bigger = MediaLibrary::from_tracks(vec![PathBuf::from("/m")], tracks);
        let new_list = bigger.list(LibraryIndex::Artist);
        let rows = swap(&mut state, &root, &TreeNode::root(&new_list));

        assert_eq!(labels(&rows), vec!["All Artists", "Can", "Kraftwerk", "Neu!", "Neu!"]);
        assert_eq!(state.selected, 3);
        assert!(rows[3].expanded);
        assert!(!rows[2].expanded);
    }

    #[test]
    fn test_label_paths_tell_same_named_siblings_apart() {
        let lib = MediaLibrary::from_tracks(
            vec![PathBuf::from("/m")],
            vec![
                PlayItem::new("/m/a/x.mp3").with_title("Intro"),
                PlayItem::new("/m/a/y.mp3").with_title("Intro"),
            ],
        );
        let list = lib.list(LibraryIndex::Album);
        let root = TreeNode::root(&list);

        let second = label_path(&root, &[0, 1]).unwrap();
        assert_eq!(second, vec![("<?> - <?>".to_string(), 0), ("Intro".to_string(), 1)]);
        assert_eq!(index_path(&root, &second), Some(vec![0, 1]));
        assert_eq!(label_path(&root, &[0, 2]), None);
    }

    #[test]
    fn test_selection_bounds_and_scrolling() {
        let mut state = TreeViewState::default();
        state.select_prev();
        assert_eq!(state.selected, 0);
        for _ in 0..10 {
            state.select_next(4);
        }
        assert_eq!(state.selected, 3);

        state.scroll_into_view(2);
        assert_eq!(state.offset, 2);
        state.select_first();
        state.scroll_into_view(2);
        assert_eq!(state.offset, 0);

        state.select_last(3);
        state.clamp(1);
        assert_eq!(state.selected, 0);
    }
}
