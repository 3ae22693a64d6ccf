use super::config::UserConfig;
use super::keys::KeyConfig;
use super::tree_state::{TreeViewState, VisibleRow};
use crate::medialib::{LibraryIndex, MediaLibrary, MediaLibraryList, PlayItem};
use crate::tree::{TreeDataSource, TreeNode};
use crate::ui::theme::Theme;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const TOAST_DURATION: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub start_time: Instant,
    pub deadline: Instant,
}

pub struct App {
    pub theme: Theme,
    pub keys: KeyConfig,
    pub is_running: bool,

    /// Current library snapshot and the tree built from it 📚
    pub library: MediaLibrary,
    pub index: LibraryIndex,
    pub list: MediaLibraryList,

    pub tree: TreeViewState,
    pub show_root: bool,

    // Filter bar
    pub filter_query: String,
    pub filter_active: bool,

    /// A background scan is running
    pub scanning: bool,

    // Popups
    pub show_keyhints: bool,
    pub track_info: Option<PlayItem>,
    pub toast: Option<Toast>,
}

impl App {
    pub fn new(config: &UserConfig, index: LibraryIndex, theme: Theme) -> Self {
        let library = MediaLibrary::default();
        let list = library.list(index);
        Self {
            theme,
            keys: config.keys.clone(),
            is_running: true,
            library,
            index,
            list,
            tree: TreeViewState::default(),
            show_root: config.show_root,
            filter_query: String::new(),
            filter_active: false,
            scanning: false,
            show_keyhints: false,
            track_info: None,
            toast: None,
        }
    }

    pub fn root(&self) -> TreeNode<'_> {
        TreeNode::root(&self.list)
    }

    pub fn rows(&self) -> Vec<VisibleRow> {
        self.tree.visible_rows(&self.root(), self.show_root)
    }

    pub fn selected_row(&self) -> Option<VisibleRow> {
        self.rows().into_iter().nth(self.tree.selected)
    }

    pub fn selected_node(&self) -> Option<TreeNode<'_>> {
        let row = self.selected_row()?;
        self.root().descend(&row.path).ok()
    }

    /// Swap in a freshly scanned snapshot. Expanded nodes and the selection
    /// follow their labels into the new tree; nodes that are gone close.
    pub fn set_library(&mut self, library: MediaLibrary) {
        info!(tracks = library.len(), "Library snapshot replaced");
        let view = self.tree.remember(&self.root(), &self.rows());
        self.library = library;
        self.rebuild_list();
        let list = &self.list;
        self.tree.restore(&TreeNode::root(list), view, self.show_root);
        self.track_info = None;
    }

    pub fn set_index(&mut self, index: LibraryIndex) {
        if index == self.index {
            return;
        }
        debug!(%index, "Switching library index");
        self.index = index;
        self.rebuild_list();
        self.tree.reset();
    }

    pub fn cycle_index(&mut self, forward: bool) {
        let next = if forward {
            self.index.next()
        } else {
            self.index.prev()
        };
        self.set_index(next);
    }

    /// Rebuild the tree from the current filter query.
    pub fn apply_filter(&mut self) {
        self.rebuild_list();
        self.tree.reset();
    }

    pub fn clear_filter(&mut self) {
        self.filter_query.clear();
        self.filter_active = false;
        self.apply_filter();
    }

    fn rebuild_list(&mut self) {
        self.list = self.library.filtered_list(self.index, &self.filter_query);
    }

    pub fn toggle_root(&mut self) {
        self.show_root = !self.show_root;
        self.tree.reset();
    }

    // Navigation

    pub fn select_next(&mut self) {
        let count = self.rows().len();
        self.tree.select_next(count);
    }

    pub fn select_prev(&mut self) {
        self.tree.select_prev();
    }

    pub fn select_first(&mut self) {
        self.tree.select_first();
    }

    pub fn select_last(&mut self) {
        let count = self.rows().len();
        self.tree.select_last(count);
    }

    pub fn expand_selected(&mut self) {
        if let Some(row) = self.selected_row() {
            self.tree.expand(&row);
        }
    }

    pub fn collapse_selected(&mut self) {
        let rows = self.rows();
        self.tree.collapse(&rows);
    }

    pub fn toggle_selected(&mut self) {
        if let Some(row) = self.selected_row() {
            self.tree.toggle(&row);
        }
    }

    /// Enter: leaves open the track popup, branches toggle.
    pub fn activate_selected(&mut self) {
        let track = self
            .selected_node()
            .and_then(|node| node.track())
            .cloned();
        match track {
            Some(track) => self.track_info = Some(track),
            None => self.toggle_selected(),
        }
    }

    pub fn show_toast(&mut self, message: &str) {
        let now = Instant::now();
        self.toast = Some(Toast {
            message: message.to_string(),
            start_time: now,
            deadline: now + TOAST_DURATION,
        });
    }

    pub fn on_tick(&mut self) {
        if let Some(toast) = &self.toast {
            if Instant::now() >= toast.deadline {
                self.toast = None;
            }
        }
    }
}
