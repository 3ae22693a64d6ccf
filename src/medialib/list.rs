use super::index::LibraryIndex;
use super::track::{file_label, PlayItem};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One entry of a library tree: a named group of items, or a single track.
#[derive(Debug, Clone)]
pub struct MediaLibraryItem {
    text: String,
    content: ItemContent,
}

#[derive(Debug, Clone)]
enum ItemContent {
    Group(Vec<MediaLibraryItem>),
    Track(Arc<PlayItem>),
}

impl MediaLibraryItem {
    pub fn group(text: impl Into<String>, children: Vec<MediaLibraryItem>) -> Self {
        Self {
            text: text.into(),
            content: ItemContent::Group(children),
        }
    }

    pub fn track(track: Arc<PlayItem>) -> Self {
        Self {
            text: track.display_text(),
            content: ItemContent::Track(track),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Direct children; always empty for a track item.
    pub fn children(&self) -> &[MediaLibraryItem] {
        match &self.content {
            ItemContent::Group(children) => children,
            ItemContent::Track(_) => &[],
        }
    }

    pub fn num_children(&self) -> usize {
        self.children().len()
    }

    pub fn play_item(&self) -> Option<&PlayItem> {
        match &self.content {
            ItemContent::Track(track) => Some(track.as_ref()),
            ItemContent::Group(_) => None,
        }
    }

    fn track_count(&self) -> usize {
        match &self.content {
            ItemContent::Track(_) => 1,
            ItemContent::Group(children) => children.iter().map(|c| c.track_count()).sum(),
        }
    }
}

/// Top level of a library tree built for one [`LibraryIndex`].
#[derive(Debug, Clone)]
pub struct MediaLibraryList {
    index: LibraryIndex,
    items: Vec<MediaLibraryItem>,
}

impl MediaLibraryList {
    pub fn new(index: LibraryIndex, items: Vec<MediaLibraryItem>) -> Self {
        Self { index, items }
    }

    pub fn index(&self) -> LibraryIndex {
        self.index
    }

    pub fn items(&self) -> &[MediaLibraryItem] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn label(&self) -> &'static str {
        self.index.root_label()
    }

    /// Number of tracks reachable from the root.
    pub fn track_count(&self) -> usize {
        self.items.iter().map(|i| i.track_count()).sum()
    }
}

pub(crate) fn build(
    index: LibraryIndex,
    roots: &[PathBuf],
    tracks: &[Arc<PlayItem>],
) -> MediaLibraryList {
    let items = match index {
        LibraryIndex::Album => group_by(tracks, |t| {
            format!("{} - {}", t.album_artist_label(), t.album_label())
        })
        .into_iter()
        .map(|(label, tracks)| MediaLibraryItem::group(label, track_items(tracks)))
        .collect(),
        LibraryIndex::Artist => nested(tracks, |t| t.artist_label().to_string()),
        LibraryIndex::Genre => nested(tracks, |t| t.genre_label().to_string()),
        LibraryIndex::Folder => folders(roots, tracks),
    };
    MediaLibraryList::new(index, items)
}

/// Groups sorted case-insensitively; the first spelling seen names the group.
fn group_by<F>(tracks: &[Arc<PlayItem>], key: F) -> Vec<(String, Vec<Arc<PlayItem>>)>
where
    F: Fn(&PlayItem) -> String,
{
    let mut groups: BTreeMap<String, (String, Vec<Arc<PlayItem>>)> = BTreeMap::new();
    for track in tracks {
        let label = key(track.as_ref());
        groups
            .entry(label.to_lowercase())
            .or_insert_with(|| (label, Vec::new()))
            .1
            .push(Arc::clone(track));
    }
    groups.into_values().collect()
}

/// `outer` → album → tracks
fn nested<F>(tracks: &[Arc<PlayItem>], outer: F) -> Vec<MediaLibraryItem>
where
    F: Fn(&PlayItem) -> String,
{
    group_by(tracks, outer)
        .into_iter()
        .map(|(label, members)| {
            let albums = group_by(&members, |t| t.album_label().to_string())
                .into_iter()
                .map(|(album, tracks)| MediaLibraryItem::group(album, track_items(tracks)))
                .collect();
            MediaLibraryItem::group(label, albums)
        })
        .collect()
}

fn track_items(mut tracks: Vec<Arc<PlayItem>>) -> Vec<MediaLibraryItem> {
    tracks.sort_by(|a, b| {
        a.track_number
            .unwrap_or(u32::MAX)
            .cmp(&b.track_number.unwrap_or(u32::MAX))
            .then_with(|| {
                a.display_title()
                    .to_lowercase()
                    .cmp(&b.display_title().to_lowercase())
            })
            .then_with(|| a.path.cmp(&b.path))
    });
    tracks.into_iter().map(MediaLibraryItem::track).collect()
}

#[derive(Default)]
struct FolderNode {
    dirs: BTreeMap<String, (String, FolderNode)>,
    files: Vec<Arc<PlayItem>>,
}

impl FolderNode {
    fn insert(&mut self, components: &[String], track: Arc<PlayItem>) {
        match components.split_first() {
            None => self.files.push(track),
            Some((first, rest)) => self
                .dirs
                .entry(first.to_lowercase())
                .or_insert_with(|| (first.clone(), FolderNode::default()))
                .1
                .insert(rest, track),
        }
    }

    // Sub-folders first, then files by file name.
    fn into_items(mut self) -> Vec<MediaLibraryItem> {
        let mut items: Vec<MediaLibraryItem> = self
            .dirs
            .into_values()
            .map(|(name, node)| MediaLibraryItem::group(name, node.into_items()))
            .collect();

        self.files.sort_by(|a, b| {
            file_label(&a.path)
                .to_lowercase()
                .cmp(&file_label(&b.path).to_lowercase())
        });
        items.extend(self.files.into_iter().map(MediaLibraryItem::track));
        items
    }
}

fn folders(roots: &[PathBuf], tracks: &[Arc<PlayItem>]) -> Vec<MediaLibraryItem> {
    let distinct: BTreeSet<&PathBuf> = roots.iter().collect();
    let single_root = distinct.len() == 1;

    // Outside every root, or under the only root
    let mut top = FolderNode::default();
    // One subtree per root, keyed by the full root path
    let mut per_root: BTreeMap<&PathBuf, FolderNode> = BTreeMap::new();

    for track in tracks {
        match owning_root(roots, &track.path) {
            Some(root) => {
                let components = relative_dirs(root, &track.path);
                let node = if single_root {
                    &mut top
                } else {
                    per_root.entry(root).or_default()
                };
                node.insert(&components, Arc::clone(track));
            }
            // Outside every root: group under the containing directory.
            None => {
                let components: Vec<String> = track
                    .path
                    .parent()
                    .map(|p| vec![p.display().to_string()])
                    .unwrap_or_default();
                top.insert(&components, Arc::clone(track));
            }
        }
    }

    let labels = root_labels(&distinct);
    let mut root_items: Vec<(String, &PathBuf, MediaLibraryItem)> = per_root
        .into_iter()
        .map(|(root, node)| {
            let label = labels
                .get(root)
                .cloned()
                .unwrap_or_else(|| root.display().to_string());
            (label.clone(), root, MediaLibraryItem::group(label, node.into_items()))
        })
        .collect();
    root_items.sort_by(|a, b| {
        a.0.to_lowercase()
            .cmp(&b.0.to_lowercase())
            .then_with(|| a.1.cmp(b.1))
    });

    let mut items: Vec<MediaLibraryItem> =
        root_items.into_iter().map(|(_, _, item)| item).collect();
    items.extend(top.into_items());
    items
}

/// Directory names between `root` and the file.
fn relative_dirs(root: &Path, path: &Path) -> Vec<String> {
    path.strip_prefix(root)
        .ok()
        .and_then(Path::parent)
        .map(|parent| {
            parent
                .components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Deepest root containing `path`, so nested roots claim their own files.
fn owning_root<'r>(roots: &'r [PathBuf], path: &Path) -> Option<&'r PathBuf> {
    roots
        .iter()
        .filter(|root| path.starts_with(root))
        .max_by_key(|root| root.components().count())
}

/// Top-level folder label per root: the last path component, or the full
/// path when another root ends in the same name.
fn root_labels<'r>(roots: &BTreeSet<&'r PathBuf>) -> BTreeMap<&'r PathBuf, String> {
    let short = |root: &Path| {
        root.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| root.display().to_string())
    };
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    for root in roots {
        *seen.entry(short(root).to_lowercase()).or_default() += 1;
    }
    roots
        .iter()
        .map(|&root| {
            let name = short(root);
            let label = if seen.get(&name.to_lowercase()).copied().unwrap_or(0) > 1 {
                root.display().to_string()
            } else {
                name
            };
            (root, label)
        })
        .collect()
}
