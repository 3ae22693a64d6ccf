//! The scanned music collection and the grouped trees built from it.
//!
//! A [`MediaLibrary`] is an immutable snapshot: rescanning produces a new
//! one. Trees ([`MediaLibraryList`]) are built from a snapshot on demand and
//! share its tracks.

pub mod error;
pub mod index;
pub mod list;
pub mod scanner;
pub mod track;

pub use error::{MediaLibError, Result};
pub use index::LibraryIndex;
pub use list::{MediaLibraryItem, MediaLibraryList};
pub use scanner::Scanner;
pub use track::{PlayItem, UNKNOWN_TAG};

use fuzzy_matcher::{skim::SkimMatcherV2, FuzzyMatcher};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct MediaLibrary {
    roots: Vec<PathBuf>,
    tracks: Vec<Arc<PlayItem>>,
}

impl MediaLibrary {
    /// Snapshot over already-known tracks.
    pub fn from_tracks(roots: Vec<PathBuf>, tracks: Vec<PlayItem>) -> Self {
        Self {
            roots,
            tracks: tracks.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn scan(roots: Vec<PathBuf>, scanner: &Scanner) -> Result<Self> {
        let tracks = scanner.scan(&roots)?;
        info!(roots = roots.len(), tracks = tracks.len(), "Library scan complete");
        Ok(Self::from_tracks(roots, tracks))
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn tracks(&self) -> &[Arc<PlayItem>] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Whole library grouped by `index`.
    pub fn list(&self, index: LibraryIndex) -> MediaLibraryList {
        list::build(index, &self.roots, &self.tracks)
    }

    /// Same shape as [`list`](Self::list), built only from tracks whose
    /// "artist album title" fuzzy-matches `query`. A blank query keeps all.
    pub fn filtered_list(&self, index: LibraryIndex, query: &str) -> MediaLibraryList {
        let query = query.trim();
        if query.is_empty() {
            return self.list(index);
        }

        let matcher = SkimMatcherV2::default().ignore_case();
        let matching: Vec<Arc<PlayItem>> = self
            .tracks
            .iter()
            .filter(|t| matcher.fuzzy_match(&t.search_text(), query).is_some())
            .cloned()
            .collect();
        list::build(index, &self.roots, &matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> MediaLibrary {
        MediaLibrary::from_tracks(
            vec![PathBuf::from("/m")],
            vec![
                PlayItem::new("/m/a/1.mp3")
                    .with_artist("Boards of Canada")
                    .with_album("Geogaddi")
                    .with_title("Music Is Math"),
                PlayItem::new("/m/b/1.mp3")
                    .with_artist("Aphex Twin")
                    .with_album("Drukqs")
                    .with_title("Avril 14th"),
            ],
        )
    }

    #[test]
    fn test_list_shares_tracks_with_library() {
        let lib = library();
        let list = lib.list(LibraryIndex::Album);
        assert_eq!(list.track_count(), lib.len());
        // Lists hold clones of the same Arcs
        assert_eq!(Arc::strong_count(&lib.tracks()[0]), 2);
    }

    #[test]
    fn test_filtered_list_keeps_only_matches() {
        let lib = library();
        let list = lib.filtered_list(LibraryIndex::Artist, "geogaddi");
        assert_eq!(list.count(), 1);
        assert_eq!(list.items()[0].text(), "Boards of Canada");
    }

    #[test]
    fn test_blank_filter_is_whole_library() {
        let lib = library();
        assert_eq!(lib.filtered_list(LibraryIndex::Album, "   ").track_count(), 2);
    }

    #[test]
    fn test_filter_without_matches_is_empty() {
        let lib = library();
        let list = lib.filtered_list(LibraryIndex::Genre, "zzzzqqq");
        assert!(list.is_empty());
        assert_eq!(list.label(), "All Genres");
    }
}
