use super::error::{MediaLibError, Result};
use super::track::PlayItem;
use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::{Accessor, ItemKey};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "mp3", "flac", "ogg", "oga", "opus", "m4a", "aac", "wav", "aiff", "aif", "wv", "ape", "mpc",
];

/// Walks music directories and reads tags from every audio file found 🔍
#[derive(Debug, Clone)]
pub struct Scanner {
    extensions: Vec<String>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()))
    }
}

impl Scanner {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }

    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .is_some_and(|ext| self.extensions.iter().any(|e| *e == ext))
    }

    /// Scan every root; roots that can't be read are skipped. A file reached
    /// through overlapping or repeated roots is read once.
    pub fn scan(&self, roots: &[PathBuf]) -> Result<Vec<PlayItem>> {
        let mut seen: HashSet<PathBuf> = HashSet::new();
        let mut items = Vec::new();
        let mut scanned_roots = 0;

        for root in roots {
            match self.audio_files(root) {
                Ok(found) => {
                    scanned_roots += 1;
                    let total = found.len();
                    let fresh: Vec<PathBuf> = found
                        .into_iter()
                        .filter(|p| seen.insert(p.clone()))
                        .collect();
                    info!(
                        root = %root.display(),
                        tracks = fresh.len(),
                        duplicates = total - fresh.len(),
                        "Scanned music directory"
                    );
                    items.extend(fresh.iter().map(|p| read_play_item(p)));
                }
                Err(e) => warn!(root = %root.display(), error = %e, "Skipping music directory"),
            }
        }

        if scanned_roots == 0 {
            return Err(MediaLibError::NoMusicRoots(roots.to_vec()));
        }
        Ok(items)
    }

    pub fn scan_root(&self, root: &Path) -> Result<Vec<PlayItem>> {
        Ok(self
            .audio_files(root)?
            .iter()
            .map(|p| read_play_item(p))
            .collect())
    }

    /// Accepted files below `root`, in walk order.
    fn audio_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let meta = std::fs::metadata(root).map_err(|source| MediaLibError::Io {
            path: root.to_path_buf(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(MediaLibError::Io {
                path: root.to_path_buf(),
                source: std::io::Error::other("not a directory"),
            });
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // The root itself failing is fatal; anything deeper is skipped
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    debug!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() || !self.accepts(entry.path()) {
                continue;
            }
            files.push(entry.into_path());
        }

        Ok(files)
    }
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Tags from the primary tag (or the first one present). Files lofty can't
/// parse still become items, named after the file.
pub fn read_play_item(path: &Path) -> PlayItem {
    let mut item = PlayItem::new(path);

    let tagged_file = match lofty::read_from_path(path) {
        Ok(f) => f,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "No readable tags");
            return item;
        }
    };

    let duration = tagged_file.properties().duration();
    if !duration.is_zero() {
        item.duration_ms = Some(duration.as_millis() as u64);
    }

    if let Some(tag) = tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) {
        if let Some(title) = tag.title() {
            item = item.with_title(&title);
        }
        if let Some(artist) = tag.artist() {
            item = item.with_artist(&artist);
        }
        if let Some(album) = tag.album() {
            item = item.with_album(&album);
        }
        if let Some(genre) = tag.genre() {
            item = item.with_genre(&genre);
        }
        if let Some(n) = tag.track() {
            item = item.with_track_number(n);
        }
        item.album_artist = tag
            .get_string(&ItemKey::AlbumArtist)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
    }

    item
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_extensions_case_insensitively() {
        let scanner = Scanner::new([".FLAC", "mp3"]);
        assert!(scanner.accepts(Path::new("/m/a.flac")));
        assert!(scanner.accepts(Path::new("/m/b.MP3")));
        assert!(!scanner.accepts(Path::new("/m/cover.jpg")));
        assert!(!scanner.accepts(Path::new("/m/README")));
    }

    #[test]
    fn test_default_scanner_accepts_common_formats() {
        let scanner = Scanner::default();
        for name in ["a.mp3", "b.flac", "c.opus", "d.m4a"] {
            assert!(scanner.accepts(Path::new(name)), "{}", name);
        }
    }

    #[test]
    fn test_unparsable_file_keeps_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Not Really Audio.mp3");
        std::fs::write(&path, b"definitely not mpeg").unwrap();

        let item = read_play_item(&path);
        assert_eq!(item.display_title(), "Not Really Audio");
        assert_eq!(item.artist, None);
    }
}
