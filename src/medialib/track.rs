use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Label used for any grouping tag the file doesn't carry.
pub const UNKNOWN_TAG: &str = "<?>";

/// A single playable file and the tags read from it 🎵
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayItem {
    pub path: PathBuf,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album_artist: Option<String>,
    pub album: Option<String>,
    pub genre: Option<String>,
    pub track_number: Option<u32>,
    pub duration_ms: Option<u64>,
}

impl PlayItem {
    /// Untagged item: only the path is known.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            title: None,
            artist: None,
            album_artist: None,
            album: None,
            genre: None,
            track_number: None,
            duration_ms: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = non_empty(title);
        self
    }

    pub fn with_artist(mut self, artist: &str) -> Self {
        self.artist = non_empty(artist);
        self
    }

    pub fn with_album(mut self, album: &str) -> Self {
        self.album = non_empty(album);
        self
    }

    pub fn with_genre(mut self, genre: &str) -> Self {
        self.genre = non_empty(genre);
        self
    }

    pub fn with_track_number(mut self, number: u32) -> Self {
        self.track_number = Some(number);
        self
    }

    /// Title tag, or the file stem when the tag is missing.
    pub fn display_title(&self) -> String {
        match self.title.as_deref() {
            Some(t) => t.to_string(),
            None => file_label(&self.path),
        }
    }

    /// Row label used by every tree view of this item.
    pub fn display_text(&self) -> String {
        match self.track_number {
            Some(n) => format!("{:02}. {}", n, self.display_title()),
            None => self.display_title(),
        }
    }

    pub fn artist_label(&self) -> &str {
        self.artist.as_deref().unwrap_or(UNKNOWN_TAG)
    }

    /// Album artist when tagged, track artist otherwise.
    pub fn album_artist_label(&self) -> &str {
        self.album_artist
            .as_deref()
            .or(self.artist.as_deref())
            .unwrap_or(UNKNOWN_TAG)
    }

    pub fn album_label(&self) -> &str {
        self.album.as_deref().unwrap_or(UNKNOWN_TAG)
    }

    pub fn genre_label(&self) -> &str {
        self.genre.as_deref().unwrap_or(UNKNOWN_TAG)
    }

    /// "m:ss", empty when the duration is unknown.
    pub fn duration_label(&self) -> String {
        self.duration_ms
            .map(|ms| {
                let s = ms / 1000;
                format!("{}:{:02}", s / 60, s % 60)
            })
            .unwrap_or_default()
    }

    /// Text the filter matches against.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.artist.as_deref().unwrap_or_default(),
            self.album.as_deref().unwrap_or_default(),
            self.display_title()
        )
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Last path component without extension, or the whole path if it has none.
pub(crate) fn file_label(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
