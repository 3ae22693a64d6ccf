use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the library groups its tracks into a tree 📚
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryIndex {
    #[default]
    Album,
    Artist,
    Genre,
    Folder,
}

impl LibraryIndex {
    pub const ALL: [LibraryIndex; 4] = [
        LibraryIndex::Album,
        LibraryIndex::Artist,
        LibraryIndex::Genre,
        LibraryIndex::Folder,
    ];

    /// Label of the root row of a tree built with this index.
    pub fn root_label(self) -> &'static str {
        match self {
            LibraryIndex::Album => "All Albums",
            LibraryIndex::Artist => "All Artists",
            LibraryIndex::Genre => "All Genres",
            LibraryIndex::Folder => "All Folders",
        }
    }

    /// Short name shown in the index tab bar.
    pub fn title(self) -> &'static str {
        match self {
            LibraryIndex::Album => "Albums",
            LibraryIndex::Artist => "Artists",
            LibraryIndex::Genre => "Genres",
            LibraryIndex::Folder => "Folders",
        }
    }

    pub fn next(self) -> Self {
        match self {
            LibraryIndex::Album => LibraryIndex::Artist,
            LibraryIndex::Artist => LibraryIndex::Genre,
            LibraryIndex::Genre => LibraryIndex::Folder,
            LibraryIndex::Folder => LibraryIndex::Album,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LibraryIndex::Album => LibraryIndex::Folder,
            LibraryIndex::Artist => LibraryIndex::Album,
            LibraryIndex::Genre => LibraryIndex::Artist,
            LibraryIndex::Folder => LibraryIndex::Genre,
        }
    }
}

impl fmt::Display for LibraryIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LibraryIndex::Album => "album",
            LibraryIndex::Artist => "artist",
            LibraryIndex::Genre => "genre",
            LibraryIndex::Folder => "folder",
        };
        f.write_str(name)
    }
}

impl FromStr for LibraryIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "album" | "albums" => Ok(LibraryIndex::Album),
            "artist" | "artists" => Ok(LibraryIndex::Artist),
            "genre" | "genres" => Ok(LibraryIndex::Genre),
            "folder" | "folders" => Ok(LibraryIndex::Folder),
            other => Err(format!(
                "unknown index '{}' (expected album, artist, genre or folder)",
                other
            )),
        }
    }
}
