use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaLibError {
    #[error("No usable music directory (tried: {})", format_roots(.0))]
    NoMusicRoots(Vec<PathBuf>),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

fn format_roots(roots: &[PathBuf]) -> String {
    if roots.is_empty() {
        return "none configured".to_string();
    }
    roots
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, MediaLibError>;
