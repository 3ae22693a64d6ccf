use crate::app::keys::KeyConfig;
use crate::medialib::{scanner::DEFAULT_EXTENSIONS, LibraryIndex};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User-editable configuration (ReadOnly by App after load)
/// stored in `config.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default = "default_music_dirs")]
    pub music_directories: Vec<String>,
    #[serde(default)]
    pub default_index: LibraryIndex,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_show_root")]
    pub show_root: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub keys: KeyConfig,
}

fn default_music_dirs() -> Vec<String> {
    let home = dirs::home_dir()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string());
    vec![format!("{}/Music", home)]
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

fn default_show_root() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            music_directories: default_music_dirs(),
            default_index: LibraryIndex::default(),
            extensions: default_extensions(),
            show_root: default_show_root(),
            log_level: default_log_level(),
            keys: KeyConfig::default(),
        }
    }
}

impl UserConfig {
    /// Music directories with a leading `~` expanded.
    pub fn music_roots(&self) -> Vec<PathBuf> {
        self.music_directories
            .iter()
            .map(|dir| expand_home(dir))
            .collect()
    }
}

fn expand_home(dir: &str) -> PathBuf {
    if let Some(rest) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if dir == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(dir)
}
