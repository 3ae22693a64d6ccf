use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub mod persistence;
pub mod user;

pub use persistence::PersistentState;
pub use user::UserConfig;

/// Locations of everything kept on disk: `config.toml`, `state.toml`,
/// `theme.toml` and the log directory.
#[derive(Debug, Clone)]
pub struct AppConfig {
    dir: PathBuf,
}

impl AppConfig {
    pub fn default_dir() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("medialib-tree")
    }

    pub fn new(dir: Option<PathBuf>) -> Self {
        Self {
            dir: dir.unwrap_or_else(Self::default_dir),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join("config.toml")
    }

    pub fn state_path(&self) -> PathBuf {
        self.dir.join("state.toml")
    }

    pub fn theme_path(&self) -> PathBuf {
        self.dir.join("theme.toml")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.dir.join("logs")
    }

    /// Read `config.toml`, writing the defaults out first if it is missing.
    pub fn load_user(&self) -> Result<UserConfig> {
        let path = self.config_path();
        if !path.exists() {
            let config = UserConfig::default();
            // Best effort: a read-only config dir still runs with defaults
            if fs::create_dir_all(&self.dir).is_ok() {
                if let Ok(content) = toml::to_string_pretty(&config) {
                    let _ = fs::write(&path, content);
                }
            }
            return Ok(config);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn load_state(&self) -> PersistentState {
        fs::read_to_string(self.state_path())
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    pub fn save_state(&self, state: &PersistentState) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let content = toml::to_string_pretty(state)?;
        fs::write(self.state_path(), content)
            .with_context(|| format!("Failed to write {}", self.state_path().display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medialib::LibraryIndex;

    #[test]
    fn test_missing_config_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::new(Some(dir.path().join("cfg")));

        let user = config.load_user().unwrap();
        assert!(user.show_root);
        assert!(config.config_path().exists());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::new(Some(dir.path().to_path_buf()));
        fs::write(config.config_path(), "show_root = \"maybe\"").unwrap();
        assert!(config.load_user().is_err());
    }

    #[test]
    fn test_state_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::new(Some(dir.path().to_path_buf()));
        assert_eq!(config.load_state(), PersistentState::default());

        let state = PersistentState {
            last_index: Some(LibraryIndex::Genre),
        };
        config.save_state(&state).unwrap();
        assert_eq!(config.load_state(), state);
    }
}
