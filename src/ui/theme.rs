use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,
    pub text: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub magenta: Color,
    pub cyan: Color,
}

impl Default for Theme {
    // Catppuccin Mocha
    fn default() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),
            surface: Color::Rgb(49, 50, 68),
            overlay: Color::Rgb(108, 112, 134),
            text: Color::Rgb(205, 214, 244),
            red: Color::Rgb(243, 139, 168),
            green: Color::Rgb(166, 227, 161),
            yellow: Color::Rgb(249, 226, 175),
            blue: Color::Rgb(137, 180, 250),
            magenta: Color::Rgb(203, 166, 247),
            cyan: Color::Rgb(148, 226, 213),
        }
    }
}

// Helper for serialization/deserialization
#[derive(Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

/// Load `theme.toml`, creating it with the default palette if missing.
pub fn load_theme(path: &Path) -> Theme {
    if path.exists() {
        if let Ok(content) = fs::read_to_string(path) {
            // Nested [theme] table first, then a flat file
            if let Ok(wrapper) = toml::from_str::<ThemeFile>(&content) {
                return wrapper.theme;
            }
            if let Ok(theme) = toml::from_str::<Theme>(&content) {
                return theme;
            }
        }
        tracing::warn!(path = %path.display(), "Unreadable theme file, using defaults");
        return Theme::default();
    }

    let default_theme = Theme::default();
    let wrapper = ThemeFile {
        theme: default_theme.clone(),
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(toml_str) = toml::to_string_pretty(&wrapper) {
        let _ = fs::write(path, toml_str);
    }
    default_theme
}
