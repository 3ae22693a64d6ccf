use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    // Global
    pub quit: String,
    pub toggle_keyhints: String,
    pub filter: String,
    pub rescan: String,
    pub toggle_root: String,

    // Index switching
    pub index_next: String,
    pub index_prev: String,
    pub index_album: String,
    pub index_artist: String,
    pub index_genre: String,
    pub index_folder: String,

    // Navigation
    pub nav_up: String,
    pub nav_up_alt: String,
    pub nav_down: String,
    pub nav_down_alt: String,
    pub nav_first: String,
    pub nav_last: String,

    // Tree
    pub collapse: String,
    pub collapse_alt: String,
    pub expand: String,
    pub expand_alt: String,
    pub toggle: String,
    pub activate: String,
    pub back: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            toggle_keyhints: "?".to_string(),
            filter: "/".to_string(),
            rescan: "r".to_string(),
            toggle_root: ".".to_string(),

            index_next: "Tab".to_string(),
            index_prev: "BackTab".to_string(),
            index_album: "1".to_string(),
            index_artist: "2".to_string(),
            index_genre: "3".to_string(),
            index_folder: "4".to_string(),

            nav_up: "k".to_string(),
            nav_up_alt: "Up".to_string(),
            nav_down: "j".to_string(),
            nav_down_alt: "Down".to_string(),
            nav_first: "g".to_string(),
            nav_last: "G".to_string(),

            collapse: "h".to_string(),
            collapse_alt: "Left".to_string(),
            expand: "l".to_string(),
            expand_alt: "Right".to_string(),
            toggle: "Space".to_string(),
            activate: "Enter".to_string(),
            back: "Esc".to_string(),
        }
    }
}

impl KeyConfig {
    pub fn matches(&self, event: KeyEvent, key_str: &str) -> bool {
        match key_str {
            "Space" => event.code == KeyCode::Char(' '),
            "Enter" => event.code == KeyCode::Enter,
            "Backspace" => event.code == KeyCode::Backspace,
            "Esc" => event.code == KeyCode::Esc,
            "Tab" => event.code == KeyCode::Tab,
            "BackTab" => event.code == KeyCode::BackTab,
            "Up" => event.code == KeyCode::Up,
            "Down" => event.code == KeyCode::Down,
            "Left" => event.code == KeyCode::Left,
            "Right" => event.code == KeyCode::Right,
            "Home" => event.code == KeyCode::Home,
            "End" => event.code == KeyCode::End,
            s if s.chars().count() == 1 => {
                let Some(ch) = s.chars().next() else {
                    return false;
                };
                // Uppercase bindings also fire for shift + lowercase
                if ch.is_uppercase() {
                    event.code == KeyCode::Char(ch)
                        || (event.code == KeyCode::Char(ch.to_ascii_lowercase())
                            && event.modifiers.contains(KeyModifiers::SHIFT))
                } else {
                    event.code == KeyCode::Char(ch)
                }
            }
            _ => false,
        }
    }

    /// Either of two bindings.
    pub fn matches_any(&self, event: KeyEvent, a: &str, b: &str) -> bool {
        self.matches(event, a) || self.matches(event, b)
    }

    // Helper for UI display
    pub fn display(&self, key_str: &str) -> String {
        match key_str {
            "Up" => "↑".to_string(),
            "Down" => "↓".to_string(),
            "Left" => "←".to_string(),
            "Right" => "→".to_string(),
            "BackTab" => "S-Tab".to_string(),
            "Backspace" => "Bksp".to_string(),
            _ => key_str.to_string(),
        }
    }
}
