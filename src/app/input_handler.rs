use crate::app::events::Command;
use crate::app::App;
use crate::medialib::LibraryIndex;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Route one key press. Popups and the filter bar take keys first.
pub fn handle_key(key: KeyEvent, app: &mut App) -> Option<Command> {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.is_running = false;
        return None;
    }

    if app.filter_active {
        handle_filter_mode(key, app);
        return None;
    }

    if app.show_keyhints || app.track_info.is_some() {
        handle_popup_mode(key, app);
        return None;
    }

    handle_normal_mode(key, app)
}

fn handle_filter_mode(key: KeyEvent, app: &mut App) {
    // Ctrl/Alt chords are never text
    let chord = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Esc => app.clear_filter(),
        KeyCode::Enter => app.filter_active = false,
        KeyCode::Backspace => {
            if app.filter_query.pop().is_some() {
                app.apply_filter();
            }
        }
        KeyCode::Char(c) if !chord => {
            app.filter_query.push(c);
            app.apply_filter();
        }
        _ => {}
    }
}

fn handle_popup_mode(key: KeyEvent, app: &mut App) {
    let keys = &app.keys;
    let close = keys.matches(key, &keys.quit)
        || keys.matches(key, &keys.back)
        || keys.matches(key, &keys.activate)
        || keys.matches(key, &keys.toggle_keyhints);
    if close {
        app.show_keyhints = false;
        app.track_info = None;
    }
}

fn handle_normal_mode(key: KeyEvent, app: &mut App) -> Option<Command> {
    let keys = app.keys.clone();

    if keys.matches(key, &keys.quit) {
        app.is_running = false;
    } else if keys.matches(key, &keys.toggle_keyhints) {
        app.show_keyhints = true;
    } else if keys.matches(key, &keys.filter) {
        app.filter_active = true;
    } else if keys.matches(key, &keys.back) {
        // Esc drops a leftover filter
        if !app.filter_query.is_empty() {
            app.clear_filter();
        }
    } else if keys.matches(key, &keys.rescan) {
        if app.scanning {
            app.show_toast("Scan already running");
            return None;
        }
        app.show_toast("Rescanning library…");
        return Some(Command::Rescan);
    } else if keys.matches(key, &keys.toggle_root) {
        app.toggle_root();
    } else if keys.matches(key, &keys.index_next) {
        app.cycle_index(true);
    } else if keys.matches(key, &keys.index_prev) {
        app.cycle_index(false);
    } else if keys.matches(key, &keys.index_album) {
        app.set_index(LibraryIndex::Album);
    } else if keys.matches(key, &keys.index_artist) {
        app.set_index(LibraryIndex::Artist);
    } else if keys.matches(key, &keys.index_genre) {
        app.set_index(LibraryIndex::Genre);
    } else if keys.matches(key, &keys.index_folder) {
        app.set_index(LibraryIndex::Folder);
    } else if keys.matches_any(key, &keys.nav_down, &keys.nav_down_alt) {
        app.select_next();
    } else if keys.matches_any(key, &keys.nav_up, &keys.nav_up_alt) {
        app.select_prev();
    } else if keys.matches(key, &keys.nav_last) {
        // Checked before nav_first: "G" must not fall through to "g"
        app.select_last();
    } else if keys.matches(key, &keys.nav_first) {
        app.select_first();
    } else if keys.matches_any(key, &keys.expand, &keys.expand_alt) {
        app.expand_selected();
    } else if keys.matches_any(key, &keys.collapse, &keys.collapse_alt) {
        app.collapse_selected();
    } else if keys.matches(key, &keys.toggle) {
        app.toggle_selected();
    } else if keys.matches(key, &keys.activate) {
        app.activate_selected();
    }

    None
}
