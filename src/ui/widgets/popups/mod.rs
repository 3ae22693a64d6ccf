use crate::app::App;
use ratatui::Frame;

pub mod help;
pub mod toast;
pub mod track_info;

pub fn render(f: &mut Frame, app: &App) {
    if app.track_info.is_some() {
        track_info::render(f, app);
    }

    if app.show_keyhints {
        help::render(f, app);
    }

    // Toast stays on top of everything
    if app.toast.is_some() {
        toast::render(f, app);
    }
}
