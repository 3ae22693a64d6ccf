pub mod guides;
pub mod layout;
pub mod theme;
pub mod utils;
pub mod widgets;

pub use theme::Theme;

use crate::app::App;
use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn ui(f: &mut Frame, app: &mut App) {
    let main_layout = layout::get_main_layout(f.area());

    widgets::header::render(f, main_layout.header_area, app);
    widgets::tree_view::render(f, main_layout.body_area, app);
    render_footer(f, main_layout.footer_area, app);

    widgets::popups::render(f, app);
}

fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let theme = &app.theme;
    let status = if app.scanning {
        Span::styled(" ⟳ scanning…", Style::default().fg(theme.yellow))
    } else {
        Span::styled(
            format!(" {} tracks in library", app.library.len()),
            Style::default().fg(theme.overlay),
        )
    };
    f.render_widget(Paragraph::new(Line::from(status)), area);

    let hint = format!("{} keys ", app.keys.display(&app.keys.toggle_keyhints));
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(hint, Style::default().fg(theme.overlay))))
            .alignment(Alignment::Right),
        area,
    );
}
