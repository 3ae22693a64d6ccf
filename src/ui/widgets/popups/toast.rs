use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

const SLIDE_MS: u128 = 250;

pub fn render(f: &mut Frame, app: &App) {
    let Some(toast) = app.toast.as_ref() else {
        return;
    };
    let theme = &app.theme;
    let screen = f.area();
    let now = Instant::now();

    let width = (toast.message.width() as u16 + 6).min(screen.width.saturating_sub(4));
    let elapsed = now.duration_since(toast.start_time).as_millis();
    let remaining = toast.deadline.saturating_duration_since(now).as_millis();

    // Slides in from the right edge, then back out before the deadline
    let hidden = if elapsed < SLIDE_MS {
        1.0 - (elapsed as f32 / SLIDE_MS as f32)
    } else if remaining < SLIDE_MS {
        1.0 - (remaining as f32 / SLIDE_MS as f32)
    } else {
        0.0
    };
    let x = screen.width.saturating_sub(width + 1) + (width as f32 * hidden) as u16;
    if x >= screen.width {
        return;
    }

    let area = Rect::new(x, 1, width, 3).intersection(screen);
    if area.is_empty() {
        return;
    }
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.blue))
        .style(Style::default().bg(Color::Reset));
    let text = Paragraph::new(Line::from(Span::styled(
        toast.message.as_str(),
        Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);
    f.render_widget(text, area);
}
