use crate::app::App;
use crate::medialib::PlayItem;
use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, app: &App) {
    let Some(track) = app.track_info.as_ref() else {
        return;
    };
    let theme = &app.theme;
    let lines = track_lines(track, theme);

    let height = (lines.len() as u16 + 2).min(f.area().height);
    let area = centered_rect(60, height, f.area());
    f.render_widget(Clear, area);

    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.magenta))
                .title(" Track Info ")
                .title_alignment(Alignment::Center)
                .style(Style::default().bg(Color::Reset)),
        );
    f.render_widget(popup, area);
}

fn field<'a>(label: &'a str, value: String, color: Color, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<8}", label), Style::default().fg(theme.overlay)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

fn track_lines<'a>(track: &PlayItem, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(vec![
        Span::styled("♫ ", Style::default().fg(theme.magenta)),
        Span::styled(
            track.display_title(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ])];
    lines.push(Line::from(""));
    lines.push(field("Artist", track.artist_label().to_string(), theme.text, theme));
    lines.push(field("Album", track.album_label().to_string(), theme.text, theme));
    lines.push(field("Genre", track.genre_label().to_string(), theme.cyan, theme));
    if let Some(n) = track.track_number {
        lines.push(field("Track", n.to_string(), theme.text, theme));
    }
    if track.duration_ms.is_some() {
        lines.push(field("Length", track.duration_label(), theme.green, theme));
    }
    lines.push(Line::from(""));
    lines.push(field("Path", track.path.display().to_string(), theme.overlay, theme));
    lines
}
