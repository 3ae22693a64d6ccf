use crate::app::App;
use crate::medialib::LibraryIndex;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut lines: Vec<Line> = Vec::new();

    // Index tabs with filled dot indicators
    let mut tabs: Vec<Span> = Vec::new();
    for (i, index) in LibraryIndex::ALL.iter().enumerate() {
        if i > 0 {
            tabs.push(Span::raw("      "));
        }
        let active = *index == app.index;
        let color = match index {
            LibraryIndex::Album => theme.blue,
            LibraryIndex::Artist => theme.magenta,
            LibraryIndex::Genre => theme.cyan,
            LibraryIndex::Folder => theme.green,
        };
        let dot = if active { "●" } else { "○" };
        let style = if active {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        tabs.push(Span::styled(format!("{} ", dot), Style::default().fg(color)));
        tabs.push(Span::styled(index.title(), style));
    }
    lines.push(Line::from(tabs).alignment(Alignment::Center));

    // Filter bar
    let (filter_text, filter_color) = if app.filter_active {
        (format!(" {}▏", app.filter_query), theme.green)
    } else if !app.filter_query.is_empty() {
        (format!(" {}", app.filter_query), theme.yellow)
    } else {
        (
            format!(" Press {} to filter...", app.keys.display(&app.keys.filter)),
            theme.overlay,
        )
    };
    lines.push(Line::from(vec![
        Span::styled("  ", Style::default().fg(filter_color)),
        Span::styled(filter_text, Style::default().fg(filter_color)),
    ]));

    lines.push(
        Line::from(Span::styled(
            "─".repeat((area.width as usize).min(60)),
            Style::default().fg(theme.surface),
        ))
        .alignment(Alignment::Center),
    );

    f.render_widget(Paragraph::new(lines), area);
}
