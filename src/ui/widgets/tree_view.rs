use crate::app::{App, VisibleRow};
use crate::ui::guides::TreeGuides;
use crate::ui::theme::Theme;
use crate::ui::utils::pad_to;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let title = format!(
        " {} · {} tracks ",
        app.index.title(),
        app.list.track_count()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            title,
            Style::default()
                .fg(app.theme.blue)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(app.theme.blue))
        .style(Style::default().bg(Color::Reset));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = app.rows();
    let height = inner.height as usize;
    app.tree.clamp(rows.len());
    app.tree.scroll_into_view(height);

    let theme = &app.theme;
    let width = inner.width as usize;
    let mut lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(app.tree.offset)
        .take(height)
        .map(|(i, row)| row_line(row, i == app.tree.selected, width, theme, TreeGuides::Unicode))
        .collect();

    if app.list.is_empty() && lines.len() < height {
        let message = if app.scanning {
            "Scanning library…"
        } else if !app.filter_query.is_empty() {
            "No tracks match the filter"
        } else {
            "No tracks found"
        };
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(message, Style::default().fg(theme.overlay)))
                .alignment(Alignment::Center),
        );
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// One tree row: guides, expand marker or note icon, label, and the
/// right-aligned detail (duration / track count).
pub fn row_line(
    row: &VisibleRow,
    selected: bool,
    width: usize,
    theme: &Theme,
    guides: TreeGuides,
) -> Line<'static> {
    let prefix = guides.prefix(&row.guides);
    let (marker, marker_color) = if row.expandable {
        (if row.expanded { "▾ " } else { "▸ " }, theme.blue)
    } else if row.is_root() {
        ("  ", theme.blue)
    } else {
        ("♪ ", theme.green)
    };
    let detail = row.detail.clone().unwrap_or_default();

    let fixed = prefix.width() + marker.width() + detail.width() + 1;
    let label = pad_to(&row.label, width.saturating_sub(fixed));

    let label_style = if selected {
        Style::default()
            .fg(theme.blue)
            .bg(theme.surface)
            .add_modifier(Modifier::BOLD)
    } else if row.is_root() {
        Style::default().fg(theme.yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };
    let detail_style = if selected {
        Style::default().fg(theme.green).bg(theme.surface)
    } else {
        Style::default().fg(theme.overlay)
    };

    Line::from(vec![
        Span::styled(prefix, Style::default().fg(theme.surface)),
        Span::styled(marker, Style::default().fg(marker_color)),
        Span::styled(label, label_style),
        Span::styled(" ", detail_style),
        Span::styled(detail, detail_style),
    ])
}
