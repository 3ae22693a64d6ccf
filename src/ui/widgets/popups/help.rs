use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

fn pair(app: &App, a: &str, b: &str) -> String {
    format!("{}/{}", app.keys.display(a), app.keys.display(b))
}

pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let k = &app.keys;

    // WhichKey-style popup, anchored bottom-right
    let tree_keys: Vec<(String, &str, &str)> = vec![
        (pair(app, &k.nav_down, &k.nav_up), "📋", "Navigate"),
        (pair(app, &k.nav_first, &k.nav_last), "↕", "First / last"),
        (pair(app, &k.expand, &k.collapse), "🌿", "Expand / collapse"),
        (k.display(&k.toggle), "🔃", "Toggle node"),
        (k.display(&k.activate), "ℹ️", "Open / track info"),
        (k.display(&k.toggle_root), "🌳", "Show root"),
    ];

    let global_keys: Vec<(String, &str, &str)> = vec![
        (pair(app, &k.index_next, &k.index_prev), "🔄", "Switch index"),
        ("1-4".to_string(), "📚", "Album/Artist/Genre/Folder"),
        (k.display(&k.filter), "🔍", "Filter"),
        (k.display(&k.rescan), "♻️", "Rescan library"),
        (k.display(&k.quit), "🚪", "Quit"),
    ];

    let mut lines: Vec<Line> = Vec::new();
    for (key, icon, desc) in &tree_keys {
        lines.push(key_line(key, icon, desc, theme.yellow, theme.text));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "────── Global ──────",
        Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    for (key, icon, desc) in &global_keys {
        lines.push(key_line(key, icon, desc, theme.green, theme.text));
    }

    let content_width = tree_keys
        .iter()
        .chain(global_keys.iter())
        .map(|(k, _i, d)| 2 + k.len().max(7) + 3 + 3 + d.len())
        .max()
        .unwrap_or(20)
        .max(22);

    let max_height = f.area().height.saturating_sub(4);
    let popup_height = (lines.len() as u16 + 2).min(max_height);
    let popup_width = (content_width as u16 + 4).min(f.area().width.saturating_sub(2));

    let popup_x = f.area().width.saturating_sub(popup_width + 1);
    let popup_y = f.area().height.saturating_sub(popup_height + 2);
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);

    let popup = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.blue))
            .title(format!(" {} ", app.index.title()))
            .title_alignment(Alignment::Left)
            .style(Style::default().bg(Color::Reset)),
    );
    f.render_widget(popup, popup_area);
}

fn key_line(key: &str, icon: &str, desc: &str, key_color: Color, text: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {:<7} ", key),
            Style::default().fg(key_color).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::raw(format!("{} ", icon)),
        Span::styled(desc.to_string(), Style::default().fg(text)),
    ])
}
