use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MainLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub footer_area: Rect,
}

pub fn get_main_layout(area: Rect) -> MainLayout {
    // Header: tabs + filter bar. Footer: one hint line.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Tree
            Constraint::Length(1), // Footer
        ])
        .split(area);

    MainLayout {
        header_area: chunks[0],
        body_area: chunks[1],
        footer_area: chunks[2],
    }
}

/// Rect of `percent_x` x `height` centered in `area` (popups).
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (area.width as u32 * percent_x as u32 / 100) as u16;
    let width = width.max(20).min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_layout_splits_all_rows() {
        let layout = get_main_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.footer_area.height, 1);
        assert_eq!(layout.body_area.height, 20);
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 10, 5);
        let r = centered_rect(60, 12, area);
        assert!(r.width <= area.width && r.height <= area.height);
    }
}
