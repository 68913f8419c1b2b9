use ratatui::layout::{Constraint, Layout, Rect};

pub const COUNT_PANEL_WIDTH: u16 = 38;
pub const COUNT_PANEL_HEIGHT: u16 = 7;

pub struct AppLayout {
    pub table: Rect,
    pub hints: Rect,
    pub status: Rect,
}

/// Table fills the screen; hint bar and status bar sit underneath.
pub fn split(area: Rect) -> AppLayout {
    let [table, hints, status] = Layout::vertical([
        Constraint::Min(4),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);
    AppLayout {
        table,
        hints,
        status,
    }
}

/// Checkbox column followed by the six data columns.
pub fn column_widths() -> [Constraint; 7] {
    [
        Constraint::Length(3),
        Constraint::Percentage(26),
        Constraint::Percentage(14),
        Constraint::Percentage(22),
        Constraint::Percentage(18),
        Constraint::Length(12),
        Constraint::Length(12),
    ]
}

pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_take_one_line_each() {
        let layout = split(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.table.height, 28);
        assert_eq!(layout.hints.y, 28);
        assert_eq!(layout.status.y, 29);
    }

    #[test]
    fn centered_rect_is_clamped_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(centered(area, 38, 7), area);
        assert_eq!(
            centered(Rect::new(0, 0, 100, 30), 38, 7),
            Rect::new(31, 11, 38, 7)
        );
    }
}
