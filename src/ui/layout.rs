use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Splits the screen into stepper, body and navigation bar.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let stepper_height = area.height.min(3);
    let nav_height = 3.min(area.height.saturating_sub(stepper_height));
    let stepper = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: stepper_height,
    };
    let nav = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(nav_height),
        width: area.width,
        height: nav_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + stepper_height,
        width: area.width,
        height: area.height.saturating_sub(stepper_height + nav_height),
    };
    (stepper, body, nav)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1])[1]
}
