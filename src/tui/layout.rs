use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Stacked layout: search box, tab bar, results, status bar
pub struct AppLayout {
    pub search_area: Rect,
    pub tabs_area: Rect,
    pub results_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Bordered input line
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            search_area: chunks[0],
            tabs_area: chunks[1],
            results_area: chunks[2],
            status_area: chunks[3],
        }
    }
}
