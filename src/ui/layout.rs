//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas, top to bottom
#[derive(Debug, Clone, Copy)]
pub struct MainLayout {
    pub header: Rect,
    pub form: Rect,
    pub filters: Rect,
    pub status: Rect,
    pub tasks: Rect,
    pub footer: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into header, form, filter bar, status line, task list and footer
    #[must_use]
    pub fn main_layout(area: Rect) -> MainLayout {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        MainLayout {
            header: chunks[0],
            form: chunks[1],
            filters: chunks[2],
            status: chunks[3],
            tasks: chunks[4],
            footer: chunks[5],
        }
    }

    /// Helper function to create a centered rect using up certain percentage of the available rect
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Help panel size as percentages of the screen, larger on small terminals
    #[must_use]
    pub fn help_panel_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let width = if screen_width < 80 { 95 } else { 70 };
        let height = if screen_height < 30 { 90 } else { 70 };
        (width, height)
    }
}
