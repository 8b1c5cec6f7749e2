//! Loading indicator and error banner

use crate::constants::LOADING_TEXT;
use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Status line component; renders nothing unless loading or an error is set
pub struct StatusBar;

impl StatusBar {
    pub fn line(loading: bool, error_message: Option<&str>, palette: &Palette) -> Line<'static> {
        let mut spans = Vec::new();
        if loading {
            spans.push(Span::styled(LOADING_TEXT, palette.accent()));
        }
        if let Some(error) = error_message {
            if !spans.is_empty() {
                spans.push(Span::styled("  ", palette.base()));
            }
            spans.push(Span::styled(error.to_string(), palette.error()));
        }
        Line::from(spans)
    }

    /// Render the status line
    pub fn render(f: &mut Frame, area: Rect, loading: bool, error_message: Option<&str>, palette: &Palette) {
        let status = Paragraph::new(Self::line(loading, error_message, palette)).style(palette.base());
        f.render_widget(status, area);
    }
}

/// Key hint footer
pub struct ShortcutBar;

impl ShortcutBar {
    pub fn render(f: &mut Frame, area: Rect, editing_form: bool, palette: &Palette) {
        let text = if editing_form {
            "Enter: save • Esc: cancel/back • Tab: list • Ctrl+C: quit"
        } else {
            "Space: toggle • e: edit • d: delete • a: add • 1-3/f: filter • t: theme • r: refresh • ?: help • q: quit"
        };
        f.render_widget(Paragraph::new(text).style(palette.muted()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_when_idle_without_error() {
        assert!(StatusBar::line(false, None, &Palette::LIGHT).spans.is_empty());
    }

    #[test]
    fn shows_loading_and_error_together() {
        let line = StatusBar::line(true, Some("Failed to fetch tasks"), &Palette::LIGHT);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("Loading..."));
        assert!(text.contains("Failed to fetch tasks"));
    }
}
