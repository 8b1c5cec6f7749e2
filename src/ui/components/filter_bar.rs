use crate::backend::TaskFilter;
use crate::ui::core::{actions::Action, Component};
use crate::ui::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// All / Completed / Pending selector with the active filter marked
#[derive(Default)]
pub struct FilterBarComponent {
    pub active: TaskFilter,
    pub palette: Palette,
}

impl FilterBarComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, active: TaskFilter, palette: Palette) {
        self.active = active;
        self.palette = palette;
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("Show: ", self.palette.muted())];
        for (index, filter) in TaskFilter::ALL.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" ", self.palette.base()));
            }
            let (text, style) = if *filter == self.active {
                (
                    format!("[{}] {}", index + 1, filter.label()),
                    self.palette.accent().add_modifier(Modifier::REVERSED),
                )
            } else {
                (format!("[{}] {}", index + 1, filter.label()), self.palette.base())
            };
            spans.push(Span::styled(text, style));
        }
        Line::from(spans)
    }
}

impl Component for FilterBarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('1') => Action::SetFilter(TaskFilter::All),
            KeyCode::Char('2') => Action::SetFilter(TaskFilter::Completed),
            KeyCode::Char('3') => Action::SetFilter(TaskFilter::Pending),
            KeyCode::Char('f') => Action::CycleFilter,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        f.render_widget(Paragraph::new(self.line()).style(self.palette.base()), rect);
    }
}
