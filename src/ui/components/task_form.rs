use crate::backend::Task;
use crate::constants::{BUTTON_ADD_TASK, BUTTON_CANCEL, BUTTON_UPDATE_TASK, INPUT_PLACEHOLDER};
use crate::ui::core::{actions::Action, Component};
use crate::ui::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Title input with submit and cancel controls
#[derive(Default)]
pub struct TaskFormComponent {
    pub draft: String,
    pub editing: Option<Task>,
    pub loading: bool,
    pub focused: bool,
    pub palette: Palette,
}

impl TaskFormComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, draft: String, editing: Option<Task>, loading: bool, focused: bool, palette: Palette) {
        self.draft = draft;
        self.editing = editing;
        self.loading = loading;
        self.focused = focused;
        self.palette = palette;
    }

    /// Label of the submit control
    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() {
            BUTTON_UPDATE_TASK
        } else {
            BUTTON_ADD_TASK
        }
    }

    fn controls_line(&self) -> Line<'static> {
        let control_style = if self.loading {
            self.palette.muted().add_modifier(Modifier::DIM)
        } else {
            self.palette.accent()
        };

        let mut spans = vec![Span::styled(format!("[Enter] {}", self.submit_label()), control_style)];
        if self.editing.is_some() {
            spans.push(Span::styled("  ", self.palette.base()));
            spans.push(Span::styled(format!("[Esc] {}", BUTTON_CANCEL), self.palette.error()));
        }
        Line::from(spans)
    }
}

impl Component for TaskFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::SubmitTask,
            KeyCode::Esc if self.editing.is_some() => Action::CancelEdit,
            KeyCode::Esc | KeyCode::Tab => Action::FocusList,
            KeyCode::Backspace => Action::InputBackspace,
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                Action::InputChar(c)
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_style = if self.focused {
            self.palette.accent()
        } else {
            self.palette.muted()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" {} ", self.submit_label()))
            .title_bottom(self.controls_line())
            .style(self.palette.base());

        let input = if self.draft.is_empty() && !self.focused {
            Line::from(Span::styled(INPUT_PLACEHOLDER, self.palette.muted()))
        } else if self.focused && !self.loading {
            Line::from(vec![
                Span::styled(self.draft.clone(), self.palette.base()),
                Span::styled("█", self.palette.accent()),
            ])
        } else {
            Line::from(Span::styled(self.draft.clone(), self.palette.base()))
        };

        f.render_widget(Paragraph::new(input).block(block), rect);
    }
}
