use crate::backend::Task;
use crate::constants::{BUTTON_COMPLETE, BUTTON_DELETE, BUTTON_EDIT, BUTTON_UNDO, EMPTY_LIST_TEXT};
use crate::ui::core::{actions::Action, Component};
use crate::ui::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
    Frame,
};

/// Label of the completion toggle for a task
pub fn toggle_label(task: &Task) -> &'static str {
    if task.completed {
        BUTTON_UNDO
    } else {
        BUTTON_COMPLETE
    }
}

pub struct TaskListComponent {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub focused: bool,
    pub palette: Palette,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            focused: true,
            palette: Palette::default(),
        }
    }

    pub fn update_data(&mut self, tasks: Vec<Task>, focused: bool, palette: Palette) {
        self.tasks = tasks;
        self.focused = focused;
        self.palette = palette;
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.tasks.len() {
                self.selected_index = self.tasks.len().saturating_sub(1);
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn get_selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    fn create_task_item(&self, task: &Task) -> ListItem<'static> {
        let (marker, title_style) = if task.completed {
            (
                "[x] ",
                Style::default()
                    .fg(self.palette.completed)
                    .add_modifier(Modifier::CROSSED_OUT),
            )
        } else {
            ("[ ] ", Style::default().fg(self.palette.foreground))
        };

        ListItem::new(Line::from(vec![
            Span::styled(marker, Style::default().fg(self.palette.muted)),
            Span::styled(task.title.clone(), title_style),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", toggle_label(task)),
                Style::default().fg(self.palette.accent),
            ),
            Span::raw(" "),
            Span::styled(format!("[{}]", BUTTON_EDIT), Style::default().fg(self.palette.muted)),
            Span::raw(" "),
            Span::styled(format!("[{}]", BUTTON_DELETE), Style::default().fg(self.palette.error)),
        ]))
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
            KeyCode::Enter | KeyCode::Char(' ') => match self.get_selected_task() {
                Some(task) => Action::ToggleCompleted(task.clone()),
                None => Action::None,
            },
            KeyCode::Char('e') => match self.get_selected_task() {
                Some(task) => Action::BeginEdit(task.clone()),
                None => Action::None,
            },
            KeyCode::Char('d') | KeyCode::Delete => match self.get_selected_task() {
                Some(task) => Action::DeleteTask(task.id.clone()),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.tasks.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.tasks.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
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
            .title(format!(" Tasks ({}) ", self.tasks.len()))
            .style(self.palette.base());

        if self.tasks.is_empty() {
            let empty_list =
                List::new(vec![ListItem::new(Span::styled(EMPTY_LIST_TEXT, self.palette.muted()))]).block(block);
            f.render_widget(empty_list, rect);
            return;
        }

        let items: Vec<ListItem> = self.tasks.iter().map(|task| self.create_task_item(task)).collect();
        let highlight = if self.focused {
            Style::default().bg(self.palette.selection).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let tasks_list = List::new(items).block(block).highlight_style(highlight);
        f.render_stateful_widget(tasks_list, rect, &mut self.list_state);
    }
}
