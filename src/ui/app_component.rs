use crate::backend::{Backend, CreateTaskArgs, Task, TaskFilter, UpdateTaskArgs};
use crate::constants::{
    APP_TITLE, BUTTON_DARK_MODE, BUTTON_LIGHT_MODE, ERROR_DELETE_TASK, ERROR_FETCH_TASKS, ERROR_SAVE_TASK,
    ERROR_UPDATE_TASK,
};
use crate::logger::Logger;
use crate::storage::PreferenceStore;
use crate::ui::components::{
    FilterBarComponent, HelpPanel, LogsPanel, ShortcutBar, StatusBar, TaskFormComponent, TaskListComponent,
};
use crate::ui::core::{
    actions::{Action, Focus, Operation},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Last successful fetch, replaced wholesale
    pub tasks: Vec<Task>,
    pub draft_title: String,
    /// Copy of the task being edited
    pub editing: Option<Task>,
    pub filter: TaskFilter,
    pub dark_mode: bool,
    pub loading: bool,
    pub error_message: Option<String>,
    pub focus: Focus,
    pub show_help: bool,
    pub show_logs: bool,
}

impl AppState {
    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.dark_mode)
    }
}

fn error_message_for(operation: Operation) -> &'static str {
    match operation {
        Operation::Fetch => ERROR_FETCH_TASKS,
        Operation::Save => ERROR_SAVE_TASK,
        Operation::Toggle => ERROR_UPDATE_TASK,
        Operation::Delete => ERROR_DELETE_TASK,
    }
}

pub struct AppComponent {
    // Component composition
    form: TaskFormComponent,
    filter_bar: FilterBarComponent,
    task_list: TaskListComponent,

    // Application state
    state: AppState,

    // Services
    backend: Arc<dyn Backend>,
    preferences: PreferenceStore,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    // Effect bookkeeping
    should_quit: bool,
    latest_fetch: u64,
    fetches_in_flight: usize,
    saving: bool,
}

impl AppComponent {
    /// Build the app; the theme flag is read from `preferences`
    pub fn new(
        backend: Arc<dyn Backend>,
        preferences: PreferenceStore,
        logger: Logger,
        default_filter: TaskFilter,
    ) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();

        let state = AppState {
            filter: default_filter,
            dark_mode: preferences.load_dark_mode(),
            ..Default::default()
        };
        logger.log(format!(
            "AppComponent: Starting with {} backend, {} mode",
            backend.backend_type(),
            if state.dark_mode { "dark" } else { "light" }
        ));

        let mut app = Self {
            form: TaskFormComponent::new(),
            filter_bar: FilterBarComponent::new(),
            task_list: TaskListComponent::new(),
            state,
            backend,
            preferences,
            task_manager,
            background_action_rx,
            logger,
            should_quit: false,
            latest_fetch: 0,
            fetches_in_flight: 0,
            saving: false,
        };
        app.sync_component_data();
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Check if any background operations are running
    pub fn is_busy(&self) -> bool {
        self.task_manager.task_count() > 0
    }

    /// Initial load of the task list
    pub fn start(&mut self) {
        self.logger.log("AppComponent: Initial fetch".to_string());
        self.fetch_tasks();
        self.sync_component_data();
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        let palette = self.state.palette();
        self.form.update_data(
            self.state.draft_title.clone(),
            self.state.editing.clone(),
            self.state.loading,
            self.state.focus == Focus::Form,
            palette,
        );
        self.filter_bar.update_data(self.state.filter, palette);
        self.task_list
            .update_data(self.state.tasks.clone(), self.state.focus == Focus::List, palette);
    }

    fn refresh_loading(&mut self) {
        self.state.loading = self.fetches_in_flight > 0 || self.saving;
    }

    /// Issue a GET for the active filter. Results of earlier fetches are dropped once this one is issued.
    fn fetch_tasks(&mut self) {
        self.latest_fetch += 1;
        self.fetches_in_flight += 1;
        self.refresh_loading();
        self.logger.log(format!(
            "Fetch #{}: Loading {} tasks",
            self.latest_fetch,
            self.state.filter.label()
        ));
        self.task_manager
            .spawn_fetch(Arc::clone(&self.backend), self.state.filter, self.latest_fetch);
    }

    /// Account for a finished fetch; returns whether it is the newest one
    fn finish_fetch(&mut self, request: u64) -> bool {
        self.fetches_in_flight = self.fetches_in_flight.saturating_sub(1);
        self.refresh_loading();
        if request < self.latest_fetch {
            self.logger
                .log(format!("Fetch #{}: Superseded by #{}, ignoring", request, self.latest_fetch));
            false
        } else {
            true
        }
    }

    fn submit_task(&mut self) {
        if self.state.loading {
            self.logger.log("Task: Submit ignored while loading".to_string());
            return;
        }

        let backend = Arc::clone(&self.backend);
        let title = self.state.draft_title.clone();
        self.saving = true;
        self.refresh_loading();

        match self.state.editing.clone() {
            Some(target) => {
                self.logger
                    .log(format!("Task: Updating task {} title to '{}'", target.id, title));
                let args = UpdateTaskArgs {
                    title,
                    completed: target.completed,
                };
                self.task_manager.spawn_mutation(
                    Operation::Save,
                    format!("Update task {}", target.id),
                    async move { backend.update_task(&target.id, args).await },
                );
            }
            None => {
                self.logger.log(format!("Task: Creating task '{}'", title));
                let args = CreateTaskArgs { title };
                self.task_manager
                    .spawn_mutation(Operation::Save, "Create task".to_string(), async move {
                        backend.create_task(args).await
                    });
            }
        }
    }

    fn toggle_completed(&mut self, task: Task) {
        let backend = Arc::clone(&self.backend);
        let completed = !task.completed;
        self.logger.log(format!(
            "Task: Marking task {} '{}' as {}",
            task.id,
            task.title,
            if completed { "completed" } else { "pending" }
        ));
        let args = UpdateTaskArgs {
            title: task.title,
            completed,
        };
        let id = task.id;
        self.task_manager
            .spawn_mutation(Operation::Toggle, format!("Toggle task {}", id), async move {
                backend.update_task(&id, args).await
            });
    }

    fn toggle_theme(&mut self) {
        self.state.dark_mode = !self.state.dark_mode;
        self.logger.log(format!(
            "Theme: Switched to {} mode",
            if self.state.dark_mode { "dark" } else { "light" }
        ));
        if let Err(e) = self.preferences.persist_dark_mode(self.state.dark_mode) {
            log::warn!("Failed to persist theme preference: {}", e);
            self.logger.log(format!("Theme: Failed to persist preference: {}", e));
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('t') => Action::ToggleTheme,
            KeyCode::Char('r') => Action::Refresh,
            KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => Action::FocusForm,
            KeyCode::Char('?') => Action::ShowHelp(true),
            KeyCode::Char('L') => Action::ShowLogs(true),
            _ => Action::None,
        }
    }

    /// Route a key press to the overlay, the focused component, or the global keymap
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.state.show_help {
            return match key.code {
                KeyCode::Char('?') | KeyCode::Esc => Action::ShowHelp(false),
                _ => Action::None,
            };
        }
        if self.state.show_logs {
            return match key.code {
                KeyCode::Char('L') | KeyCode::Esc => Action::ShowLogs(false),
                _ => Action::None,
            };
        }

        if self.state.focus == Focus::Form {
            return self.form.handle_key_events(key);
        }

        let task_list_action = self.task_list.handle_key_events(key);
        if !matches!(task_list_action, Action::None) {
            return task_list_action;
        }

        let filter_action = self.filter_bar.handle_key_events(key);
        if !matches!(filter_action, Action::None) {
            return filter_action;
        }

        self.handle_global_key(key)
    }

    /// Apply one state transition and trigger the effects it implies
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        let result = match action {
            Action::Quit => {
                self.logger.log("App: Quitting".to_string());
                self.should_quit = true;
                Action::Quit
            }
            Action::SetFilter(filter) => {
                if filter != self.state.filter {
                    self.logger.log(format!(
                        "Filter: {} -> {}",
                        self.state.filter.label(),
                        filter.label()
                    ));
                    self.state.filter = filter;
                    self.fetch_tasks();
                }
                Action::None
            }
            Action::CycleFilter => {
                let next = self.state.filter.next();
                return self.handle_app_action(Action::SetFilter(next));
            }
            Action::Refresh => {
                self.fetch_tasks();
                Action::None
            }
            Action::TasksLoaded { request, tasks } => {
                if self.finish_fetch(request) {
                    self.logger
                        .log(format!("Fetch #{}: Loaded {} tasks", request, tasks.len()));
                    self.state.tasks = tasks;
                    self.state.error_message = None;
                }
                Action::None
            }
            Action::FetchFailed { request } => {
                if self.finish_fetch(request) {
                    self.logger.log(format!("Fetch #{}: Failed", request));
                    self.state.error_message = Some(ERROR_FETCH_TASKS.to_string());
                }
                Action::None
            }
            Action::SubmitTask => {
                self.submit_task();
                Action::None
            }
            Action::TaskSaved => {
                self.saving = false;
                self.refresh_loading();
                self.logger.log("Task: Saved".to_string());
                self.state.draft_title.clear();
                self.state.editing = None;
                self.fetch_tasks();
                Action::None
            }
            Action::ToggleCompleted(task) => {
                self.toggle_completed(task);
                Action::None
            }
            Action::DeleteTask(id) => {
                self.logger.log(format!("Task: Deleting task {}", id));
                let backend = Arc::clone(&self.backend);
                self.task_manager
                    .spawn_mutation(Operation::Delete, format!("Delete task {}", id), async move {
                        backend.delete_task(&id).await
                    });
                Action::None
            }
            Action::MutationCompleted(operation) => {
                self.logger.log(format!("Task: {:?} succeeded, refreshing", operation));
                self.fetch_tasks();
                Action::None
            }
            Action::OperationFailed(operation) => {
                if operation == Operation::Save {
                    self.saving = false;
                    self.refresh_loading();
                }
                let message = error_message_for(operation);
                self.logger.log(format!("Task: {}", message));
                self.state.error_message = Some(message.to_string());
                Action::None
            }
            Action::BeginEdit(task) => {
                self.logger
                    .log(format!("Task: Editing task {} '{}'", task.id, task.title));
                self.state.draft_title = task.title.clone();
                self.state.editing = Some(task);
                self.state.focus = Focus::Form;
                Action::None
            }
            Action::CancelEdit => {
                self.state.editing = None;
                self.state.draft_title.clear();
                self.state.focus = Focus::List;
                Action::None
            }
            Action::InputChar(c) => {
                if !self.state.loading {
                    self.state.draft_title.push(c);
                }
                Action::None
            }
            Action::InputBackspace => {
                if !self.state.loading {
                    self.state.draft_title.pop();
                }
                Action::None
            }
            Action::FocusForm => {
                self.state.focus = Focus::Form;
                Action::None
            }
            Action::FocusList => {
                self.state.focus = Focus::List;
                Action::None
            }
            Action::ToggleTheme => {
                self.toggle_theme();
                Action::None
            }
            Action::ShowHelp(show) => {
                self.state.show_help = show;
                Action::None
            }
            Action::ShowLogs(show) => {
                self.state.show_logs = show;
                Action::None
            }
            // Selection moves are consumed by the task list
            Action::NextTask | Action::PreviousTask | Action::None => Action::None,
        };

        self.sync_component_data();
        result
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        let cleaned = self.task_manager.cleanup_finished_tasks();
        if cleaned > 0 {
            log::debug!("Cleaned up {} finished background tasks", cleaned);
        }

        actions
    }

    /// Apply every pending background result
    pub fn apply_background_actions(&mut self) -> bool {
        let actions = self.process_background_actions();
        let applied = !actions.is_empty();
        for action in actions {
            self.handle_app_action(action);
        }
        applied
    }

    /// Wait for all in-flight requests, including the refetches they trigger, and apply their results
    pub async fn run_until_idle(&mut self) {
        loop {
            self.task_manager.join_all().await;
            if !self.apply_background_actions() && self.task_manager.task_count() == 0 {
                break;
            }
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> Action {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.task_list.update(action);
        self.handle_app_action(action)
    }

    fn render_header(&self, f: &mut Frame, rect: Rect) {
        let palette = self.state.palette();
        let toggle = if self.state.dark_mode {
            BUTTON_LIGHT_MODE
        } else {
            BUTTON_DARK_MODE
        };
        let toggle_text = format!("[t] {}", toggle);
        let chunks = Layout::horizontal([Constraint::Min(0), Constraint::Length(toggle_text.len() as u16)]).split(rect);

        f.render_widget(
            Paragraph::new(Line::from(Span::styled(APP_TITLE, palette.accent()))),
            chunks[0],
        );
        f.render_widget(Paragraph::new(Span::styled(toggle_text, palette.muted())), chunks[1]);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.task_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = self.state.palette();
        f.render_widget(Block::default().style(palette.base()), rect);

        let layout = LayoutManager::main_layout(rect);
        self.render_header(f, layout.header);
        self.form.render(f, layout.form);
        self.filter_bar.render(f, layout.filters);
        StatusBar::render(
            f,
            layout.status,
            self.state.loading,
            self.state.error_message.as_deref(),
            &palette,
        );
        self.task_list.render(f, layout.tasks);
        ShortcutBar::render(f, layout.footer, self.state.focus == Focus::Form, &palette);

        if self.state.show_help {
            HelpPanel::render(f, &palette);
        } else if self.state.show_logs {
            LogsPanel::render(
                f,
                &self.task_manager.running_descriptions(),
                &self.logger.get_logs(),
                &palette,
            );
        }
    }
}
