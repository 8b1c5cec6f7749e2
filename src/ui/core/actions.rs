use crate::backend::{Task, TaskFilter, TaskId};

/// Which part of the screen receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Form,
}

/// Which network operation a result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Save,
    Toggle,
    Delete,
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NextTask,
    PreviousTask,
    FocusForm,
    FocusList,

    // Form editing
    InputChar(char),
    InputBackspace,

    // Task operations
    SubmitTask,
    ToggleCompleted(Task),
    BeginEdit(Task),
    CancelEdit,
    DeleteTask(TaskId),

    // View operations
    SetFilter(TaskFilter),
    CycleFilter,
    ToggleTheme,
    Refresh,

    // Background results
    TasksLoaded {
        request: u64,
        tasks: Vec<Task>,
    },
    FetchFailed {
        request: u64,
    },
    TaskSaved,
    MutationCompleted(Operation),
    OperationFailed(Operation),

    // UI operations
    ShowHelp(bool),
    ShowLogs(bool),

    // App control
    Quit,
    None,
}
