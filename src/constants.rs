//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Remote service
/// Fallback task service URL when neither the environment nor the config file sets one
pub const DEFAULT_API_URL: &str = "https://todo-backend-fastapiuvicorn-main-app.onrender.com/";
/// Environment variable overriding the configured task service URL
pub const API_URL_ENV: &str = "TASKLIST_API_URL";

// Persisted preferences
pub const APP_DIR_NAME: &str = "tasklist";
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";
pub const LOG_FILE_NAME: &str = "tasklist.log";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_FILE_NAME: &str = "tasklist.toml";
/// Key under which the theme flag is stored
pub const DARK_MODE_KEY: &str = "darkMode";

// Error Messages
pub const ERROR_FETCH_TASKS: &str = "Failed to fetch tasks";
pub const ERROR_SAVE_TASK: &str = "Failed to save task";
pub const ERROR_UPDATE_TASK: &str = "Failed to update task";
pub const ERROR_DELETE_TASK: &str = "Failed to delete task";

// UI Text
pub const APP_TITLE: &str = "To-Do List";
pub const INPUT_PLACEHOLDER: &str = "Enter task title";
pub const BUTTON_ADD_TASK: &str = "Add Task";
pub const BUTTON_UPDATE_TASK: &str = "Update Task";
pub const BUTTON_CANCEL: &str = "Cancel";
pub const BUTTON_COMPLETE: &str = "Complete";
pub const BUTTON_UNDO: &str = "Undo";
pub const BUTTON_EDIT: &str = "Edit";
pub const BUTTON_DELETE: &str = "Delete";
pub const BUTTON_DARK_MODE: &str = "Dark Mode";
pub const BUTTON_LIGHT_MODE: &str = "Light Mode";
pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_LIST_TEXT: &str = "No tasks to show. Press 'a' to add one or 'r' to refresh.";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc' or 'L' to close";

/// Maximum number of in-memory log entries kept for the logs panel
pub const MAX_LOG_ENTRIES: usize = 500;
/// Upper bound accepted for `api.request_timeout_secs`
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;
