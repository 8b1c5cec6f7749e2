//! Reusable UI components

pub mod filter_bar;
pub mod help_panel;
pub mod status_bar;
pub mod task_form;
pub mod task_list_component;

// Component exports
pub use filter_bar::FilterBarComponent;
pub use help_panel::{HelpPanel, LogsPanel};
pub use status_bar::{ShortcutBar, StatusBar};
pub use task_form::TaskFormComponent;
pub use task_list_component::TaskListComponent;
