//! Core UI functionality for tasklist.
//!
//! This module contains the building blocks every component relies on.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Keyboard and resize input polling
//! - [`task_manager`] - Background network calls reported back as actions
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait and turn keys into [`Action`]s
//! 2. **Actions** are applied to the app state one at a time on the event loop
//! 3. **Effects** (network calls) are spawned through the [`TaskManager`]
//! 4. **Results** come back as further actions over a channel

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::{Action, Focus, Operation};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::TaskManager;
