//! Local persistence.
//!
//! Only user preferences live on disk; tasks are always read from the
//! remote service.

pub mod preferences;

pub use preferences::{PreferenceError, PreferenceStore};
