//! tasklist - A terminal client for a REST to-do service
//!
//! This library provides a terminal interface for listing, creating,
//! editing, completing, filtering and deleting tasks held by a remote task
//! service, with a persisted light/dark preference.
//!
//! # Modules
//!
//! * [`backend`] - Task service client and data types
//! * [`config`] - Application configuration management
//! * [`storage`] - Persisted user preferences
//! * [`ui`] - Terminal user interface components

/// Task service abstraction and REST client
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Persisted preferences
pub mod storage;

/// Terminal user interface components and rendering
pub mod ui;

pub use backend::{Task, TaskFilter, TaskId};
