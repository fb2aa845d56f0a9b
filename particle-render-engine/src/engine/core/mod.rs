//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation.

/// Application setup and plugin configuration for the Bevy engine.
pub mod app_setup;

/// Application state machine, viewer options, and loading transitions.
pub mod app_state;

/// Window configuration: title, vsync, reactive redraw mode.
pub mod window_config;
