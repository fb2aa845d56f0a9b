//! Runtime support systems.

/// FPS text overlay updates for the debug overlay.
pub mod fps_tracking;

/// Window event handling: resize triggers a render request.
pub mod window_events;
