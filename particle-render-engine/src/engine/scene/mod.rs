//! Scene furniture for the debug overlay.

/// World-axis gizmo lines.
pub mod gizmos;
