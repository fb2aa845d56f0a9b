//! Viewer camera: fixed HDR camera with bloom, orbit controls in debug mode.

pub mod viewport_camera;

pub use viewport_camera::{ViewportCamera, camera_controller, spawn_viewer_camera};
