//! Renderer integration: the render-request flag gating redraws.

/// Coalescing render-request flag and its per-tick flush system.
pub mod render_request;
