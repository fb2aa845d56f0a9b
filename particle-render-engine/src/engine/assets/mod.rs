//! Scene configuration assets.

/// JSON viewer manifest: model path and cloud placement.
pub mod viewer_manifest;
