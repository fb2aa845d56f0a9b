//! Asset loading and initialisation systems for the particle visualization.
//!
//! Manages the loading pipeline from manifest parsing through glTF model
//! loading to particle-field construction with progress tracking.

/// Viewer manifest loading and model-load kickoff from JSON configuration.
pub mod manifest_loader;

/// glTF model load polling with explicit success/failure handling.
pub mod model_loader;

/// Particle field construction and drawable spawning once the model is ready.
pub mod particle_creator;

/// Loading progress tracking resource for state transitions.
pub mod progress;
