//! The particle field and its per-frame animation.
//!
//! `ParticleField` flattens loaded mesh vertex buffers into a single point
//! cloud with an immutable origin snapshot; the animator displaces every
//! point relative to that snapshot each tick.

/// Accumulated animation clock and per-tick displacement systems.
pub mod animator;

/// Flat point-cloud container built from per-mesh vertex buffers.
pub mod field;

pub use animator::{AnimationClock, animate_particles};
pub use field::{ParticleCloud, ParticleCloudHandles, ParticleField};
