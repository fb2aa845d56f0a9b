/// Per-frame oscillation parameters for the particle field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSettings {
    /// Scale applied to frame delta time before accumulating into the clock.
    pub damping_factor: f32,
    /// Scale applied to the accumulated clock inside the per-point phase.
    pub phase_scale: f32,
    /// Displacement magnitude in world units.
    pub amplitude: f32,
}

pub const ANIMATION_SETTINGS: AnimationSettings = AnimationSettings {
    damping_factor: 0.1,
    phase_scale: 0.05,
    amplitude: 0.005,
};
