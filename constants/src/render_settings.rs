use bevy::prelude::*;

/// Bloom pass parameters, mapped onto the HDR camera's bloom component.
#[derive(Debug, Clone, Copy)]
pub struct BloomConfig {
    pub strength: f32,
    pub radius: f32,
    pub threshold: f32,
}

pub const BLOOM_SETTINGS: BloomConfig = BloomConfig {
    strength: 1.0,
    radius: 0.1,
    threshold: 0.1,
};

/// Fixed viewer camera placement, looking at the origin.
pub const CAMERA_POSITION: Vec3 = Vec3::new(2.0, 1.0, 3.0);
pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

/// Particle point colour (sRGB).
pub const PARTICLE_COLOUR: [f32; 3] = [1.0, 0.647, 0.0];

pub const AMBIENT_BRIGHTNESS: f32 = 300.0;

/// Axis gizmo line length for the debug overlay.
pub const AXIS_GIZMO_LENGTH: f32 = 1.0;
