use bevy::core_pipeline::bloom::{Bloom, BloomCompositeMode, BloomPrefilter};
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use constants::render_settings::{
    BLOOM_SETTINGS, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_POSITION,
};

use crate::engine::render::render_request::RenderRequest;

/// Orbit state around the focus point, derived from the fixed start position.
#[derive(Resource)]
pub struct ViewportCamera {
    pub focus_point: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl ViewportCamera {
    /// Derive orbit angles from a world-space camera position looking at the
    /// origin.
    pub fn from_position(position: Vec3) -> Self {
        let distance = position.length().max(f32::EPSILON);
        Self {
            focus_point: Vec3::ZERO,
            yaw: position.x.atan2(position.z),
            pitch: (position.y / distance).asin(),
            distance,
        }
    }

    pub fn position(&self) -> Vec3 {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0);
        self.focus_point + rotation * (Vec3::Z * self.distance)
    }
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self::from_position(CAMERA_POSITION)
    }
}

pub fn spawn_viewer_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_translation(CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        bloom_component(),
    ));
}

/// Map the fixed bloom parameters onto the camera's bloom pass.
fn bloom_component() -> Bloom {
    Bloom {
        intensity: BLOOM_SETTINGS.strength,
        prefilter: BloomPrefilter {
            threshold: BLOOM_SETTINGS.threshold,
            threshold_softness: BLOOM_SETTINGS.radius,
        },
        composite_mode: BloomCompositeMode::Additive,
        ..Bloom::NATURAL
    }
}

/// Debug-mode orbit controller: left-drag orbits, wheel dollies. Every change
/// requests a redraw, mirroring the render-on-change wiring of the overlay.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut viewport: ResMut<ViewportCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    mut render_request: ResMut<RenderRequest>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    let mut changed = false;

    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        let yaw_sens = 0.0050;
        let pitch_sens = 0.0045;
        viewport.yaw -= mouse_delta.x * yaw_sens;
        viewport.pitch += mouse_delta.y * pitch_sens;
        viewport.pitch = viewport.pitch.clamp(-1.55, 1.55);
        changed = true;
    }

    if scroll_accum.abs() > f32::EPSILON {
        let dolly_speed = (viewport.distance * 0.1).clamp(0.05, 10.0);
        viewport.distance = (viewport.distance - scroll_accum * dolly_speed).max(CAMERA_NEAR);
        changed = true;
    }

    if changed {
        camera_transform.translation = viewport.position();
        camera_transform.look_at(viewport.focus_point, Vec3::Y);
        render_request.set();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_position_recovers_the_position() {
        let viewport = ViewportCamera::from_position(CAMERA_POSITION);
        let recovered = viewport.position();

        assert!((recovered - CAMERA_POSITION).length() < 1e-4);
    }

    #[test]
    fn test_distance_matches_position_length() {
        let viewport = ViewportCamera::from_position(Vec3::new(2.0, 1.0, 3.0));

        assert!((viewport.distance - Vec3::new(2.0, 1.0, 3.0).length()).abs() < 1e-6);
    }
}
