use bevy::prelude::*;

use constants::animation::{ANIMATION_SETTINGS, AnimationSettings};

use crate::engine::point_cloud::field::{ParticleCloudHandles, ParticleField};
use crate::engine::render::render_request::RenderRequest;

/// Accumulated animation time driving the oscillation phase.
///
/// Advanced once per tick by `delta * damping_factor`; never reset while the
/// visualization is alive.
#[derive(Resource, Default)]
pub struct AnimationClock {
    elapsed: f32,
}

impl AnimationClock {
    pub fn advance(&mut self, delta: f32, settings: &AnimationSettings) {
        self.elapsed += delta * settings.damping_factor;
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

/// Write displaced positions for every point, relative to the origin snapshot.
///
/// The raw point index feeds the phase directly, so neighbouring points drift
/// out of step instead of forming a uniform wave.
pub fn displace_points(
    origin: &[[f32; 3]],
    clock: f32,
    settings: &AnimationSettings,
    positions: &mut [[f32; 3]],
) {
    debug_assert_eq!(origin.len(), positions.len());

    for (i, (from, to)) in origin.iter().zip(positions.iter_mut()).enumerate() {
        let phase = i as f32 + clock * settings.phase_scale;
        to[0] = from[0] + phase.sin() * settings.amplitude;
        to[1] = from[1] + phase.cos() * settings.amplitude;
        to[2] = from[2] + phase.cos() * settings.amplitude;
    }
}

/// Per-tick animation: advance the clock, displace the field, push the new
/// positions into the mesh asset, and request a redraw.
///
/// `Assets::get_mut` flags the mesh as modified, which is what schedules the
/// GPU-side re-upload before the next draw.
pub fn animate_particles(
    time: Res<Time>,
    mut clock: ResMut<AnimationClock>,
    mut field: ResMut<ParticleField>,
    handles: Option<Res<ParticleCloudHandles>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut render_request: ResMut<RenderRequest>,
) {
    clock.advance(time.delta_secs(), &ANIMATION_SETTINGS);

    if field.is_empty() {
        return;
    }

    field.displace(clock.elapsed(), &ANIMATION_SETTINGS);

    let Some(handles) = handles else {
        return;
    };
    let Some(mesh) = meshes.get_mut(&handles.mesh) else {
        return;
    };

    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, field.positions().to_vec());
    render_request.set();
}
