use bevy::gltf::{Gltf, GltfMesh, GltfNode};
use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;

use constants::render_settings::PARTICLE_COLOUR;

use crate::engine::assets::viewer_manifest::ViewerManifest;
use crate::engine::loading::model_loader::ModelLoader;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::mesh::point_mesh::create_particle_mesh;
use crate::engine::mesh::vertex_source::collect_position_buffers;
use crate::engine::point_cloud::field::{ParticleCloud, ParticleCloudHandles, ParticleField};
use crate::engine::render::render_request::RenderRequest;

/// Build the particle field and spawn its drawable once the model and all of
/// its mesh sub-assets are available.
pub fn create_particles_when_ready(
    mut progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    model_loader: Res<ModelLoader>,
    gltf_assets: Res<Assets<Gltf>>,
    node_assets: Res<Assets<GltfNode>>,
    gltf_mesh_assets: Res<Assets<GltfMesh>>,
    manifest: Option<Res<ViewerManifest>>,
    mut render_request: ResMut<RenderRequest>,
) {
    if progress.particles_created || !progress.model_loaded {
        return;
    }

    let Some(handle) = &model_loader.handle else {
        return;
    };
    let Some(gltf) = gltf_assets.get(handle) else {
        return;
    };

    let buffers = collect_position_buffers(gltf, &node_assets, &gltf_mesh_assets, &meshes);
    let field = ParticleField::from_buffers(&buffers);

    if field.is_empty() {
        // Valid degenerate state: nothing to draw, animation ticks are no-ops.
        warn!("model contains no usable meshes; particle field is empty");
        progress.particles_created = true;
        return;
    }

    println!(
        "✓ Particle field built: {} points from {} mesh buffers",
        field.len(),
        buffers.len()
    );

    let placement = manifest
        .map(|m| m.placement_transform())
        .unwrap_or_else(|| ViewerManifest::default().placement_transform());

    spawn_particle_cloud(
        &mut commands,
        &mut meshes,
        &mut materials,
        &field,
        placement,
    );

    commands.insert_resource(field);
    progress.particles_created = true;
    render_request.set();
}

fn spawn_particle_cloud(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    field: &ParticleField,
    placement: Transform,
) {
    let mesh_handle = meshes.add(create_particle_mesh(field.positions()));

    commands.spawn((
        Mesh3d(mesh_handle.clone()),
        MeshMaterial3d(materials.add(particle_material())),
        placement,
        Visibility::Visible,
        ParticleCloud,
        // Positions are rewritten every frame without touching the cached
        // Aabb, so culling must stay off.
        NoFrustumCulling,
    ));

    commands.insert_resource(ParticleCloudHandles { mesh: mesh_handle });

    println!("Particle cloud entity spawned as point-list drawable");
}

/// Unlit orange; bright enough against the black clear colour to clear the
/// bloom prefilter threshold.
fn particle_material() -> StandardMaterial {
    let [r, g, b] = PARTICLE_COLOUR;

    StandardMaterial {
        base_color: Color::srgb(r, g, b),
        unlit: true,
        ..default()
    }
}
