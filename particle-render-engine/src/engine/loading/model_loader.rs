use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct ModelLoader {
    pub handle: Option<Handle<Gltf>>,
}

/// Poll the model load until it either completes with all sub-assets or
/// fails.
///
/// Failure is logged and recorded, never propagated: the visualization
/// degrades to an empty particle field and the builder is left un-invoked.
pub fn poll_model_load(
    mut progress: ResMut<LoadingProgress>,
    model_loader: Res<ModelLoader>,
    asset_server: Res<AssetServer>,
) {
    if !progress.manifest_loaded || progress.model_loaded || progress.model_failed {
        return;
    }

    let Some(handle) = &model_loader.handle else {
        return;
    };

    match asset_server.get_load_state(handle) {
        Some(LoadState::Failed(err)) => {
            error!("model failed to load: {err}");
            progress.model_failed = true;
        }
        _ => {
            // Meshes arrive as dependencies; wait for the full set.
            if asset_server.is_loaded_with_dependencies(handle) {
                println!("✓ Model loaded");
                progress.model_loaded = true;
            }
        }
    }
}
