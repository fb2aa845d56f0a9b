use bevy::asset::LoadState;
use bevy::prelude::*;

use constants::paths::RELATIVE_MANIFEST_PATH;

use crate::engine::assets::viewer_manifest::ViewerManifest;
use crate::engine::core::app_state::ViewerOptions;
use crate::engine::loading::model_loader::ModelLoader;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<ViewerManifest>>,
}

/// Start the loading process.
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    manifest_loader.handle = Some(asset_server.load(RELATIVE_MANIFEST_PATH));
}

/// Resolve the manifest and kick off the model load.
///
/// A missing or unparseable manifest is not fatal: the built-in defaults are
/// used instead, keeping the viewer on the log-and-continue policy.
pub fn load_manifest_system(
    mut progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut model_loader: ResMut<ModelLoader>,
    options: Res<ViewerOptions>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<ViewerManifest>>,
) {
    if progress.manifest_loaded {
        return;
    }

    let Some(handle) = &manifest_loader.handle else {
        return;
    };

    let manifest = match asset_server.get_load_state(handle) {
        Some(LoadState::Failed(err)) => {
            error!("manifest failed to load: {err}; falling back to defaults");
            ViewerManifest::default()
        }
        _ => match manifests.get(handle) {
            Some(manifest) => {
                println!("✓ Viewer manifest loaded");
                manifest.clone()
            }
            // Still pending.
            None => return,
        },
    };

    let model_path = options
        .model_override
        .clone()
        .unwrap_or_else(|| manifest.model_path.clone());

    println!("Loading model from: {model_path}");
    model_loader.handle = Some(asset_server.load(model_path));

    commands.insert_resource(manifest);
    progress.manifest_loaded = true;
}
