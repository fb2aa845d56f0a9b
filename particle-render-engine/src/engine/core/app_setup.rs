use std::time::Duration;

use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::winit::{UpdateMode, WinitSettings};
use bevy_common_assets::json::JsonAssetPlugin;

use constants::render_settings::AMBIENT_BRIGHTNESS;

use crate::engine::assets::viewer_manifest::ViewerManifest;
use crate::engine::camera::viewport_camera::{
    ViewportCamera, camera_controller, spawn_viewer_camera,
};
use crate::engine::core::app_state::{AppState, ViewerOptions, debug_enabled, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::manifest_loader::{ManifestLoader, load_manifest_system, start_loading};
use crate::engine::loading::model_loader::{ModelLoader, poll_model_load};
use crate::engine::loading::particle_creator::create_particles_when_ready;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::point_cloud::animator::{AnimationClock, animate_particles};
use crate::engine::point_cloud::field::ParticleField;
use crate::engine::render::render_request::{RenderRequest, flush_render_requests};
use crate::engine::scene::gizmos::draw_axis_gizmo;
use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_fps_overlay};
use crate::engine::systems::window_events::request_render_on_resize;

pub fn create_app(options: ViewerOptions) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers ViewerManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<ViewerManifest>::new(&["json"]))
        .init_state::<AppState>();

    // Reactive redraw mode: frames are driven by render requests, with a
    // short timeout so the loading systems keep polling.
    app.insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive(Duration::from_millis(100)),
        unfocused_mode: UpdateMode::reactive_low_power(Duration::from_millis(250)),
    });

    app.insert_resource(ClearColor(Color::BLACK))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: AMBIENT_BRIGHTNESS,
            ..default()
        });

    // Initialise resources early
    app.insert_resource(options)
        .init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<ModelLoader>()
        .init_resource::<ParticleField>()
        .init_resource::<AnimationClock>()
        .init_resource::<RenderRequest>()
        .init_resource::<ViewportCamera>();

    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                load_manifest_system,
                poll_model_load,
                create_particles_when_ready,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            animate_particles.run_if(in_state(AppState::Running)),
        );

    // Debug overlay systems: orbit camera, FPS readout, axis gizmo.
    app.add_systems(
        Update,
        (camera_controller, fps_text_update_system, draw_axis_gizmo).run_if(debug_enabled),
    );

    app.add_systems(Update, request_render_on_resize)
        .add_systems(PostUpdate, flush_render_requests);

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

/// Startup: camera and, in debug mode, the FPS overlay.
fn setup(mut commands: Commands, options: Res<ViewerOptions>) {
    spawn_viewer_camera(&mut commands);

    if options.debug {
        spawn_fps_overlay(&mut commands);
    }
}
