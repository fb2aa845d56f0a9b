use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// Command-line options carried into the app as a resource.
#[derive(Resource, Debug, Clone, Default)]
pub struct ViewerOptions {
    pub debug: bool,
    pub model_override: Option<String>,
}

/// Run condition for the debug overlay systems.
pub fn debug_enabled(options: Res<ViewerOptions>) -> bool {
    options.debug
}

#[derive(Component)]
pub struct FpsText;

/// Transition to Running once the particle field exists, or once a failed
/// model load has been recorded (empty-field degenerate state).
pub fn transition_to_running(
    progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if progress.particles_created || progress.model_failed {
        println!("→ Transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
