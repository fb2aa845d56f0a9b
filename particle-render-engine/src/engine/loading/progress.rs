use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub model_loaded: bool,
    pub model_failed: bool,
    pub particles_created: bool,
}
