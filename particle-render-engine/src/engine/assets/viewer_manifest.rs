use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use constants::paths::DEFAULT_MODEL_PATH;

/// How the particle cloud is placed in the scene: rotated to lie flat and
/// lifted off the ground plane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementConfig {
    #[serde(default = "default_rotation_x_degrees")]
    pub rotation_x_degrees: f32,
    #[serde(default = "default_y_offset")]
    pub y_offset: f32,
}

fn default_rotation_x_degrees() -> f32 {
    -90.0
}

fn default_y_offset() -> f32 {
    0.4
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            rotation_x_degrees: default_rotation_x_degrees(),
            y_offset: default_y_offset(),
        }
    }
}

/// Viewer manifest as a Bevy asset. Mirrors the JSON structure exactly and is
/// cloned into a resource once loaded.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct ViewerManifest {
    pub model_path: String,
    #[serde(default)]
    pub placement: PlacementConfig,
}

impl Default for ViewerManifest {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            placement: PlacementConfig::default(),
        }
    }
}

impl ViewerManifest {
    /// Transform applied to the spawned particle cloud entity.
    pub fn placement_transform(&self) -> Transform {
        Transform {
            translation: Vec3::new(0.0, self.placement.y_offset, 0.0),
            rotation: Quat::from_rotation_x(self.placement.rotation_x_degrees.to_radians()),
            scale: Vec3::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_parses_with_full_placement() {
        let manifest: ViewerManifest = serde_json::from_str(
            r#"{
                "model_path": "models/shiba.glb",
                "placement": { "rotation_x_degrees": -90.0, "y_offset": 0.4 }
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.model_path, "models/shiba.glb");
        assert_eq!(manifest.placement.y_offset, 0.4);
    }

    #[test]
    fn test_missing_placement_falls_back_to_defaults() {
        let manifest: ViewerManifest =
            serde_json::from_str(r#"{ "model_path": "models/other.glb" }"#).unwrap();

        assert_eq!(manifest.placement.rotation_x_degrees, -90.0);
        assert_eq!(manifest.placement.y_offset, 0.4);
    }

    #[test]
    fn test_placement_transform_rotates_and_lifts() {
        let manifest = ViewerManifest::default();
        let transform = manifest.placement_transform();

        assert_eq!(transform.translation, Vec3::new(0.0, 0.4, 0.0));

        let expected = Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2);
        assert!(transform.rotation.angle_between(expected) < 1e-6);
    }
}
