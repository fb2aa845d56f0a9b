/// Scene manifest location under the asset root.
pub const RELATIVE_MANIFEST_PATH: &str = "viewer_manifest.json";

/// Model used when the manifest is missing or does not name one.
pub const DEFAULT_MODEL_PATH: &str = "models/shiba.glb";
