//! Vertex extraction from loaded glTF scenes and point-mesh construction.

/// Point-list mesh creation for the particle drawable.
pub mod point_mesh;

/// Scene-node classification and position-buffer extraction.
pub mod vertex_source;
