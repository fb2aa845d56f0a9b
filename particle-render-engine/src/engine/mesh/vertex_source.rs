use bevy::gltf::{Gltf, GltfMesh, GltfNode};
use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;
use thiserror::Error;

/// What a scene-graph node contributes to the particle field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Carries mesh geometry; the traversal extracts its vertex positions.
    Mesh(Handle<GltfMesh>),
    /// Pure grouping node with children only.
    Group,
    /// Cameras, lights, empties. Ignored.
    Other,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("mesh has no position attribute")]
    MissingPositions,
    #[error("position attribute is not a float vector format")]
    UnsupportedFormat,
}

pub fn classify_node(node: &GltfNode) -> NodeKind {
    if let Some(mesh) = &node.mesh {
        NodeKind::Mesh(mesh.clone())
    } else if !node.children.is_empty() {
        NodeKind::Group
    } else {
        NodeKind::Other
    }
}

/// Collect one position buffer per mesh primitive across the whole scene.
///
/// Only nodes classified as `NodeKind::Mesh` contribute. Primitives whose
/// position data is missing or in an unexpected format are skipped with a
/// warning; the cloud simply loses those points.
pub fn collect_position_buffers(
    gltf: &Gltf,
    nodes: &Assets<GltfNode>,
    gltf_meshes: &Assets<GltfMesh>,
    meshes: &Assets<Mesh>,
) -> Vec<Vec<[f32; 3]>> {
    let mut buffers = Vec::new();

    for node_handle in &gltf.nodes {
        let Some(node) = nodes.get(node_handle) else {
            continue;
        };

        let NodeKind::Mesh(mesh_handle) = classify_node(node) else {
            continue;
        };
        let Some(gltf_mesh) = gltf_meshes.get(&mesh_handle) else {
            continue;
        };

        for primitive in &gltf_mesh.primitives {
            let Some(mesh) = meshes.get(&primitive.mesh) else {
                continue;
            };
            match positions_from_mesh(mesh) {
                Ok(positions) => buffers.push(positions),
                Err(err) => {
                    warn!("skipping primitive '{}': {}", primitive.name, err);
                }
            }
        }
    }

    buffers
}

/// Read a mesh's vertex positions as triples.
pub fn positions_from_mesh(mesh: &Mesh) -> Result<Vec<[f32; 3]>, ExtractError> {
    let values = mesh
        .attribute(Mesh::ATTRIBUTE_POSITION)
        .ok_or(ExtractError::MissingPositions)?;
    positions_from_values(values)
}

/// Interpret a position attribute as triples. Flat scalar buffers are grouped
/// into triples with missing coordinates defaulting to 0.0.
pub fn positions_from_values(values: &VertexAttributeValues) -> Result<Vec<[f32; 3]>, ExtractError> {
    match values {
        VertexAttributeValues::Float32x3(positions) => Ok(positions.clone()),
        VertexAttributeValues::Float32(scalars) => Ok(triples_from_scalars(scalars)),
        _ => Err(ExtractError::UnsupportedFormat),
    }
}

/// Group a raw scalar buffer into triples, padding a trailing partial triple
/// with zeroes.
pub fn triples_from_scalars(scalars: &[f32]) -> Vec<[f32; 3]> {
    scalars
        .chunks(3)
        .map(|chunk| {
            [
                chunk.first().copied().unwrap_or(0.0),
                chunk.get(1).copied().unwrap_or(0.0),
                chunk.get(2).copied().unwrap_or(0.0),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::PrimitiveTopology;
    use bevy::render::render_asset::RenderAssetUsages;

    fn mesh_with_positions(positions: Vec<[f32; 3]>) -> Mesh {
        let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh
    }

    #[test]
    fn test_positions_from_mesh_reads_triples() {
        let mesh = mesh_with_positions(vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let positions = positions_from_mesh(&mesh).unwrap();

        assert_eq!(positions, vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    }

    #[test]
    fn test_missing_positions_is_an_error() {
        let mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());

        assert!(matches!(
            positions_from_mesh(&mesh),
            Err(ExtractError::MissingPositions)
        ));
    }

    #[test]
    fn test_unsupported_format_is_an_error() {
        let values = VertexAttributeValues::Float32x2(vec![[0.0, 0.0]]);

        assert!(matches!(
            positions_from_values(&values),
            Err(ExtractError::UnsupportedFormat)
        ));
    }

    #[test]
    fn test_flat_scalar_values_are_grouped_and_padded() {
        let values = VertexAttributeValues::Float32(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let positions = positions_from_values(&values).unwrap();

        assert_eq!(positions, vec![[1.0, 2.0, 3.0], [4.0, 5.0, 0.0]]);
    }

    #[test]
    fn test_triples_from_scalars_pads_partial_triple() {
        let triples = triples_from_scalars(&[1.0, 2.0, 3.0, 4.0]);

        assert_eq!(triples, vec![[1.0, 2.0, 3.0], [4.0, 0.0, 0.0]]);
    }

    #[test]
    fn test_triples_from_empty_scalars() {
        assert!(triples_from_scalars(&[]).is_empty());
    }
}
