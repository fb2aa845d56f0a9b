use bevy::prelude::*;
use bevy::{render::mesh::PrimitiveTopology, render::render_asset::RenderAssetUsages};

/// Create the point-list mesh the particle field renders through.
///
/// Usages keep the main-world copy alive so the animator can rewrite the
/// position attribute every frame.
pub fn create_particle_mesh(positions: &[[f32; 3]]) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions.to_vec());
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    #[test]
    fn test_particle_mesh_carries_all_positions() {
        let positions = vec![[0.0, 0.0, 0.0], [1.0, 2.0, 3.0], [-1.0, -2.0, -3.0]];
        let mesh = create_particle_mesh(&positions);

        let attribute = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .expect("position attribute must exist");
        match attribute {
            VertexAttributeValues::Float32x3(values) => assert_eq!(values, &positions),
            other => panic!("unexpected attribute format: {} values", other.len()),
        }
    }

    #[test]
    fn test_empty_particle_mesh_is_valid() {
        let mesh = create_particle_mesh(&[]);
        assert_eq!(mesh.count_vertices(), 0);
    }
}
