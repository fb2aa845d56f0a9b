use bevy::prelude::*;

use constants::animation::AnimationSettings;

/// Marker for the spawned particle-cloud entity.
#[derive(Component)]
pub struct ParticleCloud;

/// Handle to the point-list mesh the animator rewrites each frame.
#[derive(Resource)]
pub struct ParticleCloudHandles {
    pub mesh: Handle<Mesh>,
}

/// Flat point cloud flattened from one or more mesh vertex buffers, plus the
/// origin snapshot the animation is computed against.
///
/// Both buffers are fixed-size after construction and always equal in length.
/// The origin is never written after the snapshot is taken.
#[derive(Resource, Default)]
pub struct ParticleField {
    positions: Vec<[f32; 3]>,
    origin: Vec<[f32; 3]>,
}

impl ParticleField {
    /// Flatten per-mesh vertex buffers into a single contiguous point cloud.
    ///
    /// Each buffer is copied into its own correctly-sized region in input
    /// order; empty buffers contribute nothing. The origin snapshot is taken
    /// immediately after population.
    pub fn from_buffers(buffers: &[Vec<[f32; 3]>]) -> Self {
        let total_points: usize = buffers.iter().map(|buffer| buffer.len()).sum();

        let mut positions = Vec::with_capacity(total_points);
        for buffer in buffers {
            positions.extend_from_slice(buffer);
        }

        let origin = positions.clone();
        Self { positions, origin }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn origin(&self) -> &[[f32; 3]] {
        &self.origin
    }

    /// Recompute every position from the origin snapshot for the given clock
    /// value. Pure with respect to (origin, clock); empty fields are a no-op.
    pub fn displace(&mut self, clock: f32, settings: &AnimationSettings) {
        super::animator::displace_points(&self.origin, clock, settings, &mut self.positions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::animation::ANIMATION_SETTINGS;

    #[test]
    fn test_from_buffers_concatenates_in_order() {
        let buffers = vec![
            vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
            vec![[2.0, 2.0, 2.0]],
            vec![[3.0, 3.0, 3.0], [4.0, 4.0, 4.0], [5.0, 5.0, 5.0]],
        ];

        let field = ParticleField::from_buffers(&buffers);

        assert_eq!(field.len(), 6);
        assert_eq!(field.positions()[0], [0.0, 0.0, 0.0]);
        assert_eq!(field.positions()[2], [2.0, 2.0, 2.0]);
        assert_eq!(field.positions()[5], [5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_origin_matches_positions_after_construction() {
        let buffers = vec![vec![[1.0, 0.0, 0.0]]];
        let field = ParticleField::from_buffers(&buffers);

        assert_eq!(field.positions(), field.origin());
    }

    #[test]
    fn test_empty_buffers_contribute_nothing() {
        let buffers = vec![vec![], vec![[1.0, 2.0, 3.0]], vec![]];
        let field = ParticleField::from_buffers(&buffers);

        assert_eq!(field.len(), 1);
        assert_eq!(field.positions()[0], [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_no_buffers_yields_empty_field() {
        let field = ParticleField::from_buffers(&[]);

        assert!(field.is_empty());
        assert_eq!(field.len(), 0);
    }

    #[test]
    fn test_displace_on_empty_field_is_a_no_op() {
        let mut field = ParticleField::from_buffers(&[]);
        field.displace(1.0, &ANIMATION_SETTINGS);

        assert!(field.is_empty());
    }

    #[test]
    fn test_displace_leaves_origin_untouched() {
        let buffers = vec![vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]];
        let mut field = ParticleField::from_buffers(&buffers);

        field.displace(3.2, &ANIMATION_SETTINGS);
        field.displace(7.9, &ANIMATION_SETTINGS);

        assert_eq!(field.origin(), &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        assert_eq!(field.len(), field.origin().len());
    }
}
