use bevy::prelude::*;

use constants::render_settings::AXIS_GIZMO_LENGTH;

/// Draw world axes at the origin: X red, Y green, Z blue.
pub fn draw_axis_gizmo(mut gizmos: Gizmos) {
    gizmos.line(
        Vec3::ZERO,
        Vec3::X * AXIS_GIZMO_LENGTH,
        Color::srgb(1.0, 0.2, 0.2),
    );
    gizmos.line(
        Vec3::ZERO,
        Vec3::Y * AXIS_GIZMO_LENGTH,
        Color::srgb(0.2, 1.0, 0.2),
    );
    gizmos.line(
        Vec3::ZERO,
        Vec3::Z * AXIS_GIZMO_LENGTH,
        Color::srgb(0.2, 0.4, 1.0),
    );
}
