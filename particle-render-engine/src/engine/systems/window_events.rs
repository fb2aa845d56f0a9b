use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::engine::render::render_request::RenderRequest;

/// Surface reconfiguration is the renderer's job; the core only has to ask
/// for a fresh frame at the new size.
pub fn request_render_on_resize(
    mut resize_events: EventReader<WindowResized>,
    mut render_request: ResMut<RenderRequest>,
) {
    for _ in resize_events.read() {
        render_request.set();
    }
}
