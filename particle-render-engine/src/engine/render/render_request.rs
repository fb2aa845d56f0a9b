use bevy::prelude::*;
use bevy::window::RequestRedraw;

/// Coalescing redraw flag: any number of set() calls within one tick result
/// in at most one redraw request when the flag is flushed.
#[derive(Resource, Default)]
pub struct RenderRequest {
    requested: bool,
}

impl RenderRequest {
    pub fn set(&mut self) {
        self.requested = true;
    }

    /// Read and clear the flag.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.requested)
    }

    pub fn is_requested(&self) -> bool {
        self.requested
    }
}

/// Flush the flag once per tick, emitting a single `RequestRedraw` event.
///
/// Runs in `PostUpdate` so every geometry change of the frame has already
/// been recorded. With the winit loop in reactive mode this event is what
/// drives the next frame.
pub fn flush_render_requests(
    mut render_request: ResMut<RenderRequest>,
    mut redraw_events: EventWriter<RequestRedraw>,
) {
    if render_request.take() {
        redraw_events.write(RequestRedraw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_sets_coalesce_into_one_take() {
        let mut request = RenderRequest::default();
        request.set();
        request.set();
        request.set();

        assert!(request.take());
        assert!(!request.take());
    }

    #[test]
    fn test_take_clears_the_flag() {
        let mut request = RenderRequest::default();
        request.set();
        assert!(request.is_requested());

        let _ = request.take();
        assert!(!request.is_requested());
    }

    #[test]
    fn test_default_is_not_requested() {
        let mut request = RenderRequest::default();
        assert!(!request.is_requested());
        assert!(!request.take());
    }
}
