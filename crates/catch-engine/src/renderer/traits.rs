//! Renderer trait for drawing backends.
//!
//! The engine never touches a graphics API. Games fill a `DrawList`; a backend
//! (Canvas2D in the browser bridge, a recorder in tests) replays it.

use super::commands::DrawCommand;

/// Outcome of replaying one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawTiming {
    /// Commands that were replayed.
    pub commands: u32,
    /// Commands the backend failed to draw.
    pub failed: u32,
}

/// Complete frame data for rendering.
pub struct FrameData<'a> {
    /// Draw commands in back-to-front order.
    pub commands: &'a [DrawCommand],
    /// World dimensions, used to scale onto the backing surface.
    pub world_width: f32,
    pub world_height: f32,
}

/// Renderer trait for drawing backends.
pub trait Renderer {
    /// Backend identifier (e.g., "canvas2d", "recorder").
    fn backend(&self) -> &'static str;

    /// Draw a complete frame. Failed commands are counted, never fatal.
    fn draw(&mut self, frame: &FrameData) -> DrawTiming;

    /// Handle a surface resize (backing-store pixels).
    fn resize(&mut self, width: u32, height: u32);
}
