use catch_engine::approach;

use crate::ball::Ball;

/// The player's paddle. Input writes the targets; `smooth` moves toward them.
#[derive(Debug, Clone, PartialEq)]
pub struct Catcher {
    pub x: f32,
    pub target_x: f32,
    pub width: f32,
    pub target_width: f32,
    /// Top edge, fixed for the session.
    pub top: f32,
    pub height: f32,
}

impl Catcher {
    /// A catcher of `width`, centered in a field `field_width` wide.
    pub fn new(field_width: f32, top: f32, height: f32, width: f32) -> Self {
        let x = ((field_width - width) / 2.0).max(0.0);
        Self {
            x,
            target_x: x,
            width,
            target_width: width,
            top,
            height,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center the target under a pointer at `pointer_x`.
    pub fn aim_at(&mut self, pointer_x: f32, field_width: f32) {
        self.target_x = self.clamp_x(pointer_x - self.width / 2.0, field_width);
    }

    /// Shift the target by `dx` (keyboard).
    pub fn nudge(&mut self, dx: f32, field_width: f32) {
        self.target_x = self.clamp_x(self.target_x + dx, field_width);
    }

    /// One smoothing step: width first, then position.
    pub fn smooth(&mut self, position_factor: f32, width_factor: f32, field_width: f32) {
        self.width = approach(self.width, self.target_width, width_factor);
        self.target_x = self.clamp_x(self.target_x, field_width);
        self.x = self.clamp_x(approach(self.x, self.target_x, position_factor), field_width);
    }

    /// Ball overlaps the catcher band vertically and its center is within the span.
    pub fn catches(&self, ball: &Ball) -> bool {
        ball.pos.y + ball.radius >= self.top
            && ball.pos.y - ball.radius <= self.top + self.height
            && ball.pos.x >= self.x
            && ball.pos.x <= self.x + self.width
    }

    fn clamp_x(&self, x: f32, field_width: f32) -> f32 {
        x.clamp(0.0, (field_width - self.width).max(0.0))
    }
}
