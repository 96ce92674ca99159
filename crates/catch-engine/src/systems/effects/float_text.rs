//! Floating score/event labels.

use glam::Vec2;
use crate::renderer::color::Color;

/// Transient label such as "+5" or "FREEZE!".
///
/// Expiry is wall-clock based: a label lives exactly `lifetime_ms` after its
/// birth timestamp, regardless of frame rate.
#[derive(Debug, Clone)]
pub struct FloatText {
    pub text: String,
    pub pos: Vec2,
    pub color: Color,
    pub born_ms: f64,
    pub lifetime_ms: f64,
}

impl FloatText {
    pub const DEFAULT_LIFETIME_MS: f64 = 1200.0;

    pub fn new(text: impl Into<String>, pos: Vec2, color: Color, now_ms: f64) -> Self {
        Self {
            text: text.into(),
            pos,
            color,
            born_ms: now_ms,
            lifetime_ms: Self::DEFAULT_LIFETIME_MS,
        }
    }

    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms - self.born_ms >= self.lifetime_ms
    }

    /// Normalized age in 0..=1.
    pub fn progress(&self, now_ms: f64) -> f32 {
        ((now_ms - self.born_ms) / self.lifetime_ms).clamp(0.0, 1.0) as f32
    }
}
