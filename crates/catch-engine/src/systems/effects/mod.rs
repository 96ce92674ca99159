//! Visual effects system: particle bursts and floating labels.
//!
//! This module provides the `EffectsState` facade for managing all visual effects,
//! plus individual components that can be used directly if needed.

mod float_text;
mod particle;
mod rng;

// Re-export public types
pub use float_text::FloatText;
pub use particle::Particle;
pub use rng::Rng;

use glam::Vec2;
use crate::renderer::color::Color;

/// Container for all visual effects (particles + float texts) and the shared RNG.
/// Games add effects via the public methods.
pub struct EffectsState {
    pub particles: Vec<Particle>,
    pub float_texts: Vec<FloatText>,
    pub rng: Rng,
    /// Downward acceleration added to particle vy each frame.
    pub gravity: f32,
    /// Life lost per particle per frame.
    pub decay: f32,
}

impl EffectsState {
    /// Create a new EffectsState with the given RNG seed.
    pub fn new(seed: u64) -> Self {
        EffectsState {
            particles: Vec::with_capacity(128),
            float_texts: Vec::new(),
            rng: Rng::new(seed.wrapping_add(7919)),
            gravity: Particle::DEFAULT_GRAVITY,
            decay: Particle::DEFAULT_DECAY,
        }
    }

    /// Spawn a radial burst of particles at `center`.
    /// Speeds are uniform in `[speed * 0.3, speed)` px per frame.
    pub fn spawn_burst(&mut self, center: Vec2, count: usize, speed: f32, color: Color) {
        for _ in 0..count {
            let angle = self.rng.next_f32() * std::f32::consts::TAU;
            let mag = self.rng.range(speed * 0.3, speed);
            let radius = self.rng.range(1.5, 3.5);
            let vel = Vec2::new(angle.cos(), angle.sin()) * mag;
            self.particles.push(Particle::new(center, vel, radius, color));
        }
    }

    /// Show a floating label that disappears `FloatText::DEFAULT_LIFETIME_MS` after `now_ms`.
    pub fn add_float_text(&mut self, text: impl Into<String>, pos: Vec2, color: Color, now_ms: f64) {
        self.float_texts.push(FloatText::new(text, pos, color, now_ms));
    }

    /// Advance effects by one frame: integrate particles, expire labels.
    pub fn tick(&mut self, now_ms: f64) {
        let (gravity, decay) = (self.gravity, self.decay);
        self.particles.retain_mut(|p| p.tick(gravity, decay));
        self.float_texts.retain(|t| !t.is_expired(now_ms));
    }

    /// Clear all effects. The RNG keeps its state.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.float_texts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_burst_adds_particles() {
        let mut effects = EffectsState::new(42);
        effects.spawn_burst(Vec2::new(50.0, 50.0), 14, 4.0, Color::WHITE);
        assert_eq!(effects.particles.len(), 14);
        assert!(effects.particles.iter().all(|p| p.life == 1.0));
    }

    #[test]
    fn particles_die_after_enough_frames() {
        let mut effects = EffectsState::new(42);
        effects.spawn_burst(Vec2::ZERO, 5, 4.0, Color::WHITE);
        // 1.0 / 0.03 ≈ 33.3 frames of life
        for _ in 0..34 {
            effects.tick(0.0);
        }
        assert!(effects.particles.is_empty());
    }

    #[test]
    fn float_texts_expire_on_wall_clock() {
        let mut effects = EffectsState::new(42);
        effects.add_float_text("+5", Vec2::ZERO, Color::WHITE, 100.0);
        effects.tick(1299.0);
        assert_eq!(effects.float_texts.len(), 1);
        effects.tick(1300.0);
        assert!(effects.float_texts.is_empty());
    }

    #[test]
    fn effects_state_clear() {
        let mut effects = EffectsState::new(42);
        effects.spawn_burst(Vec2::ZERO, 5, 4.0, Color::WHITE);
        effects.add_float_text("x", Vec2::ZERO, Color::WHITE, 0.0);
        effects.clear();
        assert!(effects.particles.is_empty());
        assert!(effects.float_texts.is_empty());
    }
}
