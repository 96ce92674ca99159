//! Cosmetic particles for catch bursts.

use glam::Vec2;
use crate::renderer::color::Color;

/// A single particle. Purely visual: nothing in the simulation reads it back.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining life, 1.0 at birth down to 0.0.
    pub life: f32,
    pub radius: f32,
    pub color: Color,
}

impl Particle {
    pub const DEFAULT_GRAVITY: f32 = 0.15;
    pub const DEFAULT_DECAY: f32 = 0.03;

    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Color) -> Self {
        Particle {
            pos,
            vel,
            life: 1.0,
            radius,
            color,
        }
    }

    /// Advance one frame. Returns false when expired.
    pub fn tick(&mut self, gravity: f32, decay: f32) -> bool {
        self.pos += self.vel;
        self.vel.y += gravity;
        self.life -= decay;
        self.life > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_expires() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::X, 2.0, Color::WHITE);
        let mut frames = 0;
        while p.tick(0.15, 0.25) {
            frames += 1;
        }
        assert_eq!(frames, 3);
    }

    #[test]
    fn gravity_bends_trajectory_down() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(1.0, -1.0), 2.0, Color::WHITE);
        for _ in 0..20 {
            p.tick(0.15, 0.01);
        }
        assert!(p.vel.y > 0.0, "vy should turn positive, got {}", p.vel.y);
        assert!(p.pos.x > 19.0);
    }
}
