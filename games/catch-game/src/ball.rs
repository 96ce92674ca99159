//! Falling balls: kinds, point tiers, spawn roll and per-frame motion.

use std::f32::consts::TAU;

use catch_engine::{Color, EntityId, Rng, SceneEntity};
use glam::Vec2;

/// Base fall speed range, px per 16 ms frame.
pub const SPEED_MIN: f32 = 2.0;
pub const SPEED_MAX: f32 = 4.0;
/// Speed gained per normalized frame while falling.
pub const ACCELERATION: f32 = 0.01;
/// Current speed never exceeds `base * MAX_SPEEDUP`.
pub const MAX_SPEEDUP: f32 = 1.5;
/// Horizontal sway: `sin(elapsed * SWAY_FREQ + wobble) * SWAY_AMP` px per frame.
pub const SWAY_FREQ: f32 = 0.003;
pub const SWAY_AMP: f32 = 0.35;
pub const POWER_UP_RADIUS: f32 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BallKind {
    Good,
    Bad,
    Freeze,
    Bonus,
    Shrink,
    Expand,
}

impl BallKind {
    /// Map a uniform roll in `[0, 1)` to a kind.
    pub fn from_roll(r: f32) -> Self {
        if r > 0.98 {
            BallKind::Expand
        } else if r > 0.96 {
            BallKind::Shrink
        } else if r > 0.94 {
            BallKind::Bonus
        } else if r > 0.91 {
            BallKind::Freeze
        } else if r > 0.65 {
            BallKind::Bad
        } else {
            BallKind::Good
        }
    }

    pub fn is_power_up(self) -> bool {
        !matches!(self, BallKind::Good | BallKind::Bad)
    }

    /// Stable numeric code used in host-page events.
    pub fn code(self) -> u32 {
        match self {
            BallKind::Good => 0,
            BallKind::Bad => 1,
            BallKind::Freeze => 2,
            BallKind::Bonus => 3,
            BallKind::Shrink => 4,
            BallKind::Expand => 5,
        }
    }

    pub fn color(self) -> Color {
        match self {
            BallKind::Good => Color::hex(0x22c55e),
            BallKind::Bad => Color::hex(0xef4444),
            BallKind::Freeze => Color::hex(0x38bdf8),
            BallKind::Bonus => Color::hex(0xfacc15),
            BallKind::Shrink => Color::hex(0xa855f7),
            BallKind::Expand => Color::hex(0xf97316),
        }
    }

    /// Glyph drawn on power-up balls.
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            BallKind::Freeze => Some("❄"),
            BallKind::Bonus => Some("★"),
            BallKind::Shrink => Some("−"),
            BallKind::Expand => Some("+"),
            BallKind::Good | BallKind::Bad => None,
        }
    }

    /// Label shown when the power-up is caught.
    pub fn announcement(self) -> Option<&'static str> {
        match self {
            BallKind::Freeze => Some("FREEZE!"),
            BallKind::Bonus => Some("x2 BONUS!"),
            BallKind::Shrink => Some("SHRINK"),
            BallKind::Expand => Some("EXPAND"),
            BallKind::Good | BallKind::Bad => None,
        }
    }
}

/// Radius and nominal points for a kind, given a uniform tier roll in `[0, 1)`.
pub fn tier(kind: BallKind, roll: f32) -> (f32, i32) {
    match kind {
        BallKind::Good => {
            if roll < 0.5 {
                (10.0, 2)
            } else if roll < 0.85 {
                (14.0, 5)
            } else {
                (18.0, 10)
            }
        }
        BallKind::Bad => {
            if roll < 0.6 {
                (14.0, -5)
            } else {
                (18.0, -10)
            }
        }
        BallKind::Bonus => (POWER_UP_RADIUS, 5),
        BallKind::Freeze | BallKind::Shrink | BallKind::Expand => (POWER_UP_RADIUS, 0),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub id: EntityId,
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub base_speed: f32,
    pub kind: BallKind,
    pub points: i32,
    pub color: Color,
    pub wobble: f32,
}

impl SceneEntity for Ball {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Ball {
    /// A ball of `kind` with the tier chosen by `tier_roll`, resting at `pos`.
    pub fn new(id: EntityId, kind: BallKind, tier_roll: f32, pos: Vec2, base_speed: f32) -> Self {
        let (radius, points) = tier(kind, tier_roll);
        Self {
            id,
            pos,
            radius,
            speed: base_speed,
            base_speed,
            kind,
            points,
            color: kind.color(),
            wobble: 0.0,
        }
    }

    /// Roll a fresh ball just above the top edge of a field `field_width` wide.
    pub fn spawn(id: EntityId, rng: &mut Rng, field_width: f32) -> Self {
        let kind = BallKind::from_roll(rng.next_f32());
        let tier_roll = rng.next_f32();
        let (radius, _) = tier(kind, tier_roll);
        let x = rng.range(radius, (field_width - radius).max(radius));
        let base_speed = rng.range(SPEED_MIN, SPEED_MAX);
        let mut ball = Ball::new(id, kind, tier_roll, Vec2::new(x, -radius), base_speed);
        ball.wobble = rng.next_f32() * TAU;
        ball
    }

    /// Advance one frame. `scale` is `dt / 16`, `elapsed_ms` the session clock.
    pub fn advance(&mut self, scale: f32, elapsed_ms: f64, field_width: f32) {
        self.speed = (self.speed + ACCELERATION * scale).min(self.base_speed * MAX_SPEEDUP);
        self.pos.y += self.speed * scale;

        let phase = (elapsed_ms as f32) * SWAY_FREQ + self.wobble;
        self.pos.x += phase.sin() * SWAY_AMP * scale;
        self.pos.x = self.pos.x.clamp(self.radius, (field_width - self.radius).max(self.radius));
    }

    /// True once the whole ball is below the bottom edge.
    pub fn is_past(&self, field_height: f32) -> bool {
        self.pos.y - self.radius > field_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_thresholds() {
        assert_eq!(BallKind::from_roll(0.0), BallKind::Good);
        assert_eq!(BallKind::from_roll(0.65), BallKind::Good);
        assert_eq!(BallKind::from_roll(0.66), BallKind::Bad);
        assert_eq!(BallKind::from_roll(0.91), BallKind::Bad);
        assert_eq!(BallKind::from_roll(0.92), BallKind::Freeze);
        assert_eq!(BallKind::from_roll(0.95), BallKind::Bonus);
        assert_eq!(BallKind::from_roll(0.97), BallKind::Shrink);
        assert_eq!(BallKind::from_roll(0.99), BallKind::Expand);
    }

    #[test]
    fn tiers_match_table() {
        assert_eq!(tier(BallKind::Good, 0.1), (10.0, 2));
        assert_eq!(tier(BallKind::Good, 0.6), (14.0, 5));
        assert_eq!(tier(BallKind::Good, 0.9), (18.0, 10));
        assert_eq!(tier(BallKind::Bad, 0.3), (14.0, -5));
        assert_eq!(tier(BallKind::Bad, 0.7), (18.0, -10));
        assert_eq!(tier(BallKind::Bonus, 0.0), (14.0, 5));
        assert_eq!(tier(BallKind::Freeze, 0.9), (14.0, 0));
    }

    #[test]
    fn spawned_balls_start_above_field_inside_bounds() {
        let mut rng = Rng::new(7);
        for i in 0..500 {
            let ball = Ball::spawn(EntityId(i), &mut rng, 400.0);
            assert!(ball.pos.x >= ball.radius && ball.pos.x <= 400.0 - ball.radius);
            assert_eq!(ball.pos.y, -ball.radius);
            assert!(ball.base_speed >= SPEED_MIN && ball.base_speed < SPEED_MAX);
            assert!(ball.wobble >= 0.0 && ball.wobble < TAU);
            assert_eq!(ball.color, ball.kind.color());
        }
    }

    #[test]
    fn speed_caps_at_max_speedup() {
        let mut ball = Ball::new(EntityId(1), BallKind::Good, 0.0, Vec2::new(200.0, 0.0), 2.0);
        for _ in 0..10_000 {
            ball.advance(1.0, 0.0, 400.0);
        }
        assert!((ball.speed - 3.0).abs() < 1e-4);
    }

    #[test]
    fn fall_scales_with_dt() {
        let mut a = Ball::new(EntityId(1), BallKind::Good, 0.0, Vec2::new(200.0, 0.0), 3.0);
        let mut b = a.clone();
        a.advance(1.0, 0.0, 400.0);
        b.advance(2.0, 0.0, 400.0);
        assert!(b.pos.y > a.pos.y * 1.9);
    }

    #[test]
    fn sway_stays_inside_field() {
        let mut ball = Ball::new(EntityId(1), BallKind::Bad, 0.0, Vec2::new(14.0, 0.0), 2.0);
        ball.wobble = -std::f32::consts::FRAC_PI_2;
        for _ in 0..50 {
            ball.advance(1.0, 0.0, 400.0);
            assert!(ball.pos.x >= ball.radius);
        }
    }

    #[test]
    fn past_only_when_fully_below() {
        let mut ball = Ball::new(EntityId(1), BallKind::Good, 0.0, Vec2::new(200.0, 605.0), 2.0);
        assert!(!ball.is_past(600.0));
        ball.pos.y = 610.5;
        assert!(ball.is_past(600.0));
    }
}
