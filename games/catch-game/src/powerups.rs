//! Power-up timers. Each is an absolute end timestamp; `None` means inactive.

use crate::ball::BallKind;
use crate::config::CatchConfig;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PowerUps {
    frozen_until: Option<f64>,
    bonus_until: Option<f64>,
    shrink_until: Option<f64>,
    expand_until: Option<f64>,
}

fn active(until: Option<f64>, now_ms: f64) -> bool {
    until.map_or(false, |t| t > now_ms)
}

fn remaining(until: Option<f64>, now_ms: f64) -> Option<f64> {
    until.filter(|&t| t > now_ms).map(|t| t - now_ms)
}

impl PowerUps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start or extend the effect of a caught power-up ball.
    /// Returns false for plain good/bad kinds.
    pub fn activate(&mut self, kind: BallKind, now_ms: f64, config: &CatchConfig) -> bool {
        match kind {
            BallKind::Freeze => self.frozen_until = Some(now_ms + config.freeze_ms),
            BallKind::Bonus => self.bonus_until = Some(now_ms + config.bonus_ms),
            BallKind::Shrink => {
                self.shrink_until = Some(now_ms + config.resize_ms);
                self.expand_until = None;
            }
            BallKind::Expand => {
                self.expand_until = Some(now_ms + config.resize_ms);
                self.shrink_until = None;
            }
            BallKind::Good | BallKind::Bad => return false,
        }
        true
    }

    pub fn is_frozen(&self, now_ms: f64) -> bool {
        active(self.frozen_until, now_ms)
    }

    pub fn is_bonus(&self, now_ms: f64) -> bool {
        active(self.bonus_until, now_ms)
    }

    pub fn is_shrunk(&self, now_ms: f64) -> bool {
        active(self.shrink_until, now_ms)
    }

    pub fn is_expanded(&self, now_ms: f64) -> bool {
        active(self.expand_until, now_ms)
    }

    pub fn frozen_until(&self) -> Option<f64> {
        self.frozen_until
    }

    pub fn shrink_until(&self) -> Option<f64> {
        self.shrink_until
    }

    pub fn expand_until(&self) -> Option<f64> {
        self.expand_until
    }

    /// Milliseconds of freeze left, if frozen.
    pub fn freeze_remaining(&self, now_ms: f64) -> Option<f64> {
        remaining(self.frozen_until, now_ms)
    }

    /// Catcher width the smoothing step should head for.
    pub fn target_width(&self, now_ms: f64, config: &CatchConfig) -> f32 {
        if self.is_shrunk(now_ms) {
            config.shrunk_width
        } else if self.is_expanded(now_ms) {
            config.expanded_width
        } else {
            config.catcher_width
        }
    }

    /// Active effects with their remaining time, in HUD order.
    pub fn active(&self, now_ms: f64) -> Vec<(BallKind, f64)> {
        [
            (BallKind::Freeze, self.frozen_until),
            (BallKind::Bonus, self.bonus_until),
            (BallKind::Shrink, self.shrink_until),
            (BallKind::Expand, self.expand_until),
        ]
        .into_iter()
        .filter_map(|(kind, until)| remaining(until, now_ms).map(|left| (kind, left)))
        .collect()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrink_and_expand_are_exclusive() {
        let cfg = CatchConfig::default();
        let mut p = PowerUps::new();
        p.activate(BallKind::Shrink, 0.0, &cfg);
        assert!(p.is_shrunk(100.0));
        p.activate(BallKind::Expand, 100.0, &cfg);
        assert_eq!(p.shrink_until(), None);
        assert!(p.is_expanded(200.0));
        assert!(!p.is_shrunk(200.0));
        p.activate(BallKind::Shrink, 200.0, &cfg);
        assert_eq!(p.expand_until(), None);
    }

    #[test]
    fn timers_expire_at_their_deadline() {
        let cfg = CatchConfig::default();
        let mut p = PowerUps::new();
        p.activate(BallKind::Freeze, 1000.0, &cfg);
        assert!(p.is_frozen(3999.0));
        assert!(!p.is_frozen(4000.0));
        assert_eq!(p.freeze_remaining(3000.0), Some(1000.0));
        assert_eq!(p.freeze_remaining(4000.0), None);
    }

    #[test]
    fn target_width_follows_size_effect() {
        let cfg = CatchConfig::default();
        let mut p = PowerUps::new();
        assert_eq!(p.target_width(0.0, &cfg), 80.0);
        p.activate(BallKind::Shrink, 0.0, &cfg);
        assert_eq!(p.target_width(10.0, &cfg), 50.0);
        p.activate(BallKind::Expand, 10.0, &cfg);
        assert_eq!(p.target_width(20.0, &cfg), 130.0);
        assert_eq!(p.target_width(6000.0, &cfg), 80.0);
    }

    #[test]
    fn plain_kinds_do_not_activate() {
        let cfg = CatchConfig::default();
        let mut p = PowerUps::new();
        assert!(!p.activate(BallKind::Good, 0.0, &cfg));
        assert!(!p.activate(BallKind::Bad, 0.0, &cfg));
        assert!(p.active(0.0).is_empty());
    }

    #[test]
    fn active_lists_in_hud_order() {
        let cfg = CatchConfig::default();
        let mut p = PowerUps::new();
        p.activate(BallKind::Expand, 0.0, &cfg);
        p.activate(BallKind::Freeze, 0.0, &cfg);
        let kinds: Vec<BallKind> = p.active(500.0).into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![BallKind::Freeze, BallKind::Expand]);
        p.clear();
        assert!(p.active(500.0).is_empty());
    }
}
