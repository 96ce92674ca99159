use serde::{Deserialize, Serialize};

/// Gameplay tuning. Every field has a default, so partial JSON is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatchConfig {
    /// Time between ball spawns while running.
    pub spawn_interval_ms: f64,
    /// Session length in whole seconds.
    pub session_seconds: u32,
    /// How long a freeze stops the countdown.
    pub freeze_ms: f64,
    /// How long the score multiplier lasts.
    pub bonus_ms: f64,
    /// How long shrink/expand last.
    pub resize_ms: f64,
    /// Flat points granted by catching a bonus ball.
    pub bonus_points: i32,
    /// Multiplier applied to good/bad catches under bonus.
    pub bonus_multiplier: i32,
    pub catcher_width: f32,
    pub shrunk_width: f32,
    pub expanded_width: f32,
    pub catcher_height: f32,
    /// Distance from the field bottom to the catcher's top edge.
    pub catcher_offset: f32,
    /// Per-frame smoothing factor for position.
    pub position_smoothing: f32,
    /// Per-frame smoothing factor for width.
    pub width_smoothing: f32,
    /// Pixels per frame an arrow key moves the target.
    pub key_step: f32,
    pub burst_particles: usize,
    pub burst_speed: f32,
}

impl Default for CatchConfig {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 600.0,
            session_seconds: 30,
            freeze_ms: 3000.0,
            bonus_ms: 3000.0,
            resize_ms: 5000.0,
            bonus_points: 5,
            bonus_multiplier: 2,
            catcher_width: 80.0,
            shrunk_width: 50.0,
            expanded_width: 130.0,
            catcher_height: 14.0,
            catcher_offset: 40.0,
            position_smoothing: 0.25,
            width_smoothing: 0.15,
            key_step: 8.0,
            burst_particles: 14,
            burst_speed: 4.0,
        }
    }
}

impl CatchConfig {
    /// Parse tuning from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = CatchConfig::from_json(r#"{ "session_seconds": 60, "spawn_interval_ms": 450 }"#).unwrap();
        assert_eq!(cfg.session_seconds, 60);
        assert_eq!(cfg.spawn_interval_ms, 450.0);
        assert_eq!(cfg.catcher_width, 80.0);
        assert_eq!(cfg.freeze_ms, 3000.0);
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(CatchConfig::from_json(r#"{ "session_seconds": "long" }"#).is_err());
        assert!(CatchConfig::from_json("not json").is_err());
    }
}
