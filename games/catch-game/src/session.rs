//! Session state machine: Idle → Running → Ended → Running ...

use catch_engine::Interval;

use crate::config::CatchConfig;
use crate::powerups::PowerUps;

/// Countdown period.
pub const SECOND_MS: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Ended,
}

/// Outcome of polling the countdown on one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// No tick due (or not running).
    Waiting,
    /// Every due tick fell inside a freeze and was skipped.
    Frozen,
    /// At least one second elapsed; seconds left.
    Ticked(u32),
    /// The last second elapsed.
    Expired,
}

#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
    score: u32,
    time_left: u32,
    best_score: u32,
    catches: u32,
    countdown: Interval,
    spawner: Interval,
    pub power: PowerUps,
}

impl Session {
    pub fn new(config: &CatchConfig) -> Self {
        Self {
            phase: Phase::Idle,
            score: 0,
            time_left: config.session_seconds,
            best_score: 0,
            catches: 0,
            countdown: Interval::new(SECOND_MS),
            spawner: Interval::new(config.spawn_interval_ms),
            power: PowerUps::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Highest final score since the page loaded.
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn catches(&self) -> u32 {
        self.catches
    }

    pub fn spawner_armed(&self) -> bool {
        self.spawner.is_armed()
    }

    /// Reset everything and arm both timers. Ignored while running.
    pub fn start(&mut self, now_ms: f64, config: &CatchConfig) -> bool {
        if self.is_running() {
            return false;
        }
        self.phase = Phase::Running;
        self.score = 0;
        self.time_left = config.session_seconds;
        self.catches = 0;
        self.power.clear();
        self.spawner = Interval::new(config.spawn_interval_ms);
        self.spawner.start(now_ms);
        self.countdown.start(now_ms);
        true
    }

    /// Stop the session. Returns the final score the first time only.
    pub fn end(&mut self) -> Option<u32> {
        if !self.is_running() {
            return None;
        }
        self.phase = Phase::Ended;
        self.spawner.stop();
        self.countdown.stop();
        self.best_score = self.best_score.max(self.score);
        Some(self.score)
    }

    /// Add `delta` points, clamping at zero. Returns the change actually applied.
    pub fn apply_points(&mut self, delta: i32) -> i32 {
        let before = self.score as i64;
        let after = (before + delta as i64).clamp(0, u32::MAX as i64);
        self.score = after as u32;
        (after - before) as i32
    }

    pub fn record_catch(&mut self) {
        self.catches += 1;
    }

    /// True when a spawn is due at `now`.
    pub fn poll_spawn(&mut self, now_ms: f64) -> bool {
        self.is_running() && self.spawner.poll(now_ms)
    }

    /// Apply every countdown tick due since the last poll. A tick whose due
    /// time falls inside a freeze is skipped; the others cost one second each.
    pub fn poll_countdown(&mut self, now_ms: f64) -> Countdown {
        if !self.is_running() {
            return Countdown::Waiting;
        }
        let mut outcome = Countdown::Waiting;
        for due in self.countdown.catch_up(now_ms) {
            if self.power.is_frozen(due) {
                if outcome == Countdown::Waiting {
                    outcome = Countdown::Frozen;
                }
                continue;
            }
            self.time_left = self.time_left.saturating_sub(1);
            if self.time_left == 0 {
                return Countdown::Expired;
            }
            outcome = Countdown::Ticked(self.time_left);
        }
        outcome
    }
}
