/// Per-frame clock.
///
/// Wall-clock `now` advances by the real frame time so timers keep real-time
/// semantics, while the simulation step `dt` is clamped to `max_step_ms`
/// to avoid large jumps when a backgrounded tab resumes.
#[derive(Debug, Clone)]
pub struct FrameClock {
    now_ms: f64,
    dt_ms: f32,
    max_step_ms: f32,
    frame: u64,
}

impl FrameClock {
    pub fn new(max_step_ms: f32) -> Self {
        Self {
            now_ms: 0.0,
            dt_ms: 0.0,
            max_step_ms,
            frame: 0,
        }
    }

    /// Advance by one displayed frame. Returns the clamped simulation step.
    pub fn advance(&mut self, frame_ms: f64) -> f32 {
        let frame_ms = frame_ms.max(0.0);
        self.now_ms += frame_ms;
        self.dt_ms = (frame_ms as f32).min(self.max_step_ms);
        self.frame += 1;
        self.dt_ms
    }

    /// Wall-clock time in milliseconds since the clock started.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Clamped step of the current frame, in milliseconds.
    pub fn dt_ms(&self) -> f32 {
        self.dt_ms
    }

    /// Step normalized to a 16 ms frame baseline.
    pub fn frame_scale(&self) -> f32 {
        self.dt_ms / 16.0
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn max_step_ms(&self) -> f32 {
        self.max_step_ms
    }
}

/// Repeating wall-clock timer, polled once per frame.
///
/// `poll` fires at most once per call. If it is late by more than a full
/// period (tab was hidden), the schedule restarts from `now` instead of
/// replaying every missed tick. `catch_up` instead reports every tick that
/// fell due, for timers that must not lose time.
#[derive(Debug, Clone)]
pub struct Interval {
    period_ms: f64,
    next_due_ms: Option<f64>,
}

impl Interval {
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms,
            next_due_ms: None,
        }
    }

    /// Arm the timer; the first tick is due one period after `now`.
    pub fn start(&mut self, now_ms: f64) {
        self.next_due_ms = Some(now_ms + self.period_ms);
    }

    pub fn stop(&mut self) {
        self.next_due_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due_ms.is_some()
    }

    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }

    /// Returns true when a tick is due at `now`.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let Some(due) = self.next_due_ms else {
            return false;
        };
        if now_ms < due {
            return false;
        }
        let next = due + self.period_ms;
        self.next_due_ms = Some(if next <= now_ms {
            now_ms + self.period_ms
        } else {
            next
        });
        true
    }

    /// Due times of every tick up to `now`, oldest first. The schedule stays
    /// on its original grid.
    pub fn catch_up(&mut self, now_ms: f64) -> Vec<f64> {
        let mut due_times = Vec::new();
        while let Some(due) = self.next_due_ms {
            if now_ms < due || self.period_ms <= 0.0 {
                break;
            }
            due_times.push(due);
            self.next_due_ms = Some(due + self.period_ms);
        }
        due_times
    }
}
