//! DOM key codes and held-key tracking.

pub const ENTER: u32 = 13;
pub const SPACE: u32 = 32;
pub const ARROW_LEFT: u32 = 37;
pub const ARROW_RIGHT: u32 = 39;

/// Tracks which keys are currently held down.
/// Fed from `KeyDown`/`KeyUp` events; games read it once per frame.
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    held: Vec<u32>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key_code: u32) {
        if !self.held.contains(&key_code) {
            self.held.push(key_code);
        }
    }

    pub fn release(&mut self, key_code: u32) {
        self.held.retain(|&k| k != key_code);
    }

    pub fn is_held(&self, key_code: u32) -> bool {
        self.held.contains(&key_code)
    }

    /// -1 when only left is held, 1 when only right, 0 otherwise.
    pub fn horizontal_axis(&self) -> f32 {
        let left = self.is_held(ARROW_LEFT) as i32;
        let right = self.is_held(ARROW_RIGHT) as i32;
        (right - left) as f32
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}
