use serde::Serialize;

/// Unique identifier for an entity in a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EntityId(pub u32);

/// A sound event emitted by the game logic.
/// The numeric value keys into the game's `SoundBank`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

/// A game event forwarded from Rust to the host page.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GameEvent {
    pub kind: u32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub fn new(kind: u32) -> Self {
        Self { kind, ..Self::default() }
    }

    pub fn with_a(mut self, a: f32) -> Self {
        self.a = a;
        self
    }

    pub fn with_b(mut self, b: f32) -> Self {
        self.b = b;
        self
    }

    pub fn with_c(mut self, c: f32) -> Self {
        self.c = c;
        self
    }

    /// Serialize for a DOM `CustomEvent` detail payload.
    pub fn to_json(&self) -> String {
        // A struct of plain numbers cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_default()
    }
}
