/// Everything the browser can tell the game between two frames.
/// Positions are already in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Click or tap began. Counts as a user gesture for audio unlock.
    PointerDown { x: f32, y: f32 },
    /// Cursor or finger moved.
    PointerMove { x: f32, y: f32 },
    /// DOM `keyCode` went down (auto-repeat filtered out by the bridge).
    KeyDown { key_code: u32 },
    KeyUp { key_code: u32 },
    /// Host-page command such as the Start / End buttons. See `input::commands`.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

impl InputEvent {
    /// Bare command with no payload.
    pub fn command(kind: u32) -> Self {
        InputEvent::Custom {
            kind,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        }
    }
}

/// Events collected since the last frame, in arrival order.
///
/// Listeners push between frames; the runner hands the queue to
/// `Game::update` and clears it afterwards.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Most recent pointer position this frame, if the pointer moved.
    pub fn last_pointer(&self) -> Option<(f32, f32)> {
        self.events.iter().rev().find_map(|e| match *e {
            InputEvent::PointerMove { x, y } | InputEvent::PointerDown { x, y } => Some((x, y)),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
