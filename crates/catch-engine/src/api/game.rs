use crate::api::types::{EntityId, GameEvent, SoundEvent};
use crate::assets::sound_bank::SoundBank;
use crate::core::time::FrameClock;
use crate::input::queue::InputQueue;
use crate::renderer::commands::DrawList;
use crate::systems::effects::EffectsState;
use crate::systems::render::{draw_float_texts, draw_particles};

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// World width in game units (canvas CSS pixels at scale 1).
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Largest simulation step in milliseconds (default: 50).
    pub max_frame_ms: f32,
    /// Seed for the shared RNG.
    pub seed: u64,
    /// Maximum number of sound events per frame (default: 16).
    pub max_sounds: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 400.0,
            world_height: 600.0,
            max_frame_ms: 50.0,
            seed: 42,
            max_sounds: 16,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Apply game-specific tuning from JSON. The previous tuning stays on error.
    fn load_config(&mut self, _json: &str) -> Result<(), serde_json::Error> {
        Ok(())
    }

    /// Synthesized sounds keyed by the `SoundEvent`s this game emits.
    fn sound_bank(&self) -> SoundBank {
        SoundBank::default()
    }

    /// Setup initial state.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The per-frame simulation step. The only place game state is written.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Read-only render pass: append draw commands for the current state.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub clock: FrameClock,
    pub effects: EffectsState,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
    score_reports: Vec<u32>,
    next_id: u32,
    max_sounds: usize,
    max_events: usize,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            clock: FrameClock::new(config.max_frame_ms),
            effects: EffectsState::new(config.seed),
            sounds: Vec::with_capacity(config.max_sounds),
            events: Vec::with_capacity(config.max_events),
            score_reports: Vec::new(),
            next_id: 1,
            max_sounds: config.max_sounds,
            max_events: config.max_events,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Wall-clock milliseconds, shorthand for `clock.now_ms()`.
    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    /// Emit a sound event. Dropped beyond the per-frame cap.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        if self.sounds.len() < self.max_sounds {
            self.sounds.push(event);
        } else {
            log::debug!("sound {:?} dropped: per-frame cap reached", event);
        }
    }

    /// Emit a game event to the host page. Dropped beyond the per-frame cap.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() < self.max_events {
            self.events.push(event);
        } else {
            log::debug!("event kind {} dropped: per-frame cap reached", event.kind);
        }
    }

    /// Hand a finished session's score to the host for submission.
    pub fn report_score(&mut self, score: u32) {
        self.score_reports.push(score);
    }

    /// Scores reported since the last call.
    pub fn take_score_reports(&mut self) -> Vec<u32> {
        std::mem::take(&mut self.score_reports)
    }

    /// Clear per-frame transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of engine state plus the frame's draw list.
pub struct RenderContext<'a> {
    pub draw: &'a mut DrawList,
    pub effects: &'a EffectsState,
    pub now_ms: f64,
    pub world_width: f32,
    pub world_height: f32,
}

impl RenderContext<'_> {
    /// Draw the live particle bursts at the current point in the layer order.
    pub fn draw_particles(&mut self) {
        draw_particles(self.effects.particles.iter(), self.draw);
    }

    /// Draw floating labels at the current point in the layer order.
    pub fn draw_float_texts(&mut self) {
        draw_float_texts(self.effects.float_texts.iter(), self.now_ms, self.draw);
    }
}
