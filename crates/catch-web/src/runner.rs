use catch_engine::{
    DrawList, EngineContext, FrameData, Game, GameConfig, GameEvent, InputEvent, InputQueue,
    RenderContext, SoundBank, SoundEvent,
};

/// Everything one frame hands to the host, detached from the runner so host
/// callbacks may re-enter it.
#[derive(Debug, Default, PartialEq)]
pub struct FrameOutput {
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
    pub scores: Vec<u32>,
}

/// Generic game runner that wires up the engine loop.
///
/// Holds no browser handles, so it runs headless in native tests. The
/// `WebApp` owns one behind `Rc<RefCell<_>>` and feeds it frames and input.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    draw_list: DrawList,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            ctx: EngineContext::from_config(&config),
            game,
            input: InputQueue::new(),
            draw_list: DrawList::new(),
            config,
            initialized: false,
        }
    }

    /// Same as `new`, but overrides the RNG seed (the browser seeds from `Math.random`).
    pub fn with_seed(game: G, seed: u64) -> Self {
        let mut config = game.config();
        config.seed = seed;
        Self {
            ctx: EngineContext::from_config(&config),
            game,
            input: InputQueue::new(),
            draw_list: DrawList::new(),
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Forward tuning JSON to the game.
    pub fn load_config(&mut self, json: &str) -> Result<(), serde_json::Error> {
        self.game.load_config(json)
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one displayed frame: update game, tick effects, rebuild the draw list.
    pub fn tick(&mut self, frame_ms: f64) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        self.ctx.clock.advance(frame_ms);
        self.game.update(&mut self.ctx, &self.input);
        self.ctx.effects.tick(self.ctx.clock.now_ms());

        // Each event is seen by exactly one update
        self.input.clear();

        self.draw_list.clear();
        let mut render_ctx = RenderContext {
            draw: &mut self.draw_list,
            effects: &self.ctx.effects,
            now_ms: self.ctx.clock.now_ms(),
            world_width: self.config.world_width,
            world_height: self.config.world_height,
        };
        self.game.render(&mut render_ctx);
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn frame_data(&self) -> FrameData<'_> {
        FrameData {
            commands: self.draw_list.commands(),
            world_width: self.config.world_width,
            world_height: self.config.world_height,
        }
    }

    /// Sound events emitted during the last tick.
    pub fn sounds(&self) -> &[SoundEvent] {
        &self.ctx.sounds
    }

    /// Game events emitted during the last tick.
    pub fn events(&self) -> &[GameEvent] {
        &self.ctx.events
    }

    /// Move this frame's sounds, events and pending score reports out.
    pub fn take_output(&mut self) -> FrameOutput {
        FrameOutput {
            sounds: std::mem::take(&mut self.ctx.sounds),
            events: std::mem::take(&mut self.ctx.events),
            scores: self.ctx.take_score_reports(),
        }
    }

    /// Final scores reported since the last call; each is submitted once.
    pub fn take_score_reports(&mut self) -> Vec<u32> {
        self.ctx.take_score_reports()
    }

    pub fn sound_bank(&self) -> SoundBank {
        self.game.sound_bank()
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }
}
