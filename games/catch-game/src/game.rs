use catch_engine::input::{commands, keys};
use catch_engine::{
    Color, EngineContext, Game, GameConfig, GameEvent, HeldKeys, InputEvent, InputQueue,
    RenderContext, Scene, SoundBank,
};
use crate::ball::{Ball, BallKind};
use crate::catcher::Catcher;
use crate::config::CatchConfig;
use crate::session::{Countdown, Phase, Session};
use crate::{draw, events, sounds};

const WORLD_WIDTH: f32 = 400.0;
const WORLD_HEIGHT: f32 = 600.0;

const GOOD_TEXT: Color = Color::hex(0x4ade80);
const BAD_TEXT: Color = Color::hex(0xf87171);

pub struct CatchGame {
    config: CatchConfig,
    session: Session,
    catcher: Catcher,
    balls: Scene<Ball>,
    keys: HeldKeys,
}

impl CatchGame {
    pub fn new() -> Self {
        Self::with_config(CatchConfig::default())
    }

    pub fn with_config(config: CatchConfig) -> Self {
        Self {
            session: Session::new(&config),
            catcher: Self::fresh_catcher(&config),
            balls: Scene::new(),
            keys: HeldKeys::new(),
            config,
        }
    }

    fn fresh_catcher(config: &CatchConfig) -> Catcher {
        Catcher::new(
            WORLD_WIDTH,
            WORLD_HEIGHT - config.catcher_offset,
            config.catcher_height,
            config.catcher_width,
        )
    }

    pub fn config(&self) -> &CatchConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn catcher(&self) -> &Catcher {
        &self.catcher
    }

    pub fn balls(&self) -> &Scene<Ball> {
        &self.balls
    }

    /// Put a ball into play directly, bypassing the spawner.
    pub fn drop_ball(&mut self, ball: Ball) {
        self.balls.spawn(ball);
    }

    /// Begin a session. No-op while one is running.
    pub fn start(&mut self, ctx: &mut EngineContext) {
        let now = ctx.now_ms();
        if !self.session.start(now, &self.config) {
            return;
        }
        self.balls.clear();
        self.catcher = Self::fresh_catcher(&self.config);
        ctx.effects.clear();
        ctx.emit_event(GameEvent::new(events::SESSION_STARTED).with_a(self.config.session_seconds as f32));
        log::info!("catch: session started ({}s)", self.config.session_seconds);
    }

    /// Finish the running session and report its score once.
    pub fn end(&mut self, ctx: &mut EngineContext) {
        let Some(score) = self.session.end() else {
            return;
        };
        self.balls.clear();
        ctx.emit_sound(sounds::WIN_JINGLE);
        ctx.report_score(score);
        ctx.emit_event(
            GameEvent::new(events::SESSION_ENDED)
                .with_a(score as f32)
                .with_b(self.session.catches() as f32),
        );
        log::info!("catch: session ended, score {}", score);
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        if let Some((x, _)) = input.last_pointer() {
            self.catcher.aim_at(x, WORLD_WIDTH);
        }
        for event in input.iter() {
            match *event {
                InputEvent::KeyDown { key_code } => {
                    self.keys.press(key_code);
                    if (key_code == keys::ENTER || key_code == keys::SPACE) && !self.session.is_running() {
                        self.start(ctx);
                    }
                }
                InputEvent::KeyUp { key_code } => self.keys.release(key_code),
                InputEvent::Custom { kind: commands::START, .. } => self.start(ctx),
                InputEvent::Custom { kind: commands::END, .. } => self.end(ctx),
                _ => {}
            }
        }
    }

    fn spawn_ball(&mut self, ctx: &mut EngineContext) {
        let id = ctx.next_id();
        let ball = Ball::spawn(id, &mut ctx.effects.rng, WORLD_WIDTH);
        self.balls.spawn(ball);
    }

    fn apply_catch(&mut self, ctx: &mut EngineContext, ball: &Ball) {
        let now = ctx.now_ms();
        self.session.record_catch();
        ctx.effects
            .spawn_burst(ball.pos, self.config.burst_particles, self.config.burst_speed, ball.color);

        match ball.kind {
            BallKind::Good | BallKind::Bad => {
                let multiplier = if self.session.power.is_bonus(now) {
                    self.config.bonus_multiplier
                } else {
                    1
                };
                let delta = ball.points * multiplier;
                self.add_score(ctx, delta);
                let (text, color) = if delta >= 0 {
                    (format!("+{}", delta), GOOD_TEXT)
                } else {
                    (delta.to_string(), BAD_TEXT)
                };
                ctx.effects.add_float_text(text, ball.pos, color, now);
                ctx.emit_sound(if delta >= 0 { sounds::CATCH_GOOD } else { sounds::CATCH_BAD });
            }
            kind => {
                self.session.power.activate(kind, now, &self.config);
                if kind == BallKind::Bonus {
                    self.add_score(ctx, self.config.bonus_points);
                }
                if let Some(label) = kind.announcement() {
                    ctx.effects.add_float_text(label, ball.pos, kind.color().lighten(0.3), now);
                }
                ctx.emit_sound(sounds::POWER_UP);
                ctx.emit_event(
                    GameEvent::new(events::POWER_UP)
                        .with_a(kind.code() as f32)
                        .with_b(self.duration_of(kind) as f32),
                );
                log::debug!("catch: power-up {:?}", kind);
            }
        }
    }

    fn duration_of(&self, kind: BallKind) -> f64 {
        match kind {
            BallKind::Freeze => self.config.freeze_ms,
            BallKind::Bonus => self.config.bonus_ms,
            BallKind::Shrink | BallKind::Expand => self.config.resize_ms,
            BallKind::Good | BallKind::Bad => 0.0,
        }
    }

    fn add_score(&mut self, ctx: &mut EngineContext, delta: i32) {
        let applied = self.session.apply_points(delta);
        ctx.emit_event(
            GameEvent::new(events::SCORE_CHANGED)
                .with_a(self.session.score() as f32)
                .with_b(applied as f32),
        );
    }

    fn run_timers(&mut self, ctx: &mut EngineContext) {
        let now = ctx.now_ms();
        match self.session.poll_countdown(now) {
            Countdown::Ticked(left) => {
                ctx.emit_event(GameEvent::new(events::TIME_CHANGED).with_a(left as f32));
            }
            Countdown::Expired => {
                ctx.emit_event(GameEvent::new(events::TIME_CHANGED).with_a(0.0));
                self.end(ctx);
                return;
            }
            Countdown::Frozen | Countdown::Waiting => {}
        }
        if self.session.poll_spawn(now) {
            self.spawn_ball(ctx);
        }
    }

    fn move_catcher(&mut self, ctx: &EngineContext) {
        let axis = self.keys.horizontal_axis();
        if axis != 0.0 {
            self.catcher.nudge(axis * self.config.key_step, WORLD_WIDTH);
        }
        self.catcher.target_width = self.session.power.target_width(ctx.now_ms(), &self.config);
        self.catcher.smooth(
            self.config.position_smoothing,
            self.config.width_smoothing,
            WORLD_WIDTH,
        );
    }

    fn move_balls(&mut self, ctx: &mut EngineContext) {
        let scale = ctx.clock.frame_scale();
        let elapsed = ctx.now_ms();
        let catcher = &self.catcher;
        let mut caught = Vec::new();
        self.balls.retain_mut(|ball| {
            ball.advance(scale, elapsed, WORLD_WIDTH);
            if catcher.catches(ball) {
                caught.push(ball.clone());
                return false;
            }
            !ball.is_past(WORLD_HEIGHT)
        });
        for ball in &caught {
            self.apply_catch(ctx, ball);
        }
    }
}

impl Default for CatchGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for CatchGame {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            ..GameConfig::default()
        }
    }

    fn load_config(&mut self, json: &str) -> Result<(), serde_json::Error> {
        self.config = CatchConfig::from_json(json)?;
        if self.session.phase() == Phase::Idle {
            self.session = Session::new(&self.config);
            self.catcher = Self::fresh_catcher(&self.config);
        }
        log::info!("catch: config loaded");
        Ok(())
    }

    fn sound_bank(&self) -> SoundBank {
        sounds::bank()
    }

    fn init(&mut self, _ctx: &mut EngineContext) {
        log::info!("catch: ready ({}x{})", WORLD_WIDTH, WORLD_HEIGHT);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        self.handle_input(ctx, input);
        self.run_timers(ctx);
        self.move_catcher(ctx);
        if self.session.is_running() {
            self.move_balls(ctx);
        }
    }

    fn render(&self, ctx: &mut RenderContext) {
        draw::frame(self, ctx);
    }
}
