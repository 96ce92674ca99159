//! Browser host: owns the runner and the Canvas2D, audio and scoring backends,
//! and drives them from `requestAnimationFrame`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use catch_engine::{Game, InputEvent, Renderer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::audio::AudioPlayer;
use crate::canvas::Canvas2dRenderer;
use crate::dom;
use crate::input;
use crate::runner::GameRunner;
use crate::scoring::ScoreClient;

/// Frame time assumed for the very first frame (no previous timestamp).
const FIRST_FRAME_MS: f64 = 16.0;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct WebApp<G: Game + 'static> {
    name: &'static str,
    runner: RefCell<GameRunner<G>>,
    renderer: RefCell<Canvas2dRenderer>,
    audio: RefCell<AudioPlayer>,
    scores: ScoreClient,
    last_ts: Cell<Option<f64>>,
}

impl<G: Game + 'static> WebApp<G> {
    /// Build the app around an existing `<canvas id=canvas_id>`.
    pub fn new(game: G, name: &'static str, canvas_id: &str, api_base: &str) -> Result<Rc<Self>, JsValue> {
        let canvas = dom::canvas_by_id(canvas_id)?;
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;

        let mut runner = GameRunner::with_seed(game, seed);
        runner.init();

        let renderer = Canvas2dRenderer::new(canvas, runner.world_width(), runner.world_height())?;
        let audio = AudioPlayer::new(runner.sound_bank());
        let scores = ScoreClient::new(api_base, format!("{}:refresh", name));

        log::info!(
            "{}: {} {}x{}, audio {}",
            name,
            renderer.backend(),
            runner.world_width(),
            runner.world_height(),
            if audio.is_enabled() { "on" } else { "off" }
        );

        Ok(Rc::new(Self {
            name,
            runner: RefCell::new(runner),
            renderer: RefCell::new(renderer),
            audio: RefCell::new(audio),
            scores,
            last_ts: Cell::new(None),
        }))
    }

    /// Attach DOM listeners and start the animation loop.
    pub fn start(self: &Rc<Self>) -> Result<(), JsValue> {
        input::attach(self)?;
        self.start_loop();
        Ok(())
    }

    pub fn canvas(&self) -> HtmlCanvasElement {
        self.renderer.borrow().canvas().clone()
    }

    pub fn world_size(&self) -> (f32, f32) {
        let runner = self.runner.borrow();
        (runner.world_width(), runner.world_height())
    }

    /// Queue an input event for the next frame.
    pub fn push_input(&self, event: InputEvent) {
        if matches!(
            event,
            InputEvent::PointerDown { .. } | InputEvent::KeyDown { .. } | InputEvent::Custom { .. }
        ) {
            // Any user gesture may unlock a suspended AudioContext
            self.audio.borrow().unlock();
        }
        self.runner.borrow_mut().push_input(event);
    }

    /// Apply tuning JSON; invalid JSON keeps the previous tuning.
    pub fn load_config(&self, json: &str) -> Result<(), JsValue> {
        let mut runner = self.runner.borrow_mut();
        match runner.load_config(json) {
            Ok(()) => {
                self.audio.borrow_mut().set_bank(runner.sound_bank());
                Ok(())
            }
            Err(err) => {
                log::warn!("{}: config rejected: {}", self.name, err);
                Err(JsValue::from_str(&err.to_string()))
            }
        }
    }

    /// Run one frame at animation timestamp `ts` (ms).
    pub fn frame(&self, ts: f64) {
        let frame_ms = self.last_ts.get().map(|last| ts - last).unwrap_or(FIRST_FRAME_MS);
        self.last_ts.set(Some(ts));

        let output = {
            let mut runner = self.runner.borrow_mut();
            runner.tick(frame_ms);
            let timing = self.renderer.borrow_mut().draw(&runner.frame_data());
            if timing.failed > 0 {
                log::debug!("{}: {} of {} draw commands failed", self.name, timing.failed, timing.commands);
            }
            runner.take_output()
        };

        // No borrows held past here: event listeners may call back into the game
        {
            let audio = self.audio.borrow();
            for sound in &output.sounds {
                audio.play(*sound);
            }
        }

        let event_name = format!("{}:event", self.name);
        for event in &output.events {
            if let Err(err) = dom::dispatch(&event_name, Some(&event.to_json())) {
                log::warn!("{}: event dispatch failed: {:?}", self.name, err);
            }
        }

        for score in output.scores {
            self.scores.submit(score);
        }
    }

    fn start_loop(self: &Rc<Self>) {
        let f: FrameCallback = Rc::new(RefCell::new(None));
        let g = f.clone();
        let app = self.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            app.frame(ts);
            request_frame(&f);
        }) as Box<dyn FnMut(f64)>));
        request_frame(&g);
    }
}

fn request_frame(callback: &FrameCallback) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(closure) = callback.borrow().as_ref() {
        if let Err(err) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {:?}", err);
        }
    }
}
