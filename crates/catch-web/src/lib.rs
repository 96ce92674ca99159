pub mod app;
pub mod audio;
pub mod canvas;
pub mod dom;
pub mod input;
pub mod runner;
pub mod scoring;

pub use app::WebApp;
pub use runner::{FrameOutput, GameRunner};
pub use scoring::ScoreClient;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the `WebApp`
/// - `with_app()` helper function
/// - wasm-bindgen exports: `game_init`, `game_load_config`, `game_start`,
///   `game_end`, and raw input forwarders for hosts that own their listeners
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// catch_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `catch_engine::Game`
///   and has a `new()` constructor
/// - `$game_name`: A string literal used for log messages and DOM event names
///   (`<name>:event`, `<name>:refresh`)
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;
        use std::rc::Rc;

        thread_local! {
            static APP: RefCell<Option<Rc<$crate::WebApp<$game_type>>>> = RefCell::new(None);
        }

        fn with_app<R>(f: impl FnOnce(&$crate::WebApp<$game_type>) -> R) -> Option<R> {
            let app = APP.with(|cell| cell.borrow().clone());
            match app {
                Some(app) => Some(f(&app)),
                None => {
                    log::warn!("{}: not initialized, call game_init() first", $game_name);
                    None
                }
            }
        }

        /// Attach to `<canvas id=canvas_id>` and start the frame loop.
        /// `api_base` prefixes the score endpoint ("" = same origin).
        #[wasm_bindgen]
        pub fn game_init(canvas_id: &str, api_base: &str) -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let app = $crate::WebApp::new(<$game_type>::new(), $game_name, canvas_id, api_base)?;
            app.start()?;
            APP.with(|cell| {
                *cell.borrow_mut() = Some(app);
            });
            log::info!("{}: initialized", $game_name);
            Ok(())
        }

        #[wasm_bindgen]
        pub fn game_load_config(json: &str) -> Result<(), JsValue> {
            with_app(|app| app.load_config(json)).unwrap_or(Ok(()))
        }

        #[wasm_bindgen]
        pub fn game_start() {
            with_app(|app| {
                app.push_input(catch_engine::InputEvent::command(catch_engine::input::commands::START))
            });
        }

        #[wasm_bindgen]
        pub fn game_end() {
            with_app(|app| {
                app.push_input(catch_engine::InputEvent::command(catch_engine::input::commands::END))
            });
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_app(|app| app.push_input(catch_engine::InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_app(|app| app.push_input(catch_engine::InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_app(|app| app.push_input(catch_engine::InputEvent::KeyUp { key_code }));
        }
    };
}
