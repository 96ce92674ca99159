//! Catch: steer a paddle under falling balls. Green scores, red costs,
//! power-ups freeze the clock, double points, or resize the paddle.

pub mod ball;
pub mod catcher;
pub mod config;
mod draw;
pub mod events;
pub mod game;
pub mod powerups;
pub mod session;
pub mod sounds;

pub use config::CatchConfig;
pub use game::CatchGame;

use wasm_bindgen::prelude::*;

catch_web::export_game!(CatchGame, "catch-game");
