// extensions/mod.rs
//
// Optional extension modules for the catch engine.
// Decoupled from Scene/EngineContext; games opt in by calling them.

pub mod easing;

pub use easing::{approach, ease, lerp, Easing};
