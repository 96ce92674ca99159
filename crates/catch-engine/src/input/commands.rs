//! Host-page command kinds carried by `InputEvent::Custom`.

/// Start a session (also "play again").
pub const START: u32 = 1;
/// Force-end the running session.
pub const END: u32 = 2;
