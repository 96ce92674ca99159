pub mod api;
pub mod assets;
pub mod core;
pub mod extensions;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig, RenderContext};
pub use api::types::{EntityId, GameEvent, SoundEvent};
pub use assets::sound_bank::{Note, SoundBank, SoundCue, Waveform};
pub use crate::core::scene::{Scene, SceneEntity};
pub use crate::core::time::{FrameClock, Interval};
pub use input::keys::HeldKeys;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::{
    Color, DrawCommand, DrawList, DrawTiming, FrameData, GradientStop, Renderer,
    TextAlign,
};
pub use systems::effects::{EffectsState, FloatText, Particle, Rng};

// Extensions: decoupled optional helpers
pub use extensions::{approach, ease, lerp, Easing};
