pub mod color;
pub mod commands;
pub mod traits;

// Re-export key types for convenient access
pub use color::Color;
pub use commands::{DrawCommand, DrawList, GradientStop, TextAlign};
pub use traits::{DrawTiming, FrameData, Renderer};
