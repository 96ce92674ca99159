pub mod effects;
pub mod render;
