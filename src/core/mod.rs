// Core utilities shared by the engine and game layers

pub mod config;
pub mod math;

pub use config::GameConfig;
pub use math::Rect;
