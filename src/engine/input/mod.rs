// Input handling system
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `config`: Input configuration and remapping
// - `manager`: Collects winit events into held sources
// - `snapshot`: The immutable per-tick view the game reads
//
// The game never polls input globally: each tick the host takes one
// `InputSnapshot` from the manager and passes it into the active scene.

pub mod action;
pub mod config;
pub mod manager;
pub mod snapshot;

// Re-export commonly used types
pub use action::Action;
pub use manager::InputManager;
pub use snapshot::InputSnapshot;
