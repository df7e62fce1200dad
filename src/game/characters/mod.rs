// Character system
//
// This module contains everything related to characters:
// - Character data and the player wrapper
// - Movement and facing rules
// - Walk cycle animation state

pub mod animation;
pub mod character;
pub mod movement;

// Re-export commonly used types
pub use character::{CharacterId, CharacterKind, CharacterManager, Player};
