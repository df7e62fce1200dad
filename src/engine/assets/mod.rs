// Asset management system
//
// Loads decoded images and tile maps from disk into CPU-side stores.
// Slicing images into sprite grids happens here too, so the game layer
// only ever sees handles and pixel rectangles.

mod atlas;
mod loader;
mod manager;

pub use atlas::{ImageRegion, SpriteAtlas};
pub use loader::AssetLoader;
pub use manager::AssetManager;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to load asset: {0}")]
    LoadError(String),

    #[error("Failed to decode image {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid tile map {name}: {reason}")]
    InvalidMap { name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
