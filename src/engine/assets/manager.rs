// Central asset management system

use super::{AssetError, AssetLoader};
use crate::engine::renderer::{TextureHandle, TextureStore};
use anyhow::Result;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Central asset manager for the game
///
/// Handles loading and caching of decoded textures and JSON documents.
pub struct AssetManager {
    /// Asset loader
    loader: AssetLoader,

    /// Decoded textures
    textures: TextureStore,
}

impl AssetManager {
    /// Create a new asset manager rooted at `asset_path`
    pub fn new<P: AsRef<Path>>(asset_path: P) -> Self {
        Self {
            loader: AssetLoader::new(asset_path),
            textures: TextureStore::new(),
        }
    }

    /// Load and decode a texture from disk, returning the cached handle if already loaded
    pub fn load_texture(&mut self, name: &str) -> Result<TextureHandle> {
        if let Some(handle) = self.textures.find(name) {
            return Ok(handle);
        }

        let bytes = self.loader.load_bytes(name)?;
        self.insert_decoded(name, &bytes)
    }

    /// Decode an image compiled into the binary and store it under `name`
    pub fn load_embedded_texture(&mut self, name: &str, bytes: &[u8]) -> Result<TextureHandle> {
        if let Some(handle) = self.textures.find(name) {
            return Ok(handle);
        }
        self.insert_decoded(name, bytes)
    }

    /// Load and parse a JSON document
    pub fn load_json<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let text = self.loader.load_text(name)?;
        serde_json::from_str(&text).map_err(|e| {
            AssetError::LoadError(format!("Failed to parse {}: {}", name, e)).into()
        })
    }

    fn insert_decoded(&mut self, name: &str, bytes: &[u8]) -> Result<TextureHandle> {
        let image = image::load_from_memory(bytes).map_err(|source| AssetError::Decode {
            name: name.to_string(),
            source,
        })?;
        let handle = self.textures.insert(name, image.to_rgba8());
        log::debug!("Loaded texture {} as {:?}", name, handle);
        Ok(handle)
    }

    /// Decoded textures
    pub fn textures(&self) -> &TextureStore {
        &self.textures
    }

    /// Hand the decoded textures over to the renderer side
    pub fn into_textures(self) -> TextureStore {
        self.textures
    }
}
