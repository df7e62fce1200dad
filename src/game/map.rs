// Tile maps: Tiled JSON layers drawn from a 16x16 tileset

use crate::core::Rect;
use crate::engine::assets::{AssetError, ImageRegion};
use crate::engine::renderer::{DrawOptions, Surface, TextureHandle};
use glam::DVec2;
use serde::Deserialize;

/// Edge length of a tile, in the tileset and on screen
pub const TILE_SIZE: i32 = 16;

/// Answers whether an entity may stand at a position
pub trait CollisionMap {
    fn can_move_here(&self, position: DVec2) -> bool;
}

/// One row-major grid of tile ids; 0 and below are empty
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TileLayer {
    #[serde(default)]
    pub name: String,
    /// Tiles per row; object layers have none
    #[serde(default)]
    pub width: usize,
    #[serde(default)]
    pub data: Vec<i64>,
}

impl TileLayer {
    #[cfg(test)]
    pub fn new(width: usize, data: Vec<i64>) -> Self {
        Self {
            name: String::new(),
            width,
            data,
        }
    }

    /// Number of rows, counting a partial last row
    pub fn rows(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.data.len().div_ceil(self.width)
        }
    }
}

/// A map exported from Tiled as JSON
///
/// Only tile layers with data are used; object layers deserialize with
/// empty data and draw nothing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TileMap {
    /// Map width in tiles; derived from the layers when absent
    #[serde(default)]
    pub width: usize,
    /// Map height in tiles; derived from the layers when absent
    #[serde(default)]
    pub height: usize,
    pub layers: Vec<TileLayer>,
}

impl TileMap {
    #[cfg(test)]
    pub fn new(layers: Vec<TileLayer>) -> Self {
        Self {
            width: 0,
            height: 0,
            layers,
        }
    }

    /// Reject layers that cannot be laid out
    pub fn validate(&self, name: &str) -> Result<(), AssetError> {
        for (index, layer) in self.layers.iter().enumerate() {
            if layer.width == 0 && !layer.data.is_empty() {
                return Err(AssetError::InvalidMap {
                    name: name.to_string(),
                    reason: format!("layer {} has tile data but zero width", index),
                });
            }
        }
        Ok(())
    }

    /// Map size in tiles
    pub fn size_in_tiles(&self) -> (usize, usize) {
        let width = self
            .layers
            .iter()
            .map(|layer| layer.width)
            .max()
            .unwrap_or(0)
            .max(self.width);
        let height = self
            .layers
            .iter()
            .map(TileLayer::rows)
            .max()
            .unwrap_or(0)
            .max(self.height);
        (width, height)
    }

    /// Map size in pixels
    pub fn pixel_size(&self) -> (u32, u32) {
        let (width, height) = self.size_in_tiles();
        (
            width as u32 * TILE_SIZE as u32,
            height as u32 * TILE_SIZE as u32,
        )
    }
}

impl CollisionMap for TileMap {
    /// Inside the map's pixel bounds
    fn can_move_here(&self, position: DVec2) -> bool {
        let (width, height) = self.pixel_size();
        position.x >= 0.0
            && position.y >= 0.0
            && position.x < width as f64
            && position.y < height as f64
    }
}

/// Tileset image with its derived layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tileset {
    pub texture: TextureHandle,
    tiles_per_row: i32,
}

impl Tileset {
    /// Layout derived from the loaded image's width
    pub fn new(texture: TextureHandle, image_width: u32) -> Self {
        Self {
            texture,
            tiles_per_row: image_width as i32 / TILE_SIZE,
        }
    }

    #[cfg(test)]
    pub fn tiles_per_row(&self) -> i32 {
        self.tiles_per_row
    }

    /// Source region of a 1-based tile id
    pub fn region(&self, id: i64) -> Option<ImageRegion> {
        if id <= 0 || self.tiles_per_row <= 0 {
            return None;
        }
        let index = (id - 1) as i32;
        let column = index % self.tiles_per_row;
        let row = index / self.tiles_per_row;
        Some(ImageRegion::new(
            self.texture,
            Rect::new(column * TILE_SIZE, row * TILE_SIZE, TILE_SIZE, TILE_SIZE),
        ))
    }
}

/// Draw layers in order, each row-major, shifted by `offset`
pub fn draw_layers(
    surface: &mut dyn Surface,
    layers: &[TileLayer],
    tileset: &Tileset,
    offset: DVec2,
) {
    for layer in layers {
        if layer.width == 0 {
            continue;
        }
        for (index, &id) in layer.data.iter().enumerate() {
            let Some(region) = tileset.region(id) else {
                continue;
            };
            let x = (index % layer.width) as i32 * TILE_SIZE;
            let y = (index / layer.width) as i32 * TILE_SIZE;
            surface.draw_image(
                &region,
                &DrawOptions::at(x as f64 + offset.x, y as f64 + offset.y),
            );
        }
    }
}
