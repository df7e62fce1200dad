// Sprite atlas: fixed-size grids of sub-images cut from one texture

use crate::core::Rect;
use crate::engine::renderer::TextureHandle;

/// A rectangular region of a loaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRegion {
    /// Texture the region lives in
    pub texture: TextureHandle,
    /// Source rectangle in texture pixels
    pub rect: Rect,
}

impl ImageRegion {
    pub fn new(texture: TextureHandle, rect: Rect) -> Self {
        Self { texture, rect }
    }
}

/// Immutable grid of equally sized regions, addressed by (row, column)
///
/// An atlas built from a missing image is simply empty: every lookup
/// returns `None` and nothing gets drawn.
#[derive(Debug, Clone, Default)]
pub struct SpriteAtlas {
    rows: usize,
    columns: usize,
    regions: Vec<ImageRegion>,
}

impl SpriteAtlas {
    /// Atlas with no sprites
    pub fn empty() -> Self {
        Self::default()
    }

    /// Slice a texture into `rows` x `columns` cells of `cell_size` pixels,
    /// starting at the top-left corner
    pub fn from_grid(texture: TextureHandle, rows: usize, columns: usize, cell_size: i32) -> Self {
        let mut regions = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for column in 0..columns {
                let rect = Rect::new(
                    column as i32 * cell_size,
                    row as i32 * cell_size,
                    cell_size,
                    cell_size,
                );
                regions.push(ImageRegion::new(texture, rect));
            }
        }

        Self {
            rows,
            columns,
            regions,
        }
    }

    /// Look up a single cell
    pub fn get(&self, row: usize, column: usize) -> Option<&ImageRegion> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.regions.get(row * self.columns + column)
    }

    #[cfg(test)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[cfg(test)]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_slicing() {
        let atlas = SpriteAtlas::from_grid(TextureHandle::from_index(0), 7, 4, 16);

        assert_eq!(atlas.rows(), 7);
        assert_eq!(atlas.columns(), 4);
        assert_eq!(atlas.get(0, 0).unwrap().rect, Rect::new(0, 0, 16, 16));
        assert_eq!(atlas.get(2, 3).unwrap().rect, Rect::new(48, 32, 16, 16));
        assert_eq!(atlas.get(6, 1).unwrap().rect, Rect::new(16, 96, 16, 16));
    }

    #[test]
    fn test_out_of_range_lookup() {
        let atlas = SpriteAtlas::from_grid(TextureHandle::from_index(0), 7, 4, 16);
        assert!(atlas.get(7, 0).is_none());
        assert!(atlas.get(0, 4).is_none());
    }

    #[test]
    fn test_empty_atlas() {
        let atlas = SpriteAtlas::empty();
        assert!(atlas.is_empty());
        assert!(atlas.get(0, 0).is_none());
    }
}
