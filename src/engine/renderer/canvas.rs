// CPU canvas: composites draw calls into an RGBA framebuffer

use super::font;
use super::surface::{Color, DrawOptions, Surface};
use super::texture::TextureStore;
use crate::engine::assets::ImageRegion;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// Off-screen framebuffer at the game's logical resolution
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width.max(1), height.max(1)),
        }
    }

    /// Match the current layout size; contents are discarded when the size changes
    pub fn resize(&mut self, width: u32, height: u32) {
        let (width, height) = (width.max(1), height.max(1));
        if self.pixels.dimensions() != (width, height) {
            log::info!("Canvas resized to {}x{}", width, height);
            self.pixels = RgbaImage::new(width, height);
        }
    }

    /// Raw framebuffer, ready for upload
    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Borrow the canvas as a drawable surface that samples from `textures`
    pub fn surface<'a>(&'a mut self, textures: &'a TextureStore) -> CanvasSurface<'a> {
        CanvasSurface {
            pixels: &mut self.pixels,
            textures,
        }
    }
}

/// A canvas paired with the textures it can draw from
pub struct CanvasSurface<'a> {
    pixels: &'a mut RgbaImage,
    textures: &'a TextureStore,
}

impl Surface for CanvasSurface<'_> {
    fn size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    fn clear(&mut self) {
        self.fill([0, 0, 0, 0]);
    }

    fn fill(&mut self, color: Color) {
        let (width, height) = self.pixels.dimensions();
        *self.pixels = RgbaImage::from_pixel(width, height, Rgba(color));
    }

    fn draw_image(&mut self, region: &ImageRegion, options: &DrawOptions) {
        let Some(source) = self.textures.get(region.texture) else {
            return;
        };
        let rect = region.rect;
        if rect.is_empty() || rect.x < 0 || rect.y < 0 || options.scale <= 0.0 {
            return;
        }

        // crop_imm clamps the rectangle to the texture bounds
        let mut sprite = imageops::crop_imm(
            source,
            rect.x as u32,
            rect.y as u32,
            rect.width as u32,
            rect.height as u32,
        )
        .to_image();
        if sprite.width() == 0 || sprite.height() == 0 {
            return;
        }

        if options.scale != 1.0 {
            let width = (sprite.width() as f64 * options.scale).round() as u32;
            let height = (sprite.height() as f64 * options.scale).round() as u32;
            if width == 0 || height == 0 {
                return;
            }
            sprite = imageops::resize(&sprite, width, height, FilterType::Nearest);
        }

        // overlay clips against the canvas and alpha-blends
        let x = options.translate.x.floor() as i64;
        let y = options.translate.y.floor() as i64;
        imageops::overlay(&mut *self.pixels, &sprite, x, y);
    }

    fn debug_print(&mut self, text: &str, x: i32, y: i32) {
        let Some(atlas) = self.textures.find(font::DEBUG_FONT_NAME) else {
            return;
        };
        for (index, c) in text.chars().enumerate() {
            let glyph_x = x + index as i32 * font::ADVANCE;
            let glyph = font::glyph_region(atlas, c);
            self.draw_image(&glyph, &DrawOptions::at(glyph_x as f64, y as f64));
        }
    }
}
