// Debug text font
//
// A 96x48 glyph atlas embedded in the binary: printable ASCII from ' ' in a
// 16 column grid of 6x8 cells, each glyph 5x7 in the cell's top-left corner.
// Lowercase cells repeat the uppercase glyphs.

use super::texture::TextureHandle;
use crate::core::Rect;
use crate::engine::assets::ImageRegion;

/// Built-in glyph atlas embedded at compile time.
pub const DEBUG_FONT_PNG: &[u8] = include_bytes!("../../../resources/debug_font_6x8.png");
/// Name the decoded atlas is registered under in the texture store
pub const DEBUG_FONT_NAME: &str = "debug_font_6x8.png";

pub const GLYPH_WIDTH: i32 = 5;
pub const GLYPH_HEIGHT: i32 = 7;
/// Horizontal distance between the starts of consecutive glyphs
pub const ADVANCE: i32 = GLYPH_WIDTH + 1;

const CELL_HEIGHT: i32 = 8;
const ATLAS_COLUMNS: u32 = 16;
const FIRST_CHAR: u32 = ' ' as u32;
const LAST_CHAR: u32 = '~' as u32;

/// Atlas cell of a character; anything outside printable ASCII shows as '?'
fn cell_index(c: char) -> u32 {
    let code = c as u32;
    if (FIRST_CHAR..=LAST_CHAR).contains(&code) {
        code - FIRST_CHAR
    } else {
        '?' as u32 - FIRST_CHAR
    }
}

/// Region of the atlas holding the glyph for `c`
pub fn glyph_region(atlas: TextureHandle, c: char) -> ImageRegion {
    let index = cell_index(c);
    let column = (index % ATLAS_COLUMNS) as i32;
    let row = (index / ATLAS_COLUMNS) as i32;
    ImageRegion::new(
        atlas,
        Rect::new(column * ADVANCE, row * CELL_HEIGHT, GLYPH_WIDTH, GLYPH_HEIGHT),
    )
}

/// Width in pixels of a rendered line of text
pub fn text_width(text: &str) -> i32 {
    let count = text.chars().count() as i32;
    if count == 0 {
        0
    } else {
        count * ADVANCE - 1
    }
}

/// Decode the embedded atlas
#[cfg(test)]
pub fn decode_atlas() -> image::ImageResult<image::RgbaImage> {
    image::load_from_memory(DEBUG_FONT_PNG).map(|image| image.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::imageops;

    fn glyph_pixels(atlas: &image::RgbaImage, c: char) -> Vec<(u32, u32)> {
        let rect = glyph_region(TextureHandle::from_index(0), c).rect;
        let cell = imageops::crop_imm(
            atlas,
            rect.x as u32,
            rect.y as u32,
            rect.width as u32,
            rect.height as u32,
        );
        cell.to_image()
            .enumerate_pixels()
            .filter(|(_, _, pixel)| pixel[3] != 0)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_atlas_decodes() {
        let atlas = decode_atlas().unwrap();
        assert_eq!(atlas.dimensions(), (96, 48));
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("A"), 5);
        assert_eq!(text_width("Bullet Quest 2D"), 15 * 6 - 1);
    }

    #[test]
    fn test_glyph_regions() {
        let atlas = TextureHandle::from_index(3);
        assert_eq!(glyph_region(atlas, ' ').rect, Rect::new(0, 0, 5, 7));
        assert_eq!(glyph_region(atlas, 'A').rect, Rect::new(6, 16, 5, 7));
        assert_eq!(glyph_region(atlas, 'A').texture, atlas);
    }

    #[test]
    fn test_unknown_char_uses_question_mark() {
        let atlas = TextureHandle::from_index(0);
        assert_eq!(glyph_region(atlas, 'é'), glyph_region(atlas, '?'));
        assert_eq!(glyph_region(atlas, '\n'), glyph_region(atlas, '?'));
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        let atlas = decode_atlas().unwrap();
        assert_eq!(glyph_pixels(&atlas, 'q'), glyph_pixels(&atlas, 'Q'));
        assert!(!glyph_pixels(&atlas, 'q').is_empty());
    }

    #[test]
    fn test_space_is_blank() {
        let atlas = decode_atlas().unwrap();
        assert!(glyph_pixels(&atlas, ' ').is_empty());
    }

    #[test]
    fn test_letter_l_shape() {
        let atlas = decode_atlas().unwrap();
        let pixels = glyph_pixels(&atlas, 'L');

        // Left column plus a full bottom row
        assert!(pixels.contains(&(0, 0)));
        assert!(pixels.contains(&(4, 6)));
        assert!(!pixels.contains(&(4, 0)));
        assert_eq!(pixels.len(), 7 + 4);
    }
}
