// Abstract drawable surface
//
// Scenes only ever talk to `dyn Surface`. The game binary backs it with
// a CPU canvas; tests back it with a recorder.

use super::font;
use crate::engine::assets::ImageRegion;
use glam::DVec2;

/// RGBA colour, 8 bits per channel
pub type Color = [u8; 4];

/// Placement of an image on the surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawOptions {
    /// Destination of the image's top-left corner, in surface pixels
    pub translate: DVec2,
    /// Uniform scale applied before translation
    pub scale: f64,
}

impl DrawOptions {
    /// Draw unscaled with the top-left corner at (x, y)
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            translate: DVec2::new(x, y),
            scale: 1.0,
        }
    }

    /// Same placement with a uniform scale
    pub fn scaled(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self::at(0.0, 0.0)
    }
}

/// Something draw calls can be issued against
pub trait Surface {
    /// Surface size in pixels
    fn size(&self) -> (u32, u32);

    /// Reset every pixel to transparent black
    fn clear(&mut self);

    /// Paint every pixel with a solid colour
    fn fill(&mut self, color: Color);

    /// Copy an image region onto the surface
    fn draw_image(&mut self, region: &ImageRegion, options: &DrawOptions);

    /// Draw debug text with its top-left corner at (x, y)
    fn debug_print(&mut self, text: &str, x: i32, y: i32);
}

/// Draw a line of debug text centred horizontally, at half the surface height
pub fn draw_text_at_center(surface: &mut dyn Surface, text: &str) {
    let (width, height) = surface.size();
    let x = (width as i32 - font::text_width(text)) / 2;
    let y = height as i32 / 2;
    surface.debug_print(text, x, y);
}

/// A recorded draw call
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Fill(Color),
    Image {
        region: ImageRegion,
        options: DrawOptions,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
    },
}

/// Surface that records draw calls instead of rasterising them
#[cfg(test)]
#[derive(Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    pub commands: Vec<DrawCommand>,
}

#[cfg(test)]
impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// All image draws, in issue order
    pub fn images(&self) -> Vec<(ImageRegion, DrawOptions)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Image { region, options } => Some((*region, *options)),
                _ => None,
            })
            .collect()
    }

    /// All debug text lines, in issue order
    pub fn texts(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn draw_image(&mut self, region: &ImageRegion, options: &DrawOptions) {
        self.commands.push(DrawCommand::Image {
            region: *region,
            options: *options,
        });
    }

    fn debug_print(&mut self, text: &str, x: i32, y: i32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
        });
    }
}
