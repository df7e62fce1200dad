// Clickable image button

use crate::core::Rect;
use crate::engine::assets::ImageRegion;
use crate::engine::renderer::{DrawOptions, Surface};

/// A button drawn from one of two atlas regions depending on its pushed state
#[derive(Debug, Clone)]
pub struct Button {
    pub x: f64,
    pub y: f64,
    /// Hit box width before scaling
    pub width: f64,
    /// Hit box height before scaling
    pub height: f64,
    pub scale: f64,
    pushed: bool,
    normal_image: ImageRegion,
    pushed_image: ImageRegion,
}

impl Button {
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        scale: f64,
        normal_image: ImageRegion,
        pushed_image: ImageRegion,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            scale,
            pushed: false,
            normal_image,
            pushed_image,
        }
    }

    /// Hit test in whole pixels, half-open on both axes
    pub fn contains(&self, mx: i32, my: i32) -> bool {
        self.hit_box().contains(mx, my)
    }

    /// Hit box with position and scaled size truncated to whole pixels
    pub fn hit_box(&self) -> Rect {
        Rect::new(
            self.x as i32,
            self.y as i32,
            (self.width * self.scale) as i32,
            (self.height * self.scale) as i32,
        )
    }

    pub fn set_pushed(&mut self, pushed: bool) {
        self.pushed = pushed;
    }

    pub fn is_pushed(&self) -> bool {
        self.pushed
    }

    /// Region for the current state
    pub fn image(&self) -> &ImageRegion {
        if self.pushed {
            &self.pushed_image
        } else {
            &self.normal_image
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_image(
            self.image(),
            &DrawOptions::at(self.x, self.y).scaled(self.scale),
        );
    }
}
