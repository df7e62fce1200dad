// Letterboxed viewport mapping the logical canvas onto the window

/// Where the canvas lands inside the window, in physical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    scale: f32,
}

impl Viewport {
    /// Largest uniform scale of the canvas that fits the window, centred
    pub fn letterbox(
        window_width: u32,
        window_height: u32,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Self {
        let canvas_w = canvas_width.max(1) as f32;
        let canvas_h = canvas_height.max(1) as f32;
        let scale = (window_width as f32 / canvas_w).min(window_height as f32 / canvas_h);
        let width = canvas_w * scale;
        let height = canvas_h * scale;

        Self {
            x: (window_width as f32 - width) / 2.0,
            y: (window_height as f32 - height) / 2.0,
            width,
            height,
            scale,
        }
    }

    /// Convert a window position (physical pixels) into canvas pixel coordinates
    ///
    /// Positions in the letterbox bars map outside the canvas range.
    pub fn window_to_canvas(&self, x: f64, y: f64) -> (i32, i32) {
        if self.scale <= 0.0 {
            return (i32::MIN, i32::MIN);
        }
        let cx = (x as f32 - self.x) / self.scale;
        let cy = (y as f32 - self.y) / self.scale;
        (cx.floor() as i32, cy.floor() as i32)
    }

    pub fn is_visible(&self) -> bool {
        self.width >= 1.0 && self.height >= 1.0
    }
}
