// Math utilities and helper functions

/// Clamp a value between min and max
///
/// Unlike `f64::clamp` this never panics when `min > max`; the lower bound wins,
/// which is what a camera needs when the world is smaller than the screen.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value > max {
        if max < min {
            min
        } else {
            max
        }
    } else if value < min {
        min
    } else {
        value
    }
}

/// Integer pixel rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_clamp_inverted_bounds_prefers_min() {
        assert_eq!(clamp(5.0, 0.0, -10.0), 0.0);
        assert_eq!(clamp(-5.0, 0.0, -10.0), 0.0);
    }

    #[test]
    fn test_rect_half_open() {
        let rect = Rect::new(10, 10, 128, 64);
        assert!(rect.contains(10, 10));
        assert!(rect.contains(137, 73));
        assert!(!rect.contains(138, 10));
        assert!(!rect.contains(10, 74));
        assert!(!rect.contains(9, 10));
    }

    #[test]
    fn test_rect_empty() {
        assert!(Rect::new(0, 0, 0, 16).is_empty());
        assert!(!Rect::new(0, 0, 16, 16).is_empty());
    }
}
