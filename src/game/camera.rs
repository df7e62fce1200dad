// Camera following a character, clamped to the world

use crate::core::math::clamp;
use crate::game::characters::CharacterId;
use glam::DVec2;

/// View offset into the world
///
/// The camera only remembers *which* character it follows; the owner
/// supplies positions when updating.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Top-left of the view in world pixels
    pub position: DVec2,
    screen: DVec2,
    world: DVec2,
    follow: Option<CharacterId>,
}

impl Camera {
    pub fn new(screen_width: u32, screen_height: u32, world_width: u32, world_height: u32) -> Self {
        Self {
            position: DVec2::ZERO,
            screen: DVec2::new(screen_width as f64, screen_height as f64),
            world: DVec2::new(world_width as f64, world_height as f64),
            follow: None,
        }
    }

    pub fn follow(&mut self, id: CharacterId) {
        self.follow = Some(id);
    }

    /// Centre on the followed character, then clamp each axis to `[0, world - screen]`
    ///
    /// No-op when nothing is followed or `lookup` cannot find it.
    pub fn update(&mut self, lookup: impl Fn(CharacterId) -> Option<DVec2>) {
        let Some(target) = self.follow.and_then(lookup) else {
            return;
        };

        let centred = target - self.screen / 2.0;
        let max = self.world - self.screen;
        self.position = DVec2::new(clamp(centred.x, 0.0, max.x), clamp(centred.y, 0.0, max.y));
    }

    /// Translation to apply to world-space draws
    pub fn offset(&self) -> DVec2 {
        -self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn follow_x(x: f64) -> Camera {
        let mut camera = Camera::new(320, 128, 640, 256);
        camera.follow(7);
        camera.update(|id| (id == 7).then_some(DVec2::new(x, 128.0)));
        camera
    }

    #[test]
    fn test_clamps_at_left_edge() {
        assert_relative_eq!(follow_x(0.0).position.x, 0.0);
    }

    #[test]
    fn test_clamps_at_right_edge() {
        assert_relative_eq!(follow_x(640.0).position.x, 320.0);
    }

    #[test]
    fn test_centres_when_unclamped() {
        let camera = follow_x(320.0);
        assert_relative_eq!(camera.position.x, 160.0);
        assert_relative_eq!(camera.position.y, 64.0);
        assert_eq!(camera.offset(), DVec2::new(-160.0, -64.0));
    }

    #[test]
    fn test_no_follow_is_noop() {
        let mut camera = Camera::new(320, 128, 640, 256);
        camera.position = DVec2::new(5.0, 5.0);
        camera.update(|_| Some(DVec2::new(600.0, 200.0)));
        assert_eq!(camera.position, DVec2::new(5.0, 5.0));
        assert_eq!(camera.follow, None);
    }

    #[test]
    fn test_missing_target_is_noop() {
        let mut camera = Camera::new(320, 128, 640, 256);
        camera.follow(3);
        camera.update(|_| None);
        assert_eq!(camera.position, DVec2::ZERO);
    }

    #[test]
    fn test_world_same_as_screen_stays_put() {
        let mut camera = Camera::new(320, 128, 320, 128);
        camera.follow(0);
        camera.update(|_| Some(DVec2::new(300.0, 10.0)));
        assert_eq!(camera.position, DVec2::ZERO);
    }
}
