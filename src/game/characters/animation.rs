// Character animation state

/// Ticks spent on each animation frame
pub const ANIM_DEFAULT_SPEED: u32 = 10;

/// Frames in a walk cycle
pub const ANIM_AMOUNT: usize = 4;

/// Tick counter and frame index of a looping walk cycle
///
/// Only advances while the owner moves. Invariant: `tick < speed` and
/// `index < frame_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationState {
    tick: u32,
    index: usize,
    speed: u32,
    frame_count: usize,
}

impl AnimationState {
    /// Create an animation with custom timing
    pub fn new(speed: u32, frame_count: usize) -> Self {
        Self {
            tick: 0,
            index: 0,
            speed: speed.max(1),
            frame_count: frame_count.max(1),
        }
    }

    /// Advance one tick; every `speed` ticks the frame index moves on, wrapping
    pub fn advance(&mut self) {
        self.tick += 1;
        if self.tick >= self.speed {
            self.tick = 0;
            self.index += 1;
            if self.index >= self.frame_count {
                self.index = 0;
            }
        }
    }

    /// Back to the first frame
    pub fn reset(&mut self) {
        self.tick = 0;
        self.index = 0;
    }

    #[cfg(test)]
    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Current frame index
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(ANIM_DEFAULT_SPEED, ANIM_AMOUNT)
    }
}
