/// Game loop timing
///
/// Fixed-timestep simulation with one draw per frame. Every tick runs exactly
/// one scene update with the same delta, so movement stays deterministic no
/// matter how fast frames are presented.
use std::time::{Duration, Instant};

/// Maximum number of ticks per frame to prevent spiral of death
const MAX_TICKS_PER_FRAME: u32 = 5;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Game loop timing state
pub struct GameLoop {
    /// Length of one tick
    timestep: Duration,

    /// Accumulated time not yet consumed by ticks
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Total ticks executed
    update_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl GameLoop {
    /// Create a game loop running one tick per `timestep`
    pub fn with_timestep(timestep: Duration) -> Self {
        Self {
            timestep: timestep.max(Duration::from_micros(1)),
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            update_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Account for `frame_time` of wall-clock time, returns the number of ticks to run
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;

        // Store frame time for FPS calculation
        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= self.timestep && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= self.timestep;
            ticks += 1;
        }

        // Drop the backlog instead of replaying it over later frames
        if ticks == MAX_TICKS_PER_FRAME && self.accumulator >= self.timestep {
            log::debug!("Dropping {:?} of simulation backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        self.update_count += ticks as u64;
        ticks
    }

    /// Tick length in seconds, the delta passed to every update
    pub fn delta(&self) -> f64 {
        self.timestep.as_secs_f64()
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total number of frames
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of ticks executed
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}
