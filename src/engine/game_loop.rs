/// Frame timing and control
///
/// Gameplay runs one variable-length step per rendered frame. Effect
/// timers are counted in whole milliseconds, so the loop hands out elapsed
/// milliseconds and carries the sub-millisecond remainder to the next frame.
use std::time::{Duration, Instant};

/// Longest frame the simulation will step in one go (milliseconds).
/// Stalls longer than this (window drag, debugger) are clipped.
pub const MAX_FRAME_MS: u32 = 100;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Game loop timing state
pub struct GameLoop {
    /// Time of last frame
    last_frame_time: Instant,

    /// Time not yet handed out as whole milliseconds
    remainder: Duration,

    /// Whether the game is paused
    paused: bool,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Total simulated milliseconds
    simulated_ms: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new() -> Self {
        Self {
            last_frame_time: Instant::now(),
            remainder: Duration::ZERO,
            paused: false,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            simulated_ms: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returns the milliseconds to simulate
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.step(frame_time)
    }

    /// Account for a frame of the given length
    fn step(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        // Paused frames advance nothing, so effect timers hold still
        if self.paused {
            return 0;
        }

        let total = self.remainder + frame_time;
        let whole_ms = total.as_millis().min(MAX_FRAME_MS as u128) as u32;
        self.remainder = if total.as_millis() > MAX_FRAME_MS as u128 {
            Duration::ZERO
        } else {
            total - Duration::from_millis(whole_ms as u64)
        };

        self.simulated_ms += whole_ms as u64;
        whole_ms
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total number of frames begun
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total simulated time in milliseconds
    pub fn simulated_ms(&self) -> u64 {
        self.simulated_ms
    }

    /// Check if game is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the game
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    /// Resume the game
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.remainder = Duration::ZERO;
            log::info!("Game resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
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

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
