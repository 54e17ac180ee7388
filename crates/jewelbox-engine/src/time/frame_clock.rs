use std::time::Instant;

/// Counts frames and tracks an average frame rate.
///
/// The demos advance their rotation by a fixed increment per frame rather than
/// per second, so only the frame index and the rate for the periodic log line
/// are kept.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_index: u64,

    window_start: Instant,
    window_frames: u32,
    last_rate: Option<f32>,
}

impl FrameClock {
    /// Number of frames averaged per frame-rate sample.
    pub const RATE_WINDOW: u32 = 240;

    pub fn new() -> Self {
        Self {
            frame_index: 0,
            window_start: Instant::now(),
            window_frames: 0,
            last_rate: None,
        }
    }

    /// Restarts the rate window, e.g. after a slow start-up frame.
    pub fn reset(&mut self) {
        self.window_start = Instant::now();
        self.window_frames = 0;
    }

    /// Advances the clock and returns the index of the frame being started.
    pub fn tick(&mut self) -> u64 {
        let now = Instant::now();

        self.window_frames += 1;
        if self.window_frames >= Self::RATE_WINDOW {
            let secs = now.saturating_duration_since(self.window_start).as_secs_f32();
            if secs > 0.0 {
                self.last_rate = Some(self.window_frames as f32 / secs);
            }
            self.window_start = now;
            self.window_frames = 0;
        }

        let index = self.frame_index;
        self.frame_index = self.frame_index.wrapping_add(1);
        index
    }

    /// Average frames per second over the last completed window, if any.
    pub fn average_rate(&self) -> Option<f32> {
        self.last_rate
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
