use super::FrameTime;

/// Frames-per-second estimate published once per second.
///
/// Frames and their deltas accumulate until at least one second has passed;
/// the average over that window becomes the new reading.
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    frames: u32,
    accumulated: f32,
    fps: f32,
}

impl FpsCounter {
    const WINDOW_SECS: f32 = 1.0;

    pub fn new() -> Self {
        Self::default()
    }

    /// Records one frame that took `dt` seconds.
    ///
    /// Returns the new reading when a window completes.
    pub fn record(&mut self, dt: f32) -> Option<f32> {
        self.frames += 1;
        self.accumulated += dt;

        if self.accumulated < Self::WINDOW_SECS {
            return None;
        }

        self.fps = self.frames as f32 / self.accumulated;
        self.frames = 0;
        self.accumulated = 0.0;
        Some(self.fps)
    }

    /// Records a frame by its unclamped delta, so stalls lower the reading.
    pub fn record_frame(&mut self, time: &FrameTime) -> Option<f32> {
        self.record(time.raw_dt)
    }

    /// Last published reading; 0 until the first second completes.
    pub fn fps(&self) -> f32 {
        self.fps
    }
}
