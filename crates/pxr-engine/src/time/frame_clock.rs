use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped (see [`FrameClock`]).
    pub dt: f32,

    /// Seconds since the previous tick, unclamped. Used for FPS readings.
    pub raw_dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Seconds since the clock was created.
    pub elapsed: f32,

    /// Frame counter; the first tick reports 0.
    pub frame_index: u64,
}

/// Produces one [`FrameTime`] per presented frame.
///
/// Delta time is clamped so a debugger pause or a minimized window does not
/// hand the application a multi-second step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub const DEFAULT_DT_MIN: Duration = Duration::from_micros(100);
    pub const DEFAULT_DT_MAX: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self::with_clamps(Self::DEFAULT_DT_MIN, Self::DEFAULT_DT_MAX)
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Number of ticks so far.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let raw = now.saturating_duration_since(self.last);
        let dt = raw.clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            raw_dt: raw.as_secs_f32(),
            now,
            elapsed: now.saturating_duration_since(self.start).as_secs_f32(),
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
