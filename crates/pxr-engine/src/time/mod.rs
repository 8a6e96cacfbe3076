//! Time subsystem.
//!
//! - one `FrameClock` per window, `tick()` once per presented frame
//! - `FpsCounter` turns frame deltas into a once-per-second FPS reading

mod fps;
mod frame_clock;

pub use fps::FpsCounter;
pub use frame_clock::{FrameClock, FrameTime};
