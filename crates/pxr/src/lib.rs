//! Pixel Runtime: a window showing a CPU pixel buffer.
//!
//! Implement [`PixelApp`], write pixels in `update`, and hand the app to
//! [`run`]. Each frame the surface is uploaded to the GPU and drawn scaled up
//! by the configured pixel size with nearest-neighbour filtering.
//!
//! ```rust,ignore
//! use pxr::prelude::*;
//!
//! struct Noise;
//!
//! impl PixelApp for Noise {
//!     fn update(&mut self, frame: &mut Frame<'_>) {
//!         let t = frame.frame_count();
//!         for y in 0..frame.height() as i32 {
//!             for x in 0..frame.width() as i32 {
//!                 let v = math::pseudo_random(x, y, t) as u8;
//!                 frame.draw_pixel(x, y, Color::rgb(v, v, v));
//!             }
//!         }
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     pxr::run(Noise)
//! }
//! ```

pub mod app;
pub mod config;
pub mod frame;
pub mod math;

pub use app::{PixelApp, run};
pub use config::AppConfig;
pub use frame::Frame;

pub use pxr_engine::coords::Size;
pub use pxr_engine::input::{Key, MouseButton};
pub use pxr_engine::pixels::{Color, Surface, SurfaceError};

/// Everything a pixel app needs; import this in your binaries.
pub mod prelude {
    pub use crate::app::{PixelApp, run};
    pub use crate::config::AppConfig;
    pub use crate::frame::Frame;
    pub use crate::math::{self, Vec2};

    pub use pxr_engine::coords::Size;
    pub use pxr_engine::input::{Key, MouseButton};
    pub use pxr_engine::pixels::{Color, Surface, SurfaceError};
}
