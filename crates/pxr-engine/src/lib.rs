//! Pixel runtime engine crate.
//!
//! Platform + GPU pieces behind the `pxr` facade: the window loop, the GPU
//! device, input and timing, and the CPU pixel surface with its upload path.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod pixels;
pub mod render;
