//! Shared pieces of the demo binaries in `src/bin/`.
//!
//! Per-pixel math lives here so it can be tested without a window.

pub mod mandelbrot;
pub mod noise;
pub mod paint;
pub mod square;

use std::io::Write;

/// Rewrites the current console line with the FPS reading.
pub fn print_fps(fps: f32) {
    print!("\rFPS: {fps:.1}   ");
    let _ = std::io::stdout().flush();
}
