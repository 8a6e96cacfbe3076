//! Coordinate and geometry types shared across the engine.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down

mod size;
mod vec2;

pub use size::Size;
pub use vec2::Vec2;
