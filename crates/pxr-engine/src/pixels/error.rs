use std::fmt;

/// Errors raised by [`Surface`](super::Surface) construction and checked access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    /// Width or height was zero.
    InvalidSize { width: u32, height: u32 },
    /// A pixel coordinate fell outside the surface.
    OutOfBounds { x: i32, y: i32, width: u32, height: u32 },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::InvalidSize { width, height } => {
                write!(f, "surface dimensions must be positive (got {width}x{height})")
            }
            SurfaceError::OutOfBounds { x, y, width, height } => {
                write!(f, "pixel ({x}, {y}) is outside a {width}x{height} surface")
            }
        }
    }
}

impl std::error::Error for SurfaceError {}
