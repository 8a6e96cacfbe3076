//! CPU pixel model.
//!
//! Applications draw into a [`Surface`] each frame; the render layer uploads
//! its bytes to a GPU texture unchanged.

mod color;
mod error;
mod surface;

pub use color::Color;
pub use error::SurfaceError;
pub use surface::Surface;
