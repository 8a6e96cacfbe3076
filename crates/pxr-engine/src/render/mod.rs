//! GPU rendering subsystem.
//!
//! Each renderer owns its GPU resources (pipelines, textures, buffers) and
//! records into a [`RenderTarget`] supplied by `core::FrameCtx::render`.

mod ctx;
mod pixels;

pub use ctx::{RenderCtx, RenderTarget};
pub use pixels::{PixelRenderer, UploadLayout, check_texture_size};
