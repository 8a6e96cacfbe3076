//! Contract between the runtime loop and the layers built on top of it.
//!
//! The runtime calls into an [`App`] and hands it a [`FrameCtx`] per frame;
//! nothing from winit's event loop leaks past this boundary.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
