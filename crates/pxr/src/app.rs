use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use pxr_engine::core::{App as EngineApp, AppControl, FrameCtx};
use pxr_engine::device::GpuInit;
use pxr_engine::logging::{LoggingConfig, init_logging};
use pxr_engine::pixels::Surface;
use pxr_engine::render::PixelRenderer;
use pxr_engine::time::FpsCounter;
use pxr_engine::window::{Runtime, RuntimeConfig};

use crate::config::AppConfig;
use crate::frame::Frame;

/// A pixel application: configure once, then update every frame.
///
/// ```rust,ignore
/// use pxr::prelude::*;
///
/// struct Hello;
///
/// impl PixelApp for Hello {
///     fn setup(&mut self, config: &mut AppConfig) {
///         config.set_title("Hello").set_size(320, 240).set_pixel_size(2);
///     }
///
///     fn update(&mut self, frame: &mut Frame<'_>) {
///         frame.draw_pixel(10, 10, Color::RED);
///     }
/// }
///
/// fn main() -> anyhow::Result<()> {
///     pxr::run(Hello)
/// }
/// ```
pub trait PixelApp {
    /// Called once before the window opens. The only place the configuration
    /// can be changed.
    fn setup(&mut self, config: &mut AppConfig) {
        let _ = config;
    }

    /// Called once per frame. Pixels written to the frame's surface are shown
    /// when this returns.
    fn update(&mut self, frame: &mut Frame<'_>);

    /// Called once after the last frame.
    fn destroy(&mut self) {}
}

/// Runs `app` until it exits or its window is closed.
///
/// Initializes logging, runs `setup`, opens a window of
/// `size * pixel_size` logical pixels and drives the update loop.
pub fn run<A>(mut app: A) -> Result<()>
where
    A: PixelApp + 'static,
{
    init_logging(LoggingConfig::default());

    let mut config = AppConfig::default();
    app.setup(&mut config);
    config.validate().context("invalid app configuration")?;

    let surface = Surface::new(config.width(), config.height(), config.background_color())
        .context("failed to allocate pixel surface")?;

    let window = config.window_size();
    log::info!(
        "starting \"{}\": surface {}x{}, pixel size {}, vsync {}",
        config.title(),
        config.width(),
        config.height(),
        config.pixel_size(),
        config.vsync()
    );

    let runtime_config = RuntimeConfig {
        title: config.title().to_string(),
        initial_size: LogicalSize::new(window.width as f64, window.height as f64),
        resizable: false,
    };
    let gpu_init = GpuInit::with_vsync(config.vsync());

    let state = PixelAppState {
        app,
        config,
        surface,
        renderer: PixelRenderer::new(),
        fps: FpsCounter::new(),
        warned_out_of_bounds: false,
    };

    Runtime::run(runtime_config, gpu_init, state)
}

// ── PixelAppState ─────────────────────────────────────────────────────────

/// Implements the engine's `App` on behalf of a [`PixelApp`].
///
/// Owns the surface and the renderer; user code never sees this type.
struct PixelAppState<A> {
    app: A,
    config: AppConfig,
    surface: Surface,
    renderer: PixelRenderer,
    fps: FpsCounter,
    warned_out_of_bounds: bool,
}

impl<A: PixelApp> EngineApp for PixelAppState<A> {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.fps.record_frame(&ctx.time);

        // ── Update ────────────────────────────────────────────────────────
        {
            let mut frame = Frame {
                surface: &mut self.surface,
                config: &mut self.config,
                input: ctx.input,
                input_frame: ctx.input_frame,
                time: ctx.time,
                fps: self.fps.fps(),
                runtime: &mut *ctx.runtime,
                warned_out_of_bounds: &mut self.warned_out_of_bounds,
            };
            self.app.update(&mut frame);
        }

        // ── Render ────────────────────────────────────────────────────────
        let surface = &self.surface;
        let renderer = &mut self.renderer;

        ctx.render(self.config.background_color(), |rctx, target| {
            renderer.render(rctx, target, surface)
        })
    }

    fn on_exit(&mut self) {
        log::debug!("destroying app");
        self.app.destroy();
    }
}
