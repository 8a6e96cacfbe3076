use pxr_engine::coords::Size;
use pxr_engine::input::{InputFrame, InputState, Key, MouseButton};
use pxr_engine::pixels::{Color, Surface};
use pxr_engine::time::FrameTime;
use pxr_engine::window::RuntimeCtx;

use crate::config::AppConfig;

/// Per-frame access to the surface, input, timing and app control.
///
/// Handed to [`PixelApp::update`](crate::PixelApp::update); it only lives for
/// the duration of that call.
pub struct Frame<'a> {
    pub(crate) surface: &'a mut Surface,
    pub(crate) config: &'a mut AppConfig,
    pub(crate) input: &'a InputState,
    pub(crate) input_frame: &'a InputFrame,
    pub(crate) time: FrameTime,
    pub(crate) fps: f32,
    pub(crate) runtime: &'a mut RuntimeCtx,
    pub(crate) warned_out_of_bounds: &'a mut bool,
}

impl<'a> Frame<'a> {
    // ── drawing ───────────────────────────────────────────────────────────

    /// Fills the surface with `color` and makes it the new background.
    pub fn background(&mut self, color: Color) {
        self.config.background(color);
        self.surface.clear(color);
    }

    /// Writes one pixel. Writes outside the surface are dropped.
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Err(e) = self.surface.try_set_pixel(x, y, color) {
            if !*self.warned_out_of_bounds {
                *self.warned_out_of_bounds = true;
                log::debug!("draw_pixel ignored: {e} (further occurrences not logged)");
            }
        }
    }

    /// Draws a 1-pixel line, both endpoints included, clipped to the surface.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.surface.draw_line(x0, y0, x1, y1, color);
    }

    /// Copies `src` onto the surface with its top-left corner at `(x, y)`.
    pub fn draw_surface(&mut self, src: &Surface, x: i32, y: i32) {
        src.blit_to(&mut *self.surface, x, y);
    }

    pub fn surface(&self) -> &Surface {
        &*self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut *self.surface
    }

    // ── control ───────────────────────────────────────────────────────────

    /// Stops the loop after this frame has been presented.
    pub fn exit(&mut self) {
        self.runtime.exit();
    }

    /// False once [`exit`](Self::exit) has been called this frame.
    pub fn is_running(&self) -> bool {
        !self.runtime.exit_requested()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.config.set_title(title.clone());
        self.runtime.set_title(title);
    }

    // ── info ──────────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.config.width()
    }

    pub fn height(&self) -> u32 {
        self.config.height()
    }

    pub fn size(&self) -> Size {
        self.config.size()
    }

    pub fn pixel_size(&self) -> u32 {
        self.config.pixel_size()
    }

    pub fn window_size(&self) -> Size {
        self.config.window_size()
    }

    pub fn title(&self) -> &str {
        self.config.title()
    }

    pub fn vsync(&self) -> bool {
        self.config.vsync()
    }

    // ── input ─────────────────────────────────────────────────────────────

    /// True while `key` is held.
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.input.key_down(key)
    }

    /// True only on the frame `key` went down.
    pub fn is_key_just_pressed(&self, key: Key) -> bool {
        self.input_frame.key_pressed(key)
    }

    /// True while `button` is held.
    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.input.button_down(button)
    }

    /// True only on the frame `button` went down.
    pub fn is_mouse_just_pressed(&self, button: MouseButton) -> bool {
        self.input_frame.button_pressed(button)
    }

    /// Pointer column in surface pixels; 0 when the pointer is unknown.
    pub fn mouse_x(&self) -> i32 {
        self.mouse_surface_pos().0
    }

    /// Pointer row in surface pixels; 0 when the pointer is unknown.
    pub fn mouse_y(&self) -> i32 {
        self.mouse_surface_pos().1
    }

    /// Pointer x in logical window pixels.
    pub fn mouse_window_x(&self) -> i32 {
        self.pointer().0.floor() as i32
    }

    /// Pointer y in logical window pixels.
    pub fn mouse_window_y(&self) -> i32 {
        self.pointer().1.floor() as i32
    }

    fn pointer(&self) -> (f32, f32) {
        self.input.pointer_pos.unwrap_or((0.0, 0.0))
    }

    fn mouse_surface_pos(&self) -> (i32, i32) {
        window_to_surface(self.pointer(), self.config.pixel_size())
    }

    // ── timing ────────────────────────────────────────────────────────────

    /// Frames completed before this one; 0 during the first update.
    pub fn frame_count(&self) -> u64 {
        self.time.frame_index
    }

    /// Average frames per second over the last full second.
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Seconds since the previous frame.
    pub fn delta_time(&self) -> f32 {
        self.time.dt
    }

    /// Seconds since the loop started.
    pub fn elapsed(&self) -> f32 {
        self.time.elapsed
    }
}

/// Maps a logical window position to the surface pixel under it.
fn window_to_surface(pos: (f32, f32), pixel_size: u32) -> (i32, i32) {
    let scale = pixel_size.max(1) as f32;
    ((pos.0 / scale).floor() as i32, (pos.1 / scale).floor() as i32)
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use pxr_engine::input::{InputEvent, KeyState, MouseButtonState};

    use super::*;

    struct Fixture {
        surface: Surface,
        config: AppConfig,
        input: InputState,
        input_frame: InputFrame,
        runtime: RuntimeCtx,
        warned: bool,
    }

    impl Fixture {
        fn new(width: u32, height: u32, pixel_size: u32) -> Self {
            let mut config = AppConfig::default();
            config.set_size(width, height).set_pixel_size(pixel_size);
            Self {
                surface: Surface::new(width, height, Color::BLACK).unwrap(),
                config,
                input: InputState::default(),
                input_frame: InputFrame::default(),
                runtime: RuntimeCtx::default(),
                warned: false,
            }
        }

        fn apply(&mut self, ev: InputEvent) {
            self.input.apply_event(&mut self.input_frame, ev);
        }

        fn frame(&mut self, frame_index: u64) -> Frame<'_> {
            Frame {
                surface: &mut self.surface,
                config: &mut self.config,
                input: &self.input,
                input_frame: &self.input_frame,
                time: FrameTime {
                    dt: 0.016,
                    raw_dt: 0.016,
                    now: Instant::now(),
                    elapsed: 1.5,
                    frame_index,
                },
                fps: 60.0,
                runtime: &mut self.runtime,
                warned_out_of_bounds: &mut self.warned,
            }
        }
    }

    // ── coordinate mapping ────────────────────────────────────────────────

    #[test]
    fn window_to_surface_floors() {
        assert_eq!(window_to_surface((0.0, 0.0), 8), (0, 0));
        assert_eq!(window_to_surface((7.9, 8.0), 8), (0, 1));
        assert_eq!(window_to_surface((799.5, 16.0), 50), (15, 0));
    }

    #[test]
    fn window_to_surface_negative_stays_outside() {
        assert_eq!(window_to_surface((-0.5, 3.0), 2), (-1, 1));
    }

    #[test]
    fn mouse_defaults_to_origin() {
        let mut fx = Fixture::new(16, 16, 50);
        let f = fx.frame(0);
        assert_eq!((f.mouse_x(), f.mouse_y()), (0, 0));
        assert_eq!((f.mouse_window_x(), f.mouse_window_y()), (0, 0));
    }

    #[test]
    fn mouse_position_in_surface_pixels() {
        let mut fx = Fixture::new(16, 16, 50);
        fx.apply(InputEvent::PointerMoved { x: 125.0, y: 760.0 });
        let f = fx.frame(0);
        assert_eq!((f.mouse_x(), f.mouse_y()), (2, 15));
        assert_eq!((f.mouse_window_x(), f.mouse_window_y()), (125, 760));
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[test]
    fn draw_pixel_out_of_bounds_is_ignored_and_warned_once() {
        let mut fx = Fixture::new(4, 4, 1);
        {
            let mut f = fx.frame(0);
            f.draw_pixel(4, 0, Color::RED);
            f.draw_pixel(-1, -1, Color::RED);
            f.draw_pixel(1, 1, Color::RED);
        }
        assert!(fx.warned);
        assert_eq!(fx.surface.pixel(1, 1), Some(Color::RED));
        let red = fx.surface.pixels().iter().filter(|&&c| c == Color::RED).count();
        assert_eq!(red, 1);
    }

    #[test]
    fn background_clears_and_is_remembered() {
        let mut fx = Fixture::new(3, 3, 1);
        fx.frame(0).background(Color::BLUE);
        assert!(fx.surface.pixels().iter().all(|&c| c == Color::BLUE));
        assert_eq!(fx.config.background_color(), Color::BLUE);
    }

    #[test]
    fn draw_surface_blits_with_clipping() {
        let mut fx = Fixture::new(4, 4, 1);
        let sprite = Surface::new(2, 2, Color::GREEN).unwrap();
        fx.frame(0).draw_surface(&sprite, 3, 3);
        assert_eq!(fx.surface.pixel(3, 3), Some(Color::GREEN));
        assert_eq!(fx.surface.pixels().iter().filter(|&&c| c == Color::GREEN).count(), 1);
    }

    // ── control + info ────────────────────────────────────────────────────

    #[test]
    fn exit_stops_running() {
        let mut fx = Fixture::new(2, 2, 1);
        let mut f = fx.frame(0);
        assert!(f.is_running());
        f.exit();
        assert!(!f.is_running());
    }

    #[test]
    fn set_title_updates_config() {
        let mut fx = Fixture::new(2, 2, 1);
        let mut f = fx.frame(0);
        f.set_title("renamed");
        assert_eq!(f.title(), "renamed");
    }

    #[test]
    fn info_and_timing() {
        let mut fx = Fixture::new(150, 100, 8);
        let f = fx.frame(7);
        assert_eq!((f.width(), f.height()), (150, 100));
        assert_eq!(f.window_size(), Size::new(1200, 800));
        assert_eq!(f.pixel_size(), 8);
        assert_eq!(f.frame_count(), 7);
        assert_eq!(f.fps(), 60.0);
        assert!((f.delta_time() - 0.016).abs() < 1e-6);
    }

    // ── input ─────────────────────────────────────────────────────────────

    #[test]
    fn key_held_vs_just_pressed() {
        let mut fx = Fixture::new(2, 2, 1);
        fx.apply(InputEvent::Key { key: Key::Space, state: KeyState::Pressed, repeat: false });
        {
            let f = fx.frame(0);
            assert!(f.is_key_pressed(Key::Space));
            assert!(f.is_key_just_pressed(Key::Space));
        }

        fx.input_frame.clear();
        let f = fx.frame(1);
        assert!(f.is_key_pressed(Key::Space));
        assert!(!f.is_key_just_pressed(Key::Space));
    }

    #[test]
    fn mouse_button_held() {
        let mut fx = Fixture::new(2, 2, 1);
        fx.apply(InputEvent::PointerButton {
            button: MouseButton::Right,
            state: MouseButtonState::Pressed,
        });
        {
            let f = fx.frame(0);
            assert!(f.is_mouse_pressed(MouseButton::Right));
            assert!(f.is_mouse_just_pressed(MouseButton::Right));
            assert!(!f.is_mouse_pressed(MouseButton::Left));
        }

        fx.input_frame.clear();
        let f = fx.frame(1);
        assert!(f.is_mouse_pressed(MouseButton::Right));
        assert!(!f.is_mouse_just_pressed(MouseButton::Right));
    }
}
