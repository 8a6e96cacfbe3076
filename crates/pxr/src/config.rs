use anyhow::{Result, ensure};

use pxr_engine::coords::Size;
use pxr_engine::pixels::Color;

/// Application configuration, filled in by [`PixelApp::setup`](crate::PixelApp::setup).
///
/// Only `setup` ever sees a `&mut AppConfig`; once the window exists the
/// configuration is frozen apart from the title and background, which
/// [`Frame`](crate::Frame) can still change.
#[derive(Debug, Clone)]
pub struct AppConfig {
    title: String,
    size: Size,
    pixel_size: u32,
    vsync: bool,
    background: Color,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Pixel Runtime".to_string(),
            size: Size::new(400, 400),
            pixel_size: 1,
            vsync: true,
            background: Color::BLACK,
        }
    }
}

impl AppConfig {
    /// Sets the window title.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    /// Sets the surface size in surface pixels.
    pub fn set_size(&mut self, width: u32, height: u32) -> &mut Self {
        self.size = Size::new(width, height);
        self
    }

    /// Sets how many window pixels one surface pixel covers on each axis.
    pub fn set_pixel_size(&mut self, pixel_size: u32) -> &mut Self {
        self.pixel_size = pixel_size;
        self
    }

    pub fn set_vsync(&mut self, enabled: bool) -> &mut Self {
        self.vsync = enabled;
        self
    }

    /// Sets the color the surface starts out filled with.
    pub fn background(&mut self, color: Color) -> &mut Self {
        self.background = color;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn pixel_size(&self) -> u32 {
        self.pixel_size
    }

    /// Window inner size in logical pixels: surface size times pixel size.
    pub fn window_size(&self) -> Size {
        self.size.scaled(self.pixel_size)
    }

    pub fn vsync(&self) -> bool {
        self.vsync
    }

    pub fn background_color(&self) -> Color {
        self.background
    }

    /// Checks that the configuration can open a window.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.size.is_empty(),
            "surface size must be non-zero (got {}x{})",
            self.size.width,
            self.size.height
        );
        ensure!(self.pixel_size > 0, "pixel size must be at least 1");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = AppConfig::default();
        assert_eq!(c.title(), "Pixel Runtime");
        assert_eq!(c.size(), Size::new(400, 400));
        assert_eq!(c.pixel_size(), 1);
        assert!(c.vsync());
        assert_eq!(c.background_color(), Color::BLACK);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn setters_chain() {
        let mut c = AppConfig::default();
        c.set_title("paint")
            .set_size(16, 16)
            .set_pixel_size(50)
            .set_vsync(false)
            .background(Color::WHITE);

        assert_eq!(c.title(), "paint");
        assert_eq!((c.width(), c.height()), (16, 16));
        assert_eq!(c.window_size(), Size::new(800, 800));
        assert!(!c.vsync());
        assert_eq!(c.background_color(), Color::WHITE);
    }

    #[test]
    fn validate_rejects_empty_surface() {
        let mut c = AppConfig::default();
        c.set_size(0, 10);
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("0x10"), "{err}");
    }

    #[test]
    fn validate_rejects_zero_pixel_size() {
        let mut c = AppConfig::default();
        c.set_pixel_size(0);
        assert!(c.validate().is_err());
    }
}
