//! Tiny paint program on a 16x16 canvas.
//!
//! Left mouse paints, right mouse erases, 1-7 pick a color, Escape quits.

use pxr::prelude::*;
use pxr_demos::paint::{ERASER, PALETTE};

struct PixelPaint {
    brush: Color,
}

impl PixelPaint {
    fn handle_color_input(&mut self, frame: &Frame<'_>) {
        // The highest held digit wins.
        let selected = PALETTE
            .iter()
            .rev()
            .find(|&&(key, _)| frame.is_key_pressed(key));

        if let Some(&(key, color)) = selected {
            if color != self.brush {
                log::info!("brush color {key}: #{:06X}", color.to_u32() & 0x00FF_FFFF);
                self.brush = color;
            }
        }
    }

    fn handle_drawing_input(&self, frame: &mut Frame<'_>) {
        let (x, y) = (frame.mouse_x(), frame.mouse_y());
        if !frame.surface().in_bounds(x, y) {
            return;
        }

        if frame.is_mouse_pressed(MouseButton::Left) {
            frame.draw_pixel(x, y, self.brush);
        } else if frame.is_mouse_pressed(MouseButton::Right) {
            frame.draw_pixel(x, y, ERASER);
        }
    }
}

impl PixelApp for PixelPaint {
    fn setup(&mut self, config: &mut AppConfig) {
        config
            .set_title("Pixel Paint - Pixel Runtime Demo")
            .set_size(16, 16)
            .set_pixel_size(50)
            .set_vsync(true)
            .background(Color::WHITE);
    }

    fn update(&mut self, frame: &mut Frame<'_>) {
        if frame.is_key_pressed(Key::Escape) {
            frame.exit();
        }

        self.handle_color_input(frame);
        self.handle_drawing_input(frame);
    }
}

fn main() -> anyhow::Result<()> {
    pxr::run(PixelPaint {
        brush: Color::BLACK,
    })
}
