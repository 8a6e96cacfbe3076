//! Rotating square drawn edge by edge with Bresenham lines.
//!
//! Hold Space to change its color. Runs without vsync to show raw frame rate.

use pxr::prelude::*;
use pxr_demos::print_fps;
use pxr_demos::square::{ANGULAR_VELOCITY, square_corners, square_edges};

#[derive(Default)]
struct PixelSquare {
    angle: f32,
    center: Vec2,
    side: f32,
}

impl PixelApp for PixelSquare {
    fn setup(&mut self, config: &mut AppConfig) {
        config
            .set_title("Pixel Square - Pixel Runtime Demo")
            .set_size(640, 480)
            .set_pixel_size(2)
            .set_vsync(false);

        let (w, h) = (config.width(), config.height());
        self.center = Vec2::new((w / 2) as f32, (h / 2) as f32);
        self.side = w.min(h) as f32 / 3.0;
    }

    fn update(&mut self, frame: &mut Frame<'_>) {
        if frame.is_key_pressed(Key::Escape) {
            frame.exit();
        }

        frame.background(Color::BLACK);

        let color = if frame.is_key_pressed(Key::Space) {
            Color::MAGENTA
        } else {
            Color::WHITE
        };

        let corners = square_corners(self.center, self.side, self.angle);
        for ((x0, y0), (x1, y1)) in square_edges(&corners) {
            frame.draw_line(x0, y0, x1, y1, color);
        }

        self.angle += ANGULAR_VELOCITY * frame.delta_time();
        print_fps(frame.fps());
    }

    fn destroy(&mut self) {
        println!();
    }
}

fn main() -> anyhow::Result<()> {
    pxr::run(PixelSquare::default())
}
