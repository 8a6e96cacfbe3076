//! Interactive Mandelbrot explorer.
//!
//! W/A/S/D pan, Up/Down zoom, Escape quits.

use pxr::prelude::*;
use pxr_demos::mandelbrot::{MAX_ITER, View, escape_iterations, palette};
use pxr_demos::print_fps;

struct PixelMandelbrot {
    view: View,
}

impl PixelMandelbrot {
    fn handle_input(&mut self, frame: &Frame<'_>) {
        let dt = frame.delta_time() as f64;

        let axis = |neg: Key, pos: Key| {
            let mut v = 0.0;
            if frame.is_key_pressed(pos) {
                v += 1.0;
            }
            if frame.is_key_pressed(neg) {
                v -= 1.0;
            }
            v
        };

        let dx = axis(Key::A, Key::D);
        let dy = axis(Key::S, Key::W);
        if dx != 0.0 || dy != 0.0 {
            self.view.pan(dx, dy, dt);
        }

        if frame.is_key_pressed(Key::ArrowUp) {
            self.view.zoom(1.0, dt);
        }
        if frame.is_key_pressed(Key::ArrowDown) {
            self.view.zoom(-1.0, dt);
        }
    }

    fn render(&self, frame: &mut Frame<'_>) {
        let (w, h) = (frame.width() as i32, frame.height() as i32);
        for y in 0..h {
            for x in 0..w {
                let (re, im) = self.view.point(x, y, w, h);
                let iter = escape_iterations(re, im, MAX_ITER);
                frame.draw_pixel(x, y, palette(iter, MAX_ITER));
            }
        }
    }
}

impl PixelApp for PixelMandelbrot {
    fn setup(&mut self, config: &mut AppConfig) {
        config
            .set_title("Pixel Mandelbrot - Pixel Runtime Demo")
            .set_size(150, 100)
            .set_pixel_size(8)
            .set_vsync(true);

        self.view = View::fit(config.width(), config.height());
    }

    fn update(&mut self, frame: &mut Frame<'_>) {
        if frame.is_key_pressed(Key::Escape) {
            frame.exit();
        }

        self.handle_input(frame);
        self.render(frame);
        print_fps(frame.fps());
    }

    fn destroy(&mut self) {
        println!();
    }
}

fn main() -> anyhow::Result<()> {
    pxr::run(PixelMandelbrot {
        view: View::fit(1, 1),
    })
}
