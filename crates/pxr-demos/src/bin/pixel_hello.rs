//! Bare-bones app: opens a window and prints the frame rate.

use pxr::prelude::*;
use pxr_demos::print_fps;

struct PixelHello;

impl PixelApp for PixelHello {
    fn setup(&mut self, config: &mut AppConfig) {
        config
            .set_title("Pixel Runtime - Pixel Hello Demo")
            .set_size(640, 480)
            .set_pixel_size(2)
            .set_vsync(true);
    }

    fn update(&mut self, frame: &mut Frame<'_>) {
        if frame.is_key_pressed(Key::Escape) {
            frame.exit();
        }
        print_fps(frame.fps());
    }

    fn destroy(&mut self) {
        println!();
    }
}

fn main() -> anyhow::Result<()> {
    pxr::run(PixelHello)
}
