//! Animated RGB noise from a stateless hash of position and frame number.

use pxr::prelude::*;
use pxr_demos::noise::noise_color;
use pxr_demos::print_fps;

struct PixelNoise;

impl PixelApp for PixelNoise {
    fn setup(&mut self, config: &mut AppConfig) {
        config
            .set_title("Pixel Noise - Pixel Runtime Demo")
            .set_size(640, 480)
            .set_pixel_size(2);
    }

    fn update(&mut self, frame: &mut Frame<'_>) {
        if frame.is_key_pressed(Key::Escape) {
            frame.exit();
        }

        let t = frame.frame_count();
        let (w, h) = (frame.width() as i32, frame.height() as i32);
        for y in 0..h {
            for x in 0..w {
                frame.draw_pixel(x, y, noise_color(x, y, t));
            }
        }
        print_fps(frame.fps());
    }

    fn destroy(&mut self) {
        println!();
    }
}

fn main() -> anyhow::Result<()> {
    pxr::run(PixelNoise)
}
