use pxr::Color;
use pxr::math::pseudo_random;

/// Noise color for one pixel: the hash's low three bytes become r, g and b.
pub fn noise_color(x: i32, y: i32, frame: u64) -> Color {
    let v = pseudo_random(x, y, frame);
    Color::rgb(v as u8, (v >> 8) as u8, (v >> 16) as u8)
}
