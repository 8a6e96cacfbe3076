use pxr::Color;

/// Iterations before a point counts as inside the set.
pub const MAX_ITER: u32 = 100;

/// Pan speed in surface pixels per second.
pub const PAN_SPEED: f64 = 200.0;
/// Zoom rate; scaled by the current scale so zooming feels uniform.
pub const ZOOM_SPEED: f64 = 8.0;

/// Visible region of the complex plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct View {
    pub offset_x: f64,
    pub offset_y: f64,
    /// Complex-plane units per surface pixel.
    pub scale: f64,
}

impl View {
    /// View spanning 4 units across the smaller surface axis, centred on 0.
    pub fn fit(width: u32, height: u32) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 4.0 / width.min(height).max(1) as f64,
        }
    }

    /// Complex point under surface pixel `(x, y)`.
    pub fn point(&self, x: i32, y: i32, width: i32, height: i32) -> (f64, f64) {
        let re = (x - width / 2) as f64 * self.scale + self.offset_x;
        let im = (y - height / 2) as f64 * self.scale + self.offset_y;
        (re, im)
    }

    /// Moves by `(dx, dy)` surface pixels' worth of plane units per second.
    pub fn pan(&mut self, dx: f64, dy: f64, dt: f64) {
        let step = PAN_SPEED * dt * self.scale;
        self.offset_x += dx * step;
        self.offset_y += dy * step;
    }

    /// Positive `dir` zooms in, negative zooms out.
    pub fn zoom(&mut self, dir: f64, dt: f64) {
        let speed = ZOOM_SPEED * dt * self.scale;
        self.scale *= 1.0 - dir * speed;
    }
}

/// Iterations until `z² + c` escapes the radius-2 circle, capped at `max_iter`.
pub fn escape_iterations(re: f64, im: f64, max_iter: u32) -> u32 {
    let (mut zr, mut zi) = (0.0f64, 0.0f64);
    let mut iter = 0;
    while zr * zr + zi * zi <= 4.0 && iter < max_iter {
        let next = zr * zr - zi * zi + re;
        zi = 2.0 * zr * zi + im;
        zr = next;
        iter += 1;
    }
    iter
}

/// Smooth polynomial palette; points inside the set are black.
pub fn palette(iter: u32, max_iter: u32) -> Color {
    if iter >= max_iter {
        return Color::BLACK;
    }

    let t = iter as f64 / max_iter as f64;
    let u = 1.0 - t;
    let channel = |v: f64| (v * 255.0) as u8;
    Color::rgb(
        channel(9.0 * u * t * t * t),
        channel(15.0 * u * u * t * t),
        channel(8.5 * u * u * u * t),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        assert_eq!(escape_iterations(0.0, 0.0, MAX_ITER), MAX_ITER);
        assert_eq!(escape_iterations(-1.0, 0.0, MAX_ITER), MAX_ITER);
    }

    #[test]
    fn far_point_escapes_immediately() {
        assert_eq!(escape_iterations(3.0, 0.0, MAX_ITER), 1);
        assert_eq!(escape_iterations(1.0, 1.0, MAX_ITER), 2);
    }

    #[test]
    fn palette_inside_is_black() {
        assert_eq!(palette(MAX_ITER, MAX_ITER), Color::BLACK);
    }

    #[test]
    fn palette_zero_iterations_is_black_too() {
        // t = 0 zeroes every channel.
        assert_eq!(palette(0, MAX_ITER), Color::BLACK);
    }

    #[test]
    fn palette_midpoint() {
        let c = palette(50, 100);
        assert_eq!((c.r(), c.g(), c.b()), (143, 239, 135));
    }

    #[test]
    fn fit_spans_four_units_on_short_axis() {
        let v = View::fit(150, 100);
        assert!((v.scale - 0.04).abs() < 1e-12);
        let (re, im) = v.point(0, 0, 150, 100);
        assert!((re + 3.0).abs() < 1e-9);
        assert!((im + 2.0).abs() < 1e-9);
        assert_eq!(v.point(75, 50, 150, 100), (0.0, 0.0));
    }

    #[test]
    fn odd_sizes_use_integer_halving() {
        let v = View { offset_x: 0.0, offset_y: 0.0, scale: 1.0 };
        assert_eq!(v.point(2, 2, 5, 5), (0.0, 0.0));
    }

    #[test]
    fn zoom_in_shrinks_scale() {
        let mut v = View::fit(100, 100);
        let before = v.scale;
        v.zoom(1.0, 0.016);
        assert!(v.scale < before);
        v.zoom(-1.0, 0.5);
        assert!(v.scale > before * 0.99);
    }

    #[test]
    fn pan_scales_with_zoom() {
        let mut v = View::fit(100, 100);
        v.pan(1.0, -1.0, 0.5);
        assert!((v.offset_x - 200.0 * 0.5 * 0.04).abs() < 1e-12);
        assert!((v.offset_y + 200.0 * 0.5 * 0.04).abs() < 1e-12);
    }
}
