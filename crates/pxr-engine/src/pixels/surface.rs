use crate::coords::Size;

use super::color::Color;
use super::error::SurfaceError;

/// CPU-side pixel buffer.
///
/// Row-major, `width * height` packed colors, origin top-left.
/// Not `Clone`: a surface is owned by one place at a time and moved around.
#[derive(Debug)]
pub struct Surface {
    size: Size,
    pixels: Vec<Color>,
}

impl Surface {
    /// Allocates a surface filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Color) -> Result<Self, SurfaceError> {
        let size = Size::new(width, height);
        if size.is_empty() {
            return Err(SurfaceError::InvalidSize { width, height });
        }

        Ok(Self {
            size,
            pixels: vec![fill; size.area()],
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.height
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Fills every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.size.width && (y as u32) < self.size.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.size.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Writes one pixel.
    ///
    /// # Panics
    ///
    /// Panics when `(x, y)` lies outside the surface. Use
    /// [`try_set_pixel`](Self::try_set_pixel) for a checked variant.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Err(e) = self.try_set_pixel(x, y, color) {
            panic!("Surface::set_pixel: {e}");
        }
    }

    /// Writes one pixel, reporting out-of-bounds coordinates as an error.
    #[inline]
    pub fn try_set_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), SurfaceError> {
        let idx = self.index(x, y).ok_or(SurfaceError::OutOfBounds {
            x,
            y,
            width: self.size.width,
            height: self.size.height,
        })?;
        self.pixels[idx] = color;
        Ok(())
    }

    /// Reads one pixel; `None` outside the surface.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// Copies this surface into `target` with its top-left corner at
    /// `(dst_x, dst_y)`. Pixels landing outside `target` are dropped.
    pub fn blit_to(&self, target: &mut Surface, dst_x: i32, dst_y: i32) {
        let src_w = self.size.width as i64;
        let src_h = self.size.height as i64;
        let dst_w = target.size.width as i64;
        let dst_h = target.size.height as i64;

        // Visible source window, computed once instead of testing every pixel.
        let x0 = (-(dst_x as i64)).max(0);
        let y0 = (-(dst_y as i64)).max(0);
        let x1 = src_w.min(dst_w - dst_x as i64);
        let y1 = src_h.min(dst_h - dst_y as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let run = (x1 - x0) as usize;
        for sy in y0..y1 {
            let src_start = (sy * src_w + x0) as usize;
            let ty = sy + dst_y as i64;
            let dst_start = (ty * dst_w + x0 + dst_x as i64) as usize;
            target.pixels[dst_start..dst_start + run]
                .copy_from_slice(&self.pixels[src_start..src_start + run]);
        }
    }

    /// Draws a 1-pixel line from `(x0, y0)` to `(x1, y1)` inclusive using
    /// integer Bresenham. Points outside the surface are skipped.
    ///
    /// Segments that leave the surface are clipped to it first, so far-apart
    /// endpoints cost no more than the visible part.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let Some(((x0, y0), (x1, y1))) = self.clip_segment(x0, y0, x1, y1) else {
            return;
        };

        let (mut x, mut y) = (x0, y0);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            if let Some(idx) = self.index(x as i32, y as i32) {
                self.pixels[idx] = color;
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Liang-Barsky clip of a segment to the surface rectangle.
    ///
    /// Segments fully inside come back unchanged. `None` when nothing of the
    /// segment is on the surface.
    fn clip_segment(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> Option<((i64, i64), (i64, i64))> {
        let max_x = self.size.width as i64 - 1;
        let max_y = self.size.height as i64 - 1;
        let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);

        let inside = |x: i64, y: i64| (0..=max_x).contains(&x) && (0..=max_y).contains(&y);
        if inside(x0, y0) && inside(x1, y1) {
            return Some(((x0, y0), (x1, y1)));
        }

        let (dx, dy) = ((x1 - x0) as f64, (y1 - y0) as f64);
        let edges = [
            (-dx, x0 as f64),
            (dx, (max_x - x0) as f64),
            (-dy, y0 as f64),
            (dy, (max_y - y0) as f64),
        ];

        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        for (p, q) in edges {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return None;
            }
        }

        let at = |t: f64| {
            let x = (x0 as f64 + t * dx).round() as i64;
            let y = (y0 as f64 + t * dy).round() as i64;
            (x.clamp(0, max_x), y.clamp(0, max_y))
        };
        Some((at(t0), at(t1)))
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Raw bytes of the pixel buffer, 4 per pixel, for GPU upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(w: u32, h: u32) -> Surface {
        Surface::new(w, h, Color::BLACK).unwrap()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_fills_with_background() {
        let s = Surface::new(3, 2, Color::RED).unwrap();
        assert_eq!(s.size(), Size::new(3, 2));
        assert_eq!(s.pixels().len(), 6);
        assert!(s.pixels().iter().all(|&c| c == Color::RED));
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert_eq!(
            Surface::new(0, 5, Color::BLACK).unwrap_err(),
            SurfaceError::InvalidSize { width: 0, height: 5 }
        );
        assert!(Surface::new(5, 0, Color::BLACK).is_err());
    }

    // ── pixel access ──────────────────────────────────────────────────────

    #[test]
    fn set_then_get() {
        let mut s = surface(4, 4);
        s.set_pixel(2, 3, Color::GREEN);
        assert_eq!(s.pixel(2, 3), Some(Color::GREEN));
        assert_eq!(s.pixel(3, 2), Some(Color::BLACK));
    }

    #[test]
    fn storage_is_row_major() {
        let mut s = surface(4, 3);
        s.set_pixel(1, 2, Color::BLUE);
        assert_eq!(s.pixels()[2 * 4 + 1], Color::BLUE);
    }

    #[test]
    fn pixel_outside_is_none() {
        let s = surface(4, 4);
        assert_eq!(s.pixel(-1, 0), None);
        assert_eq!(s.pixel(0, 4), None);
        assert_eq!(s.pixel(4, 0), None);
    }

    #[test]
    fn try_set_pixel_reports_out_of_bounds() {
        let mut s = surface(2, 2);
        let err = s.try_set_pixel(2, 0, Color::WHITE).unwrap_err();
        assert_eq!(err, SurfaceError::OutOfBounds { x: 2, y: 0, width: 2, height: 2 });
        assert!(s.pixels().iter().all(|&c| c == Color::BLACK));
    }

    #[test]
    #[should_panic(expected = "outside a 2x2 surface")]
    fn set_pixel_out_of_bounds_panics() {
        let mut s = surface(2, 2);
        s.set_pixel(0, -1, Color::WHITE);
    }

    #[test]
    fn clear_overwrites_everything() {
        let mut s = surface(3, 3);
        s.set_pixel(1, 1, Color::RED);
        s.clear(Color::WHITE);
        assert!(s.pixels().iter().all(|&c| c == Color::WHITE));
    }

    #[test]
    fn as_bytes_is_four_per_pixel() {
        let s = surface(5, 7);
        assert_eq!(s.as_bytes().len(), 5 * 7 * 4);
    }

    // ── blit ──────────────────────────────────────────────────────────────

    #[test]
    fn blit_inside() {
        let src = Surface::new(2, 2, Color::RED).unwrap();
        let mut dst = surface(4, 4);
        src.blit_to(&mut dst, 1, 1);
        assert_eq!(dst.pixel(1, 1), Some(Color::RED));
        assert_eq!(dst.pixel(2, 2), Some(Color::RED));
        assert_eq!(dst.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(dst.pixel(3, 3), Some(Color::BLACK));
    }

    #[test]
    fn blit_clips_negative_offset() {
        let mut src = surface(3, 3);
        src.set_pixel(2, 2, Color::CYAN);
        let mut dst = Surface::new(3, 3, Color::WHITE).unwrap();
        src.blit_to(&mut dst, -2, -2);
        assert_eq!(dst.pixel(0, 0), Some(Color::CYAN));
        assert_eq!(dst.pixel(1, 0), Some(Color::WHITE));
    }

    #[test]
    fn blit_clips_right_and_bottom_edges() {
        let src = Surface::new(3, 3, Color::RED).unwrap();
        let mut dst = surface(4, 4);
        src.blit_to(&mut dst, 2, 3);
        let red: usize = dst.pixels().iter().filter(|&&c| c == Color::RED).count();
        assert_eq!(red, 2);
        assert_eq!(dst.pixel(2, 3), Some(Color::RED));
        assert_eq!(dst.pixel(3, 3), Some(Color::RED));
    }

    #[test]
    fn blit_fully_outside_is_noop() {
        let src = Surface::new(2, 2, Color::RED).unwrap();
        let mut dst = surface(2, 2);
        src.blit_to(&mut dst, 5, 0);
        src.blit_to(&mut dst, 0, -2);
        assert!(dst.pixels().iter().all(|&c| c == Color::BLACK));
    }

    // ── lines ─────────────────────────────────────────────────────────────

    #[test]
    fn line_includes_both_endpoints() {
        let mut s = surface(10, 10);
        s.draw_line(1, 1, 8, 4, Color::WHITE);
        assert_eq!(s.pixel(1, 1), Some(Color::WHITE));
        assert_eq!(s.pixel(8, 4), Some(Color::WHITE));
    }

    #[test]
    fn horizontal_line_length() {
        let mut s = surface(10, 3);
        s.draw_line(7, 1, 2, 1, Color::WHITE);
        let lit: Vec<i32> = (0..10).filter(|&x| s.pixel(x, 1) == Some(Color::WHITE)).collect();
        assert_eq!(lit, vec![2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn diagonal_line_one_pixel_per_step() {
        let mut s = surface(5, 5);
        s.draw_line(4, 0, 0, 4, Color::WHITE);
        for i in 0..5 {
            assert_eq!(s.pixel(4 - i, i), Some(Color::WHITE));
        }
        let lit = s.pixels().iter().filter(|&&c| c == Color::WHITE).count();
        assert_eq!(lit, 5);
    }

    #[test]
    fn steep_line_covers_every_row() {
        let mut s = surface(4, 12);
        s.draw_line(0, 0, 3, 11, Color::WHITE);
        for y in 0..12 {
            assert!((0..4).any(|x| s.pixel(x, y) == Some(Color::WHITE)), "row {y} empty");
        }
    }

    #[test]
    fn single_point_line() {
        let mut s = surface(3, 3);
        s.draw_line(1, 1, 1, 1, Color::RED);
        assert_eq!(s.pixels().iter().filter(|&&c| c == Color::RED).count(), 1);
    }

    #[test]
    fn line_partially_outside_is_clipped() {
        let mut s = surface(4, 4);
        s.draw_line(-3, 1, 6, 1, Color::WHITE);
        for x in 0..4 {
            assert_eq!(s.pixel(x, 1), Some(Color::WHITE));
        }
    }

    #[test]
    fn line_across_whole_i32_range() {
        let mut s = surface(4, 4);
        s.draw_line(i32::MIN, 1, i32::MAX, 1, Color::WHITE);
        for x in 0..4 {
            assert_eq!(s.pixel(x, 1), Some(Color::WHITE));
        }
        assert_eq!(s.pixels().iter().filter(|&&c| c == Color::WHITE).count(), 4);
    }

    #[test]
    fn far_diagonal_is_clipped_to_surface() {
        let mut s = surface(4, 4);
        s.draw_line(i32::MIN, i32::MIN, i32::MAX, i32::MAX, Color::WHITE);
        for i in 0..4 {
            assert_eq!(s.pixel(i, i), Some(Color::WHITE));
        }
        assert_eq!(s.pixels().iter().filter(|&&c| c == Color::WHITE).count(), 4);
    }

    #[test]
    fn line_missing_surface_draws_nothing() {
        let mut s = surface(4, 4);
        s.draw_line(i32::MIN, -5, i32::MAX, -5, Color::WHITE);
        s.draw_line(10, 0, 20, 3, Color::WHITE);
        assert!(s.pixels().iter().all(|&c| c == Color::BLACK));
    }
}
