use pxr::math::Vec2;

/// Rotation speed in radians per second.
pub const ANGULAR_VELOCITY: f32 = 2.0;

/// Corners of a square of side `side` centred on `center`, turned
/// counter-clockwise on screen (y down) by `angle` radians, in drawing order.
pub fn square_corners(center: Vec2, side: f32, angle: f32) -> [Vec2; 4] {
    let h = side / 2.0;
    [
        Vec2::new(-h, -h),
        Vec2::new(h, -h),
        Vec2::new(h, h),
        Vec2::new(-h, h),
    ]
    .map(|corner| corner.rotated(-angle) + center)
}

/// The four edges as integer pixel endpoints, each closing back to the start.
pub fn square_edges(corners: &[Vec2; 4]) -> [((i32, i32), (i32, i32)); 4] {
    std::array::from_fn(|i| (corners[i].to_i32(), corners[(i + 1) % 4].to_i32()))
}

#[cfg(test)]
mod tests {
    use pxr::math::FRAC_PI_2;

    use super::*;

    #[test]
    fn unrotated_square_is_axis_aligned() {
        let c = square_corners(Vec2::new(10.0, 10.0), 4.0, 0.0);
        assert_eq!(c[0], Vec2::new(8.0, 8.0));
        assert_eq!(c[2], Vec2::new(12.0, 12.0));
    }

    #[test]
    fn quarter_turn_maps_corners_onto_each_other() {
        let c = square_corners(Vec2::zero(), 2.0, FRAC_PI_2);
        // Top-left swings down to bottom-left with y pointing down.
        assert!((c[0] - Vec2::new(-1.0, 1.0)).length() < 1e-5);
        assert!((c[1] - Vec2::new(-1.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn corners_stay_on_circumcircle() {
        let center = Vec2::new(320.0, 240.0);
        for corner in square_corners(center, 160.0, 0.7) {
            assert!(((corner - center).length() - 80.0 * 2f32.sqrt()).abs() < 1e-3);
        }
    }

    #[test]
    fn edges_close_the_loop() {
        let c = square_corners(Vec2::new(5.0, 5.0), 4.0, 0.0);
        let e = square_edges(&c);
        assert_eq!(e[0], ((3, 3), (7, 3)));
        assert_eq!(e[3], ((3, 7), (3, 3)));
    }
}
