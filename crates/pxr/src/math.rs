//! Small numeric helpers for animation and procedural pixels.

pub use std::f32::consts::{FRAC_PI_2, PI, TAU};
pub use pxr_engine::coords::Vec2;

/// Moves back and forth between `min` and `max` as `t` grows.
///
/// `pingpong(t, 0.0, 1.0)` goes 0 → 1 → 0 over `t` in `[0, 2]`. Negative
/// `t` mirrors the positive side. A zero-width range returns `min`.
pub fn pingpong(t: f32, min: f32, max: f32) -> f32 {
    let range = max - min;
    if range == 0.0 {
        return min;
    }
    let m = t.rem_euclid(2.0 * range);
    min + (range - (m - range).abs())
}

/// Integer [`pingpong`].
pub fn pingpong_i32(t: i32, min: i32, max: i32) -> i32 {
    let range = max - min;
    if range == 0 {
        return min;
    }
    let m = t.rem_euclid(2 * range);
    min + (range - (m - range).abs())
}

/// Wraps `value` into `[min, max)`.
pub fn wrap(value: f32, min: f32, max: f32) -> f32 {
    let range = max - min;
    if range == 0.0 {
        return min;
    }
    min + (value - min).rem_euclid(range)
}

/// Maps `value` from `[in_min, in_max]` to `[out_min, out_max]`, clamping to
/// the output range.
pub fn remap(in_min: f32, in_max: f32, out_min: f32, out_max: f32, value: f32) -> f32 {
    let t = ((value - in_min) / (in_max - in_min)).clamp(0.0, 1.0);
    out_min + (out_max - out_min) * t
}

/// -1, 0 or 1. Unlike `f32::signum`, zero maps to zero.
pub fn sign_or_zero(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Cubic ease-in-out over `t` in `[0, 1]` (clamped).
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Bouncing ease-out over `t` in `[0, 1]` (clamped).
pub fn ease_out_bounce(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    let t = t.clamp(0.0, 1.0);
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

/// Stateless hash of a grid position and a time/frame value.
///
/// Same inputs always give the same output; suitable for noise, not for
/// anything that needs real randomness.
pub fn pseudo_random(x: i32, y: i32, t: u64) -> u32 {
    const HASH_X: u64 = 374_761_393;
    const HASH_Y: u64 = 668_265_263;
    const HASH_T: u64 = 14_466_617;
    const HASH_MUL: u64 = 1_274_126_177;

    // Negative coordinates are sign-extended before mixing.
    let mut hash = (x as i64 as u64)
        .wrapping_mul(HASH_X)
        .wrapping_add((y as i64 as u64).wrapping_mul(HASH_Y))
        .wrapping_add(t.wrapping_mul(HASH_T));

    hash = (hash ^ (hash >> 13)).wrapping_mul(HASH_MUL);
    (hash ^ (hash >> 16)) as u32
}
