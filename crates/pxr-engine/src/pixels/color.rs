use bytemuck::{Pod, Zeroable};

/// Packed 32-bit color, stored as `0xAARRGGBB`.
///
/// On little-endian targets the in-memory byte order of a pixel is
/// `B, G, R, A`, which is what the GPU texture format expects
/// (see `render::pixels`).
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);

    /// Opaque color from 8-bit channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Wraps an already packed `0xAARRGGBB` value.
    #[inline]
    pub const fn from_u32(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Returns the packed `0xAARRGGBB` value.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color::from_u32(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        let c = Color::rgb(1, 2, 3);
        assert_eq!(c.a(), 255);
        assert_eq!(c.to_u32(), 0xFF01_0203);
    }

    #[test]
    fn channels_round_trip() {
        let c = Color::rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0x12, 0x34, 0x56, 0x78));
        assert_eq!(Color::from_u32(c.to_u32()), c);
    }

    #[test]
    fn default_is_opaque_black() {
        assert_eq!(Color::default(), Color::BLACK);
        assert_eq!(Color::BLACK.to_u32(), 0xFF00_0000);
    }

    #[test]
    fn named_constants() {
        assert_eq!(Color::MAGENTA, Color::rgb(255, 0, 255));
        assert_ne!(Color::CYAN, Color::YELLOW);
    }

    #[test]
    fn byte_order_is_bgra_in_memory() {
        let px = [Color::rgba(0x11, 0x22, 0x33, 0x44)];
        let bytes: &[u8] = bytemuck::cast_slice(&px);
        let expected = if cfg!(target_endian = "little") {
            [0x33, 0x22, 0x11, 0x44]
        } else {
            [0x44, 0x11, 0x22, 0x33]
        };
        assert_eq!(bytes, expected);
    }
}
