/// Integer size in pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels covered.
    #[inline]
    pub const fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Scales both dimensions by an integer factor, saturating on overflow.
    #[inline]
    pub const fn scaled(self, factor: u32) -> Self {
        Self {
            width: self.width.saturating_mul(factor),
            height: self.height.saturating_mul(factor),
        }
    }

    /// True when neither dimension exceeds `max_dim`.
    #[inline]
    pub const fn fits_within(self, max_dim: u32) -> bool {
        self.width <= max_dim && self.height <= max_dim
    }
}
