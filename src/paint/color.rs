/// Linear RGB color, no alpha channel.
///
/// Components are linear-light and deliberately unclamped; the fragment stage
/// emits them as-is with alpha pinned to 1.0, so values outside `[0, 1]` are
/// the host's business (e.g. over-bright tints on a float target).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from byte components (`0`–`255`), dividing by 255.
    ///
    /// No gamma conversion is applied; callers holding sRGB bytes should
    /// linearize first if their target expects linear light.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8_maps_extremes() {
        assert_eq!(Color::from_u8(0, 0, 0), Color::BLACK);
        assert_eq!(Color::from_u8(255, 255, 255), Color::WHITE);
    }

    #[test]
    fn out_of_range_components_are_kept() {
        let c = Color::new(2.5, -0.5, 1.0);
        assert_eq!(c.r, 2.5);
        assert_eq!(c.g, -0.5);
    }
}
