/// Render-target size in pixels (logical or physical; the math is unit-free).
///
/// The vertex stage divides clip-space x by `aspect()`, so a zero height would
/// poison the whole frame with infinities. `is_valid` is the host-side gate
/// for that precondition; the shader itself never checks.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// width / height, the horizontal clip-space correction factor.
    #[inline]
    pub fn aspect(self) -> f32 {
        self.width / self.height
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}
