use crate::coords::Vec2;
use crate::paint::Color;

/// One rendered instance: a colored rectangle in world space.
///
/// `scale` is the full extent per axis; corners sit at `±scale / 2` around
/// `position` before rotation. `rotation` is radians, applied clockwise on
/// screen (the shader negates it — the camera takes the positive sign).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quad {
    pub position: Vec2,
    pub scale: Vec2,
    pub color: Color,
    pub rotation: f32,
}

impl Default for Quad {
    /// Unit white quad at the origin.
    fn default() -> Self {
        Self {
            position: Vec2::zero(),
            scale: Vec2::splat(1.0),
            color: Color::WHITE,
            rotation: 0.0,
        }
    }
}

impl Quad {
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.scale.is_finite()
            && self.color.is_finite()
            && self.rotation.is_finite()
    }
}
