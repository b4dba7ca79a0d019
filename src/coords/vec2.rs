use core::ops::{Add, Div, Mul, Sub};

/// 2D vector in world units (unless a call site says otherwise).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Rotates counter-clockwise by `radians` around the origin.
    ///
    /// Pass a negated angle for a clockwise turn; the quad transform relies on
    /// exactly that (see `transform`).
    #[inline]
    pub fn rotated(self, radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Component-wise product (per-axis scaling).
impl Mul<Vec2> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
    }

    #[test]
    fn rotated_zero_is_identity() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(v.rotated(0.0), v);
    }

    #[test]
    fn rotated_quarter_turn_is_ccw() {
        let v = Vec2::new(1.0, 0.0).rotated(core::f32::consts::FRAC_PI_2);
        assert!(close(v, Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn rotated_negative_angle_is_cw() {
        let v = Vec2::new(1.0, 0.0).rotated(-core::f32::consts::FRAC_PI_2);
        assert!(close(v, Vec2::new(0.0, -1.0)));
    }

    #[test]
    fn component_mul_scales_per_axis() {
        assert_eq!(Vec2::new(2.0, 3.0) * Vec2::new(4.0, 0.5), Vec2::new(8.0, 1.5));
    }
}
