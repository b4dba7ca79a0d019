use crate::coords::Vec2;

/// 2D camera: pan, spin, zoom.
///
/// `rotation` is radians and is applied with the opposite sign to quad-local
/// rotation (camera `+θ`, quad `-θ`). That split is intentional and must stay
/// in lockstep with the shader; see `transform` for the full convention.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec2,
    pub rotation: f32,
    pub zoom: f32,
}

impl Default for Camera {
    /// Identity view: origin, no rotation, zoom 1.
    fn default() -> Self {
        Self {
            position: Vec2::zero(),
            rotation: 0.0,
            zoom: 1.0,
        }
    }
}

impl Camera {
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite() && self.zoom.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity_view() {
        let cam = Camera::default();
        assert_eq!(cam.position, Vec2::zero());
        assert_eq!(cam.rotation, 0.0);
        assert_eq!(cam.zoom, 1.0);
    }

    #[test]
    fn nan_rotation_is_not_finite() {
        let cam = Camera { rotation: f32::NAN, ..Camera::default() };
        assert!(!cam.is_finite());
    }
}
