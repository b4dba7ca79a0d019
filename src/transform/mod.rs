//! CPU mirror of the quad shader's per-vertex arithmetic.
//!
//! Every function here matches `render/shaders/quad.wgsl` operation for
//! operation, so the transform pipeline can be pinned down in closed form
//! without a GPU.
//!
//! Sign convention: quad-local rotation is applied as `-quad.rotation`, the
//! camera rotation as `+camera.rotation`. The asymmetry is deliberate — it is
//! observed behavior of the shader, not an oversight — and any edit here must
//! keep the WGSL in lockstep.

use crate::coords::{Vec2, Viewport};
use crate::paint::Color;
use crate::scene::{Camera, Quad};

/// Everything the vertex stage hands to the rasterizer for one corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VertexOutput {
    /// Clip-space position. Orthographic: z = 0, w = 1, always.
    pub clip_position: [f32; 4],
    pub world_position: Vec2,
    /// Raw unit-square corner UV, untouched by any transform.
    pub uv: Vec2,
    pub color: Color,
}

/// Decodes a unit-square corner from the two low bits of `vertex_index`.
///
/// Index order 0..4 yields (0,0), (1,0), (0,1), (1,1) — a 4-vertex triangle
/// strip over the quad with no vertex buffer at all.
#[inline]
pub fn corner_uv(vertex_index: u32) -> Vec2 {
    Vec2::new((vertex_index & 1) as f32, ((vertex_index >> 1) & 1) as f32)
}

/// Corner UV to world space: center on the quad, scale, rotate by the quad's
/// **negated** rotation, translate.
#[inline]
pub fn local_to_world(quad: &Quad, uv: Vec2) -> Vec2 {
    let offset = (uv - Vec2::splat(0.5)) * quad.scale;
    offset.rotated(-quad.rotation) + quad.position
}

/// World space to clip space under `camera`: translate into camera space,
/// apply zoom, rotate by the camera's **positive** rotation, then divide x by
/// the viewport aspect so non-square targets do not stretch.
#[inline]
pub fn world_to_clip(camera: &Camera, viewport: Viewport, world: Vec2) -> [f32; 4] {
    let view = ((world - camera.position) * camera.zoom).rotated(camera.rotation);
    [view.x / viewport.aspect(), view.y, 0.0, 1.0]
}

/// The full vertex-stage contract for one (vertex, instance) pair.
pub fn vertex(camera: &Camera, viewport: Viewport, quad: &Quad, vertex_index: u32) -> VertexOutput {
    let uv = corner_uv(vertex_index);
    let world_position = local_to_world(quad, uv);
    VertexOutput {
        clip_position: world_to_clip(camera, viewport, world_position),
        world_position,
        uv,
        color: quad.color,
    }
}

/// The fragment-stage contract: interpolated color out, alpha pinned to 1.
#[inline]
pub fn fragment(color: Color) -> [f32; 4] {
    [color.r, color.g, color.b, 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, FRAC_PI_3};

    fn square_viewport() -> Viewport {
        Viewport::new(1.0, 1.0)
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    fn close2(a: Vec2, b: Vec2) -> bool {
        close(a.x, b.x) && close(a.y, b.y)
    }

    // ── corner enumeration ────────────────────────────────────────────────

    #[test]
    fn corner_uv_enumerates_the_unit_square() {
        assert_eq!(corner_uv(0), Vec2::new(0.0, 0.0));
        assert_eq!(corner_uv(1), Vec2::new(1.0, 0.0));
        assert_eq!(corner_uv(2), Vec2::new(0.0, 1.0));
        assert_eq!(corner_uv(3), Vec2::new(1.0, 1.0));
    }

    // ── identity camera ───────────────────────────────────────────────────

    #[test]
    fn identity_camera_maps_2x2_quad_to_clip_corners() {
        let camera = Camera::default();
        let quad = Quad {
            scale: Vec2::splat(2.0),
            color: Color::new(1.0, 0.0, 0.0),
            ..Quad::default()
        };

        let expected = [[-1.0, -1.0], [1.0, -1.0], [-1.0, 1.0], [1.0, 1.0]];
        for (i, [x, y]) in expected.into_iter().enumerate() {
            let out = vertex(&camera, square_viewport(), &quad, i as u32);
            assert_eq!(out.clip_position, [x, y, 0.0, 1.0], "corner {i}");
            assert_eq!(fragment(out.color), [1.0, 0.0, 0.0, 1.0]);
        }
    }

    // ── aspect correction ─────────────────────────────────────────────────

    #[test]
    fn wide_viewport_halves_x_and_keeps_y() {
        let camera = Camera::default();
        let quad = Quad { scale: Vec2::splat(2.0), ..Quad::default() };

        for i in 0..4u32 {
            let square = vertex(&camera, square_viewport(), &quad, i).clip_position;
            let wide = vertex(&camera, Viewport::new(2.0, 1.0), &quad, i).clip_position;
            assert_eq!(wide[0], square[0] / 2.0, "corner {i} x");
            assert_eq!(wide[1], square[1], "corner {i} y");
        }
    }

    // ── rotation sign asymmetry ───────────────────────────────────────────

    #[test]
    fn quad_rotation_turns_offsets_clockwise() {
        let theta = FRAC_PI_3;
        let quad = Quad {
            position: Vec2::new(2.0, -1.0),
            scale: Vec2::new(3.0, 1.0),
            rotation: theta,
            ..Quad::default()
        };

        for i in 0..4u32 {
            let off = (corner_uv(i) - Vec2::splat(0.5)) * quad.scale;
            // Spelled-out rotation by -theta, independent of Vec2::rotated.
            let expected = Vec2::new(
                off.x * (-theta).cos() - off.y * (-theta).sin(),
                off.y * (-theta).cos() + off.x * (-theta).sin(),
            ) + quad.position;
            assert!(close2(local_to_world(&quad, corner_uv(i)), expected), "corner {i}");
        }
    }

    #[test]
    fn camera_rotation_turns_view_counter_clockwise() {
        let theta = FRAC_PI_3;
        let camera = Camera {
            position: Vec2::new(0.5, 0.25),
            rotation: theta,
            zoom: 2.0,
        };
        let world = Vec2::new(3.0, -2.0);

        let v = (world - camera.position) * camera.zoom;
        // Spelled-out rotation by +theta, independent of Vec2::rotated.
        let expected = Vec2::new(
            v.x * theta.cos() - v.y * theta.sin(),
            v.y * theta.cos() + v.x * theta.sin(),
        );
        let clip = world_to_clip(&camera, square_viewport(), world);
        assert!(close(clip[0], expected.x));
        assert!(close(clip[1], expected.y));
        assert_eq!(clip[2], 0.0);
        assert_eq!(clip[3], 1.0);
    }

    #[test]
    fn equal_quad_and_camera_rotation_does_not_cancel() {
        // The two rotations have opposite signs but different pivots (quad
        // center vs. camera origin), so for an off-origin quad they must not
        // collapse back to the unrotated result.
        let theta = FRAC_PI_2;
        let camera_rotated = Camera { rotation: theta, ..Camera::default() };
        let quad_rotated = Quad {
            position: Vec2::new(1.0, 0.0),
            rotation: theta,
            ..Quad::default()
        };
        let quad_plain = Quad { rotation: 0.0, ..quad_rotated };

        let both = vertex(&camera_rotated, square_viewport(), &quad_rotated, 3);
        let neither = vertex(&Camera::default(), square_viewport(), &quad_plain, 3);

        let dx = both.clip_position[0] - neither.clip_position[0];
        let dy = both.clip_position[1] - neither.clip_position[1];
        assert!(dx.abs() > 0.1 || dy.abs() > 0.1, "rotations cancelled: {both:?}");
    }

    // ── pass-through invariants ───────────────────────────────────────────

    #[test]
    fn uv_is_raw_corner_regardless_of_transform() {
        let camera = Camera {
            position: Vec2::new(-7.0, 3.0),
            rotation: 1.3,
            zoom: 0.1,
        };
        let quad = Quad {
            position: Vec2::new(12.0, 8.0),
            scale: Vec2::new(5.0, 0.5),
            rotation: -2.7,
            ..Quad::default()
        };

        for i in 0..4u32 {
            let out = vertex(&camera, Viewport::new(1280.0, 720.0), &quad, i);
            assert_eq!(out.uv, corner_uv(i), "corner {i}");
        }
    }

    #[test]
    fn fragment_alpha_is_always_one() {
        assert_eq!(fragment(Color::BLACK)[3], 1.0);
        assert_eq!(fragment(Color::new(2.0, -1.0, 0.5))[3], 1.0);
    }

    #[test]
    fn fragment_passes_color_through_unclamped() {
        assert_eq!(fragment(Color::new(2.0, -1.0, 0.5)), [2.0, -1.0, 0.5, 1.0]);
    }

    // ── degenerate scale ──────────────────────────────────────────────────

    #[test]
    fn zero_scale_collapses_corners_to_quad_position() {
        let quad = Quad {
            position: Vec2::new(4.0, -3.0),
            scale: Vec2::zero(),
            rotation: 0.9,
            ..Quad::default()
        };

        for i in 0..4u32 {
            let world = local_to_world(&quad, corner_uv(i));
            assert!(world.is_finite(), "corner {i} produced a non-finite point");
            assert!(close2(world, quad.position), "corner {i}");
        }
    }
}
