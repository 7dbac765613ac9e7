//! 2D affine matrix builders
//!
//! Every builder returns a 4x4 matrix acting on the z = 0 plane. Deltas are
//! composed onto an entity by left multiplication, so the most recent delta is
//! always the outermost factor.

use glam::{Mat4, Vec2, Vec3};

/// Counter-clockwise rotation about the origin
#[inline]
pub fn rotate(theta: f32) -> Mat4 {
    Mat4::from_rotation_z(theta)
}

/// Translation by `distance` along `direction` (radians)
#[inline]
pub fn translate_along(distance: f32, direction: f32) -> Mat4 {
    translate_xy(distance * direction.cos(), distance * direction.sin())
}

#[inline]
pub fn translate_xy(dx: f32, dy: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(dx, dy, 0.0))
}

#[inline]
pub fn scale_uniform(s: f32) -> Mat4 {
    scale_xy(s, s)
}

#[inline]
pub fn scale_xy(sx: f32, sy: f32) -> Mat4 {
    Mat4::from_scale(Vec3::new(sx, sy, 1.0))
}

/// Make `op` act about `pivot` instead of the origin
#[inline]
pub fn about_pivot(op: Mat4, pivot: Vec2) -> Mat4 {
    translate_xy(pivot.x, pivot.y) * op * translate_xy(-pivot.x, -pivot.y)
}

/// Where `m` sends the local origin, i.e. the visual center of a unit quad
#[cfg(test)]
pub(crate) fn origin_of(m: &Mat4) -> Vec2 {
    m.transform_point3(Vec3::ZERO).truncate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    fn apply(m: Mat4, p: Vec2) -> Vec2 {
        m.transform_point3(p.extend(0.0)).truncate()
    }

    #[test]
    fn test_rotate_is_counter_clockwise() {
        let p = apply(rotate(PI / 2.0), Vec2::X);
        assert!((p - Vec2::Y).length() < 1e-6);
    }

    #[test]
    fn test_translate_along_heading() {
        let p = apply(translate_along(2.0, PI / 2.0), Vec2::ZERO);
        assert!((p - Vec2::new(0.0, 2.0)).length() < 1e-6);
    }

    #[test]
    fn test_scale_xy_keeps_z() {
        let m = scale_xy(2.0, 3.0);
        let p = m.transform_point3(Vec3::new(1.0, 1.0, 5.0));
        assert_eq!(p, Vec3::new(2.0, 3.0, 5.0));
    }

    #[test]
    fn test_composition_order_matters() {
        let a = translate_xy(1.0, 0.0);
        let b = rotate(PI / 2.0);
        // b applied after a
        let p = apply(b * a, Vec2::ZERO);
        assert!((p - Vec2::Y).length() < 1e-6);
        let q = apply(a * b, Vec2::ZERO);
        assert!((q - Vec2::X).length() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_pivot_is_fixed_point(
            theta in -10.0f32..10.0,
            s in 0.1f32..3.0,
            px in -2.0f32..2.0,
            py in -2.0f32..2.0,
        ) {
            let pivot = Vec2::new(px, py);
            let r = apply(about_pivot(rotate(theta), pivot), pivot);
            prop_assert!((r - pivot).length() < 1e-4);
            let g = apply(about_pivot(scale_uniform(s), pivot), pivot);
            prop_assert!((g - pivot).length() < 1e-4);
        }

        #[test]
        fn prop_rotation_about_pivot_preserves_distance(
            theta in -10.0f32..10.0,
            px in -2.0f32..2.0,
            py in -2.0f32..2.0,
            qx in -2.0f32..2.0,
            qy in -2.0f32..2.0,
        ) {
            let pivot = Vec2::new(px, py);
            let q = Vec2::new(qx, qy);
            let moved = apply(about_pivot(rotate(theta), pivot), q);
            prop_assert!((moved.distance(pivot) - q.distance(pivot)).abs() < 1e-4);
        }
    }
}
