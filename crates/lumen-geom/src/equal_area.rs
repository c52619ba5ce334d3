// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Clarberg's equal-area octahedral mapping between `[0, 1]²` and the unit
//! sphere.
//!
//! Equal areas on the square map to equal solid angles, so uniform samples
//! on the square stay uniform on the sphere. The upper hemisphere fills the
//! inner diamond of the square and the lower hemisphere the four corners.

use lumen_math::trig::safe_sqrt;
use lumen_math::{Float, Point2, Point3, Vec3};

/// Maps a point of `[0, 1]²` to a unit direction.
pub fn equal_area_square_to_sphere<T: Float>(p: &Point2<T>) -> Vec3<T> {
    debug_assert!(
        p.x() >= T::zero() && p.x() <= T::one() && p.y() >= T::zero() && p.y() <= T::one(),
        "equal-area input outside the unit square: {p:?}"
    );
    let u = T::two() * p.x() - T::one();
    let v = T::two() * p.y() - T::one();
    let up = u.abs();
    let vp = v.abs();

    // Signed distance from the diamond |u| + |v| = 1; positive inside.
    let signed_distance = T::one() - (up + vp);
    let d = signed_distance.abs();
    let r = T::one() - d;

    let quarter_pi = T::PI / T::from_f32(4.0);
    let phi = (if r == T::zero() { T::one() } else { (vp - up) / r + T::one() }) * quarter_pi;

    let z = (T::one() - r * r).copysign(signed_distance);
    let cos_phi = phi.cos().copysign(u);
    let sin_phi = phi.sin().copysign(v);
    let s = r * safe_sqrt(T::two() - r * r);
    Vec3::new(cos_phi * s, sin_phi * s, z)
}

/// Inverse of [`equal_area_square_to_sphere`] for a unit direction.
pub fn equal_area_sphere_to_square<T: Float>(d: &Point3<T>) -> Point2<T> {
    debug_assert!(
        (d.length_squared() - T::one()).abs() < T::from_f32(1e-4),
        "equal-area input is not a unit vector: {d:?}"
    );
    let x = d.x().abs();
    let y = d.y().abs();
    let z = d.z().abs();

    let r = safe_sqrt(T::one() - z);
    let a = x.max_of(y);
    let b = x.min_of(y);
    let b = if a == T::zero() { T::zero() } else { b / a };

    let mut phi = b.atan() * T::two() / T::PI;
    if x < y {
        phi = T::one() - phi;
    }

    let mut v = phi * r;
    let mut u = r - v;
    if d.z() < T::zero() {
        core::mem::swap(&mut u, &mut v);
        u = T::one() - u;
        v = T::one() - v;
    }
    let u = u.copysign(d.x());
    let v = v.copysign(d.y());
    Point2::new((u + T::one()) / T::two(), (v + T::one()) / T::two())
}

/// Folds a point that stepped outside `[0, 1]²` back in, respecting the
/// mapping's edge symmetry so neighbours on the sphere stay neighbours.
pub fn wrap_equal_area_square<T: Float>(p: &Point2<T>) -> Point2<T> {
    let (mut x, mut y) = (p.x(), p.y());
    if x < T::zero() {
        x = -x;
        y = T::one() - y;
    } else if x > T::one() {
        x = T::two() - x;
        y = T::one() - y;
    }
    if y < T::zero() {
        x = T::one() - x;
        y = -y;
    } else if y > T::one() {
        x = T::one() - x;
        y = T::two() - y;
    }
    Point2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_and_corners_are_the_poles() {
        let up = equal_area_square_to_sphere(&Point2::new(0.5_f64, 0.5));
        assert_eq!(up.to_array(), [0.0, 0.0, 1.0]);
        for corner in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
            let down = equal_area_square_to_sphere(&Point2::new(corner.0, corner.1));
            assert!(down.approx_eq(&Vec3::new(0.0, 0.0, -1.0), 1e-12), "{corner:?} -> {down:?}");
        }
    }

    #[test]
    fn axes_land_on_the_diamond() {
        let p = equal_area_sphere_to_square(&Vec3::new(1.0_f64, 0.0, 0.0));
        assert_eq!(p.to_array(), [1.0, 0.5]);
        let p = equal_area_sphere_to_square(&Vec3::new(0.0_f64, 0.0, -1.0));
        assert_eq!(p.to_array(), [1.0, 1.0]);
        let back = equal_area_square_to_sphere(&Point2::new(1.0_f64, 0.5));
        assert!(back.approx_eq(&Vec3::new(1.0, 0.0, 0.0), 1e-12));
    }

    #[test]
    fn wrap_mirrors_across_edges() {
        let p = wrap_equal_area_square(&Point2::new(-0.25_f32, 0.25));
        assert_eq!(p.to_array(), [0.25, 0.75]);
        let p = wrap_equal_area_square(&Point2::new(0.25_f32, 1.5));
        assert_eq!(p.to_array(), [0.75, 0.5]);
        let inside = Point2::new(0.3_f32, 0.6);
        assert_eq!(wrap_equal_area_square(&inside), inside);
    }
}
