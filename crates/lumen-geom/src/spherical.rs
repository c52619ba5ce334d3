// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Directions on the unit sphere.
//!
//! The shading-frame helpers (`cos_theta` through `same_hemisphere`) take a
//! unit direction already expressed in a local frame whose `z` axis is the
//! surface normal.

use lumen_math::trig::{clamp, clamp_acos, clamp_asin, safe_sqrt};
use lumen_math::{Float, Vec2, Vec3};

/// Angle in radians between two unit vectors.
///
/// Uses the half-chord identity, which stays accurate near 0 and π where
/// `acos(a·b)` does not.
pub fn angle_between<T: Float>(a: &Vec3<T>, b: &Vec3<T>) -> T {
    if a.dot(b) < T::zero() {
        T::PI - T::two() * clamp_asin((*a + *b).length() / T::two())
    } else {
        T::two() * clamp_asin((*a - *b).length() / T::two())
    }
}

/// 2D counterpart of [`angle_between`].
pub fn angle_between2<T: Float>(a: &Vec2<T>, b: &Vec2<T>) -> T {
    if a.dot(b) < T::zero() {
        T::PI - T::two() * clamp_asin((*a + *b).length() / T::two())
    } else {
        T::two() * clamp_asin((*a - *b).length() / T::two())
    }
}

/// Solid angle of the spherical triangle with unit vertices `a`, `b`, `c`.
///
/// Zero when two vertices coincide or are antipodal.
pub fn spherical_triangle_area<T: Float>(a: &Vec3<T>, b: &Vec3<T>, c: &Vec3<T>) -> T {
    let bc = b.cross(c);
    if a.cross(b).length_squared() == T::zero()
        || bc.length_squared() == T::zero()
        || c.cross(a).length_squared() == T::zero()
    {
        return T::zero();
    }
    let denom = T::one() + a.dot(b) + b.dot(c) + c.dot(a);
    (T::two() * a.dot(&bc).atan2(denom)).abs()
}

/// Solid angle of the spherical quad `a, b, c, d` (unit vertices, in order).
///
/// Zero when any edge is degenerate.
pub fn spherical_quad_area<T: Float>(a: &Vec3<T>, b: &Vec3<T>, c: &Vec3<T>, d: &Vec3<T>) -> T {
    let ab = a.cross(b);
    let bc = b.cross(c);
    let cd = c.cross(d);
    let da = d.cross(a);
    if [ab, bc, cd, da].iter().any(|n| n.length_squared() == T::zero()) {
        return T::zero();
    }
    let (ab, bc, cd, da) = (ab.normalize(), bc.normalize(), cd.normalize(), da.normalize());
    let sum = angle_between(&da, &-ab)
        + angle_between(&ab, &-bc)
        + angle_between(&bc, &-cd)
        + angle_between(&cd, &-da);
    (sum - T::two() * T::PI).abs()
}

/// Unit direction for polar angle `(sin θ, cos θ)` and azimuth `phi`
/// (radians). Inputs are clamped to `[-1, 1]`.
pub fn spherical_to_cartesian<T: Float>(sin_theta: T, cos_theta: T, phi: T) -> Vec3<T> {
    let s = clamp(sin_theta, -T::one(), T::one());
    Vec3::new(s * phi.cos(), s * phi.sin(), clamp(cos_theta, -T::one(), T::one()))
}

/// Polar angle of a unit vector, in `[0, π]`.
pub fn spherical_theta<T: Float>(v: &Vec3<T>) -> T {
    debug_assert!(
        (v.length_squared() - T::one()).abs() < T::from_f32(1e-4),
        "spherical_theta expects a unit vector: {v:?}"
    );
    clamp_acos(v.z())
}

/// Azimuth of `v` around `z`, in `[0, 2π)`.
pub fn spherical_phi<T: Float>(v: &Vec3<T>) -> T {
    let p = v.y().atan2(v.x());
    if p < T::zero() {
        p + T::two() * T::PI
    } else {
        p
    }
}

/// `cos θ` of a local-frame direction.
#[inline]
pub fn cos_theta<T: Float>(w: &Vec3<T>) -> T {
    w.z()
}

/// `cos² θ`.
#[inline]
pub fn cos2_theta<T: Float>(w: &Vec3<T>) -> T {
    w.z() * w.z()
}

/// `|cos θ|`.
#[inline]
pub fn abs_cos_theta<T: Float>(w: &Vec3<T>) -> T {
    w.z().abs()
}

/// `sin² θ`, never negative.
#[inline]
pub fn sin2_theta<T: Float>(w: &Vec3<T>) -> T {
    T::zero().max_of(T::one() - cos2_theta(w))
}

/// `sin θ`.
#[inline]
pub fn sin_theta<T: Float>(w: &Vec3<T>) -> T {
    sin2_theta(w).sqrt()
}

/// `tan θ`; infinite for directions in the tangent plane.
#[inline]
pub fn tan_theta<T: Float>(w: &Vec3<T>) -> T {
    sin_theta(w) / cos_theta(w)
}

/// `tan² θ`.
#[inline]
pub fn tan2_theta<T: Float>(w: &Vec3<T>) -> T {
    sin2_theta(w) / cos2_theta(w)
}

/// `cos φ`; 1 along the pole, where φ is undefined.
pub fn cos_phi<T: Float>(w: &Vec3<T>) -> T {
    let s = sin_theta(w);
    if s == T::zero() {
        T::one()
    } else {
        clamp(w.x() / s, -T::one(), T::one())
    }
}

/// `sin φ`; 0 along the pole.
pub fn sin_phi<T: Float>(w: &Vec3<T>) -> T {
    let s = sin_theta(w);
    if s == T::zero() {
        T::zero()
    } else {
        clamp(w.y() / s, -T::one(), T::one())
    }
}

/// Cosine of the azimuth difference between two directions; 1 if either
/// lies on the pole.
pub fn cos_delta_phi<T: Float>(wa: &Vec3<T>, wb: &Vec3<T>) -> T {
    let wa_xy = wa.x() * wa.x() + wa.y() * wa.y();
    let wb_xy = wb.x() * wb.x() + wb.y() * wb.y();
    if wa_xy == T::zero() || wb_xy == T::zero() {
        return T::one();
    }
    clamp((wa.x() * wb.x() + wa.y() * wb.y()) / safe_sqrt(wa_xy * wb_xy), -T::one(), T::one())
}

/// Returns `true` if both directions lie strictly on the same side of the
/// tangent plane.
#[inline]
pub fn same_hemisphere<T: Float>(w: &Vec3<T>, wp: &Vec3<T>) -> bool {
    w.z() * wp.z() > T::zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    fn v(x: f64, y: f64, z: f64) -> Vec3<f64> {
        Vec3::new(x, y, z).normalize()
    }

    #[test]
    fn octant_triangle_is_an_eighth_of_the_sphere() {
        let area = spherical_triangle_area(&v(1.0, 0.0, 0.0), &v(0.0, 1.0, 0.0), &v(0.0, 0.0, 1.0));
        assert!((area - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn degenerate_triangle_has_zero_area() {
        let a = v(1.0, 0.0, 0.0);
        assert_eq!(spherical_triangle_area(&a, &a, &v(0.0, 1.0, 0.0)), 0.0);
        assert_eq!(spherical_triangle_area(&a, &-a, &v(0.0, 1.0, 0.0)), 0.0);
    }

    #[test]
    fn equator_quad_bounds_a_hemisphere() {
        let area = spherical_quad_area(
            &v(1.0, 0.0, 0.0),
            &v(0.0, 1.0, 0.0),
            &v(-1.0, 0.0, 0.0),
            &v(0.0, -1.0, 0.0),
        );
        assert!((area - 2.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn convex_quad_is_two_triangles() {
        let (a, b, c, d) = (v(0.2, 0.1, 1.0), v(-0.1, 0.3, 1.0), v(-0.3, -0.2, 1.0), v(0.25, -0.3, 1.0));
        let quad = spherical_quad_area(&a, &b, &c, &d);
        let tris = spherical_triangle_area(&a, &b, &c) + spherical_triangle_area(&a, &c, &d);
        assert!((quad - tris).abs() < 1e-10, "{quad} vs {tris}");
    }

    #[test]
    fn spherical_round_trip() {
        let d = v(0.3, -0.4, 0.5);
        let (theta, phi) = (spherical_theta(&d), spherical_phi(&d));
        assert!(phi > PI && phi < 2.0 * PI);
        let back = spherical_to_cartesian(theta.sin(), theta.cos(), phi);
        assert!(back.approx_eq(&d, 1e-12));
    }

    #[test]
    fn pole_fallbacks() {
        let up = Vec3::new(0.0_f32, 0.0, 1.0);
        assert_eq!(cos_phi(&up), 1.0);
        assert_eq!(sin_phi(&up), 0.0);
        assert_eq!(cos_delta_phi(&up, &Vec3::new(1.0, 0.0, 0.0)), 1.0);
        assert_eq!(sin2_theta(&Vec3::new(0.0_f32, 0.0, 1.000_001)), 0.0);
        assert!(same_hemisphere(&up, &Vec3::new(0.5, 0.5, 0.1)));
        assert!(!same_hemisphere(&up, &Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn angle_extremes() {
        let a = v(1e-7, 1.0, 1e-7);
        assert_eq!(angle_between(&a, &a), 0.0);
        assert!((angle_between(&a, &-a) - PI).abs() < 1e-12);
        let x = Vec2::new(1.0_f64, 0.0);
        assert!((angle_between2(&x, &Vec2::new(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-12);
        assert!((angle_between2(&x, &-x) - PI).abs() < 1e-12);
    }
}
