// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Cross-product strategies.
//!
//! The strategy is a type parameter, not a runtime flag: [`Vec3::cross`]
//! always uses [`DefaultCross`], which the `minimize-fp-error` cargo feature
//! points at [`Compensated`] (on by default) and otherwise at [`Naive`].
//! Callers that need a specific strategy regardless of the build use
//! [`Vec3::cross_with`].

use crate::scalar::Scalar;
use crate::vec3::Vec3;

/// A way of evaluating `a × b`.
pub trait CrossProduct {
    /// Returns `a × b`.
    fn cross<T: Scalar>(a: &Vec3<T>, b: &Vec3<T>) -> Vec3<T>;
}

/// Each component computed with [`Scalar::difference_of_products`].
///
/// Nearly parallel inputs keep their tiny perpendicular component instead of
/// cancelling to zero.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Compensated;

/// Each component computed as a plain multiply-subtract.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Naive;

impl CrossProduct for Compensated {
    #[inline]
    fn cross<T: Scalar>(a: &Vec3<T>, b: &Vec3<T>) -> Vec3<T> {
        Vec3::from([
            T::difference_of_products(a.y(), b.z(), a.z(), b.y()),
            T::difference_of_products(a.z(), b.x(), a.x(), b.z()),
            T::difference_of_products(a.x(), b.y(), a.y(), b.x()),
        ])
    }
}

impl CrossProduct for Naive {
    #[inline]
    fn cross<T: Scalar>(a: &Vec3<T>, b: &Vec3<T>) -> Vec3<T> {
        Vec3::from([
            a.y() * b.z() - a.z() * b.y(),
            a.z() * b.x() - a.x() * b.z(),
            a.x() * b.y() - a.y() * b.x(),
        ])
    }
}

/// Strategy behind [`Vec3::cross`] for this build.
#[cfg(feature = "minimize-fp-error")]
pub type DefaultCross = Compensated;

/// Strategy behind [`Vec3::cross`] for this build.
#[cfg(not(feature = "minimize-fp-error"))]
pub type DefaultCross = Naive;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategies_agree_on_axes() {
        let x = Vec3::new(1.0_f32, 0.0, 0.0);
        let y = Vec3::new(0.0_f32, 1.0, 0.0);
        assert_eq!(Compensated::cross(&x, &y).to_array(), [0.0, 0.0, 1.0]);
        assert_eq!(Naive::cross(&x, &y).to_array(), [0.0, 0.0, 1.0]);
        assert_eq!(Compensated::cross(&y, &x).to_array(), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn integer_cross_is_exact() {
        let a = Vec3::new(2_i64, 3, 4);
        let b = Vec3::new(5_i64, 6, 7);
        assert_eq!(Compensated::cross(&a, &b).to_array(), [-3, 6, -3]);
        assert_eq!(Naive::cross(&a, &b), Compensated::cross(&a, &b));
    }

    #[test]
    fn compensated_keeps_nearly_parallel_residue() {
        // z = a.x*b.y - a.y*b.x is just under 2^-24; the naive f32 form rounds
        // a.x*b.y to 1 and returns 0.
        let a = Vec3::new(1.0_f32 + f32::EPSILON, 1.0, 0.0);
        let b = Vec3::new(1.0_f32, 1.0 - f32::EPSILON / 2.0, 0.0);
        let exact = f64::from(a.x()) * f64::from(b.y()) - f64::from(a.y()) * f64::from(b.x());
        let c = Compensated::cross(&a, &b).z();
        assert!((f64::from(c) - exact).abs() <= exact.abs() * 1e-6);
        assert_eq!(Naive::cross(&a, &b).z(), 0.0);
    }
}
