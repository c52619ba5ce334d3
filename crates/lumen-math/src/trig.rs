// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar helpers shared by the spherical and cone code.

use crate::scalar::{Float, Scalar};

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// NaN passes through unchanged.
#[inline]
pub fn clamp<T: Scalar>(value: T, min: T, max: T) -> T {
    debug_assert!(min <= max, "invalid clamp range: {min:?} > {max:?}");
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// `x * x`.
#[inline]
pub fn sqr<T: Scalar>(x: T) -> T {
    x * x
}

/// Linear interpolation `(1 - t)·a + t·b`.
#[inline]
pub fn lerp<T: Float>(t: T, a: T, b: T) -> T {
    (T::one() - t) * a + t * b
}

/// Square root of `max(x, 0)`; small negative rounding noise yields 0.
#[inline]
pub fn safe_sqrt<T: Float>(x: T) -> T {
    x.max_of(T::zero()).sqrt()
}

/// `asin` of `x` clamped to `[-1, 1]`.
#[inline]
pub fn clamp_asin<T: Float>(x: T) -> T {
    clamp(x, -T::one(), T::one()).asin()
}

/// `acos` of `x` clamped to `[-1, 1]`.
#[inline]
pub fn clamp_acos<T: Float>(x: T) -> T {
    clamp(x, -T::one(), T::one()).acos()
}

/// Degrees to radians.
#[inline]
pub fn radians<T: Float>(deg: T) -> T {
    deg * (T::PI / T::from_f32(180.0))
}

/// Radians to degrees.
#[inline]
pub fn degrees<T: Float>(rad: T) -> T {
    rad * (T::from_f32(180.0) / T::PI)
}
