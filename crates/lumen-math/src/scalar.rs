// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar capability traits for Lumen math.
//!
//! Kernel code is written once against these traits and monomorphized for
//! each concrete scalar. Two capability levels exist:
//!
//! - [`Scalar`]: ordered arithmetic shared by floats and signed integers.
//!   Bounding volumes in index space (`i32`/`i64`) only need this level.
//! - [`Float`]: the math shim. Every transcendental used by the kernel is
//!   reached through this trait and implemented on top of the pure-Rust
//!   `libm` crate, so the same code builds for a host thread or for a target
//!   without a platform libm. No call site names a platform function
//!   directly.
//!
//! Scalar-kind dispatch (e.g. [`Scalar::difference_of_products`]) is resolved
//! at instantiation time: float impls take the fused-multiply-add path,
//! integer impls take the exact plain path. There is no runtime branch.

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// Ordered arithmetic scalar usable by every Lumen primitive.
///
/// Arithmetic operators are required via the standard operator traits so that
/// generic code reads as plain `+`, `-`, `*`, `/` and unary `-`.
pub trait Scalar:
    Copy
    + fmt::Debug
    + Default
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    /// Returns the additive identity (zero).
    fn zero() -> Self;

    /// Returns the multiplicative identity (one).
    fn one() -> Self;

    /// Returns `1 + 1`.
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Largest finite representable value.
    fn max_value() -> Self;

    /// Most negative finite representable value.
    fn lowest() -> Self;

    /// Returns `true` if the value is NaN. Always `false` for integers.
    fn is_nan(self) -> bool;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Widens to `f64` for conversions and error payloads. Exact for `f32`,
    /// `f64` and `i32`; `i64` magnitudes past 2^53 round.
    fn to_f64(self) -> f64;

    /// Narrows from `f64` with `as` semantics: floats round to nearest,
    /// integers truncate toward zero and saturate, NaN becomes integer 0.
    fn from_f64(value: f64) -> Self;

    /// Returns `self` unless `other < self`.
    ///
    /// Written as an explicit comparison so the NaN behaviour is the one
    /// spelled out here rather than whatever a library `min` picks.
    #[inline]
    fn min_of(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// Returns `self` unless `self < other`.
    #[inline]
    fn max_of(self, other: Self) -> Self {
        if self < other {
            other
        } else {
            self
        }
    }

    /// Computes `a*b - c*d`.
    ///
    /// Float impls recover the rounding error of `c*d` with two fused
    /// multiply-adds, keeping the result within ~1 ulp even when `a*b` and
    /// `c*d` nearly cancel. Integer impls are exact (barring overflow).
    fn difference_of_products(a: Self, b: Self, c: Self, d: Self) -> Self;

    /// Computes `a*b + c*d` with the same error policy as
    /// [`Scalar::difference_of_products`].
    fn sum_of_products(a: Self, b: Self, c: Self, d: Self) -> Self;
}

/// Floating-point scalar: the math shim consumed by direction, cone and
/// encoding code.
///
/// All methods interpret angles as radians.
pub trait Float: Scalar {
    /// Archimedes' constant.
    const PI: Self;
    /// Difference between `1.0` and the next representable value.
    const MACHINE_EPSILON: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Negative infinity.
    const NEG_INFINITY: Self;

    /// Converts from `f32`. Exact for `f32` and `f64`.
    fn from_f32(value: f32) -> Self;

    /// Returns `true` if the value is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Sine.
    fn sin(self) -> Self;

    /// Cosine.
    fn cos(self) -> Self;

    /// Tangent.
    fn tan(self) -> Self;

    /// Arcsine, in `[-π/2, π/2]`. NaN outside `[-1, 1]`.
    fn asin(self) -> Self;

    /// Arccosine, in `[0, π]`. NaN outside `[-1, 1]`.
    fn acos(self) -> Self;

    /// Arctangent.
    fn atan(self) -> Self;

    /// Four-quadrant arctangent of `self / x`.
    fn atan2(self, x: Self) -> Self;

    /// Exponential.
    fn exp(self) -> Self;

    /// Correctly rounded fused multiply-add: `self * a + b` with one rounding.
    fn mul_add(self, a: Self, b: Self) -> Self;

    /// Magnitude of `self` with the sign of `sign`.
    fn copysign(self, sign: Self) -> Self;

    /// Rounds half away from zero.
    fn round(self) -> Self;

    /// Largest integer value not greater than `self`.
    fn floor(self) -> Self;
}

macro_rules! impl_float_scalar {
    (
        $t:ty, $consts:ident,
        sqrt = $sqrt:path, sin = $sin:path, cos = $cos:path, tan = $tan:path,
        asin = $asin:path, acos = $acos:path, atan = $atan:path, atan2 = $atan2:path,
        exp = $exp:path, fma = $fma:path, copysign = $copysign:path, fabs = $fabs:path,
        round = $round:path, floor = $floor:path
    ) => {
        impl Scalar for $t {
            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn one() -> Self {
                1.0
            }

            #[inline]
            fn max_value() -> Self {
                <$t>::MAX
            }

            #[inline]
            fn lowest() -> Self {
                <$t>::MIN
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            #[inline]
            fn abs(self) -> Self {
                $fabs(self)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            #[inline]
            #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn difference_of_products(a: Self, b: Self, c: Self, d: Self) -> Self {
                let cd = c * d;
                let alpha = $fma(a, b, -cd);
                let beta = $fma(-c, d, cd);
                alpha + beta
            }

            #[inline]
            fn sum_of_products(a: Self, b: Self, c: Self, d: Self) -> Self {
                let cd = c * d;
                let alpha = $fma(a, b, cd);
                let beta = $fma(c, d, -cd);
                alpha + beta
            }
        }

        impl Float for $t {
            const PI: Self = core::$consts::consts::PI;
            const MACHINE_EPSILON: Self = <$t>::EPSILON;
            const INFINITY: Self = <$t>::INFINITY;
            const NEG_INFINITY: Self = <$t>::NEG_INFINITY;

            #[inline]
            fn from_f32(value: f32) -> Self {
                Self::from(value)
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            #[inline]
            fn sqrt(self) -> Self {
                $sqrt(self)
            }

            #[inline]
            fn sin(self) -> Self {
                $sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                $cos(self)
            }

            #[inline]
            fn tan(self) -> Self {
                $tan(self)
            }

            #[inline]
            fn asin(self) -> Self {
                $asin(self)
            }

            #[inline]
            fn acos(self) -> Self {
                $acos(self)
            }

            #[inline]
            fn atan(self) -> Self {
                $atan(self)
            }

            #[inline]
            fn atan2(self, x: Self) -> Self {
                $atan2(self, x)
            }

            #[inline]
            fn exp(self) -> Self {
                $exp(self)
            }

            #[inline]
            fn mul_add(self, a: Self, b: Self) -> Self {
                $fma(self, a, b)
            }

            #[inline]
            fn copysign(self, sign: Self) -> Self {
                $copysign(self, sign)
            }

            #[inline]
            fn round(self) -> Self {
                $round(self)
            }

            #[inline]
            fn floor(self) -> Self {
                $floor(self)
            }
        }
    };
}

impl_float_scalar!(
    f32, f32,
    sqrt = libm::sqrtf, sin = libm::sinf, cos = libm::cosf, tan = libm::tanf,
    asin = libm::asinf, acos = libm::acosf, atan = libm::atanf, atan2 = libm::atan2f,
    exp = libm::expf, fma = libm::fmaf, copysign = libm::copysignf, fabs = libm::fabsf,
    round = libm::roundf, floor = libm::floorf
);

impl_float_scalar!(
    f64, f64,
    sqrt = libm::sqrt, sin = libm::sin, cos = libm::cos, tan = libm::tan,
    asin = libm::asin, acos = libm::acos, atan = libm::atan, atan2 = libm::atan2,
    exp = libm::exp, fma = libm::fma, copysign = libm::copysign, fabs = libm::fabs,
    round = libm::round, floor = libm::floor
);

macro_rules! impl_int_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn one() -> Self {
                1
            }

            #[inline]
            fn max_value() -> Self {
                <$t>::MAX
            }

            #[inline]
            fn lowest() -> Self {
                <$t>::MIN
            }

            #[inline]
            fn is_nan(self) -> bool {
                false
            }

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            #[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn difference_of_products(a: Self, b: Self, c: Self, d: Self) -> Self {
                a * b - c * d
            }

            #[inline]
            fn sum_of_products(a: Self, b: Self, c: Self, d: Self) -> Self {
                a * b + c * d
            }
        }
    )*};
}

impl_int_scalar!(i32, i64);
