// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, AddAssign, Div, Index, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::eft::inner_product_value;
use crate::error::MathError;
use crate::robust::{CrossProduct, DefaultCross};
use crate::scalar::{Float, Scalar};

/// Three-component vector used for displacements, directions and (via
/// [`Point3`]) locations.
///
/// * Points and vectors share this representation; the aliases only carry
///   intent.
/// * No component may be NaN. [`Vec3::new`] checks this with a debug
///   assertion; [`Vec3::try_new`] and [`Vec3::validate`] check it in every
///   build. `From<[T; 3]>` performs no check.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<T> {
    data: [T; 3],
}

/// A location in 3D space.
pub type Point3<T> = Vec3<T>;

impl<T: Scalar> Vec3<T> {
    /// Creates a vector from components.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        let v = Self { data: [x, y, z] };
        debug_assert!(!v.has_nan(), "Vec3 component is NaN: {v:?}");
        v
    }

    /// Creates a vector, rejecting NaN components.
    pub fn try_new(x: T, y: T, z: T) -> Result<Self, MathError> {
        let v = Self { data: [x, y, z] };
        v.validate()?;
        Ok(v)
    }

    /// Vector with every component set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::new(value, value, value)
    }

    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// X component.
    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Z component.
    #[inline]
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// Returns the components as an array.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        self.data
    }

    /// Returns `true` if any component is NaN.
    pub fn has_nan(&self) -> bool {
        self.data.iter().any(|c| c.is_nan())
    }

    /// Checks the no-NaN invariant.
    pub fn validate(&self) -> Result<(), MathError> {
        match self.data.iter().position(|c| c.is_nan()) {
            Some(index) => {
                tracing::debug!(index, "Vec3 failed validation: NaN component");
                Err(MathError::NanComponent { index })
            }
            None => Ok(()),
        }
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Squared magnitude.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Cross product using the build's default strategy
    /// ([`DefaultCross`]).
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        DefaultCross::cross(self, other)
    }

    /// Cross product with an explicitly chosen strategy.
    #[inline]
    pub fn cross_with<S: CrossProduct>(&self, other: &Self) -> Self {
        S::cross(self, other)
    }

    /// Componentwise minimum.
    #[inline]
    pub fn component_min(&self, other: &Self) -> Self {
        Self {
            data: [
                self.data[0].min_of(other.data[0]),
                self.data[1].min_of(other.data[1]),
                self.data[2].min_of(other.data[2]),
            ],
        }
    }

    /// Componentwise maximum.
    #[inline]
    pub fn component_max(&self, other: &Self) -> Self {
        Self {
            data: [
                self.data[0].max_of(other.data[0]),
                self.data[1].max_of(other.data[1]),
                self.data[2].max_of(other.data[2]),
            ],
        }
    }

    /// Componentwise absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Self {
            data: [self.data[0].abs(), self.data[1].abs(), self.data[2].abs()],
        }
    }

    /// Product of the components.
    #[inline]
    pub fn hprod(&self) -> T {
        self.data[0] * self.data[1] * self.data[2]
    }

    /// Flips `self` so it lies in the hemisphere of `v`.
    #[inline]
    pub fn face_forward(&self, v: &Self) -> Self {
        if self.dot(v) < T::zero() {
            -*self
        } else {
            *self
        }
    }

    /// Componentwise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (*a - *b).abs() < epsilon)
    }
}

impl<T: Float> Vec3<T> {
    /// Magnitude.
    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Sum of absolute components.
    #[inline]
    pub fn l1_norm(&self) -> T {
        self.data[0].abs() + self.data[1].abs() + self.data[2].abs()
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    #[inline]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len == T::zero() {
            return Self::zero();
        }
        *self / len
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        (*self - *other).length()
    }

    /// Squared Euclidean distance between two points.
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> T {
        (*self - *other).length_squared()
    }

    /// Dot product accumulated with [`inner_product_value`].
    pub fn dot_compensated(&self, other: &Self) -> T {
        inner_product_value(&[
            (self.data[0], other.data[0]),
            (self.data[1], other.data[1]),
            (self.data[2], other.data[2]),
        ])
    }

    /// Linear interpolation `(1 - t)·a + t·b`.
    #[inline]
    pub fn lerp(a: &Self, b: &Self, t: T) -> Self {
        *a * (T::one() - t) + *b * t
    }

    /// Checks that `self` is unit length within `epsilon` on the squared
    /// length.
    pub fn validate_unit(&self, epsilon: T) -> Result<(), MathError> {
        self.validate()?;
        let len2 = self.length_squared();
        if (len2 - T::one()).abs() > epsilon {
            tracing::debug!(length_squared = len2.to_f64(), "Vec3 failed validation: not unit");
            return Err(MathError::NotUnitLength {
                length_squared: len2.to_f64(),
            });
        }
        Ok(())
    }
}

impl<T> From<[T; 3]> for Vec3<T> {
    fn from(data: [T; 3]) -> Self {
        Self { data }
    }
}

impl<T> Index<usize> for Vec3<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Scalar> Add for Vec3<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from([
            self.data[0] + rhs.data[0],
            self.data[1] + rhs.data[1],
            self.data[2] + rhs.data[2],
        ])
    }
}

impl<T: Scalar> Sub for Vec3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from([
            self.data[0] - rhs.data[0],
            self.data[1] - rhs.data[1],
            self.data[2] - rhs.data[2],
        ])
    }
}

impl<T: Scalar> Neg for Vec3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from([-self.data[0], -self.data[1], -self.data[2]])
    }
}

impl<T: Scalar> Mul<T> for Vec3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::from([self.data[0] * rhs, self.data[1] * rhs, self.data[2] * rhs])
    }
}

impl<T: Scalar> Div<T> for Vec3<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::from([self.data[0] / rhs, self.data[1] / rhs, self.data[2] / rhs])
    }
}

impl<T: Scalar> AddAssign for Vec3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vec3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Vec3<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<Vec3<$t>> for $t {
            type Output = Vec3<$t>;

            #[inline]
            fn mul(self, rhs: Vec3<$t>) -> Vec3<$t> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64, i32, i64);
