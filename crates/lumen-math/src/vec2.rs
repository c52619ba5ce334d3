// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, AddAssign, Div, Index, Mul, Neg, Sub, SubAssign};

use crate::error::MathError;
use crate::scalar::{Float, Scalar};

/// Two-component vector; [`Point2`] is the same representation used as a
/// location.
///
/// Same NaN policy as [`crate::Vec3`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<T> {
    data: [T; 2],
}

/// A location in 2D space.
pub type Point2<T> = Vec2<T>;

impl<T: Scalar> Vec2<T> {
    /// Creates a vector from components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        let v = Self { data: [x, y] };
        debug_assert!(!v.has_nan(), "Vec2 component is NaN: {v:?}");
        v
    }

    /// Creates a vector, rejecting NaN components.
    pub fn try_new(x: T, y: T) -> Result<Self, MathError> {
        let v = Self { data: [x, y] };
        v.validate()?;
        Ok(v)
    }

    /// Vector with both components set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::new(value, value)
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

    /// Returns the components as an array.
    #[inline]
    pub fn to_array(self) -> [T; 2] {
        self.data
    }

    /// Returns `true` if any component is NaN.
    pub fn has_nan(&self) -> bool {
        self.data[0].is_nan() || self.data[1].is_nan()
    }

    /// Checks the no-NaN invariant.
    pub fn validate(&self) -> Result<(), MathError> {
        match self.data.iter().position(|c| c.is_nan()) {
            Some(index) => {
                tracing::debug!(index, "Vec2 failed validation: NaN component");
                Err(MathError::NanComponent { index })
            }
            None => Ok(()),
        }
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.data[0] * other.data[0] + self.data[1] * other.data[1]
    }

    /// Squared magnitude.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Componentwise minimum.
    #[inline]
    pub fn component_min(&self, other: &Self) -> Self {
        Self {
            data: [self.data[0].min_of(other.data[0]), self.data[1].min_of(other.data[1])],
        }
    }

    /// Componentwise maximum.
    #[inline]
    pub fn component_max(&self, other: &Self) -> Self {
        Self {
            data: [self.data[0].max_of(other.data[0]), self.data[1].max_of(other.data[1])],
        }
    }

    /// Componentwise absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Self { data: [self.data[0].abs(), self.data[1].abs()] }
    }

    /// Componentwise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        (self.data[0] - other.data[0]).abs() < epsilon
            && (self.data[1] - other.data[1]).abs() < epsilon
    }
}

impl<T: Float> Vec2<T> {
    /// Magnitude.
    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
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

    /// Linear interpolation `(1 - t)·a + t·b`.
    #[inline]
    pub fn lerp(a: &Self, b: &Self, t: T) -> Self {
        *a * (T::one() - t) + *b * t
    }
}

impl<T> From<[T; 2]> for Vec2<T> {
    fn from(data: [T; 2]) -> Self {
        Self { data }
    }
}

impl<T> Index<usize> for Vec2<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Scalar> Add for Vec2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from([self.data[0] + rhs.data[0], self.data[1] + rhs.data[1]])
    }
}

impl<T: Scalar> Sub for Vec2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from([self.data[0] - rhs.data[0], self.data[1] - rhs.data[1]])
    }
}

impl<T: Scalar> Neg for Vec2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from([-self.data[0], -self.data[1]])
    }
}

impl<T: Scalar> Mul<T> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::from([self.data[0] * rhs, self.data[1] * rhs])
    }
}

impl<T: Scalar> Div<T> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::from([self.data[0] / rhs, self.data[1] / rhs])
    }
}

impl<T: Scalar> AddAssign for Vec2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vec2<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_points_support_min_max() {
        let a = Vec2::new(3_i32, -1);
        let b = Vec2::new(-2_i32, 5);
        assert_eq!(a.component_min(&b).to_array(), [-2, -1]);
        assert_eq!(a.component_max(&b).to_array(), [3, 5]);
    }

    #[test]
    fn normalize_unit_length() {
        let n = Vec2::new(3.0_f64, 4.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert_eq!(Vec2::<f64>::zero().normalize(), Vec2::zero());
    }

    #[test]
    fn validate_reports_index() {
        let v = Vec2::from([1.0_f32, f32::NAN]);
        assert_eq!(v.validate(), Err(MathError::NanComponent { index: 1 }));
    }
}
