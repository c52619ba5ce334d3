// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Error-free transformations.
//!
//! A single float multiply or add is split into its rounded result and the
//! exact rounding error, so callers can carry the error forward and fold it
//! back in at the end. `two_product` needs a correctly rounded fused
//! multiply-add, which [`Float::mul_add`] provides on every target.

use crate::scalar::{Float, Scalar};

/// A rounded value paired with the rounding error that produced it.
///
/// `value + err` reconstructs the exact result to better than native
/// precision.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct CompensatedFloat<T> {
    /// Rounded result.
    pub value: T,
    /// Accumulated rounding error.
    pub err: T,
}

impl<T: Float> CompensatedFloat<T> {
    /// Pairs a value with its error term.
    pub const fn new(value: T, err: T) -> Self {
        Self { value, err }
    }

    /// Folds the error term back into the value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value + self.err
    }
}

/// `a * b` split into `(round(a*b), exact error)`.
#[inline]
pub fn two_product<T: Float>(a: T, b: T) -> CompensatedFloat<T> {
    let ab = a * b;
    CompensatedFloat::new(ab, a.mul_add(b, -ab))
}

/// `a + b` split into `(round(a+b), exact error)` (Knuth's branch-free
/// two-sum).
#[inline]
pub fn two_sum<T: Float>(a: T, b: T) -> CompensatedFloat<T> {
    let s = a + b;
    let delta = s - a;
    CompensatedFloat::new(s, (a - (s - delta)) + (b - delta))
}

/// Compensated `Σ aᵢ·bᵢ` over `terms`.
///
/// Evaluated right to left: each pair's [`two_product`] is two-summed
/// against the running value of the pairs after it, and every stage's error
/// is added into one running error. An empty slice yields zero.
pub fn inner_product<T: Float>(terms: &[(T, T)]) -> CompensatedFloat<T> {
    let mut acc: Option<CompensatedFloat<T>> = None;
    for &(a, b) in terms.iter().rev() {
        let ab = two_product(a, b);
        acc = Some(match acc {
            None => ab,
            Some(tail) => {
                let sum = two_sum(ab.value, tail.value);
                CompensatedFloat::new(sum.value, ab.err + tail.err + sum.err)
            }
        });
    }
    acc.unwrap_or_else(|| CompensatedFloat::new(T::zero(), T::zero()))
}

/// [`inner_product`] with the error folded back in.
#[inline]
pub fn inner_product_value<T: Float>(terms: &[(T, T)]) -> T {
    inner_product(terms).into_inner()
}

/// `a*b - c*d` without catastrophic cancellation.
///
/// See [`Scalar::difference_of_products`]; floats use the fused path,
/// integers the exact plain one.
#[inline]
pub fn difference_of_products<T: Scalar>(a: T, b: T, c: T, d: T) -> T {
    T::difference_of_products(a, b, c, d)
}

/// `a*b + c*d` with the same error policy as [`difference_of_products`].
#[inline]
pub fn sum_of_products<T: Scalar>(a: T, b: T, c: T, d: T) -> T {
    T::sum_of_products(a, b, c, d)
}
