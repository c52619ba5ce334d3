// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use lumen_math::trig::lerp;
use lumen_math::{Float, Point2, Scalar, Vec2};

use crate::error::GeomError;

/// Axis-aligned bounding box in 2D.
///
/// Same empty-box and degeneracy conventions as [`crate::Bounds3`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds2<T> {
    pmin: Point2<T>,
    pmax: Point2<T>,
}

/// `f32` rectangle.
pub type Bounds2f = Bounds2<f32>;
/// `i32` rectangle, e.g. a pixel range.
pub type Bounds2i = Bounds2<i32>;

impl<T: Scalar> Default for Bounds2<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Scalar> Bounds2<T> {
    /// The empty box: identity for [`Bounds2::merge`].
    #[must_use]
    pub fn empty() -> Self {
        Self {
            pmin: Point2::splat(T::max_value()),
            pmax: Point2::splat(T::lowest()),
        }
    }

    /// Smallest box containing both points, in any order.
    #[must_use]
    pub fn new(a: Point2<T>, b: Point2<T>) -> Self {
        Self { pmin: a.component_min(&b), pmax: a.component_max(&b) }
    }

    /// Zero-area box around a single point.
    #[must_use]
    pub fn from_point(p: Point2<T>) -> Self {
        Self { pmin: p, pmax: p }
    }

    /// Minimum corner.
    #[must_use]
    pub fn pmin(&self) -> Point2<T> {
        self.pmin
    }

    /// Maximum corner.
    #[must_use]
    pub fn pmax(&self) -> Point2<T> {
        self.pmax
    }

    pub(crate) fn is_empty_sentinel(&self) -> bool {
        *self == Self::empty()
    }

    /// `true` when the box has no area (`pmin >= pmax` on some axis).
    pub fn is_empty(&self) -> bool {
        self.pmin.x() >= self.pmax.x() || self.pmin.y() >= self.pmax.y()
    }

    /// `true` when `pmin > pmax` on some axis.
    pub fn is_degenerate(&self) -> bool {
        self.pmin.x() > self.pmax.x() || self.pmin.y() > self.pmax.y()
    }

    /// Corner `i` in `0..4`: bit 0 picks x, bit 1 picks y.
    #[must_use]
    pub fn corner(&self, i: usize) -> Point2<T> {
        debug_assert!(i < 4, "corner index {i} out of range");
        Point2::new(
            if i & 1 == 0 { self.pmin.x() } else { self.pmax.x() },
            if i & 2 == 0 { self.pmin.y() } else { self.pmax.y() },
        )
    }

    /// [`Bounds2::corner`] with the index checked in every build.
    pub fn try_corner(&self, i: usize) -> Result<Point2<T>, GeomError> {
        if i >= 4 {
            return Err(GeomError::CornerOutOfRange { index: i, count: 4 });
        }
        Ok(self.corner(i))
    }

    /// Grows the box to contain `p`.
    #[must_use]
    pub fn merge_point(&self, p: &Point2<T>) -> Self {
        Self { pmin: self.pmin.component_min(p), pmax: self.pmax.component_max(p) }
    }

    /// Smallest box containing both boxes.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            pmin: self.pmin.component_min(&other.pmin),
            pmax: self.pmax.component_max(&other.pmax),
        }
    }

    /// Region common to both boxes.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            pmin: self.pmin.component_max(&other.pmin),
            pmax: self.pmax.component_min(&other.pmax),
        }
    }

    /// Returns `true` if the boxes share any point (touching edges count).
    pub fn overlaps(&self, other: &Self) -> bool {
        self.pmin.x() <= other.pmax.x()
            && self.pmax.x() >= other.pmin.x()
            && self.pmin.y() <= other.pmax.y()
            && self.pmax.y() >= other.pmin.y()
    }

    /// Returns `true` if `p` lies in the closed box.
    pub fn inside(&self, p: &Point2<T>) -> bool {
        p.x() >= self.pmin.x()
            && p.x() <= self.pmax.x()
            && p.y() >= self.pmin.y()
            && p.y() <= self.pmax.y()
    }

    /// Returns `true` if `p` lies strictly inside the box.
    pub fn inside_exclusive(&self, p: &Point2<T>) -> bool {
        p.x() > self.pmin.x() && p.x() < self.pmax.x() && p.y() > self.pmin.y() && p.y() < self.pmax.y()
    }

    /// Pads every edge outward by a non-negative `delta`.
    #[must_use]
    pub fn expand(&self, delta: T) -> Self {
        debug_assert!(delta >= T::zero(), "expand delta must be non-negative");
        if self.is_empty_sentinel() {
            return *self;
        }
        let d = Vec2::splat(delta);
        Self { pmin: self.pmin - d, pmax: self.pmax + d }
    }

    /// Pulls every edge inward by a non-negative `delta`.
    #[must_use]
    pub fn shrink(&self, delta: T) -> Self {
        debug_assert!(delta >= T::zero(), "shrink delta must be non-negative");
        if self.is_empty_sentinel() {
            return *self;
        }
        let d = Vec2::splat(delta);
        Self { pmin: self.pmin + d, pmax: self.pmax - d }
    }

    /// [`Bounds2::expand`] with the sign of `delta` checked in every build.
    pub fn try_expand(&self, delta: T) -> Result<Self, GeomError> {
        if delta < T::zero() {
            return Err(GeomError::NegativeDelta);
        }
        Ok(self.expand(delta))
    }

    /// [`Bounds2::shrink`] with the sign of `delta` checked in every build.
    pub fn try_shrink(&self, delta: T) -> Result<Self, GeomError> {
        if delta < T::zero() {
            return Err(GeomError::NegativeDelta);
        }
        Ok(self.shrink(delta))
    }

    /// `pmax - pmin`.
    pub fn diagonal(&self) -> Vec2<T> {
        self.pmax - self.pmin
    }

    /// Index of the longer axis; a tie picks y.
    pub fn max_dim(&self) -> usize {
        let d = self.diagonal();
        if d.x() > d.y() {
            0
        } else {
            1
        }
    }

    /// Squared distance from `p` to the closest point of the box;
    /// `T::max_value()` for the empty box.
    pub fn distance_squared(&self, p: &Point2<T>) -> T {
        if self.is_empty_sentinel() {
            return T::max_value();
        }
        let dx = T::zero().max_of(self.pmin.x() - p.x()).max_of(p.x() - self.pmax.x());
        let dy = T::zero().max_of(self.pmin.y() - p.y()).max_of(p.y() - self.pmax.y());
        dx * dx + dy * dy
    }

    /// Componentwise comparison of both corners with an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        self.pmin.approx_eq(&other.pmin, epsilon) && self.pmax.approx_eq(&other.pmax, epsilon)
    }

    /// Converts the box to scalar type `U`; see [`crate::Bounds3::cast`].
    #[must_use]
    pub fn cast<U: Scalar>(&self) -> Bounds2<U> {
        if self.is_empty_sentinel() {
            return Bounds2::empty();
        }
        let convert = |p: Point2<T>| Point2::from([U::from_f64(p.x().to_f64()), U::from_f64(p.y().to_f64())]);
        Bounds2 { pmin: convert(self.pmin), pmax: convert(self.pmax) }
    }
}

impl<T: Float> Bounds2<T> {
    /// Distance from `p` to the closest point of the box.
    pub fn distance(&self, p: &Point2<T>) -> T {
        self.distance_squared(p).sqrt()
    }

    /// Point at parametric position `t` per axis.
    pub fn lerp(&self, t: &Point2<T>) -> Point2<T> {
        Point2::new(
            lerp(t.x(), self.pmin.x(), self.pmax.x()),
            lerp(t.y(), self.pmin.y(), self.pmax.y()),
        )
    }

    /// Position of `p` relative to the box; flat axes keep the raw offset.
    pub fn offset(&self, p: &Point2<T>) -> Vec2<T> {
        let o = *p - self.pmin;
        let x = if self.pmax.x() > self.pmin.x() { o.x() / (self.pmax.x() - self.pmin.x()) } else { o.x() };
        let y = if self.pmax.y() > self.pmin.y() { o.y() / (self.pmax.y() - self.pmin.y()) } else { o.y() };
        Vec2::new(x, y)
    }
}
