// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use lumen_math::trig::lerp;
use lumen_math::{Float, Point3, Scalar, Vec3};

use crate::error::GeomError;

/// Axis-aligned bounding box in 3D.
///
/// Invariants:
/// - The empty box has `pmin = max_value` and `pmax = lowest` on every axis,
///   so merging anything into it yields that thing.
/// - A box built from points always has `pmin <= pmax` per axis. A box with
///   `pmin > pmax` on some axis other than the empty box is *degenerate*;
///   [`crate::Validate`] reports it.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds3<T> {
    pmin: Point3<T>,
    pmax: Point3<T>,
}

/// `f32` box.
pub type Bounds3f = Bounds3<f32>;
/// `i32` box, for integer grids.
pub type Bounds3i = Bounds3<i32>;

impl<T: Scalar> Default for Bounds3<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Scalar> Bounds3<T> {
    /// The empty box: identity for [`Bounds3::merge`].
    #[must_use]
    pub fn empty() -> Self {
        Self {
            pmin: Point3::splat(T::max_value()),
            pmax: Point3::splat(T::lowest()),
        }
    }

    /// Smallest box containing both points, in any order.
    #[must_use]
    pub fn new(a: Point3<T>, b: Point3<T>) -> Self {
        Self { pmin: a.component_min(&b), pmax: a.component_max(&b) }
    }

    /// Zero-volume box around a single point.
    #[must_use]
    pub fn from_point(p: Point3<T>) -> Self {
        Self { pmin: p, pmax: p }
    }

    /// Minimum corner.
    #[must_use]
    pub fn pmin(&self) -> Point3<T> {
        self.pmin
    }

    /// Maximum corner.
    #[must_use]
    pub fn pmax(&self) -> Point3<T> {
        self.pmax
    }

    /// `true` for the exact empty sentinel produced by [`Bounds3::empty`].
    pub(crate) fn is_empty_sentinel(&self) -> bool {
        *self == Self::empty()
    }

    /// `true` when the box has no volume (`pmin >= pmax` on some axis).
    ///
    /// Flat boxes count as empty, as does the empty sentinel.
    pub fn is_empty(&self) -> bool {
        (0..3).any(|i| self.pmin[i] >= self.pmax[i])
    }

    /// `true` when `pmin > pmax` on some axis.
    pub fn is_degenerate(&self) -> bool {
        (0..3).any(|i| self.pmin[i] > self.pmax[i])
    }

    /// Corner `i` in `0..8`: bit 0 picks x, bit 1 picks y, bit 2 picks z
    /// (set bit selects `pmax`).
    #[must_use]
    pub fn corner(&self, i: usize) -> Point3<T> {
        debug_assert!(i < 8, "corner index {i} out of range");
        Point3::new(
            if i & 1 == 0 { self.pmin.x() } else { self.pmax.x() },
            if i & 2 == 0 { self.pmin.y() } else { self.pmax.y() },
            if i & 4 == 0 { self.pmin.z() } else { self.pmax.z() },
        )
    }

    /// [`Bounds3::corner`] with the index checked in every build.
    pub fn try_corner(&self, i: usize) -> Result<Point3<T>, GeomError> {
        if i >= 8 {
            return Err(GeomError::CornerOutOfRange { index: i, count: 8 });
        }
        Ok(self.corner(i))
    }

    /// Grows the box to contain `p`.
    #[must_use]
    pub fn merge_point(&self, p: &Point3<T>) -> Self {
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

    /// Region common to both boxes; degenerate when they do not overlap.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            pmin: self.pmin.component_max(&other.pmin),
            pmax: self.pmax.component_min(&other.pmax),
        }
    }

    /// Returns `true` if the boxes share any point (touching faces count).
    pub fn overlaps(&self, other: &Self) -> bool {
        (0..3).all(|i| self.pmin[i] <= other.pmax[i] && self.pmax[i] >= other.pmin[i])
    }

    /// Returns `true` if `p` lies in the closed box.
    pub fn inside(&self, p: &Point3<T>) -> bool {
        (0..3).all(|i| p[i] >= self.pmin[i] && p[i] <= self.pmax[i])
    }

    /// Returns `true` if `p` lies strictly inside the box.
    pub fn inside_exclusive(&self, p: &Point3<T>) -> bool {
        (0..3).all(|i| p[i] > self.pmin[i] && p[i] < self.pmax[i])
    }

    /// Pads every face outward by `delta`.
    ///
    /// `delta` must be non-negative. The empty box stays empty.
    #[must_use]
    pub fn expand(&self, delta: T) -> Self {
        debug_assert!(delta >= T::zero(), "expand delta must be non-negative");
        if self.is_empty_sentinel() {
            return *self;
        }
        let d = Vec3::splat(delta);
        Self { pmin: self.pmin - d, pmax: self.pmax + d }
    }

    /// Pulls every face inward by `delta`.
    ///
    /// `delta` must be non-negative. Shrinking past the centre leaves a
    /// degenerate box. The empty box stays empty.
    #[must_use]
    pub fn shrink(&self, delta: T) -> Self {
        debug_assert!(delta >= T::zero(), "shrink delta must be non-negative");
        if self.is_empty_sentinel() {
            return *self;
        }
        let d = Vec3::splat(delta);
        Self { pmin: self.pmin + d, pmax: self.pmax - d }
    }

    /// [`Bounds3::expand`] with the sign of `delta` checked in every build.
    pub fn try_expand(&self, delta: T) -> Result<Self, GeomError> {
        if delta < T::zero() {
            return Err(GeomError::NegativeDelta);
        }
        Ok(self.expand(delta))
    }

    /// [`Bounds3::shrink`] with the sign of `delta` checked in every build.
    pub fn try_shrink(&self, delta: T) -> Result<Self, GeomError> {
        if delta < T::zero() {
            return Err(GeomError::NegativeDelta);
        }
        Ok(self.shrink(delta))
    }

    /// `pmax - pmin`. Meaningless for the empty box.
    pub fn diagonal(&self) -> Vec3<T> {
        self.pmax - self.pmin
    }

    /// Total area of the six faces.
    pub fn surface_area(&self) -> T {
        let d = self.diagonal();
        T::two() * (d.x() * d.y() + d.x() * d.z() + d.y() * d.z())
    }

    /// Enclosed volume.
    pub fn volume(&self) -> T {
        self.diagonal().hprod()
    }

    /// Index of the longest axis; ties resolve toward the later axis.
    pub fn max_dim(&self) -> usize {
        let d = self.diagonal();
        if d.x() > d.y() && d.x() > d.z() {
            0
        } else if d.y() > d.z() {
            1
        } else {
            2
        }
    }

    /// Squared distance from `p` to the closest point of the box; zero
    /// inside.
    ///
    /// The empty box has no closest point and reports `T::max_value()`.
    pub fn distance_squared(&self, p: &Point3<T>) -> T {
        if self.is_empty_sentinel() {
            return T::max_value();
        }
        (0..3)
            .map(|i| {
                let d = T::zero().max_of(self.pmin[i] - p[i]).max_of(p[i] - self.pmax[i]);
                d * d
            })
            .fold(T::zero(), |acc, v| acc + v)
    }

    /// Componentwise comparison of both corners with an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        self.pmin.approx_eq(&other.pmin, epsilon) && self.pmax.approx_eq(&other.pmax, epsilon)
    }

    /// Converts the box to scalar type `U`.
    ///
    /// The empty box becomes `U`'s empty box. Other corners convert per
    /// component through [`Scalar::from_f64`], so float to integer truncates
    /// toward zero.
    #[must_use]
    pub fn cast<U: Scalar>(&self) -> Bounds3<U> {
        if self.is_empty_sentinel() {
            return Bounds3::empty();
        }
        let convert = |p: Point3<T>| {
            Point3::from([
                U::from_f64(p.x().to_f64()),
                U::from_f64(p.y().to_f64()),
                U::from_f64(p.z().to_f64()),
            ])
        };
        Bounds3 { pmin: convert(self.pmin), pmax: convert(self.pmax) }
    }
}

impl<T: Float> Bounds3<T> {
    /// Distance from `p` to the closest point of the box.
    pub fn distance(&self, p: &Point3<T>) -> T {
        self.distance_squared(p).sqrt()
    }

    /// Sphere enclosing the box as `(center, radius)`.
    ///
    /// The center is the box midpoint. Should the midpoint fall outside the
    /// box, which only happens for the empty or degenerate boxes, the radius
    /// is zero.
    pub fn bounding_sphere(&self) -> (Point3<T>, T) {
        let center = (self.pmin + self.pmax) / T::two();
        let radius = if self.inside(&center) { center.distance(&self.pmax) } else { T::zero() };
        (center, radius)
    }

    /// Point at parametric position `t` per axis (`0` → `pmin`, `1` →
    /// `pmax`).
    pub fn lerp(&self, t: &Point3<T>) -> Point3<T> {
        Point3::new(
            lerp(t.x(), self.pmin.x(), self.pmax.x()),
            lerp(t.y(), self.pmin.y(), self.pmax.y()),
            lerp(t.z(), self.pmin.z(), self.pmax.z()),
        )
    }

    /// Position of `p` relative to the box: `pmin` maps to 0, `pmax` to 1.
    ///
    /// Axes with no extent are left as the raw offset from `pmin`.
    pub fn offset(&self, p: &Point3<T>) -> Vec3<T> {
        let o = *p - self.pmin;
        let axis = |i: usize| {
            if self.pmax[i] > self.pmin[i] {
                o[i] / (self.pmax[i] - self.pmin[i])
            } else {
                o[i]
            }
        };
        Vec3::new(axis(0), axis(1), axis(2))
    }

    /// Slab test of the ray `origin + t·dir` for `t` in `[0, t_max]`.
    ///
    /// Returns the parametric entry and exit `(t0, t1)` on a hit. Zero
    /// direction components rely on IEEE infinities; the updates use plain
    /// comparisons so a NaN slab bound leaves the running interval alone.
    pub fn intersect_ray(&self, origin: &Point3<T>, dir: &Vec3<T>, t_max: T) -> Option<(T, T)> {
        let mut t0 = T::zero();
        let mut t1 = t_max;
        for i in 0..3 {
            let inv_dir = T::one() / dir[i];
            let mut t_near = (self.pmin[i] - origin[i]) * inv_dir;
            let mut t_far = (self.pmax[i] - origin[i]) * inv_dir;
            if t_near > t_far {
                core::mem::swap(&mut t_near, &mut t_far);
            }
            t0 = if t_near > t0 { t_near } else { t0 };
            t1 = if t_far < t1 { t_far } else { t1 };
            if t0 > t1 {
                return None;
            }
        }
        Some((t0, t1))
    }
}
