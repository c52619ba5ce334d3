// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![cfg_attr(not(test), no_std)]
#![doc = r"Geometry kernel for Lumen.

This crate provides:
- Axis-aligned bounding boxes (`Bounds2`, `Bounds3`) with merge, overlap,
  containment, distance and a ray slab test.
- Spherical geometry: angles, triangle/quad solid angles, spherical
  coordinates and shading-frame trigonometry.
- Equal-area square/sphere mapping.
- Octahedral unit-vector encoding (`OctahedralVec`).
- Direction cones (`DirectionCone`) with bounding and merging.
- A release-mode invariant pass (`Validate`).

Design notes:
- Pure value computations: no allocation, no I/O, no shared state. Every
  function runs unchanged on a host thread or a parallel device lane.
- Degenerate input takes an explicit fallback (zero area, the entire sphere)
  rather than producing NaN.
"]

/// Axis-aligned bounding boxes.
pub mod bounds;
/// Direction cones.
pub mod cone;
/// Equal-area square/sphere mapping.
pub mod equal_area;
mod error;
/// Compact unit-vector encoding.
pub mod octahedral;
/// Unit-sphere direction utilities.
pub mod spherical;
mod validate;

pub use bounds::{Bounds2, Bounds2f, Bounds2i, Bounds3, Bounds3f, Bounds3i};
pub use cone::DirectionCone;
pub use error::GeomError;
pub use octahedral::OctahedralVec;
pub use validate::Validate;
