// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Axis-aligned bounding boxes in 2D and 3D.
//!
//! Both are generic over [`lumen_math::Scalar`], so the same type serves
//! float world-space boxes and integer index ranges. Operations that need
//! square roots or division live in a separate `T: Float` impl block.

mod aabb2;
mod aabb3;

pub use aabb2::{Bounds2, Bounds2f, Bounds2i};
pub use aabb3::{Bounds3, Bounds3f, Bounds3i};
