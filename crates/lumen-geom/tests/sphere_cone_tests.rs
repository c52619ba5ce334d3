// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

use lumen_geom::equal_area::{equal_area_sphere_to_square, equal_area_square_to_sphere};
use lumen_geom::spherical::{angle_between, spherical_triangle_area};
use lumen_geom::{DirectionCone, OctahedralVec, Validate};
use lumen_math::trig::clamp_acos;
use lumen_math::{coordinate_system, rotate_about_axis, Point2, Vec3};

fn unit_f32() -> impl Strategy<Value = Vec3<f32>> {
    prop::array::uniform3(-1.0_f32..1.0)
        .prop_filter("not near zero", |a| a[0] * a[0] + a[1] * a[1] + a[2] * a[2] > 1.0e-3)
        .prop_map(|a| Vec3::from(a).normalize())
}

fn unit_f64() -> impl Strategy<Value = Vec3<f64>> {
    prop::array::uniform3(-1.0_f64..1.0)
        .prop_filter("not near zero", |a| a[0] * a[0] + a[1] * a[1] + a[2] * a[2] > 1.0e-3)
        .prop_map(|a| Vec3::from(a).normalize())
}

fn cone() -> impl Strategy<Value = DirectionCone<f64>> {
    (unit_f64(), -0.99_f64..1.0).prop_map(|(axis, cos_theta)| DirectionCone::new(axis, cos_theta))
}

/// Direction on the rim of `inner` farthest from the axis of `outer`.
fn farthest_rim_direction(outer: &DirectionCone<f64>, inner: &DirectionCone<f64>) -> Vec3<f64> {
    let axis = inner.axis();
    let mut normal = outer.axis().cross(&axis).normalize();
    if normal.length() < 0.5 {
        normal = coordinate_system(&axis).0;
    }
    rotate_about_axis(&axis, &normal, clamp_acos(inner.cos_theta()))
}

/// Returns an error unless `outer` holds all of `inner`, allowing `slack`
/// radians of rounding at the boundary.
fn check_covers(
    outer: &DirectionCone<f64>,
    inner: &DirectionCone<f64>,
    slack: f64,
) -> Result<(), TestCaseError> {
    if outer.is_entire_sphere() {
        return Ok(());
    }
    let theta_outer = clamp_acos(outer.cos_theta());
    let theta_inner = clamp_acos(inner.cos_theta());
    let reach = angle_between(&outer.axis(), &inner.axis()) + theta_inner;
    prop_assert!(reach <= theta_outer + slack, "{inner:?} reaches {reach} outside {outer:?}");
    let rim = farthest_rim_direction(outer, inner);
    prop_assert!(
        angle_between(&outer.axis(), &rim) <= theta_outer + slack,
        "rim {rim:?} of {inner:?} outside {outer:?}"
    );
    Ok(())
}

fn merge_covering_both(a: &DirectionCone<f64>, b: &DirectionCone<f64>) -> Result<(), TestCaseError> {
    let m = DirectionCone::merge(a, b);
    prop_assert!(m.validate().is_ok());
    check_covers(&m, a, 1.0e-9)?;
    check_covers(&m, b, 1.0e-9)?;
    Ok(())
}

#[test]
fn proptest_seed_pinned_octahedral_round_trip() {
    const SEED_BYTES: [u8; 32] = [
        0x0c, 0x7a, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0,
    ];
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    let mut runner = TestRunner::new_with_rng(PropConfig::with_cases(512), rng);

    runner
        .run(&unit_f32(), |v| {
            let back: Vec3<f32> = OctahedralVec::encode(&v).decode();
            prop_assert!(angle_between(&v, &back) < 1.0e-3, "{v:?} -> {back:?}");
            Ok(())
        })
        .unwrap_or_else(|e| panic!("{e}"));
}

proptest! {
    #[test]
    fn angle_is_symmetric_and_bounded(a in unit_f64(), b in unit_f64()) {
        let ab = angle_between(&a, &b);
        prop_assert_eq!(ab, angle_between(&b, &a));
        prop_assert!((0.0..=core::f64::consts::PI).contains(&ab));
        prop_assert!((ab + angle_between(&a, &-b) - core::f64::consts::PI).abs() < 1.0e-9);
    }

    #[test]
    fn equal_area_round_trip(d in unit_f64()) {
        let p = equal_area_sphere_to_square(&d);
        prop_assert!((0.0..=1.0).contains(&p.x()) && (0.0..=1.0).contains(&p.y()));
        let back = equal_area_square_to_sphere(&p);
        prop_assert!(back.approx_eq(&d, 1.0e-9), "{d:?} -> {p:?} -> {back:?}");
    }

    #[test]
    fn merged_cone_covers_both_cones(a in cone(), b in cone()) {
        merge_covering_both(&a, &b)?;
    }

    #[test]
    fn merge_covers_nearly_parallel_and_antipodal_cones(
        a in cone(),
        b_cos in -0.99_f64..1.0,
        tilt in 1.0e-9_f64..1.0e-5,
        flip in any::<bool>()
    ) {
        // Turn a's axis by `tilt` (and optionally flip it) to get b's axis.
        let normal = coordinate_system(&a.axis()).0;
        let near = rotate_about_axis(&a.axis(), &normal, tilt);
        let b_axis = if flip { -near } else { near };
        merge_covering_both(&a, &DirectionCone::new(b_axis, b_cos))?;
    }

    #[test]
    fn merge_with_empty_and_entire_sphere(c in cone()) {
        prop_assert_eq!(DirectionCone::merge(&DirectionCone::empty(), &c), c);
        prop_assert_eq!(DirectionCone::merge(&c, &DirectionCone::empty()), c);
        prop_assert!(DirectionCone::merge(&c, &DirectionCone::entire_sphere()).is_entire_sphere());
        prop_assert!(DirectionCone::merge(&DirectionCone::entire_sphere(), &c).is_entire_sphere());
        prop_assert!(DirectionCone::merge(&c, &c).approx_eq(&c, 1.0e-12));
    }

    #[test]
    fn triangle_area_is_within_a_hemisphere(a in unit_f64(), b in unit_f64(), c in unit_f64()) {
        let area = spherical_triangle_area(&a, &b, &c);
        prop_assert!((0.0..=2.0 * core::f64::consts::PI + 1.0e-9).contains(&area));
    }
}

#[test]
fn merge_covers_cones_a_micro_radian_apart() {
    let x = Vec3::new(1.0_f64, 0.0, 0.0);
    let t = 1.0e-6_f64;
    let cases = [
        (DirectionCone::new(x, 0.5), DirectionCone::new(Vec3::new(-t.cos(), t.sin(), 0.0), 0.5)),
        (DirectionCone::from_direction(x), DirectionCone::from_direction(Vec3::new(t.cos(), t.sin(), 0.0))),
        (DirectionCone::new(x, 0.9), DirectionCone::new(Vec3::new(t.cos(), 0.0, t.sin()), 0.2)),
    ];
    for (a, b) in cases {
        merge_covering_both(&a, &b).unwrap_or_else(|e| panic!("{e}"));
        merge_covering_both(&b, &a).unwrap_or_else(|e| panic!("{e}"));
    }
}

#[test]
fn equal_area_centre_maps_to_up() {
    let up = equal_area_square_to_sphere(&Point2::new(0.5_f32, 0.5));
    assert_eq!(up.to_array(), [0.0, 0.0, 1.0]);
}
