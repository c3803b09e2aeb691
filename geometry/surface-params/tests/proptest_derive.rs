//! Property-based tests for surface parameter derivation.
//!
//! Run with: cargo test -p surface-params -- proptest

#![allow(clippy::unwrap_used)]

use nalgebra::{Point3, Vector3};
use proptest::prelude::*;
use scan_types::CameraPose;
use surface_params::{
    CylinderDescriptor, GRAZING_THRESHOLD, OrientationConvention, PlaneDescriptor,
    SphereDescriptor, derive_cylinder, derive_plane, derive_sphere,
};

// =============================================================================
// Strategies
// =============================================================================

fn arb_point(extent: f64) -> impl Strategy<Value = Point3<f64>> {
    prop::array::uniform3(-extent..extent).prop_map(Point3::from)
}

/// Cameras whose view direction is never close to vertical, so a `+Y` up
/// hint always yields a valid pose.
fn arb_camera() -> impl Strategy<Value = CameraPose> {
    (arb_point(5.0), arb_point(5.0)).prop_filter_map("degenerate view", |(eye, target)| {
        let dir = (target - eye).try_normalize(1e-3)?;
        (dir.y.abs() < 0.95).then(|| CameraPose::look_at(eye, target, &Vector3::y()))
    })
}

fn arb_convention() -> impl Strategy<Value = OrientationConvention> {
    prop_oneof![
        Just(OrientationConvention::RoundingSurface),
        Just(OrientationConvention::OnSurface),
    ]
}

/// Rectangles with random center, orientation and size.
fn arb_plane() -> impl Strategy<Value = PlaneDescriptor> {
    (
        arb_point(3.0),
        prop::array::uniform3(-1.0..1.0f64),
        prop::array::uniform3(-1.0..1.0f64),
        0.2..3.0f64,
        0.2..3.0f64,
    )
        .prop_filter_map("degenerate basis", |(center, u, v, w, h)| {
            let u = Vector3::from(u).try_normalize(1e-2)?;
            let v = u.cross(&Vector3::from(v)).try_normalize(1e-2)?;
            let across = u * w / 2.0;
            let down = v * h / 2.0;
            Some(PlaneDescriptor::new(
                center - across + down,
                center + across + down,
                center + across - down,
                center - across - down,
            ))
        })
}

fn arb_sphere() -> impl Strategy<Value = SphereDescriptor> {
    (arb_point(5.0), 0.1..4.0f64).prop_map(|(c, r)| SphereDescriptor::new(c, r))
}

fn arb_cylinder() -> impl Strategy<Value = CylinderDescriptor> {
    (arb_point(5.0), arb_point(5.0), 0.1..3.0f64)
        .prop_filter("degenerate axis", |(top, bottom, _)| (top - bottom).norm() > 0.1)
        .prop_map(|(top, bottom, r)| CylinderDescriptor::new(top, bottom, r))
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn proptest_plane_normal_faces_camera(plane in arb_plane(), camera in arb_camera()) {
        let derived = derive_plane(&plane, &camera);
        let look = camera.look_direction();

        prop_assert!((derived.normal.norm() - 1.0).abs() < 1e-9);
        prop_assert!(derived.normal.dot(&look) <= 0.0);
        prop_assert_eq!(
            derived.hit_point.is_some(),
            derived.normal.dot(&look).abs() >= GRAZING_THRESHOLD
        );
    }

    #[test]
    fn proptest_plane_hit_on_plane_and_ray(plane in arb_plane(), camera in arb_camera()) {
        let derived = derive_plane(&plane, &camera);
        if let Some(hit) = derived.hit_point {
            let scale = 1.0 + (hit - camera.position).norm();
            prop_assert!((hit - derived.center).dot(&derived.normal).abs() < 1e-9 * scale);

            let along = hit - camera.position;
            prop_assert!(along.cross(&camera.look_direction()).norm() < 1e-9 * scale);
        }
    }

    #[test]
    fn proptest_sphere_hit_is_nearest_root(
        sphere in arb_sphere(),
        camera in arb_camera(),
        seed in arb_point(6.0),
        convention in arb_convention(),
    ) {
        let derived = derive_sphere(&sphere, &camera, &seed, convention);
        prop_assert_eq!(derived.hit_point.is_some(), derived.orientation.is_some());

        if let Some(hit) = derived.hit_point {
            let scale = 1.0 + (hit - camera.position).norm();
            prop_assert!(((hit - sphere.center).norm() - sphere.radius).abs() < 1e-8 * scale);

            // The other root mirrors the hit about the chord midpoint.
            let look = camera.look_direction();
            let mid = (sphere.center - camera.position).dot(&look);
            let t = (hit - camera.position).dot(&look);
            let other = camera.position + look * (2.0f64.mul_add(mid, -t));
            prop_assert!(
                (hit - seed).norm_squared() <= (other - seed).norm_squared() + 1e-8 * scale
            );

            prop_assert!(derived.orientation.unwrap().is_orthonormal(1e-9));
        }
    }

    #[test]
    fn proptest_cylinder_hit_on_surface(
        cylinder in arb_cylinder(),
        camera in arb_camera(),
        seed in arb_point(6.0),
        convention in arb_convention(),
    ) {
        let derived = derive_cylinder(&cylinder, &camera, &seed, convention);

        prop_assert!(derived.axis.dot(&camera.up()) >= 0.0);
        prop_assert!((derived.axis.norm() - 1.0).abs() < 1e-9);
        prop_assert_eq!(derived.hit_point.is_some(), derived.axis_point.is_some());

        if let (Some(hit), Some(on_axis)) = (derived.hit_point, derived.axis_point) {
            let scale = 1.0 + (hit - camera.position).norm();
            prop_assert!(((hit - on_axis).norm() - cylinder.radius).abs() < 1e-6 * scale);
            prop_assert!((hit - on_axis).dot(&derived.axis).abs() < 1e-6 * scale);

            let frame = derived.orientation.unwrap();
            prop_assert!(frame.is_orthonormal(1e-6));
        }
    }

    #[test]
    fn proptest_derivation_is_deterministic(
        sphere in arb_sphere(),
        cylinder in arb_cylinder(),
        camera in arb_camera(),
        seed in arb_point(6.0),
        convention in arb_convention(),
    ) {
        prop_assert_eq!(
            derive_sphere(&sphere, &camera, &seed, convention),
            derive_sphere(&sphere, &camera, &seed, convention)
        );
        prop_assert_eq!(
            derive_cylinder(&cylinder, &camera, &seed, convention),
            derive_cylinder(&cylinder, &camera, &seed, convention)
        );
    }
}
