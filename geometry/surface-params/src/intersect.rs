//! Ray/quadric intersection shared by the sphere and cylinder paths.

use nalgebra::{Point3, Vector3};

/// Solves `a·t² + 2b·t + c = 0` along `origin + t·direction` and returns the
/// intersection point nearest `seed`.
///
/// - `det = b² - a·c < 0` (or NaN): no intersection.
/// - `det == 0`: the single tangent root `t = -b / a`.
/// - `det > 0`: of the two roots, the point closer to `seed` by squared
///   distance; ties take the root nearer the ray origin.
///
/// Returns `None` when `a` vanishes (the ray runs parallel to a cylinder
/// axis), since no single intersection exists.
#[allow(clippy::float_cmp)]
pub(crate) fn nearest_root(
    origin: &Point3<f64>,
    direction: &Vector3<f64>,
    a: f64,
    b: f64,
    c: f64,
    seed: &Point3<f64>,
) -> Option<Point3<f64>> {
    if a.abs() < f64::EPSILON {
        return None;
    }

    let det = b * b - a * c;
    if det.is_nan() || det < 0.0 {
        return None;
    }

    if det == 0.0 {
        return Some(origin + direction * (-b / a));
    }

    let root = det.sqrt();
    let p1 = origin + direction * ((-b + root) / a);
    let p2 = origin + direction * ((-b - root) / a);
    let d1 = (p1 - seed).norm_squared();
    let d2 = (p2 - seed).norm_squared();
    Some(if d1 < d2 { p1 } else { p2 })
}
