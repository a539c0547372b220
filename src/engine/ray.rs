//! Ray / segment maths in a ray-local frame.
//!
//! The segment is moved so the ray origin sits at (0, 0) and turned so the
//! ray points along +X. The wall then crosses the ray's line wherever its
//! local y changes sign, and the local x of that crossing is the signed
//! distance along the ray.

use glam::DVec2;

/// Relative tolerance on local-frame y, scaled by the largest coordinate
/// involved (rotation rounding grows with magnitude).
pub const GEOM_EPSILON: f64 = 64.0 * f64::EPSILON;

/// Rotate `p` counter-clockwise about the origin by `angle` radians.
#[inline]
pub fn rotate(p: DVec2, angle: f64) -> DVec2 {
    let (s, c) = angle.sin_cos();
    DVec2::new(p.x * c - p.y * s, p.y * c + p.x * s)
}

#[inline]
fn snap(v: f64, tol: f64) -> f64 {
    if v.abs() <= tol { 0.0 } else { v }
}

/// Signed distance from `origin` along the ray at `angle` to segment `a`–`b`.
///
/// * positive = ahead, negative = behind, zero = on the camera plane.
/// * `None` when both endpoints lie strictly on the same side of the ray's
///   line, or the input is degenerate (zero-length / non-finite).
/// * Local y within `GEOM_EPSILON * max(|origin|, |a|, |b|, 1)` of the line
///   counts as on it; that band only absorbs rotation rounding, so an
///   endpoint a visible distance off the line still decides the side.
///
/// The ray is treated as a full line; picking the nearest forward hit is
/// the caller's job.
pub fn intersect(origin: DVec2, angle: f64, a: DVec2, b: DVec2) -> Option<f64> {
    if a == b || !(origin.is_finite() && a.is_finite() && b.is_finite() && angle.is_finite()) {
        return None;
    }

    let p1 = rotate(a - origin, -angle);
    let p2 = rotate(b - origin, -angle);
    let (x1, x2) = (p1.x, p2.x);
    let tol = GEOM_EPSILON * origin.length().max(a.length()).max(b.length()).max(1.0);
    let (y1, y2) = (snap(p1.y, tol), snap(p2.y, tol));

    if y1 * y2 > 0.0 {
        return None; // same side of the ray
    }

    let dist = if x1 == x2 {
        x1
    } else if y1 == y2 {
        // both on the line: nearest endpoint
        x1.min(x2)
    } else {
        let dy = (y2 - y1).abs();
        if dy == 0.0 {
            return None;
        }
        x1 + (x2 - x1) * (y1.abs() / dy)
    };

    dist.is_finite().then_some(dist)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const TOL: f64 = 1e-9;

    #[test]
    fn rotate_quarter_turn() {
        let p = rotate(dvec2(1.0, 0.0), FRAC_PI_2);
        assert!((p - dvec2(0.0, 1.0)).length() < TOL);
    }

    #[test]
    fn rotate_round_trip() {
        for &(x, y, a) in &[(1.0, 2.0, 0.3), (-7.5, 0.25, -4.0), (1e3, -1e3, 12.0)] {
            let p = dvec2(x, y);
            let back = rotate(rotate(p, a), -a);
            assert!((back - p).length() < 1e-9 * p.length().max(1.0));
        }
    }

    #[test]
    fn hit_straight_ahead() {
        let d = intersect(DVec2::ZERO, 0.0, dvec2(5.0, -1.0), dvec2(5.0, 1.0));
        assert_eq!(d, Some(5.0));
    }

    #[test]
    fn hit_behind_is_negative() {
        let d = intersect(DVec2::ZERO, 0.0, dvec2(-3.0, -1.0), dvec2(-3.0, 1.0)).unwrap();
        assert!((d + 3.0).abs() < TOL);
    }

    #[test]
    fn same_side_misses() {
        assert_eq!(
            intersect(DVec2::ZERO, 0.0, dvec2(1.0, 1.0), dvec2(5.0, 2.0)),
            None
        );
        assert_eq!(
            intersect(DVec2::ZERO, 0.0, dvec2(1.0, -1.0), dvec2(5.0, -0.5)),
            None
        );
    }

    #[test]
    fn slanted_wall_interpolates() {
        // line from (2, -1) to (4, 1) crosses y = 0 at x = 3
        let d = intersect(DVec2::ZERO, 0.0, dvec2(2.0, -1.0), dvec2(4.0, 1.0)).unwrap();
        assert!((d - 3.0).abs() < TOL);
    }

    #[test]
    fn collinear_wall_reports_nearest_end() {
        let d = intersect(DVec2::ZERO, 0.0, dvec2(100.0, 0.0), dvec2(2.0, 0.0));
        assert_eq!(d, Some(2.0));
    }

    #[test]
    fn looking_straight_down_at_collinear_stub() {
        let d = intersect(DVec2::ZERO, -FRAC_PI_2, dvec2(0.0, -2.0), dvec2(0.0, -4.0)).unwrap();
        assert!((d - 2.0).abs() < TOL);
    }

    #[test]
    fn endpoint_slightly_off_the_line_keeps_its_side() {
        assert_eq!(
            intersect(DVec2::ZERO, 0.0, dvec2(5.0, 5e-10), dvec2(5.0, 1.0)),
            None
        );
        assert_eq!(
            intersect(DVec2::ZERO, 0.0, dvec2(5.0, -5e-10), dvec2(5.0, -1.0)),
            None
        );
    }

    #[test]
    fn far_collinear_stub_still_hits() {
        // sin/cos rounding at -π/2 leaves local y around 1e-8 at this range
        let d = intersect(DVec2::ZERO, -FRAC_PI_2, dvec2(0.0, -1e8), dvec2(0.0, -2e8)).unwrap();
        assert!((d - 1e8).abs() < 1e-3);
    }

    #[test]
    fn offset_origin_and_angle() {
        // from (1, 1) at 45° the wall x + y = 6 is reached at (3, 3)
        let d = intersect(dvec2(1.0, 1.0), FRAC_PI_4, dvec2(6.0, 0.0), dvec2(0.0, 6.0)).unwrap();
        assert!((d - 8f64.sqrt()).abs() < TOL);
    }

    #[test]
    fn hit_point_lies_on_segment() {
        let (a, b) = (dvec2(-3.0, 2.0), dvec2(5.0, 7.0));
        let mid = (a + b) * 0.5;
        let normal = (b - a).perp().normalize();
        for k in [-4.0, -1.0, 0.5, 3.0] {
            let origin = mid + normal * k;
            let to_mid = mid - origin;
            let angle = to_mid.y.atan2(to_mid.x);
            let d = intersect(origin, angle, a, b).unwrap();
            let hit = origin + DVec2::from_angle(angle) * d;
            let t = (hit - a).dot(b - a) / (b - a).length_squared();
            let closest = a + (b - a) * t;
            assert!((hit - closest).length() < 1e-9);
            assert!((-1e-9..=1.0 + 1e-9).contains(&t));
        }
    }

    #[test]
    fn degenerate_segment_misses() {
        let p = dvec2(3.0, 0.0);
        assert_eq!(intersect(DVec2::ZERO, 0.0, p, p), None);
    }

    #[test]
    fn non_finite_input_misses() {
        assert_eq!(
            intersect(DVec2::ZERO, f64::NAN, dvec2(1.0, -1.0), dvec2(1.0, 1.0)),
            None
        );
        assert_eq!(
            intersect(DVec2::ZERO, PI, dvec2(f64::INFINITY, -1.0), dvec2(1.0, 1.0)),
            None
        );
    }
}
