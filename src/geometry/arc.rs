//! Elliptical arc conversion.
//!
//! DrawingML arcs are given relative to the *current point*: the ellipse
//! center is never stored, it is recovered from where the pen is and the
//! start angle. Angles are "visual" (the ray through the boundary point)
//! rather than the parametric angle of `(rx cos t, ry sin t)`. The two only
//! agree when `rx == ry`, so every arc in the crate goes through
//! [`to_arc_segment`].

use glam::{DVec2, dvec2};

use crate::types::ArcSpec;

/// An SVG-ready arc: where it ends and which of the four candidate arcs to take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub end: DVec2,
    pub center: DVec2,
    pub large_arc: bool,
    pub sweep: bool,
}

/// Parametric angle (radians) of the boundary point at visual angle `deg`.
pub fn visual_to_parametric(radii: DVec2, deg: f64) -> f64 {
    let theta = deg.to_radians();
    (radii.x * theta.sin()).atan2(radii.y * theta.cos())
}

/// Visual angle (degrees) of the boundary point at parametric angle `deg`.
pub fn parametric_to_visual(radii: DVec2, deg: f64) -> f64 {
    let t = deg.to_radians();
    (radii.y * t.sin()).atan2(radii.x * t.cos()).to_degrees()
}

/// Point on an axis-aligned ellipse at visual angle `deg`.
pub fn ellipse_point(center: DVec2, radii: DVec2, deg: f64) -> DVec2 {
    let t = visual_to_parametric(radii, deg);
    center + dvec2(radii.x * t.cos(), radii.y * t.sin())
}

/// Convert an arc starting at `current` into its SVG endpoint and flags.
///
/// `large_arc = |sweep| > 180`, `sweep = sweep > 0`.
pub fn to_arc_segment(current: DVec2, radii: DVec2, start_deg: f64, sweep_deg: f64) -> ArcSegment {
    let t1 = visual_to_parametric(radii, start_deg);
    let t2 = visual_to_parametric(radii, start_deg + sweep_deg);
    let center = current - dvec2(radii.x * t1.cos(), radii.y * t1.sin());
    let end = center + dvec2(radii.x * t2.cos(), radii.y * t2.sin());
    ArcSegment {
        end,
        center,
        large_arc: sweep_deg.abs() > 180.0,
        sweep: sweep_deg > 0.0,
    }
}

/// [`to_arc_segment`] taking an authored [`ArcSpec`].
pub fn arc_spec_segment(current: DVec2, spec: &ArcSpec) -> ArcSegment {
    to_arc_segment(current, spec.radii, spec.start_angle_deg, spec.sweep_angle_deg)
}

/// Clockwise sweep from `start` to `end` in degrees, in `(0, 360]`.
///
/// Angles that agree modulo 360, identical ones included, are a full
/// revolution.
pub fn sweep_between(start_deg: f64, end_deg: f64) -> f64 {
    let sweep = (end_deg - start_deg).rem_euclid(360.0);
    if sweep == 0.0 { 360.0 } else { sweep }
}

/// True when an arc would draw nothing.
pub fn is_degenerate(radii: DVec2, sweep_deg: f64) -> bool {
    radii.x <= 0.0 || radii.y <= 0.0 || sweep_deg == 0.0 || !sweep_deg.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: DVec2, b: DVec2) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn start_point_at_zero_degrees() {
        let (cx, cy, r) = (40.0, 25.0, 10.0);
        let seg = to_arc_segment(dvec2(cx + r, cy), DVec2::splat(r), 0.0, 90.0);
        assert!(close(seg.center, dvec2(cx, cy)));
        assert!(close(seg.end, dvec2(cx, cy + r)));
        assert!(seg.sweep);
        assert!(!seg.large_arc);
    }

    #[test]
    fn flags_follow_sweep() {
        let seg = to_arc_segment(DVec2::ZERO, dvec2(5.0, 5.0), 0.0, -270.0);
        assert!(seg.large_arc);
        assert!(!seg.sweep);
    }

    #[test]
    fn visual_angle_differs_from_parametric_on_ellipses() {
        // Visual 45 degrees on a 2:1 ellipse must land on the 45 degree ray.
        let radii = dvec2(20.0, 10.0);
        let p = ellipse_point(DVec2::ZERO, radii, 45.0);
        assert!((p.x - p.y).abs() < 1e-9);
        let t = visual_to_parametric(radii, 45.0);
        assert!((t - std::f64::consts::FRAC_PI_4).abs() > 0.1);
    }

    #[test]
    fn half_ellipse_endpoint() {
        let seg = to_arc_segment(dvec2(20.0, 0.0), dvec2(20.0, 10.0), 0.0, 180.0);
        assert!(close(seg.end, dvec2(-20.0, 0.0)));
        assert!(close(seg.center, DVec2::ZERO));
    }

    #[test]
    fn sweep_full_revolution() {
        assert_eq!(sweep_between(0.0, 360.0), 360.0);
        assert_eq!(sweep_between(90.0, 90.0), 360.0);
        assert_eq!(sweep_between(0.0, 359.0), 359.0);
        assert_eq!(sweep_between(270.0, 90.0), 180.0);
    }
}
