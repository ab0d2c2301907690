//! Geometry primitives shared by all generators
//!
//! - `arc`: visual-angle arc conversion (the single place this math lives)
//! - `path`: path data builder and number formatting
//! - `frame`: the per-request shape frame (`w`, `h`, `ss`, adjustments)
//! - `sketch`: recorded outlines replayed under reflections

pub mod arc;
pub mod frame;
pub mod path;
pub mod sketch;

pub use arc::{ArcSegment, to_arc_segment};
pub use frame::Frame;
pub use path::PathData;
pub use sketch::{Sketch, Transform};

use glam::{DVec2, dvec2};

/// Clamp `v` into `[lo, hi]`; if the range is inverted `lo` wins.
///
/// Mirrors the `pin` guide operator, which never panics on an empty range.
#[inline]
pub fn pin(lo: f64, v: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi.max(lo)
    } else {
        v
    }
}

/// Division that yields 0 instead of NaN/inf.
#[inline]
pub fn safe_div(num: f64, den: f64) -> f64 {
    if den == 0.0 || !den.is_finite() {
        0.0
    } else {
        let r = num / den;
        if r.is_finite() { r } else { 0.0 }
    }
}

/// `sqrt` clamped at zero.
#[inline]
pub fn safe_sqrt(v: f64) -> f64 {
    if v > 0.0 { v.sqrt() } else { 0.0 }
}

/// Point on a circle/ellipse by *parametric* angle in degrees.
#[inline]
pub fn polar(center: DVec2, radii: DVec2, deg: f64) -> DVec2 {
    let t = deg.to_radians();
    center + dvec2(radii.x * t.cos(), radii.y * t.sin())
}

/// Angle of a vector in degrees, `[0, 360)`.
#[inline]
pub fn angle_deg(v: DVec2) -> f64 {
    v.y.atan2(v.x).to_degrees().rem_euclid(360.0)
}

/// Intersections of the line through `p` with direction `d` and the circle
/// centred on the origin with radius `r`, as parameters along `d`.
///
/// Returns `None` when the line misses the circle.
pub fn line_circle_params(p: DVec2, d: DVec2, r: f64) -> Option<(f64, f64)> {
    let a = d.length_squared();
    if a == 0.0 {
        return None;
    }
    let b = 2.0 * p.dot(d);
    let c = p.length_squared() - r * r;
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }
    let s = disc.sqrt();
    Some(((-b - s) / (2.0 * a), (-b + s) / (2.0 * a)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_behaviour() {
        assert_eq!(pin(0.0, 5.0, 10.0), 5.0);
        assert_eq!(pin(0.0, -1.0, 10.0), 0.0);
        assert_eq!(pin(0.0, 11.0, 10.0), 10.0);
        assert_eq!(pin(3.0, 11.0, 1.0), 3.0);
    }

    #[test]
    fn safe_ops() {
        assert_eq!(safe_div(1.0, 0.0), 0.0);
        assert_eq!(safe_sqrt(-4.0), 0.0);
    }

    #[test]
    fn line_circle() {
        let (t0, t1) = line_circle_params(dvec2(-10.0, 0.0), dvec2(1.0, 0.0), 5.0).unwrap();
        assert!((t0 - 5.0).abs() < 1e-12);
        assert!((t1 - 15.0).abs() < 1e-12);
        assert!(line_circle_params(dvec2(0.0, 10.0), dvec2(1.0, 0.0), 5.0).is_none());
    }
}
