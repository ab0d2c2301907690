//! Circular arrows.
//!
//! All three variants share [`circular_arrow_path`]. The outline is solved
//! on a circle of radius `ss / 2` (band, arrowhead base and tip), then
//! stretched onto the frame's ellipse. Arrowhead bases are perpendicular to
//! the base-to-tip chord; where that line meets the band and head circles is
//! found by line-circle intersection. Counter-clockwise arrows are solved as
//! clockwise ones with negated angles and reflected afterwards.

use glam::{DVec2, dvec2};

use crate::geometry::arc::{parametric_to_visual, sweep_between};
use crate::geometry::{Frame, PathData, angle_deg, line_circle_params, pin};

const MAX_ANGLE: f64 = 21599999.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Winding {
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct CircularArrow {
    pub winding: Winding,
    pub double_headed: bool,
    /// Default `(adj1..adj5)`.
    pub defaults: [f64; 5],
}

pub(crate) const CIRCULAR: CircularArrow = CircularArrow {
    winding: Winding::Clockwise,
    double_headed: false,
    defaults: [12500.0, 1142319.0, 20457681.0, 10800000.0, 12500.0],
};

pub(crate) const LEFT_CIRCULAR: CircularArrow = CircularArrow {
    winding: Winding::CounterClockwise,
    double_headed: false,
    defaults: [12500.0, -1142319.0, 1142319.0, 10800000.0, 12500.0],
};

pub(crate) const LEFT_RIGHT_CIRCULAR: CircularArrow = CircularArrow {
    winding: Winding::Clockwise,
    double_headed: true,
    defaults: [12500.0, 1142319.0, 20457681.0, 11942319.0, 12500.0],
};

fn unit(deg: f64) -> DVec2 {
    let t = deg.to_radians();
    dvec2(t.cos(), t.sin())
}

/// Signed angle difference folded into `[-180, 180)`.
fn wrap180(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

/// One arrowhead solved in circle space.
struct Head {
    tip: DVec2,
    outer_band: DVec2,
    outer_head: DVec2,
    inner_head: DVec2,
    inner_band: DVec2,
}

struct Radii {
    band_outer: f64,
    band_inner: f64,
    head_outer: f64,
    head_inner: f64,
    mid: f64,
}

/// Where the base line through `base` (perpendicular to `base -> tip`)
/// meets the circle of radius `r`, falling back to the radial point.
fn base_crossing(base: DVec2, tip: DVec2, base_deg: f64, r: f64) -> DVec2 {
    let chord = tip - base;
    let mut n = dvec2(-chord.y, chord.x).normalize_or_zero();
    if n == DVec2::ZERO {
        n = base.normalize_or_zero();
    }
    if n.dot(base) < 0.0 {
        n = -n;
    }
    match line_circle_params(base, n, r) {
        Some((_, s)) => base + n * s,
        None => unit(base_deg) * r,
    }
}

fn solve_head(radii: &Radii, base_deg: f64, tip_deg: f64) -> Head {
    let base = unit(base_deg) * radii.mid;
    let tip = unit(tip_deg) * radii.mid;
    Head {
        tip,
        outer_band: base_crossing(base, tip, base_deg, radii.band_outer),
        outer_head: base_crossing(base, tip, base_deg, radii.head_outer),
        inner_head: base_crossing(base, tip, base_deg, radii.head_inner),
        inner_band: base_crossing(base, tip, base_deg, radii.band_inner),
    }
}

/// Maps circle-space geometry onto the frame's ellipse.
struct Stretch {
    center: DVec2,
    scale: DVec2,
    flip: bool,
}

impl Stretch {
    fn point(&self, q: DVec2) -> DVec2 {
        let q = if self.flip { dvec2(q.x, -q.y) } else { q };
        self.center + q * self.scale
    }

    /// Arc along the circle of radius `r` from the pen (at parametric angle
    /// `from`) sweeping `sweep` degrees, as a DrawingML visual-angle arc.
    fn arc(&self, path: PathData, r: f64, from: f64, sweep: f64) -> PathData {
        let (from, sweep) = if self.flip { (-from, -sweep) } else { (from, sweep) };
        let radii = self.scale * r;
        let st = parametric_to_visual(radii, from);
        let en = parametric_to_visual(radii, from + sweep);
        let d = en - st;
        let vsweep = d + 360.0 * ((sweep - d) / 360.0).round();
        path.arc_to(radii.x, radii.y, st, vsweep)
    }
}

pub(crate) fn circular_arrow_path(f: &Frame, spec: &CircularArrow) -> PathData {
    let [d1, d2, d3, d4, d5] = spec.defaults;
    let a5 = f.adj_pin("adj5", d5, 0.0, 25000.0);
    let a1 = f.adj_pin("adj1", d1, 0.0, 2.0 * a5);
    let mut head = f.adj_angle("adj2", d2);
    let mut en = f.adj_pin("adj3", d3, 0.0, MAX_ANGLE) / 60000.0;
    let mut st = f.adj_pin("adj4", d4, 0.0, MAX_ANGLE) / 60000.0;

    let flip = spec.winding == Winding::CounterClockwise;
    if flip {
        head = -head;
        en = -en;
        st = -st;
    }

    let r = f.ss() / 2.0;
    let th = f.ssp(a1);
    let thh = f.ssp(a5);
    let band_outer = r + th / 2.0 - thh;
    let mid = band_outer - th / 2.0;
    let radii = Radii {
        band_outer,
        band_inner: band_outer - th,
        head_outer: mid + thh,
        head_inner: (mid - thh).max(0.0),
        mid,
    };

    let sweep = sweep_between(st, en);
    let heads = if spec.double_headed { 2.0 } else { 1.0 };
    let head = pin(0.0, head, sweep / heads);
    let end_base = st + sweep - head;
    let front = solve_head(&radii, end_base, st + sweep);

    // The tail either starts square on the band or carries its own head.
    let tail = if spec.double_headed {
        Some(solve_head(&radii, st, st - head))
    } else {
        None
    };
    let (outer_start, inner_start) = match &tail {
        Some(t) => (t.outer_band, t.inner_band),
        None => (unit(st) * radii.band_outer, unit(st) * radii.band_inner),
    };

    let outer_from = angle_deg(outer_start);
    let outer_sweep = (end_base - st) + wrap180(angle_deg(front.outer_band) - end_base)
        - wrap180(outer_from - st);
    let inner_from = angle_deg(front.inner_band);
    let inner_sweep = (end_base - st) + wrap180(inner_from - end_base)
        - wrap180(angle_deg(inner_start) - st);

    let stretch = Stretch {
        center: f.center(),
        scale: if r > 0.0 {
            dvec2(f.w / 2.0 / r, f.h / 2.0 / r)
        } else {
            DVec2::ZERO
        },
        flip,
    };

    let mut path = PathData::new().mv(stretch.point(outer_start));
    path = stretch.arc(path, radii.band_outer, outer_from, outer_sweep.max(0.0));
    path = path
        .ln(stretch.point(front.outer_head))
        .ln(stretch.point(front.tip))
        .ln(stretch.point(front.inner_head))
        .ln(stretch.point(front.inner_band));
    path = stretch.arc(path, radii.band_inner, inner_from, -inner_sweep.max(0.0));
    if let Some(t) = tail {
        path = path
            .ln(stretch.point(t.inner_head))
            .ln(stretch.point(t.tip))
            .ln(stretch.point(t.outer_head));
    }
    path.z()
}

pub fn circular_arrow(f: &Frame) -> PathData {
    circular_arrow_path(f, &CIRCULAR)
}

pub fn left_circular_arrow(f: &Frame) -> PathData {
    circular_arrow_path(f, &LEFT_CIRCULAR)
}

pub fn left_right_circular_arrow(f: &Frame) -> PathData {
    circular_arrow_path(f, &LEFT_RIGHT_CIRCULAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Adjustments;

    /// Every absolute point in `path`, skipping arc radii and flags.
    fn coords(path: &str) -> Vec<(f64, f64)> {
        let mut out = Vec::new();
        let mut skip = 0;
        for tok in path.split(' ') {
            if tok.starts_with('A') {
                skip = 2;
                continue;
            }
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let tok = tok.trim_start_matches(|c: char| c.is_ascii_alphabetic());
            if let Some((x, y)) = tok.split_once(',') {
                out.push((x.parse().unwrap(), y.parse().unwrap()));
            }
        }
        out
    }

    #[test]
    fn tip_sits_on_the_mid_circle() {
        let adj = Adjustments::new();
        let path = circular_arrow(&Frame::new(100.0, 100.0, &adj)).build();
        // R = 50 with a 12.5 band and 12.5 head half-width puts the midline at 37.5.
        let tip = unit(20457681.0 / 60000.0) * 37.5 + dvec2(50.0, 50.0);
        let found = coords(&path)
            .into_iter()
            .any(|(x, y)| (x - tip.x).abs() < 0.01 && (y - tip.y).abs() < 0.01);
        assert!(found, "{path}");
    }

    #[test]
    fn outline_stays_inside_the_frame() {
        let adj = Adjustments::new();
        for (w, h) in [(100.0, 100.0), (200.0, 80.0), (30.0, 90.0)] {
            let frame = Frame::new(w, h, &adj);
            for spec in [&CIRCULAR, &LEFT_CIRCULAR, &LEFT_RIGHT_CIRCULAR] {
                let path = circular_arrow_path(&frame, spec).build();
                for (x, y) in coords(&path) {
                    assert!(x >= -0.01 && x <= w + 0.01, "{path}");
                    assert!(y >= -0.01 && y <= h + 0.01, "{path}");
                }
            }
        }
    }

    #[test]
    fn left_variant_is_the_vertical_reflection_of_negated_angles() {
        let adj = Adjustments::new()
            .with("adj2", 1142319.0)
            .with("adj3", 20457681.0)
            .with("adj4", 10800000.0);
        let right = circular_arrow(&Frame::new(100.0, 100.0, &adj)).build();
        let left_adj = Adjustments::new()
            .with("adj2", -1142319.0)
            .with("adj3", 1142319.0)
            .with("adj4", 10800000.0);
        let left = left_circular_arrow(&Frame::new(100.0, 100.0, &left_adj)).build();
        let r = coords(&right);
        let l = coords(&left);
        assert_eq!(r.len(), l.len());
        for ((rx, ry), (lx, ly)) in r.iter().zip(&l) {
            assert!((rx - lx).abs() < 0.01);
            assert!((ry + ly - 100.0).abs() < 0.01);
        }
    }

    #[test]
    fn double_headed_has_two_tips() {
        let adj = Adjustments::new();
        let path = left_right_circular_arrow(&Frame::new(100.0, 100.0, &adj)).build();
        assert_eq!(path.matches('A').count(), 2);
        assert_eq!(path.matches('L').count(), 7);
    }

    #[test]
    fn zero_size_is_finite() {
        let adj = Adjustments::new();
        let path = circular_arrow(&Frame::new(0.0, 40.0, &adj)).build();
        assert!(!path.contains("NaN"));
        assert!(path.starts_with("M0,20"), "{path}");
    }
}
