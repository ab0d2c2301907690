//! Wedge and cloud callouts: a body with a tail pointing at `(adj1, adj2)`.
//!
//! The tail tip is given relative to the frame centre in 1/100000 of the
//! width and height.

use glam::{DVec2, dvec2};

use crate::geometry::arc::{parametric_to_visual, sweep_between};
use crate::geometry::path::ellipse_path;
use crate::geometry::{Frame, PathData, polar, safe_div};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

struct Tail {
    tip: DVec2,
    side: Side,
    /// The tip lies past the centre along the side it attaches to.
    far_half: bool,
}

fn tail(f: &Frame) -> Tail {
    let dx_pos = f.wp(f.adj("adj1", -20833.0));
    let dy_pos = f.hp(f.adj("adj2", 62500.0));
    let tip = dvec2(f.hc() + dx_pos, f.vc() + dy_pos);
    // Compare in an aspect-neutral space so a square frame splits on the diagonals.
    let dx = safe_div(dx_pos * f.h, f.w);
    let dy = safe_div(dy_pos * f.w, f.h);
    let (side, far_half) = if dx.abs() > dy.abs() {
        let side = if dx_pos > 0.0 { Side::Right } else { Side::Left };
        (side, dy_pos > 0.0)
    } else {
        let side = if dy_pos > 0.0 { Side::Bottom } else { Side::Top };
        (side, dx_pos > 0.0)
    };
    Tail { tip, side, far_half }
}

/// Rectangle (optionally with corner radius `dr`) with a wedge on one side.
fn wedge_box(f: &Frame, dr: f64) -> PathData {
    let t = tail(f);
    let (r, b) = (f.w, f.h);
    let (g1, g2) = if t.far_half { (7.0, 10.0) } else { (2.0, 5.0) };
    let (x1, x2) = (r * g1 / 12.0, r * g2 / 12.0);
    let (y1, y2) = (b * g1 / 12.0, b * g2 / 12.0);

    let mut path = PathData::new().m(0.0, dr).arc_to(dr, dr, 180.0, 90.0);
    if t.side == Side::Top {
        path = path.l(x1, 0.0).ln(t.tip).l(x2, 0.0);
    }
    path = path.l(r - dr, 0.0).arc_to(dr, dr, 270.0, 90.0);
    if t.side == Side::Right {
        path = path.l(r, y1).ln(t.tip).l(r, y2);
    }
    path = path.l(r, b - dr).arc_to(dr, dr, 0.0, 90.0);
    if t.side == Side::Bottom {
        path = path.l(x2, b).ln(t.tip).l(x1, b);
    }
    path = path.l(dr, b).arc_to(dr, dr, 90.0, 90.0);
    if t.side == Side::Left {
        path = path.l(0.0, y2).ln(t.tip).l(0.0, y1);
    }
    path.z()
}

pub fn wedge_rect_callout(f: &Frame) -> PathData {
    wedge_box(f, 0.0)
}

pub fn wedge_round_rect_callout(f: &Frame) -> PathData {
    let a3 = f.adj_pin("adj3", 16667.0, 0.0, 50000.0);
    wedge_box(f, f.ssp(a3))
}

pub fn wedge_ellipse_callout(f: &Frame) -> PathData {
    let t = tail(f);
    let (c, r) = (f.center(), f.half());
    let d = t.tip - c;
    // Parametric direction of the tip, widened by 11 degrees either way.
    let pang = (d.y * f.w).atan2(d.x * f.h).to_degrees();
    let p1 = polar(c, r, pang + 11.0);
    let p2 = polar(c, r, pang - 11.0);
    let st = parametric_to_visual(r, pang + 11.0);
    let en = parametric_to_visual(r, pang - 11.0);
    PathData::new()
        .mv(t.tip)
        .ln(p1)
        .arc_to(r.x, r.y, st, sweep_between(st, en))
        .ln(p2)
        .z()
}

/// Cloud outline authored on a 43200 grid: eleven puffs as visual-angle arcs.
pub(crate) fn cloud_outline(f: &Frame) -> PathData {
    const PUFFS: [(f64, f64, f64, f64); 11] = [
        (6753.0, 9190.0, -11429249.0, 7426832.0),
        (5333.0, 7267.0, -8646143.0, 5396714.0),
        (4365.0, 5945.0, -8748475.0, 5983381.0),
        (4857.0, 6595.0, -7859164.0, 7034504.0),
        (5333.0, 7273.0, -4722533.0, 6541615.0),
        (6775.0, 9220.0, -2776035.0, 7816140.0),
        (5785.0, 7867.0, 37501.0, 6842000.0),
        (6752.0, 9215.0, 1347096.0, 6910353.0),
        (7720.0, 10543.0, 3974558.0, 4542661.0),
        (4360.0, 5918.0, -16496525.0, 8804134.0),
        (4345.0, 5945.0, -14809710.0, 9151131.0),
    ];
    let sx = f.w / 43200.0;
    let sy = f.h / 43200.0;
    PUFFS
        .iter()
        .fold(PathData::new().m(3900.0 * sx, 14370.0 * sy), |p, &(rx, ry, st, sw)| {
            p.arc_to(rx * sx, ry * sy, st / 60000.0, sw / 60000.0)
        })
        .z()
}

pub fn cloud_callout(f: &Frame) -> PathData {
    let t = tail(f);
    let (c, r) = (f.center(), f.half());
    let d = t.tip - c;
    let pang = (d.y * f.w).atan2(d.x * f.h).to_degrees();
    let edge = polar(c, r, pang);
    let ss = f.ss();
    // Three bubbles shrinking from the cloud's edge toward the tip.
    let bubbles = [
        (t.tip, ss * 600.0 / 21600.0),
        (edge + (t.tip - edge) * (2.0 / 3.0), ss * 1200.0 / 21600.0),
        (edge + (t.tip - edge) * (1.0 / 3.0), ss * 1800.0 / 21600.0),
    ];
    bubbles.iter().fold(cloud_outline(f), |p, &(at, rad)| {
        p.append(ellipse_path(at.x - rad, at.y - rad, 2.0 * rad, 2.0 * rad))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Adjustments;

    #[test]
    fn default_wedge_points_down_left() {
        let adj = Adjustments::new();
        let path = wedge_rect_callout(&Frame::new(120.0, 120.0, &adj)).build();
        // Tip at (hc - 25, vc + 75); the wedge leaves the bottom edge.
        assert_eq!(path, "M0,0 L120,0 L120,120 L50,120 L35,135 L20,120 L0,120 Z");
    }

    #[test]
    fn wedge_moves_to_the_side_the_tip_dominates() {
        let adj = Adjustments::new().with("adj1", 80000.0).with("adj2", -10000.0);
        let path = wedge_rect_callout(&Frame::new(120.0, 120.0, &adj)).build();
        assert_eq!(path, "M0,0 L120,0 L120,20 L156,48 L120,50 L120,120 L0,120 Z");
    }

    #[test]
    fn ellipse_callout_starts_at_tip() {
        let adj = Adjustments::new();
        let path = wedge_ellipse_callout(&Frame::new(120.0, 120.0, &adj)).build();
        assert!(path.starts_with("M35,135 L"), "{path}");
        assert_eq!(path.matches('A').count(), 1);
    }

    #[test]
    fn cloud_callout_has_bubbles() {
        let adj = Adjustments::new();
        let path = cloud_callout(&Frame::new(100.0, 80.0, &adj)).build();
        assert_eq!(path.matches('M').count(), 4);
        assert!(!path.contains("NaN"));
    }
}
