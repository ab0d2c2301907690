//! Shapes built from elliptical arcs: pies, chords, rings and friends.

use glam::{DVec2, dvec2};

use crate::geometry::arc::{ellipse_point, sweep_between};
use crate::geometry::path::ellipse_path;
use crate::geometry::{Frame, PathData, safe_div};

/// Largest angle adjustment accepted by the angle-driven shapes.
const MAX_ANGLE: f64 = 21599999.0;

fn angle(f: &Frame, name: &str, default: f64) -> f64 {
    f.adj_pin(name, default, 0.0, MAX_ANGLE) / 60000.0
}

/// `at2` guide operator in degrees, `(-180, 180]`.
fn at2(x: f64, y: f64) -> f64 {
    y.atan2(x).to_degrees()
}

pub fn pie(f: &Frame) -> PathData {
    let st = angle(f, "adj1", 0.0);
    let en = angle(f, "adj2", 16200000.0);
    let sw = sweep_between(st, en);
    let (c, r) = (f.center(), f.half());
    PathData::new()
        .mv(ellipse_point(c, r, st))
        .arc_to(r.x, r.y, st, sw)
        .ln(c)
        .z()
}

pub fn pie_wedge(f: &Frame) -> PathData {
    PathData::new()
        .m(0.0, f.h)
        .arc_to(f.w, f.h, 180.0, 90.0)
        .l(f.w, f.h)
        .z()
}

pub fn chord(f: &Frame) -> PathData {
    let st = angle(f, "adj1", 2700000.0);
    let en = angle(f, "adj2", 16200000.0);
    let sw = sweep_between(st, en);
    let (c, r) = (f.center(), f.half());
    PathData::new()
        .mv(ellipse_point(c, r, st))
        .arc_to(r.x, r.y, st, sw)
        .z()
}

/// Open elliptical arc; stroke only.
pub fn arc(f: &Frame) -> PathData {
    let st = angle(f, "adj1", 16200000.0);
    let en = angle(f, "adj2", 0.0);
    let sw = sweep_between(st, en);
    let (c, r) = (f.center(), f.half());
    PathData::new().mv(ellipse_point(c, r, st)).arc_to(r.x, r.y, st, sw)
}

pub fn block_arc(f: &Frame) -> PathData {
    let st = angle(f, "adj1", 10800000.0);
    let ist = angle(f, "adj2", 0.0);
    let a3 = f.adj_pin("adj3", 25000.0, 0.0, 50000.0);
    let sw = sweep_between(st, ist);
    let (c, r) = (f.center(), f.half());
    let dr = f.ssp(a3);
    let ir = (r - DVec2::splat(dr)).max(DVec2::ZERO);
    PathData::new()
        .mv(ellipse_point(c, r, st))
        .arc_to(r.x, r.y, st, sw)
        .ln(ellipse_point(c, ir, ist))
        .arc_to(ir.x, ir.y, ist, -sw)
        .z()
}

pub fn donut(f: &Frame) -> PathData {
    let a = f.adj_pin("adj", 25000.0, 0.0, 50000.0);
    let dr = f.ssp(a);
    let (iw, ih) = ((f.w / 2.0 - dr).max(0.0), (f.h / 2.0 - dr).max(0.0));
    let vc = f.vc();
    let inner = PathData::new()
        .m(dr, vc)
        .arc_to(iw, ih, 180.0, -360.0)
        .z();
    ellipse_path(0.0, 0.0, f.w, f.h).append(inner)
}

pub fn no_smoking(f: &Frame) -> PathData {
    let a = f.adj_pin("adj", 18750.0, 0.0, 50000.0);
    let dr = f.ssp(a);
    let c = f.center();
    let ir = dvec2((f.w / 2.0 - dr).max(0.0), (f.h / 2.0 - dr).max(0.0));

    // Bar half-width measured against the inner radius along the diagonal.
    let diag = at2(f.w, f.h);
    let n = (ellipse_point(DVec2::ZERO, ir, diag)).length();
    let dang = at2(n, dr / 2.0);
    let sw = 2.0 * dang - 180.0;
    let st1 = diag - dang;
    let st2 = st1 - 180.0;

    let bar = |st: f64| {
        PathData::new()
            .mv(ellipse_point(c, ir, st))
            .arc_to(ir.x, ir.y, st, sw)
            .z()
    };
    ellipse_path(0.0, 0.0, f.w, f.h).append(bar(st1)).append(bar(st2))
}

pub fn teardrop(f: &Frame) -> PathData {
    let a = f.adj_pin("adj", 100000.0, 0.0, 200000.0);
    let (hc, vc) = (f.hc(), f.vc());
    let (wd2, hd2) = (f.w / 2.0, f.h / 2.0);
    let r2 = std::f64::consts::SQRT_2;
    let sw = r2 * wd2 * a / 100000.0;
    let sh = r2 * hd2 * a / 100000.0;
    let x1 = hc + sw * 45f64.to_radians().cos();
    let y1 = vc - sh * 45f64.to_radians().sin();
    let x2 = (hc + x1) / 2.0;
    let y2 = (vc + y1) / 2.0;
    PathData::new()
        .m(0.0, vc)
        .arc_to(wd2, hd2, 180.0, 90.0)
        .q(x2, 0.0, x1, y1)
        .q(f.w, y2, f.w, vc)
        .arc_to(wd2, hd2, 0.0, 90.0)
        .arc_to(wd2, hd2, 90.0, 90.0)
        .z()
}

/// Crescent: the outer half-ellipse closed by a fitted inner arc that
/// passes through the inner point at distance `adj` from the left edge.
pub fn moon(f: &Frame) -> PathData {
    let a = f.adj_pin("adj", 50000.0, 0.0, 87500.0);
    let ss = f.ss();
    let hd2 = f.h / 2.0;
    let g0 = f.ssp(a);
    let g0w = safe_div(g0 * f.w, ss);
    let g1 = ss - g0;
    let g2 = safe_div(g0 * g0, g1);
    let g3 = safe_div(ss * ss, g1);
    let g5 = 2.0 * g3 - g2;
    let g6w = safe_div((g5 - g0) * f.w, ss);
    let g8 = g5 / 2.0 - g0;
    let dy1 = safe_div(g8 * hd2, ss);
    let g18w = (g6w - g0w) / 2.0;
    let dx2 = f.w - g0w - g18w;
    let st1 = at2(dx2, -hd2);
    let sw1 = at2(dx2, hd2) - 360.0 - st1;
    PathData::new()
        .m(f.w, f.h)
        .arc_to(f.w, hd2, 90.0, 180.0)
        .arc_to(g18w, dy1, st1, sw1)
        .z()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Adjustments;

    fn draw(g: fn(&Frame) -> PathData, w: f64, h: f64, adj: &Adjustments) -> String {
        g(&Frame::new(w, h, adj)).build()
    }

    #[test]
    fn default_pie_is_three_quarters() {
        let path = draw(pie, 100.0, 100.0, &Adjustments::new());
        assert_eq!(path, "M100,50 A50,50 0 1,1 50,0 L50,50 Z");
    }

    #[test]
    fn equal_angles_draw_the_whole_ellipse() {
        let adj = Adjustments::new().with("adj1", 5400000.0).with("adj2", 5400000.0);
        assert_eq!(
            draw(pie, 100.0, 100.0, &adj),
            "M50,100 A50,50 0 0,1 50,0 A50,50 0 0,1 50,100 L50,50 Z"
        );
        assert_eq!(
            draw(chord, 100.0, 100.0, &adj),
            "M50,100 A50,50 0 0,1 50,0 A50,50 0 0,1 50,100 Z"
        );
        assert_eq!(draw(arc, 100.0, 100.0, &adj).matches('A').count(), 2);
        assert_eq!(draw(block_arc, 100.0, 100.0, &adj).matches('A').count(), 4);
    }

    #[test]
    fn near_full_pie_keeps_its_disk() {
        let adj = Adjustments::new().with("adj1", 0.0).with("adj2", 21600000.0);
        assert_eq!(
            draw(pie, 100.0, 100.0, &adj),
            "M100,50 A50,50 0 0,1 0,50 A50,50 0 0,1 100,50 L50,50 Z"
        );
    }

    #[test]
    fn pie_wedge_quarter() {
        let path = draw(pie_wedge, 40.0, 20.0, &Adjustments::new());
        assert_eq!(path, "M0,20 A40,20 0 0,1 40,0 L40,20 Z");
    }

    #[test]
    fn moon_inner_arc_meets_corners() {
        let path = draw(moon, 100.0, 100.0, &Adjustments::new());
        assert_eq!(path, "M100,100 A100,50 0 0,1 100,0 A125,62.5 0 0,0 100,100 Z");
    }

    #[test]
    fn donut_has_two_rings() {
        let path = draw(donut, 100.0, 100.0, &Adjustments::new());
        assert_eq!(path.matches('M').count(), 2);
        assert!(path.contains("M25,50 A25,25 0 0,0 75,50 A25,25 0 0,0 25,50 Z"), "{path}");
    }
}
