//! Math operator shapes.

use glam::dvec2;

use crate::geometry::path::{polygon, rect_path};
use crate::geometry::{Frame, PathData, safe_div};

/// Half of the standard operator span, `73490 / 200000` of a side.
const SPAN: f64 = 73490.0 / 200000.0;

pub fn math_plus(f: &Frame) -> PathData {
    let a1 = f.adj_pin("adj1", 23520.0, 0.0, 73490.0);
    let (hc, vc) = (f.hc(), f.vc());
    let (dx1, dy1) = (f.w * SPAN, f.h * SPAN);
    let dx2 = f.ss() * a1 / 200000.0;
    let (x1, x2, x3, x4) = (hc - dx1, hc - dx2, hc + dx2, hc + dx1);
    let (y1, y2, y3, y4) = (vc - dy1, vc - dx2, vc + dx2, vc + dy1);
    polygon(&[
        dvec2(x1, y2),
        dvec2(x2, y2),
        dvec2(x2, y1),
        dvec2(x3, y1),
        dvec2(x3, y2),
        dvec2(x4, y2),
        dvec2(x4, y3),
        dvec2(x3, y3),
        dvec2(x3, y4),
        dvec2(x2, y4),
        dvec2(x2, y3),
        dvec2(x1, y3),
    ])
}

pub fn math_minus(f: &Frame) -> PathData {
    let a1 = f.adj_pin("adj1", 23520.0, 0.0, 100000.0);
    let dy1 = f.h * a1 / 200000.0;
    let dx1 = f.w * SPAN;
    rect_path(f.hc() - dx1, f.vc() - dy1, 2.0 * dx1, 2.0 * dy1)
}

pub fn math_equal(f: &Frame) -> PathData {
    let a1 = f.adj_pin("adj1", 23520.0, 0.0, 36745.0);
    let a2 = f.adj_pin("adj2", 11760.0, 0.0, 100000.0 - 2.0 * a1);
    let dy1 = f.hp(a1);
    let dy2 = f.h * a2 / 200000.0;
    let dx1 = f.w * SPAN;
    let x1 = f.hc() - dx1;
    let (y2, y3) = (f.vc() - dy2, f.vc() + dy2);
    rect_path(x1, y2 - dy1, 2.0 * dx1, dy1).append(rect_path(x1, y3, 2.0 * dx1, dy1))
}

pub fn math_multiply(f: &Frame) -> PathData {
    let a1 = f.adj_pin("adj1", 23520.0, 0.0, 51965.0);
    let (r, b, hc, vc) = (f.w, f.h, f.hc(), f.vc());
    let th = f.ssp(a1);
    let a = b.atan2(r);
    let (sa, ca) = a.sin_cos();
    let ta = safe_div(b, r);
    let dl = r.hypot(b);
    let lm = dl - dl * 51965.0 / 100000.0;
    let (xm, ym) = (ca * lm / 2.0, sa * lm / 2.0);
    let (dxam, dyam) = (sa * th / 2.0, ca * th / 2.0);
    let (xa, ya) = (xm - dxam, ym + dyam);
    let (xb, yb) = (xm + dxam, ym - dyam);
    let yc = (hc - xb) * ta + yb;
    let (xd, xe) = (r - xb, r - xa);
    let xfe = safe_div(vc - ya, ta);
    let (xf, xl) = (xe - xfe, xa + xfe);
    let (yg, yh, yi) = (b - ya, b - yb, b - yc);
    polygon(&[
        dvec2(xa, ya),
        dvec2(xb, yb),
        dvec2(hc, yc),
        dvec2(xd, yb),
        dvec2(xe, ya),
        dvec2(xf, vc),
        dvec2(xe, yg),
        dvec2(xd, yh),
        dvec2(hc, yi),
        dvec2(xb, yh),
        dvec2(xa, yg),
        dvec2(xl, vc),
    ])
}

pub fn math_divide(f: &Frame) -> PathData {
    let a1 = f.adj_pin("adj1", 23520.0, 1000.0, 36745.0);
    let max_a3 = ((73490.0 - a1) / 4.0).min(safe_div(36745.0 * f.w, f.h));
    let a3 = f.adj_pin("adj3", 11760.0, 1000.0, max_a3);
    let a2 = f.adj_pin("adj2", 5880.0, 0.0, 73490.0 - 4.0 * a3 - a1);
    let (hc, vc, b) = (f.hc(), f.vc(), f.h);
    let dy1 = b * a1 / 200000.0;
    let yg = f.hp(a2);
    let rad = f.hp(a3);
    let dx1 = f.w * SPAN;
    let y3 = vc - dy1;
    let y2 = y3 - (yg + rad);
    let y1 = y2 - rad;
    let y5 = b - y1;
    let dot = |y: f64, st: f64| PathData::new().m(hc, y).arc_to(rad, rad, st, 360.0).z();
    dot(y1, 270.0)
        .append(dot(y5, 90.0))
        .append(rect_path(hc - dx1, y3, 2.0 * dx1, 2.0 * dy1))
}

pub fn math_not_equal(f: &Frame) -> PathData {
    let a1 = f.adj_pin("adj1", 23520.0, 0.0, 50000.0);
    let cr_ang = f.adj_pin("adj2", 6600000.0, 4200000.0, 6600000.0) / 60000.0;
    let a3 = f.adj_pin("adj3", 11760.0, 0.0, 100000.0 - 2.0 * a1);
    let (hc, vc, b) = (f.hc(), f.vc(), f.h);
    let hd2 = b / 2.0;
    let dy1 = f.hp(a1);
    let dy2 = b * a3 / 200000.0;
    let dx1 = f.w * SPAN;
    let (x1, x8) = (hc - dx1, hc + dx1);
    let (y2, y3) = (vc - dy2, vc + dy2);
    let (y1, y4) = (y2 - dy1, y3 + dy1);

    // Slash leaning `cr_ang - 90` degrees off vertical.
    let xadj2 = hd2 * (cr_ang - 90.0).to_radians().tan();
    let len = xadj2.hypot(hd2);
    let bhw = safe_div(len * dy1, hd2);
    let x7 = hc + xadj2 - bhw / 2.0;
    let along = |y: f64| x7 - safe_div(xadj2 * y, hd2);
    let (x6, x5, x4, x3) = (along(y1), along(y2), along(y3), along(y4));
    let x2 = x7 - 2.0 * xadj2;
    polygon(&[
        dvec2(x1, y1),
        dvec2(x6, y1),
        dvec2(x7, 0.0),
        dvec2(x7 + bhw, 0.0),
        dvec2(x6 + bhw, y1),
        dvec2(x8, y1),
        dvec2(x8, y2),
        dvec2(x5 + bhw, y2),
        dvec2(x4 + bhw, y3),
        dvec2(x8, y3),
        dvec2(x8, y4),
        dvec2(x3 + bhw, y4),
        dvec2(x2 + bhw, b),
        dvec2(x2, b),
        dvec2(x3, y4),
        dvec2(x1, y4),
        dvec2(x1, y3),
        dvec2(x4, y3),
        dvec2(x5, y2),
        dvec2(x1, y2),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Adjustments;

    fn draw(g: fn(&Frame) -> PathData, w: f64, h: f64) -> String {
        let adj = Adjustments::new();
        g(&Frame::new(w, h, &adj)).build()
    }

    #[test]
    fn minus_is_centered_bar() {
        assert_eq!(draw(math_minus, 200000.0, 200000.0).split(' ').next(), Some("M26510,76480"));
    }

    #[test]
    fn equal_has_two_bars() {
        assert_eq!(draw(math_equal, 100.0, 100.0).matches('M').count(), 2);
    }

    #[test]
    fn degenerate_frames_stay_finite() {
        for g in [math_plus, math_multiply, math_divide, math_not_equal] {
            for (w, h) in [(0.0, 0.0), (0.0, 40.0), (40.0, 0.0)] {
                let path = draw(g, w, h);
                assert!(!path.contains("NaN") && !path.contains("inf"), "{path}");
            }
        }
    }
}
