//! Basic polygons: triangles, quadrilaterals, regular n-gons, plus/frame shapes.

use glam::dvec2;

use crate::geometry::path::{ellipse_path, polygon, rect_path};
use crate::geometry::{Frame, PathData};

pub fn rect(f: &Frame) -> PathData {
    rect_path(0.0, 0.0, f.w, f.h)
}

pub fn ellipse(f: &Frame) -> PathData {
    ellipse_path(0.0, 0.0, f.w, f.h)
}

pub fn round_rect(f: &Frame) -> PathData {
    let a = f.adj_pin("adj", 16667.0, 0.0, 50000.0);
    let x1 = f.ssp(a);
    let (r, b) = (f.w, f.h);
    PathData::new()
        .m(0.0, x1)
        .arc_to(x1, x1, 180.0, 90.0)
        .l(r - x1, 0.0)
        .arc_to(x1, x1, 270.0, 90.0)
        .l(r, b - x1)
        .arc_to(x1, x1, 0.0, 90.0)
        .l(x1, b)
        .arc_to(x1, x1, 90.0, 90.0)
        .z()
}

pub fn triangle(f: &Frame) -> PathData {
    let a = f.adj_pin("adj", 50000.0, 0.0, 100000.0);
    let x1 = f.wp(a);
    polygon(&[dvec2(0.0, f.h), dvec2(x1, 0.0), dvec2(f.w, f.h)])
}

pub fn rt_triangle(f: &Frame) -> PathData {
    polygon(&[dvec2(0.0, f.h), dvec2(0.0, 0.0), dvec2(f.w, f.h)])
}

pub fn diamond(f: &Frame) -> PathData {
    let (hc, vc) = (f.hc(), f.vc());
    polygon(&[dvec2(0.0, vc), dvec2(hc, 0.0), dvec2(f.w, vc), dvec2(hc, f.h)])
}

pub fn parallelogram(f: &Frame) -> PathData {
    let a = f.adj_pin("adj", 25000.0, 0.0, f.max_w_ratio());
    let x2 = f.ssp(a);
    polygon(&[
        dvec2(0.0, f.h),
        dvec2(x2, 0.0),
        dvec2(f.w, 0.0),
        dvec2(f.w - x2, f.h),
    ])
}

pub fn trapezoid(f: &Frame) -> PathData {
    let a = f.adj_pin("adj", 25000.0, 0.0, f.max_w_ratio() / 2.0);
    let x2 = f.ssp(a);
    polygon(&[
        dvec2(0.0, f.h),
        dvec2(x2, 0.0),
        dvec2(f.w - x2, 0.0),
        dvec2(f.w, f.h),
    ])
}

pub fn non_isosceles_trapezoid(f: &Frame) -> PathData {
    let max = f.max_w_ratio() / 2.0;
    let a1 = f.adj_pin("adj1", 25000.0, 0.0, max);
    let a2 = f.adj_pin("adj2", 25000.0, 0.0, max);
    polygon(&[
        dvec2(0.0, f.h),
        dvec2(f.ssp(a1), 0.0),
        dvec2(f.w - f.ssp(a2), 0.0),
        dvec2(f.w, f.h),
    ])
}

pub fn pentagon(f: &Frame) -> PathData {
    let hf = f.adj("hf", 105146.0);
    let vf = f.adj("vf", 110557.0);
    let swd2 = f.w / 2.0 * hf / 100000.0;
    let shd2 = f.h / 2.0 * vf / 100000.0;
    let svc = f.vc() * vf / 100000.0;
    let dx1 = swd2 * 18f64.to_radians().cos();
    let dx2 = swd2 * 306f64.to_radians().cos();
    let dy1 = shd2 * 18f64.to_radians().sin();
    let dy2 = shd2 * 306f64.to_radians().sin();
    let hc = f.hc();
    let (y1, y2) = (svc - dy1, svc - dy2);
    polygon(&[
        dvec2(hc - dx1, y1),
        dvec2(hc, 0.0),
        dvec2(hc + dx1, y1),
        dvec2(hc + dx2, y2),
        dvec2(hc - dx2, y2),
    ])
}

pub fn hexagon(f: &Frame) -> PathData {
    // The inset is bounded by half the width measured in short-side units.
    let a = f.adj_pin("adj", 25000.0, 0.0, f.max_w_ratio() / 2.0);
    let vf = f.adj("vf", 115470.0);
    let shd2 = f.h / 2.0 * vf / 100000.0;
    let x1 = f.ssp(a);
    let x2 = f.w - x1;
    let dy1 = shd2 * 60f64.to_radians().sin();
    let vc = f.vc();
    let (y1, y2) = (vc - dy1, vc + dy1);
    polygon(&[
        dvec2(0.0, vc),
        dvec2(x1, y1),
        dvec2(x2, y1),
        dvec2(f.w, vc),
        dvec2(x2, y2),
        dvec2(x1, y2),
    ])
}

pub fn heptagon(f: &Frame) -> PathData {
    let hf = f.adj("hf", 102572.0);
    let vf = f.adj("vf", 105210.0);
    let swd2 = f.w / 2.0 * hf / 100000.0;
    let shd2 = f.h / 2.0 * vf / 100000.0;
    let svc = f.vc() * vf / 100000.0;
    let dx1 = swd2 * 97493.0 / 100000.0;
    let dx2 = swd2 * 78183.0 / 100000.0;
    let dx3 = swd2 * 43388.0 / 100000.0;
    let dy1 = shd2 * 62349.0 / 100000.0;
    let dy2 = shd2 * 22252.0 / 100000.0;
    let dy3 = shd2 * 90097.0 / 100000.0;
    let hc = f.hc();
    let (y1, y2, y3) = (svc - dy1, svc + dy2, svc + dy3);
    polygon(&[
        dvec2(hc - dx1, y2),
        dvec2(hc - dx2, y1),
        dvec2(hc, 0.0),
        dvec2(hc + dx2, y1),
        dvec2(hc + dx1, y2),
        dvec2(hc + dx3, y3),
        dvec2(hc - dx3, y3),
    ])
}

pub fn octagon(f: &Frame) -> PathData {
    let a = f.adj_pin("adj", 29289.0, 0.0, 50000.0);
    let x1 = f.ssp(a);
    let (r, b) = (f.w, f.h);
    polygon(&[
        dvec2(0.0, x1),
        dvec2(x1, 0.0),
        dvec2(r - x1, 0.0),
        dvec2(r, x1),
        dvec2(r, b - x1),
        dvec2(r - x1, b),
        dvec2(x1, b),
        dvec2(0.0, b - x1),
    ])
}

pub fn decagon(f: &Frame) -> PathData {
    let vf = f.adj("vf", 105146.0);
    let shd2 = f.h / 2.0 * vf / 100000.0;
    let wd2 = f.w / 2.0;
    let dx1 = wd2 * 36f64.to_radians().cos();
    let dx2 = wd2 * 72f64.to_radians().cos();
    let dy1 = shd2 * 72f64.to_radians().sin();
    let dy2 = shd2 * 36f64.to_radians().sin();
    let (hc, vc) = (f.hc(), f.vc());
    let (x1, x2, x3, x4) = (hc - dx1, hc - dx2, hc + dx2, hc + dx1);
    let (y1, y2, y3, y4) = (vc - dy1, vc - dy2, vc + dy2, vc + dy1);
    polygon(&[
        dvec2(0.0, vc),
        dvec2(x1, y2),
        dvec2(x2, y1),
        dvec2(x3, y1),
        dvec2(x4, y2),
        dvec2(f.w, vc),
        dvec2(x4, y3),
        dvec2(x3, y4),
        dvec2(x2, y4),
        dvec2(x1, y3),
    ])
}

pub fn dodecagon(f: &Frame) -> PathData {
    let k = |v: f64, n: f64| v * n / 21600.0;
    let (w, h) = (f.w, f.h);
    let (x1, x2, x3, x4) = (k(w, 2894.0), k(w, 7906.0), k(w, 13694.0), k(w, 18706.0));
    let (y1, y2, y3, y4) = (k(h, 2894.0), k(h, 7906.0), k(h, 13694.0), k(h, 18706.0));
    polygon(&[
        dvec2(0.0, y2),
        dvec2(x1, y1),
        dvec2(x2, 0.0),
        dvec2(x3, 0.0),
        dvec2(x4, y1),
        dvec2(w, y2),
        dvec2(w, y3),
        dvec2(x4, y4),
        dvec2(x3, h),
        dvec2(x2, h),
        dvec2(x1, y4),
        dvec2(0.0, y3),
    ])
}

pub fn plus(f: &Frame) -> PathData {
    let a = f.adj_pin("adj", 25000.0, 0.0, 50000.0);
    let x1 = f.ssp(a);
    let (r, b) = (f.w, f.h);
    let (x2, y2) = (r - x1, b - x1);
    polygon(&[
        dvec2(0.0, x1),
        dvec2(x1, x1),
        dvec2(x1, 0.0),
        dvec2(x2, 0.0),
        dvec2(x2, x1),
        dvec2(r, x1),
        dvec2(r, y2),
        dvec2(x2, y2),
        dvec2(x2, b),
        dvec2(x1, b),
        dvec2(x1, y2),
        dvec2(0.0, y2),
    ])
}

pub fn frame(f: &Frame) -> PathData {
    let a = f.adj_pin("adj1", 12500.0, 0.0, 50000.0);
    let x1 = f.ssp(a);
    let (r, b) = (f.w, f.h);
    let outer = rect_path(0.0, 0.0, r, b);
    let inner = polygon(&[
        dvec2(x1, x1),
        dvec2(x1, b - x1),
        dvec2(r - x1, b - x1),
        dvec2(r - x1, x1),
    ]);
    outer.append(inner)
}

pub fn half_frame(f: &Frame) -> PathData {
    let a2 = f.adj_pin("adj2", 33333.0, 0.0, f.max_w_ratio());
    let x1 = f.ssp(a2);
    let g1 = crate::geometry::safe_div(f.h * x1, f.w);
    let g2 = f.h - g1;
    let max_adj1 = crate::geometry::safe_div(100000.0 * g2, f.ss());
    let a1 = f.adj_pin("adj1", 33333.0, 0.0, max_adj1);
    let y1 = f.ssp(a1);
    let dx2 = crate::geometry::safe_div(y1 * f.w, f.h);
    let dy2 = crate::geometry::safe_div(x1 * f.h, f.w);
    polygon(&[
        dvec2(0.0, 0.0),
        dvec2(f.w, 0.0),
        dvec2(f.w - dx2, y1),
        dvec2(x1, y1),
        dvec2(x1, f.h - dy2),
        dvec2(0.0, f.h),
    ])
}

pub fn corner(f: &Frame) -> PathData {
    let a1 = f.adj_pin("adj1", 50000.0, 0.0, f.max_h_ratio());
    let a2 = f.adj_pin("adj2", 50000.0, 0.0, f.max_w_ratio());
    let x1 = f.ssp(a2);
    let y1 = f.h - f.ssp(a1);
    polygon(&[
        dvec2(0.0, 0.0),
        dvec2(x1, 0.0),
        dvec2(x1, y1),
        dvec2(f.w, y1),
        dvec2(f.w, f.h),
        dvec2(0.0, f.h),
    ])
}

pub fn diag_stripe(f: &Frame) -> PathData {
    let a = f.adj_pin("adj", 50000.0, 0.0, 100000.0);
    polygon(&[
        dvec2(0.0, f.hp(a)),
        dvec2(f.wp(a), 0.0),
        dvec2(f.w, 0.0),
        dvec2(0.0, f.h),
    ])
}

pub fn home_plate(f: &Frame) -> PathData {
    let a = f.adj_pin("adj", 50000.0, 0.0, f.max_w_ratio());
    let x1 = f.w - f.ssp(a);
    polygon(&[
        dvec2(0.0, 0.0),
        dvec2(x1, 0.0),
        dvec2(f.w, f.vc()),
        dvec2(x1, f.h),
        dvec2(0.0, f.h),
    ])
}

pub fn chevron(f: &Frame) -> PathData {
    let a = f.adj_pin("adj", 50000.0, 0.0, f.max_w_ratio());
    let x1 = f.ssp(a);
    let x2 = f.w - x1;
    polygon(&[
        dvec2(0.0, 0.0),
        dvec2(x2, 0.0),
        dvec2(f.w, f.vc()),
        dvec2(x2, f.h),
        dvec2(0.0, f.h),
        dvec2(x1, f.vc()),
    ])
}

pub fn plaque(f: &Frame) -> PathData {
    let a = f.adj_pin("adj", 16667.0, 0.0, 50000.0);
    let x1 = f.ssp(a);
    let (r, b) = (f.w, f.h);
    PathData::new()
        .m(0.0, x1)
        .arc_to(x1, x1, 90.0, -90.0)
        .l(r - x1, 0.0)
        .arc_to(x1, x1, 180.0, -90.0)
        .l(r, b - x1)
        .arc_to(x1, x1, 270.0, -90.0)
        .l(x1, b)
        .arc_to(x1, x1, 0.0, -90.0)
        .z()
}
