//! Block arrows and arrow callouts.
//!
//! Directional families are derived once pointing right (or left-right) in
//! a canonical frame and replayed through a [`Transform`] for the other
//! orientations. Vertical variants swap the frame's width and height before
//! the derivation so adjustment ranges follow the arrow's own axis.

use glam::{DVec2, dvec2};

use crate::geometry::{Frame, PathData, Sketch, Transform, safe_div};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dir {
    Right,
    Left,
    Down,
    Up,
}

impl Dir {
    /// `(along, across)` extents of the canonical frame.
    fn dims(self, f: &Frame) -> (f64, f64) {
        match self {
            Dir::Right | Dir::Left => (f.w, f.h),
            Dir::Down | Dir::Up => (f.h, f.w),
        }
    }

    fn transform(self, f: &Frame) -> Transform {
        match self {
            Dir::Right => Transform::IDENTITY,
            Dir::Left => Transform::mirror_x(f.w),
            Dir::Down => Transform::transpose(),
            Dir::Up => Transform::transpose().with_flip_y(f.h),
        }
    }
}

fn outline(points: &[DVec2]) -> Sketch {
    let Some((first, rest)) = points.split_first() else {
        return Sketch::new();
    };
    rest.iter()
        .fold(Sketch::new().m(first.x, first.y), |s, p| s.l(p.x, p.y))
        .z()
}

/// `100000 * len / ss`, the ratio bound used by most arrow adjustments.
fn ratio(f: &Frame, len: f64) -> f64 {
    safe_div(100000.0 * len, f.ss())
}

fn block_arrow(f: &Frame, dir: Dir) -> PathData {
    let (w, h) = dir.dims(f);
    let a1 = f.adj_pin("adj1", 50000.0, 0.0, 100000.0);
    let a2 = f.adj_pin("adj2", 50000.0, 0.0, ratio(f, w));
    let x1 = w - f.ssp(a2);
    let dy1 = h * a1 / 200000.0;
    let vc = h / 2.0;
    let (y1, y2) = (vc - dy1, vc + dy1);
    outline(&[
        dvec2(0.0, y1),
        dvec2(x1, y1),
        dvec2(x1, 0.0),
        dvec2(w, vc),
        dvec2(x1, h),
        dvec2(x1, y2),
        dvec2(0.0, y2),
    ])
    .render(dir.transform(f))
}

pub fn right_arrow(f: &Frame) -> PathData {
    block_arrow(f, Dir::Right)
}

pub fn left_arrow(f: &Frame) -> PathData {
    block_arrow(f, Dir::Left)
}

pub fn down_arrow(f: &Frame) -> PathData {
    block_arrow(f, Dir::Down)
}

pub fn up_arrow(f: &Frame) -> PathData {
    block_arrow(f, Dir::Up)
}

fn double_arrow(f: &Frame, dir: Dir) -> PathData {
    let (w, h) = dir.dims(f);
    let a1 = f.adj_pin("adj1", 50000.0, 0.0, 100000.0);
    let a2 = f.adj_pin("adj2", 50000.0, 0.0, ratio(f, w) / 2.0);
    let dx2 = f.ssp(a2);
    let x2 = w - dx2;
    let dy = h * a1 / 200000.0;
    let vc = h / 2.0;
    let (y1, y2) = (vc - dy, vc + dy);
    outline(&[
        dvec2(0.0, vc),
        dvec2(dx2, 0.0),
        dvec2(dx2, y1),
        dvec2(x2, y1),
        dvec2(x2, 0.0),
        dvec2(w, vc),
        dvec2(x2, h),
        dvec2(x2, y2),
        dvec2(dx2, y2),
        dvec2(dx2, h),
    ])
    .render(dir.transform(f))
}

pub fn left_right_arrow(f: &Frame) -> PathData {
    double_arrow(f, Dir::Right)
}

pub fn up_down_arrow(f: &Frame) -> PathData {
    double_arrow(f, Dir::Down)
}

/// Shared adjustments of the multi-headed arrows: shaft, head and head length.
fn multi_head_adj(f: &Frame, default: f64) -> (f64, f64, f64) {
    let a2 = f.adj_pin("adj2", default, 0.0, 50000.0);
    let a1 = f.adj_pin("adj1", default, 0.0, 2.0 * a2);
    let a3 = f.adj_pin("adj3", default, 0.0, (100000.0 - 2.0 * a2) / 2.0);
    (a1, a2, a3)
}

pub fn quad_arrow(f: &Frame) -> PathData {
    let (a1, a2, a3) = multi_head_adj(f, 22500.0);
    let (r, b, hc, vc) = (f.w, f.h, f.hc(), f.vc());
    let x1 = f.ssp(a3);
    let dx2 = f.ssp(a2);
    let dx3 = f.ssp(a1) / 2.0;
    let (x2, x5, x3, x4, x6) = (hc - dx2, hc + dx2, hc - dx3, hc + dx3, r - x1);
    let (y2, y5, y3, y4, y6) = (vc - dx2, vc + dx2, vc - dx3, vc + dx3, b - x1);
    outline(&[
        dvec2(0.0, vc),
        dvec2(x1, y2),
        dvec2(x1, y3),
        dvec2(x3, y3),
        dvec2(x3, x1),
        dvec2(x2, x1),
        dvec2(hc, 0.0),
        dvec2(x5, x1),
        dvec2(x4, x1),
        dvec2(x4, y3),
        dvec2(x6, y3),
        dvec2(x6, y2),
        dvec2(r, vc),
        dvec2(x6, y5),
        dvec2(x6, y4),
        dvec2(x4, y4),
        dvec2(x4, y6),
        dvec2(x5, y6),
        dvec2(hc, b),
        dvec2(x2, y6),
        dvec2(x3, y6),
        dvec2(x3, y4),
        dvec2(x1, y4),
        dvec2(x1, y5),
    ])
    .render(Transform::IDENTITY)
}

pub fn left_right_up_arrow(f: &Frame) -> PathData {
    let (a1, a2, a3) = multi_head_adj(f, 25000.0);
    let (r, b, hc) = (f.w, f.h, f.hc());
    let x1 = f.ssp(a3);
    let dx2 = f.ssp(a2);
    let dx3 = f.ssp(a1) / 2.0;
    let (x2, x5, x3, x4, x6) = (hc - dx2, hc + dx2, hc - dx3, hc + dx3, r - x1);
    let y2 = b - 2.0 * dx2;
    let y4 = b - dx2;
    let (y3, y5) = (y4 - dx3, y4 + dx3);
    outline(&[
        dvec2(0.0, y4),
        dvec2(x1, y2),
        dvec2(x1, y3),
        dvec2(x3, y3),
        dvec2(x3, x1),
        dvec2(x2, x1),
        dvec2(hc, 0.0),
        dvec2(x5, x1),
        dvec2(x4, x1),
        dvec2(x4, y3),
        dvec2(x6, y3),
        dvec2(x6, y2),
        dvec2(r, y4),
        dvec2(x6, b),
        dvec2(x6, y5),
        dvec2(x1, y5),
        dvec2(x1, b),
    ])
    .render(Transform::IDENTITY)
}

pub fn left_up_arrow(f: &Frame) -> PathData {
    let (a1, a2, a3) = multi_head_adj(f, 25000.0);
    let (r, b) = (f.w, f.h);
    let x1 = f.ssp(a3);
    let dx2 = f.ssp(a2);
    let (x2, y2) = (r - dx2, b - dx2);
    let (x4, y4) = (r - 2.0 * dx2, b - 2.0 * dx2);
    let dx3 = f.ssp(a1) / 2.0;
    let (x3, x5, y3, y5) = (x2 - dx3, x2 + dx3, y2 - dx3, y2 + dx3);
    outline(&[
        dvec2(0.0, y2),
        dvec2(x1, y4),
        dvec2(x1, y3),
        dvec2(x3, y3),
        dvec2(x3, x1),
        dvec2(x4, x1),
        dvec2(x2, 0.0),
        dvec2(r, x1),
        dvec2(x5, x1),
        dvec2(x5, y5),
        dvec2(x1, y5),
        dvec2(x1, b),
    ])
    .render(Transform::IDENTITY)
}

pub fn bent_up_arrow(f: &Frame) -> PathData {
    let a1 = f.adj_pin("adj1", 25000.0, 0.0, 50000.0);
    let a2 = f.adj_pin("adj2", 25000.0, 0.0, 50000.0);
    let a3 = f.adj_pin("adj3", 25000.0, 0.0, 50000.0);
    let (r, b) = (f.w, f.h);
    let y1 = f.ssp(a3);
    let x1 = r - 2.0 * f.ssp(a2);
    let x3 = r - f.ssp(a2);
    let dx2 = f.ssp(a1) / 2.0;
    let (x2, x4) = (x3 - dx2, x3 + dx2);
    let y2 = b - f.ssp(a1);
    outline(&[
        dvec2(0.0, y2),
        dvec2(x2, y2),
        dvec2(x2, y1),
        dvec2(x1, y1),
        dvec2(x3, 0.0),
        dvec2(r, y1),
        dvec2(x4, y1),
        dvec2(x4, b),
        dvec2(0.0, b),
    ])
    .render(Transform::IDENTITY)
}

pub fn bent_arrow(f: &Frame) -> PathData {
    let a2 = f.adj_pin("adj2", 25000.0, 0.0, 50000.0);
    let a1 = f.adj_pin("adj1", 25000.0, 0.0, 2.0 * a2);
    let a3 = f.adj_pin("adj3", 25000.0, 0.0, 50000.0);
    let (r, b) = (f.w, f.h);
    let th = f.ssp(a1);
    let aw2 = f.ssp(a2);
    let dh2 = aw2 - th / 2.0;
    let ah = f.ssp(a3);
    let bs = (r - ah).min(b - dh2);
    let a4 = f.adj_pin("adj4", 43750.0, 0.0, ratio(f, bs));
    let bd = f.ssp(a4);
    let bd2 = (bd - th).max(0.0);
    let x3 = th + bd2;
    let x4 = r - ah;
    let y3 = dh2 + th;
    let y4 = y3 + dh2;
    let y5 = dh2 + bd;
    PathData::new()
        .m(0.0, b)
        .l(0.0, y5)
        .arc_to(bd, bd, 180.0, 90.0)
        .l(x4, dh2)
        .l(x4, 0.0)
        .l(r, aw2)
        .l(x4, y4)
        .l(x4, y3)
        .l(x3, y3)
        .arc_to(bd2, bd2, 270.0, -90.0)
        .l(th, b)
        .z()
}

pub fn uturn_arrow(f: &Frame) -> PathData {
    let (r, b, ss) = (f.w, f.h, f.ss());
    let a2 = f.adj_pin("adj2", 25000.0, 0.0, 25000.0);
    let a1 = f.adj_pin("adj1", 25000.0, 0.0, 2.0 * a2);
    let q3 = 100000.0 - safe_div(a1 * ss, b);
    let a3 = f.adj_pin("adj3", 25000.0, 0.0, safe_div(q3 * b, ss));
    let min_a5 = safe_div((a3 + a1) * ss, b);
    let a5 = f.adj_pin("adj5", 75000.0, min_a5, 100000.0);
    let th = f.ssp(a1);
    let aw2 = f.ssp(a2);
    let dh2 = aw2 - th / 2.0;
    let y5 = f.hp(a5);
    let ah = f.ssp(a3);
    let y4 = y5 - ah;
    let x9 = r - dh2;
    let bs = (x9 / 2.0).min(y4);
    let a4 = f.adj_pin("adj4", 43750.0, 0.0, ratio(f, bs));
    let bd = f.ssp(a4);
    let bd2 = (bd - th).max(0.0);
    let x3 = th + bd2;
    let x8 = r - aw2;
    let x6 = x8 - aw2;
    let x7 = x6 + dh2;
    let x4 = x9 - bd;
    PathData::new()
        .m(0.0, b)
        .l(0.0, bd)
        .arc_to(bd, bd, 180.0, 90.0)
        .l(x4, 0.0)
        .arc_to(bd, bd, 270.0, 90.0)
        .l(x9, y4)
        .l(r, y4)
        .l(x8, y5)
        .l(x6, y4)
        .l(x7, y4)
        .l(x7, x3)
        .arc_to(bd2, bd2, 0.0, -90.0)
        .l(x3, th)
        .arc_to(bd2, bd2, 270.0, -90.0)
        .l(th, b)
        .z()
}

pub fn striped_right_arrow(f: &Frame) -> PathData {
    let a1 = f.adj_pin("adj1", 50000.0, 0.0, 100000.0);
    let a2 = f.adj_pin("adj2", 50000.0, 0.0, safe_div(84375.0 * f.w, f.ss()));
    let (r, b, vc, ss) = (f.w, f.h, f.vc(), f.ss());
    let x4 = ss * 5.0 / 32.0;
    let x5 = r - f.ssp(a2);
    let dy1 = b * a1 / 200000.0;
    let (y1, y2) = (vc - dy1, vc + dy1);
    let stripe = |x0: f64, x1: f64| outline(&[dvec2(x0, y1), dvec2(x1, y1), dvec2(x1, y2), dvec2(x0, y2)]);
    stripe(0.0, ss / 32.0)
        .extend(&stripe(ss / 16.0, ss / 8.0))
        .extend(&outline(&[
            dvec2(x4, y1),
            dvec2(x5, y1),
            dvec2(x5, 0.0),
            dvec2(r, vc),
            dvec2(x5, b),
            dvec2(x5, y2),
            dvec2(x4, y2),
        ]))
        .render(Transform::IDENTITY)
}

pub fn notched_right_arrow(f: &Frame) -> PathData {
    let a1 = f.adj_pin("adj1", 50000.0, 0.0, 100000.0);
    let a2 = f.adj_pin("adj2", 50000.0, 0.0, ratio(f, f.w));
    let (r, b, vc) = (f.w, f.h, f.vc());
    let dx2 = f.ssp(a2);
    let x2 = r - dx2;
    let dy1 = b * a1 / 200000.0;
    let x1 = safe_div(dy1 * dx2, b / 2.0);
    outline(&[
        dvec2(0.0, vc - dy1),
        dvec2(x2, vc - dy1),
        dvec2(x2, 0.0),
        dvec2(r, vc),
        dvec2(x2, b),
        dvec2(x2, vc + dy1),
        dvec2(0.0, vc + dy1),
        dvec2(x1, vc),
    ])
    .render(Transform::IDENTITY)
}

/// Sweeping stroke that tapers from the bottom-left corner into a head at
/// the top right. `adj1` is the head thickness, `adj2` its length.
pub fn swoosh_arrow(f: &Frame) -> PathData {
    let a1 = f.adj_pin("adj1", 25000.0, 1.0, 75000.0);
    let a2 = f.adj_pin("adj2", 16667.0, 0.0, safe_div(70000.0 * f.w, f.ss()));
    let (r, b) = (f.w, f.h);
    let ssd8 = f.ss() / 8.0;
    let ad1 = f.hp(a1);
    let xb = r - f.ssp(a2);
    let yb = ssd8;
    let tan = (90.0_f64 / 14.0).to_radians().tan();
    let dx0 = ssd8 * tan;
    let xc = xb - dx0;
    let yf = yb + ad1;
    let xf = xb + ad1 * tan;
    let xe = xf + dx0;
    let ye = yf + ssd8;
    let yd = ye / 2.0 + b / 20.0;
    PathData::new()
        .m(0.0, b)
        .q(r / 6.0, b / 3.0, xb, yb)
        .l(xc, 0.0)
        .l(r, yd)
        .l(xe, ye)
        .l(xf, yf)
        .q(r / 4.0, yf + b / 12.0, 0.0, b)
        .z()
}

fn arrow_callout(f: &Frame, dir: Dir) -> PathData {
    let (w, h) = dir.dims(f);
    let ss = f.ss();
    let a2 = f.adj_pin("adj2", 25000.0, 0.0, safe_div(50000.0 * h, ss));
    let a1 = f.adj_pin("adj1", 25000.0, 0.0, 2.0 * a2);
    let a3 = f.adj_pin("adj3", 25000.0, 0.0, safe_div(100000.0 * w, ss));
    let a4 = f.adj_pin("adj4", 64977.0, 0.0, 100000.0 - safe_div(a3 * ss, w));
    let vc = h / 2.0;
    let dy1 = f.ssp(a2);
    let dy2 = f.ssp(a1) / 2.0;
    let x3 = w - f.ssp(a3);
    let x2 = w * a4 / 100000.0;
    outline(&[
        dvec2(0.0, 0.0),
        dvec2(x2, 0.0),
        dvec2(x2, vc - dy2),
        dvec2(x3, vc - dy2),
        dvec2(x3, vc - dy1),
        dvec2(w, vc),
        dvec2(x3, vc + dy1),
        dvec2(x3, vc + dy2),
        dvec2(x2, vc + dy2),
        dvec2(x2, h),
        dvec2(0.0, h),
    ])
    .render(dir.transform(f))
}

pub fn right_arrow_callout(f: &Frame) -> PathData {
    arrow_callout(f, Dir::Right)
}

pub fn left_arrow_callout(f: &Frame) -> PathData {
    arrow_callout(f, Dir::Left)
}

pub fn down_arrow_callout(f: &Frame) -> PathData {
    arrow_callout(f, Dir::Down)
}

pub fn up_arrow_callout(f: &Frame) -> PathData {
    arrow_callout(f, Dir::Up)
}

fn double_arrow_callout(f: &Frame, dir: Dir) -> PathData {
    let (w, h) = dir.dims(f);
    let ss = f.ss();
    let a2 = f.adj_pin("adj2", 25000.0, 0.0, safe_div(50000.0 * h, ss));
    let a1 = f.adj_pin("adj1", 25000.0, 0.0, 2.0 * a2);
    let a3 = f.adj_pin("adj3", 25000.0, 0.0, safe_div(50000.0 * w, ss));
    let a4 = f.adj_pin("adj4", 48123.0, 0.0, 100000.0 - safe_div(a3 * ss, w / 2.0));
    let vc = h / 2.0;
    let hc = w / 2.0;
    let dy1 = f.ssp(a2);
    let dy2 = f.ssp(a1) / 2.0;
    let x1 = f.ssp(a3);
    let x4 = w - x1;
    let dx2 = w * a4 / 200000.0;
    let (x2, x3) = (hc - dx2, hc + dx2);
    let (y1, y2, y3, y4) = (vc - dy1, vc - dy2, vc + dy2, vc + dy1);
    outline(&[
        dvec2(0.0, vc),
        dvec2(x1, y1),
        dvec2(x1, y2),
        dvec2(x2, y2),
        dvec2(x2, 0.0),
        dvec2(x3, 0.0),
        dvec2(x3, y2),
        dvec2(x4, y2),
        dvec2(x4, y1),
        dvec2(w, vc),
        dvec2(x4, y4),
        dvec2(x4, y3),
        dvec2(x3, y3),
        dvec2(x3, h),
        dvec2(x2, h),
        dvec2(x2, y3),
        dvec2(x1, y3),
        dvec2(x1, y4),
    ])
    .render(dir.transform(f))
}

pub fn left_right_arrow_callout(f: &Frame) -> PathData {
    double_arrow_callout(f, Dir::Right)
}

pub fn up_down_arrow_callout(f: &Frame) -> PathData {
    double_arrow_callout(f, Dir::Down)
}

pub fn quad_arrow_callout(f: &Frame) -> PathData {
    let a2 = f.adj_pin("adj2", 18515.0, 0.0, 50000.0);
    let a1 = f.adj_pin("adj1", 18515.0, 0.0, 2.0 * a2);
    let a3 = f.adj_pin("adj3", 18515.0, 0.0, 50000.0 - a2);
    let a4 = f.adj_pin("adj4", 48123.0, a1, 100000.0 - 2.0 * a3);
    let (r, b, hc, vc) = (f.w, f.h, f.hc(), f.vc());
    let dx2 = f.ssp(a2);
    let dx3 = f.ssp(a1) / 2.0;
    let ah = f.ssp(a3);
    let dx1 = r * a4 / 200000.0;
    let dy1 = b * a4 / 200000.0;
    let (x8, y8) = (r - ah, b - ah);
    let (x2, x7, x3, x6, x4, x5) = (hc - dx1, hc + dx1, hc - dx2, hc + dx2, hc - dx3, hc + dx3);
    let (y2, y7, y3, y6, y4, y5) = (vc - dy1, vc + dy1, vc - dx2, vc + dx2, vc - dx3, vc + dx3);
    outline(&[
        dvec2(0.0, vc),
        dvec2(ah, y3),
        dvec2(ah, y4),
        dvec2(x2, y4),
        dvec2(x2, y2),
        dvec2(x4, y2),
        dvec2(x4, ah),
        dvec2(x3, ah),
        dvec2(hc, 0.0),
        dvec2(x6, ah),
        dvec2(x5, ah),
        dvec2(x5, y2),
        dvec2(x7, y2),
        dvec2(x7, y4),
        dvec2(x8, y4),
        dvec2(x8, y3),
        dvec2(r, vc),
        dvec2(x8, y6),
        dvec2(x8, y5),
        dvec2(x7, y5),
        dvec2(x7, y7),
        dvec2(x5, y7),
        dvec2(x5, y8),
        dvec2(x6, y8),
        dvec2(hc, b),
        dvec2(x3, y8),
        dvec2(x4, y8),
        dvec2(x4, y7),
        dvec2(x2, y7),
        dvec2(x2, y5),
        dvec2(ah, y5),
        dvec2(ah, y6),
    ])
    .render(Transform::IDENTITY)
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
    fn right_arrow_default() {
        assert_eq!(
            draw(right_arrow, 100.0, 50.0),
            "M0,12.5 L75,12.5 L75,0 L100,25 L75,50 L75,37.5 L0,37.5 Z"
        );
    }

    #[test]
    fn swoosh_sweeps_up_to_its_head() {
        let path = draw(swoosh_arrow, 100.0, 100.0);
        assert!(path.starts_with("M0,100 Q16.667,33.333 83.333,12.5 L"), "{path}");
        assert!(path.ends_with(" 0,100 Z"), "{path}");
        assert_eq!(path.matches('Q').count(), 2);
    }

    #[test]
    fn left_arrow_is_mirrored() {
        assert_eq!(
            draw(left_arrow, 100.0, 50.0),
            "M100,12.5 L25,12.5 L25,0 L0,25 L25,50 L25,37.5 L100,37.5 Z"
        );
    }

    #[test]
    fn vertical_arrows_point_along_height() {
        let down = draw(down_arrow, 50.0, 100.0);
        assert!(down.contains("L25,100"), "{down}");
        let up = draw(up_arrow, 50.0, 100.0);
        assert!(up.contains("L25,0"), "{up}");
    }
}
