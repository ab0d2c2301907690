//! Brackets and braces. Open, stroke-only outlines.

use crate::geometry::{Frame, PathData, Sketch, Transform, safe_div};

fn left_bracket_sketch(f: &Frame) -> Sketch {
    let a = f.adj_pin("adj", 8333.0, 0.0, safe_div(50000.0 * f.h, f.ss()));
    let y1 = f.ssp(a);
    let (r, b) = (f.w, f.h);
    Sketch::new()
        .m(r, b)
        .arc(r, y1, 90.0, 90.0)
        .l(0.0, y1)
        .arc(r, y1, 180.0, 90.0)
}

pub fn left_bracket(f: &Frame) -> PathData {
    left_bracket_sketch(f).render(Transform::IDENTITY)
}

pub fn right_bracket(f: &Frame) -> PathData {
    left_bracket_sketch(f).render(Transform::mirror_x(f.w))
}

fn left_brace_sketch(f: &Frame) -> Sketch {
    let a2 = f.adj_pin("adj2", 50000.0, 0.0, 100000.0);
    let q3 = (100000.0 - a2).min(a2) / 2.0;
    let a1 = f.adj_pin("adj1", 8333.0, 0.0, safe_div(q3 * f.h, f.ss()));
    let (r, b, hc) = (f.w, f.h, f.hc());
    let wd2 = r / 2.0;
    let y1 = f.ssp(a1);
    let y3 = f.hp(a2);
    Sketch::new()
        .m(r, b)
        .arc(wd2, y1, 90.0, 90.0)
        .l(hc, y3 + y1)
        .arc(wd2, y1, 0.0, -90.0)
        .arc(wd2, y1, 90.0, -90.0)
        .l(hc, y1)
        .arc(wd2, y1, 180.0, 90.0)
}

pub fn left_brace(f: &Frame) -> PathData {
    left_brace_sketch(f).render(Transform::IDENTITY)
}

pub fn right_brace(f: &Frame) -> PathData {
    left_brace_sketch(f).render(Transform::mirror_x(f.w))
}

pub fn bracket_pair(f: &Frame) -> PathData {
    let a = f.adj_pin("adj", 16667.0, 0.0, 50000.0);
    let x1 = f.ssp(a);
    let (r, b) = (f.w, f.h);
    let left = PathData::new()
        .m(x1, b)
        .arc_to(x1, x1, 90.0, 90.0)
        .l(0.0, x1)
        .arc_to(x1, x1, 180.0, 90.0);
    let right = PathData::new()
        .m(r - x1, 0.0)
        .arc_to(x1, x1, 270.0, 90.0)
        .l(r, b - x1)
        .arc_to(x1, x1, 0.0, 90.0);
    left.append(right)
}

pub fn brace_pair(f: &Frame) -> PathData {
    let a = f.adj_pin("adj", 8333.0, 0.0, 25000.0);
    let x1 = f.ssp(a);
    let x2 = 2.0 * x1;
    let (r, b, vc) = (f.w, f.h, f.vc());
    let left = PathData::new()
        .m(x2, b)
        .arc_to(x1, x1, 90.0, 90.0)
        .l(x1, vc + x1)
        .arc_to(x1, x1, 0.0, -90.0)
        .arc_to(x1, x1, 90.0, -90.0)
        .l(x1, x1)
        .arc_to(x1, x1, 180.0, 90.0);
    let right = PathData::new()
        .m(r - x2, 0.0)
        .arc_to(x1, x1, 270.0, 90.0)
        .l(r - x1, vc - x1)
        .arc_to(x1, x1, 180.0, -90.0)
        .arc_to(x1, x1, 270.0, -90.0)
        .l(r - x1, b - x1)
        .arc_to(x1, x1, 0.0, 90.0);
    left.append(right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Adjustments;

    #[test]
    fn left_brace_tip_at_mid_height() {
        let adj = Adjustments::new();
        let path = left_brace(&Frame::new(20.0, 120.0, &adj)).build();
        assert!(path.contains(" 0,60 "), "{path}");
    }

    #[test]
    fn right_bracket_mirrors_left() {
        let adj = Adjustments::new().with("adj", 50000.0);
        let path = right_bracket(&Frame::new(10.0, 40.0, &adj)).build();
        assert_eq!(path, "M0,40 A10,5 0 0,0 10,35 L10,5 A10,5 0 0,0 0,0");
    }
}
