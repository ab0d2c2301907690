//! Rectangles with rounded or snipped corners.

use glam::dvec2;

use crate::geometry::path::polygon;
use crate::geometry::{Frame, PathData};

fn corner_adj(f: &Frame, name: &str, default: f64) -> f64 {
    f.ssp(f.adj_pin(name, default, 0.0, 50000.0))
}

pub fn round1_rect(f: &Frame) -> PathData {
    let dx1 = corner_adj(f, "adj", 16667.0);
    let (r, b) = (f.w, f.h);
    PathData::new()
        .m(0.0, 0.0)
        .l(r - dx1, 0.0)
        .arc_to(dx1, dx1, 270.0, 90.0)
        .l(r, b)
        .l(0.0, b)
        .z()
}

pub fn round2_same_rect(f: &Frame) -> PathData {
    let tx1 = corner_adj(f, "adj1", 16667.0);
    let bx1 = corner_adj(f, "adj2", 0.0);
    let (r, b) = (f.w, f.h);
    PathData::new()
        .m(tx1, 0.0)
        .l(r - tx1, 0.0)
        .arc_to(tx1, tx1, 270.0, 90.0)
        .l(r, b - bx1)
        .arc_to(bx1, bx1, 0.0, 90.0)
        .l(bx1, b)
        .arc_to(bx1, bx1, 90.0, 90.0)
        .l(0.0, tx1)
        .arc_to(tx1, tx1, 180.0, 90.0)
        .z()
}

pub fn round2_diag_rect(f: &Frame) -> PathData {
    let x1 = corner_adj(f, "adj1", 16667.0);
    let a = corner_adj(f, "adj2", 0.0);
    let (r, b) = (f.w, f.h);
    PathData::new()
        .m(x1, 0.0)
        .l(r - a, 0.0)
        .arc_to(a, a, 270.0, 90.0)
        .l(r, b - x1)
        .arc_to(x1, x1, 0.0, 90.0)
        .l(a, b)
        .arc_to(a, a, 90.0, 90.0)
        .l(0.0, x1)
        .arc_to(x1, x1, 180.0, 90.0)
        .z()
}

pub fn snip1_rect(f: &Frame) -> PathData {
    let dx1 = corner_adj(f, "adj", 16667.0);
    let (r, b) = (f.w, f.h);
    polygon(&[
        dvec2(0.0, 0.0),
        dvec2(r - dx1, 0.0),
        dvec2(r, dx1),
        dvec2(r, b),
        dvec2(0.0, b),
    ])
}

pub fn snip2_same_rect(f: &Frame) -> PathData {
    let tx1 = corner_adj(f, "adj1", 16667.0);
    let bx1 = corner_adj(f, "adj2", 0.0);
    let (r, b) = (f.w, f.h);
    polygon(&[
        dvec2(tx1, 0.0),
        dvec2(r - tx1, 0.0),
        dvec2(r, tx1),
        dvec2(r, b - bx1),
        dvec2(r - bx1, b),
        dvec2(bx1, b),
        dvec2(0.0, b - bx1),
        dvec2(0.0, tx1),
    ])
}

pub fn snip2_diag_rect(f: &Frame) -> PathData {
    let lx1 = corner_adj(f, "adj1", 0.0);
    let rx1 = corner_adj(f, "adj2", 16667.0);
    let (r, b) = (f.w, f.h);
    polygon(&[
        dvec2(lx1, 0.0),
        dvec2(r - rx1, 0.0),
        dvec2(r, rx1),
        dvec2(r, b - lx1),
        dvec2(r - lx1, b),
        dvec2(rx1, b),
        dvec2(0.0, b - rx1),
        dvec2(0.0, lx1),
    ])
}

pub fn snip_round_rect(f: &Frame) -> PathData {
    let x1 = corner_adj(f, "adj1", 16667.0);
    let dx2 = corner_adj(f, "adj2", 16667.0);
    let (r, b) = (f.w, f.h);
    PathData::new()
        .m(x1, 0.0)
        .l(r - dx2, 0.0)
        .l(r, dx2)
        .l(r, b)
        .l(0.0, b)
        .l(0.0, x1)
        .arc_to(x1, x1, 180.0, 90.0)
        .z()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Adjustments;

    #[test]
    fn snip1_cuts_top_right() {
        let adj = Adjustments::new().with("adj", 20000.0);
        let path = snip1_rect(&Frame::new(100.0, 50.0, &adj)).build();
        assert_eq!(path, "M0,0 L90,0 L100,10 L100,50 L0,50 Z");
    }

    #[test]
    fn round1_without_radius_is_a_rectangle_outline() {
        let adj = Adjustments::new().with("adj", 0.0);
        let path = round1_rect(&Frame::new(100.0, 50.0, &adj)).build();
        assert_eq!(path, "M0,0 L100,0 L100,50 L0,50 Z");
    }
}
