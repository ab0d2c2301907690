//! Shaded blocks: cube, can, bevel, folded corner and the smiley face.

use glam::dvec2;

use super::{FillMode, SubPath};
use crate::geometry::path::{ellipse_path, polygon, rect_path};
use crate::geometry::{Frame, PathData, safe_div};

pub fn cube(f: &Frame) -> Vec<SubPath> {
    let a = f.adj_pin("adj", 25000.0, 0.0, 100000.0);
    let (r, b) = (f.w, f.h);
    let y1 = f.ssp(a);
    let (x4, y4) = (r - y1, b - y1);
    let front = rect_path(0.0, y1, x4, b - y1);
    let side = polygon(&[dvec2(x4, b), dvec2(x4, y1), dvec2(r, 0.0), dvec2(r, y4)]);
    let top = polygon(&[dvec2(0.0, y1), dvec2(y1, 0.0), dvec2(r, 0.0), dvec2(x4, y1)]);
    let outline = polygon(&[
        dvec2(0.0, y1),
        dvec2(y1, 0.0),
        dvec2(r, 0.0),
        dvec2(r, y4),
        dvec2(x4, b),
        dvec2(0.0, b),
    ])
    .m(0.0, y1)
    .l(x4, y1)
    .l(r, 0.0)
    .m(x4, y1)
    .l(x4, b);
    vec![
        SubPath::fill(front, FillMode::Normal),
        SubPath::fill(side, FillMode::DarkenLess),
        SubPath::fill(top, FillMode::LightenLess),
        SubPath::stroke(outline),
    ]
}

pub fn can(f: &Frame) -> Vec<SubPath> {
    let a = f.adj_pin("adj", 25000.0, 0.0, safe_div(50000.0 * f.h, f.ss()));
    let (r, b, wd2) = (f.w, f.h, f.w / 2.0);
    let y1 = f.ss() * a / 200000.0;
    let y3 = b - y1;
    let body = PathData::new()
        .m(0.0, y1)
        .arc_to(wd2, y1, 180.0, -180.0)
        .l(r, y3)
        .arc_to(wd2, y1, 0.0, 180.0)
        .z();
    let top = ellipse_path(0.0, 0.0, r, 2.0 * y1);
    let outline = PathData::new()
        .m(r, y1)
        .arc_to(wd2, y1, 0.0, 180.0)
        .arc_to(wd2, y1, 180.0, 180.0)
        .l(r, y3)
        .arc_to(wd2, y1, 0.0, 180.0)
        .l(0.0, y1);
    vec![
        SubPath::fill(body, FillMode::Normal),
        SubPath::fill(top, FillMode::Lighten),
        SubPath::stroke(outline),
    ]
}

pub fn bevel(f: &Frame) -> Vec<SubPath> {
    let a = f.adj_pin("adj", 12500.0, 0.0, 50000.0);
    let (r, b) = (f.w, f.h);
    let x1 = f.ssp(a);
    let (x2, y2) = (r - x1, b - x1);
    let face = rect_path(x1, x1, x2 - x1, y2 - x1);
    let top = polygon(&[dvec2(0.0, 0.0), dvec2(r, 0.0), dvec2(x2, x1), dvec2(x1, x1)]);
    let bottom = polygon(&[dvec2(0.0, b), dvec2(x1, y2), dvec2(x2, y2), dvec2(r, b)]);
    let left = polygon(&[dvec2(0.0, 0.0), dvec2(x1, x1), dvec2(x1, y2), dvec2(0.0, b)]);
    let right = polygon(&[dvec2(r, 0.0), dvec2(r, b), dvec2(x2, y2), dvec2(x2, x1)]);
    let outline = rect_path(0.0, 0.0, r, b)
        .append(rect_path(x1, x1, x2 - x1, y2 - x1))
        .m(0.0, 0.0)
        .l(x1, x1)
        .m(0.0, b)
        .l(x1, y2)
        .m(r, 0.0)
        .l(x2, x1)
        .m(r, b)
        .l(x2, y2);
    vec![
        SubPath::fill(face, FillMode::Normal),
        SubPath::fill(top, FillMode::LightenLess),
        SubPath::fill(bottom, FillMode::DarkenLess),
        SubPath::fill(left, FillMode::Lighten),
        SubPath::fill(right, FillMode::Darken),
        SubPath::stroke(outline),
    ]
}

pub fn folded_corner(f: &Frame) -> Vec<SubPath> {
    let a = f.adj_pin("adj", 16667.0, 0.0, 50000.0);
    let (r, b) = (f.w, f.h);
    let dy2 = f.ssp(a);
    let dy1 = dy2 / 5.0;
    let (x1, y2) = (r - dy2, b - dy2);
    let (x2, y1) = (x1 + dy1, y2 + dy1);
    let body = polygon(&[
        dvec2(0.0, 0.0),
        dvec2(r, 0.0),
        dvec2(r, y2),
        dvec2(x1, b),
        dvec2(0.0, b),
    ]);
    let fold = polygon(&[dvec2(x1, b), dvec2(x2, y1), dvec2(r, y2)]);
    let outline = PathData::new()
        .m(x1, b)
        .l(x2, y1)
        .l(r, y2)
        .l(x1, b)
        .l(0.0, b)
        .l(0.0, 0.0)
        .l(r, 0.0)
        .l(r, y2);
    vec![
        SubPath::fill(body, FillMode::Normal),
        SubPath::shade(fold, FillMode::DarkenLess),
        SubPath::stroke(outline),
    ]
}

/// Face, darkened eyes and a stroke-only mouth whose curvature follows `adj`
/// (positive smiles, negative frowns).
pub fn smiley_face(f: &Frame) -> Vec<SubPath> {
    let a = f.adj_pin("adj", 4653.0, -4653.0, 4653.0);
    let (r, b, hc) = (f.w, f.h, f.hc());
    let g = |v: f64, n: f64| v * n / 21600.0;
    let (x1, x2, x3, x4) = (g(r, 4969.0), g(r, 6215.0), g(r, 13135.0), g(r, 16640.0));
    let (y1, y3) = (g(b, 7570.0), g(b, 16515.0));
    let dy2 = f.hp(a);
    let y2 = y3 - dy2;
    let y5 = y3 + dy2 + b * a / 50000.0;
    let (wr, hr) = (g(r, 1125.0), g(b, 1125.0));

    let face = ellipse_path(0.0, 0.0, r, b);
    let eyes = ellipse_path(x2 - wr, y1 - hr, 2.0 * wr, 2.0 * hr)
        .append(ellipse_path(x3 - wr, y1 - hr, 2.0 * wr, 2.0 * hr));
    let mouth = PathData::new().m(x1, y2).q(hc, y5, x4, y2);
    vec![
        SubPath::fill(face, FillMode::Normal),
        SubPath::shade(eyes, FillMode::DarkenLess),
        SubPath::stroke(mouth),
        SubPath::stroke(ellipse_path(0.0, 0.0, r, b)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Adjustments;

    fn modes(layers: &[SubPath]) -> Vec<FillMode> {
        layers.iter().map(|l| l.fill_mode).collect()
    }

    #[test]
    fn cube_faces_in_paint_order() {
        let adj = Adjustments::new();
        let layers = cube(&Frame::new(100.0, 100.0, &adj));
        assert_eq!(
            modes(&layers),
            [FillMode::Normal, FillMode::DarkenLess, FillMode::LightenLess, FillMode::None]
        );
        assert_eq!(layers[0].path, "M0,25 L75,25 L75,100 L0,100 Z");
        assert_eq!(layers[2].path, "M0,25 L25,0 L100,0 L75,25 Z");
    }

    #[test]
    fn can_top_is_full_ellipse() {
        let adj = Adjustments::new();
        let layers = can(&Frame::new(40.0, 100.0, &adj));
        assert_eq!(layers[1].path, "M0,5 A20,5 0 0,1 40,5 A20,5 0 0,1 0,5 Z");
        assert_eq!(layers[1].fill_mode, FillMode::Lighten);
    }

    #[test]
    fn smiley_mouth_flips_with_adjustment() {
        let smile = Adjustments::new();
        let frown = Adjustments::new().with("adj", -4653.0);
        let s = smiley_face(&Frame::new(21600.0, 21600.0, &smile));
        let f = smiley_face(&Frame::new(21600.0, 21600.0, &frown));
        assert_eq!(s[2].path, "M4969,15509.952 Q10800,19530.144 16640,15509.952");
        assert_eq!(f[2].path, "M4969,17520.048 Q10800,13499.856 16640,17520.048");
        assert!(s[2].stroked && s[2].fill_mode == FillMode::None);
    }
}
