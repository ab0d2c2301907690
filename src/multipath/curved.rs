//! Curved block arrows.
//!
//! The band is a half ring between two half ellipses sharing their right
//! edge; the back (upper) quarter of the band is shaded. The canonical shape
//! curves down the left side and points right at the bottom; the other
//! three are reflections of it.

use super::{FillMode, SubPath};
use crate::geometry::{Frame, Sketch, Transform, pin, safe_div};

#[derive(Debug, Clone, Copy)]
enum Dir {
    Right,
    Left,
    Down,
    Up,
}

impl Dir {
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

fn curved_arrow(f: &Frame, dir: Dir) -> Vec<SubPath> {
    let (w, h) = dir.dims(f);
    let ss = f.ss();
    let a2 = f.adj_pin("adj2", 50000.0, 0.0, safe_div(50000.0 * h, ss));
    let a1 = f.adj_pin("adj1", 25000.0, 0.0, a2);
    let a3 = f.adj_pin("adj3", 25000.0, 0.0, safe_div(100000.0 * w, ss));
    let th = ss * a1 / 100000.0;
    let aw = ss * a2 / 100000.0;
    let ah = ss * a3 / 100000.0;

    let bx = (w - ah).max(0.0);
    let head_y = h - aw / 2.0;
    let inner_rx = (bx - th).max(0.0);
    let outer_ry = (head_y + th / 2.0) / 2.0;
    let inner_ry = ((head_y - th / 2.0 - th) / 2.0).max(0.0);
    let inner_cy = pin(th, th + inner_ry, h);

    let band = Sketch::new()
        .m(bx, 0.0)
        .arc(bx, outer_ry, 270.0, -180.0)
        .l(bx, h)
        .l(w, head_y)
        .l(bx, h - aw)
        .l(bx, inner_cy + inner_ry)
        .arc(inner_rx, inner_ry, 90.0, 180.0)
        .z();
    let back = Sketch::new()
        .m(bx, 0.0)
        .arc(bx, outer_ry, 270.0, -90.0)
        .l(th, inner_cy)
        .arc(inner_rx, inner_ry, 180.0, 90.0)
        .z();

    let xf = dir.transform(f);
    let body = band.render(xf);
    vec![
        SubPath::fill(body.clone(), FillMode::Normal),
        SubPath::shade(back.render(xf), FillMode::DarkenLess),
        SubPath::stroke(body),
    ]
}

pub fn curved_right_arrow(f: &Frame) -> Vec<SubPath> {
    curved_arrow(f, Dir::Right)
}

pub fn curved_left_arrow(f: &Frame) -> Vec<SubPath> {
    curved_arrow(f, Dir::Left)
}

pub fn curved_down_arrow(f: &Frame) -> Vec<SubPath> {
    curved_arrow(f, Dir::Down)
}

pub fn curved_up_arrow(f: &Frame) -> Vec<SubPath> {
    curved_arrow(f, Dir::Up)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Adjustments;

    #[test]
    fn right_arrow_band_and_head() {
        let adj = Adjustments::new();
        let layers = curved_right_arrow(&Frame::new(100.0, 200.0, &adj));
        // th = 25, aw = 50, ah = 25: head tip at (100, 175).
        assert_eq!(
            layers[0].path,
            "M75,0 A75,93.75 0 0,0 75,187.5 L75,200 L100,175 L75,150 L75,162.5 \
             A50,68.75 0 0,1 75,25 Z"
        );
        assert_eq!(layers[2].path, layers[0].path);
        assert!(layers[2].stroked);
    }

    #[test]
    fn left_arrow_points_left() {
        let adj = Adjustments::new();
        let layers = curved_left_arrow(&Frame::new(100.0, 200.0, &adj));
        assert!(layers[0].path.contains("L0,175"), "{}", layers[0].path);
    }

    #[test]
    fn down_arrow_points_down() {
        let adj = Adjustments::new();
        let layers = curved_down_arrow(&Frame::new(200.0, 100.0, &adj));
        assert!(layers[0].path.contains("L175,100"), "{}", layers[0].path);
    }
}
