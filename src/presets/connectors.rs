//! Lines and connectors.
//!
//! Connectors are open, stroke-only paths from the top-left to the
//! bottom-right corner of their frame.

use crate::geometry::{Frame, PathData};

/// A straight segment that keeps a drawable extent when the frame collapses.
///
/// A zero-width frame yields a vertical segment at `x = 0.5`, a zero-height
/// frame a horizontal one at `y = 0.5`.
fn straight(f: &Frame, inverted: bool) -> PathData {
    if f.w == 0.0 {
        return PathData::new().m(0.5, 0.0).l(0.5, f.h);
    }
    if f.h == 0.0 {
        return PathData::new().m(0.0, 0.5).l(f.w, 0.5);
    }
    if inverted {
        PathData::new().m(0.0, f.h).l(f.w, 0.0)
    } else {
        PathData::new().m(0.0, 0.0).l(f.w, f.h)
    }
}

pub fn line(f: &Frame) -> PathData {
    straight(f, false)
}

pub fn line_inv(f: &Frame) -> PathData {
    straight(f, true)
}

pub fn straight_connector1(f: &Frame) -> PathData {
    straight(f, false)
}

pub fn bent_connector2(f: &Frame) -> PathData {
    PathData::new().m(0.0, 0.0).l(f.w, 0.0).l(f.w, f.h)
}

pub fn bent_connector3(f: &Frame) -> PathData {
    let x1 = f.wp(f.adj("adj1", 50000.0));
    PathData::new().m(0.0, 0.0).l(x1, 0.0).l(x1, f.h).l(f.w, f.h)
}

pub fn bent_connector4(f: &Frame) -> PathData {
    let x1 = f.wp(f.adj("adj1", 50000.0));
    let y2 = f.hp(f.adj("adj2", 50000.0));
    PathData::new()
        .m(0.0, 0.0)
        .l(x1, 0.0)
        .l(x1, y2)
        .l(f.w, y2)
        .l(f.w, f.h)
}

pub fn bent_connector5(f: &Frame) -> PathData {
    let x1 = f.wp(f.adj("adj1", 50000.0));
    let y2 = f.hp(f.adj("adj2", 50000.0));
    let x3 = f.wp(f.adj("adj3", 50000.0));
    PathData::new()
        .m(0.0, 0.0)
        .l(x1, 0.0)
        .l(x1, y2)
        .l(x3, y2)
        .l(x3, f.h)
        .l(f.w, f.h)
}

pub fn curved_connector2(f: &Frame) -> PathData {
    let (r, b) = (f.w, f.h);
    PathData::new().m(0.0, 0.0).c(r / 2.0, 0.0, r, b / 2.0, r, b)
}

pub fn curved_connector3(f: &Frame) -> PathData {
    let (r, b) = (f.w, f.h);
    let x2 = f.wp(f.adj("adj1", 50000.0));
    let x1 = x2 / 2.0;
    let x3 = (r + x2) / 2.0;
    PathData::new()
        .m(0.0, 0.0)
        .c(x1, 0.0, x2, b / 4.0, x2, b / 2.0)
        .c(x2, b * 3.0 / 4.0, x3, b, r, b)
}

pub fn curved_connector4(f: &Frame) -> PathData {
    let (r, b) = (f.w, f.h);
    let x2 = f.wp(f.adj("adj1", 50000.0));
    let y4 = f.hp(f.adj("adj2", 50000.0));
    let x1 = x2 / 2.0;
    let x3 = (r + x2) / 2.0;
    let x4 = (x2 + x3) / 2.0;
    let x5 = (x3 + r) / 2.0;
    let y1 = y4 / 2.0;
    let y2 = y1 / 2.0;
    let y3 = (y1 + y4) / 2.0;
    let y5 = (b + y4) / 2.0;
    PathData::new()
        .m(0.0, 0.0)
        .c(x1, 0.0, x2, y2, x2, y1)
        .c(x2, y3, x4, y4, x3, y4)
        .c(x5, y4, r, y5, r, b)
}

pub fn curved_connector5(f: &Frame) -> PathData {
    let (r, b) = (f.w, f.h);
    let x3 = f.wp(f.adj("adj1", 50000.0));
    let y4 = f.hp(f.adj("adj2", 50000.0));
    let x6 = f.wp(f.adj("adj3", 50000.0));
    let x1 = (x3 + x6) / 2.0;
    let x2 = x3 / 2.0;
    let x4 = (x3 + x1) / 2.0;
    let x5 = (x6 + x1) / 2.0;
    let x7 = (x6 + r) / 2.0;
    let y1 = y4 / 2.0;
    let y2 = y1 / 2.0;
    let y3 = (y1 + y4) / 2.0;
    let y5 = (b + y4) / 2.0;
    let y6 = (y5 + y4) / 2.0;
    let y7 = (y5 + b) / 2.0;
    PathData::new()
        .m(0.0, 0.0)
        .c(x2, 0.0, x3, y2, x3, y1)
        .c(x3, y3, x4, y4, x1, y4)
        .c(x5, y4, x6, y6, x6, y5)
        .c(x6, y7, x7, b, r, b)
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
    fn collapsed_lines_keep_a_unit_offset() {
        assert_eq!(draw(line, 0.0, 80.0), "M0.5,0 L0.5,80");
        assert_eq!(draw(straight_connector1, 80.0, 0.0), "M0,0.5 L80,0.5");
        assert_eq!(draw(line_inv, 0.0, 10.0), "M0.5,0 L0.5,10");
    }

    #[test]
    fn diagonal_lines() {
        assert_eq!(draw(line, 30.0, 40.0), "M0,0 L30,40");
        assert_eq!(draw(line_inv, 30.0, 40.0), "M0,40 L30,0");
    }

    #[test]
    fn elbow_connector() {
        assert_eq!(draw(bent_connector3, 100.0, 40.0), "M0,0 L50,0 L50,40 L100,40");
    }
}
