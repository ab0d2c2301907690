//! Flowchart symbols.
//!
//! Most symbols are authored on a small fixed grid (5 x 5, 6 x 6, 21600 x
//! 21600 ...) and scaled independently per axis. Arc radii scale the same way.

use glam::{DVec2, dvec2};

use crate::geometry::path::{ellipse_path, polygon, rect_path};
use crate::geometry::{Frame, PathData};

/// Scales a `gw x gh` authoring grid onto the frame.
#[derive(Debug, Clone, Copy)]
struct Grid {
    sx: f64,
    sy: f64,
}

impl Grid {
    fn new(f: &Frame, gw: f64, gh: f64) -> Self {
        Self {
            sx: f.w / gw,
            sy: f.h / gh,
        }
    }

    fn p(&self, x: f64, y: f64) -> DVec2 {
        dvec2(x * self.sx, y * self.sy)
    }

    fn poly(&self, pts: &[(f64, f64)]) -> PathData {
        let pts: Vec<DVec2> = pts.iter().map(|&(x, y)| self.p(x, y)).collect();
        polygon(&pts)
    }

    fn m(&self, path: PathData, x: f64, y: f64) -> PathData {
        path.mv(self.p(x, y))
    }

    fn l(&self, path: PathData, x: f64, y: f64) -> PathData {
        path.ln(self.p(x, y))
    }

    fn arc(&self, path: PathData, rx: f64, ry: f64, st: f64, sw: f64) -> PathData {
        path.arc_to(rx * self.sx, ry * self.sy, st, sw)
    }
}

fn stroke_line(a: DVec2, b: DVec2) -> PathData {
    PathData::new().mv(a).ln(b)
}

pub fn process(f: &Frame) -> PathData {
    rect_path(0.0, 0.0, f.w, f.h)
}

pub fn alternate_process(f: &Frame) -> PathData {
    let d = f.ss() / 6.0;
    let (r, b) = (f.w, f.h);
    PathData::new()
        .m(0.0, d)
        .arc_to(d, d, 180.0, 90.0)
        .l(r - d, 0.0)
        .arc_to(d, d, 270.0, 90.0)
        .l(r, b - d)
        .arc_to(d, d, 0.0, 90.0)
        .l(d, b)
        .arc_to(d, d, 90.0, 90.0)
        .z()
}

pub fn decision(f: &Frame) -> PathData {
    Grid::new(f, 2.0, 2.0).poly(&[(0.0, 1.0), (1.0, 0.0), (2.0, 1.0), (1.0, 2.0)])
}

pub fn input_output(f: &Frame) -> PathData {
    Grid::new(f, 5.0, 5.0).poly(&[(0.0, 5.0), (1.0, 0.0), (5.0, 0.0), (4.0, 5.0)])
}

pub fn predefined_process(f: &Frame) -> PathData {
    let (x1, x2) = (f.w / 8.0, f.w * 7.0 / 8.0);
    rect_path(0.0, 0.0, f.w, f.h)
        .append(stroke_line(dvec2(x1, 0.0), dvec2(x1, f.h)))
        .append(stroke_line(dvec2(x2, 0.0), dvec2(x2, f.h)))
}

pub fn internal_storage(f: &Frame) -> PathData {
    let (x1, y1) = (f.w / 8.0, f.h / 8.0);
    rect_path(0.0, 0.0, f.w, f.h)
        .append(stroke_line(dvec2(x1, 0.0), dvec2(x1, f.h)))
        .append(stroke_line(dvec2(0.0, y1), dvec2(f.w, y1)))
}

pub fn document(f: &Frame) -> PathData {
    let g = Grid::new(f, 21600.0, 21600.0);
    let a = g.p(10800.0, 17322.0);
    let b = g.p(10800.0, 23922.0);
    let e = g.p(0.0, 20172.0);
    let mut p = g.m(PathData::new(), 0.0, 0.0);
    p = g.l(p, 21600.0, 0.0);
    p = g.l(p, 21600.0, 17322.0);
    p.c(a.x, a.y, b.x, b.y, e.x, e.y).z()
}

pub fn multidocument(f: &Frame) -> PathData {
    let g = Grid::new(f, 21600.0, 21600.0);
    let curve = |p: PathData, pts: [(f64, f64); 3]| {
        let [a, b, e] = pts.map(|(x, y)| g.p(x, y));
        p.c(a.x, a.y, b.x, b.y, e.x, e.y)
    };

    let mut front = g.m(PathData::new(), 0.0, 20782.0);
    front = curve(front, [(9298.0, 23542.0), (9298.0, 18022.0), (18595.0, 18022.0)]);
    front = g.l(front, 18595.0, 3675.0);
    front = g.l(front, 0.0, 3675.0).z();

    let mut middle = g.m(PathData::new(), 1532.0, 3675.0);
    middle = g.l(middle, 1532.0, 1815.0);
    middle = g.l(middle, 20000.0, 1815.0);
    middle = g.l(middle, 20000.0, 16252.0);
    middle = curve(middle, [(19298.0, 16252.0), (18595.0, 16352.0), (18595.0, 16352.0)]);
    middle = g.l(middle, 18595.0, 3675.0).z();

    let mut back = g.m(PathData::new(), 2972.0, 1815.0);
    back = g.l(back, 2972.0, 0.0);
    back = g.l(back, 21600.0, 0.0);
    back = g.l(back, 21600.0, 14392.0);
    back = curve(back, [(20800.0, 14392.0), (20000.0, 14467.0), (20000.0, 14467.0)]);
    back = g.l(back, 20000.0, 1815.0).z();

    front.append(middle).append(back)
}

pub fn terminator(f: &Frame) -> PathData {
    let g = Grid::new(f, 21600.0, 21600.0);
    let mut p = g.m(PathData::new(), 3475.0, 0.0);
    p = g.l(p, 18125.0, 0.0);
    p = g.arc(p, 3475.0, 10800.0, 270.0, 180.0);
    p = g.l(p, 3475.0, 21600.0);
    g.arc(p, 3475.0, 10800.0, 90.0, 180.0).z()
}

pub fn preparation(f: &Frame) -> PathData {
    Grid::new(f, 10.0, 10.0).poly(&[
        (0.0, 5.0),
        (2.0, 0.0),
        (8.0, 0.0),
        (10.0, 5.0),
        (8.0, 10.0),
        (2.0, 10.0),
    ])
}

pub fn manual_input(f: &Frame) -> PathData {
    Grid::new(f, 5.0, 5.0).poly(&[(0.0, 1.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0)])
}

pub fn manual_operation(f: &Frame) -> PathData {
    Grid::new(f, 5.0, 5.0).poly(&[(0.0, 0.0), (5.0, 0.0), (4.0, 5.0), (1.0, 5.0)])
}

pub fn connector(f: &Frame) -> PathData {
    ellipse_path(0.0, 0.0, f.w, f.h)
}

pub fn offpage_connector(f: &Frame) -> PathData {
    Grid::new(f, 10.0, 10.0).poly(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 8.0),
        (5.0, 10.0),
        (0.0, 8.0),
    ])
}

pub fn punched_card(f: &Frame) -> PathData {
    Grid::new(f, 5.0, 5.0).poly(&[(0.0, 1.0), (1.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0)])
}

pub fn punched_tape(f: &Frame) -> PathData {
    let g = Grid::new(f, 20.0, 20.0);
    let mut p = g.m(PathData::new(), 0.0, 2.0);
    p = g.arc(p, 5.0, 2.0, 180.0, -180.0);
    p = g.arc(p, 5.0, 2.0, 180.0, 180.0);
    p = g.l(p, 20.0, 18.0);
    p = g.arc(p, 5.0, 2.0, 0.0, -180.0);
    g.arc(p, 5.0, 2.0, 0.0, 180.0).z()
}

pub fn summing_junction(f: &Frame) -> PathData {
    let (c, r) = (f.center(), f.half());
    let d = r * 45f64.to_radians().cos();
    ellipse_path(0.0, 0.0, f.w, f.h)
        .append(stroke_line(c - d, c + d))
        .append(stroke_line(dvec2(c.x + d.x, c.y - d.y), dvec2(c.x - d.x, c.y + d.y)))
}

pub fn or(f: &Frame) -> PathData {
    let (hc, vc) = (f.hc(), f.vc());
    ellipse_path(0.0, 0.0, f.w, f.h)
        .append(stroke_line(dvec2(hc, 0.0), dvec2(hc, f.h)))
        .append(stroke_line(dvec2(0.0, vc), dvec2(f.w, vc)))
}

pub fn collate(f: &Frame) -> PathData {
    Grid::new(f, 2.0, 2.0).poly(&[
        (0.0, 0.0),
        (2.0, 0.0),
        (1.0, 1.0),
        (2.0, 2.0),
        (0.0, 2.0),
        (1.0, 1.0),
    ])
}

pub fn sort(f: &Frame) -> PathData {
    let g = Grid::new(f, 2.0, 2.0);
    g.poly(&[(0.0, 1.0), (1.0, 0.0), (2.0, 1.0), (1.0, 2.0)])
        .append(stroke_line(g.p(0.0, 1.0), g.p(2.0, 1.0)))
}

pub fn extract(f: &Frame) -> PathData {
    Grid::new(f, 2.0, 2.0).poly(&[(0.0, 2.0), (1.0, 0.0), (2.0, 2.0)])
}

pub fn merge(f: &Frame) -> PathData {
    Grid::new(f, 2.0, 2.0).poly(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0)])
}

pub fn offline_storage(f: &Frame) -> PathData {
    let g = Grid::new(f, 3.0, 3.0);
    g.poly(&[(0.0, 0.0), (3.0, 0.0), (1.5, 3.0)])
        .append(stroke_line(g.p(1.0, 2.0), g.p(2.0, 2.0)))
}

pub fn online_storage(f: &Frame) -> PathData {
    let g = Grid::new(f, 6.0, 6.0);
    let mut p = g.m(PathData::new(), 1.0, 0.0);
    p = g.l(p, 6.0, 0.0);
    p = g.arc(p, 1.0, 3.0, 270.0, -180.0);
    p = g.l(p, 1.0, 6.0);
    g.arc(p, 1.0, 3.0, 90.0, 180.0).z()
}

pub fn magnetic_tape(f: &Frame) -> PathData {
    let (hc, vc) = (f.hc(), f.vc());
    let (wd2, hd2) = (f.w / 2.0, f.h / 2.0);
    let ib = vc + hd2 * 45f64.to_radians().sin();
    let ang = f.h.atan2(f.w).to_degrees();
    PathData::new()
        .m(hc, f.h)
        .arc_to(wd2, hd2, 90.0, 90.0)
        .arc_to(wd2, hd2, 180.0, 90.0)
        .arc_to(wd2, hd2, 270.0, 90.0)
        .arc_to(wd2, hd2, 0.0, ang)
        .l(f.w, ib)
        .l(f.w, f.h)
        .z()
}

pub fn magnetic_disk(f: &Frame) -> PathData {
    let g = Grid::new(f, 6.0, 6.0);
    let mut body = g.m(PathData::new(), 0.0, 1.0);
    body = g.arc(body, 3.0, 1.0, 180.0, 180.0);
    body = g.l(body, 6.0, 5.0);
    body = g.arc(body, 3.0, 1.0, 0.0, 180.0).z();
    let rim = g.arc(g.m(PathData::new(), 6.0, 1.0), 3.0, 1.0, 0.0, 180.0);
    body.append(rim)
}

pub fn magnetic_drum(f: &Frame) -> PathData {
    let g = Grid::new(f, 6.0, 6.0);
    let mut body = g.m(PathData::new(), 1.0, 0.0);
    body = g.l(body, 5.0, 0.0);
    body = g.arc(body, 1.0, 3.0, 270.0, 180.0);
    body = g.l(body, 1.0, 6.0);
    body = g.arc(body, 1.0, 3.0, 90.0, 180.0).z();
    let rim = g.arc(g.m(PathData::new(), 5.0, 6.0), 1.0, 3.0, 90.0, 180.0);
    body.append(rim)
}

pub fn display(f: &Frame) -> PathData {
    let g = Grid::new(f, 6.0, 6.0);
    let mut p = g.m(PathData::new(), 0.0, 3.0);
    p = g.l(p, 1.0, 0.0);
    p = g.l(p, 5.0, 0.0);
    p = g.arc(p, 1.0, 3.0, 270.0, 180.0);
    g.l(p, 1.0, 6.0).z()
}

pub fn delay(f: &Frame) -> PathData {
    PathData::new()
        .m(0.0, 0.0)
        .l(f.hc(), 0.0)
        .arc_to(f.w / 2.0, f.h / 2.0, 270.0, 180.0)
        .l(0.0, f.h)
        .z()
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
    fn terminator_has_round_ends() {
        assert_eq!(
            draw(terminator, 216.0, 100.0),
            "M34.75,0 L181.25,0 A34.75,50 0 0,1 181.25,100 L34.75,100 A34.75,50 0 0,1 34.75,0 Z"
        );
    }

    #[test]
    fn delay_is_half_stadium() {
        assert_eq!(
            draw(delay, 100.0, 60.0),
            "M0,0 L50,0 A50,30 0 0,1 50,60 L0,60 Z"
        );
    }

    #[test]
    fn grid_shapes_scale_per_axis() {
        assert_eq!(draw(manual_input, 50.0, 100.0), "M0,20 L50,0 L50,100 L0,100 Z");
    }
}
