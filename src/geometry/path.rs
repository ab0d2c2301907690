//! Path data builder.
//!
//! Emits absolute-coordinate SVG path syntax: `M0,0 L100,0 A5,5 0 0,1 105,5 Z`.
//! The builder tracks the pen position so that arcs can be expressed the
//! DrawingML way (start angle + sweep from wherever the pen is).

use std::fmt::{self, Write as _};

use glam::{DVec2, dvec2};

use super::arc::{is_degenerate, to_arc_segment};

/// Format a coordinate with at most three decimals, trailing zeros trimmed.
///
/// Non-finite input is written as `0` so no path ever contains `NaN`.
pub(crate) fn fmt_num(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let s = format!("{:.3}", rounded);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

/// True when two points are written with identical coordinates.
pub(crate) fn same_point(a: DVec2, b: DVec2) -> bool {
    fmt_num(a.x) == fmt_num(b.x) && fmt_num(a.y) == fmt_num(b.y)
}

/// Whether an arc from `from` to `to` must be emitted as two halves.
pub(crate) fn needs_split(sweep_deg: f64, from: DVec2, to: DVec2) -> bool {
    sweep_deg.abs() >= 360.0 || (sweep_deg.abs() > 180.0 && same_point(from, to))
}

/// Path under construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    buf: String,
    pen: DVec2,
    subpath_start: DVec2,
    non_finite: bool,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pen position.
    pub fn current(&self) -> DVec2 {
        self.pen
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// False once any NaN or infinite number has been written (as `0`).
    pub fn is_finite(&self) -> bool {
        !self.non_finite
    }

    fn num(&mut self, v: f64) -> String {
        self.non_finite |= !v.is_finite();
        fmt_num(v)
    }

    fn cmd(&mut self, c: char) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push(c);
    }

    fn pt(&mut self, x: f64, y: f64) {
        let (x, y) = (self.num(x), self.num(y));
        let _ = write!(self.buf, "{x},{y}");
    }

    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.cmd('M');
        self.pt(x, y);
        self.pen = dvec2(x, y);
        self.subpath_start = self.pen;
        self
    }

    pub fn l(mut self, x: f64, y: f64) -> Self {
        self.cmd('L');
        self.pt(x, y);
        self.pen = dvec2(x, y);
        self
    }

    pub fn mv(self, p: DVec2) -> Self {
        self.m(p.x, p.y)
    }

    pub fn ln(self, p: DVec2) -> Self {
        self.l(p.x, p.y)
    }

    /// Polyline through all points.
    pub fn lines(mut self, points: &[DVec2]) -> Self {
        for p in points {
            self = self.l(p.x, p.y);
        }
        self
    }

    pub fn c(mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        self.cmd('C');
        self.pt(x1, y1);
        self.buf.push(' ');
        self.pt(x2, y2);
        self.buf.push(' ');
        self.pt(x, y);
        self.pen = dvec2(x, y);
        self
    }

    pub fn q(mut self, x1: f64, y1: f64, x: f64, y: f64) -> Self {
        self.cmd('Q');
        self.pt(x1, y1);
        self.buf.push(' ');
        self.pt(x, y);
        self.pen = dvec2(x, y);
        self
    }

    /// Raw SVG elliptical arc.
    #[allow(clippy::too_many_arguments)]
    pub fn a(mut self, rx: f64, ry: f64, rotation: f64, large: bool, sweep: bool, x: f64, y: f64) -> Self {
        self.cmd('A');
        let (rx, ry, rotation) = (self.num(rx), self.num(ry), self.num(rotation));
        let _ = write!(self.buf, "{rx},{ry} {rotation} {},{} ", large as u8, sweep as u8);
        self.pt(x, y);
        self.pen = dvec2(x, y);
        self
    }

    /// DrawingML `arcTo` from the current pen position.
    ///
    /// Zero radii or zero sweep emit nothing. An arc that would end where it
    /// starts (a full turn, or a near-full turn once rounded) is split in two
    /// halves.
    pub fn arc_to(self, rx: f64, ry: f64, start_deg: f64, sweep_deg: f64) -> Self {
        let radii = dvec2(rx, ry);
        if is_degenerate(radii, sweep_deg) {
            return self;
        }
        let sweep_deg = sweep_deg.clamp(-360.0, 360.0);
        let end = to_arc_segment(self.pen, radii, start_deg, sweep_deg).end;
        if needs_split(sweep_deg, self.pen, end) {
            let half = sweep_deg / 2.0;
            return self
                .arc_segment(radii, start_deg, half)
                .arc_segment(radii, start_deg + half, half);
        }
        self.arc_segment(radii, start_deg, sweep_deg)
    }

    fn arc_segment(self, radii: DVec2, start_deg: f64, sweep_deg: f64) -> Self {
        let seg = to_arc_segment(self.pen, radii, start_deg, sweep_deg);
        self.a(radii.x, radii.y, 0.0, seg.large_arc, seg.sweep, seg.end.x, seg.end.y)
    }

    pub fn z(mut self) -> Self {
        self.cmd('Z');
        self.pen = self.subpath_start;
        self
    }

    /// Append another path's commands (which must start with a move).
    pub fn append(mut self, other: PathData) -> Self {
        if other.buf.is_empty() {
            return self;
        }
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push_str(&other.buf);
        self.non_finite |= other.non_finite;
        self.pen = other.pen;
        self.subpath_start = other.subpath_start;
        self
    }

    pub fn build(self) -> String {
        self.buf
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

/// Closed polygon through `points`.
pub fn polygon(points: &[DVec2]) -> PathData {
    let Some((first, rest)) = points.split_first() else {
        return PathData::new();
    };
    PathData::new().mv(*first).lines(rest).z()
}

/// Closed axis-aligned rectangle, the universal fallback geometry.
pub fn rect_path(x: f64, y: f64, w: f64, h: f64) -> PathData {
    PathData::new()
        .m(x, y)
        .l(x + w, y)
        .l(x + w, y + h)
        .l(x, y + h)
        .z()
}

/// Full ellipse inscribed in the given box, starting at the leftmost point.
pub fn ellipse_path(x: f64, y: f64, w: f64, h: f64) -> PathData {
    PathData::new()
        .m(x, y + h / 2.0)
        .arc_to(w / 2.0, h / 2.0, 180.0, 360.0)
        .z()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_formatting() {
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(100.0), "100");
        assert_eq!(fmt_num(-0.0001), "0");
        assert_eq!(fmt_num(1.23456), "1.235");
        assert_eq!(fmt_num(f64::NAN), "0");
    }

    #[test]
    fn non_finite_input_is_flagged() {
        let p = PathData::new().m(f64::NAN, 1.0);
        assert!(!p.is_finite());
        assert_eq!(p.build(), "M0,1");
        let ok = PathData::new().m(1.0, 1.0).append(PathData::new().m(f64::INFINITY, 0.0));
        assert!(!ok.is_finite());
        assert!(rect_path(0.0, 0.0, 5.0, 5.0).is_finite());
    }

    #[test]
    fn rectangle_syntax() {
        assert_eq!(rect_path(0.0, 0.0, 100.0, 50.0).build(), "M0,0 L100,0 L100,50 L0,50 Z");
    }

    #[test]
    fn arc_syntax_and_pen() {
        let p = PathData::new().m(10.0, 0.0).arc_to(10.0, 10.0, 0.0, 90.0);
        assert!((p.current() - dvec2(0.0, 10.0)).length() < 1e-9);
        assert_eq!(p.build(), "M10,0 A10,10 0 0,1 0,10");
    }

    #[test]
    fn degenerate_arc_is_dropped() {
        let p = PathData::new().m(1.0, 1.0).arc_to(0.0, 5.0, 0.0, 90.0).arc_to(5.0, 5.0, 0.0, 0.0);
        assert_eq!(p.build(), "M1,1");
    }

    #[test]
    fn near_full_turn_splits_when_endpoints_coincide() {
        let p = PathData::new().m(100.0, 50.0).arc_to(50.0, 50.0, 0.0, 21599999.0 / 60000.0);
        assert_eq!(p.build(), "M100,50 A50,50 0 0,1 0,50 A50,50 0 0,1 100,50");
    }

    #[test]
    fn full_turn_splits() {
        let p = ellipse_path(0.0, 0.0, 20.0, 10.0).build();
        assert_eq!(p, "M0,5 A10,5 0 0,1 20,5 A10,5 0 0,1 0,5 Z");
    }
}
