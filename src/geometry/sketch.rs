//! Recorded path operations that can be replayed under a reflection.
//!
//! Shapes that come in mirrored or rotated variants (left/right/up/down
//! arrows, flipped ribbons) derive one canonical outline and replay it
//! through a [`Transform`]. Arcs stay in the DrawingML form (radii, start,
//! sweep) until replay so that reflections map angles exactly.

use glam::{DVec2, dvec2};

use super::path::PathData;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Op {
    Move(DVec2),
    Line(DVec2),
    Cubic(DVec2, DVec2, DVec2),
    Quad(DVec2, DVec2),
    Arc { radii: DVec2, start: f64, sweep: f64 },
    Close,
}

/// Axis swap followed by optional flips about the given extents.
///
/// Flip extents are measured in the *output* frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub swap: bool,
    pub flip_x: Option<f64>,
    pub flip_y: Option<f64>,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        swap: false,
        flip_x: None,
        flip_y: None,
    };

    pub fn mirror_x(w: f64) -> Self {
        Transform {
            flip_x: Some(w),
            ..Self::IDENTITY
        }
    }

    pub fn mirror_y(h: f64) -> Self {
        Transform {
            flip_y: Some(h),
            ..Self::IDENTITY
        }
    }

    pub fn transpose() -> Self {
        Transform {
            swap: true,
            ..Self::IDENTITY
        }
    }

    pub fn with_flip_y(mut self, h: f64) -> Self {
        self.flip_y = Some(h);
        self
    }

    pub fn with_flip_x(mut self, w: f64) -> Self {
        self.flip_x = Some(w);
        self
    }

    pub fn point(&self, p: DVec2) -> DVec2 {
        let mut q = if self.swap { dvec2(p.y, p.x) } else { p };
        if let Some(w) = self.flip_x {
            q.x = w - q.x;
        }
        if let Some(h) = self.flip_y {
            q.y = h - q.y;
        }
        q
    }

    /// Map an arc's radii, visual start angle and sweep.
    pub fn arc(&self, radii: DVec2, start: f64, sweep: f64) -> (DVec2, f64, f64) {
        let (mut r, mut st, mut sw) = (radii, start, sweep);
        if self.swap {
            r = dvec2(r.y, r.x);
            st = 90.0 - st;
            sw = -sw;
        }
        if self.flip_x.is_some() {
            st = 180.0 - st;
            sw = -sw;
        }
        if self.flip_y.is_some() {
            st = -st;
            sw = -sw;
        }
        (r, st, sw)
    }
}

/// Path recorded in a canonical orientation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sketch {
    ops: Vec<Op>,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.ops.push(Op::Move(dvec2(x, y)));
        self
    }

    pub fn l(mut self, x: f64, y: f64) -> Self {
        self.ops.push(Op::Line(dvec2(x, y)));
        self
    }

    pub fn c(mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        self.ops.push(Op::Cubic(dvec2(x1, y1), dvec2(x2, y2), dvec2(x, y)));
        self
    }

    pub fn q(mut self, x1: f64, y1: f64, x: f64, y: f64) -> Self {
        self.ops.push(Op::Quad(dvec2(x1, y1), dvec2(x, y)));
        self
    }

    pub fn arc(mut self, rx: f64, ry: f64, start: f64, sweep: f64) -> Self {
        self.ops.push(Op::Arc {
            radii: dvec2(rx, ry),
            start,
            sweep,
        });
        self
    }

    pub fn z(mut self) -> Self {
        self.ops.push(Op::Close);
        self
    }

    /// Append all operations of `other`.
    pub fn extend(mut self, other: &Sketch) -> Self {
        self.ops.extend_from_slice(&other.ops);
        self
    }

    pub fn render(&self, xf: Transform) -> PathData {
        let mut path = PathData::new();
        for op in &self.ops {
            path = match *op {
                Op::Move(p) => path.mv(xf.point(p)),
                Op::Line(p) => path.ln(xf.point(p)),
                Op::Cubic(a, b, p) => {
                    let (a, b, p) = (xf.point(a), xf.point(b), xf.point(p));
                    path.c(a.x, a.y, b.x, b.y, p.x, p.y)
                }
                Op::Quad(a, p) => {
                    let (a, p) = (xf.point(a), xf.point(p));
                    path.q(a.x, a.y, p.x, p.y)
                }
                Op::Arc { radii, start, sweep } => {
                    let (r, st, sw) = xf.arc(radii, start, sweep);
                    path.arc_to(r.x, r.y, st, sw)
                }
                Op::Close => path.z(),
            };
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_matches_direct_path() {
        let sketch = Sketch::new().m(10.0, 0.0).arc(10.0, 10.0, 0.0, 90.0).l(0.0, 0.0).z();
        let direct = PathData::new().m(10.0, 0.0).arc_to(10.0, 10.0, 0.0, 90.0).l(0.0, 0.0).z();
        assert_eq!(sketch.render(Transform::IDENTITY), direct);
    }

    #[test]
    fn mirrored_arc_lands_on_mirrored_point() {
        // Quarter arc from (20, 10) around (10, 10) ending at (10, 20).
        let sketch = Sketch::new().m(20.0, 10.0).arc(10.0, 10.0, 0.0, 90.0);
        let p = sketch.render(Transform::mirror_x(30.0));
        assert!((p.current() - dvec2(20.0, 20.0)).length() < 1e-9);
    }

    #[test]
    fn transposed_ellipse_arc() {
        let sketch = Sketch::new().m(20.0, 5.0).arc(20.0, 5.0, 0.0, 90.0);
        let p = sketch.render(Transform::transpose());
        // Canonical end (0, 10) becomes (10, 0).
        assert!((p.current() - dvec2(10.0, 0.0)).length() < 1e-9);
    }
}
