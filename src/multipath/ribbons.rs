//! Ribbons and scrolls.
//!
//! Each shape is three layers sharing the same arc geometry: the body, the
//! darkened folds, and a stroke-only outline. Mirrored variants replay the
//! canonical sketch through a [`Transform`].

use glam::{DVec2, dvec2};

use super::{FillMode, SubPath};
use crate::geometry::{Frame, Sketch, Transform, safe_div};

struct Layers {
    body: Sketch,
    folds: Sketch,
    outline: Sketch,
}

impl Layers {
    fn render(&self, xf: Transform) -> Vec<SubPath> {
        vec![
            SubPath::fill(self.body.render(xf), FillMode::Normal),
            SubPath::shade(self.folds.render(xf), FillMode::DarkenLess),
            SubPath::stroke(self.outline.render(xf)),
        ]
    }
}

/// Banner with its centre panel hanging below the tails.
fn ribbon_layers(f: &Frame) -> Layers {
    let a1 = f.adj_pin("adj1", 16667.0, 0.0, 33333.0);
    let a2 = f.adj_pin("adj2", 50000.0, 25000.0, 75000.0);
    let (r, b, hc) = (f.w, f.h, f.hc());
    let (wd8, wd32) = (r / 8.0, r / 32.0);
    let x10 = r - wd8;
    let dx2 = r * a2 / 200000.0;
    let (x2, x9) = (hc - dx2, hc + dx2);
    let (x3, x8) = (x2 + wd32, x9 - wd32);
    let (x5, x6) = (x2 + wd8, x9 - wd8);
    let (x4, x7) = (x5 - wd32, x6 + wd32);
    let y1 = b * a1 / 200000.0;
    let y2 = f.hp(a1);
    let y4 = b - y2;
    let y3 = y4 / 2.0;
    let hr = b * a1 / 400000.0;
    let y5 = b - hr;
    let y6 = y2 - hr;

    let silhouette = || {
        Sketch::new()
            .m(0.0, 0.0)
            .l(x4, 0.0)
            .arc(wd32, hr, 270.0, 180.0)
            .l(x3, y1)
            .arc(wd32, hr, 270.0, -180.0)
            .l(x8, y2)
            .arc(wd32, hr, 90.0, -180.0)
            .l(x7, y1)
            .arc(wd32, hr, 90.0, 180.0)
            .l(r, 0.0)
            .l(x10, y3)
            .l(r, y4)
            .l(x9, y4)
            .l(x9, y5)
            .arc(wd32, hr, 0.0, 90.0)
            .l(x3, b)
            .arc(wd32, hr, 90.0, 90.0)
            .l(x2, y4)
            .l(0.0, y4)
            .l(wd8, y3)
            .z()
    };
    let folds = Sketch::new()
        .m(x5, hr)
        .arc(wd32, hr, 0.0, 90.0)
        .l(x3, y1)
        .arc(wd32, hr, 270.0, -180.0)
        .l(x5, y2)
        .z()
        .m(x6, hr)
        .arc(wd32, hr, 180.0, -90.0)
        .l(x8, y1)
        .arc(wd32, hr, 270.0, 180.0)
        .l(x6, y2)
        .z();
    let outline = silhouette()
        .m(x5, hr)
        .l(x5, y2)
        .m(x6, y2)
        .l(x6, hr)
        .m(x2, y4)
        .l(x2, y6)
        .m(x9, y6)
        .l(x9, y4);
    Layers {
        body: silhouette(),
        folds,
        outline,
    }
}

pub fn ribbon(f: &Frame) -> Vec<SubPath> {
    ribbon_layers(f).render(Transform::IDENTITY)
}

pub fn ribbon2(f: &Frame) -> Vec<SubPath> {
    ribbon_layers(f).render(Transform::mirror_y(f.h))
}

/// Banner running left to right, each end an arrow-like tail, with one
/// twist at the centre where the left half passes behind the right.
pub fn left_right_ribbon(f: &Frame) -> Vec<SubPath> {
    let a3 = f.adj_pin("adj3", 16667.0, 0.0, 33333.0);
    let a1 = f.adj_pin("adj1", 50000.0, 0.0, 100000.0 - a3);
    let (r, b, hc, vc) = (f.w, f.h, f.hc(), f.vc());
    let wd32 = r / 32.0;
    let max_a2 = safe_div(100000.0 * (r / 2.0 - wd32), f.ss());
    let a2 = f.adj_pin("adj2", 50000.0, 0.0, max_a2);
    let x1 = f.ssp(a2);
    let x4 = r - x1;
    let dy1 = b * a1 / 200000.0;
    let dy2 = b * a3 / 200000.0;
    let ly1 = vc - dy2 - dy1;
    let ry4 = vc + dy1 + dy2;
    let ly2 = ly1 + dy1;
    let ry3 = b - ly2;
    let ly4 = ly2 * 2.0;
    let ry1 = b - ly4;
    let ly3 = ly4 - ly1;
    let ry2 = b - ly3;
    let hr = f.ssp(a3) / 4.0;
    let (x2, x3) = (hc - wd32, hc + wd32);

    let band = || {
        Sketch::new()
            .m(0.0, ly2)
            .l(x1, 0.0)
            .l(x1, ly1)
            .l(hc, ly1)
            .arc(wd32, hr, 270.0, 180.0)
            .arc(wd32, hr, 270.0, -180.0)
            .l(x4, ry2)
            .l(x4, ry1)
            .l(r, ry3)
            .l(x4, b)
            .l(x4, ry4)
            .l(hc, ry4)
            .arc(wd32, hr, 90.0, 90.0)
            .l(x2, ly3)
            .l(x1, ly3)
            .l(x1, ly4)
            .z()
    };
    let folds = Sketch::new()
        .m(x3, ly1 + hr)
        .arc(wd32, hr, 0.0, 90.0)
        .arc(wd32, hr, 270.0, -180.0)
        .l(x3, ry2)
        .z();
    let outline = band()
        .m(x3, ly1 + hr)
        .l(x3, ry2)
        .m(x2, ry2 - hr)
        .l(x2, ly3);
    Layers {
        body: band(),
        folds,
        outline,
    }
    .render(Transform::IDENTITY)
}

/// Vertical offset that bends a straight banner into an arch.
struct Bend {
    w: f64,
    depth: f64,
}

impl Bend {
    fn dy(&self, x: f64) -> f64 {
        if self.w <= 0.0 {
            return 0.0;
        }
        let u = x / self.w;
        4.0 * self.depth * u * (1.0 - u)
    }

    fn at(&self, x: f64, y: f64) -> DVec2 {
        dvec2(x, y + self.dy(x))
    }

    /// Horizontal run at base height `y`, as the exact quadratic of the bend.
    fn run(&self, sketch: Sketch, x0: f64, x1: f64, y: f64) -> Sketch {
        let xm = (x0 + x1) / 2.0;
        let slope = if self.w > 0.0 {
            4.0 * self.depth * (1.0 - 2.0 * x0 / self.w) / self.w
        } else {
            0.0
        };
        let ctrl = dvec2(xm, y + self.dy(x0) + slope * (xm - x0));
        let end = self.at(x1, y);
        sketch.q(ctrl.x, ctrl.y, end.x, end.y)
    }

    fn line(&self, sketch: Sketch, x: f64, y: f64) -> Sketch {
        let p = self.at(x, y);
        sketch.l(p.x, p.y)
    }

    fn start(&self, x: f64, y: f64) -> Sketch {
        let p = self.at(x, y);
        Sketch::new().m(p.x, p.y)
    }
}

/// Arched banner whose centre panel sags below the tails.
fn ellipse_ribbon_layers(f: &Frame) -> Layers {
    let a1 = f.adj_pin("adj1", 25000.0, 0.0, 50000.0);
    let a2 = f.adj_pin("adj2", 50000.0, 25000.0, 75000.0);
    let a3 = f.adj_pin("adj3", 12500.0, 0.0, 50000.0);
    let (r, hc) = (f.w, f.hc());
    let bend = Bend {
        w: r,
        depth: f.hp(a3),
    };
    let s = f.h - bend.depth;
    let wd8 = r / 8.0;
    let dx2 = r * a2 / 200000.0;
    let (x2, x5) = (hc - dx2, hc + dx2);
    let (x3, x4) = (x2 + wd8, x5 - wd8);
    let y1 = s * a1 / 100000.0;
    let yt = s - y1;
    let ym = yt / 2.0;

    let silhouette = || {
        let sk = bend.start(0.0, 0.0);
        let sk = bend.run(sk, 0.0, x3, 0.0);
        let sk = bend.line(sk, x3, y1);
        let sk = bend.run(sk, x3, x4, y1);
        let sk = bend.line(sk, x4, 0.0);
        let sk = bend.run(sk, x4, r, 0.0);
        let sk = bend.line(sk, r - wd8, ym);
        let sk = bend.line(sk, r, yt);
        let sk = bend.run(sk, r, x5, yt);
        let sk = bend.line(sk, x5, s);
        let sk = bend.run(sk, x5, x2, s);
        let sk = bend.line(sk, x2, yt);
        let sk = bend.run(sk, x2, 0.0, yt);
        bend.line(sk, wd8, ym).z()
    };
    let fold = |xa: f64, xb: f64| {
        let sk = bend.start(xa, 0.0);
        let sk = bend.run(sk, xa, xb, 0.0);
        let sk = bend.line(sk, xb, y1);
        bend.run(sk, xb, xa, y1).z()
    };
    let folds = fold(x2, x3).extend(&fold(x4, x5));
    let seams = {
        let sk = bend.start(x2, y1);
        let sk = bend.line(sk, x2, yt);
        let p = bend.at(x5, yt);
        let sk = sk.m(p.x, p.y);
        bend.line(sk, x5, y1)
    };
    Layers {
        body: silhouette(),
        folds,
        outline: silhouette().extend(&seams),
    }
}

pub fn ellipse_ribbon(f: &Frame) -> Vec<SubPath> {
    ellipse_ribbon_layers(f).render(Transform::IDENTITY)
}

pub fn ellipse_ribbon2(f: &Frame) -> Vec<SubPath> {
    ellipse_ribbon_layers(f).render(Transform::mirror_y(f.h))
}

/// Scroll rolled at the top right and bottom left, drawn in a `w x h` frame.
fn scroll_layers(f: &Frame, w: f64, h: f64) -> Layers {
    let a = f.adj_pin("adj", 12500.0, 0.0, 25000.0);
    let ch = f.ssp(a);
    let (ch2, ch4) = (ch / 2.0, ch / 4.0);
    let (x3, x4) = (ch + ch2, ch + ch);
    let (x6, x7) = (w - ch, w - ch2);
    let (y3, y4) = (h - ch, h - ch2);

    let body = Sketch::new()
        .m(ch2, h)
        .arc(ch2, ch2, 90.0, -90.0)
        .l(ch, ch2)
        .arc(ch2, ch2, 180.0, 90.0)
        .l(x7, 0.0)
        .arc(ch2, ch2, 270.0, 180.0)
        .l(x6, ch)
        .l(x6, y4)
        .arc(ch2, ch2, 0.0, 90.0)
        .z()
        .m(x4, ch2)
        .arc(ch2, ch2, 0.0, 90.0)
        .arc(ch4, ch4, 90.0, 180.0)
        .z();
    let folds = Sketch::new()
        .m(x4, ch2)
        .arc(ch2, ch2, 0.0, 90.0)
        .arc(ch4, ch4, 90.0, 180.0)
        .z()
        .m(ch, y4)
        .arc(ch2, ch2, 0.0, 270.0)
        .arc(ch4, ch4, 270.0, 180.0)
        .z();
    let outline = Sketch::new()
        .m(ch, y3)
        .l(ch, ch2)
        .arc(ch2, ch2, 180.0, 90.0)
        .l(x7, 0.0)
        .arc(ch2, ch2, 270.0, 180.0)
        .l(x6, ch)
        .l(x6, y4)
        .arc(ch2, ch2, 0.0, 90.0)
        .l(ch2, h)
        .arc(ch2, ch2, 90.0, 180.0)
        .z()
        .m(x3, 0.0)
        .arc(ch2, ch2, 270.0, 180.0)
        .arc(ch4, ch4, 90.0, 180.0)
        .l(x4, ch2)
        .m(x6, ch)
        .l(x3, ch)
        .m(ch2, y3)
        .arc(ch4, ch4, 270.0, 180.0)
        .l(ch, y4)
        .m(ch2, h)
        .arc(ch2, ch2, 90.0, -90.0)
        .l(ch, y3);
    Layers {
        body,
        folds,
        outline,
    }
}

pub fn vertical_scroll(f: &Frame) -> Vec<SubPath> {
    scroll_layers(f, f.w, f.h).render(Transform::IDENTITY)
}

/// The vertical scroll drawn in the transposed frame and swapped back.
pub fn horizontal_scroll(f: &Frame) -> Vec<SubPath> {
    scroll_layers(f, f.h, f.w).render(Transform::transpose())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Adjustments;

    #[test]
    fn ribbon_starts_at_top_left_and_mirrors() {
        let adj = Adjustments::new();
        let f = Frame::new(320.0, 120.0, &adj);
        let down = ribbon(&f);
        let up = ribbon2(&f);
        assert!(down[0].path.starts_with("M0,0 L110,0 A10,5 0 0,1 110,10 L90,10"), "{}", down[0].path);
        assert!(up[0].path.starts_with("M0,120 L110,120 A10,5 0 0,0 110,110 L90,110"), "{}", up[0].path);
        assert_eq!(down.len(), 3);
        assert_eq!(down[1].fill_mode, FillMode::DarkenLess);
    }

    #[test]
    fn left_right_ribbon_twists_at_the_centre() {
        let adj = Adjustments::new();
        let layers = left_right_ribbon(&Frame::new(320.0, 120.0, &adj));
        assert!(
            layers[0].path.starts_with("M0,50 L60,0 L60,20 L160,20 A10,5 0 0,1 160,30"),
            "{}",
            layers[0].path
        );
        let modes: Vec<_> = layers.iter().map(|l| l.fill_mode).collect();
        assert_eq!(modes, [FillMode::Normal, FillMode::DarkenLess, FillMode::None]);
        assert!(!layers[1].silhouette);
        assert_eq!(crate::multipath::flatten_layers(&layers), layers[0].path);
    }

    #[test]
    fn flat_ellipse_ribbon_has_straight_runs() {
        let adj = Adjustments::new().with("adj3", 0.0);
        let f = Frame::new(160.0, 100.0, &adj);
        let layers = ellipse_ribbon(&f);
        assert!(layers[0].path.starts_with("M0,0 Q30,0 60,0 L60,25"), "{}", layers[0].path);
    }

    #[test]
    fn arched_ellipse_ribbon_sags_in_the_middle() {
        let adj = Adjustments::new();
        let f = Frame::new(160.0, 100.0, &adj);
        let layers = ellipse_ribbon(&f);
        // Run from x=0 to x=60 on a bend of depth 12.5.
        assert!(layers[0].path.starts_with("M0,0 Q30,9.375 60,11.719"), "{}", layers[0].path);
    }

    #[test]
    fn horizontal_scroll_is_transposed_vertical() {
        let adj = Adjustments::new();
        let v = vertical_scroll(&Frame::new(80.0, 200.0, &adj));
        let h = horizontal_scroll(&Frame::new(200.0, 80.0, &adj));
        assert!(v[0].path.starts_with("M5,200 A5,5 0 0,0 10,195"), "{}", v[0].path);
        assert!(h[0].path.starts_with("M200,5 A5,5 0 0,1 195,10"), "{}", h[0].path);
    }
}
