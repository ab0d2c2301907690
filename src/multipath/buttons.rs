//! Action buttons.
//!
//! Every button is painted as: background rectangle, icon fill layers, the
//! icon outline, then the border. Icons are authored in a unit square that
//! is centred in the frame with a side of three quarters of `ss`.

use glam::{DVec2, dvec2};

use super::{FillMode, SubPath};
use crate::geometry::path::{ellipse_path, polygon, rect_path};
use crate::geometry::{Frame, PathData};

struct Icon {
    origin: DVec2,
    size: f64,
}

impl Icon {
    fn new(f: &Frame) -> Self {
        let dx2 = f.ss() * 3.0 / 8.0;
        Icon {
            origin: f.center() - DVec2::splat(dx2),
            size: 2.0 * dx2,
        }
    }

    fn p(&self, u: f64, v: f64) -> DVec2 {
        self.origin + dvec2(u, v) * self.size
    }

    fn len(&self, v: f64) -> f64 {
        v * self.size
    }

    fn polygon(&self, pts: &[(f64, f64)]) -> PathData {
        let pts: Vec<DVec2> = pts.iter().map(|&(u, v)| self.p(u, v)).collect();
        polygon(&pts)
    }

    fn rect(&self, u: f64, v: f64, w: f64, h: f64) -> PathData {
        let p = self.p(u, v);
        rect_path(p.x, p.y, self.len(w), self.len(h))
    }

    fn circle(&self, u: f64, v: f64, r: f64) -> PathData {
        let p = self.p(u - r, v - r);
        ellipse_path(p.x, p.y, self.len(2.0 * r), self.len(2.0 * r))
    }

    fn mv(&self, path: PathData, u: f64, v: f64) -> PathData {
        path.mv(self.p(u, v))
    }

    fn ln(&self, path: PathData, u: f64, v: f64) -> PathData {
        path.ln(self.p(u, v))
    }

    fn arc(&self, path: PathData, r: f64, start: f64, sweep: f64) -> PathData {
        let r = self.len(r);
        path.arc_to(r, r, start, sweep)
    }
}

fn button(f: &Frame, layers: Vec<(PathData, FillMode)>, marks: PathData) -> Vec<SubPath> {
    let border = rect_path(0.0, 0.0, f.w, f.h);
    let mut out = vec![SubPath::fill(border.clone(), FillMode::Normal)];
    let mut outline = PathData::new();
    for (path, mode) in layers {
        outline = outline.append(path.clone());
        out.push(SubPath::shade(path, mode));
    }
    let outline = outline.append(marks);
    if !outline.is_empty() {
        out.push(SubPath::stroke(outline));
    }
    out.push(SubPath::stroke(border));
    out
}

pub fn blank(f: &Frame) -> Vec<SubPath> {
    vec![SubPath::solid(rect_path(0.0, 0.0, f.w, f.h))]
}

pub fn home(f: &Frame) -> Vec<SubPath> {
    let i = Icon::new(f);
    let house = i.polygon(&[
        (0.5, 0.0),
        (1.0, 0.5),
        (0.875, 0.5),
        (0.875, 1.0),
        (0.125, 1.0),
        (0.125, 0.5),
        (0.0, 0.5),
    ]);
    let chimney = i.polygon(&[(0.7, 0.05), (0.8, 0.05), (0.8, 0.3), (0.7, 0.2)]);
    let door = i.rect(0.4, 0.65, 0.2, 0.35);
    button(
        f,
        vec![(house, FillMode::DarkenLess), (chimney.append(door), FillMode::Darken)],
        PathData::new(),
    )
}

pub fn help(f: &Frame) -> Vec<SubPath> {
    let i = Icon::new(f);
    let p = i.mv(PathData::new(), 0.2, 0.32);
    let p = i.arc(p, 0.3, 180.0, 240.0);
    let p = i.ln(p, 0.575, 0.65);
    let p = i.ln(p, 0.575, 0.75);
    let p = i.ln(p, 0.425, 0.75);
    let p = i.ln(p, 0.425, 0.6);
    let p = i.ln(p, 0.575, 0.45);
    let p = i.arc(p, 0.15, 60.0, -240.0);
    let hook = p.z();
    let dot = i.circle(0.5, 0.9, 0.07);
    button(f, vec![(hook.append(dot), FillMode::Darken)], PathData::new())
}

pub fn information(f: &Frame) -> Vec<SubPath> {
    let i = Icon::new(f);
    let disc = i.circle(0.5, 0.5, 0.5);
    let dot = i.circle(0.5, 0.22, 0.08);
    let stem = i.polygon(&[
        (0.42, 0.38),
        (0.58, 0.38),
        (0.58, 0.8),
        (0.64, 0.8),
        (0.64, 0.86),
        (0.36, 0.86),
        (0.36, 0.8),
        (0.42, 0.8),
    ]);
    button(
        f,
        vec![(disc, FillMode::Darken), (dot.append(stem), FillMode::Lighten)],
        PathData::new(),
    )
}

pub fn back_previous(f: &Frame) -> Vec<SubPath> {
    let i = Icon::new(f);
    let tri = i.polygon(&[(1.0, 0.0), (1.0, 1.0), (0.0, 0.5)]);
    button(f, vec![(tri, FillMode::Darken)], PathData::new())
}

pub fn forward_next(f: &Frame) -> Vec<SubPath> {
    let i = Icon::new(f);
    let tri = i.polygon(&[(0.0, 0.0), (1.0, 0.5), (0.0, 1.0)]);
    button(f, vec![(tri, FillMode::Darken)], PathData::new())
}

pub fn beginning(f: &Frame) -> Vec<SubPath> {
    let i = Icon::new(f);
    let tri = i.polygon(&[(1.0, 0.0), (1.0, 1.0), (0.25, 0.5)]);
    let bar = i.rect(0.0, 0.0, 0.125, 1.0);
    button(f, vec![(tri.append(bar), FillMode::Darken)], PathData::new())
}

pub fn end(f: &Frame) -> Vec<SubPath> {
    let i = Icon::new(f);
    let tri = i.polygon(&[(0.0, 0.0), (0.75, 0.5), (0.0, 1.0)]);
    let bar = i.rect(0.875, 0.0, 0.125, 1.0);
    button(f, vec![(tri.append(bar), FillMode::Darken)], PathData::new())
}

/// U-turn arrow with its head on the left pointing up.
pub fn return_(f: &Frame) -> Vec<SubPath> {
    let i = Icon::new(f);
    let p = i.mv(PathData::new(), 0.875, 0.25);
    let p = i.ln(p, 0.875, 0.625);
    let p = i.arc(p, 0.25, 0.0, 90.0);
    let p = i.ln(p, 0.375, 0.875);
    let p = i.arc(p, 0.25, 90.0, 90.0);
    let p = i.ln(p, 0.125, 0.25);
    let p = i.ln(p, 0.0, 0.25);
    let p = i.ln(p, 0.1875, 0.0);
    let p = i.ln(p, 0.375, 0.25);
    let p = i.ln(p, 0.25, 0.25);
    let p = i.ln(p, 0.25, 0.625);
    let p = i.arc(p, 0.125, 180.0, -90.0);
    let p = i.ln(p, 0.625, 0.75);
    let p = i.arc(p, 0.125, 90.0, -90.0);
    let p = i.ln(p, 0.75, 0.25);
    button(f, vec![(p.z(), FillMode::Darken)], PathData::new())
}

pub fn document(f: &Frame) -> Vec<SubPath> {
    let i = Icon::new(f);
    let page = i.polygon(&[
        (0.125, 0.0),
        (0.625, 0.0),
        (0.875, 0.25),
        (0.875, 1.0),
        (0.125, 1.0),
    ]);
    let fold = i.polygon(&[(0.625, 0.0), (0.625, 0.25), (0.875, 0.25)]);
    button(
        f,
        vec![(page, FillMode::DarkenLess), (fold, FillMode::Darken)],
        PathData::new(),
    )
}

pub fn sound(f: &Frame) -> Vec<SubPath> {
    let i = Icon::new(f);
    let speaker = i.polygon(&[
        (0.0, 0.3125),
        (0.25, 0.3125),
        (0.5, 0.0),
        (0.5, 1.0),
        (0.25, 0.6875),
        (0.0, 0.6875),
    ]);
    let mut waves = PathData::new();
    for (v0, v1) in [(0.3125, 0.125), (0.5, 0.5), (0.6875, 0.875)] {
        waves = i.mv(waves, 0.625, v0);
        waves = i.ln(waves, if v0 == v1 { 1.0 } else { 0.875 }, v1);
    }
    button(f, vec![(speaker, FillMode::Darken)], waves)
}

pub fn movie(f: &Frame) -> Vec<SubPath> {
    let i = Icon::new(f);
    let camera = i.rect(0.0, 0.3, 0.75, 0.45).append(i.polygon(&[
        (0.75, 0.525),
        (1.0, 0.3),
        (1.0, 0.75),
    ]));
    let reels = i.circle(0.2, 0.17, 0.13).append(i.circle(0.5, 0.17, 0.13));
    button(
        f,
        vec![(camera, FillMode::Darken), (reels, FillMode::DarkenLess)],
        PathData::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Adjustments;

    #[test]
    fn forward_button_layers() {
        let adj = Adjustments::new();
        let layers = forward_next(&Frame::new(100.0, 100.0, &adj));
        let modes: Vec<_> = layers.iter().map(|l| l.fill_mode).collect();
        assert_eq!(
            modes,
            [FillMode::Normal, FillMode::Darken, FillMode::None, FillMode::None]
        );
        assert_eq!(layers[1].path, "M12.5,12.5 L87.5,50 L12.5,87.5 Z");
        assert_eq!(layers[3].path, "M0,0 L100,0 L100,100 L0,100 Z");
    }

    #[test]
    fn icon_is_centred_on_the_short_side() {
        let adj = Adjustments::new();
        let layers = back_previous(&Frame::new(200.0, 80.0, &adj));
        assert_eq!(layers[1].path, "M130,10 L130,70 L70,40 Z");
    }

    #[test]
    fn sound_outline_carries_the_waves() {
        let adj = Adjustments::new();
        let layers = sound(&Frame::new(80.0, 80.0, &adj));
        assert_eq!(layers[2].path.matches('M').count(), 4);
    }

    #[test]
    fn blank_is_one_solid_layer() {
        let adj = Adjustments::new();
        let layers = blank(&Frame::new(10.0, 10.0, &adj));
        assert_eq!(layers.len(), 1);
        assert!(layers[0].stroked && layers[0].fill_mode == FillMode::Normal);
    }
}
