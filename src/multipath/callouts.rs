//! Line callouts: a text box plus a leader polyline with one to three
//! segments. Accent variants add a vertical bar beside the box; border
//! variants stroke the box itself.

use super::{FillMode, SubPath};
use crate::geometry::path::rect_path;
use crate::geometry::{Frame, PathData};

/// Leader points as `(y, x)` adjustment defaults, in 1/100000 of the frame.
const LEADER_1: [(f64, f64); 2] = [(18750.0, -8333.0), (112500.0, -38333.0)];
const LEADER_2: [(f64, f64); 3] = [(18750.0, -8333.0), (18750.0, -16667.0), (112500.0, -46667.0)];
const LEADER_3: [(f64, f64); 4] = [
    (18750.0, -8333.0),
    (18750.0, -16667.0),
    (100000.0, -16667.0),
    (112963.0, -8333.0),
];

#[derive(Debug, Clone, Copy)]
struct Style {
    accent: bool,
    border: bool,
}

const PLAIN: Style = Style {
    accent: false,
    border: false,
};
const ACCENT: Style = Style {
    accent: true,
    border: false,
};
const BORDER: Style = Style {
    accent: false,
    border: true,
};
const ACCENT_BORDER: Style = Style {
    accent: true,
    border: true,
};

/// Adjustments come in `(adj1, adj2), (adj3, adj4), ...` pairs of `(y, x)`.
fn leader(f: &Frame, defaults: &[(f64, f64)]) -> PathData {
    let mut path = PathData::new();
    for (i, &(dy, dx)) in defaults.iter().enumerate() {
        let y = f.hp(f.adj(&format!("adj{}", 2 * i + 1), dy));
        let x = f.wp(f.adj(&format!("adj{}", 2 * i + 2), dx));
        path = if i == 0 { path.m(x, y) } else { path.l(x, y) };
    }
    path
}

fn line_callout(f: &Frame, defaults: &[(f64, f64)], style: Style) -> Vec<SubPath> {
    let bx = rect_path(0.0, 0.0, f.w, f.h);
    let mut layers = vec![if style.border {
        SubPath::solid(bx)
    } else {
        SubPath::fill(bx, FillMode::Normal)
    }];
    let leader = leader(f, defaults);
    if style.accent {
        let start = leader_start(f, defaults);
        layers.push(SubPath::stroke(PathData::new().m(start, 0.0).l(start, f.h)));
    }
    layers.push(SubPath::stroke(leader));
    layers
}

/// X of the leader's first point, where the accent bar is drawn.
fn leader_start(f: &Frame, defaults: &[(f64, f64)]) -> f64 {
    let dx = defaults.first().map_or(0.0, |&(_, dx)| dx);
    f.wp(f.adj("adj2", dx))
}

pub fn callout1(f: &Frame) -> Vec<SubPath> {
    line_callout(f, &LEADER_1, PLAIN)
}

pub fn callout2(f: &Frame) -> Vec<SubPath> {
    line_callout(f, &LEADER_2, PLAIN)
}

pub fn callout3(f: &Frame) -> Vec<SubPath> {
    line_callout(f, &LEADER_3, PLAIN)
}

pub fn accent_callout1(f: &Frame) -> Vec<SubPath> {
    line_callout(f, &LEADER_1, ACCENT)
}

pub fn accent_callout2(f: &Frame) -> Vec<SubPath> {
    line_callout(f, &LEADER_2, ACCENT)
}

pub fn accent_callout3(f: &Frame) -> Vec<SubPath> {
    line_callout(f, &LEADER_3, ACCENT)
}

pub fn border_callout1(f: &Frame) -> Vec<SubPath> {
    line_callout(f, &LEADER_1, BORDER)
}

pub fn border_callout2(f: &Frame) -> Vec<SubPath> {
    line_callout(f, &LEADER_2, BORDER)
}

pub fn border_callout3(f: &Frame) -> Vec<SubPath> {
    line_callout(f, &LEADER_3, BORDER)
}

pub fn accent_border_callout1(f: &Frame) -> Vec<SubPath> {
    line_callout(f, &LEADER_1, ACCENT_BORDER)
}

pub fn accent_border_callout2(f: &Frame) -> Vec<SubPath> {
    line_callout(f, &LEADER_2, ACCENT_BORDER)
}

pub fn accent_border_callout3(f: &Frame) -> Vec<SubPath> {
    line_callout(f, &LEADER_3, ACCENT_BORDER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Adjustments;

    #[test]
    fn default_leader_leaves_the_box() {
        let adj = Adjustments::new();
        let layers = callout1(&Frame::new(120.0, 80.0, &adj));
        assert_eq!(layers.len(), 2);
        assert!(!layers[0].stroked);
        assert_eq!(layers[1].path, "M-10,15 L-46,90");
    }

    #[test]
    fn three_segment_leader_reads_all_pairs() {
        let adj = Adjustments::new().with("adj7", 50000.0).with("adj8", 150000.0);
        let layers = border_callout3(&Frame::new(100.0, 100.0, &adj));
        assert!(layers[0].stroked);
        assert_eq!(layers[1].path, "M-8.333,18.75 L-16.667,18.75 L-16.667,100 L150,50");
    }

    #[test]
    fn accent_bar_sits_at_leader_start() {
        let adj = Adjustments::new().with("adj2", -10000.0);
        let layers = accent_border_callout2(&Frame::new(100.0, 50.0, &adj));
        assert_eq!(layers.len(), 3);
        assert_eq!(layers[1].path, "M-10,0 L-10,50");
    }
}
