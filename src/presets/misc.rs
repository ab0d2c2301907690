//! Everything else: hearts, bolts, suns, clouds, waves, gears, tabs and chart marks.

use glam::{DVec2, dvec2};

use super::callouts::cloud_outline;
use crate::geometry::arc::parametric_to_visual;
use crate::geometry::path::{ellipse_path, polygon, rect_path};
use crate::geometry::{Frame, PathData, polar, safe_div};

pub fn heart(f: &Frame) -> PathData {
    let (hc, b) = (f.hc(), f.h);
    let dx1 = f.w * 49.0 / 48.0;
    let dx2 = f.w * 10.0 / 48.0;
    let y1 = -b / 3.0;
    let hd4 = b / 4.0;
    PathData::new()
        .m(hc, hd4)
        .c(hc + dx2, y1, hc + dx1, hd4, hc, b)
        .c(hc - dx1, hd4, hc - dx2, y1, hc, hd4)
        .z()
}

pub fn lightning_bolt(f: &Frame) -> PathData {
    const BOLT: [(f64, f64); 11] = [
        (8458.0, 0.0),
        (12860.0, 6080.0),
        (11113.0, 6833.0),
        (16820.0, 11990.0),
        (15492.0, 12635.0),
        (21600.0, 21600.0),
        (12226.0, 14292.0),
        (13627.0, 13668.0),
        (7061.0, 10050.0),
        (8811.0, 9293.0),
        (0.0, 3720.0),
    ];
    let (sx, sy) = (f.w / 21600.0, f.h / 21600.0);
    let pts: Vec<DVec2> = BOLT.iter().map(|&(x, y)| dvec2(x * sx, y * sy)).collect();
    polygon(&pts)
}

/// Disc with eight triangular rays; `adj` sets how far the rays reach in.
pub fn sun(f: &Frame) -> PathData {
    let a = f.adj_pin("adj", 25000.0, 12500.0, 46875.0);
    let (c, r) = (f.center(), f.half());
    let ray = a / 50000.0;
    let base = r * (1.0 - ray);
    let disc = base * 0.8;
    let mut path = ellipse_path(c.x - disc.x, c.y - disc.y, 2.0 * disc.x, 2.0 * disc.y);
    for k in 0..8 {
        let ang = k as f64 * 45.0;
        path = path.append(polygon(&[
            polar(c, r, ang),
            polar(c, base, ang + 10.0),
            polar(c, base, ang - 10.0),
        ]));
    }
    path
}

pub fn cloud(f: &Frame) -> PathData {
    cloud_outline(f)
}

/// Shared wave outline: `periods` S-curves along the top, mirrored along
/// the bottom, shifted horizontally by `adj2`.
fn wave_path(f: &Frame, periods: usize, default_adj1: f64, max_adj1: f64) -> PathData {
    let a1 = f.adj_pin("adj1", default_adj1, 0.0, max_adj1);
    let a2 = f.adj_pin("adj2", 0.0, -10000.0, 10000.0);
    let (r, b) = (f.w, f.h);
    let y1 = f.hp(a1);
    let dy2 = y1 * 10.0 / 3.0;
    let y4 = b - y1;
    let of2 = r * a2 / 50000.0;
    let left_top = (-of2).max(0.0);
    let right_top = r - of2.max(0.0);
    let left_bottom = of2.max(0.0);
    let right_bottom = r + of2.min(0.0);

    let span = (right_top - left_top) / periods as f64;
    let mut path = PathData::new().m(left_top, y1);
    for i in 0..periods {
        let x0 = left_top + span * i as f64;
        path = path.c(x0 + span / 3.0, y1 - dy2, x0 + span * 2.0 / 3.0, y1 + dy2, x0 + span, y1);
    }
    path = path.l(right_bottom, y4);
    let span = (right_bottom - left_bottom) / periods as f64;
    for i in (0..periods).rev() {
        let x0 = left_bottom + span * i as f64;
        path = path.c(x0 + span * 2.0 / 3.0, y4 + dy2, x0 + span / 3.0, y4 - dy2, x0, y4);
    }
    path.z()
}

pub fn wave(f: &Frame) -> PathData {
    wave_path(f, 1, 12500.0, 20000.0)
}

pub fn double_wave(f: &Frame) -> PathData {
    wave_path(f, 2, 6250.0, 12500.0)
}

/// Tab size shared by the corner/square/plaque tabs: a twentieth of the diagonal.
fn tab(f: &Frame) -> f64 {
    f.w.hypot(f.h) / 20.0
}

pub fn corner_tabs(f: &Frame) -> PathData {
    let dx = tab(f);
    let (r, b) = (f.w, f.h);
    polygon(&[dvec2(0.0, 0.0), dvec2(dx, 0.0), dvec2(0.0, dx)])
        .append(polygon(&[dvec2(0.0, b - dx), dvec2(dx, b), dvec2(0.0, b)]))
        .append(polygon(&[dvec2(r - dx, 0.0), dvec2(r, 0.0), dvec2(r, dx)]))
        .append(polygon(&[dvec2(r, b - dx), dvec2(r, b), dvec2(r - dx, b)]))
}

pub fn square_tabs(f: &Frame) -> PathData {
    let dx = tab(f);
    let (r, b) = (f.w, f.h);
    rect_path(0.0, 0.0, dx, dx)
        .append(rect_path(0.0, b - dx, dx, dx))
        .append(rect_path(r - dx, 0.0, dx, dx))
        .append(rect_path(r - dx, b - dx, dx, dx))
}

pub fn plaque_tabs(f: &Frame) -> PathData {
    let dx = tab(f);
    let (r, b) = (f.w, f.h);
    let tl = PathData::new().m(0.0, 0.0).l(dx, 0.0).arc_to(dx, dx, 0.0, 90.0).z();
    let bl = PathData::new().m(0.0, b - dx).arc_to(dx, dx, 270.0, 90.0).l(0.0, b).z();
    let tr = PathData::new().m(r, dx).arc_to(dx, dx, 90.0, 90.0).l(r, 0.0).z();
    let br = PathData::new().m(r - dx, b).arc_to(dx, dx, 180.0, 90.0).l(r, b).z();
    tl.append(bl).append(tr).append(br)
}

pub fn chart_plus(f: &Frame) -> PathData {
    let (hc, vc) = (f.hc(), f.vc());
    PathData::new()
        .m(hc, 0.0)
        .l(hc, f.h)
        .m(0.0, vc)
        .l(f.w, vc)
}

pub fn chart_x(f: &Frame) -> PathData {
    PathData::new()
        .m(0.0, 0.0)
        .l(f.w, f.h)
        .m(f.w, 0.0)
        .l(0.0, f.h)
}

pub fn chart_star(f: &Frame) -> PathData {
    chart_x(f).m(f.hc(), 0.0).l(f.hc(), f.h)
}

/// Toothed wheel: `adj1` is the tooth height, `adj2` the half width of a
/// tooth tip, both relative to `ss`. The rim between teeth follows the root
/// ellipse.
fn gear(f: &Frame, teeth: u32, default_adj1: f64, default_adj2: f64, max_adj2: f64) -> PathData {
    let a1 = f.adj_pin("adj1", default_adj1, 0.0, 20000.0);
    let a2 = f.adj_pin("adj2", default_adj2, 0.0, max_adj2);
    let c = f.center();
    let r = f.ss() / 2.0;
    let outer = f.half();
    let root = outer * safe_div((r - f.ssp(a1)).max(0.0), r);
    let pitch = 360.0 / teeth as f64;
    let tip_half = safe_div(f.ssp(a2), r).clamp(0.0, 1.0).asin().to_degrees().min(pitch / 4.0);
    let root_half = (tip_half + pitch / 8.0).min(pitch * 0.45);

    let mut path = PathData::new().mv(polar(c, root, -90.0 - root_half));
    for k in 0..teeth {
        let mid = -90.0 + k as f64 * pitch;
        path = path
            .ln(polar(c, outer, mid - tip_half))
            .ln(polar(c, outer, mid + tip_half))
            .ln(polar(c, root, mid + root_half));
        let from = parametric_to_visual(root, mid + root_half);
        let to = parametric_to_visual(root, mid + pitch - root_half);
        path = path.arc_to(root.x, root.y, from, (to - from).rem_euclid(360.0));
    }
    path.z()
}

pub fn gear6(f: &Frame) -> PathData {
    gear(f, 6, 15000.0, 3526.0, 5358.0)
}

pub fn gear9(f: &Frame) -> PathData {
    gear(f, 9, 10000.0, 1763.0, 2679.0)
}

/// Funnel: the open top ellipse, a body tapering to a small rounded spout,
/// and the inside of the rim cut out.
pub fn funnel(f: &Frame) -> PathData {
    let (r, b, hc) = (f.w, f.h, f.hc());
    let (wd2, hd4) = (r / 2.0, b / 4.0);
    let d = f.ss() / 20.0;
    let (spout_w, spout_h) = (r / 8.0, b / 20.0);
    let outer = PathData::new()
        .m(0.0, hd4)
        .arc_to(wd2, hd4, 180.0, 180.0)
        .l(hc + spout_w, b - spout_h)
        .arc_to(spout_w, spout_h, 0.0, 180.0)
        .z();
    let hole = PathData::new()
        .m(d, hd4)
        .arc_to((wd2 - d).max(0.0), (hd4 - d).max(0.0), 180.0, -360.0)
        .z();
    outer.append(hole)
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
    fn flat_wave_without_offset() {
        let path = draw(wave, 90.0, 100.0);
        assert!(path.starts_with("M0,12.5 C30,-29.167 60,54.167 90,12.5 L90,87.5"), "{path}");
    }

    #[test]
    fn sun_has_disc_and_eight_rays() {
        assert_eq!(draw(sun, 100.0, 100.0).matches('M').count(), 9);
    }

    #[test]
    fn tabs_use_a_twentieth_of_the_diagonal() {
        assert_eq!(
            draw(square_tabs, 30.0, 40.0).split(" M").next(),
            Some("M0,0 L2.5,0 L2.5,2.5 L0,2.5 Z")
        );
    }

    #[test]
    fn gears_have_one_arc_per_tooth() {
        for (path, teeth) in [(draw(gear6, 120.0, 80.0), 6), (draw(gear9, 120.0, 80.0), 9)] {
            assert_eq!(path.matches('A').count(), teeth, "{path}");
            assert_eq!(path.matches('L').count(), 3 * teeth, "{path}");
        }
    }

    #[test]
    fn funnel_rim_and_spout() {
        assert_eq!(
            draw(funnel, 100.0, 100.0),
            "M0,25 A50,25 0 0,1 100,25 L62.5,95 A12.5,5 0 0,1 37.5,95 Z \
             M5,25 A45,20 0 0,0 95,25 A45,20 0 0,0 5,25 Z"
        );
    }

    #[test]
    fn chart_marks() {
        assert_eq!(draw(chart_plus, 10.0, 20.0), "M5,0 L5,20 M0,10 L10,10");
    }
}
