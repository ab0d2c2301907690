//! Stars and seals.

use glam::{DVec2, dvec2};

use crate::geometry::path::polygon;
use crate::geometry::{Frame, PathData};

pub fn star4(f: &Frame) -> PathData {
    let a = f.adj_pin("adj", 12500.0, 0.0, 50000.0);
    let (hc, vc) = (f.hc(), f.vc());
    let iwd2 = f.w / 2.0 * a / 50000.0;
    let ihd2 = f.h / 2.0 * a / 50000.0;
    let sdx = iwd2 * 45f64.to_radians().cos();
    let sdy = ihd2 * 45f64.to_radians().sin();
    polygon(&[
        dvec2(0.0, vc),
        dvec2(hc - sdx, vc - sdy),
        dvec2(hc, 0.0),
        dvec2(hc + sdx, vc - sdy),
        dvec2(f.w, vc),
        dvec2(hc + sdx, vc + sdy),
        dvec2(hc, f.h),
        dvec2(hc - sdx, vc + sdy),
    ])
}

/// Regular star with `points` tips, first tip straight up.
///
/// `hf`/`vf` stretch the circumscribed ellipse so that the tips touch the
/// box edges; the inner radius is `adj / 50000` of the outer one.
fn star(f: &Frame, points: usize, default_adj: f64, hf: f64, vf: f64) -> PathData {
    let a = f.adj_pin("adj", default_adj, 0.0, 50000.0);
    let hf = f.adj("hf", hf) / 100000.0;
    let vf = f.adj("vf", vf) / 100000.0;
    let outer = dvec2(f.w / 2.0 * hf, f.h / 2.0 * vf);
    let inner = outer * a / 50000.0;
    let center = dvec2(f.hc(), f.vc() * vf);
    let step = 180.0 / points as f64;
    let pts: Vec<DVec2> = (0..points * 2)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let t = (-90.0 + step * i as f64).to_radians();
            center + dvec2(r.x * t.cos(), r.y * t.sin())
        })
        .collect();
    polygon(&pts)
}

pub fn star5(f: &Frame) -> PathData {
    star(f, 5, 19098.0, 105146.0, 110557.0)
}

pub fn star6(f: &Frame) -> PathData {
    star(f, 6, 28868.0, 115470.0, 100000.0)
}

pub fn star7(f: &Frame) -> PathData {
    star(f, 7, 34601.0, 102572.0, 105210.0)
}

pub fn star8(f: &Frame) -> PathData {
    star(f, 8, 38268.0, 100000.0, 100000.0)
}

pub fn star10(f: &Frame) -> PathData {
    star(f, 10, 42533.0, 105146.0, 100000.0)
}

pub fn star12(f: &Frame) -> PathData {
    star(f, 12, 37500.0, 100000.0, 100000.0)
}

pub fn star16(f: &Frame) -> PathData {
    star(f, 16, 37500.0, 100000.0, 100000.0)
}

pub fn star24(f: &Frame) -> PathData {
    star(f, 24, 37500.0, 100000.0, 100000.0)
}

pub fn star32(f: &Frame) -> PathData {
    star(f, 32, 37500.0, 100000.0, 100000.0)
}

/// Polygon authored on a 21600 x 21600 grid, scaled to the frame.
fn grid_polygon(f: &Frame, pts: &[(f64, f64)]) -> PathData {
    let sx = f.w / 21600.0;
    let sy = f.h / 21600.0;
    let pts: Vec<DVec2> = pts.iter().map(|&(x, y)| dvec2(x * sx, y * sy)).collect();
    polygon(&pts)
}

pub fn irregular_seal1(f: &Frame) -> PathData {
    grid_polygon(
        f,
        &[
            (10800.0, 5800.0),
            (14522.0, 0.0),
            (14155.0, 5325.0),
            (18380.0, 4457.0),
            (16702.0, 7315.0),
            (21097.0, 8137.0),
            (17607.0, 10475.0),
            (21600.0, 13290.0),
            (16837.0, 12942.0),
            (18145.0, 18095.0),
            (14020.0, 14457.0),
            (13247.0, 19737.0),
            (10532.0, 14935.0),
            (8485.0, 21600.0),
            (7715.0, 15627.0),
            (4762.0, 17617.0),
            (5667.0, 13937.0),
            (135.0, 14587.0),
            (3722.0, 11775.0),
            (0.0, 8615.0),
            (4627.0, 6320.0),
            (370.0, 2295.0),
            (7312.0, 6320.0),
            (8352.0, 2295.0),
        ],
    )
}

pub fn irregular_seal2(f: &Frame) -> PathData {
    grid_polygon(
        f,
        &[
            (11462.0, 4342.0),
            (14790.0, 0.0),
            (14525.0, 5777.0),
            (18007.0, 3172.0),
            (16380.0, 6532.0),
            (21600.0, 6645.0),
            (16985.0, 9402.0),
            (18270.0, 11290.0),
            (16380.0, 12310.0),
            (18877.0, 15632.0),
            (14640.0, 14350.0),
            (14942.0, 17370.0),
            (12180.0, 15935.0),
            (11612.0, 18842.0),
            (9872.0, 17370.0),
            (8700.0, 19712.0),
            (7527.0, 18125.0),
            (4917.0, 21600.0),
            (4805.0, 18240.0),
            (1285.0, 17825.0),
            (3330.0, 15370.0),
            (0.0, 12877.0),
            (3935.0, 11592.0),
            (1172.0, 8270.0),
            (5372.0, 7817.0),
            (4502.0, 3625.0),
            (8550.0, 6382.0),
            (9722.0, 1887.0),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Adjustments;

    #[test]
    fn star_tip_count() {
        let adj = Adjustments::new();
        let frame = Frame::new(100.0, 100.0, &adj);
        for (g, n) in [(star5 as fn(&Frame) -> PathData, 5), (star8, 8), (star32, 32)] {
            let path = g(&frame).build();
            assert_eq!(path.matches('L').count(), n * 2 - 1);
        }
    }

    #[test]
    fn star5_first_tip_touches_top() {
        let adj = Adjustments::new();
        let path = star5(&Frame::new(100.0, 100.0, &adj)).build();
        assert!(path.starts_with("M50,0 "), "{path}");
    }

    #[test]
    fn star4_outline() {
        let adj = Adjustments::new().with("adj", 0.0);
        let path = star4(&Frame::new(10.0, 10.0, &adj)).build();
        assert_eq!(path, "M0,5 L5,5 L5,0 L5,5 L10,5 L5,5 L5,10 L5,5 Z");
    }
}
