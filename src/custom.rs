//! Custom geometry
//!
//! Interprets an authored command list (`moveTo`, `lnTo`, `cubicBezTo`,
//! `quadBezTo`, `arcTo`, `close`) in its own coordinate space and scales it
//! into a target box. Arc endpoints are computed in authored space, where
//! the visual start angle is defined, and only then scaled; axis scaling
//! preserves parametric angles so the result lands on the scaled ellipse.

use glam::{DVec2, dvec2};

use crate::geometry::PathData;
use crate::geometry::arc::{arc_spec_segment, ellipse_point, is_degenerate};
use crate::geometry::path::needs_split;
use crate::log;
use crate::types::{ArcSpec, Size, sanitize_dimension};

/// One authored path command.
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    CubicBezierTo(DVec2, DVec2, DVec2),
    QuadBezierTo(DVec2, DVec2),
    ArcTo(ArcSpec),
    Close,
    /// A command kind this resolver does not understand; skipped.
    Unknown(String),
}

/// Where an arc starting at `pen` ends, and the component-wise maximum of
/// every point it passes through.
fn arc_reach(pen: DVec2, spec: &ArcSpec) -> (DVec2, DVec2) {
    let sweep = spec.sweep_angle_deg.clamp(-360.0, 360.0);
    let seg = arc_spec_segment(pen, &ArcSpec { sweep_angle_deg: sweep, ..*spec });
    let mut reach = pen.max(seg.end);
    let start = spec.start_angle_deg;
    if !start.is_finite() {
        return (seg.end, reach);
    }
    // Axis extremes sit at multiples of 90 degrees, where visual and
    // parametric angles agree.
    let (lo, hi) = (start.min(start + sweep), start.max(start + sweep));
    let first = (lo / 90.0).ceil();
    for k in 0..5 {
        let deg = (first + k as f64) * 90.0;
        if deg > hi {
            break;
        }
        reach = reach.max(ellipse_point(seg.center, spec.radii, deg));
    }
    (seg.end, reach)
}

/// An authored path: its declared coordinate size (if any) and commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomPath {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub commands: Vec<PathCommand>,
}

impl CustomPath {
    pub fn new(commands: Vec<PathCommand>) -> Self {
        CustomPath {
            width: None,
            height: None,
            commands,
        }
    }

    /// Declare the authored coordinate size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo(dvec2(x, y)));
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo(dvec2(x, y)));
        self
    }

    pub fn cubic_to(mut self, c1: DVec2, c2: DVec2, end: DVec2) -> Self {
        self.commands.push(PathCommand::CubicBezierTo(c1, c2, end));
        self
    }

    pub fn quad_to(mut self, c: DVec2, end: DVec2) -> Self {
        self.commands.push(PathCommand::QuadBezierTo(c, end));
        self
    }

    pub fn arc_to(mut self, rx: f64, ry: f64, start_deg: f64, sweep_deg: f64) -> Self {
        self.commands
            .push(PathCommand::ArcTo(ArcSpec::new(rx, ry, start_deg, sweep_deg)));
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Largest coordinate reached on each axis, ignoring negative space.
    ///
    /// Control points count, and arcs count every point along the curve.
    pub fn inferred_extent(&self) -> Size {
        let mut pen = DVec2::ZERO;
        let mut subpath_start = DVec2::ZERO;
        let mut max = DVec2::ZERO;
        let mut reach = |p: DVec2| {
            if p.is_finite() {
                max = max.max(p);
            }
        };
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    subpath_start = p;
                    pen = p;
                    reach(p);
                }
                PathCommand::LineTo(p) => {
                    pen = p;
                    reach(p);
                }
                PathCommand::CubicBezierTo(a, b, p) => {
                    pen = p;
                    reach(a.max(b).max(p));
                }
                PathCommand::QuadBezierTo(a, p) => {
                    pen = p;
                    reach(a.max(p));
                }
                PathCommand::ArcTo(ref spec) => {
                    if !is_degenerate(spec.radii, spec.sweep_angle_deg) {
                        let (end, furthest) = arc_reach(pen, spec);
                        pen = end;
                        reach(furthest);
                    }
                }
                PathCommand::Close => pen = subpath_start,
                PathCommand::Unknown(_) => {}
            }
        }
        Size::new(max.x, max.y)
    }

    /// The authored extent used for scaling: declared size per axis, else `hint`,
    /// else the inferred maximum.
    fn source_extent(&self, hint: Option<Size>) -> Size {
        let inferred = self.inferred_extent();
        let pick = |declared: Option<f64>, hinted: Option<f64>, inferred: f64| {
            declared
                .filter(|v| v.is_finite() && *v > 0.0)
                .or(hinted.filter(|v| v.is_finite() && *v > 0.0))
                .unwrap_or(inferred)
        };
        Size::new(
            pick(self.width, hint.map(|s| s.w), inferred.w),
            pick(self.height, hint.map(|s| s.h), inferred.h),
        )
    }
}

/// Scale one axis; an empty authored axis keeps its coordinates.
fn axis_scale(target: f64, source: f64) -> f64 {
    if source > 0.0 { target / source } else { 1.0 }
}

/// Pen state while replaying commands in authored space.
struct Replay {
    out: PathData,
    pen: DVec2,
    subpath_start: DVec2,
    scale: DVec2,
}

impl Replay {
    fn to_target(&self, p: DVec2) -> DVec2 {
        p * self.scale
    }

    fn arc(&mut self, spec: &ArcSpec) {
        if is_degenerate(spec.radii, spec.sweep_angle_deg) {
            return;
        }
        let sweep = spec.sweep_angle_deg.clamp(-360.0, 360.0);
        let end = arc_spec_segment(self.pen, &ArcSpec { sweep_angle_deg: sweep, ..*spec }).end;
        if needs_split(sweep, self.to_target(self.pen), self.to_target(end)) {
            let half = sweep / 2.0;
            self.arc_segment(&ArcSpec { sweep_angle_deg: half, ..*spec });
            self.arc_segment(&ArcSpec {
                start_angle_deg: spec.start_angle_deg + half,
                sweep_angle_deg: half,
                ..*spec
            });
        } else {
            self.arc_segment(&ArcSpec { sweep_angle_deg: sweep, ..*spec });
        }
    }

    fn arc_segment(&mut self, spec: &ArcSpec) {
        let seg = arc_spec_segment(self.pen, spec);
        self.pen = seg.end;
        let r = spec.radii * self.scale;
        let end = self.to_target(seg.end);
        let out = std::mem::take(&mut self.out);
        self.out = out.a(r.x, r.y, 0.0, seg.large_arc, seg.sweep, end.x, end.y);
    }

    fn apply(&mut self, cmd: &PathCommand) {
        let out = std::mem::take(&mut self.out);
        self.out = match cmd {
            PathCommand::MoveTo(p) => {
                self.pen = *p;
                self.subpath_start = *p;
                out.mv(self.to_target(*p))
            }
            PathCommand::LineTo(p) => {
                self.pen = *p;
                out.ln(self.to_target(*p))
            }
            PathCommand::CubicBezierTo(a, b, p) => {
                self.pen = *p;
                let (a, b, p) = (self.to_target(*a), self.to_target(*b), self.to_target(*p));
                out.c(a.x, a.y, b.x, b.y, p.x, p.y)
            }
            PathCommand::QuadBezierTo(a, p) => {
                self.pen = *p;
                let (a, p) = (self.to_target(*a), self.to_target(*p));
                out.q(a.x, a.y, p.x, p.y)
            }
            PathCommand::ArcTo(spec) => {
                self.out = out;
                self.arc(spec);
                return;
            }
            PathCommand::Close => {
                self.pen = self.subpath_start;
                out.z()
            }
            PathCommand::Unknown(_kind) => {
                log::debug!(kind = _kind.as_str(), "skipping unknown path command");
                out
            }
        };
    }
}

/// Resolve one authored path into a `target_w x target_h` box.
///
/// The path is never closed implicitly; only an explicit `Close` emits `Z`.
pub fn resolve_custom(path: &CustomPath, target_w: f64, target_h: f64, hint: Option<Size>) -> String {
    let source = path.source_extent(hint);
    let scale = dvec2(
        axis_scale(sanitize_dimension(target_w), source.w),
        axis_scale(sanitize_dimension(target_h), source.h),
    );
    let mut replay = Replay {
        out: PathData::new(),
        pen: DVec2::ZERO,
        subpath_start: DVec2::ZERO,
        scale,
    };
    for cmd in &path.commands {
        replay.apply(cmd);
    }
    replay.out.build()
}

/// Resolve several paths authored in one shared coordinate space.
///
/// Paths without a declared size scale by the union of every path's extent,
/// so they stay registered with one another.
pub fn resolve_custom_paths(paths: &[CustomPath], target_w: f64, target_h: f64) -> Vec<String> {
    let shared = paths.iter().fold(Size::default(), |acc, p| {
        let e = p.source_extent(None);
        Size::new(acc.w.max(e.w), acc.h.max(e.h))
    });
    paths
        .iter()
        .map(|p| resolve_custom(p, target_w, target_h, Some(shared)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn near(a: Size, b: Size) -> bool {
        (a.w - b.w).abs() < 1e-9 && (a.h - b.h).abs() < 1e-9
    }

    #[test]
    fn declared_size_scales_per_axis() {
        let path = CustomPath::default()
            .with_size(100.0, 100.0)
            .move_to(0.0, 0.0)
            .line_to(100.0, 100.0);
        assert_eq!(resolve_custom(&path, 200.0, 50.0, None), "M0,0 L200,50");
    }

    #[test]
    fn extent_inferred_from_coordinates() {
        let path = CustomPath::default().move_to(0.0, 0.0).line_to(50.0, 25.0);
        assert_eq!(resolve_custom(&path, 100.0, 100.0, None), "M0,0 L100,100");
    }

    #[test]
    fn hint_beats_inference() {
        let path = CustomPath::default().move_to(0.0, 0.0).line_to(50.0, 25.0);
        let hint = Some(Size::new(100.0, 50.0));
        assert_eq!(resolve_custom(&path, 100.0, 100.0, hint), "M0,0 L50,50");
    }

    #[test]
    fn arc_uses_visual_angles() {
        let path = CustomPath::default()
            .with_size(40.0, 20.0)
            .move_to(40.0, 10.0)
            .arc_to(20.0, 10.0, 0.0, 45.0);
        assert_eq!(
            resolve_custom(&path, 40.0, 20.0, None),
            "M40,10 A20,10 0 0,1 28.944,18.944"
        );
        assert_eq!(
            resolve_custom(&path, 80.0, 20.0, None),
            "M80,10 A40,10 0 0,1 57.889,18.944"
        );
    }

    #[test]
    fn degenerate_and_unknown_commands_are_skipped() {
        let path = CustomPath::new(vec![
            PathCommand::MoveTo(dvec2(10.0, 10.0)),
            PathCommand::ArcTo(ArcSpec::new(0.0, 5.0, 0.0, 90.0)),
            PathCommand::ArcTo(ArcSpec::new(5.0, 5.0, 0.0, 0.0)),
            PathCommand::Unknown("relLnTo".into()),
            PathCommand::LineTo(dvec2(20.0, 10.0)),
        ])
        .with_size(20.0, 20.0);
        assert_eq!(resolve_custom(&path, 20.0, 20.0, None), "M10,10 L20,10");
    }

    #[test]
    fn no_implicit_close() {
        let open = CustomPath::default().with_size(1.0, 1.0).move_to(0.0, 0.0).line_to(1.0, 1.0);
        assert!(!resolve_custom(&open, 1.0, 1.0, None).contains('Z'));
        let closed = open.close();
        assert!(resolve_custom(&closed, 1.0, 1.0, None).ends_with(" Z"));
    }

    #[test]
    fn full_sweep_draws_whole_ellipse() {
        let path = CustomPath::default()
            .with_size(20.0, 10.0)
            .move_to(0.0, 5.0)
            .arc_to(10.0, 5.0, 180.0, 360.0)
            .close();
        assert_eq!(
            resolve_custom(&path, 20.0, 10.0, None),
            "M0,5 A10,5 0 0,1 20,5 A10,5 0 0,1 0,5 Z"
        );
    }

    #[test]
    fn arcs_count_toward_the_inferred_extent() {
        let circle = CustomPath::default()
            .move_to(0.0, 5.0)
            .arc_to(5.0, 5.0, 180.0, 360.0)
            .close();
        assert!(near(circle.inferred_extent(), Size::new(10.0, 10.0)));
        assert_eq!(
            resolve_custom(&circle, 100.0, 100.0, None),
            "M0,50 A50,50 0 0,1 100,50 A50,50 0 0,1 0,50 Z"
        );
    }

    #[test]
    fn quarter_arc_reaches_only_its_own_span() {
        let quarter = CustomPath::default().move_to(20.0, 10.0).arc_to(10.0, 10.0, 0.0, 90.0);
        assert!(near(quarter.inferred_extent(), Size::new(20.0, 20.0)));
    }

    #[test]
    fn shared_space_keeps_paths_registered() {
        let a = CustomPath::default().move_to(0.0, 0.0).line_to(50.0, 50.0);
        let b = CustomPath::default().move_to(0.0, 0.0).line_to(100.0, 100.0);
        let out = resolve_custom_paths(&[a, b], 200.0, 200.0);
        assert_eq!(out, ["M0,0 L100,100", "M0,0 L200,200"]);
    }
}
