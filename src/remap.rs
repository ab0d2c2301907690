//! Coordinate space remapping for groups and diagrams.
//!
//! - [`remap_box`]: linear map from a declared child space into a parent box
//! - [`derive_diagram_child_space`]: child space of diagram content, derived
//!   from the shapes' own boxes with a few fit-to-data heuristics
//! - [`layout_group_children`]: per-child placement, including the
//!   three-pies-three-arrows cycle diagram

use glam::{DVec2, dvec2};

use crate::log;
use crate::types::{BBox, CoordinateBox, Size};

/// Map `child` from `child_space` into `parent`, independently per axis.
///
/// A zero-extent child space on either axis leaves the child untouched.
pub fn remap_box(child: &CoordinateBox, child_space: &CoordinateBox, parent: &CoordinateBox) -> CoordinateBox {
    let ext = child_space.extent;
    if ext.w == 0.0 || ext.h == 0.0 {
        return *child;
    }
    let k = parent.extent.as_vec() / ext.as_vec();
    let offset = (child.offset - child_space.offset) * k + parent.offset;
    let size = child.extent.as_vec() * k;
    CoordinateBox {
        offset,
        extent: Size::new(size.x, size.y),
    }
}

/// Tunable thresholds for [`derive_diagram_child_space`].
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramHeuristics {
    /// Reject the shapes' bounding box when it spans more than this many
    /// frame extents on either axis.
    pub oversize_factor: f64,
    /// Reject the bounding box when it reaches into negative coordinates.
    pub reject_negative_origin: bool,
    /// Presets that make a diagram "circular" (matched case-insensitively).
    pub circular_presets: Vec<String>,
}

impl Default for DiagramHeuristics {
    fn default() -> Self {
        DiagramHeuristics {
            oversize_factor: 2.0,
            reject_negative_origin: true,
            circular_presets: [
                "pie",
                "arc",
                "blockArc",
                "donut",
                "circularArrow",
                "leftCircularArrow",
                "leftRightCircularArrow",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl DiagramHeuristics {
    pub fn with_oversize_factor(mut self, factor: f64) -> Self {
        self.oversize_factor = factor;
        self
    }

    pub fn with_reject_negative_origin(mut self, reject: bool) -> Self {
        self.reject_negative_origin = reject;
        self
    }

    pub fn with_circular_presets<I, S>(mut self, presets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.circular_presets = presets.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_circular(&self, preset: &str) -> bool {
        self.circular_presets
            .iter()
            .any(|p| p.eq_ignore_ascii_case(preset))
    }
}

/// Read access to a diagram shape's own box and preset.
pub trait DiagramShape {
    /// The shape's position and size, `None` when it has none.
    fn bounds(&self) -> Option<CoordinateBox>;
    /// Preset geometry name, `None` for custom geometry.
    fn preset(&self) -> Option<&str>;
}

/// Minimal owned [`DiagramShape`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeBox {
    pub bounds: Option<CoordinateBox>,
    pub preset: Option<String>,
}

impl ShapeBox {
    pub fn new(bounds: CoordinateBox, preset: impl Into<String>) -> Self {
        ShapeBox {
            bounds: Some(bounds),
            preset: Some(preset.into()),
        }
    }
}

impl DiagramShape for ShapeBox {
    fn bounds(&self) -> Option<CoordinateBox> {
        self.bounds
    }

    fn preset(&self) -> Option<&str> {
        self.preset.as_deref()
    }
}

impl<T: DiagramShape + ?Sized> DiagramShape for &T {
    fn bounds(&self) -> Option<CoordinateBox> {
        (**self).bounds()
    }

    fn preset(&self) -> Option<&str> {
        (**self).preset()
    }
}

/// Which rule produced a derived child space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceSource {
    /// No shape had a box; the frame itself is the space.
    Frame,
    /// The bounding box was negative or oversized and was discarded.
    Rejected,
    /// Native origin with the frame's extent.
    Native,
    /// Tight bounding box widened to the frame's aspect ratio.
    AspectCorrected,
}

/// A derived child coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildSpace {
    pub space: CoordinateBox,
    pub circular: bool,
    pub source: SpaceSource,
}

/// Derive the child coordinate space for diagram content placed in `frame`.
///
/// Rules, first match wins:
/// 1. no shape has a box: the frame box itself
/// 2. bounding box with a negative origin or oversized span: origin plus
///    frame extent
/// 3. no circular preset among the shapes: origin plus frame extent
/// 4. circular: tight bounding box grown to the frame's aspect ratio, with
///    the margin split evenly on the grown axis
pub fn derive_diagram_child_space<S: DiagramShape>(
    shapes: &[S],
    frame: &CoordinateBox,
    heuristics: &DiagramHeuristics,
) -> ChildSpace {
    let mut bbox = BBox::new();
    for b in shapes.iter().filter_map(DiagramShape::bounds) {
        bbox.expand_box(&b);
    }
    let circular = shapes
        .iter()
        .filter_map(DiagramShape::preset)
        .any(|p| heuristics.is_circular(p));

    let Some(tight) = bbox.to_box() else {
        log::debug!("diagram has no shape bounds, using frame box");
        return ChildSpace {
            space: *frame,
            circular,
            source: SpaceSource::Frame,
        };
    };

    let native = CoordinateBox {
        offset: DVec2::ZERO,
        extent: frame.extent,
    };
    let fe = frame.extent;
    let negative = heuristics.reject_negative_origin && (tight.offset.x < 0.0 || tight.offset.y < 0.0);
    let oversized = tight.extent.w > heuristics.oversize_factor * fe.w
        || tight.extent.h > heuristics.oversize_factor * fe.h;
    if negative || oversized {
        log::debug!(negative, oversized, "rejecting diagram bounding box");
        return ChildSpace {
            space: native,
            circular,
            source: SpaceSource::Rejected,
        };
    }

    if !circular {
        return ChildSpace {
            space: native,
            circular,
            source: SpaceSource::Native,
        };
    }

    match aspect_corrected(&tight, fe) {
        Some(space) => {
            log::debug!(
                x = space.offset.x,
                y = space.offset.y,
                w = space.extent.w,
                h = space.extent.h,
                "circular diagram child space"
            );
            ChildSpace {
                space,
                circular,
                source: SpaceSource::AspectCorrected,
            }
        }
        None => ChildSpace {
            space: native,
            circular,
            source: SpaceSource::Native,
        },
    }
}

/// Grow `tight` so its aspect ratio matches `frame`; `None` when either is empty.
fn aspect_corrected(tight: &CoordinateBox, frame: Size) -> Option<CoordinateBox> {
    let (bw, bh) = (tight.extent.w, tight.extent.h);
    let sx = if bw > 0.0 { frame.w / bw } else { f64::INFINITY };
    let sy = if bh > 0.0 { frame.h / bh } else { f64::INFINITY };
    let scale = sx.min(sy);
    if !(scale.is_finite() && scale > 0.0) {
        return None;
    }
    let extent = Size::new(frame.w / scale, frame.h / scale);
    let margin = dvec2(extent.w - bw, extent.h - bh) / 2.0;
    Some(CoordinateBox {
        offset: tight.offset - margin,
        extent,
    })
}

/// A child's placement in the parent, in paint order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedChild {
    /// Index into the input children.
    pub index: usize,
    /// Remapped box, `None` when the child has no box of its own.
    pub bounds: Option<CoordinateBox>,
}

/// Placement of every child of a group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupLayout {
    pub children: Vec<PlacedChild>,
    /// True when the cycle-diagram layout was applied.
    pub cycle: bool,
}

const CYCLE_PATTERN: [&str; 6] = ["pie", "pie", "pie", "circularArrow", "circularArrow", "circularArrow"];

/// Exactly three pies followed by three circular arrows.
pub fn is_cycle_diagram<S: DiagramShape>(children: &[S]) -> bool {
    children.len() == CYCLE_PATTERN.len()
        && children
            .iter()
            .zip(CYCLE_PATTERN)
            .all(|(c, want)| c.preset().is_some_and(|p| p.eq_ignore_ascii_case(want)))
}

/// Place a group's children from `child_space` into `parent`.
///
/// The cycle diagram gets one circle fit into the parent: the pies share it
/// so their sectors tile a single disk, and the arrows paint first. Any
/// other composition is remapped child by child in input order.
pub fn layout_group_children<S: DiagramShape>(
    children: &[S],
    child_space: &CoordinateBox,
    parent: &CoordinateBox,
) -> GroupLayout {
    let remapped = |index: usize| PlacedChild {
        index,
        bounds: children[index]
            .bounds()
            .map(|b| remap_box(&b, child_space, parent)),
    };

    if !is_cycle_diagram(children) {
        return GroupLayout {
            children: (0..children.len()).map(remapped).collect(),
            cycle: false,
        };
    }

    let d = parent.extent.w.min(parent.extent.h);
    let circle = CoordinateBox {
        offset: parent.offset + dvec2(parent.extent.w - d, parent.extent.h - d) / 2.0,
        extent: Size::new(d, d),
    };
    log::debug!(diameter = d, "cycle diagram layout");
    let arrows = (3..6).map(remapped);
    let pies = (0..3).map(|index| PlacedChild {
        index,
        bounds: Some(circle),
    });
    GroupLayout {
        children: arrows.chain(pies).collect(),
        cycle: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(x: f64, y: f64, w: f64, h: f64, preset: &str) -> ShapeBox {
        ShapeBox::new(CoordinateBox::new(x, y, w, h), preset)
    }

    #[test]
    fn remap_is_linear() {
        let space = CoordinateBox::new(100.0, 200.0, 50.0, 20.0);
        let parent = CoordinateBox::new(10.0, 10.0, 500.0, 100.0);
        let at_origin = remap_box(&CoordinateBox::new(100.0, 200.0, 5.0, 2.0), &space, &parent);
        assert_eq!(at_origin.offset, dvec2(10.0, 10.0));
        assert_eq!(at_origin.extent, Size::new(50.0, 10.0));
        let full = remap_box(&space, &space, &parent);
        assert_eq!(full, parent);
    }

    #[test]
    fn zero_extent_space_skips_remap() {
        let child = CoordinateBox::new(3.0, 4.0, 5.0, 6.0);
        let space = CoordinateBox::new(0.0, 0.0, 0.0, 10.0);
        let parent = CoordinateBox::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(remap_box(&child, &space, &parent), child);
    }

    #[test]
    fn empty_diagram_uses_frame() {
        let frame = CoordinateBox::new(5.0, 6.0, 100.0, 50.0);
        let out = derive_diagram_child_space::<ShapeBox>(&[], &frame, &DiagramHeuristics::default());
        assert_eq!(out.space, frame);
        assert_eq!(out.source, SpaceSource::Frame);
    }

    #[test]
    fn negative_or_oversized_boxes_are_rejected() {
        let frame = CoordinateBox::new(0.0, 0.0, 100.0, 100.0);
        let h = DiagramHeuristics::default();
        let neg = derive_diagram_child_space(&[shape(-5.0, 0.0, 10.0, 10.0, "rect")], &frame, &h);
        assert_eq!(neg.source, SpaceSource::Rejected);
        assert_eq!(neg.space, CoordinateBox::new(0.0, 0.0, 100.0, 100.0));
        let big = derive_diagram_child_space(&[shape(0.0, 0.0, 250.0, 10.0, "arc")], &frame, &h);
        assert_eq!(big.source, SpaceSource::Rejected);
        let relaxed = h.with_oversize_factor(3.0).with_reject_negative_origin(false);
        let kept = derive_diagram_child_space(&[shape(0.0, 0.0, 250.0, 10.0, "rect")], &frame, &relaxed);
        assert_eq!(kept.source, SpaceSource::Native);
    }

    #[test]
    fn non_circular_keeps_native_origin() {
        let frame = CoordinateBox::new(40.0, 40.0, 300.0, 200.0);
        let out = derive_diagram_child_space(
            &[shape(10.0, 10.0, 50.0, 50.0, "rect"), shape(100.0, 20.0, 20.0, 20.0, "ellipse")],
            &frame,
            &DiagramHeuristics::default(),
        );
        assert_eq!(out.space, CoordinateBox::new(0.0, 0.0, 300.0, 200.0));
        assert!(!out.circular);
    }

    #[test]
    fn circular_diagram_matches_frame_aspect() {
        let frame = CoordinateBox::new(0.0, 0.0, 200.0, 100.0);
        let out = derive_diagram_child_space(
            &[shape(50.0, 50.0, 100.0, 100.0, "pie")],
            &frame,
            &DiagramHeuristics::default(),
        );
        assert!(out.circular);
        assert_eq!(out.source, SpaceSource::AspectCorrected);
        assert_eq!(out.space.extent, Size::new(200.0, 100.0));
        // Widened by 100, so the offset moves left by half of it.
        assert_eq!(out.space.offset, dvec2(0.0, 50.0));
    }

    #[test]
    fn mirrored_circular_arrow_counts_as_circular() {
        let h = DiagramHeuristics::default();
        assert!(h.is_circular("LEFTCIRCULARARROW"));
        assert!(!h.is_circular("rect"));
    }

    fn cycle_children() -> Vec<ShapeBox> {
        let mut v: Vec<ShapeBox> = (0..3).map(|i| shape(i as f64 * 10.0, 0.0, 40.0, 40.0, "pie")).collect();
        v.extend((0..3).map(|i| shape(i as f64 * 20.0, 50.0, 10.0, 10.0, "circularArrow")));
        v
    }

    #[test]
    fn cycle_diagram_shares_one_circle_and_paints_arrows_first() {
        let children = cycle_children();
        let space = CoordinateBox::new(0.0, 0.0, 100.0, 100.0);
        let parent = CoordinateBox::new(0.0, 0.0, 300.0, 200.0);
        let layout = layout_group_children(&children, &space, &parent);
        assert!(layout.cycle);
        let order: Vec<_> = layout.children.iter().map(|c| c.index).collect();
        assert_eq!(order, [3, 4, 5, 0, 1, 2]);
        let circle = CoordinateBox::new(50.0, 0.0, 200.0, 200.0);
        assert!(layout.children[3..].iter().all(|c| c.bounds == Some(circle)));
        assert_eq!(layout.children[0].bounds, Some(CoordinateBox::new(0.0, 100.0, 30.0, 20.0)));
    }

    #[test]
    fn other_compositions_are_remapped_in_order() {
        let mut children = cycle_children();
        children.swap(2, 3);
        let space = CoordinateBox::new(0.0, 0.0, 100.0, 100.0);
        let parent = CoordinateBox::new(0.0, 0.0, 200.0, 200.0);
        let layout = layout_group_children(&children, &space, &parent);
        assert!(!layout.cycle);
        let order: Vec<_> = layout.children.iter().map(|c| c.index).collect();
        assert_eq!(order, [0, 1, 2, 3, 4, 5]);
        assert_eq!(layout.children[0].bounds, Some(CoordinateBox::new(0.0, 0.0, 80.0, 80.0)));

        children.truncate(5);
        assert!(!is_cycle_diagram(&children));
    }
}
