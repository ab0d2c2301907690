//! DrawingML shape geometry.
//!
//! Turns preset geometry names, custom path commands and nested coordinate
//! spaces into SVG path data:
//!
//! ```
//! use prstgeom::{Adjustments, resolve_preset};
//!
//! let path = resolve_preset("diamond", 100.0, 50.0, &Adjustments::new());
//! assert_eq!(path, "M0,25 L50,0 L100,25 L50,50 Z");
//! ```
//!
//! Every operation is pure and deterministic. Unknown presets fall back to
//! the full rectangle rather than failing.

pub mod custom;
pub mod errors;
pub mod geometry;
mod guide;
mod log;
pub mod multipath;
pub mod presets;
pub mod remap;
pub mod types;

pub use custom::{CustomPath, PathCommand, resolve_custom, resolve_custom_paths};
pub use errors::GuideError;
pub use geometry::arc::{ArcSegment, to_arc_segment};
pub use guide::parse_guide_value;
pub use multipath::{FillMode, MultiPreset, SubPath, flatten_layers, resolve_multi_path};
pub use presets::{Preset, resolve_preset};
pub use remap::{
    ChildSpace, DiagramHeuristics, DiagramShape, GroupLayout, derive_diagram_child_space,
    layout_group_children, remap_box,
};
pub use types::{Adjustments, ArcSpec, CoordinateBox, ShapeDescriptor, Size};

/// Resolved geometry for one shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeGeometry {
    Single(String),
    /// Layers in paint order.
    Multi(Vec<SubPath>),
}

impl ShapeGeometry {
    /// One path for the whole shape; layered shapes keep their silhouette.
    pub fn to_path(&self) -> String {
        match self {
            ShapeGeometry::Single(p) => p.clone(),
            ShapeGeometry::Multi(layers) => flatten_layers(layers),
        }
    }
}

/// Resolve a descriptor, preferring the multi-path form when one exists.
pub fn resolve_descriptor(desc: &ShapeDescriptor) -> ShapeGeometry {
    match resolve_multi_path(&desc.preset_name, desc.width, desc.height, &desc.adjustments) {
        Some(layers) => ShapeGeometry::Multi(layers),
        None => ShapeGeometry::Single(resolve_preset(
            &desc.preset_name,
            desc.width,
            desc.height,
            &desc.adjustments,
        )),
    }
}

/// Every registered preset name, single-path first.
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    Preset::ALL
        .iter()
        .map(|p| p.name())
        .chain(MultiPreset::ALL.iter().map(|p| p.name()))
}

pub fn is_multi_path(name: &str) -> bool {
    MultiPreset::from_name(name).is_some()
}
