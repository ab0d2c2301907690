//! Plain value types shared by every geometry request.
//!
//! Everything here is constructed fresh per request and never mutated after
//! being handed to a generator.

use std::collections::BTreeMap;
use std::fmt;

use glam::{DVec2, dvec2};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Validate a user-provided dimension (rejects NaN, infinite and negative values).
#[inline]
pub fn try_dimension(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Dimension sanitized for generators: anything invalid becomes zero.
#[inline]
pub(crate) fn sanitize_dimension(val: f64) -> f64 {
    try_dimension(val).unwrap_or(0.0)
}

/// 2D size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub const fn new(w: f64, h: f64) -> Self {
        Size { w, h }
    }

    pub fn as_vec(self) -> DVec2 {
        dvec2(self.w, self.h)
    }
}

/// A box given as offset + extent.
///
/// Used both for an allocated box in the parent and for a declared child
/// coordinate space (`chOff` / `chExt`).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CoordinateBox {
    pub offset: DVec2,
    pub extent: Size,
}

impl CoordinateBox {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        CoordinateBox {
            offset: DVec2::new(x, y),
            extent: Size::new(w, h),
        }
    }

    /// Far corner of the box.
    pub fn max(&self) -> DVec2 {
        self.offset + self.extent.as_vec()
    }
}

/// Axis-aligned bounding box accumulated from child boxes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: DVec2,
    pub max: DVec2,
}

impl Default for BBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BBox {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        BBox {
            min: DVec2::splat(f64::MAX),
            max: DVec2::splat(f64::MIN),
        }
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Expand to include a box given as offset + extent
    pub fn expand_box(&mut self, b: &CoordinateBox) {
        self.expand_point(b.offset);
        self.expand_point(b.max());
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Convert to offset + extent form, `None` when never expanded.
    pub fn to_box(&self) -> Option<CoordinateBox> {
        if self.is_empty() {
            return None;
        }
        Some(CoordinateBox {
            offset: self.min,
            extent: Size::new(self.width(), self.height()),
        })
    }
}

/// Elliptical arc as authored: radii plus start/sweep in visual-ray degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpec {
    pub radii: DVec2,
    pub start_angle_deg: f64,
    pub sweep_angle_deg: f64,
}

impl ArcSpec {
    pub fn new(rx: f64, ry: f64, start_angle_deg: f64, sweep_angle_deg: f64) -> Self {
        ArcSpec {
            radii: dvec2(rx, ry),
            start_angle_deg,
            sweep_angle_deg,
        }
    }
}

/// Named adjustment values in 1/100000 units (`adj`, `adj1`, ...).
///
/// Lookups are by exact guide name. Generators supply their own defaults for
/// anything missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Adjustments {
    values: BTreeMap<String, f64>,
}

impl Adjustments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a value; non-finite values are ignored so the default applies.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        if value.is_finite() {
            self.values.insert(name.into(), value);
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Value for `name`, or `default` when absent.
    pub fn get_or(&self, name: &str, default: f64) -> f64 {
        self.get(name).unwrap_or(default)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Adjustments {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut adj = Adjustments::new();
        for (k, v) in iter {
            adj.insert(k, v);
        }
        adj
    }
}

/// A fully resolved request for preset geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeDescriptor {
    pub preset_name: String,
    pub width: f64,
    pub height: f64,
    pub adjustments: Adjustments,
}

impl ShapeDescriptor {
    pub fn new(preset_name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            preset_name: preset_name.into(),
            width,
            height,
            adjustments: Adjustments::new(),
        }
    }

    pub fn with_adjustments(mut self, adjustments: Adjustments) -> Self {
        self.adjustments = adjustments;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_validation() {
        assert_eq!(try_dimension(3.0), Ok(3.0));
        assert_eq!(try_dimension(-1.0), Err(NumericError::Negative));
        assert_eq!(try_dimension(f64::NAN), Err(NumericError::NaN));
        assert_eq!(sanitize_dimension(f64::INFINITY), 0.0);
    }

    #[test]
    fn bbox_accumulates_boxes() {
        let mut bb = BBox::new();
        assert!(bb.to_box().is_none());
        bb.expand_box(&CoordinateBox::new(10.0, 20.0, 5.0, 5.0));
        bb.expand_box(&CoordinateBox::new(0.0, 30.0, 2.0, 10.0));
        let b = bb.to_box().unwrap();
        assert_eq!(b, CoordinateBox::new(0.0, 20.0, 15.0, 20.0));
    }

    #[test]
    fn adjustments_ignore_non_finite() {
        let adj = Adjustments::new().with("adj", f64::NAN).with("adj2", 5.0);
        assert_eq!(adj.get("adj"), None);
        assert_eq!(adj.get_or("adj2", 1.0), 5.0);
    }
}
