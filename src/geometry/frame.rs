//! Per-request shape frame.

use glam::{DVec2, dvec2};

use super::pin;
use crate::types::{Adjustments, sanitize_dimension};

/// The box a preset is drawn into plus its adjustment values.
///
/// Exposes the standard shape guides (`ss`, `ls`, `hc`, `vc`, ...) so
/// generators read like their published derivations.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub w: f64,
    pub h: f64,
    adj: &'a Adjustments,
}

impl<'a> Frame<'a> {
    pub fn new(w: f64, h: f64, adj: &'a Adjustments) -> Self {
        Self {
            w: sanitize_dimension(w),
            h: sanitize_dimension(h),
            adj,
        }
    }

    /// Short side.
    #[inline]
    pub fn ss(&self) -> f64 {
        self.w.min(self.h)
    }

    /// Long side.
    #[inline]
    pub fn ls(&self) -> f64 {
        self.w.max(self.h)
    }

    #[inline]
    pub fn hc(&self) -> f64 {
        self.w / 2.0
    }

    #[inline]
    pub fn vc(&self) -> f64 {
        self.h / 2.0
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        dvec2(self.hc(), self.vc())
    }

    #[inline]
    pub fn half(&self) -> DVec2 {
        dvec2(self.w / 2.0, self.h / 2.0)
    }

    /// `w * v / 100000`
    #[inline]
    pub fn wp(&self, v: f64) -> f64 {
        self.w * v / 100000.0
    }

    /// `h * v / 100000`
    #[inline]
    pub fn hp(&self, v: f64) -> f64 {
        self.h * v / 100000.0
    }

    /// `ss * v / 100000`
    #[inline]
    pub fn ssp(&self, v: f64) -> f64 {
        self.ss() * v / 100000.0
    }

    /// Raw adjustment value or its default.
    #[inline]
    pub fn adj(&self, name: &str, default: f64) -> f64 {
        self.adj.get_or(name, default)
    }

    /// Adjustment value (or default) pinned into `[lo, hi]`.
    #[inline]
    pub fn adj_pin(&self, name: &str, default: f64, lo: f64, hi: f64) -> f64 {
        pin(lo, self.adj(name, default), hi)
    }

    /// Adjustment given as an angle in 60000ths of a degree, returned in degrees.
    #[inline]
    pub fn adj_angle(&self, name: &str, default: f64) -> f64 {
        self.adj(name, default) / 60000.0
    }

    /// `w / ss * 100000`, the usual upper bound for width-relative adjustments.
    #[inline]
    pub fn max_w_ratio(&self) -> f64 {
        if self.ss() > 0.0 {
            100000.0 * self.w / self.ss()
        } else {
            0.0
        }
    }

    /// `h / ss * 100000`
    #[inline]
    pub fn max_h_ratio(&self) -> f64 {
        if self.ss() > 0.0 {
            100000.0 * self.h / self.ss()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guides() {
        let adj = Adjustments::new().with("adj", 80000.0);
        let f = Frame::new(200.0, 100.0, &adj);
        assert_eq!(f.ss(), 100.0);
        assert_eq!(f.ls(), 200.0);
        assert_eq!(f.center(), dvec2(100.0, 50.0));
        assert_eq!(f.adj_pin("adj", 25000.0, 0.0, 50000.0), 50000.0);
        assert_eq!(f.adj_pin("missing", 25000.0, 0.0, 50000.0), 25000.0);
        assert_eq!(f.max_w_ratio(), 200000.0);
    }

    #[test]
    fn negative_dimensions_collapse() {
        let adj = Adjustments::new();
        let f = Frame::new(-5.0, f64::NAN, &adj);
        assert_eq!((f.w, f.h), (0.0, 0.0));
        assert_eq!(f.max_w_ratio(), 0.0);
    }
}
