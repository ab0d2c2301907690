//! Multi-path presets
//!
//! Shapes drawn as several independently filled or stroked layers: 3-D
//! blocks, ribbons and scrolls, curved arrows, line callouts and action
//! buttons. Layers are returned in paint order; later entries paint over
//! earlier ones.

mod blocks;
mod buttons;
mod callouts;
mod curved;
mod ribbons;

use std::fmt;
use std::str::FromStr;

use crate::geometry::{Frame, PathData};
use crate::types::Adjustments;

/// How a sub-path is filled relative to the shape's base fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillMode {
    #[default]
    Normal,
    Darken,
    DarkenLess,
    Lighten,
    LightenLess,
    /// Stroke only.
    None,
}

/// Direction a shaded layer is blended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Black,
    White,
}

impl FillMode {
    /// Blend strength toward [`FillMode::tone`], `None` when nothing is filled.
    pub fn blend_ratio(self) -> Option<f64> {
        match self {
            FillMode::Normal => Some(0.0),
            FillMode::Darken | FillMode::Lighten => Some(0.4),
            FillMode::DarkenLess | FillMode::LightenLess => Some(0.2),
            FillMode::None => None,
        }
    }

    pub fn tone(self) -> Option<Tone> {
        match self {
            FillMode::Darken | FillMode::DarkenLess => Some(Tone::Black),
            FillMode::Lighten | FillMode::LightenLess => Some(Tone::White),
            FillMode::Normal | FillMode::None => None,
        }
    }

    pub fn is_filled(self) -> bool {
        self != FillMode::None
    }

    /// Blend an sRGB channel triple by this mode. Returns `None` for stroke-only layers.
    pub fn apply(self, rgb: [u8; 3]) -> Option<[u8; 3]> {
        let ratio = self.blend_ratio()?;
        let target = match self.tone() {
            Some(Tone::Black) => 0.0,
            Some(Tone::White) => 255.0,
            None => return Some(rgb),
        };
        Some(rgb.map(|c| {
            let c = c as f64;
            (c + (target - c) * ratio).round().clamp(0.0, 255.0) as u8
        }))
    }

    /// Attribute spelling used in shape definitions.
    pub fn as_str(self) -> &'static str {
        match self {
            FillMode::Normal => "norm",
            FillMode::Darken => "darken",
            FillMode::DarkenLess => "darkenLess",
            FillMode::Lighten => "lighten",
            FillMode::LightenLess => "lightenLess",
            FillMode::None => "none",
        }
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fill mode `{0}`")]
pub struct UnknownFillMode(pub String);

impl FromStr for FillMode {
    type Err = UnknownFillMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "norm" | "normal" => FillMode::Normal,
            "darken" => FillMode::Darken,
            "darkenLess" => FillMode::DarkenLess,
            "lighten" => FillMode::Lighten,
            "lightenLess" => FillMode::LightenLess,
            "none" => FillMode::None,
            _ => return Err(UnknownFillMode(s.to_string())),
        })
    }
}

fn finished(path: PathData) -> String {
    debug_assert!(path.is_finite(), "non-finite coordinate in layer");
    path.build()
}

/// One layer of a multi-path shape.
///
/// Debug builds assert that every layer coordinate is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct SubPath {
    pub path: String,
    pub fill_mode: FillMode,
    pub stroked: bool,
    /// Part of the shape's outer form rather than shading or line work
    /// painted over it.
    pub silhouette: bool,
}

impl SubPath {
    /// Filled layer without an outline.
    pub fn fill(path: PathData, fill_mode: FillMode) -> Self {
        SubPath {
            path: finished(path),
            fill_mode,
            stroked: false,
            silhouette: true,
        }
    }

    /// Filled layer shading a region some earlier layer already covers.
    pub fn shade(path: PathData, fill_mode: FillMode) -> Self {
        SubPath {
            silhouette: false,
            ..SubPath::fill(path, fill_mode)
        }
    }

    /// Stroke-only layer.
    pub fn stroke(path: PathData) -> Self {
        SubPath {
            path: finished(path),
            fill_mode: FillMode::None,
            stroked: true,
            silhouette: false,
        }
    }

    /// Filled and stroked layer.
    pub fn solid(path: PathData) -> Self {
        SubPath {
            path: finished(path),
            fill_mode: FillMode::Normal,
            stroked: true,
            silhouette: true,
        }
    }
}

/// The silhouette layers joined into one path.
///
/// Each region is traced once, so the result fills correctly under either
/// fill rule; shading and stroke-only layers are left out.
pub fn flatten_layers(layers: &[SubPath]) -> String {
    layers
        .iter()
        .filter(|l| l.silhouette && !l.path.is_empty())
        .map(|l| l.path.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

macro_rules! multi_presets {
    ($($variant:ident => $name:literal => $generate:path),* $(,)?) => {
        /// A preset drawn as several layers.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MultiPreset {
            $($variant),*
        }

        impl MultiPreset {
            pub const ALL: &'static [MultiPreset] = &[$(MultiPreset::$variant),*];

            pub fn name(self) -> &'static str {
                match self {
                    $(MultiPreset::$variant => $name),*
                }
            }

            fn generate(self, frame: &Frame) -> Vec<SubPath> {
                match self {
                    $(MultiPreset::$variant => $generate(frame)),*
                }
            }
        }
    };
}

multi_presets! {
    Cube => "cube" => blocks::cube,
    Can => "can" => blocks::can,
    Bevel => "bevel" => blocks::bevel,
    FoldedCorner => "foldedCorner" => blocks::folded_corner,
    SmileyFace => "smileyFace" => blocks::smiley_face,
    Ribbon => "ribbon" => ribbons::ribbon,
    Ribbon2 => "ribbon2" => ribbons::ribbon2,
    LeftRightRibbon => "leftRightRibbon" => ribbons::left_right_ribbon,
    EllipseRibbon => "ellipseRibbon" => ribbons::ellipse_ribbon,
    EllipseRibbon2 => "ellipseRibbon2" => ribbons::ellipse_ribbon2,
    VerticalScroll => "verticalScroll" => ribbons::vertical_scroll,
    HorizontalScroll => "horizontalScroll" => ribbons::horizontal_scroll,
    CurvedRightArrow => "curvedRightArrow" => curved::curved_right_arrow,
    CurvedLeftArrow => "curvedLeftArrow" => curved::curved_left_arrow,
    CurvedUpArrow => "curvedUpArrow" => curved::curved_up_arrow,
    CurvedDownArrow => "curvedDownArrow" => curved::curved_down_arrow,
    Callout1 => "callout1" => callouts::callout1,
    Callout2 => "callout2" => callouts::callout2,
    Callout3 => "callout3" => callouts::callout3,
    AccentCallout1 => "accentCallout1" => callouts::accent_callout1,
    AccentCallout2 => "accentCallout2" => callouts::accent_callout2,
    AccentCallout3 => "accentCallout3" => callouts::accent_callout3,
    BorderCallout1 => "borderCallout1" => callouts::border_callout1,
    BorderCallout2 => "borderCallout2" => callouts::border_callout2,
    BorderCallout3 => "borderCallout3" => callouts::border_callout3,
    AccentBorderCallout1 => "accentBorderCallout1" => callouts::accent_border_callout1,
    AccentBorderCallout2 => "accentBorderCallout2" => callouts::accent_border_callout2,
    AccentBorderCallout3 => "accentBorderCallout3" => callouts::accent_border_callout3,
    ActionButtonBlank => "actionButtonBlank" => buttons::blank,
    ActionButtonHome => "actionButtonHome" => buttons::home,
    ActionButtonHelp => "actionButtonHelp" => buttons::help,
    ActionButtonInformation => "actionButtonInformation" => buttons::information,
    ActionButtonBackPrevious => "actionButtonBackPrevious" => buttons::back_previous,
    ActionButtonForwardNext => "actionButtonForwardNext" => buttons::forward_next,
    ActionButtonBeginning => "actionButtonBeginning" => buttons::beginning,
    ActionButtonEnd => "actionButtonEnd" => buttons::end,
    ActionButtonReturn => "actionButtonReturn" => buttons::return_,
    ActionButtonDocument => "actionButtonDocument" => buttons::document,
    ActionButtonSound => "actionButtonSound" => buttons::sound,
    ActionButtonMovie => "actionButtonMovie" => buttons::movie,
}

impl MultiPreset {
    /// Case-insensitive lookup.
    pub fn from_name(name: &str) -> Option<MultiPreset> {
        MultiPreset::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    pub fn layers(self, w: f64, h: f64, adjustments: &Adjustments) -> Vec<SubPath> {
        self.generate(&Frame::new(w, h, adjustments))
    }
}

impl fmt::Display for MultiPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a multi-path preset into its ordered layers.
///
/// `None` means the name is not a multi-path preset; callers then consult
/// [`crate::resolve_preset`].
pub fn resolve_multi_path(
    name: &str,
    w: f64,
    h: f64,
    adjustments: &Adjustments,
) -> Option<Vec<SubPath>> {
    MultiPreset::from_name(name).map(|p| p.layers(w, h, adjustments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_contract() {
        assert_eq!(FillMode::Darken.blend_ratio(), Some(0.4));
        assert_eq!(FillMode::DarkenLess.blend_ratio(), Some(0.2));
        assert_eq!(FillMode::Lighten.tone(), Some(Tone::White));
        assert_eq!(FillMode::None.blend_ratio(), None);
        assert_eq!(FillMode::Darken.apply([100, 200, 50]), Some([60, 120, 30]));
        assert_eq!(FillMode::LightenLess.apply([0, 255, 100]), Some([51, 255, 131]));
        assert_eq!(FillMode::None.apply([1, 2, 3]), None);
    }

    #[test]
    fn fill_mode_names_round_trip() {
        for mode in [
            FillMode::Normal,
            FillMode::Darken,
            FillMode::DarkenLess,
            FillMode::Lighten,
            FillMode::LightenLess,
            FillMode::None,
        ] {
            assert_eq!(mode.as_str().parse::<FillMode>(), Ok(mode));
        }
        assert!("shade".parse::<FillMode>().is_err());
    }

    #[test]
    fn single_path_names_are_not_multi() {
        assert!(resolve_multi_path("rect", 10.0, 10.0, &Adjustments::new()).is_none());
        assert!(resolve_multi_path("CUBE", 10.0, 10.0, &Adjustments::new()).is_some());
    }

    #[test]
    fn flattened_shapes_trace_each_subpath_once() {
        let adj = Adjustments::new();
        for p in MultiPreset::ALL {
            let flat = flatten_layers(&p.layers(100.0, 80.0, &adj));
            assert!(flat.starts_with('M'), "{p}: {flat}");
            let mut seen = std::collections::HashSet::new();
            for sub in flat.split(" M") {
                assert!(seen.insert(sub.trim_start_matches('M')), "{p}: `{sub}` repeated in {flat}");
            }
        }
    }

    #[test]
    fn shading_stays_out_of_the_silhouette() {
        let adj = Adjustments::new();
        let smiley = flatten_layers(&MultiPreset::SmileyFace.layers(100.0, 100.0, &adj));
        assert_eq!(smiley, "M0,50 A50,50 0 0,1 100,50 A50,50 0 0,1 0,50 Z");
        let home = flatten_layers(&MultiPreset::ActionButtonHome.layers(100.0, 100.0, &adj));
        assert_eq!(home, "M0,0 L100,0 L100,100 L0,100 Z");
        let ribbon = MultiPreset::Ribbon.layers(100.0, 100.0, &adj);
        assert_eq!(flatten_layers(&ribbon), ribbon[0].path);
    }

    #[test]
    fn every_layer_set_is_nonempty() {
        let adj = Adjustments::new();
        for p in MultiPreset::ALL {
            let layers = p.layers(120.0, 80.0, &adj);
            assert!(!layers.is_empty(), "{p}");
            assert!(layers.iter().all(|l| l.fill_mode.is_filled() || l.stroked), "{p}");
        }
    }
}
