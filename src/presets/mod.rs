//! Preset shape library
//!
//! One closed-form generator per named preset. The table below is the single
//! source of truth for names: it produces the [`Preset`] enum, the
//! case-insensitive lookup and the dispatch.

mod arrows;
mod basic;
mod brackets;
mod callouts;
mod circular;
mod connectors;
mod flowchart;
mod math;
mod misc;
mod rects;
mod round;
mod stars;

use crate::geometry::path::rect_path;
use crate::geometry::{Frame, PathData};
use crate::log;
use crate::multipath;
use crate::types::Adjustments;

macro_rules! presets {
    ($($variant:ident => $name:literal => $generate:path),* $(,)?) => {
        /// A single-path preset geometry.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Preset {
            $($variant),*
        }

        impl Preset {
            /// Every single-path preset, in table order.
            pub const ALL: &'static [Preset] = &[$(Preset::$variant),*];

            /// Canonical (camelCase) preset name.
            pub fn name(self) -> &'static str {
                match self {
                    $(Preset::$variant => $name),*
                }
            }

            fn generate(self, frame: &Frame) -> PathData {
                match self {
                    $(Preset::$variant => $generate(frame)),*
                }
            }
        }
    };
}

presets! {
    // Basic shapes
    Rect => "rect" => basic::rect,
    RoundRect => "roundRect" => basic::round_rect,
    Ellipse => "ellipse" => basic::ellipse,
    Triangle => "triangle" => basic::triangle,
    RtTriangle => "rtTriangle" => basic::rt_triangle,
    Diamond => "diamond" => basic::diamond,
    Parallelogram => "parallelogram" => basic::parallelogram,
    Trapezoid => "trapezoid" => basic::trapezoid,
    NonIsoscelesTrapezoid => "nonIsoscelesTrapezoid" => basic::non_isosceles_trapezoid,
    Pentagon => "pentagon" => basic::pentagon,
    Hexagon => "hexagon" => basic::hexagon,
    Heptagon => "heptagon" => basic::heptagon,
    Octagon => "octagon" => basic::octagon,
    Decagon => "decagon" => basic::decagon,
    Dodecagon => "dodecagon" => basic::dodecagon,
    Plus => "plus" => basic::plus,
    Frame => "frame" => basic::frame,
    HalfFrame => "halfFrame" => basic::half_frame,
    Corner => "corner" => basic::corner,
    DiagStripe => "diagStripe" => basic::diag_stripe,
    HomePlate => "homePlate" => basic::home_plate,
    Chevron => "chevron" => basic::chevron,
    Plaque => "plaque" => basic::plaque,
    // Rectangles with treated corners
    Round1Rect => "round1Rect" => rects::round1_rect,
    Round2SameRect => "round2SameRect" => rects::round2_same_rect,
    Round2DiagRect => "round2DiagRect" => rects::round2_diag_rect,
    Snip1Rect => "snip1Rect" => rects::snip1_rect,
    Snip2SameRect => "snip2SameRect" => rects::snip2_same_rect,
    Snip2DiagRect => "snip2DiagRect" => rects::snip2_diag_rect,
    SnipRoundRect => "snipRoundRect" => rects::snip_round_rect,
    // Arc-based
    Pie => "pie" => round::pie,
    PieWedge => "pieWedge" => round::pie_wedge,
    Chord => "chord" => round::chord,
    Arc => "arc" => round::arc,
    BlockArc => "blockArc" => round::block_arc,
    Donut => "donut" => round::donut,
    NoSmoking => "noSmoking" => round::no_smoking,
    Teardrop => "teardrop" => round::teardrop,
    Moon => "moon" => round::moon,
    // Stars and seals
    Star4 => "star4" => stars::star4,
    Star5 => "star5" => stars::star5,
    Star6 => "star6" => stars::star6,
    Star7 => "star7" => stars::star7,
    Star8 => "star8" => stars::star8,
    Star10 => "star10" => stars::star10,
    Star12 => "star12" => stars::star12,
    Star16 => "star16" => stars::star16,
    Star24 => "star24" => stars::star24,
    Star32 => "star32" => stars::star32,
    IrregularSeal1 => "irregularSeal1" => stars::irregular_seal1,
    IrregularSeal2 => "irregularSeal2" => stars::irregular_seal2,
    // Block arrows
    RightArrow => "rightArrow" => arrows::right_arrow,
    LeftArrow => "leftArrow" => arrows::left_arrow,
    UpArrow => "upArrow" => arrows::up_arrow,
    DownArrow => "downArrow" => arrows::down_arrow,
    LeftRightArrow => "leftRightArrow" => arrows::left_right_arrow,
    UpDownArrow => "upDownArrow" => arrows::up_down_arrow,
    QuadArrow => "quadArrow" => arrows::quad_arrow,
    LeftRightUpArrow => "leftRightUpArrow" => arrows::left_right_up_arrow,
    LeftUpArrow => "leftUpArrow" => arrows::left_up_arrow,
    BentUpArrow => "bentUpArrow" => arrows::bent_up_arrow,
    BentArrow => "bentArrow" => arrows::bent_arrow,
    UturnArrow => "uturnArrow" => arrows::uturn_arrow,
    StripedRightArrow => "stripedRightArrow" => arrows::striped_right_arrow,
    NotchedRightArrow => "notchedRightArrow" => arrows::notched_right_arrow,
    SwooshArrow => "swooshArrow" => arrows::swoosh_arrow,
    RightArrowCallout => "rightArrowCallout" => arrows::right_arrow_callout,
    LeftArrowCallout => "leftArrowCallout" => arrows::left_arrow_callout,
    UpArrowCallout => "upArrowCallout" => arrows::up_arrow_callout,
    DownArrowCallout => "downArrowCallout" => arrows::down_arrow_callout,
    LeftRightArrowCallout => "leftRightArrowCallout" => arrows::left_right_arrow_callout,
    UpDownArrowCallout => "upDownArrowCallout" => arrows::up_down_arrow_callout,
    QuadArrowCallout => "quadArrowCallout" => arrows::quad_arrow_callout,
    CircularArrow => "circularArrow" => circular::circular_arrow,
    LeftCircularArrow => "leftCircularArrow" => circular::left_circular_arrow,
    LeftRightCircularArrow => "leftRightCircularArrow" => circular::left_right_circular_arrow,
    // Callouts
    WedgeRectCallout => "wedgeRectCallout" => callouts::wedge_rect_callout,
    WedgeRoundRectCallout => "wedgeRoundRectCallout" => callouts::wedge_round_rect_callout,
    WedgeEllipseCallout => "wedgeEllipseCallout" => callouts::wedge_ellipse_callout,
    CloudCallout => "cloudCallout" => callouts::cloud_callout,
    // Flowchart
    FlowChartProcess => "flowChartProcess" => flowchart::process,
    FlowChartAlternateProcess => "flowChartAlternateProcess" => flowchart::alternate_process,
    FlowChartDecision => "flowChartDecision" => flowchart::decision,
    FlowChartInputOutput => "flowChartInputOutput" => flowchart::input_output,
    FlowChartPredefinedProcess => "flowChartPredefinedProcess" => flowchart::predefined_process,
    FlowChartInternalStorage => "flowChartInternalStorage" => flowchart::internal_storage,
    FlowChartDocument => "flowChartDocument" => flowchart::document,
    FlowChartMultidocument => "flowChartMultidocument" => flowchart::multidocument,
    FlowChartTerminator => "flowChartTerminator" => flowchart::terminator,
    FlowChartPreparation => "flowChartPreparation" => flowchart::preparation,
    FlowChartManualInput => "flowChartManualInput" => flowchart::manual_input,
    FlowChartManualOperation => "flowChartManualOperation" => flowchart::manual_operation,
    FlowChartConnector => "flowChartConnector" => flowchart::connector,
    FlowChartOffpageConnector => "flowChartOffpageConnector" => flowchart::offpage_connector,
    FlowChartPunchedCard => "flowChartPunchedCard" => flowchart::punched_card,
    FlowChartPunchedTape => "flowChartPunchedTape" => flowchart::punched_tape,
    FlowChartSummingJunction => "flowChartSummingJunction" => flowchart::summing_junction,
    FlowChartOr => "flowChartOr" => flowchart::or,
    FlowChartCollate => "flowChartCollate" => flowchart::collate,
    FlowChartSort => "flowChartSort" => flowchart::sort,
    FlowChartExtract => "flowChartExtract" => flowchart::extract,
    FlowChartMerge => "flowChartMerge" => flowchart::merge,
    FlowChartOfflineStorage => "flowChartOfflineStorage" => flowchart::offline_storage,
    FlowChartOnlineStorage => "flowChartOnlineStorage" => flowchart::online_storage,
    FlowChartMagneticTape => "flowChartMagneticTape" => flowchart::magnetic_tape,
    FlowChartMagneticDisk => "flowChartMagneticDisk" => flowchart::magnetic_disk,
    FlowChartMagneticDrum => "flowChartMagneticDrum" => flowchart::magnetic_drum,
    FlowChartDisplay => "flowChartDisplay" => flowchart::display,
    FlowChartDelay => "flowChartDelay" => flowchart::delay,
    // Math
    MathPlus => "mathPlus" => math::math_plus,
    MathMinus => "mathMinus" => math::math_minus,
    MathMultiply => "mathMultiply" => math::math_multiply,
    MathDivide => "mathDivide" => math::math_divide,
    MathEqual => "mathEqual" => math::math_equal,
    MathNotEqual => "mathNotEqual" => math::math_not_equal,
    // Lines and connectors
    Line => "line" => connectors::line,
    LineInv => "lineInv" => connectors::line_inv,
    StraightConnector1 => "straightConnector1" => connectors::straight_connector1,
    BentConnector2 => "bentConnector2" => connectors::bent_connector2,
    BentConnector3 => "bentConnector3" => connectors::bent_connector3,
    BentConnector4 => "bentConnector4" => connectors::bent_connector4,
    BentConnector5 => "bentConnector5" => connectors::bent_connector5,
    CurvedConnector2 => "curvedConnector2" => connectors::curved_connector2,
    CurvedConnector3 => "curvedConnector3" => connectors::curved_connector3,
    CurvedConnector4 => "curvedConnector4" => connectors::curved_connector4,
    CurvedConnector5 => "curvedConnector5" => connectors::curved_connector5,
    // Brackets
    LeftBracket => "leftBracket" => brackets::left_bracket,
    RightBracket => "rightBracket" => brackets::right_bracket,
    LeftBrace => "leftBrace" => brackets::left_brace,
    RightBrace => "rightBrace" => brackets::right_brace,
    BracketPair => "bracketPair" => brackets::bracket_pair,
    BracePair => "bracePair" => brackets::brace_pair,
    // Miscellaneous
    Heart => "heart" => misc::heart,
    LightningBolt => "lightningBolt" => misc::lightning_bolt,
    Sun => "sun" => misc::sun,
    Cloud => "cloud" => misc::cloud,
    Wave => "wave" => misc::wave,
    DoubleWave => "doubleWave" => misc::double_wave,
    Gear6 => "gear6" => misc::gear6,
    Gear9 => "gear9" => misc::gear9,
    Funnel => "funnel" => misc::funnel,
    CornerTabs => "cornerTabs" => misc::corner_tabs,
    SquareTabs => "squareTabs" => misc::square_tabs,
    PlaqueTabs => "plaqueTabs" => misc::plaque_tabs,
    ChartPlus => "chartPlus" => misc::chart_plus,
    ChartX => "chartX" => misc::chart_x,
    ChartStar => "chartStar" => misc::chart_star,
}

impl Preset {
    /// Case-insensitive lookup.
    pub fn from_name(name: &str) -> Option<Preset> {
        Preset::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Generate this preset's path into a `w x h` box.
    pub fn path(self, w: f64, h: f64, adjustments: &Adjustments) -> String {
        self.outline(w, h, adjustments).build()
    }

    /// The unformatted outline, for checks such as [`PathData::is_finite`].
    pub fn outline(self, w: f64, h: f64, adjustments: &Adjustments) -> PathData {
        self.generate(&Frame::new(w, h, adjustments))
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::from_name(s).ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

/// Returned by `str::parse::<Preset>()` for names not in the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preset geometry `{0}`")]
pub struct UnknownPreset(pub String);

/// Resolve a preset name to a single path string.
///
/// Multi-path presets resolve to their silhouette layers joined in order
/// (see [`multipath::flatten_layers`]). Unknown names fall back to the full
/// rectangle and log a warning.
pub fn resolve_preset(name: &str, w: f64, h: f64, adjustments: &Adjustments) -> String {
    if let Some(preset) = Preset::from_name(name) {
        return preset.path(w, h, adjustments);
    }
    if let Some(layers) = multipath::resolve_multi_path(name, w, h, adjustments) {
        return multipath::flatten_layers(&layers);
    }
    log::warn!(preset = name, "unknown preset geometry, using rectangle");
    let frame_adj = Adjustments::new();
    let frame = Frame::new(w, h, &frame_adj);
    rect_path(0.0, 0.0, frame.w, frame.h).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(Preset::from_name("ROUNDRECT"), Some(Preset::RoundRect));
        assert_eq!(Preset::from_name("flowchartdecision"), Some(Preset::FlowChartDecision));
        assert_eq!("rightArrow".parse::<Preset>(), Ok(Preset::RightArrow));
        assert!("nope".parse::<Preset>().is_err());
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = Preset::ALL.iter().map(|p| p.name().to_ascii_lowercase()).collect();
        names.sort();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
    }

    #[test]
    fn unknown_preset_falls_back_to_rectangle() {
        let path = resolve_preset("noSuchShape", 120.0, 40.0, &Adjustments::new());
        assert_eq!(path, "M0,0 L120,0 L120,40 L0,40 Z");
    }
}
