//! End-to-end checks over the public resolvers.
//!
//! Run with `RUST_LOG=debug cargo test --features tracing -- --nocapture` to
//! see the resolver logs.

use prstgeom::remap::{ShapeBox, SpaceSource};
use prstgeom::{
    Adjustments, CoordinateBox, CustomPath, DiagramHeuristics, FillMode, MultiPreset, Preset,
    ShapeDescriptor, derive_diagram_child_space, layout_group_children, preset_names, remap_box,
    resolve_custom, resolve_descriptor, resolve_multi_path, resolve_preset,
};

const SIZES: [(f64, f64); 6] = [
    (0.0, 0.0),
    (0.0, 50.0),
    (50.0, 0.0),
    (100.0, 50.0),
    (37.3, 211.0),
    (12_192_000.0, 6_858_000.0),
];

fn init_tracing() {
    #[cfg(feature = "tracing")]
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn extreme_adjustments() -> [Adjustments; 4] {
    [-100_000.0, 0.0, 50_000.0, 250_000.0].map(|v| {
        (1..=8)
            .map(|i| (format!("adj{i}"), v))
            .collect::<Adjustments>()
    })
}

fn assert_no_negative_zero(name: &str, path: &str) {
    for bad in ["-0,", "-0 "] {
        assert!(!path.contains(bad), "{name}: `{bad}` in {path}");
    }
}

#[test]
fn every_preset_resolves_at_every_size() {
    init_tracing();
    let adj = Adjustments::new();
    for name in preset_names() {
        for (w, h) in SIZES {
            assert_no_negative_zero(name, &resolve_preset(name, w, h, &adj));
            // layers assert finiteness in debug builds as they are built
            if let Some(layers) = resolve_multi_path(name, w, h, &adj) {
                assert!(!layers.is_empty(), "{name}: no layers");
            }
        }
    }
}

#[test]
fn outlines_are_finite_before_formatting() {
    let mut adjs = extreme_adjustments().to_vec();
    adjs.push(Adjustments::new());
    for preset in Preset::ALL {
        for adj in &adjs {
            for (w, h) in SIZES {
                let outline = preset.outline(w, h, adj);
                assert!(outline.is_finite(), "{preset} at {w}x{h}: {}", outline.build());
            }
        }
    }
}

#[test]
fn layers_survive_extreme_adjustments() {
    for preset in MultiPreset::ALL {
        for adj in &extreme_adjustments() {
            for (w, h) in SIZES {
                assert!(!preset.layers(w, h, adj).is_empty(), "{preset}");
            }
        }
    }
}

#[test]
fn single_path_presets_start_with_a_move() {
    let adj = Adjustments::new();
    for preset in Preset::ALL {
        let path = preset.path(100.0, 50.0, &adj);
        assert!(path.starts_with('M'), "{preset}: {path}");
    }
}

#[test]
fn resolution_is_deterministic() {
    let adj = Adjustments::new().with("adj1", 30_000.0).with("adj2", 12_500.0);
    for name in preset_names() {
        assert_eq!(
            resolve_preset(name, 140.0, 90.0, &adj),
            resolve_preset(name, 140.0, 90.0, &adj),
            "{name}"
        );
    }
}

#[test]
fn unknown_preset_is_the_frame_rectangle() {
    let adj = Adjustments::new();
    insta::assert_snapshot!(resolve_preset("notAShape", 100.0, 50.0, &adj), @"M0,0 L100,0 L100,50 L0,50 Z");
    assert_eq!(resolve_multi_path("notAShape", 100.0, 50.0, &adj), None);
}

#[test]
fn lookup_ignores_case() {
    let adj = Adjustments::new();
    assert_eq!(
        resolve_preset("DIAMOND", 100.0, 50.0, &adj),
        resolve_preset("diamond", 100.0, 50.0, &adj)
    );
    assert_eq!(MultiPreset::from_name("CUBE"), MultiPreset::from_name("cube"));
}

#[test]
fn collapsed_lines_stay_drawable() {
    let adj = Adjustments::new();
    insta::assert_snapshot!(resolve_preset("line", 0.0, 50.0, &adj), @"M0.5,0 L0.5,50");
    insta::assert_snapshot!(resolve_preset("straightConnector1", 50.0, 0.0, &adj), @"M0,0.5 L50,0.5");
}

#[test]
fn known_outlines() {
    let adj = Adjustments::new();
    insta::assert_snapshot!(resolve_preset("diamond", 100.0, 50.0, &adj), @"M0,25 L50,0 L100,25 L50,50 Z");
    insta::assert_snapshot!(resolve_preset("funnel", 100.0, 100.0, &adj), @"M0,25 A50,25 0 0,1 100,25 L62.5,95 A12.5,5 0 0,1 37.5,95 Z M5,25 A45,20 0 0,0 95,25 A45,20 0 0,0 5,25 Z");
}

#[test]
fn descriptor_layers_keep_paint_order() {
    let desc = ShapeDescriptor::new("actionButtonForwardNext", 100.0, 100.0);
    let prstgeom::ShapeGeometry::Multi(layers) = resolve_descriptor(&desc) else {
        panic!("action buttons are layered");
    };
    let modes: Vec<_> = layers.iter().map(|l| l.fill_mode).collect();
    assert_eq!(
        modes,
        [FillMode::Normal, FillMode::Darken, FillMode::None, FillMode::None]
    );
    assert_eq!(layers[1].path, "M12.5,12.5 L87.5,50 L12.5,87.5 Z");
}

#[test]
fn flattened_shapes_trace_each_region_once() {
    let adj = Adjustments::new();
    let face = resolve_preset("smileyFace", 100.0, 100.0, &adj);
    assert_eq!(face.matches("M0,50 A50,50 0 0,1 100,50 A50,50 0 0,1 0,50 Z").count(), 1, "{face}");
    let home = resolve_preset("actionButtonHome", 100.0, 100.0, &adj);
    assert_eq!(home.matches("M0,0 L100,0 L100,100 L0,100 Z").count(), 1, "{home}");
}

#[test]
fn guides_feed_adjustments() {
    let adj = Adjustments::from_guides([("adj", "val 0")]).unwrap();
    let sharp = resolve_preset("roundRect", 80.0, 40.0, &adj);
    assert!(!sharp.contains('A'), "{sharp}");
    assert!(prstgeom::parse_guide_value("adj", "*/ w 1 2").is_err());
}

#[test]
fn custom_arc_starts_at_the_pen() {
    let path = CustomPath::default()
        .with_size(40.0, 20.0)
        .move_to(40.0, 10.0)
        .arc_to(20.0, 10.0, 0.0, 90.0);
    insta::assert_snapshot!(resolve_custom(&path, 40.0, 20.0, None), @"M40,10 A20,10 0 0,1 20,20");
}

#[test]
fn remap_maps_corners_to_corners() {
    let space = CoordinateBox::new(-50.0, 0.0, 100.0, 200.0);
    let parent = CoordinateBox::new(0.0, 0.0, 400.0, 400.0);
    let child = CoordinateBox::new(0.0, 100.0, 50.0, 100.0);
    let out = remap_box(&child, &space, &parent);
    assert_eq!(out, CoordinateBox::new(200.0, 200.0, 200.0, 200.0));
}

#[test]
fn circular_diagram_space_matches_frame_aspect() {
    let frame = CoordinateBox::new(0.0, 0.0, 200.0, 100.0);
    let shapes = [
        ShapeBox::new(CoordinateBox::new(10.0, 10.0, 50.0, 50.0), "pie"),
        ShapeBox::new(CoordinateBox::new(20.0, 20.0, 40.0, 40.0), "rect"),
    ];
    let derived = derive_diagram_child_space(&shapes, &frame, &DiagramHeuristics::default());
    assert!(derived.circular);
    assert_eq!(derived.source, SpaceSource::AspectCorrected);
    assert_eq!(derived.space, CoordinateBox::new(-15.0, 10.0, 100.0, 50.0));
}

#[test]
fn cycle_diagram_shares_one_circle() {
    let b = CoordinateBox::new(0.0, 0.0, 10.0, 10.0);
    let children: Vec<_> = ["pie", "pie", "pie", "circularArrow", "circularArrow", "circularArrow"]
        .into_iter()
        .map(|p| ShapeBox::new(b, p))
        .collect();
    let parent = CoordinateBox::new(0.0, 0.0, 300.0, 100.0);
    let layout = layout_group_children(&children, &b, &parent);
    assert!(layout.cycle);
    let order: Vec<_> = layout.children.iter().map(|c| c.index).collect();
    assert_eq!(order, [3, 4, 5, 0, 1, 2]);
    let circle = CoordinateBox::new(100.0, 0.0, 100.0, 100.0);
    assert!(layout.children[3..].iter().all(|c| c.bounds == Some(circle)));
}
