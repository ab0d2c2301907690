use camino::Utf8PathBuf;
use prstgeom::{Adjustments, FillMode, ShapeDescriptor, ShapeGeometry, preset_names, resolve_descriptor};
use rayon::prelude::*;
use std::fs;

const CELL_W: f64 = 160.0;
const CELL_H: f64 = 100.0;
const BASE_FILL: [u8; 3] = [0x44, 0x72, 0xc4];

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run -p xtask -- <command>");
        eprintln!("Commands:");
        eprintln!("  gallery [OUT]   Render every preset into an HTML page");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "gallery" => gallery(args.get(2).map(Utf8PathBuf::from)),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

fn gallery(out: Option<Utf8PathBuf>) {
    let manifest_dir = Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let output_path = out.unwrap_or_else(|| manifest_dir.join("../gallery.html"));

    let names: Vec<&'static str> = preset_names().collect();
    let cards: Vec<String> = names.par_iter().map(|name| card(name)).collect();

    let mut html = String::new();
    html.push_str(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Preset geometry gallery</title>
    <style>
        body { font-family: system-ui, sans-serif; margin: 0; background: #eee; color: #333; }
        .page { max-width: 1200px; margin: 0 auto; padding: 24px; }
        h1 { font-weight: 600; font-size: 20px; margin: 0 0 24px 0; }
        .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 12px; }
        .card { background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); padding: 12px; }
        .card.multi .name::after { content: " (layered)"; color: #999; }
        .name { font-size: 12px; font-weight: 600; margin-bottom: 8px; }
        svg { width: 100%; height: auto; overflow: visible; }
    </style>
</head>
<body>
<div class="page">
"#,
    );
    html.push_str(&format!("<h1>{} presets</h1>\n<div class=\"grid\">\n", names.len()));
    for c in &cards {
        html.push_str(c);
    }
    html.push_str("</div>\n</div>\n</body></html>\n");

    fs::write(&output_path, html).expect("Failed to write HTML");
    println!("Generated gallery at: {}", output_path);
}

fn card(name: &str) -> String {
    let desc = ShapeDescriptor::new(name, CELL_W, CELL_H).with_adjustments(Adjustments::new());
    let (class, body) = match resolve_descriptor(&desc) {
        ShapeGeometry::Single(d) => ("card", path_element(&d, Some(BASE_FILL), true)),
        ShapeGeometry::Multi(layers) => (
            "card multi",
            layers
                .iter()
                .map(|l| path_element(&l.path, l.fill_mode.apply(BASE_FILL), l.stroked))
                .collect(),
        ),
    };
    format!(
        r#"<div class="{class}" id="{name}">
    <div class="name">{name}</div>
    <svg viewBox="-10 -10 {vw} {vh}" xmlns="http://www.w3.org/2000/svg">{body}</svg>
</div>
"#,
        vw = CELL_W + 20.0,
        vh = CELL_H + 20.0,
    )
}

fn path_element(d: &str, fill: Option<[u8; 3]>, stroked: bool) -> String {
    let fill = match fill {
        Some([r, g, b]) => format!("#{r:02x}{g:02x}{b:02x}"),
        None => FillMode::None.as_str().to_string(),
    };
    let stroke = if stroked { "#2f528f" } else { "none" };
    format!(r#"<path d="{d}" fill="{fill}" stroke="{stroke}" stroke-width="1.5" fill-rule="evenodd"/>"#)
}
