use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use squircley::animation::{FrameClock, FrameStatus, RotationTransition, SimulatedClock};
use squircley::defaults;
use squircley::svg::{ShapeStyle, SvgOptions, export_svg};
use squircley::{Curvature, PathData, RecordingSurface, squircle_path};
use std::fs;

/// Curvature rows rendered by the gallery
const GALLERY_CURVATURES: [u8; 6] = [0, 20, 40, 60, 80, 100];

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "gallery" => gallery(args.get(2).map(Utf8PathBuf::from)),
        "export" => export(&args[2..]),
        "transition" => transition(&args[2..]),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            usage();
            std::process::exit(1);
        }
    }
}

fn usage() {
    eprintln!("Usage: cargo xtask <command>");
    eprintln!("Commands:");
    eprintln!("  gallery [OUT]                         HTML grid of every curvature/rotation pair");
    eprintln!("  export CURVATURE ROTATION [OUT]       Write one exported SVG file");
    eprintln!("  transition CURVATURE FROM TO          Print the frames of a rotation transition");
}

fn workspace_root() -> &'static Utf8Path {
    Utf8Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("xtask lives inside the workspace")
}

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, name: &str) -> T {
    let Some(raw) = args.get(index) else {
        eprintln!("Missing argument: {name}");
        usage();
        std::process::exit(1);
    };
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid {name}: {raw}");
        std::process::exit(1);
    })
}

struct Cell {
    curvature: Curvature,
    rotation: f64,
    svg: String,
    width: f64,
    height: f64,
}

fn gallery(out: Option<Utf8PathBuf>) {
    let output_path = out.unwrap_or_else(|| workspace_root().join("gallery.html"));

    let jobs: Vec<(Curvature, f64)> = GALLERY_CURVATURES
        .iter()
        .flat_map(|&c| defaults::ROTATION_CHOICES.iter().map(move |&r| (Curvature::saturating(c as i64), r)))
        .collect();

    let style = ShapeStyle::default();
    let options = SvgOptions::default();
    let cells: Vec<Cell> = jobs
        .par_iter()
        .map(|&(curvature, rotation)| {
            let d = squircle_path(curvature, rotation);
            let data: PathData = d.parse().expect("generated path parses");
            let size = data.bounds().size();
            Cell {
                curvature,
                rotation,
                svg: export_svg(&d, &style, &options),
                width: size.x,
                height: size.y,
            }
        })
        .collect();

    let mut html = String::new();
    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Squircle gallery</title>
    <style>
        body {{
            font-family: system-ui, sans-serif;
            margin: 0;
            padding: 24px;
            background: #eee;
            color: #333;
        }}
        h1 {{
            font-weight: 600;
            font-size: 20px;
            margin: 0 0 24px 0;
        }}
        .grid {{
            display: grid;
            grid-template-columns: repeat({columns}, 1fr);
            gap: 12px;
        }}
        .cell {{
            background: white;
            border-radius: 8px;
            box-shadow: 0 1px 3px rgba(0,0,0,0.08);
            padding: 8px;
        }}
        .cell svg {{
            width: 100%;
            height: auto;
        }}
        .label {{
            font-size: 11px;
            color: #666;
            text-align: center;
        }}
    </style>
</head>
<body>
<h1>Squircles: {count} shapes</h1>
<div class="grid">
"#,
        columns = defaults::ROTATION_CHOICES.len(),
        count = cells.len(),
    ));

    for cell in &cells {
        html.push_str(&format!(
            r#"<div class="cell">
    {}
    <div class="label">curvature {} · {}° · {:.1}×{:.1}</div>
</div>
"#,
            cell.svg, cell.curvature, cell.rotation, cell.width, cell.height,
        ));
    }

    html.push_str("</div>\n</body></html>");

    fs::write(&output_path, html).expect("Failed to write HTML");
    println!("Generated gallery at: {}", output_path);
}

fn export(args: &[String]) {
    let curvature = Curvature::saturating(parse_arg::<i64>(args, 0, "curvature"));
    let rotation: f64 = parse_arg(args, 1, "rotation");
    let output_path = args
        .get(2)
        .map(Utf8PathBuf::from)
        .unwrap_or_else(|| workspace_root().join(defaults::EXPORT_FILENAME));

    let svg = export_svg(
        &squircle_path(curvature, rotation),
        &ShapeStyle::default(),
        &SvgOptions::default(),
    );
    fs::write(&output_path, svg).expect("Failed to write SVG");
    println!("Wrote {}", output_path);
}

fn transition(args: &[String]) {
    let curvature = Curvature::saturating(parse_arg::<i64>(args, 0, "curvature"));
    let from: f64 = parse_arg(args, 1, "start rotation");
    let to: f64 = parse_arg(args, 2, "target rotation");

    let mut controller = RotationTransition::new(RecordingSurface::new(), curvature);
    let mut clock = SimulatedClock::default();
    if from != 0.0 {
        controller.request_rotation(from);
        controller.drive(&mut clock);
    }
    controller.surface_mut().clear_publications();

    let mut token = controller.request_rotation(to);
    let start = clock.now();
    loop {
        let now = clock.next_frame();
        let status = controller.on_frame(token, now);
        println!("{:>8.3} ms  {:>9.4}°", now - start, controller.displayed_rotation());
        match status {
            FrameStatus::Continue(next) => token = next,
            FrameStatus::Finished | FrameStatus::Stale => break,
        }
    }
    println!(
        "{} frames published, settled at {}°",
        controller.surface().publications().len(),
        controller.state().current_rotation
    );
}
