//! Prints the exported SVG for a curvature and rotation, or re-wraps path data
//! passed with `--path`.
//!
//! ```text
//! cargo run --example export -- 75 45
//! cargo run --example export -- --path "M 244.5 144.5 C ... Z"
//! ```

use squircley::svg::{ShapeStyle, SvgOptions, export_svg};
use squircley::{Curvature, PathData, squircle_path};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let d = match args.as_slice() {
        [flag, path] if flag == "--path" => {
            let data: PathData = path.parse()?;
            if !data.is_four_segment_contour() {
                tracing::warn!(commands = data.commands().len(), "path is not a closed four-segment outline");
            }
            data.to_string()
        }
        rest => {
            let curvature = rest
                .first()
                .map(|c| c.parse::<i64>().map(Curvature::saturating))
                .transpose()
                .map_err(|e| miette::miette!("invalid curvature: {e}"))?
                .unwrap_or_default();
            let rotation = rest
                .get(1)
                .map(|r| r.parse::<f64>())
                .transpose()
                .map_err(|e| miette::miette!("invalid rotation: {e}"))?
                .unwrap_or(0.0);
            tracing::info!(%curvature, rotation, "exporting squircle");
            squircle_path(curvature, rotation)
        }
    };

    println!("{}", export_svg(&d, &ShapeStyle::default(), &SvgOptions::default()));
    Ok(())
}
