//! Walks the preview through every rotation choice and inserts the result into
//! a console-backed host, printing what a real surface would receive.
//!
//! Run with `RUST_LOG=debug cargo run --example preview --features tracing`
//! to see the controller's own logging as well.

use squircley::animation::{RotationTransition, SimulatedClock};
use squircley::defaults;
use squircley::errors::HostError;
use squircley::host::{MessageOutcome, PluginMessage, ShapeHost, handle_message};
use squircley::surface::RenderSurface;
use squircley::svg::ShapeStyle;
use squircley::Curvature;

/// Prints every attribute change, truncating long path data.
struct ConsoleSurface {
    frames: usize,
}

impl RenderSurface for ConsoleSurface {
    fn set_path_data(&mut self, d: &str) {
        self.frames += 1;
        let head: String = d.chars().take(48).collect();
        tracing::debug!(frame = self.frames, "d = {head}…");
    }

    fn set_fill(&mut self, fill: &str) {
        println!("fill = {fill}");
    }

    fn set_stroke(&mut self, stroke: &str) {
        println!("stroke = {stroke}");
    }

    fn set_stroke_width(&mut self, width: &str) {
        println!("stroke-width = {width}");
    }
}

/// A page with numbered nodes and no selection.
#[derive(Default)]
struct ConsoleHost {
    next_id: u32,
}

impl ShapeHost for ConsoleHost {
    type Node = u32;

    fn create_node_from_svg(&mut self, svg: &str) -> Result<u32, HostError> {
        if !svg.starts_with("<svg") {
            return Err(HostError::rejected("not an SVG document"));
        }
        self.next_id += 1;
        println!("created node #{} from {} bytes of SVG", self.next_id, svg.len());
        Ok(self.next_id)
    }

    fn selected_frame(&self) -> Option<u32> {
        None
    }

    fn append_to_frame(&mut self, frame: &u32, node: &u32) -> Result<(), HostError> {
        println!("appended #{node} to frame #{frame}");
        Ok(())
    }

    fn append_to_page(&mut self, node: &u32) -> Result<(), HostError> {
        println!("appended #{node} to page");
        Ok(())
    }

    fn is_frame(&self, _node: &u32) -> bool {
        true
    }

    fn set_name(&mut self, node: &u32, name: &str) {
        println!("named #{node} {name:?}");
    }

    fn center_in_viewport(&mut self, node: &u32) {
        println!("centred #{node}");
    }

    fn select_and_focus(&mut self, node: &u32) {
        println!("selected #{node}");
    }

    fn notify(&mut self, message: &str) {
        println!("notify: {message}");
    }

    fn close(&mut self) {
        println!("plugin closed");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let curvature = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<i64>().ok())
        .map(Curvature::saturating)
        .unwrap_or_default();

    let mut preview = RotationTransition::new(ConsoleSurface { frames: 0 }, curvature);
    preview.set_style(&ShapeStyle::default());
    preview.refresh();

    let mut clock = SimulatedClock::default();
    for rotation in defaults::ROTATION_CHOICES.iter().skip(1) {
        preview.request_rotation(*rotation);
        let frames = preview.drive(&mut clock);
        tracing::info!(rotation, frames, "transition finished");
    }
    println!(
        "{} paths published over {:.0} ms",
        preview.surface().frames,
        clock.now()
    );

    let mut host = ConsoleHost::default();
    let message = PluginMessage::from_parts("create-squircle", Some(curvature.value() as f64));
    match handle_message(&mut host, &message) {
        MessageOutcome::Created(node) => println!("inserted node #{node}"),
        MessageOutcome::Failed(err) => eprintln!("{:?}", miette::Report::new(err)),
        MessageOutcome::Closed | MessageOutcome::Ignored => {}
    }
    handle_message(&mut host, &PluginMessage::Cancel);
}
