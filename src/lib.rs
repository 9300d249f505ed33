//! Superellipse ("squircle") outlines as four-segment cubic Bézier SVG paths,
//! with eased rotation transitions and a design-tool plugin adapter.
//!
//! ```
//! let d = squircley::build_path(100.0, 100.0, 5.25, 45.0);
//! assert!(d.starts_with('M') && d.ends_with('Z'));
//! ```

pub mod animation;
pub mod defaults;
pub mod errors;
pub mod host;
pub mod log;
pub mod parse;
pub mod path;
pub mod superellipse;
pub mod surface;
pub mod svg;
pub mod types;

pub use animation::{AnimationState, FrameClock, FrameStatus, FrameToken, RotationTransition, SimulatedClock};
pub use errors::{HostError, PathParseError, ShapeError};
pub use path::{BezierSegment, PathCommand, PathData};
pub use superellipse::{ShapeConstants, build_path, build_path_with, curvature_to_exponent, squircle_path};
pub use surface::{RecordingSurface, RenderSurface};
pub use svg::{ShapeStyle, SquircleProperties, SvgOptions, squircle_svg};
pub use types::{BBox, Curvature, Exponent, Point, Rgb, ShapeParameters};

/// Validate the parameters, then build the path.
///
/// Unlike [`build_path`], out-of-range exponents and non-positive axes are
/// reported instead of producing a degenerate outline.
pub fn try_build_path(a: f64, b: f64, p: f64, rotation: f64) -> Result<String, ShapeError> {
    let params = ShapeParameters::try_new(a, b, p, rotation)?;
    Ok(superellipse::path_for(&params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_build_matches_raw_build() {
        assert_eq!(try_build_path(100.0, 80.0, 3.0, 45.0), Ok(build_path(100.0, 80.0, 3.0, 45.0)));
    }

    #[test]
    fn validated_build_rejects_bad_exponent() {
        assert!(matches!(
            try_build_path(100.0, 100.0, 0.0, 0.0),
            Err(ShapeError::InvalidExponent { value, .. }) if value == 0.0
        ));
    }
}
