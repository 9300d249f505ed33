//! SVG documents wrapping a generated path.
//!
//! Two layouts exist. [`host_svg`] is what the design-tool plugin imports: a
//! `0 0 W H` viewBox with `rgb()` colours. [`export_svg`] is the downloadable
//! file from the web preview: the viewBox is padded by the stroke weight and
//! colours are written exactly as the preview holds them.

use std::borrow::Cow;

use crate::defaults;
use crate::superellipse::squircle_path;
use crate::types::{Curvature, Rgb};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Fill, stroke and stroke width as applied to a rendering surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeStyle {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: u32,
}

impl ShapeStyle {
    /// Style with colours written as `rgb(R, G, B)`.
    pub fn rgb(fill: Rgb, stroke: Rgb, stroke_width: u32) -> Self {
        Self {
            fill: fill.to_string(),
            stroke: stroke.to_string(),
            stroke_width,
        }
    }
}

impl Default for ShapeStyle {
    /// The preview's initial colours: `#EFB435` on `#000000`, 4px stroke.
    fn default() -> Self {
        Self {
            fill: defaults::FILL_HEX.to_string(),
            stroke: defaults::STROKE_HEX.to_string(),
            stroke_width: defaults::STROKE_WEIGHT,
        }
    }
}

/// Size and colours of a shape inserted into the host document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquircleProperties {
    pub width: u32,
    pub height: u32,
    pub fill: Rgb,
    pub stroke: Rgb,
    pub stroke_weight: u32,
}

impl Default for SquircleProperties {
    fn default() -> Self {
        Self {
            width: defaults::WIDTH,
            height: defaults::HEIGHT,
            fill: Rgb::from(defaults::FILL_COLOR),
            stroke: Rgb::from(defaults::STROKE_COLOR),
            stroke_weight: defaults::STROKE_WEIGHT,
        }
    }
}

impl SquircleProperties {
    pub fn style(&self) -> ShapeStyle {
        ShapeStyle::rgb(self.fill, self.stroke, self.stroke_weight)
    }
}

/// Document size and viewBox for exported files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SvgOptions {
    pub width: u32,
    pub height: u32,
    pub view_box: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: defaults::WIDTH,
            height: defaults::HEIGHT,
            view_box: defaults::EXPORT_VIEW_BOX.to_string(),
        }
    }
}

/// Markup for host insertion.
///
/// ```text
/// <svg width="W" height="H" viewBox="0 0 W H" fill="none" xmlns="http://www.w3.org/2000/svg">
///   <path d="PATH" fill="rgb(R, G, B)" stroke="rgb(R, G, B)" stroke-width="N"/>
/// </svg>
/// ```
pub fn host_svg(path: &str, props: &SquircleProperties) -> String {
    let SquircleProperties {
        width,
        height,
        fill,
        stroke,
        stroke_weight,
    } = *props;
    format!(
        "<svg width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" fill=\"none\" xmlns=\"{SVG_NS}\">\n  \
         <path d=\"{d}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"{stroke_weight}\"/>\n\
         </svg>",
        d = escape_attr(path),
    )
}

/// Markup for a downloaded or copied file.
pub fn export_svg(path: &str, style: &ShapeStyle, options: &SvgOptions) -> String {
    format!(
        "<svg xmlns=\"{SVG_NS}\" width=\"{width}\" height=\"{height}\" viewBox=\"{view_box}\" fill=\"none\">\n  \
         <path d=\"{d}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\" />\n\
         </svg>",
        width = options.width,
        height = options.height,
        view_box = escape_attr(&options.view_box),
        d = escape_attr(path),
        fill = escape_attr(&style.fill),
        stroke = escape_attr(&style.stroke),
        stroke_width = style.stroke_width,
    )
}

/// Host markup for an unrotated squircle at `curvature` with default properties.
pub fn squircle_svg(curvature: Curvature) -> String {
    host_svg(&squircle_path(curvature, 0.0), &SquircleProperties::default())
}

/// Escape a value for a double-quoted XML attribute.
fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
