//! Strongly-typed values for shape parameters, colours and bounds.
//!
//! Geometry internals work on raw `f64` and `DVec2`; these types sit at the
//! edges where values arrive from sliders, messages and configuration.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;

use crate::defaults;
use crate::errors::ShapeError;

/// A point in the local shape frame (or, after recentering, in the viewBox).
pub type Point = DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero or negative when positive required
    NotPositive,
    /// Value lies outside the accepted range
    OutOfRange,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::NotPositive => write!(f, "value is not positive"),
            NumericError::OutOfRange => write!(f, "value is out of range"),
        }
    }
}

impl std::error::Error for NumericError {}

fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Superellipse exponent `p`, always within `[0.5, 10]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Exponent(f64);

impl Exponent {
    pub const MIN: Exponent = Exponent(defaults::MIN_EXPONENT);
    pub const MAX: Exponent = Exponent(defaults::MAX_EXPONENT);
    /// `p = 2`: the plain ellipse.
    pub const ELLIPSE: Exponent = Exponent(2.0);

    /// Create an exponent with validation (rejects NaN, infinite, out of range)
    pub fn try_new(val: f64) -> Result<Exponent, NumericError> {
        let val = check_finite(val)?;
        if !(defaults::MIN_EXPONENT..=defaults::MAX_EXPONENT).contains(&val) {
            return Err(NumericError::OutOfRange);
        }
        Ok(Exponent(val))
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Curvature slider position, 0..=100.
///
/// Higher curvature means a higher exponent, which means a *more* rectangular
/// shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Curvature(u8);

impl Curvature {
    pub const MIN: Curvature = Curvature(defaults::MIN_CURVATURE);
    pub const MAX: Curvature = Curvature(defaults::MAX_CURVATURE);

    pub fn try_new(val: u8) -> Result<Curvature, NumericError> {
        if val > defaults::MAX_CURVATURE {
            Err(NumericError::OutOfRange)
        } else {
            Ok(Curvature(val))
        }
    }

    /// Clamp an untrusted slider reading into range.
    pub fn saturating(val: i64) -> Curvature {
        Curvature(val.clamp(defaults::MIN_CURVATURE as i64, defaults::MAX_CURVATURE as i64) as u8)
    }

    /// Interpret a curvature delivered as a float (e.g. a host message).
    ///
    /// Fractions are rounded to the nearest step, out-of-range values are
    /// clamped, non-finite values are rejected.
    pub fn from_f64(val: f64) -> Result<Curvature, NumericError> {
        let val = check_finite(val)?;
        Ok(Curvature::saturating(val.round() as i64))
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Map onto the exponent range: `p = 0.5 + 9.5 · (curvature / 100)`.
    pub fn exponent(self) -> Exponent {
        Exponent(crate::superellipse::curvature_to_exponent(self.0))
    }
}

impl Default for Curvature {
    fn default() -> Self {
        Curvature(defaults::CURVATURE)
    }
}

impl fmt::Display for Curvature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything needed to generate one static shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeParameters {
    /// Semi-major axis (horizontal, before rotation)
    pub a: f64,
    /// Semi-minor axis (vertical, before rotation)
    pub b: f64,
    pub exponent: Exponent,
    /// Rotation in degrees; periodic mod 360
    pub rotation: f64,
}

impl ShapeParameters {
    pub fn try_new(a: f64, b: f64, p: f64, rotation: f64) -> Result<Self, ShapeError> {
        for (axis, value) in [("a", a), ("b", b)] {
            let checked = check_finite(value).map_err(|source| ShapeError::InvalidAxis { axis, source })?;
            if checked <= 0.0 {
                return Err(ShapeError::InvalidAxis {
                    axis,
                    source: NumericError::NotPositive,
                });
            }
        }
        let exponent = Exponent::try_new(p).map_err(|source| ShapeError::InvalidExponent { value: p, source })?;
        let rotation = check_finite(rotation).map_err(|source| ShapeError::InvalidRotation { source })?;
        Ok(Self { a, b, exponent, rotation })
    }

    /// Default semi-axes with the exponent taken from a curvature value.
    pub fn from_curvature(curvature: Curvature, rotation: f64) -> Self {
        Self {
            a: defaults::SEMI_MAJOR_AXIS,
            b: defaults::SEMI_MINOR_AXIS,
            exponent: curvature.exponent(),
            rotation,
        }
    }

    pub fn with_rotation(self, rotation: f64) -> Self {
        Self { rotation, ..self }
    }
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self::from_curvature(Curvature::default(), 0.0)
    }
}

/// An sRGB colour with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Convert 0-1 float channels with `round(channel · 255)`.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        fn channel(c: f64) -> u8 {
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Rgb::new(channel(r), channel(g), channel(b))
    }

    /// Render as `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(f64, f64, f64)> for Rgb {
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        Rgb::from_unit(r, g, b)
    }
}

/// Renders as `rgb(R, G, B)`, the form the SVG markup uses.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Error returned when a colour string can't be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour: {0}")]
pub struct ColorParseError(pub String);

/// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa` (alpha is dropped).
impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        match hex.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17).map_err(|_| err());
                Ok(Rgb::new(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 | 8 => Ok(Rgb::new(pair(0)?, pair(2)?, pair(4)?)),
            _ => Err(err()),
        }
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl BBox {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        BBox {
            min: DVec2::splat(f64::MAX),
            max: DVec2::splat(f64::MIN),
        }
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: Point) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Point {
        (self.min + self.max) / 2.0
    }
}

impl Default for BBox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponent_rejects_out_of_range() {
        assert_eq!(Exponent::try_new(0.49), Err(NumericError::OutOfRange));
        assert_eq!(Exponent::try_new(10.01), Err(NumericError::OutOfRange));
        assert_eq!(Exponent::try_new(f64::NAN), Err(NumericError::NaN));
        assert_eq!(Exponent::try_new(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(Exponent::try_new(0.5).map(Exponent::raw), Ok(0.5));
        assert_eq!(Exponent::try_new(10.0).map(Exponent::raw), Ok(10.0));
    }

    #[test]
    fn curvature_clamps_and_rounds() {
        assert_eq!(Curvature::saturating(-5), Curvature::MIN);
        assert_eq!(Curvature::saturating(250), Curvature::MAX);
        assert_eq!(Curvature::from_f64(49.6).map(Curvature::value), Ok(50));
        assert_eq!(Curvature::from_f64(f64::NAN), Err(NumericError::NaN));
        assert_eq!(Curvature::try_new(101), Err(NumericError::OutOfRange));
        assert_eq!(Curvature::default().value(), 75);
    }

    #[test]
    fn curvature_maps_to_exponent_bounds() {
        assert_eq!(Curvature::MIN.exponent(), Exponent::MIN);
        assert_eq!(Curvature::MAX.exponent(), Exponent::MAX);
    }

    #[test]
    fn shape_parameters_validate_inputs() {
        assert!(ShapeParameters::try_new(100.0, 100.0, 2.0, 45.0).is_ok());
        assert!(matches!(
            ShapeParameters::try_new(0.0, 100.0, 2.0, 0.0),
            Err(ShapeError::InvalidAxis { axis: "a", .. })
        ));
        assert!(matches!(
            ShapeParameters::try_new(100.0, -1.0, 2.0, 0.0),
            Err(ShapeError::InvalidAxis { axis: "b", .. })
        ));
        assert!(matches!(
            ShapeParameters::try_new(100.0, 100.0, 0.1, 0.0),
            Err(ShapeError::InvalidExponent { .. })
        ));
        assert!(matches!(
            ShapeParameters::try_new(100.0, 100.0, 2.0, f64::NAN),
            Err(ShapeError::InvalidRotation { .. })
        ));
    }

    #[test]
    fn rgb_from_unit_channels() {
        let fill = Rgb::from(defaults::FILL_COLOR);
        assert_eq!(fill, Rgb::new(239, 180, 53));
        assert_eq!(fill.to_string(), "rgb(239, 180, 53)");
        assert_eq!(Rgb::from(defaults::STROKE_COLOR).to_string(), "rgb(0, 0, 0)");
    }

    #[test]
    fn rgb_parses_hex() {
        assert_eq!(defaults::FILL_HEX.parse::<Rgb>(), Ok(Rgb::new(0xEF, 0xB4, 0x35)));
        assert_eq!("#fff".parse::<Rgb>(), Ok(Rgb::new(255, 255, 255)));
        assert_eq!("#00000080".parse::<Rgb>(), Ok(Rgb::BLACK));
        assert!("EFB435".parse::<Rgb>().is_err());
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#gg0000".parse::<Rgb>().is_err());
        assert_eq!(Rgb::new(0xEF, 0xB4, 0x35).to_hex(), "#efb435");
    }

    #[test]
    fn bbox_expands() {
        let mut bbox = BBox::new();
        assert!(bbox.is_empty());
        bbox.expand_point(DVec2::new(1.0, 5.0));
        bbox.expand_point(DVec2::new(-3.0, 2.0));
        assert!(!bbox.is_empty());
        assert_eq!(bbox.width(), 4.0);
        assert_eq!(bbox.height(), 3.0);
        assert_eq!(bbox.center(), DVec2::new(-1.0, 3.5));
    }
}
