//! Default sizes, colours and tuning constants.
//!
//! The geometry constants are empirical calibration values: the 289px artboard,
//! the 0.552 handle factor and the π/16 tangent probe are what the shapes were
//! tuned against visually. Keep them as they are.

use std::f64::consts::PI;

/// Translation applied after rotation, places the shape in a 289×289 viewBox.
pub const CENTER: f64 = 144.5;
/// Default semi-major axis.
pub const SEMI_MAJOR_AXIS: f64 = 100.0;
/// Default semi-minor axis (same as the major axis for a square base).
pub const SEMI_MINOR_AXIS: f64 = 100.0;
/// Ratio between Bézier handle length and the tangent-probe chord.
pub const CONTROL_FACTOR: f64 = 0.552;
/// Angular half-width of the tangent probe around each cardinal point.
pub const TANGENT_OFFSET: f64 = PI / 16.0;

pub const MIN_EXPONENT: f64 = 0.5;
pub const MAX_EXPONENT: f64 = 10.0;

pub const MIN_CURVATURE: u8 = 0;
pub const MAX_CURVATURE: u8 = 100;
/// Slider position used when no curvature has been chosen yet.
pub const CURVATURE: u8 = 75;

/// Rotations offered by the reference UI, in degrees.
pub const ROTATION_CHOICES: [f64; 8] = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];

/// Rotation transition length in milliseconds.
pub const TRANSITION_DURATION_MS: f64 = 300.0;
/// Frame interval of a 60Hz display, in milliseconds.
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

pub const WIDTH: u32 = 289;
pub const HEIGHT: u32 = 289;
pub const STROKE_WEIGHT: u32 = 4;

/// #EFB435 as 0-1 channels.
pub const FILL_COLOR: (f64, f64, f64) = (0.937, 0.706, 0.208);
pub const STROKE_COLOR: (f64, f64, f64) = (0.0, 0.0, 0.0);

pub const FILL_HEX: &str = "#EFB435";
pub const STROKE_HEX: &str = "#000000";

/// Export viewBox, padded by the stroke weight so the outline is not clipped.
pub const EXPORT_VIEW_BOX: &str = "-4 -4 297 297";
pub const EXPORT_FILENAME: &str = "squircle.svg";

/// Name given to a frame the host wraps around an imported shape.
pub const NODE_NAME: &str = "Squircle";
