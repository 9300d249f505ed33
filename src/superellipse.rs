//! Superellipse geometry: parametric points, rotation and the four-segment
//! cubic Bézier approximation.
//!
//! The outline is approximated with one cubic per quadrant. Each segment runs
//! between two adjacent cardinal points (right → top → left → bottom → right).
//! Handles are laid along the local tangent, which is estimated numerically by
//! probing the curve a small angle before and after each cardinal point. The
//! handle length is `(after - before) · control_factor`, the same heuristic
//! that gives the classic 0.5523 circle approximation.
//!
//! Exponents must stay within `[0.5, 10]`. This is a precondition of the raw
//! functions here, not something they check; use
//! [`ShapeParameters::try_new`](crate::types::ShapeParameters::try_new) to
//! validate untrusted input.

use std::f64::consts::PI;

use glam::DVec2;

use crate::defaults;
use crate::path::{BezierSegment, PathData};
use crate::types::{Curvature, Point, ShapeParameters};

/// Fixed geometry constants used while building a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeConstants {
    /// Translation applied on both axes after rotation
    pub center: f64,
    /// Scale from tangent-probe chord to handle offset
    pub control_factor: f64,
    /// Angular distance of each tangent probe from its cardinal point (radians)
    pub tangent_offset: f64,
}

impl ShapeConstants {
    pub const DEFAULT: ShapeConstants = ShapeConstants {
        center: defaults::CENTER,
        control_factor: defaults::CONTROL_FACTOR,
        tangent_offset: defaults::TANGENT_OFFSET,
    };
}

impl Default for ShapeConstants {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Point on the superellipse for the unit-circle parameter `angle`.
///
/// `x = a·sgn(cos t)·|cos t|^(2/p)`, `y = b·sgn(sin t)·|sin t|^(2/p)`.
/// `p = 2` is the ellipse, `p → 0.5` pinches towards a star, `p = 10` is nearly
/// a rectangle. The signed power keeps fractional exponents real in every
/// quadrant.
pub fn point_on_superellipse(angle: f64, a: f64, b: f64, p: f64) -> Point {
    let cos_t = angle.cos();
    let sin_t = angle.sin();
    let k = 2.0 / p;
    DVec2::new(a * signed_pow(cos_t, k), b * signed_pow(sin_t, k))
}

fn signed_pow(v: f64, k: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v.abs().powf(k) * v.signum() }
}

/// Rotate `point` about the origin by `degrees`.
///
/// A rotation of exactly zero returns the point untouched.
pub fn rotate(point: Point, degrees: f64) -> Point {
    if degrees == 0.0 {
        return point;
    }
    let rad = (degrees * PI) / 180.0;
    let (sin_r, cos_r) = (rad.sin(), rad.cos());
    DVec2::new(point.x * cos_r - point.y * sin_r, point.x * sin_r + point.y * cos_r)
}

/// Map the 0..=100 curvature slider onto the exponent: `0.5 + 9.5 · c/100`.
///
/// Values above 100 are outside the slider's range; callers holding untrusted
/// input should go through [`Curvature`].
pub fn curvature_to_exponent(curvature: u8) -> f64 {
    defaults::MIN_EXPONENT + (defaults::MAX_EXPONENT - defaults::MIN_EXPONENT) * (curvature as f64 / 100.0)
}

/// Samples the curve in the final viewBox frame: power curve, rotation, recentering.
#[derive(Clone, Copy, Debug)]
struct Outline {
    a: f64,
    b: f64,
    p: f64,
    rotation: f64,
    constants: ShapeConstants,
}

impl Outline {
    fn locate(&self, angle: f64) -> Point {
        let local = point_on_superellipse(angle, self.a, self.b, self.p);
        rotate(local, self.rotation) + DVec2::splat(self.constants.center)
    }

    fn cardinal_angle(i: usize) -> f64 {
        (i as f64 * PI) / 2.0
    }

    fn key_points(&self) -> [Point; 4] {
        std::array::from_fn(|i| self.locate(Self::cardinal_angle(i)))
    }

    fn tangent_probes(&self) -> [(Point, Point); 4] {
        let offset = self.constants.tangent_offset;
        std::array::from_fn(|i| {
            let base = Self::cardinal_angle(i);
            (self.locate(base - offset), self.locate(base + offset))
        })
    }

    fn segments(&self) -> [BezierSegment; 4] {
        let keys = self.key_points();
        let handles = self.tangent_probes().map(|(before, after)| (after - before) * self.constants.control_factor);
        std::array::from_fn(|i| {
            let j = (i + 1) % 4;
            BezierSegment::new(keys[i], keys[i] + handles[i], keys[j] - handles[j], keys[j])
        })
    }
}

/// The four recentred cardinal points (right, top, left, bottom in parameter order).
pub fn key_points(a: f64, b: f64, p: f64, rotation: f64, constants: &ShapeConstants) -> [Point; 4] {
    outline(a, b, p, rotation, constants).key_points()
}

/// `(before, after)` probe points around each cardinal point; `after - before`
/// approximates the tangent direction there.
pub fn tangent_probes(a: f64, b: f64, p: f64, rotation: f64, constants: &ShapeConstants) -> [(Point, Point); 4] {
    outline(a, b, p, rotation, constants).tangent_probes()
}

/// The four Bézier segments of the closed outline.
pub fn bezier_segments(a: f64, b: f64, p: f64, rotation: f64, constants: &ShapeConstants) -> [BezierSegment; 4] {
    outline(a, b, p, rotation, constants).segments()
}

fn outline(a: f64, b: f64, p: f64, rotation: f64, constants: &ShapeConstants) -> Outline {
    Outline {
        a,
        b,
        p,
        rotation,
        constants: *constants,
    }
}

/// Build the outline as typed path data.
pub fn build_path_data(a: f64, b: f64, p: f64, rotation: f64, constants: &ShapeConstants) -> PathData {
    let segments = bezier_segments(a, b, p, rotation, constants);
    let mut data = PathData::new().move_to(segments[0].start);
    for segment in &segments {
        data = data.cubic_to(segment.cp1, segment.cp2, segment.end);
    }
    data.z()
}

/// SVG path data for the superellipse with semi-axes `a`, `b`, exponent `p`
/// and `rotation` degrees, using the default constants.
///
/// Always `M x0 y0` followed by four `C` commands and a closing `Z`.
pub fn build_path(a: f64, b: f64, p: f64, rotation: f64) -> String {
    build_path_with(&ShapeConstants::DEFAULT, a, b, p, rotation)
}

/// [`build_path`] with explicit constants.
pub fn build_path_with(constants: &ShapeConstants, a: f64, b: f64, p: f64, rotation: f64) -> String {
    build_path_data(a, b, p, rotation, constants).to_string()
}

/// [`build_path`] for validated parameters.
pub fn path_for(params: &ShapeParameters) -> String {
    build_path(params.a, params.b, params.exponent.raw(), params.rotation)
}

/// Path for the default 100×100 semi-axes at a slider curvature.
pub fn squircle_path(curvature: Curvature, rotation: f64) -> String {
    path_for(&ShapeParameters::from_curvature(curvature, rotation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    const TOL: f64 = 1e-9;

    fn assert_point_eq(actual: Point, expected: Point, tol: f64) {
        assert!(
            actual.abs_diff_eq(expected, tol),
            "point mismatch: {actual} != {expected}"
        );
    }

    #[test]
    fn cardinal_points_hit_axes_for_any_exponent() {
        // cos(π/2) is ~6e-17 rather than 0, and |v|^(2/p) amplifies that residue
        // as p grows: at p = 10 the off-axis coordinate is ~0.07 for a 100 axis.
        for (p, tol) in [(0.5, TOL), (1.0, TOL), (2.0, TOL), (5.25, 1e-3), (10.0, 0.1)] {
            assert_point_eq(point_on_superellipse(0.0, 100.0, 60.0, p), dvec2(100.0, 0.0), tol);
            assert_point_eq(point_on_superellipse(PI / 2.0, 100.0, 60.0, p), dvec2(0.0, 60.0), tol);
            assert_point_eq(point_on_superellipse(PI, 100.0, 60.0, p), dvec2(-100.0, 0.0), tol);
            assert_point_eq(point_on_superellipse(3.0 * PI / 2.0, 100.0, 60.0, p), dvec2(0.0, -60.0), tol);
        }
    }

    #[test]
    fn diagonal_point_satisfies_lame_equation() {
        // |x/a|^p + |y/b|^p = 1 on the curve
        for p in [0.5, 2.0, 4.0, 10.0] {
            let pt = point_on_superellipse(PI / 4.0 + 0.1, 150.0, 50.0, p);
            let lhs = (pt.x / 150.0).abs().powf(p) + (pt.y / 50.0).abs().powf(p);
            assert!((lhs - 1.0).abs() < 1e-9, "p={p}: {lhs}");
        }
    }

    #[test]
    fn higher_exponent_pushes_diagonal_outwards() {
        let round = point_on_superellipse(PI / 4.0, 100.0, 100.0, 2.0);
        let boxy = point_on_superellipse(PI / 4.0, 100.0, 100.0, 10.0);
        assert!(boxy.x > round.x && boxy.y > round.y);
    }

    #[test]
    fn zero_rotation_is_exact_identity() {
        let pt = dvec2(10.123456789, -20.987654321);
        assert_eq!(rotate(pt, 0.0), pt);
        assert_eq!(rotate(pt, -0.0), pt);
    }

    #[test]
    fn quarter_turns() {
        let pt = dvec2(10.0, 0.0);
        assert_point_eq(rotate(pt, 90.0), dvec2(0.0, 10.0), 1e-5);
        assert_point_eq(rotate(pt, 180.0), dvec2(-10.0, 0.0), 1e-5);
        assert_point_eq(rotate(pt, 270.0), dvec2(0.0, -10.0), 1e-5);
        assert_point_eq(rotate(dvec2(10.0, 10.0), 45.0), dvec2(0.0, 200f64.sqrt()), 1e-9);
    }

    #[test]
    fn rotation_preserves_length() {
        let pt = dvec2(3.0, 4.0);
        for deg in [13.0, 77.5, 200.0, -45.0, 721.0] {
            assert!((rotate(pt, deg).length() - 5.0).abs() < 1e-12);
        }
    }

    #[test]
    fn exponent_mapping_endpoints_and_monotonicity() {
        assert_eq!(curvature_to_exponent(0), 0.5);
        assert_eq!(curvature_to_exponent(100), 10.0);
        assert_eq!(curvature_to_exponent(50), 5.25);
        for c in 0..100u8 {
            assert!(curvature_to_exponent(c + 1) > curvature_to_exponent(c));
        }
    }

    #[test]
    fn key_points_are_recentred() {
        let keys = key_points(100.0, 50.0, 2.0, 0.0, &ShapeConstants::DEFAULT);
        assert_point_eq(keys[0], dvec2(244.5, 144.5), TOL);
        assert_point_eq(keys[1], dvec2(144.5, 194.5), TOL);
        assert_point_eq(keys[2], dvec2(44.5, 144.5), TOL);
        assert_point_eq(keys[3], dvec2(144.5, 94.5), TOL);
    }

    #[test]
    fn tangent_probes_straddle_key_points() {
        let keys = key_points(100.0, 100.0, 2.0, 0.0, &ShapeConstants::DEFAULT);
        let probes = tangent_probes(100.0, 100.0, 2.0, 0.0, &ShapeConstants::DEFAULT);
        // At the rightmost point the tangent is vertical, pointing towards +y
        let (before, after) = probes[0];
        let tangent = after - before;
        assert!(tangent.x.abs() < TOL);
        assert!(tangent.y > 0.0);
        // The key point sits at the chord's horizontal extreme
        assert!(keys[0].x > before.x && keys[0].x > after.x);
    }

    #[test]
    fn handles_are_tangent_and_scaled_by_control_factor() {
        let constants = ShapeConstants::DEFAULT;
        let probes = tangent_probes(100.0, 100.0, 2.0, 0.0, &constants);
        let segments = bezier_segments(100.0, 100.0, 2.0, 0.0, &constants);
        for i in 0..4 {
            let j = (i + 1) % 4;
            let seg = segments[i];
            let expected_out = (probes[i].1 - probes[i].0) * constants.control_factor;
            let expected_in = (probes[j].1 - probes[j].0) * constants.control_factor;
            assert_point_eq(seg.cp1 - seg.start, expected_out, TOL);
            assert_point_eq(seg.end - seg.cp2, expected_in, TOL);
            assert_eq!(seg.end, segments[j].start);
        }
    }

    #[test]
    fn outline_stays_inside_axis_box() {
        let segments = bezier_segments(100.0, 100.0, 2.0, 0.0, &ShapeConstants::DEFAULT);
        for seg in segments {
            for step in 0..=10 {
                let pt = seg.point_at(step as f64 / 10.0);
                assert!(pt.x >= 44.5 - TOL && pt.x <= 244.5 + TOL, "{pt}");
                assert!(pt.y >= 44.5 - TOL && pt.y <= 244.5 + TOL, "{pt}");
            }
        }
    }

    #[test]
    fn path_has_expected_shape() {
        let d = build_path(100.0, 100.0, 2.0, 0.0);
        assert!(d.starts_with("M 244.5 144.5 C "), "{d}");
        assert!(d.ends_with(" Z"));
        assert_eq!(d.matches(" C ").count(), 4);
        assert_eq!(d.matches('M').count(), 1);
    }

    #[test]
    fn rotation_changes_path_but_full_turn_matches_shape() {
        let base = build_path_data(120.0, 80.0, 4.0, 0.0, &ShapeConstants::DEFAULT);
        let turned = build_path_data(120.0, 80.0, 4.0, 30.0, &ShapeConstants::DEFAULT);
        assert_ne!(base.to_string(), turned.to_string());

        let full = build_path_data(120.0, 80.0, 4.0, 360.0, &ShapeConstants::DEFAULT);
        let (a, b) = (base.bounds(), full.bounds());
        assert!(a.min.abs_diff_eq(b.min, 1e-9) && a.max.abs_diff_eq(b.max, 1e-9));
    }

    #[test]
    fn rotated_shape_is_rigid() {
        let constants = ShapeConstants::DEFAULT;
        let center = DVec2::splat(constants.center);
        let plain = bezier_segments(150.0, 50.0, 3.0, 0.0, &constants);
        let turned = bezier_segments(150.0, 50.0, 3.0, 37.0, &constants);
        for (p, t) in plain.iter().zip(turned.iter()) {
            for (u, v) in [(p.start, t.start), (p.cp1, t.cp1), (p.cp2, t.cp2), (p.end, t.end)] {
                assert_point_eq(rotate(u - center, 37.0) + center, v, 1e-9);
            }
        }
    }

    #[test]
    fn custom_center_translates_everything() {
        let shifted = ShapeConstants {
            center: 0.0,
            ..ShapeConstants::DEFAULT
        };
        let keys = key_points(100.0, 100.0, 2.0, 0.0, &shifted);
        assert_point_eq(keys[0], dvec2(100.0, 0.0), TOL);
        assert!(build_path_with(&shifted, 100.0, 100.0, 2.0, 0.0).starts_with("M 100 0 C "));
    }

    #[test]
    fn squircle_path_uses_default_axes() {
        assert_eq!(
            squircle_path(Curvature::MAX, 45.0),
            build_path(100.0, 100.0, 10.0, 45.0)
        );
    }
}
