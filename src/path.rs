//! SVG path data: typed commands, a fluent builder and the canonical writer.
//!
//! Only the subset the generator emits is modelled: absolute `M`, absolute `C`
//! and `Z`. The writer produces exactly the grammar
//! `M x0 y0 C c1x c1y, c2x c2y, ex ey ... Z`, which [`crate::parse`] reads back.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;

use crate::errors::PathParseError;
use crate::types::{BBox, Point};

/// One cubic Bézier segment of an outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BezierSegment {
    pub start: Point,
    pub cp1: Point,
    pub cp2: Point,
    pub end: Point,
}

impl BezierSegment {
    pub fn new(start: Point, cp1: Point, cp2: Point, end: Point) -> Self {
        Self { start, cp1, cp2, end }
    }

    /// Evaluate the curve at `t ∈ [0, 1]`.
    pub fn point_at(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        self.start * (mt * mt * mt)
            + self.cp1 * (3.0 * mt * mt * t)
            + self.cp2 * (3.0 * mt * t * t)
            + self.end * (t * t * t)
    }

    /// Tight bounds: endpoints plus any interior extrema on either axis.
    pub fn bounds(&self) -> BBox {
        let mut bbox = BBox::new();
        bbox.expand_point(self.start);
        bbox.expand_point(self.end);
        for axis in 0..2 {
            let [p0, p1, p2, p3] = [self.start, self.cp1, self.cp2, self.end].map(|p| p[axis]);
            for t in derivative_roots(p0, p1, p2, p3) {
                bbox.expand_point(self.point_at(t));
            }
        }
        bbox
    }
}

/// Parameters in (0, 1) where the cubic's derivative vanishes on one axis.
///
/// B'(t)/3 = A·t² + B·t + C with A = -p0 + 3p1 - 3p2 + p3,
/// B = 2(p0 - 2p1 + p2), C = p1 - p0.
fn derivative_roots(p0: f64, p1: f64, p2: f64, p3: f64) -> Vec<f64> {
    const EPS: f64 = 1e-12;
    let a = -p0 + 3.0 * p1 - 3.0 * p2 + p3;
    let b = 2.0 * (p0 - 2.0 * p1 + p2);
    let c = p1 - p0;

    let mut roots = Vec::with_capacity(2);
    if a.abs() < EPS {
        if b.abs() >= EPS {
            roots.push(-c / b);
        }
    } else {
        let disc = b * b - 4.0 * a * c;
        if disc >= 0.0 {
            let sq = disc.sqrt();
            roots.push((-b + sq) / (2.0 * a));
            roots.push((-b - sq) / (2.0 * a));
        }
    }
    roots.retain(|t| *t > 0.0 && *t < 1.0);
    roots
}

/// A single path command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// `M x y`
    MoveTo(Point),
    /// `C x1 y1, x2 y2, x y`
    CubicTo { cp1: Point, cp2: Point, end: Point },
    /// `Z`
    Close,
}

impl PathCommand {
    pub fn letter(&self) -> char {
        match self {
            PathCommand::MoveTo(_) => 'M',
            PathCommand::CubicTo { .. } => 'C',
            PathCommand::Close => 'Z',
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {} {}", Num(p.x), Num(p.y)),
            PathCommand::CubicTo { cp1, cp2, end } => write!(
                f,
                "C {} {}, {} {}, {} {}",
                Num(cp1.x),
                Num(cp1.y),
                Num(cp2.x),
                Num(cp2.y),
                Num(end.x),
                Num(end.y)
            ),
            PathCommand::Close => write!(f, "Z"),
        }
    }
}

/// Shortest round-trip decimal, never exponent notation, `-0` written as `0`.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            write!(f, "0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// An ordered list of path commands.
///
/// # Example
///
/// ```
/// use squircley::path::PathData;
///
/// let d = PathData::new()
///     .m(10.0, 0.0)
///     .c(10.0, 5.0, 5.0, 10.0, 0.0, 10.0)
///     .z();
/// assert_eq!(d.to_string(), "M 10 0 C 10 5, 5 10, 0 10 Z");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    /// `M x y`
    pub fn m(self, x: f64, y: f64) -> Self {
        self.move_to(DVec2::new(x, y))
    }

    /// `C x1 y1, x2 y2, x y`
    pub fn c(self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        self.cubic_to(DVec2::new(x1, y1), DVec2::new(x2, y2), DVec2::new(x, y))
    }

    /// `Z`
    pub fn z(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn move_to(mut self, p: Point) -> Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn cubic_to(mut self, cp1: Point, cp2: Point, end: Point) -> Self {
        self.commands.push(PathCommand::CubicTo { cp1, cp2, end });
        self
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn count(&self, letter: char) -> usize {
        self.commands.iter().filter(|c| c.letter() == letter).count()
    }

    /// Resolve the cubic commands into segments with explicit start points.
    pub fn segments(&self) -> Vec<BezierSegment> {
        let mut segments = Vec::new();
        let mut current: Option<Point> = None;
        let mut subpath_start: Option<Point> = None;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    current = Some(p);
                    subpath_start = Some(p);
                }
                PathCommand::CubicTo { cp1, cp2, end } => {
                    if let Some(start) = current {
                        segments.push(BezierSegment::new(start, cp1, cp2, end));
                    }
                    current = Some(end);
                }
                PathCommand::Close => current = subpath_start,
            }
        }
        segments
    }

    /// True for a single closed contour of four cubic segments: `M C C C C Z`,
    /// ending where it started.
    pub fn is_four_segment_contour(&self) -> bool {
        let letters: String = self.commands.iter().map(PathCommand::letter).collect();
        if letters != "MCCCCZ" {
            return false;
        }
        match (self.commands.first(), self.segments().last()) {
            (Some(PathCommand::MoveTo(start)), Some(last)) => last.end.abs_diff_eq(*start, 1e-9),
            _ => false,
        }
    }

    /// Exact bounding box of the outline.
    pub fn bounds(&self) -> BBox {
        let mut bbox = BBox::new();
        for command in &self.commands {
            if let PathCommand::MoveTo(p) = command {
                bbox.expand_point(*p);
            }
        }
        for segment in self.segments() {
            let seg = segment.bounds();
            bbox.expand_point(seg.min);
            bbox.expand_point(seg.max);
        }
        bbox
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}

impl FromStr for PathData {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_path(s)
    }
}
