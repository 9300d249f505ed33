//! Rendering surfaces: where generated path data ends up.

/// A visible path element that accepts new path data and style attributes.
///
/// Implementations apply each value independently; the controller calls
/// `set_path_data` once per animation frame.
pub trait RenderSurface {
    fn set_path_data(&mut self, d: &str);
    fn set_fill(&mut self, fill: &str);
    fn set_stroke(&mut self, stroke: &str);
    fn set_stroke_width(&mut self, width: &str);
}

impl<S: RenderSurface + ?Sized> RenderSurface for &mut S {
    fn set_path_data(&mut self, d: &str) {
        (**self).set_path_data(d)
    }

    fn set_fill(&mut self, fill: &str) {
        (**self).set_fill(fill)
    }

    fn set_stroke(&mut self, stroke: &str) {
        (**self).set_stroke(stroke)
    }

    fn set_stroke_width(&mut self, width: &str) {
        (**self).set_stroke_width(width)
    }
}

/// In-memory surface that keeps the latest attributes and every published path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSurface {
    pub path_data: Option<String>,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<String>,
    publications: Vec<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every path published so far, oldest first.
    pub fn publications(&self) -> &[String] {
        &self.publications
    }

    pub fn clear_publications(&mut self) {
        self.publications.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn set_path_data(&mut self, d: &str) {
        self.path_data = Some(d.to_string());
        self.publications.push(d.to_string());
    }

    fn set_fill(&mut self, fill: &str) {
        self.fill = Some(fill.to_string());
    }

    fn set_stroke(&mut self, stroke: &str) {
        self.stroke = Some(stroke.to_string());
    }

    fn set_stroke_width(&mut self, width: &str) {
        self.stroke_width = Some(width.to_string());
    }
}
