use serde::{Deserialize, Serialize};

use super::{CirclePrimitive, LinePrimitive, PolygonPrimitive, PolylinePrimitive, TextPrimitive};

/// Closed set of visual layers, one per render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassKind {
    Grid,
    Axes,
    Labels,
    LineFill,
    Dots,
}

impl PassKind {
    /// Fixed stacking order; later entries occlude earlier ones where they
    /// overlap, so the line and dots sit above gridlines and axes.
    #[must_use]
    pub const fn canonical_order() -> [Self; 5] {
        [
            Self::Grid,
            Self::Axes,
            Self::Labels,
            Self::LineFill,
            Self::Dots,
        ]
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Axes => "axes",
            Self::Labels => "labels",
            Self::LineFill => "line-fill",
            Self::Dots => "dots",
        }
    }
}

/// Retained primitive set owned by exactly one render pass.
///
/// Created when the pass is constructed, cleared and fully repopulated on
/// every render invocation, never shared between passes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderLayer {
    kind: PassKind,
    lines: Vec<LinePrimitive>,
    polylines: Vec<PolylinePrimitive>,
    polygons: Vec<PolygonPrimitive>,
    circles: Vec<CirclePrimitive>,
    texts: Vec<TextPrimitive>,
}

impl RenderLayer {
    #[must_use]
    pub fn new(kind: PassKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            polylines: Vec::new(),
            polygons: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PassKind {
        self.kind
    }

    /// Removes all visual content. Idempotent.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.polylines.clear();
        self.polygons.clear();
        self.circles.clear();
        self.texts.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.polylines.is_empty()
            && self.polygons.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.lines.len()
            + self.polylines.len()
            + self.polygons.len()
            + self.circles.len()
            + self.texts.len()
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.lines.push(line);
    }

    pub fn push_polyline(&mut self, polyline: PolylinePrimitive) {
        self.polylines.push(polyline);
    }

    pub fn push_polygon(&mut self, polygon: PolygonPrimitive) {
        self.polygons.push(polygon);
    }

    pub fn push_circle(&mut self, circle: CirclePrimitive) {
        self.circles.push(circle);
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.texts.push(text);
    }

    #[must_use]
    pub fn lines(&self) -> &[LinePrimitive] {
        &self.lines
    }

    #[must_use]
    pub fn polylines(&self) -> &[PolylinePrimitive] {
        &self.polylines
    }

    #[must_use]
    pub fn polygons(&self) -> &[PolygonPrimitive] {
        &self.polygons
    }

    #[must_use]
    pub fn circles(&self) -> &[CirclePrimitive] {
        &self.circles
    }

    #[must_use]
    pub fn texts(&self) -> &[TextPrimitive] {
        &self.texts
    }
}

#[cfg(test)]
mod tests {
    use super::PassKind;

    #[test]
    fn canonical_order_draws_data_above_chrome() {
        let order = PassKind::canonical_order();
        assert_eq!(
            order,
            [
                PassKind::Grid,
                PassKind::Axes,
                PassKind::Labels,
                PassKind::LineFill,
                PassKind::Dots,
            ]
        );
        // Dots render last so markers sit above the line and everything else.
        assert_eq!(order[4], PassKind::Dots);
    }
}
