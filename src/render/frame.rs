use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, LinePrimitive, PolygonPrimitive, PolylinePrimitive, RenderLayer,
    TextPrimitive,
};

/// Backend-agnostic scene flattened from the per-pass layers.
///
/// Primitives are concatenated in layer stacking order, so a backend that
/// draws each bucket in sequence preserves occlusion within a bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderFrame {
    pub polygons: Vec<PolygonPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn from_layers<'a>(layers: impl IntoIterator<Item = &'a RenderLayer>) -> Self {
        let mut frame = Self::default();
        for layer in layers {
            frame.polygons.extend(layer.polygons().iter().cloned());
            frame.lines.extend(layer.lines().iter().copied());
            frame.polylines.extend(layer.polylines().iter().cloned());
            frame.circles.extend(layer.circles().iter().copied());
            frame.texts.extend(layer.texts().iter().cloned());
        }
        frame
    }

    pub fn validate(&self) -> ChartResult<()> {
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
            && self.lines.is_empty()
            && self.polylines.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }
}
