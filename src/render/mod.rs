mod compositor;
mod frame;
mod layer;
mod null_renderer;
mod primitives;

pub use compositor::{Compositor, DrawInAnimation, NullCompositor, TimingCurve};
pub use frame::RenderFrame;
pub use layer::{PassKind, RenderLayer};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, FillStyle, LinePrimitive, PolygonPrimitive, PolylinePrimitive,
    TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
