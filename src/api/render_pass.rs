use crate::api::ChartConfig;
use crate::core::{PlotRect, SampleSet, ValueRange};
use crate::error::ChartResult;
use crate::render::{Compositor, PassKind, RenderLayer};

/// Shared per-cycle input, computed once by the orchestrator and handed
/// unchanged to every pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub plot: PlotRect,
    pub config: &'a ChartConfig,
    pub samples: &'a SampleSet,
    pub value_range: ValueRange,
}

/// Uniform contract implemented by each visual layer.
///
/// `render` clears the pass's previous output unconditionally before doing
/// anything else, so a precondition failure leaves the layer empty rather
/// than partially drawn. Each variant enforces its own preconditions:
/// line+fill and dots require the render minimum of samples and positive
/// bounds, while grid, axes and labels tolerate fewer.
pub trait RenderPass {
    fn kind(&self) -> PassKind;

    fn render(
        &mut self,
        ctx: &RenderContext<'_>,
        compositor: &mut dyn Compositor,
    ) -> ChartResult<()>;

    /// Removes all of this pass's visual content; callable independently of
    /// `render`.
    fn clear(&mut self);

    fn layer(&self) -> &RenderLayer;
}
