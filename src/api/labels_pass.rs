use crate::api::{RenderContext, RenderPass};
use crate::core::labels::{MIN_LABEL_SPACING_PX, select_label_indices};
use crate::core::scale::index_to_position;
use crate::error::ChartResult;
use crate::render::{Compositor, PassKind, RenderLayer, TextHAlign, TextPrimitive};

/// Top edge of the label box sits this far below the plot bottom, clearing
/// the axis tick marks.
const LABEL_OFFSET_Y_PX: f64 = 8.0;

/// X-axis labels for the subset of samples chosen by the label placer.
#[derive(Debug)]
pub struct LabelsPass {
    layer: RenderLayer,
}

impl LabelsPass {
    #[must_use]
    pub fn new() -> Self {
        Self {
            layer: RenderLayer::new(PassKind::Labels),
        }
    }
}

impl Default for LabelsPass {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPass for LabelsPass {
    fn kind(&self) -> PassKind {
        PassKind::Labels
    }

    fn render(
        &mut self,
        ctx: &RenderContext<'_>,
        _compositor: &mut dyn Compositor,
    ) -> ChartResult<()> {
        self.layer.clear();
        if !ctx.samples.meets_render_minimum() {
            return Ok(());
        }

        let count = ctx.samples.len();
        let indices = select_label_indices(
            count,
            ctx.plot.width,
            ctx.config.max_label_count(),
            MIN_LABEL_SPACING_PX,
        );
        let label_y = ctx.plot.bottom() + LABEL_OFFSET_Y_PX;
        for index in indices {
            let Some(sample) = ctx.samples.get(index) else {
                continue;
            };
            // Empty labels are legal sample data but have no drawable text.
            if sample.label().is_empty() {
                continue;
            }
            let x = index_to_position(index, count, ctx.plot.left(), ctx.plot.right());
            self.layer.push_text(TextPrimitive::new(
                sample.label(),
                x,
                label_y,
                ctx.config.label_font_size(),
                ctx.config.label_color,
                TextHAlign::Center,
            ));
        }
        Ok(())
    }

    fn clear(&mut self) {
        self.layer.clear();
    }

    fn layer(&self) -> &RenderLayer {
        &self.layer
    }
}
