use crate::api::{RenderContext, RenderPass};
use crate::core::geometry::{project_axis_frame, project_axis_ticks};
use crate::core::labels::{MIN_LABEL_SPACING_PX, select_label_indices};
use crate::core::scale::index_to_position;
use crate::error::ChartResult;
use crate::render::{Compositor, LinePrimitive, PassKind, RenderLayer};

const AXIS_STROKE_WIDTH_PX: f64 = 1.0;
const TICK_MARK_LENGTH_PX: f64 = 6.0;

/// Axis frame (left and bottom edges) plus tick marks at label positions.
///
/// Tolerates fewer than the render minimum of samples: the frame is always
/// drawn, tick marks only when index positions are defined.
#[derive(Debug)]
pub struct AxesPass {
    layer: RenderLayer,
}

impl AxesPass {
    #[must_use]
    pub fn new() -> Self {
        Self {
            layer: RenderLayer::new(PassKind::Axes),
        }
    }
}

impl Default for AxesPass {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPass for AxesPass {
    fn kind(&self) -> PassKind {
        PassKind::Axes
    }

    fn render(
        &mut self,
        ctx: &RenderContext<'_>,
        _compositor: &mut dyn Compositor,
    ) -> ChartResult<()> {
        self.layer.clear();

        let frame = project_axis_frame(ctx.plot)?;
        for segment in frame {
            self.layer.push_line(LinePrimitive::new(
                segment.x1,
                segment.y1,
                segment.x2,
                segment.y2,
                AXIS_STROKE_WIDTH_PX,
                ctx.config.axis_color,
            ));
        }

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
        let tick_xs: Vec<f64> = indices
            .iter()
            .map(|&index| index_to_position(index, count, ctx.plot.left(), ctx.plot.right()))
            .collect();
        let ticks = project_axis_ticks(ctx.plot, &tick_xs, TICK_MARK_LENGTH_PX)?;
        for tick in ticks {
            self.layer.push_line(LinePrimitive::new(
                tick.x1,
                tick.y1,
                tick.x2,
                tick.y2,
                AXIS_STROKE_WIDTH_PX,
                ctx.config.axis_color,
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
