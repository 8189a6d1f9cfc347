use crate::api::{RenderContext, RenderPass};
use crate::core::geometry::project_grid_lines;
use crate::error::ChartResult;
use crate::render::{Compositor, LinePrimitive, PassKind, RenderLayer};

const GRID_STROKE_WIDTH_PX: f64 = 1.0;

/// Horizontal gridlines behind everything else.
#[derive(Debug)]
pub struct GridPass {
    layer: RenderLayer,
}

impl GridPass {
    #[must_use]
    pub fn new() -> Self {
        Self {
            layer: RenderLayer::new(PassKind::Grid),
        }
    }
}

impl Default for GridPass {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPass for GridPass {
    fn kind(&self) -> PassKind {
        PassKind::Grid
    }

    fn render(
        &mut self,
        ctx: &RenderContext<'_>,
        _compositor: &mut dyn Compositor,
    ) -> ChartResult<()> {
        self.layer.clear();
        if !ctx.config.show_grid {
            return Ok(());
        }

        let segments = project_grid_lines(ctx.plot, ctx.config.grid_line_count())?;
        for segment in segments {
            self.layer.push_line(LinePrimitive::new(
                segment.x1,
                segment.y1,
                segment.x2,
                segment.y2,
                GRID_STROKE_WIDTH_PX,
                ctx.config.grid_color,
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
