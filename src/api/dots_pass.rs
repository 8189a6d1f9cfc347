use crate::api::{RenderContext, RenderPass};
use crate::core::geometry::project_dot_centers;
use crate::error::ChartResult;
use crate::render::{CirclePrimitive, Compositor, PassKind, RenderLayer};

/// Sample markers drawn above the line.
///
/// Shares the line pass's preconditions: the render minimum of samples and
/// positive bounds.
#[derive(Debug)]
pub struct DotsPass {
    layer: RenderLayer,
}

impl DotsPass {
    #[must_use]
    pub fn new() -> Self {
        Self {
            layer: RenderLayer::new(PassKind::Dots),
        }
    }
}

impl Default for DotsPass {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPass for DotsPass {
    fn kind(&self) -> PassKind {
        PassKind::Dots
    }

    fn render(
        &mut self,
        ctx: &RenderContext<'_>,
        _compositor: &mut dyn Compositor,
    ) -> ChartResult<()> {
        self.layer.clear();
        if !ctx.config.show_dots {
            return Ok(());
        }

        let centers = project_dot_centers(ctx.samples, ctx.plot, ctx.value_range)?;
        for center in centers {
            self.layer.push_circle(CirclePrimitive::new(
                center.x,
                center.y,
                ctx.config.dot_radius(),
                ctx.config.dot_color,
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
