use crate::api::{RenderContext, RenderPass};
use crate::core::geometry::{project_fill_polygon, project_line_points};
use crate::error::ChartResult;
use crate::render::{
    Compositor, DrawInAnimation, FillStyle, PassKind, PolygonPrimitive, PolylinePrimitive,
    RenderLayer,
};

/// The data line plus its optional gradient fill region.
///
/// Requires the render minimum of samples and positive bounds. Every
/// successful redraw issues a fresh draw-in request to the compositor;
/// rapid re-layouts restart the animation independently each time.
#[derive(Debug)]
pub struct LineFillPass {
    layer: RenderLayer,
}

impl LineFillPass {
    #[must_use]
    pub fn new() -> Self {
        Self {
            layer: RenderLayer::new(PassKind::LineFill),
        }
    }
}

impl Default for LineFillPass {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPass for LineFillPass {
    fn kind(&self) -> PassKind {
        PassKind::LineFill
    }

    fn render(
        &mut self,
        ctx: &RenderContext<'_>,
        compositor: &mut dyn Compositor,
    ) -> ChartResult<()> {
        self.layer.clear();

        if ctx.config.show_fill {
            let polygon = project_fill_polygon(ctx.samples, ctx.plot, ctx.value_range)?;
            self.layer.push_polygon(PolygonPrimitive::new(
                polygon,
                FillStyle::VerticalGradient {
                    top: ctx.config.fill_top_color,
                    bottom: ctx.config.fill_bottom_color,
                },
            ));
        }

        let points = project_line_points(ctx.samples, ctx.plot, ctx.value_range)?;
        self.layer.push_polyline(PolylinePrimitive::new(
            points,
            ctx.config.line_width(),
            ctx.config.line_color,
        ));

        compositor.request_draw_in(
            PassKind::LineFill,
            DrawInAnimation::ease_in_out(ctx.config.animation_duration_secs()),
        );
        Ok(())
    }

    fn clear(&mut self) {
        self.layer.clear();
    }

    fn layer(&self) -> &RenderLayer {
        &self.layer
    }
}
