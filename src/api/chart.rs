use tracing::{debug, trace, warn};

use crate::api::{
    AxesPass, ChartConfig, DotsPass, GridPass, LabelsPass, LineFillPass, RenderContext, RenderPass,
};
use crate::core::{PlotRect, Sample, SampleSet, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Compositor, PassKind, RenderFrame, RenderLayer};

/// Outcome of one `render_chart` cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered,
    /// Undersized viewport, empty plot rectangle or too few samples; a valid
    /// transient UI state, not a reported error.
    SkippedPrecondition,
    /// All samples share one value; the cycle is aborted and the last-good
    /// layers stay on screen.
    SkippedDegenerateRange,
}

/// Per-cycle result: the outcome, a cycle-level recoverable failure if one
/// aborted the cycle, and any per-pass failures, so hosts and tests can
/// observe them without parsing logs.
#[derive(Debug)]
pub struct RenderReport {
    pub outcome: RenderOutcome,
    pub cycle_error: Option<ChartError>,
    pub pass_failures: Vec<(PassKind, ChartError)>,
}

impl RenderReport {
    fn skipped(outcome: RenderOutcome) -> Self {
        Self {
            outcome,
            cycle_error: None,
            pass_failures: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.outcome == RenderOutcome::Rendered && self.pass_failures.is_empty()
    }
}

/// Orchestrator owning the pass list, current samples and configuration.
///
/// Passes run sequentially on the caller's thread in the canonical stacking
/// order; each owns its layer exclusively, so re-entrant render calls are
/// safe and no locking is needed. Generic over the compositor the same way
/// the rendering side is generic over its backend.
pub struct LineChart<C: Compositor> {
    compositor: C,
    config: ChartConfig,
    samples: SampleSet,
    passes: Vec<Box<dyn RenderPass>>,
}

impl<C: Compositor> LineChart<C> {
    #[must_use]
    pub fn new(compositor: C) -> Self {
        Self::with_config(compositor, ChartConfig::default())
    }

    #[must_use]
    pub fn with_config(compositor: C, config: ChartConfig) -> Self {
        Self {
            compositor,
            config,
            samples: SampleSet::new(),
            passes: canonical_passes(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_passes(
        compositor: C,
        config: ChartConfig,
        passes: Vec<Box<dyn RenderPass>>,
    ) -> Self {
        Self {
            compositor,
            config,
            samples: SampleSet::new(),
            passes,
        }
    }

    /// Replaces the sample series.
    pub fn set_samples(&mut self, samples: SampleSet) {
        debug!(count = samples.len(), "set samples");
        self.samples = samples;
    }

    /// Appends a single validated sample.
    pub fn append_sample(&mut self, sample: Sample) {
        self.samples.push(sample);
        trace!(count = self.samples.len(), "append sample");
    }

    #[must_use]
    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ChartConfig {
        &mut self.config
    }

    pub fn set_config(&mut self, config: ChartConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn compositor(&self) -> &C {
        &self.compositor
    }

    /// Runs one full render cycle against the given viewport.
    ///
    /// Computes the plot rectangle and value range once, then invokes every
    /// pass in canonical order with the same context. A failing pass is
    /// reported and never prevents the remaining passes from running.
    pub fn render_chart(&mut self, viewport: Viewport) -> RenderReport {
        if !viewport.is_valid() || !self.samples.meets_render_minimum() {
            trace!(
                width = viewport.width,
                height = viewport.height,
                samples = self.samples.len(),
                "skipping render cycle before data/viewport are ready"
            );
            return RenderReport::skipped(RenderOutcome::SkippedPrecondition);
        }

        let plot = PlotRect::from_viewport(viewport, self.config.plot_insets);
        if !plot.has_positive_area() {
            trace!(
                plot_width = plot.width,
                plot_height = plot.height,
                "insets consume the viewport; skipping render cycle"
            );
            return RenderReport::skipped(RenderOutcome::SkippedPrecondition);
        }

        let Some(value_range) = self.samples.value_range() else {
            return RenderReport::skipped(RenderOutcome::SkippedPrecondition);
        };
        if value_range.is_degenerate() {
            // Last-good layers stay on screen instead of a partial clear.
            warn!(
                value = value_range.min,
                "all samples share one value; skipping render cycle"
            );
            return RenderReport {
                outcome: RenderOutcome::SkippedDegenerateRange,
                cycle_error: Some(ChartError::DegenerateValueRange {
                    value: value_range.min,
                }),
                pass_failures: Vec::new(),
            };
        }

        let ctx = RenderContext {
            plot,
            config: &self.config,
            samples: &self.samples,
            value_range,
        };
        let mut pass_failures = Vec::new();
        for pass in &mut self.passes {
            if let Err(err) = pass.render(&ctx, &mut self.compositor) {
                warn!(
                    pass = pass.kind().as_str(),
                    error = %err,
                    "render pass failed; continuing with remaining passes"
                );
                pass_failures.push((pass.kind(), err));
            }
        }
        trace!(failures = pass_failures.len(), "render cycle complete");

        RenderReport {
            outcome: RenderOutcome::Rendered,
            cycle_error: None,
            pass_failures,
        }
    }

    /// Clears every pass's layer, independently of rendering.
    pub fn clear_all(&mut self) {
        for pass in &mut self.passes {
            pass.clear();
        }
    }

    /// Layers in stacking order, bottom to top.
    pub fn layers(&self) -> impl Iterator<Item = &RenderLayer> {
        self.passes.iter().map(|pass| pass.layer())
    }

    /// Flattened scene for a rendering backend.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        RenderFrame::from_layers(self.layers())
    }

    /// Serializable deterministic layer snapshot used by regression tests
    /// and debugging tooling.
    pub fn snapshot_json(&self) -> ChartResult<String> {
        let layers: Vec<&RenderLayer> = self.layers().collect();
        serde_json::to_string_pretty(&layers).map_err(|err| {
            ChartError::InvalidData(format!("layer snapshot serialization failed: {err}"))
        })
    }
}

/// Pass list in canonical stacking order; must match
/// `PassKind::canonical_order`.
fn canonical_passes() -> Vec<Box<dyn RenderPass>> {
    vec![
        Box::new(GridPass::new()),
        Box::new(AxesPass::new()),
        Box::new(LabelsPass::new()),
        Box::new(LineFillPass::new()),
        Box::new(DotsPass::new()),
    ]
}
