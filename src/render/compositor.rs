use serde::{Deserialize, Serialize};

use crate::render::PassKind;

/// Timing curve applied by the host compositor to a property animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimingCurve {
    Linear,
    #[default]
    EaseInEaseOut,
}

/// Time-based reveal of a path from 0% to 100% of its length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawInAnimation {
    pub duration_secs: f64,
    pub curve: TimingCurve,
}

impl DrawInAnimation {
    #[must_use]
    pub const fn ease_in_out(duration_secs: f64) -> Self {
        Self {
            duration_secs,
            curve: TimingCurve::EaseInEaseOut,
        }
    }
}

/// Outbound seam to the host's asynchronous compositing engine.
///
/// Requests are fire-and-forget: no completion callback is consumed and
/// nothing is awaited or cancelled here. A superseding request implicitly
/// invalidates any in-flight animation on the same visual target, and the
/// compositor discards animations whose content was removed.
pub trait Compositor {
    fn request_draw_in(&mut self, target: PassKind, animation: DrawInAnimation);
}

/// Recording compositor used by tests and headless usage.
#[derive(Debug, Default)]
pub struct NullCompositor {
    pub requests: Vec<(PassKind, DrawInAnimation)>,
}

impl Compositor for NullCompositor {
    fn request_draw_in(&mut self, target: PassKind, animation: DrawInAnimation) {
        self.requests.push((target, animation));
    }
}
