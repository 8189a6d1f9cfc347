use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Linear domain-to-range mapping with an explicit pixel range.
///
/// Unlike a scale that rejects zero-span domains, a degenerate domain
/// (`domain_start == domain_end`) is accepted here: a single-valued chart is
/// a legitimate caller, and [`LinearScale::map`] then returns the midpoint of
/// the range instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite()
            || !domain_end.is_finite()
            || !range_start.is_finite()
            || !range_end.is_finite()
        {
            return Err(ChartError::InvalidData(
                "scale domain and range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a finite domain value onto the range.
    ///
    /// Degenerate domains map every value to the range midpoint, which is
    /// always finite and inside the range.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return (self.range_start + self.range_end) / 2.0;
        }

        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }
}

/// Maps sample index `i` of `count` onto `[range_start, range_end]`.
///
/// Precondition: `count >= 2` (the sample-set render minimum); the first
/// index lands on `range_start` and the last on `range_end`.
#[must_use]
pub fn index_to_position(index: usize, count: usize, range_start: f64, range_end: f64) -> f64 {
    let ratio = index as f64 / (count - 1) as f64;
    range_start + ratio * (range_end - range_start)
}
