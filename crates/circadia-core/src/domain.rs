//! Vertical scale resolution.

use serde::{Deserialize, Serialize};

use crate::sample::Sample;

/// The `{min, max}` range that bucket values are scaled against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    /// Value drawn at the baseline.
    pub min: f64,
    /// Value that fills a bar to the top row.
    pub max: f64,
}

impl ValueDomain {
    /// Create a domain from explicit bounds.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the domain.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Pick the scale for a render.
    ///
    /// Caller-supplied bounds win; otherwise the scale is derived from the
    /// bucketed values. Either way a `max` of exactly zero is replaced by
    /// `1.0` so downstream scaling never divides by zero.
    #[must_use]
    pub fn resolve(supplied: Option<Self>, buckets: &[f64]) -> Self {
        let mut resolved = supplied.unwrap_or_else(|| Self::from_buckets(buckets));
        if resolved.max == 0.0 {
            resolved.max = 1.0;
        }
        resolved
    }

    /// Derive bounds from bucketed values: `max` over all buckets, `min`
    /// over the strictly-positive ones (the zero sentinel marks an empty
    /// slot, not a reading, and must not drag the scale down).
    fn from_buckets(buckets: &[f64]) -> Self {
        let max = if buckets.is_empty() {
            1.0
        } else {
            buckets.iter().copied().fold(f64::NEG_INFINITY, f64::max)
        };
        let min = buckets
            .iter()
            .copied()
            .filter(|v| *v > 0.0)
            .fold(f64::INFINITY, f64::min);
        let min = if min.is_finite() { min } else { 0.0 };
        Self { min, max }
    }

    /// Bounds anchored to the raw, unbucketed readings, with ten units of
    /// headroom below the smallest one.
    ///
    /// Bucket means smooth out genuine extremes; deriving the scale from the
    /// raw feed keeps the Y axis honest. Returns `None` when no sample
    /// carries a value.
    #[must_use]
    pub fn from_raw_samples(samples: &[Sample]) -> Option<Self> {
        let mut values = samples.iter().filter_map(|s| s.value).peekable();
        values.peek()?;
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        Some(Self {
            min: min - 10.0,
            max,
        })
    }
}
