//! Temporal bucketing of one day of samples.
//!
//! The day is split into a fixed number of equal-duration slots. Irregular
//! timestamped readings are routed to slots by their clock time; positional
//! one-per-minute sequences are sliced into contiguous runs. Either way the
//! output always has exactly `bucket_count` entries, with `0.0` standing in
//! for an empty slot.

use crate::sample::Sample;

/// Minutes covered by one chart: a single calendar day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// How readings that share a slot collapse into one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggregation {
    /// Arithmetic mean — rate-like signals such as heart rate.
    #[default]
    Mean,
    /// Maximum — intensity signals such as MET, where a brief burst must
    /// survive bucketing instead of being averaged away.
    Max,
}

impl Aggregation {
    /// Collapse a non-empty slot into its aggregate value.
    fn apply(self, values: &[f64]) -> f64 {
        match self {
            Self::Mean => values.iter().sum::<f64>() / values.len() as f64,
            Self::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

/// Bucket irregular timestamped samples into `bucket_count` slots.
///
/// Inert samples (missing field, unparseable timestamp) are skipped without
/// aborting the render. Empty slots aggregate to `0.0`.
#[must_use]
pub fn bucketize_samples(
    samples: &[Sample],
    bucket_count: usize,
    aggregation: Aggregation,
) -> Vec<f64> {
    let slot_minutes = (MINUTES_PER_DAY as usize / bucket_count.max(1)).max(1);
    let mut slots: Vec<Vec<f64>> = vec![Vec::new(); bucket_count];

    for sample in samples {
        match sample.classify() {
            Ok(reading) => {
                let idx = reading.minute_of_day as usize / slot_minutes;
                if idx < bucket_count {
                    slots[idx].push(reading.value);
                }
            }
            Err(err) => {
                tracing::debug!(%err, "skipping inert sample");
            }
        }
    }

    slots
        .iter()
        .map(|slot| {
            if slot.is_empty() {
                0.0
            } else {
                aggregation.apply(slot)
            }
        })
        .collect()
}

/// Bucket a positionally-ordered one-per-minute sequence into
/// `bucket_count` slots.
///
/// The sequence is cut into contiguous slices of `len / bucket_count` values
/// (at least one); the result is truncated or padded with `0.0` to exactly
/// `bucket_count` entries so the grid width never varies with input length.
#[must_use]
pub fn bucketize_minutely(
    values: &[f64],
    bucket_count: usize,
    aggregation: Aggregation,
) -> Vec<f64> {
    let slice_len = (values.len() / bucket_count.max(1)).max(1);
    let mut buckets: Vec<f64> = values
        .chunks(slice_len)
        .map(|chunk| aggregation.apply(chunk))
        .collect();
    buckets.truncate(bucket_count);
    buckets.resize(bucket_count, 0.0);
    buckets
}
