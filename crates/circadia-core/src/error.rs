//! Error types for circadia-core.

use thiserror::Error;

/// Why an individual sample is inert and excluded from bucketing.
///
/// Per-sample failures are always recovered locally: the sample is skipped
/// and the render continues. Nothing in this crate surfaces a `SampleError`
/// from a render call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// The record carried no timestamp.
    #[error("sample has no timestamp")]
    MissingTimestamp,

    /// The record carried no value.
    #[error("sample has no value")]
    MissingValue,

    /// The timestamp did not parse as ISO-8601.
    #[error("unparseable timestamp: {0:?}")]
    BadTimestamp(String),
}
