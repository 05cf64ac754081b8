//! Braille bar-chart engine for one-day health time series.
//!
//! Circadia turns a day of irregular or evenly-spaced numeric samples into
//! a fixed-resolution text chart built from braille glyphs (2×4 addressable
//! dots per character cell). The pipeline is a pure transformation:
//!
//! 1. Bucket samples into equal-duration slots covering 24 hours
//!    ([`bucketize_samples`] / [`bucketize_minutely`]).
//! 2. Resolve the vertical scale ([`ValueDomain`]).
//! 3. Render the dot-matrix grid and compose it with axis labels, a
//!    baseline, and an hour strip ([`DayChart::render`]).
//!
//! Rendering never fails: malformed samples are skipped, empty input yields
//! the [`NO_DATA`] sentinel, and an all-zero day renders as an empty grid.
//!
//! # Example
//!
//! ```
//! use circadia_core::{DayChart, Sample, ValueDomain};
//!
//! let samples = vec![
//!     Sample::new("2024-01-15T07:55:00Z", 58.0),
//!     Sample::new("2024-01-15T08:03:00Z", 64.0),
//!     Sample::new("2024-01-15T17:30:00Z", 103.0),
//! ];
//! let domain = ValueDomain::from_raw_samples(&samples);
//! let mut chart = DayChart::from_samples(samples).with_unit("bpm");
//! if let Some(domain) = domain {
//!     chart = chart.with_domain(domain);
//! }
//!
//! let text = chart.render();
//! assert_eq!(text.lines().count(), 12); // 10 rows + baseline + hours
//! ```

mod aggregate;
mod axis;
mod chart;
mod config;
mod domain;
mod error;
mod render;
mod sample;
pub mod symbols;

pub use aggregate::{bucketize_minutely, bucketize_samples, Aggregation, MINUTES_PER_DAY};
pub use chart::{DayChart, NO_DATA};
pub use config::{ChartConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use domain::ValueDomain;
pub use error::SampleError;
pub use sample::{MinuteReading, Sample};
