//! Day chart assembly.
//!
//! [`DayChart`] owns the full pipeline: bucket the input, resolve the value
//! domain, render the glyph grid, and compose it with the label column,
//! baseline, and hour strip into one text block.

use crate::aggregate::{bucketize_minutely, bucketize_samples, Aggregation};
use crate::axis;
use crate::config::ChartConfig;
use crate::domain::ValueDomain;
use crate::render;
use crate::sample::Sample;

/// Fixed sentinel returned when there is nothing to draw.
pub const NO_DATA: &str = "no data";

/// One day of input, in whichever shape the upstream feed provides.
#[derive(Debug, Clone)]
enum SeriesData {
    /// Irregular timestamped readings (heart rate and friends).
    Timestamped(Vec<Sample>),
    /// One reading per minute, positionally ordered (MET activity).
    Minutely(Vec<f64>),
}

/// Braille bar chart of one day of samples.
///
/// The builder follows the usual pattern: a `from_*` constructor picks the
/// input shape and a sensible aggregation, `with_*` setters adjust the
/// geometry, and [`render`](Self::render) produces the final text block.
/// Rendering never fails; malformed samples are skipped and degenerate
/// scales fall back to an empty chart.
///
/// ```
/// use circadia_core::{DayChart, Sample};
///
/// let samples = vec![
///     Sample::new("2024-01-15T08:00:00Z", 61.0),
///     Sample::new("2024-01-15T12:30:00Z", 96.0),
///     Sample::new("2024-01-15T22:10:00Z", 54.0),
/// ];
/// let chart = DayChart::from_samples(samples).with_unit("bpm");
/// let text = chart.render();
/// assert_eq!(text.lines().count(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct DayChart {
    data: SeriesData,
    aggregation: Aggregation,
    config: ChartConfig,
}

impl DayChart {
    /// Chart irregular timestamped samples, averaged per bucket.
    #[must_use]
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self {
            data: SeriesData::Timestamped(samples),
            aggregation: Aggregation::Mean,
            config: ChartConfig::default(),
        }
    }

    /// Chart a one-per-minute sequence, keeping each bucket's peak.
    #[must_use]
    pub fn from_minutely(values: Vec<f64>) -> Self {
        Self {
            data: SeriesData::Minutely(values),
            aggregation: Aggregation::Max,
            config: ChartConfig::default(),
        }
    }

    /// Set the chart width in glyph columns.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.config.width = width;
        self
    }

    /// Set the chart height in glyph rows.
    #[must_use]
    pub fn with_height(mut self, height: usize) -> Self {
        self.config.height = height;
        self
    }

    /// Set the unit label (documentation only, never drawn).
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.config.unit = unit.into();
        self
    }

    /// Anchor the vertical scale to externally-derived bounds instead of
    /// the bucketed extremes.
    #[must_use]
    pub fn with_domain(mut self, domain: ValueDomain) -> Self {
        self.config.domain = Some(domain);
        self
    }

    /// Override the per-bucket aggregation strategy.
    #[must_use]
    pub fn with_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    /// Replace the whole configuration at once.
    #[must_use]
    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Render the chart as a text block of `height + 2` lines.
    ///
    /// Empty input short-circuits to [`NO_DATA`].
    #[must_use]
    pub fn render(&self) -> String {
        let empty = match &self.data {
            SeriesData::Timestamped(samples) => samples.is_empty(),
            SeriesData::Minutely(values) => values.is_empty(),
        };
        if empty {
            return NO_DATA.to_string();
        }

        tracing::trace!(
            width = self.config.width,
            height = self.config.height,
            "rendering day chart"
        );

        let buckets = match &self.data {
            SeriesData::Timestamped(samples) => {
                bucketize_samples(samples, self.config.bucket_count(), self.aggregation)
            }
            SeriesData::Minutely(values) => {
                bucketize_minutely(values, self.config.bucket_count(), self.aggregation)
            }
        };
        let domain = ValueDomain::resolve(self.config.domain, &buckets);
        compose(&buckets, &domain, &self.config)
    }
}

/// Assemble rendered rows, label column, baseline, and hour strip.
fn compose(buckets: &[f64], domain: &ValueDomain, config: &ChartConfig) -> String {
    let rows = render::render_rows(buckets, domain, config.height);
    let (labels, label_width) = axis::row_labels(config.height, domain);

    let mut lines = Vec::with_capacity(config.height + 2);
    for (row, glyphs) in rows.iter().enumerate() {
        match &labels[row] {
            Some(label) => lines.push(format!("{label} │ {glyphs}")),
            None => lines.push(format!("{} │ {glyphs}", " ".repeat(label_width))),
        }
    }
    lines.push(format!(
        "{} └{}",
        " ".repeat(label_width),
        "─".repeat(config.width)
    ));
    lines.push(axis::hour_row(config.width, label_width));
    lines.join("\n")
}
