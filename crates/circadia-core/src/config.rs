//! Chart configuration.

use serde::{Deserialize, Serialize};

use crate::domain::ValueDomain;

/// Default chart width in glyph columns (144 buckets, ten minutes each).
pub const DEFAULT_WIDTH: usize = 72;

/// Default chart height in glyph rows (40 dots of vertical resolution).
pub const DEFAULT_HEIGHT: usize = 10;

/// Rendering parameters for a [`DayChart`](crate::DayChart).
///
/// Loadable from serialized settings; every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Chart width in glyph columns. The day is split into `2 * width`
    /// buckets, two per column.
    pub width: usize,
    /// Chart height in glyph rows.
    pub height: usize,
    /// Unit of the charted quantity ("bpm", "MET", ...). Documentation
    /// only; the rendered chart never embeds it.
    pub unit: String,
    /// Externally-derived value bounds. `None` scales to the bucketed data.
    pub domain: Option<ValueDomain>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            unit: String::new(),
            domain: None,
        }
    }
}

impl ChartConfig {
    /// Number of time buckets the day is split into.
    #[must_use]
    pub const fn bucket_count(&self) -> usize {
        self.width * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChartConfig::default();
        assert_eq!(config.width, 72);
        assert_eq!(config.height, 10);
        assert!(config.unit.is_empty());
        assert!(config.domain.is_none());
    }

    #[test]
    fn test_bucket_count_is_twice_width() {
        assert_eq!(ChartConfig::default().bucket_count(), 144);
        let narrow = ChartConfig {
            width: 36,
            ..ChartConfig::default()
        };
        assert_eq!(narrow.bucket_count(), 72);
    }

    #[test]
    fn test_deserialize_partial_settings() {
        let config: ChartConfig = serde_json::from_str(r#"{"height": 6}"#).unwrap();
        assert_eq!(config.height, 6);
        assert_eq!(config.width, DEFAULT_WIDTH);
    }

    #[test]
    fn test_deserialize_with_domain() {
        let config: ChartConfig =
            serde_json::from_str(r#"{"unit": "bpm", "domain": {"min": 48.0, "max": 112.0}}"#)
                .unwrap();
        assert_eq!(config.unit, "bpm");
        assert_eq!(config.domain, Some(ValueDomain::new(48.0, 112.0)));
    }

    #[test]
    fn test_serde_round_trip() {
        let config = ChartConfig {
            width: 36,
            height: 8,
            unit: "MET".to_string(),
            domain: Some(ValueDomain::new(0.0, 12.0)),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ChartConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
