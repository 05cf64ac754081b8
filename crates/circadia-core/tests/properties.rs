//! Property tests for the rendering pipeline.

use circadia_core::symbols::{GLYPH_BASE, LEFT_FILL, RIGHT_FILL};
use circadia_core::{bucketize_samples, Aggregation, DayChart, Sample};
use proptest::prelude::*;

/// The glyph section of a rendered row (everything after "label │ ").
fn glyphs(line: &str) -> Vec<char> {
    line.chars().skip_while(|&c| c != '│').skip(2).collect()
}

fn fill_levels(c: char) -> (u32, u32) {
    let mask = c as u32 - GLYPH_BASE;
    (
        (mask & u32::from(LEFT_FILL[4])).count_ones(),
        (mask & u32::from(RIGHT_FILL[4])).count_ones(),
    )
}

proptest! {
    #[test]
    fn prop_output_has_height_plus_two_lines(
        values in prop::collection::vec(0.0f64..200.0, 1..600),
        height in 1usize..16,
        width in 4usize..80,
    ) {
        let text = DayChart::from_minutely(values)
            .with_width(width)
            .with_height(height)
            .render();
        prop_assert_eq!(text.lines().count(), height + 2);
    }

    #[test]
    fn prop_bar_rows_have_width_glyphs(
        values in prop::collection::vec(0.0f64..200.0, 1..600),
        width in 4usize..80,
    ) {
        let text = DayChart::from_minutely(values).with_width(width).render();
        for line in text.lines().take(10) {
            prop_assert_eq!(glyphs(line).len(), width);
        }
    }

    #[test]
    fn prop_bar_glyphs_stay_in_the_braille_block(
        values in prop::collection::vec(0.0f64..200.0, 1..600),
    ) {
        let text = DayChart::from_minutely(values).render();
        for line in text.lines().take(10) {
            for c in glyphs(line) {
                let code = c as u32;
                prop_assert!((GLYPH_BASE..=GLYPH_BASE + 0xFF).contains(&code));
            }
        }
    }

    #[test]
    fn prop_parseable_timestamps_always_bucket_in_range(
        hour in 0u32..24,
        minute in 0u32..60,
        second in 0u32..60,
        value in 1.0f64..300.0,
    ) {
        let sample = Sample::new(
            format!("2024-01-15T{hour:02}:{minute:02}:{second:02}Z"),
            value,
        );
        let reading = sample.classify().unwrap();
        prop_assert!(reading.minute_of_day < 1440);

        let buckets = bucketize_samples(&[sample], 144, Aggregation::Mean);
        prop_assert_eq!(buckets.len(), 144);
        prop_assert_eq!(buckets.iter().filter(|&&v| v != 0.0).count(), 1);
    }

    #[test]
    fn prop_unparseable_timestamps_change_nothing(
        garbage in "[a-z ]{0,20}",
        value in 0.0f64..300.0,
    ) {
        let clean = vec![Sample::new("2024-01-15T10:00:00Z", 75.0)];
        let mut noisy = clean.clone();
        noisy.push(Sample::new(garbage, value));

        let a = bucketize_samples(&clean, 144, Aggregation::Mean);
        let b = bucketize_samples(&noisy, 144, Aggregation::Mean);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_fill_never_leaves_gaps_below_a_filled_row(
        values in prop::collection::vec(0.0f64..200.0, 1..600),
        height in 2usize..12,
    ) {
        let text = DayChart::from_minutely(values)
            .with_width(24)
            .with_height(height)
            .render();
        let rows: Vec<Vec<char>> = text.lines().take(height).map(glyphs).collect();
        for col in 0..24 {
            let mut prev = (0u32, 0u32);
            for row in &rows {
                let cur = fill_levels(row[col]);
                prop_assert!(cur.0 >= prev.0);
                prop_assert!(cur.1 >= prev.1);
                prev = cur;
            }
        }
    }

    #[test]
    fn prop_rendering_is_deterministic(
        values in prop::collection::vec(0.0f64..200.0, 1..600),
    ) {
        let a = DayChart::from_minutely(values.clone()).render();
        let b = DayChart::from_minutely(values).render();
        prop_assert_eq!(a, b);
    }
}
