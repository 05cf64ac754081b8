//! Y-axis label placement and the bottom hour strip.

use crate::domain::ValueDomain;

/// Hour slots on the bottom tick row.
pub(crate) const HOURS_PER_DAY: usize = 24;

/// Rows that carry a numeric label, top row first.
///
/// Tall charts get the fixed set `{0, 2, 5, 7, 9}`; shorter ones label the
/// top, middle, and bottom rows.
pub(crate) fn label_rows(height: usize) -> Vec<usize> {
    if height >= 10 {
        vec![0, 2, 5, 7, 9]
    } else {
        vec![0, height / 2, height.saturating_sub(1)]
    }
}

/// Value displayed at `row`.
///
/// The top row shows `max` exactly and the bottom row `min` exactly;
/// in-between rows interpolate linearly.
pub(crate) fn value_at_row(row: usize, height: usize, domain: &ValueDomain) -> f64 {
    if row == 0 {
        domain.max
    } else if row + 1 == height {
        domain.min
    } else {
        domain.max - (row as f64 / (height - 1) as f64) * domain.span()
    }
}

/// Formatted labels slotted by row, right-justified to a common width.
///
/// Returns the per-row labels (`None` for unlabeled rows) and the shared
/// label column width.
pub(crate) fn row_labels(height: usize, domain: &ValueDomain) -> (Vec<Option<String>>, usize) {
    let mut labels: Vec<Option<String>> = vec![None; height];
    for row in label_rows(height) {
        if row < height {
            labels[row] = Some(format!("{:.0}", value_at_row(row, height, domain)));
        }
    }

    let width = labels
        .iter()
        .flatten()
        .map(String::len)
        .max()
        .unwrap_or(0);
    for label in labels.iter_mut().flatten() {
        *label = format!("{label:>width$}");
    }
    (labels, width)
}

/// Bottom hour strip: `" H "` for single-digit hours, `"HH "` for
/// double-digit ones, trimmed to the chart width and padded to start under
/// the first glyph column.
pub(crate) fn hour_row(chart_width: usize, label_width: usize) -> String {
    let mut ticks = String::with_capacity(HOURS_PER_DAY * 3);
    for hour in 0..HOURS_PER_DAY {
        if hour < 10 {
            ticks.push_str(&format!(" {hour} "));
        } else {
            ticks.push_str(&format!("{hour} "));
        }
    }
    ticks.truncate(chart_width);

    // Label column + separator + one space sit left of the glyphs.
    format!("{}{}", " ".repeat(label_width + 3), ticks)
}
