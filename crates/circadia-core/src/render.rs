//! Dot-matrix row rendering.
//!
//! Buckets are consumed two at a time, left and right, so one glyph column
//! shows two bars at sub-character resolution. Each row owns a four-dot
//! vertical window; a bar either clears the window (level 0), floods it
//! (level 4), or partially fills it from the window's bottom edge.

use crate::domain::ValueDomain;
use crate::symbols::{glyph, LEFT_FILL, RIGHT_FILL};

/// Vertical dots contributed by one glyph row.
pub(crate) const DOTS_PER_ROW: usize = 4;

/// Total dots a bar fills, measured from the baseline.
///
/// Zero for the zero sentinel and for a degenerate domain; negative when the
/// value sits below a caller-supplied floor (the row loop then renders it
/// empty). Truncation toward zero matches the integer scaling used for the
/// row windows.
fn dots_filled(value: f64, domain: &ValueDomain, total_dots: usize) -> i64 {
    let range = domain.span();
    if range > 0.0 && value > 0.0 {
        (((value - domain.min) / range) * total_dots as f64) as i64
    } else {
        0
    }
}

/// Fill level (0..=4) of one sub-column within one row window.
fn fill_level(dots: i64, row_bottom: i64) -> usize {
    if dots <= row_bottom {
        0
    } else if dots >= row_bottom + DOTS_PER_ROW as i64 {
        4
    } else {
        (dots - row_bottom) as usize
    }
}

/// Render the bar grid: `height` strings of `ceil(buckets.len() / 2)`
/// glyphs each, top row first.
pub(crate) fn render_rows(buckets: &[f64], domain: &ValueDomain, height: usize) -> Vec<String> {
    let total_dots = height * DOTS_PER_ROW;
    let columns = buckets.len().div_ceil(2);

    let mut rows = Vec::with_capacity(height);
    for row in 0..height {
        let row_bottom = (total_dots - (row + 1) * DOTS_PER_ROW) as i64;
        let mut line = String::with_capacity(columns * 3);
        for pair in buckets.chunks(2) {
            let left = dots_filled(pair[0], domain, total_dots);
            let right = pair
                .get(1)
                .map_or(0, |v| dots_filled(*v, domain, total_dots));
            let mask =
                LEFT_FILL[fill_level(left, row_bottom)] | RIGHT_FILL[fill_level(right, row_bottom)];
            line.push(glyph(mask));
        }
        rows.push(line);
    }
    rows
}
