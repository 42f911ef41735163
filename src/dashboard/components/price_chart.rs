//! Plain-text line chart for a per-symbol price series.
//!
//! Values are bucketed into the available width, scaled to a fixed row
//! count, and plotted on a character grid with a date/extent footer. The
//! series is assumed to arrive in date order, as served by the backend.

use crate::api::models::PricePoint;

/// Narrowest chart the renderer will draw.
const MIN_CHART_WIDTH: usize = 16;
/// Widest chart the renderer will draw.
const MAX_CHART_WIDTH: usize = 100;
/// Shortest chart the renderer will draw.
const MIN_CHART_HEIGHT: usize = 3;

/// Renders the price series as a fixed-grid line chart.
///
/// Returns the original dashboard's empty-state message when there are no
/// points to plot.
pub(crate) fn render_price_chart(points: &[PricePoint], width: usize, height: usize) -> String {
    let Some(first) = points.first() else {
        return "  No price data available.\n".to_owned();
    };
    let Some(last) = points.last() else {
        return "  No price data available.\n".to_owned();
    };

    let chart_width = width.clamp(MIN_CHART_WIDTH, MAX_CHART_WIDTH);
    let chart_height = height.max(MIN_CHART_HEIGHT);

    let values: Vec<f64> = points.iter().map(|point| point.value).collect();
    let bucket_size = values.len().div_ceil(chart_width).max(1);
    let means: Vec<f64> = values.chunks(bucket_size).map(mean).collect();

    let min = means.iter().copied().fold(f64::INFINITY, f64::min);
    let max = means.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let levels: Vec<usize> = means
        .iter()
        .map(|&value| scale_to_row(value, min, max, chart_height))
        .collect();

    let mut output = String::new();
    for row in (0..chart_height).rev() {
        let mut line = "  ".to_owned();
        for &level in &levels {
            line.push(if level == row { '*' } else { ' ' });
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output.push_str(&format!(
        "  {} .. {}  min {min:.2}  max {max:.2}\n",
        first.date, last.date
    ));
    output
}

/// Mean of a non-empty bucket of values.
#[expect(
    clippy::cast_precision_loss,
    reason = "series lengths are far below f64's integer precision"
)]
fn mean(bucket: &[f64]) -> f64 {
    let sum: f64 = bucket.iter().sum();
    sum / (bucket.len().max(1) as f64)
}

/// Scales a value into a row index between 0 (bottom) and `height - 1`.
///
/// A flat series (zero span) plots on the middle row.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "chart heights are tiny and the ratio is clamped to [0, 1]"
)]
fn scale_to_row(value: f64, min: f64, max: f64, height: usize) -> usize {
    let top_row = height.saturating_sub(1);
    let span = max - min;
    if span <= f64::EPSILON {
        return top_row.div_euclid(2);
    }
    let ratio = ((value - min) / span).clamp(0.0, 1.0);
    (ratio * top_row as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn make_points(values: &[f64]) -> Vec<PricePoint> {
        values
            .iter()
            .enumerate()
            .map(|(index, &value)| PricePoint {
                date: NaiveDate::from_ymd_opt(2023, 1, 1)
                    .map(|d| d + chrono::Days::new(index as u64))
                    .unwrap_or_default(),
                ticker: "AAPL".to_owned(),
                metric: "Close".to_owned(),
                value,
            })
            .collect()
    }

    #[test]
    fn empty_series_renders_empty_state_message() {
        assert!(render_price_chart(&[], 60, 8).contains("No price data available"));
    }

    #[test]
    fn chart_has_expected_row_count_and_footer() {
        let points = make_points(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let output = render_price_chart(&points, 60, 8);

        assert_eq!(output.lines().count(), 9, "eight rows plus the footer");
        assert!(output.contains('*'));
        assert!(output.contains("min 1.00"));
        assert!(output.contains("max 5.00"));
        assert!(output.contains("2023-01-01 .. 2023-01-05"));
    }

    #[test]
    fn flat_series_plots_on_a_single_row() {
        let points = make_points(&[42.0, 42.0, 42.0]);
        let output = render_price_chart(&points, 60, 8);

        let starred_rows = output
            .lines()
            .filter(|line| line.contains('*'))
            .count();
        assert_eq!(starred_rows, 1);
    }

    #[test]
    fn rising_series_puts_extremes_on_opposite_rows() {
        let points = make_points(&[1.0, 100.0]);
        let output = render_price_chart(&points, 60, 4);
        let lines: Vec<&str> = output.lines().collect();

        assert!(
            lines.first().is_some_and(|line| line.contains('*')),
            "maximum should reach the top row: {output}"
        );
        assert!(
            lines.get(3).is_some_and(|line| line.contains('*')),
            "minimum should sit on the bottom row: {output}"
        );
    }
}
