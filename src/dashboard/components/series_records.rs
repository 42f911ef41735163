//! Record tables for the per-symbol inspection panels.
//!
//! These mirror the original dashboard's data-inspection sections: a small
//! table of the first few price records and the first few financial
//! records for the selected symbol.

use crate::api::models::{FinancialPoint, PricePoint};

use super::text_fit::fit_to_column;

/// Rows shown in each record table.
pub(crate) const RECORD_LIMIT: usize = 5;

/// Renders the first few price records as a fixed-width table.
pub(crate) fn render_price_records(points: &[PricePoint]) -> String {
    if points.is_empty() {
        return "  No price data available.\n".to_owned();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {} {} {} {}\n",
        fit_to_column("Date", 10),
        fit_to_column("Ticker", 6),
        fit_to_column("Metric", 8),
        fit_to_column("Value", 12),
    ));
    for point in points.iter().take(RECORD_LIMIT) {
        output.push_str(&format!(
            "  {} {} {} {}\n",
            fit_to_column(&point.date.to_string(), 10),
            fit_to_column(&point.ticker, 6),
            fit_to_column(&point.metric, 8),
            fit_to_column(&format!("${:.2}", point.value), 12),
        ));
    }
    output
}

/// Renders the first few financial records as a fixed-width table.
///
/// Unavailable values (served as null by the backend) render as `-`.
pub(crate) fn render_financial_records(points: &[FinancialPoint]) -> String {
    if points.is_empty() {
        return "  No financial data available.\n".to_owned();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {} {} {} {}\n",
        fit_to_column("Date", 10),
        fit_to_column("Ticker", 6),
        fit_to_column("Variable", 28),
        fit_to_column("Value", 16),
    ));
    for point in points.iter().take(RECORD_LIMIT) {
        let value = point
            .value
            .map_or_else(|| "-".to_owned(), |value| format!("{value:.2}"));
        output.push_str(&format!(
            "  {} {} {} {}\n",
            fit_to_column(&point.date.to_string(), 10),
            fit_to_column(&point.ticker, 6),
            fit_to_column(&point.variable, 28),
            fit_to_column(&value, 16),
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn price_point(value: f64) -> PricePoint {
        PricePoint {
            date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap_or_default(),
            ticker: "AAPL".to_owned(),
            metric: "Close".to_owned(),
            value,
        }
    }

    fn financial_point(value: Option<f64>) -> FinancialPoint {
        FinancialPoint {
            date: NaiveDate::from_ymd_opt(2023, 6, 30).unwrap_or_default(),
            ticker: "AAPL".to_owned(),
            variable: "Total Revenue".to_owned(),
            value,
        }
    }

    #[test]
    fn price_records_render_dollar_values() {
        let output = render_price_records(&[price_point(173.5)]);
        assert!(output.contains("$173.50"));
        assert!(output.contains("Close"));
    }

    #[test]
    fn price_records_are_limited() {
        let points: Vec<PricePoint> = (0..10).map(|i| price_point(f64::from(i))).collect();
        let output = render_price_records(&points);
        assert_eq!(output.lines().count(), RECORD_LIMIT + 1, "header plus limit");
    }

    #[test]
    fn empty_price_records_render_empty_state() {
        assert!(render_price_records(&[]).contains("No price data available"));
    }

    #[test]
    fn financial_records_render_null_values_as_dash() {
        let output = render_financial_records(&[financial_point(None)]);
        assert!(output.contains("Total Revenue"));
        assert!(output.contains(" - "));
    }

    #[test]
    fn empty_financial_records_render_empty_state() {
        assert!(render_financial_records(&[]).contains("No financial data available"));
    }
}
