//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use spxdash::{Company, DashboardError, FinancialPoint, PricePoint, TickerSymbol};

/// Writes a per-symbol summary to stdout.
///
/// # Errors
///
/// Returns [`DashboardError::Io`] when writing to stdout fails.
pub fn write_symbol_summary(
    symbol: &TickerSymbol,
    company: Option<&Company>,
    prices: &[PricePoint],
    financials: &[FinancialPoint],
) -> Result<(), DashboardError> {
    let mut stdout = io::stdout().lock();
    write_symbol_summary_to(&mut stdout, symbol, company, prices, financials)
}

/// Writes a per-symbol summary to the given writer.
///
/// # Errors
///
/// Returns [`DashboardError::Io`] when writing fails.
pub fn write_symbol_summary_to<W: Write>(
    writer: &mut W,
    symbol: &TickerSymbol,
    company: Option<&Company>,
    prices: &[PricePoint],
    financials: &[FinancialPoint],
) -> Result<(), DashboardError> {
    match company {
        Some(company) => {
            writeln!(writer, "{}: {}", company.symbol, company.security)
                .map_err(|e| io_error(&e))?;
            writeln!(
                writer,
                "Sector: {} / {}",
                company.sector, company.sub_industry
            )
            .map_err(|e| io_error(&e))?;
            let founded = company
                .founded_year()
                .map_or_else(|| company.founded.clone(), |year| year.to_string());
            writeln!(
                writer,
                "Headquarters: {} (founded {founded}, CIK {})",
                company.headquarters_location, company.cik
            )
            .map_err(|e| io_error(&e))?;
        }
        None => {
            writeln!(writer, "No company record found for {}", symbol.as_str())
                .map_err(|e| io_error(&e))?;
        }
    }

    match latest_price(prices) {
        Some(latest) => writeln!(
            writer,
            "Price records: {} (latest {} ${:.2} on {})",
            prices.len(),
            latest.metric,
            latest.value,
            latest.date
        )
        .map_err(|e| io_error(&e))?,
        None => writeln!(writer, "Price records: 0").map_err(|e| io_error(&e))?,
    }

    writeln!(writer, "Financial records: {}", financials.len()).map_err(|e| io_error(&e))
}

/// Returns the price point with the latest date.
fn latest_price(prices: &[PricePoint]) -> Option<&PricePoint> {
    prices.iter().max_by_key(|point| point.date)
}

/// Converts an I/O error to a [`DashboardError::Io`].
pub(crate) fn io_error(error: &io::Error) -> DashboardError {
    DashboardError::Io {
        message: error.to_string(),
    }
}
