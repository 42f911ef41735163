//! One-shot per-symbol summary operation.

use std::time::Instant;

use spxdash::telemetry::{StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
use spxdash::{CompanyScope, DashboardError, MarketDataGateway, RestMarketDataGateway, SpxDashConfig};

use super::output::write_symbol_summary;

/// Loads one symbol's company record, prices, and financials and prints a
/// summary to stdout.
///
/// # Errors
///
/// Returns [`DashboardError::Configuration`] if required configuration is
/// missing and propagates gateway failures for the company and price reads.
/// The financial read never fails; the gateway downgrades its failures to an
/// empty series.
pub async fn run(config: &SpxDashConfig) -> Result<(), DashboardError> {
    let base = config.api_base()?;
    let symbol = config.require_symbol()?;
    let metric = config.price_metric()?;

    let gateway = RestMarketDataGateway::new(base, config.request_timeout())?;
    let telemetry = StderrJsonlTelemetrySink;

    let start = Instant::now();
    let companies = gateway
        .companies(&CompanyScope::for_symbol(symbol.as_str()))
        .await?;
    telemetry.record(TelemetryEvent::UniverseLoaded {
        companies: companies.len(),
        latency_ms: elapsed_ms(start),
    });

    let prices_start = Instant::now();
    let prices = gateway.price_series(&symbol, &metric).await?;
    telemetry.record(TelemetryEvent::SeriesFetched {
        symbol: symbol.as_str().to_owned(),
        records: prices.len(),
        latency_ms: elapsed_ms(prices_start),
    });

    let financials = gateway.financial_series(&symbol).await?;

    let company = companies
        .iter()
        .find(|company| company.symbol == symbol.as_str());
    write_symbol_summary(&symbol, company, &prices, &financials)
}

/// Elapsed wall-clock milliseconds since `start`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Latency over u64::MAX milliseconds is unrealistic"
)]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
