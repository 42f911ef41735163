//! Terminal User Interface for browsing and filtering the company universe.
//!
//! This module provides an interactive dashboard for navigating S&P 500
//! constituents and inspecting per-symbol time series using the
//! bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::DashboardApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Filter criteria and cursor state management
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, we use a module-level storage pattern for initial data. Call
//! [`set_initial_snapshot`] before starting the program, and
//! `DashboardApp::init()` will automatically retrieve the data.
//!
//! # Fetch Context
//!
//! Similarly, [`set_fetch_context`] must be called to enable refresh and
//! series loading. It stores the API base, price metric, and HTTP timeout
//! used to build gateways inside async commands.

use std::sync::OnceLock;
use std::time::Duration;

use crate::api::MarketDataGateway;
use crate::api::RestMarketDataGateway;
use crate::api::error::DashboardError;
use crate::api::intake::{DashboardIntake, DashboardSnapshot};
use crate::api::locator::{ApiBase, PriceMetric, TickerSymbol};
use crate::api::models::{CompanyScope, FinancialPoint, PricePoint};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::DashboardApp;

/// Global storage for the initial dashboard snapshot.
///
/// This is set before the TUI program starts and read by
/// `DashboardApp::init()`.
static INITIAL_SNAPSHOT: OnceLock<DashboardSnapshot> = OnceLock::new();

/// Global storage for the fetch context (API base, metric, timeout).
///
/// This is set before the TUI program starts to enable refresh and series
/// loading.
static FETCH_CONTEXT: OnceLock<FetchContext> = OnceLock::new();

/// Context required to fetch data from the dashboard API.
struct FetchContext {
    base: ApiBase,
    metric: PriceMetric,
    timeout: Duration,
}

/// Sets the initial snapshot for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. The
/// snapshot will be read by `DashboardApp::init()` when the program starts.
///
/// # Returns
///
/// `true` if the snapshot was set, `false` if it was already set.
pub fn set_initial_snapshot(snapshot: DashboardSnapshot) -> bool {
    INITIAL_SNAPSHOT.set(snapshot).is_ok()
}

/// Sets the fetch context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program to enable
/// refresh and per-symbol series loading. Without this context, those
/// requests fail with a configuration error message.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_fetch_context(base: ApiBase, metric: PriceMetric, timeout: Duration) -> bool {
    FETCH_CONTEXT
        .set(FetchContext {
            base,
            metric,
            timeout,
        })
        .is_ok()
}

/// Gets a clone of the initial snapshot from storage.
///
/// Called internally by `DashboardApp::init()`. Returns the stored snapshot
/// or an empty one if not set.
///
/// Note: This function clones the data because `OnceLock` does not support
/// consuming (taking) the value.
pub(crate) fn get_initial_snapshot() -> DashboardSnapshot {
    INITIAL_SNAPSHOT.get().cloned().unwrap_or_default()
}

fn fetch_gateway() -> Result<(RestMarketDataGateway, PriceMetric), DashboardError> {
    let context = FETCH_CONTEXT
        .get()
        .ok_or_else(|| DashboardError::Configuration {
            message: "Fetch context not configured".to_owned(),
        })?;
    let gateway = RestMarketDataGateway::new(context.base.clone(), context.timeout)?;
    Ok((gateway, context.metric.clone()))
}

/// Fetches a fresh snapshot of filter options and the company universe.
///
/// Uses the fetch context set by [`set_fetch_context`]. Returns an error if
/// the context was not set or if an API call fails.
pub(crate) async fn fetch_snapshot() -> Result<DashboardSnapshot, DashboardError> {
    let (gateway, _metric) = fetch_gateway()?;
    let intake = DashboardIntake::new(&gateway);
    intake.load(&CompanyScope::default()).await
}

/// Fetches the price series for one symbol using the configured metric.
pub(crate) async fn fetch_price_series(
    symbol: &TickerSymbol,
) -> Result<Vec<PricePoint>, DashboardError> {
    let (gateway, metric) = fetch_gateway()?;
    gateway.price_series(symbol, &metric).await
}

/// Fetches the financial series for one symbol.
///
/// Failures on this endpoint are downgraded to an empty series by the
/// gateway, so the result is only an error when the fetch context is
/// missing or misconfigured.
pub(crate) async fn fetch_financial_series(
    symbol: &TickerSymbol,
) -> Result<Vec<FinancialPoint>, DashboardError> {
    let (gateway, _metric) = fetch_gateway()?;
    gateway.financial_series(symbol).await
}
