//! spxdash library crate providing the S&P 500 dashboard client.
//!
//! The library wraps reqwest to read the dashboard REST API (companies,
//! filter options, and per-symbol time series), provides the pure company
//! filter over the loaded universe, and hosts the bubbletea-rs dashboard
//! application. Errors are surfaced as friendly variants that the CLI can
//! display directly.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod telemetry;

pub use api::{
    ApiBase, Company, CompanyScope, DashboardError, DashboardIntake, DashboardSnapshot,
    FilterOptions, FinancialPoint, MarketDataGateway, PriceMetric, PricePoint,
    RestMarketDataGateway, TickerSymbol,
};
pub use config::{OperationMode, SpxDashConfig};
pub use dashboard::DashboardApp;
pub use dashboard::state::FilterCriteria;
