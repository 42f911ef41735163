//! Dashboard REST API intake.
//!
//! This module wraps reqwest to validate the configured API base URL, build
//! the backend's four read endpoints, and retrieve companies, filter options,
//! and per-symbol time series. Errors are mapped into user-friendly variants
//! so that callers can surface precise failures without exposing transport
//! internals.

pub mod error;
pub mod gateway;
pub mod intake;
pub mod locator;
pub mod models;

pub use error::DashboardError;
pub use gateway::{MarketDataGateway, RestMarketDataGateway};
pub use intake::{DashboardIntake, DashboardSnapshot};
pub use locator::{ApiBase, PriceMetric, TickerSymbol};
pub use models::{Company, CompanyScope, FilterOptions, FinancialPoint, PricePoint};

#[cfg(test)]
pub use gateway::MockMarketDataGateway;
