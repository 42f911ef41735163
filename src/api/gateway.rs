//! Gateways for reading the dashboard REST API.
//!
//! This module provides a trait-based gateway over the backend's four read
//! endpoints. The trait-based design enables mocking in tests while the
//! reqwest-backed implementation handles real HTTP requests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use super::error::DashboardError;
use super::locator::{ApiBase, PriceMetric, TickerSymbol};
use super::models::{
    ApiCompany, ApiFilterOptions, ApiFinancialPoint, ApiPricePoint, Company, CompanyScope,
    FilterOptions, FinancialPoint, PricePoint,
};

/// Gateway that can read companies, filter options, and time series.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataGateway: Send + Sync {
    /// Fetch the selectable filter options.
    async fn filter_options(&self) -> Result<FilterOptions, DashboardError>;

    /// Fetch the company listing, optionally scoped server-side.
    async fn companies(&self, scope: &CompanyScope) -> Result<Vec<Company>, DashboardError>;

    /// Fetch the price series for one symbol and metric.
    async fn price_series(
        &self,
        symbol: &TickerSymbol,
        metric: &PriceMetric,
    ) -> Result<Vec<PricePoint>, DashboardError>;

    /// Fetch the financial series for one symbol.
    ///
    /// Failures on this endpoint are downgraded to an empty series rather
    /// than surfaced as errors; see [`RestMarketDataGateway`].
    async fn financial_series(
        &self,
        symbol: &TickerSymbol,
    ) -> Result<Vec<FinancialPoint>, DashboardError>;
}

/// Reqwest-backed gateway.
pub struct RestMarketDataGateway {
    client: Client,
    base: ApiBase,
}

impl RestMarketDataGateway {
    /// Builds a gateway for the given API base with the given HTTP timeout.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Configuration`] when the HTTP client cannot
    /// be constructed.
    pub fn new(base: ApiBase, timeout: Duration) -> Result<Self, DashboardError> {
        let client = Client::builder().timeout(timeout).build().map_err(|error| {
            DashboardError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            }
        })?;
        Ok(Self { client, base })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, DashboardError> {
        tracing::debug!("GET {url}");
        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|error| DashboardError::Network {
                    message: format!("{context} request transport failed: {error}"),
                })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(map_http_error(context, status, &body));
        }

        response
            .json::<T>()
            .await
            .map_err(|error| DashboardError::Decode {
                message: format!("{context} response decoding failed: {error}"),
            })
    }
}

#[async_trait]
impl MarketDataGateway for RestMarketDataGateway {
    async fn filter_options(&self) -> Result<FilterOptions, DashboardError> {
        let url = self.base.filter_options_url()?;
        self.get_json::<ApiFilterOptions>(url, "filter options")
            .await
            .map(ApiFilterOptions::into)
    }

    async fn companies(&self, scope: &CompanyScope) -> Result<Vec<Company>, DashboardError> {
        let url = self.base.companies_url(scope)?;
        self.get_json::<Vec<ApiCompany>>(url, "company listing")
            .await
            .map(|companies| companies.into_iter().map(ApiCompany::into).collect())
    }

    async fn price_series(
        &self,
        symbol: &TickerSymbol,
        metric: &PriceMetric,
    ) -> Result<Vec<PricePoint>, DashboardError> {
        let url = self.base.prices_url(symbol, metric)?;
        self.get_json::<Vec<ApiPricePoint>>(url, "price series")
            .await
            .map(|points| points.into_iter().map(ApiPricePoint::into).collect())
    }

    /// Fetches financials with the downgrade the original client applied:
    /// a 500 means the backend has no data for the symbol, and transport or
    /// decode failures likewise yield an empty series instead of an error.
    async fn financial_series(
        &self,
        symbol: &TickerSymbol,
    ) -> Result<Vec<FinancialPoint>, DashboardError> {
        let url = self.base.financials_url(symbol)?;
        tracing::debug!("GET {url}");

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(
                    "financial series transport failed for {}, returning empty series: {error}",
                    symbol.as_str()
                );
                return Ok(Vec::new());
            }
        };

        let status = response.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::warn!(
                "server error fetching financials for {}, returning empty series",
                symbol.as_str()
            );
            return Ok(Vec::new());
        }
        if !status.is_success() {
            tracing::warn!(
                "financial series request for {} failed with status {}, returning empty series",
                symbol.as_str(),
                status.as_u16()
            );
            return Ok(Vec::new());
        }

        match response.json::<Vec<ApiFinancialPoint>>().await {
            Ok(points) => Ok(points.into_iter().map(ApiFinancialPoint::into).collect()),
            Err(error) => {
                tracing::warn!(
                    "financial series decoding failed for {}, returning empty series: {error}",
                    symbol.as_str()
                );
                Ok(Vec::new())
            }
        }
    }
}

/// Maps a non-success HTTP status to a [`DashboardError::Api`].
fn map_http_error(context: &str, status: StatusCode, body: &str) -> DashboardError {
    DashboardError::Api {
        message: format!(
            "{context} request failed with status {}: {}",
            status.as_u16(),
            truncate_for_message(body, 160)
        ),
    }
}

/// Truncates a response body for inclusion in an error message.
fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output = String::new();
    let mut chars = message.chars();

    for _ in 0..max_chars {
        let Some(character) = chars.next() else {
            return output;
        };
        output.push(character);
    }

    if chars.next().is_some() {
        output.push_str("...");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_for_message_shortens_long_bodies() {
        let body = "x".repeat(200);
        let truncated = truncate_for_message(&body, 160);
        assert_eq!(truncated.chars().count(), 163);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn truncate_for_message_preserves_short_bodies() {
        assert_eq!(truncate_for_message("not found", 160), "not found");
    }

    #[test]
    fn map_http_error_includes_status_and_body() {
        let error = map_http_error("company listing", StatusCode::BAD_GATEWAY, "upstream down");
        let DashboardError::Api { message } = error else {
            panic!("expected Api variant");
        };
        assert!(message.contains("502"));
        assert!(message.contains("upstream down"));
    }
}
