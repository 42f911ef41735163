//! URL construction and identity wrappers for dashboard API requests.

use url::Url;

use super::error::DashboardError;
use super::models::CompanyScope;

/// Ticker symbol wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TickerSymbol(String);

impl TickerSymbol {
    /// Validates that the symbol is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MissingSymbol`] when the supplied string is
    /// blank.
    pub fn new(symbol: impl AsRef<str>) -> Result<Self, DashboardError> {
        let trimmed = symbol.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DashboardError::MissingSymbol);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the symbol value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for TickerSymbol {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Price metric name (e.g. `Close`, `Volume`) sent with price-series reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceMetric(String);

impl PriceMetric {
    /// Validates that the metric name is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MissingMetric`] when the supplied string is
    /// blank.
    pub fn new(metric: impl AsRef<str>) -> Result<Self, DashboardError> {
        let trimmed = metric.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DashboardError::MissingMetric);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the metric name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for PriceMetric {
    fn default() -> Self {
        Self("Close".to_owned())
    }
}

/// Validated dashboard API base URL and endpoint builder.
///
/// The backend exposes its reads beneath a single base (for example
/// `http://localhost:8000/api`); this wrapper normalises the base path and
/// derives the four endpoint URLs, including the backend's repeated
/// `symbols[]=` style query keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase {
    base: Url,
}

impl ApiBase {
    /// Parses and validates an API base URL.
    ///
    /// The path is normalised to end with a slash so that endpoint paths can
    /// be joined without clobbering the final base segment.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MissingApiBaseUrl`] for blank input and
    /// [`DashboardError::InvalidUrl`] when parsing fails, the scheme is not
    /// HTTP(S), or the URL has no host.
    pub fn parse(input: &str) -> Result<Self, DashboardError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DashboardError::MissingApiBaseUrl);
        }

        let mut parsed =
            Url::parse(trimmed).map_err(|error| DashboardError::InvalidUrl(error.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DashboardError::InvalidUrl(format!(
                "unsupported scheme: {}",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none() {
            return Err(DashboardError::InvalidUrl(
                "URL must include a host".to_owned(),
            ));
        }

        if !parsed.path().ends_with('/') {
            let normalised = format!("{}/", parsed.path());
            parsed.set_path(&normalised);
        }
        parsed.set_query(None);
        parsed.set_fragment(None);

        Ok(Self { base: parsed })
    }

    /// Borrow the normalised base URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, relative: &str) -> Result<Url, DashboardError> {
        self.base
            .join(relative)
            .map_err(|error| DashboardError::InvalidUrl(error.to_string()))
    }

    /// URL listing the selectable filter options.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidUrl`] when the endpoint path cannot
    /// be joined onto the base.
    pub fn filter_options_url(&self) -> Result<Url, DashboardError> {
        self.endpoint("info/filter_options/")
    }

    /// URL listing companies, optionally scoped by symbol, sector, and
    /// sub-industry.
    ///
    /// Each scope value is appended as a repeated bracketed query key
    /// (`symbols[]=`, `sectors[]=`, `subIndustries[]=`), matching the wire
    /// format the backend expects.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidUrl`] when the endpoint path cannot
    /// be joined onto the base.
    pub fn companies_url(&self, scope: &CompanyScope) -> Result<Url, DashboardError> {
        let mut url = self.endpoint("info/")?;
        if !scope.is_unscoped() {
            let mut pairs = url.query_pairs_mut();
            for symbol in &scope.symbols {
                pairs.append_pair("symbols[]", symbol);
            }
            for sector in &scope.sectors {
                pairs.append_pair("sectors[]", sector);
            }
            for sub_industry in &scope.sub_industries {
                pairs.append_pair("subIndustries[]", sub_industry);
            }
        }
        Ok(url)
    }

    /// URL listing price points for one symbol and one metric.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidUrl`] when the endpoint path cannot
    /// be joined onto the base.
    pub fn prices_url(
        &self,
        symbol: &TickerSymbol,
        metric: &PriceMetric,
    ) -> Result<Url, DashboardError> {
        let mut url = self.endpoint("prices/")?;
        url.query_pairs_mut()
            .append_pair("symbols[]", symbol.as_str())
            .append_pair("metric", metric.as_str());
        Ok(url)
    }

    /// URL listing financial points for one symbol.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidUrl`] when the endpoint path cannot
    /// be joined onto the base.
    pub fn financials_url(&self, symbol: &TickerSymbol) -> Result<Url, DashboardError> {
        let mut url = self.endpoint("financials/")?;
        url.query_pairs_mut()
            .append_pair("symbols[]", symbol.as_str());
        Ok(url)
    }
}
