//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.spxdash.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `SPXDASH_API_BASE_URL`, `SPXDASH_SYMBOL`,
//!    `SPXDASH_METRIC`
//! 4. **Command-line arguments** – `--api-base-url`/`-a`, `--symbol`/`-s`,
//!    `--metric`/`-m`
//!
//! # Configuration File
//!
//! Place `.spxdash.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! api_base_url = "http://localhost:8000/api"
//! metric = "Close"
//! request_timeout_seconds = 10
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::api::{ApiBase, DashboardError, PriceMetric, TickerSymbol};

/// Default HTTP timeout applied when no override is configured.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive full-screen dashboard.
    Dashboard,
    /// One-shot summary for a single symbol, printed to stdout.
    SymbolSnapshot,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `SPXDASH_API_BASE_URL` or `--api-base-url`: REST API base URL
/// - `SPXDASH_SYMBOL` or `--symbol`: run snapshot mode for one ticker
/// - `SPXDASH_METRIC` or `--metric`: price metric to chart (default `Close`)
/// - `SPXDASH_REQUEST_TIMEOUT_SECONDS`: HTTP timeout override
///
/// # Example
///
/// ```no_run
/// use spxdash::SpxDashConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = SpxDashConfig::load().expect("failed to load configuration");
/// let base = config.api_base().expect("API base URL required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "SPXDASH",
    discovery(
        dotfile_name = ".spxdash.toml",
        config_file_name = "spxdash.toml",
        app_name = "spxdash"
    )
)]
pub struct SpxDashConfig {
    /// REST API base URL (for example `http://localhost:8000/api`).
    ///
    /// Can be provided via:
    /// - CLI: `--api-base-url <URL>` or `-a <URL>`
    /// - Environment: `SPXDASH_API_BASE_URL`
    /// - Config file: `api_base_url = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_base_url: Option<String>,

    /// Ticker symbol for snapshot mode.
    ///
    /// When set, spxdash prints a one-shot summary for this symbol instead
    /// of starting the interactive dashboard.
    ///
    /// Can be provided via:
    /// - CLI: `--symbol <SYMBOL>` or `-s <SYMBOL>`
    /// - Environment: `SPXDASH_SYMBOL`
    /// - Config file: `symbol = "..."`
    #[ortho_config(cli_short = 's')]
    pub symbol: Option<String>,

    /// Price metric requested from the price-series endpoint.
    ///
    /// Defaults to `Close` when unset. The backend also serves `Open`,
    /// `High`, `Low`, and `Volume`.
    ///
    /// Can be provided via:
    /// - CLI: `--metric <METRIC>` or `-m <METRIC>`
    /// - Environment: `SPXDASH_METRIC`
    /// - Config file: `metric = "..."`
    #[ortho_config(cli_short = 'm')]
    pub metric: Option<String>,

    /// HTTP request timeout in seconds (default 10).
    ///
    /// Can be provided via:
    /// - CLI: `--request-timeout-seconds <SECS>`
    /// - Environment: `SPXDASH_REQUEST_TIMEOUT_SECONDS`
    /// - Config file: `request_timeout_seconds = 10`
    pub request_timeout_seconds: Option<u64>,
}

impl SpxDashConfig {
    /// Parses the configured API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MissingApiBaseUrl`] when no URL is
    /// configured and [`DashboardError::InvalidUrl`] when it cannot be
    /// parsed.
    pub fn api_base(&self) -> Result<ApiBase, DashboardError> {
        let raw = self
            .api_base_url
            .as_deref()
            .ok_or(DashboardError::MissingApiBaseUrl)?;
        ApiBase::parse(raw)
    }

    /// Parses the configured snapshot symbol.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MissingSymbol`] when no symbol is
    /// configured or the configured value is blank.
    pub fn require_symbol(&self) -> Result<TickerSymbol, DashboardError> {
        let raw = self.symbol.as_deref().ok_or(DashboardError::MissingSymbol)?;
        TickerSymbol::new(raw)
    }

    /// Resolves the price metric, defaulting to `Close`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MissingMetric`] when a configured metric is
    /// blank.
    pub fn price_metric(&self) -> Result<PriceMetric, DashboardError> {
        self.metric
            .as_deref()
            .map_or_else(|| Ok(PriceMetric::default()), PriceMetric::new)
    }

    /// Resolves the HTTP request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        match self.request_timeout_seconds {
            Some(seconds) => Duration::from_secs(seconds),
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Determines the operation mode based on provided configuration.
    ///
    /// Returns `SymbolSnapshot` when a symbol is configured and `Dashboard`
    /// otherwise.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.symbol.is_some() {
            OperationMode::SymbolSnapshot
        } else {
            OperationMode::Dashboard
        }
    }
}
