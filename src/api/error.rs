//! Error types exposed by the dashboard API layer.

use thiserror::Error;

/// Errors surfaced while parsing input or communicating with the dashboard API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardError {
    /// No API base URL was supplied by any configuration source.
    #[error("API base URL is required")]
    MissingApiBaseUrl,

    /// The provided API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// A ticker symbol was empty or blank.
    #[error("ticker symbol must not be blank")]
    MissingSymbol,

    /// A price metric name was empty or blank.
    #[error("price metric must not be blank")]
    MissingMetric,

    /// The API returned a non-success status.
    #[error("dashboard API error: {message}")]
    Api {
        /// Status line and response body excerpt describing the failure.
        message: String,
    },

    /// A response body could not be decoded as the expected JSON shape.
    #[error("response decoding failed: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// Networking failed while calling the API.
    #[error("network error talking to the dashboard API: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
