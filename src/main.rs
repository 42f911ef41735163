//! spxdash CLI entrypoint for the S&P 500 dashboard.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use spxdash::{DashboardError, OperationMode, SpxDashConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), DashboardError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::SymbolSnapshot => cli::snapshot::run(&config).await,
        OperationMode::Dashboard => cli::dashboard_tui::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`DashboardError::Configuration`] when ortho-config fails to
/// parse arguments or load configuration files.
fn load_config() -> Result<SpxDashConfig, DashboardError> {
    SpxDashConfig::load().map_err(|error| DashboardError::Configuration {
        message: error.to_string(),
    })
}
