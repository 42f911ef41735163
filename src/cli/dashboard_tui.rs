//! TUI mode for the interactive dashboard.
//!
//! This module provides the entry point for the full-screen terminal user
//! interface that allows users to browse, filter, and inspect companies.

use std::io::{self, Write};

use bubbletea_rs::Program;

use spxdash::dashboard::{DashboardApp, set_fetch_context, set_initial_snapshot};
use spxdash::{CompanyScope, DashboardError, DashboardIntake, RestMarketDataGateway, SpxDashConfig};

/// Runs the interactive dashboard.
///
/// # Errors
///
/// Returns an error if:
/// - The API base URL is missing or invalid
/// - The initial snapshot load fails
/// - The TUI fails to initialise
pub async fn run(config: &SpxDashConfig) -> Result<(), DashboardError> {
    let base = config.api_base()?;
    let metric = config.price_metric()?;
    let timeout = config.request_timeout();

    // Load the initial snapshot before entering the alternate screen
    let gateway = RestMarketDataGateway::new(base.clone(), timeout)?;
    let intake = DashboardIntake::new(&gateway);
    let snapshot = intake.load(&CompanyScope::default()).await?;

    // Store the snapshot in global state for Model::init() to retrieve.
    // If already set (e.g. re-running the TUI in the same process), this is
    // a no-op and the existing data remains.
    let _ = set_initial_snapshot(snapshot);

    // Store the fetch context for refresh and series loading.
    // Same semantics as above: if already set, we keep the existing context.
    let _ = set_fetch_context(base, metric, timeout);

    // Run the TUI program
    run_tui().await.map_err(|error| DashboardError::Io {
        message: format!("TUI error: {error}"),
    })?;

    Ok(())
}

/// Runs the bubbletea-rs program with the `DashboardApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // Build and run the program using the builder pattern.
    // DashboardApp::init() will retrieve data from module-level storage.
    let program = Program::<DashboardApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_app_can_be_created_empty() {
        let app = DashboardApp::empty();
        assert_eq!(app.filtered_count(), 0);
    }
}
