//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the
//! application's update function. Messages represent user actions, async
//! command results, and system events.

use crate::api::error::DashboardError;
use crate::api::intake::DashboardSnapshot;
use crate::api::locator::TickerSymbol;
use crate::api::models::{FinancialPoint, PricePoint};

/// Messages for the dashboard TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one row.
    CursorUp,
    /// Move cursor down one row.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to the first row.
    Home,
    /// Move cursor to the last row.
    End,

    // Filter edits
    /// Toggle the symbol under the cursor in the symbol criterion.
    ToggleSymbolFilter,
    /// Cycle the sector criterion through the available options.
    CycleSectorFilter,
    /// Cycle the sub-industry criterion through the available options.
    CycleSubIndustryFilter,
    /// Cycle the location criterion through the loaded locations.
    CycleLocationFilter,
    /// Lower the minimum founded-year bound by one step.
    LowerMinYear,
    /// Raise the minimum founded-year bound by one step.
    RaiseMinYear,
    /// Lower the maximum founded-year bound by one step.
    LowerMaxYear,
    /// Raise the maximum founded-year bound by one step.
    RaiseMaxYear,
    /// Clear all filter criteria.
    ClearFilters,

    // Selection and data loading
    /// Select the company under the cursor and load its series.
    SelectCompany,
    /// Request a refresh of filter options and the company universe.
    RefreshRequested,
    /// Refresh completed successfully with new data.
    RefreshComplete(DashboardSnapshot),
    /// Refresh failed with an error.
    RefreshFailed(String),
    /// Price series arrived for a symbol.
    PriceSeriesLoaded {
        /// Symbol the series belongs to.
        symbol: TickerSymbol,
        /// Fetched price points, in backend order.
        points: Vec<PricePoint>,
    },
    /// Price series fetch failed for a symbol.
    PriceSeriesFailed {
        /// Symbol the fetch was issued for.
        symbol: TickerSymbol,
        /// User-visible failure description.
        message: String,
    },
    /// Financial series arrived for a symbol.
    ///
    /// There is no failure counterpart: the gateway downgrades failures on
    /// this endpoint to an empty series.
    FinancialSeriesLoaded {
        /// Symbol the series belongs to.
        symbol: TickerSymbol,
        /// Fetched financial points, in backend order.
        points: Vec<FinancialPoint>,
    },

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle the help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Creates an error message from a [`DashboardError`].
    #[must_use]
    pub fn from_error(error: &DashboardError) -> Self {
        Self::RefreshFailed(error.to_string())
    }
}
