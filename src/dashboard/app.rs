//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! dashboard. It coordinates between components, manages filter criteria,
//! and handles async data loading.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use crate::api::intake::DashboardSnapshot;
use crate::api::locator::TickerSymbol;
use crate::api::models::{Company, FilterOptions, FinancialPoint, PricePoint};

use super::components::{
    CompanyTableComponent, CompanyTableViewContext, RECORD_LIMIT, render_financial_records,
    render_price_chart, render_price_records, render_stats_row,
};
use super::input::map_key_to_message;
use super::messages::AppMsg;
use super::state::FilterState;

/// Rows used by the price chart grid.
const CHART_HEIGHT: usize = 8;

/// Rows reserved around the company table (header, stats, filter bar,
/// series panels, status bar).
const CHROME_ROWS: u16 = 28;

/// Smallest company-table height kept after a resize.
const MIN_TABLE_HEIGHT: usize = 4;

/// Main application model for the dashboard TUI.
#[derive(Debug, Clone)]
pub struct DashboardApp {
    /// All company records (unfiltered universe).
    companies: Vec<Company>,
    /// Cached indices of companies matching the current criteria.
    /// Invalidated when the universe or the criteria change.
    filtered_indices: Vec<usize>,
    /// Selectable filter options served by the backend.
    options: FilterOptions,
    /// Filter criteria and cursor state.
    filter_state: FilterState,
    /// Symbol whose series are currently displayed.
    selected_symbol: Option<TickerSymbol>,
    /// Price series for the selected symbol.
    prices: Vec<PricePoint>,
    /// Financial series for the selected symbol.
    financials: Vec<FinancialPoint>,
    /// Whether data is currently loading.
    loading: bool,
    /// Current error message, if any.
    error: Option<String>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    show_help: bool,
    /// Company table component.
    company_table: CompanyTableComponent,
    /// Symbol of the company under the cursor, used to restore the cursor
    /// after a refresh.
    cursor_symbol: Option<String>,
}

impl DashboardApp {
    /// Creates a new application from an initial snapshot.
    #[must_use]
    pub fn new(snapshot: DashboardSnapshot) -> Self {
        // Build initial cache with all indices (default criteria are empty)
        let filtered_indices: Vec<usize> = (0..snapshot.companies.len()).collect();
        // Track symbol of first company for cursor preservation
        let cursor_symbol = filtered_indices
            .first()
            .and_then(|&i| snapshot.companies.get(i))
            .map(|company| company.symbol.clone());
        Self {
            companies: snapshot.companies,
            filtered_indices,
            options: snapshot.options,
            filter_state: FilterState::new(),
            selected_symbol: None,
            prices: Vec::new(),
            financials: Vec::new(),
            loading: false,
            error: None,
            width: 80,
            height: 24,
            show_help: false,
            company_table: CompanyTableComponent::new(),
            cursor_symbol,
        }
    }

    /// Creates an empty application (for initial loading state).
    #[must_use]
    pub fn empty() -> Self {
        Self::new(DashboardSnapshot::default())
    }

    /// Returns the currently filtered companies.
    #[must_use]
    pub fn filtered_companies(&self) -> Vec<&Company> {
        self.filtered_indices
            .iter()
            .filter_map(|&i| self.companies.get(i))
            .collect()
    }

    /// Returns the count of filtered companies.
    #[must_use]
    pub const fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.filter_state.cursor_position
    }

    /// Returns the active filter criteria.
    #[must_use]
    pub const fn criteria(&self) -> &super::state::FilterCriteria {
        &self.filter_state.criteria
    }

    /// Returns the symbol whose series are displayed, if any.
    #[must_use]
    pub const fn selected_symbol(&self) -> Option<&TickerSymbol> {
        self.selected_symbol.as_ref()
    }

    /// Returns the symbol of the company under the cursor, if any.
    #[must_use]
    pub fn current_cursor_symbol(&self) -> Option<&str> {
        self.filtered_indices
            .get(self.filter_state.cursor_position)
            .and_then(|&idx| self.companies.get(idx))
            .map(|company| company.symbol.as_str())
    }

    /// Rebuilds the filtered indices cache based on the current criteria.
    fn rebuild_filter_cache(&mut self) {
        self.filtered_indices = self
            .companies
            .iter()
            .enumerate()
            .filter(|(_, company)| self.filter_state.criteria.matches(company))
            .map(|(i, _)| i)
            .collect();
    }

    /// Finds the filtered index for a company by symbol.
    fn find_filtered_index_by_symbol(&self, symbol: &str) -> Option<usize> {
        self.filtered_indices.iter().position(|&idx| {
            self.companies
                .get(idx)
                .is_some_and(|company| company.symbol == symbol)
        })
    }

    /// Updates the tracked cursor symbol from the current cursor position.
    fn update_cursor_symbol(&mut self) {
        self.cursor_symbol = self.current_cursor_symbol().map(ToOwned::to_owned);
    }

    /// Clamps the cursor to valid bounds and updates the tracked symbol.
    ///
    /// This helper centralises the common pattern of clamping the cursor
    /// after criteria changes and then updating the tracked selection.
    fn clamp_cursor_and_update_selection(&mut self) {
        self.filter_state.clamp_cursor(self.filtered_count());
        self.update_cursor_symbol();
    }

    /// Rebuilds the cache after a criteria edit and fixes up the cursor.
    fn apply_criteria_change(&mut self) {
        self.rebuild_filter_cache();
        self.clamp_cursor_and_update_selection();
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all
    /// application messages and returns any resulting commands.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            // Navigation
            AppMsg::CursorUp => self.handle_cursor_up(),
            AppMsg::CursorDown => self.handle_cursor_down(),
            AppMsg::PageUp => self.handle_page_up(),
            AppMsg::PageDown => self.handle_page_down(),
            AppMsg::Home => self.handle_home(),
            AppMsg::End => self.handle_end(),

            // Filter edits
            AppMsg::ToggleSymbolFilter => self.handle_toggle_symbol_filter(),
            AppMsg::CycleSectorFilter => self.handle_cycle_sector_filter(),
            AppMsg::CycleSubIndustryFilter => self.handle_cycle_sub_industry_filter(),
            AppMsg::CycleLocationFilter => self.handle_cycle_location_filter(),
            AppMsg::LowerMinYear => self.handle_step_year(YearBound::Min, -1),
            AppMsg::RaiseMinYear => self.handle_step_year(YearBound::Min, 1),
            AppMsg::LowerMaxYear => self.handle_step_year(YearBound::Max, -1),
            AppMsg::RaiseMaxYear => self.handle_step_year(YearBound::Max, 1),
            AppMsg::ClearFilters => self.handle_clear_filters(),

            // Selection and data loading
            AppMsg::SelectCompany => self.handle_select_company(),
            AppMsg::RefreshRequested => self.handle_refresh_requested(),
            AppMsg::RefreshComplete(snapshot) => self.handle_refresh_complete(snapshot),
            AppMsg::RefreshFailed(error_msg) => self.handle_refresh_failed(error_msg),
            AppMsg::PriceSeriesLoaded { symbol, points } => {
                self.handle_price_series_loaded(symbol, points)
            }
            AppMsg::PriceSeriesFailed { symbol, message } => {
                self.handle_price_series_failed(symbol, message)
            }
            AppMsg::FinancialSeriesLoaded { symbol, points } => {
                self.handle_financial_series_loaded(symbol, points)
            }

            // Application lifecycle
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }

            // Window events
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
        }
    }

    // Navigation handlers

    fn handle_cursor_up(&mut self) -> Option<Cmd> {
        self.filter_state.cursor_up();
        self.update_cursor_symbol();
        None
    }

    fn handle_cursor_down(&mut self) -> Option<Cmd> {
        let max_index = self.filtered_count().saturating_sub(1);
        self.filter_state.cursor_down(max_index);
        self.update_cursor_symbol();
        None
    }

    fn handle_page_up(&mut self) -> Option<Cmd> {
        let page_size = self.company_table.visible_height();
        self.filter_state.page_up(page_size);
        self.update_cursor_symbol();
        None
    }

    fn handle_page_down(&mut self) -> Option<Cmd> {
        let page_size = self.company_table.visible_height();
        let max_index = self.filtered_count().saturating_sub(1);
        self.filter_state.page_down(page_size, max_index);
        self.update_cursor_symbol();
        None
    }

    fn handle_home(&mut self) -> Option<Cmd> {
        self.filter_state.home();
        self.update_cursor_symbol();
        None
    }

    fn handle_end(&mut self) -> Option<Cmd> {
        let max_index = self.filtered_count().saturating_sub(1);
        self.filter_state.end(max_index);
        self.update_cursor_symbol();
        None
    }

    // Filter handlers

    fn handle_toggle_symbol_filter(&mut self) -> Option<Cmd> {
        let Some(symbol) = self.current_cursor_symbol().map(ToOwned::to_owned) else {
            return None;
        };
        self.filter_state.criteria.toggle_symbol(&symbol);
        self.apply_criteria_change();
        None
    }

    fn handle_cycle_sector_filter(&mut self) -> Option<Cmd> {
        let current = self.filter_state.criteria.sectors.iter().next().cloned();
        let next = cycle_value(current.as_ref(), &self.options.sectors);
        self.filter_state.criteria.set_sector(next);
        self.apply_criteria_change();
        None
    }

    fn handle_cycle_sub_industry_filter(&mut self) -> Option<Cmd> {
        let current = self
            .filter_state
            .criteria
            .sub_industries
            .iter()
            .next()
            .cloned();
        let next = cycle_value(current.as_ref(), &self.options.sub_industries);
        self.filter_state.criteria.set_sub_industry(next);
        self.apply_criteria_change();
        None
    }

    /// Cycles the location criterion through the distinct locations present
    /// in the loaded universe; the options endpoint does not serve
    /// locations.
    fn handle_cycle_location_filter(&mut self) -> Option<Cmd> {
        let locations = self.distinct_locations();
        let current = self.filter_state.criteria.locations.iter().next().cloned();
        let next = cycle_value(current.as_ref(), &locations);
        self.filter_state.criteria.set_location(next);
        self.apply_criteria_change();
        None
    }

    fn handle_step_year(&mut self, bound: YearBound, steps: i32) -> Option<Cmd> {
        match bound {
            YearBound::Min => self.filter_state.criteria.step_min_year(steps),
            YearBound::Max => self.filter_state.criteria.step_max_year(steps),
        }
        self.apply_criteria_change();
        None
    }

    fn handle_clear_filters(&mut self) -> Option<Cmd> {
        self.filter_state.criteria.clear();
        self.apply_criteria_change();
        None
    }

    fn distinct_locations(&self) -> Vec<String> {
        let mut locations: Vec<String> = self
            .companies
            .iter()
            .map(|company| company.headquarters_location.clone())
            .collect();
        locations.sort();
        locations.dedup();
        locations
    }

    // Selection and data loading handlers

    /// Selects the company under the cursor and starts its series loads.
    ///
    /// The price fetch runs first; its completion message issues the
    /// financial fetch for the same symbol. Responses are applied as they
    /// arrive with no cancellation, so a quick second selection keeps the
    /// original client's last-applied-response-wins behaviour.
    fn handle_select_company(&mut self) -> Option<Cmd> {
        let symbol_text = self.current_cursor_symbol().map(ToOwned::to_owned)?;
        let symbol = TickerSymbol::new(symbol_text).ok()?;

        self.selected_symbol = Some(symbol.clone());
        self.loading = true;
        self.error = None;
        Some(Self::fetch_price_series_cmd(symbol))
    }

    /// Handles a manual refresh request.
    ///
    /// Skips the refresh if a load is already in flight to prevent
    /// duplicate requests.
    fn handle_refresh_requested(&mut self) -> Option<Cmd> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(Self::fetch_snapshot_cmd())
    }

    /// Applies a refreshed snapshot with cursor preservation.
    ///
    /// 1. Captures the current cursor company by symbol
    /// 2. Replaces the universe and the filter options
    /// 3. Rebuilds the filter cache
    /// 4. Restores the cursor by symbol, or clamps if it disappeared
    /// 5. Clears loading state and error
    fn handle_refresh_complete(&mut self, snapshot: &DashboardSnapshot) -> Option<Cmd> {
        let previous_symbol = self.cursor_symbol.clone();

        self.companies = snapshot.companies.clone();
        self.options = snapshot.options.clone();
        self.rebuild_filter_cache();

        if let Some(symbol) = previous_symbol {
            if let Some(new_index) = self.find_filtered_index_by_symbol(&symbol) {
                self.filter_state.cursor_position = new_index;
            } else {
                self.filter_state.clamp_cursor(self.filtered_count());
            }
        } else {
            self.filter_state.clamp_cursor(self.filtered_count());
        }
        self.update_cursor_symbol();

        self.loading = false;
        self.error = None;
        None
    }

    fn handle_refresh_failed(&mut self, error_msg: &str) -> Option<Cmd> {
        self.loading = false;
        self.error = Some(error_msg.to_owned());
        None
    }

    /// Applies an arrived price series and issues the financial fetch for
    /// the same symbol.
    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    fn handle_price_series_loaded(
        &mut self,
        symbol: &TickerSymbol,
        points: &[PricePoint],
    ) -> Option<Cmd> {
        self.prices = points.to_vec();
        self.error = None;
        Some(Self::fetch_financial_series_cmd(symbol.clone()))
    }

    /// Surfaces a price fetch failure and still fetches financials, keeping
    /// the two endpoints independent as in the original client.
    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    fn handle_price_series_failed(
        &mut self,
        symbol: &TickerSymbol,
        message: &str,
    ) -> Option<Cmd> {
        self.error = Some(format!("Failed to load price data: {message}"));
        Some(Self::fetch_financial_series_cmd(symbol.clone()))
    }

    fn handle_financial_series_loaded(
        &mut self,
        _symbol: &TickerSymbol,
        points: &[FinancialPoint],
    ) -> Option<Cmd> {
        self.financials = points.to_vec();
        self.loading = false;
        None
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        let table_height = usize::from(height.saturating_sub(CHROME_ROWS)).max(MIN_TABLE_HEIGHT);
        self.company_table.set_visible_height(table_height);
        None
    }

    // Async commands

    /// Creates a command that refetches the snapshot.
    fn fetch_snapshot_cmd() -> Cmd {
        Box::pin(async {
            match super::fetch_snapshot().await {
                Ok(snapshot) => {
                    Some(Box::new(AppMsg::RefreshComplete(snapshot)) as Box<dyn Any + Send>)
                }
                Err(error) => Some(Box::new(AppMsg::from_error(&error)) as Box<dyn Any + Send>),
            }
        })
    }

    /// Creates a command that fetches the price series for a symbol.
    fn fetch_price_series_cmd(symbol: TickerSymbol) -> Cmd {
        Box::pin(async move {
            match super::fetch_price_series(&symbol).await {
                Ok(points) => Some(Box::new(AppMsg::PriceSeriesLoaded { symbol, points })
                    as Box<dyn Any + Send>),
                Err(error) => Some(Box::new(AppMsg::PriceSeriesFailed {
                    message: error.to_string(),
                    symbol,
                }) as Box<dyn Any + Send>),
            }
        })
    }

    /// Creates a command that fetches the financial series for a symbol.
    ///
    /// The gateway downgrades endpoint failures to an empty series; only a
    /// missing fetch context surfaces as a failure here.
    fn fetch_financial_series_cmd(symbol: TickerSymbol) -> Cmd {
        Box::pin(async move {
            match super::fetch_financial_series(&symbol).await {
                Ok(points) => Some(Box::new(AppMsg::FinancialSeriesLoaded { symbol, points })
                    as Box<dyn Any + Send>),
                Err(error) => Some(Box::new(AppMsg::from_error(&error)) as Box<dyn Any + Send>),
            }
        })
    }

    // View rendering

    /// Renders the header bar.
    fn render_header(&self) -> String {
        let title = "S&P 500 Dashboard";
        let loading_indicator = if self.loading { " [Loading...]" } else { "" };
        format!("{title}{loading_indicator}\n")
    }

    /// Renders the filter bar showing the active criteria.
    fn render_filter_bar(&self) -> String {
        let label = self.filter_state.criteria.label();
        let count = self.filtered_count();
        let total = self.companies.len();
        format!("Filter: {label} ({count}/{total})\n")
    }

    /// Renders the per-symbol series panels.
    fn render_series_section(&self) -> String {
        let Some(symbol) = &self.selected_symbol else {
            return "Press Enter on a company row to load its price and financial series.\n"
                .to_owned();
        };

        let mut output = String::new();
        output.push_str(&format!(
            "Prices: {} ({} records)\n",
            symbol.as_str(),
            self.prices.len()
        ));
        let chart_width = usize::from(self.width).saturating_sub(4);
        output.push_str(&render_price_chart(&self.prices, chart_width, CHART_HEIGHT));
        if !self.prices.is_empty() {
            output.push_str(&format!("First {RECORD_LIMIT} price records:\n"));
            output.push_str(&render_price_records(&self.prices));
        }
        output.push('\n');
        output.push_str(&format!(
            "Financials: {} ({} records)\n",
            symbol.as_str(),
            self.financials.len()
        ));
        output.push_str(&render_financial_records(&self.financials));
        output
    }

    /// Renders the status bar with help hints.
    fn render_status_bar(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Error: {error}\n");
        }

        let hints = "j/k:navigate  space:symbol  s/i/h:cycle filters  [/]:min year  \
                     {/}:max year  Enter:series  r:refresh  Esc:clear  ?:help  q:quit";
        format!("{hints}\n")
    }

    /// Renders the help overlay if visible.
    fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Navigation:
  j, Down    Move cursor down
  k, Up      Move cursor up
  PgDn       Page down
  PgUp       Page up
  Home, g    Go to first row
  End, G     Go to last row

Filtering:
  Space      Toggle the symbol under the cursor
  s          Cycle sector
  i          Cycle sub-industry
  h          Cycle headquarters location
  [, ]       Lower / raise minimum founded year
  {, }       Lower / raise maximum founded year
  Esc        Clear all filters

Other:
  Enter      Load price and financial series for the cursor row
  r          Refresh companies and filter options
  ?          Toggle this help
  q          Quit

Press ? to close this help.
";
        help_text.to_owned()
    }
}

/// Bound selector for year-stepping messages.
#[derive(Debug, Clone, Copy)]
enum YearBound {
    Min,
    Max,
}

/// Advances a single-select criterion through an options list.
///
/// `None` selects the first option; the last option wraps back to `None`
/// (unconstrained). A stale value no longer present in the options restarts
/// at the first option.
fn cycle_value(current: Option<&String>, options: &[String]) -> Option<String> {
    match current {
        None => options.first().cloned(),
        Some(value) => options
            .iter()
            .position(|candidate| candidate == value)
            .map_or_else(|| options.first().cloned(), |index| {
                options.get(index + 1).cloned()
            }),
    }
}

impl Model for DashboardApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve initial data from module-level storage
        let snapshot = super::get_initial_snapshot();
        let model = Self::new(snapshot);
        (model, None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            let app_msg = map_key_to_message(key_msg);
            if let Some(mapped) = app_msg {
                return self.handle_message(&mapped);
            }
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        // If help is shown, render overlay instead
        if self.show_help {
            return self.render_help_overlay();
        }

        let mut output = String::new();

        output.push_str(&self.render_header());
        output.push_str(&render_stats_row(&self.filtered_companies()));
        output.push_str(&self.render_filter_bar());
        output.push('\n');

        let ctx = CompanyTableViewContext {
            companies: &self.companies,
            filtered_indices: &self.filtered_indices,
            cursor_position: self.filter_state.cursor_position,
            scroll_offset: self.filter_state.scroll_offset,
            visible_height: self.company_table.visible_height(),
        };
        output.push_str(&self.company_table.view(&ctx));

        output.push('\n');
        output.push_str(&self.render_series_section());
        output.push('\n');
        output.push_str(&self.render_status_bar());

        output
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
