//! Company table component for displaying the filtered universe.
//!
//! This component renders a scrollable table of company records with cursor
//! highlighting and fixed-width columns for the fields served by the
//! company listing endpoint.

use crate::api::models::Company;

use super::text_fit::fit_to_column;

/// Default visible height for the company table component.
const DEFAULT_VISIBLE_HEIGHT: usize = 20;

/// Column widths: symbol, security, sector, sub-industry, location, date
/// added, CIK, founded.
const COLUMN_WIDTHS: [usize; 8] = [6, 22, 22, 26, 20, 10, 7, 11];

/// Context for rendering the company table view.
///
/// Bundles the data needed to render the filtered universe without
/// requiring per-frame allocations.
#[derive(Debug, Clone)]
pub struct CompanyTableViewContext<'a> {
    /// Full slice of all company records.
    pub companies: &'a [Company],
    /// Indices of companies matching the current criteria.
    pub filtered_indices: &'a [usize],
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Number of rows scrolled from top.
    pub scroll_offset: usize,
    /// Maximum visible height in rows (for layout calculations).
    pub visible_height: usize,
}

/// Component for displaying a table of company records.
#[derive(Debug, Clone)]
pub struct CompanyTableComponent {
    /// Visible height in rows (for scrolling calculations).
    visible_height: usize,
}

impl Default for CompanyTableComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl CompanyTableComponent {
    /// Creates a new company table component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible height.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Renders the company table as a string.
    ///
    /// Only rows within the visible window (based on scroll offset and
    /// visible height) are rendered, keeping redraws cheap for the full
    /// five-hundred-company universe.
    #[must_use]
    pub fn view(&self, ctx: &CompanyTableViewContext<'_>) -> String {
        if ctx.filtered_indices.is_empty() {
            return "  No companies match the current filter.\n".to_owned();
        }

        let mut output = String::new();
        output.push_str(&Self::header_row());
        output.push('\n');

        // Use context's visible_height, falling back to component's default
        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };

        let start = ctx.scroll_offset;
        let end = (ctx.scroll_offset + visible_height).min(ctx.filtered_indices.len());

        for (display_index, &company_index) in ctx
            .filtered_indices
            .iter()
            .enumerate()
            .skip(start)
            .take(end.saturating_sub(start))
        {
            let Some(company) = ctx.companies.get(company_index) else {
                continue;
            };
            let is_selected = display_index == ctx.cursor_position;
            let prefix = if is_selected { ">" } else { " " };
            output.push_str(&Self::format_company_row(company, prefix));
            output.push('\n');
        }

        output
    }

    /// Formats the fixed header row.
    fn header_row() -> String {
        let cells = [
            "Symbol",
            "Security",
            "Sector",
            "Sub-industry",
            "Location",
            "Added",
            "CIK",
            "Founded",
        ];
        let mut row = "  ".to_owned();
        for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
            row.push_str(&fit_to_column(cell, width));
            row.push(' ');
        }
        row.trim_end().to_owned()
    }

    /// Formats a single company row for display.
    fn format_company_row(company: &Company, prefix: &str) -> String {
        let date_added = company
            .date_added
            .map_or_else(|| "-".to_owned(), |date| date.format("%Y-%m-%d").to_string());
        let cells = [
            company.symbol.as_str(),
            company.security.as_str(),
            company.sector.as_str(),
            company.sub_industry.as_str(),
            company.headquarters_location.as_str(),
            date_added.as_str(),
            &company.cik.to_string(),
            company.founded.as_str(),
        ];
        let mut row = format!("{prefix} ");
        for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
            row.push_str(&fit_to_column(cell, width));
            row.push(' ');
        }
        row.trim_end().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    fn make_company(symbol: &str) -> Company {
        Company {
            symbol: symbol.to_owned(),
            security: format!("{symbol} Incorporated"),
            sector: "Information Technology".to_owned(),
            sub_industry: "Systems Software".to_owned(),
            headquarters_location: "Redmond, Washington".to_owned(),
            date_added: chrono::NaiveDate::from_ymd_opt(1994, 6, 1),
            cik: 789_019,
            founded: "1975".to_owned(),
        }
    }

    #[fixture]
    fn two_companies() -> Vec<Company> {
        vec![make_company("AAPL"), make_company("MSFT")]
    }

    #[test]
    fn view_shows_empty_message_when_nothing_matches() {
        let component = CompanyTableComponent::new();
        let companies: Vec<Company> = vec![];
        let filtered_indices: Vec<usize> = vec![];
        let ctx = CompanyTableViewContext {
            companies: &companies,
            filtered_indices: &filtered_indices,
            cursor_position: 0,
            scroll_offset: 0,
            visible_height: 10,
        };
        assert!(component.view(&ctx).contains("No companies match"));
    }

    #[rstest]
    fn view_shows_cursor_indicator(two_companies: Vec<Company>) {
        let filtered_indices = vec![0, 1];
        let component = CompanyTableComponent::new();
        let ctx = CompanyTableViewContext {
            companies: &two_companies,
            filtered_indices: &filtered_indices,
            cursor_position: 1,
            scroll_offset: 0,
            visible_height: 10,
        };
        let output = component.view(&ctx);

        assert!(output.contains("  AAPL"));
        assert!(output.contains("> MSFT"));
    }

    #[rstest]
    fn view_includes_header_and_fields(two_companies: Vec<Company>) {
        let filtered_indices = vec![0];
        let component = CompanyTableComponent::new();
        let ctx = CompanyTableViewContext {
            companies: &two_companies,
            filtered_indices: &filtered_indices,
            cursor_position: 0,
            scroll_offset: 0,
            visible_height: 10,
        };
        let output = component.view(&ctx);

        assert!(output.contains("Symbol"));
        assert!(output.contains("Founded"));
        assert!(output.contains("1994-06-01"));
        assert!(output.contains("789019"));
    }

    #[rstest]
    fn view_windows_rows_by_scroll_offset(two_companies: Vec<Company>) {
        let filtered_indices = vec![0, 1];
        let component = CompanyTableComponent::new();
        let ctx = CompanyTableViewContext {
            companies: &two_companies,
            filtered_indices: &filtered_indices,
            cursor_position: 1,
            scroll_offset: 1,
            visible_height: 1,
        };
        let output = component.view(&ctx);

        assert!(!output.contains("AAPL Incorporated"));
        assert!(output.contains("MSFT"));
    }
}
