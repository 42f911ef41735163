//! Tests for the dashboard TUI application model.

use chrono::NaiveDate;

use super::*;
use crate::api::models::FilterOptions;

fn make_company(symbol: &str, sector: &str, founded: &str) -> Company {
    Company {
        symbol: symbol.to_owned(),
        security: format!("{symbol} Inc."),
        sector: sector.to_owned(),
        sub_industry: format!("{sector} Sub"),
        headquarters_location: "New York, New York".to_owned(),
        date_added: NaiveDate::from_ymd_opt(2000, 1, 1),
        cik: 1,
        founded: founded.to_owned(),
    }
}

fn make_snapshot() -> DashboardSnapshot {
    DashboardSnapshot {
        options: FilterOptions {
            symbols: vec!["AAPL".to_owned(), "MSFT".to_owned(), "XOM".to_owned()],
            sectors: vec![
                "Energy".to_owned(),
                "Information Technology".to_owned(),
            ],
            sub_industries: vec!["Systems Software".to_owned()],
        },
        companies: vec![
            make_company("AAPL", "Information Technology", "1976"),
            make_company("MSFT", "Information Technology", "1975"),
            make_company("XOM", "Energy", "1999"),
        ],
    }
}

fn price_point(value: f64) -> PricePoint {
    PricePoint {
        date: NaiveDate::from_ymd_opt(2023, 1, 2).unwrap_or_default(),
        ticker: "AAPL".to_owned(),
        metric: "Close".to_owned(),
        value,
    }
}

#[test]
fn new_app_has_all_companies() {
    let app = DashboardApp::new(make_snapshot());
    assert_eq!(app.filtered_count(), 3);
}

#[test]
fn cursor_navigation_works() {
    let mut app = DashboardApp::new(make_snapshot());

    assert_eq!(app.cursor_position(), 0);

    app.handle_message(&AppMsg::CursorDown);
    assert_eq!(app.cursor_position(), 1);
    assert_eq!(app.current_cursor_symbol(), Some("MSFT"));

    app.handle_message(&AppMsg::End);
    assert_eq!(app.cursor_position(), 2);

    app.handle_message(&AppMsg::CursorDown);
    assert_eq!(app.cursor_position(), 2); // Cannot go past end

    app.handle_message(&AppMsg::Home);
    assert_eq!(app.cursor_position(), 0);

    app.handle_message(&AppMsg::CursorUp);
    assert_eq!(app.cursor_position(), 0); // Cannot go below 0
}

#[test]
fn toggle_symbol_filter_narrows_to_cursor_symbol() {
    let mut app = DashboardApp::new(make_snapshot());

    app.handle_message(&AppMsg::CursorDown);
    app.handle_message(&AppMsg::ToggleSymbolFilter);

    assert_eq!(app.filtered_count(), 1);
    assert_eq!(app.current_cursor_symbol(), Some("MSFT"));
    assert!(app.criteria().symbols.contains("MSFT"));

    // Toggling again removes the constraint
    app.handle_message(&AppMsg::ToggleSymbolFilter);
    assert_eq!(app.filtered_count(), 3);
}

#[test]
fn cycle_sector_filter_walks_options_and_wraps() {
    let mut app = DashboardApp::new(make_snapshot());

    app.handle_message(&AppMsg::CycleSectorFilter);
    assert!(app.criteria().sectors.contains("Energy"));
    assert_eq!(app.filtered_count(), 1);

    app.handle_message(&AppMsg::CycleSectorFilter);
    assert!(app.criteria().sectors.contains("Information Technology"));
    assert_eq!(app.filtered_count(), 2);

    app.handle_message(&AppMsg::CycleSectorFilter);
    assert!(app.criteria().sectors.is_empty(), "wraps to unconstrained");
    assert_eq!(app.filtered_count(), 3);
}

#[test]
fn year_bounds_filter_and_clamp_cursor() {
    let mut app = DashboardApp::new(make_snapshot());
    app.handle_message(&AppMsg::End);

    // Seed min year at 1900, then raise past the two 1970s companies
    app.handle_message(&AppMsg::RaiseMinYear);
    assert_eq!(app.criteria().min_year, Some(1900));
    assert_eq!(app.filtered_count(), 3);

    for _ in 0..8 {
        app.handle_message(&AppMsg::RaiseMinYear);
    }
    assert_eq!(app.criteria().min_year, Some(1980));
    assert_eq!(app.filtered_count(), 1);
    assert_eq!(app.current_cursor_symbol(), Some("XOM"));
    assert_eq!(app.cursor_position(), 0, "cursor clamped to shorter list");
}

#[test]
fn clear_filters_restores_the_universe() {
    let mut app = DashboardApp::new(make_snapshot());

    app.handle_message(&AppMsg::CycleSectorFilter);
    app.handle_message(&AppMsg::RaiseMinYear);
    assert!(app.filtered_count() < 3);

    app.handle_message(&AppMsg::ClearFilters);
    assert!(app.criteria().is_empty());
    assert_eq!(app.filtered_count(), 3);
}

#[test]
fn select_company_sets_symbol_and_returns_fetch_command() {
    let mut app = DashboardApp::new(make_snapshot());

    let cmd = app.handle_message(&AppMsg::SelectCompany);

    assert!(cmd.is_some());
    assert!(app.loading);
    assert_eq!(
        app.selected_symbol().map(TickerSymbol::as_str),
        Some("AAPL")
    );
}

#[test]
fn select_company_without_rows_is_a_no_op() {
    let mut app = DashboardApp::empty();
    let cmd = app.handle_message(&AppMsg::SelectCompany);
    assert!(cmd.is_none());
    assert!(app.selected_symbol().is_none());
}

#[test]
fn price_series_loaded_chains_financial_fetch() {
    let mut app = DashboardApp::new(make_snapshot());
    app.handle_message(&AppMsg::SelectCompany);

    let symbol = TickerSymbol::new("AAPL").expect("symbol should validate");
    let cmd = app.handle_message(&AppMsg::PriceSeriesLoaded {
        symbol,
        points: vec![price_point(170.0)],
    });

    assert!(cmd.is_some(), "financial fetch should follow");
    assert_eq!(app.prices.len(), 1);
    assert!(app.loading, "loading persists until financials arrive");
}

#[test]
fn price_series_failure_sets_banner_and_still_fetches_financials() {
    let mut app = DashboardApp::new(make_snapshot());
    app.handle_message(&AppMsg::SelectCompany);

    let symbol = TickerSymbol::new("AAPL").expect("symbol should validate");
    let cmd = app.handle_message(&AppMsg::PriceSeriesFailed {
        symbol,
        message: "network error talking to the dashboard API: timed out".to_owned(),
    });

    assert!(cmd.is_some());
    assert!(
        app.error
            .as_deref()
            .is_some_and(|error| error.contains("Failed to load price data"))
    );
}

#[test]
fn financial_series_loaded_clears_loading() {
    let mut app = DashboardApp::new(make_snapshot());
    app.handle_message(&AppMsg::SelectCompany);

    let symbol = TickerSymbol::new("AAPL").expect("symbol should validate");
    app.handle_message(&AppMsg::FinancialSeriesLoaded {
        symbol,
        points: Vec::new(),
    });

    assert!(!app.loading);
    assert!(app.financials.is_empty());
}

#[test]
fn refresh_complete_preserves_cursor_symbol() {
    let mut app = DashboardApp::new(make_snapshot());
    app.handle_message(&AppMsg::CursorDown);
    assert_eq!(app.current_cursor_symbol(), Some("MSFT"));

    // Refreshed universe drops AAPL; MSFT moves to index 0
    let refreshed = DashboardSnapshot {
        options: FilterOptions::default(),
        companies: vec![
            make_company("MSFT", "Information Technology", "1975"),
            make_company("XOM", "Energy", "1999"),
        ],
    };
    app.handle_message(&AppMsg::RefreshComplete(refreshed));

    assert_eq!(app.filtered_count(), 2);
    assert_eq!(app.cursor_position(), 0);
    assert_eq!(app.current_cursor_symbol(), Some("MSFT"));
    assert!(!app.loading);
}

#[test]
fn refresh_failed_shows_error_banner() {
    let mut app = DashboardApp::new(make_snapshot());
    app.handle_message(&AppMsg::RefreshRequested);
    app.handle_message(&AppMsg::RefreshFailed(
        "dashboard API error: company listing request failed with status 503: ".to_owned(),
    ));

    assert!(!app.loading);
    let view = app.view();
    assert!(view.contains("Error:"));
}

#[test]
fn refresh_requested_while_loading_is_ignored() {
    let mut app = DashboardApp::new(make_snapshot());
    let first = app.handle_message(&AppMsg::RefreshRequested);
    assert!(first.is_some());

    let second = app.handle_message(&AppMsg::RefreshRequested);
    assert!(second.is_none(), "duplicate refresh should be skipped");
}

#[test]
fn view_renders_without_panic() {
    let app = DashboardApp::new(make_snapshot());
    let output = app.view();

    assert!(output.contains("S&P 500 Dashboard"));
    assert!(output.contains("Filter: none (3/3)"));
    assert!(output.contains("Companies: 3"));
    assert!(output.contains("AAPL"));
    assert!(output.contains("Press Enter on a company row"));
}

#[test]
fn view_renders_series_panels_after_selection() {
    let mut app = DashboardApp::new(make_snapshot());
    app.handle_message(&AppMsg::SelectCompany);

    let symbol = TickerSymbol::new("AAPL").expect("symbol should validate");
    app.handle_message(&AppMsg::PriceSeriesLoaded {
        symbol: symbol.clone(),
        points: vec![price_point(170.0), price_point(171.5)],
    });
    app.handle_message(&AppMsg::FinancialSeriesLoaded {
        symbol,
        points: Vec::new(),
    });

    let output = app.view();
    assert!(output.contains("Prices: AAPL (2 records)"));
    assert!(output.contains("$170.00"));
    assert!(output.contains("Financials: AAPL (0 records)"));
    assert!(output.contains("No financial data available"));
}

#[test]
fn quit_message_returns_quit_command() {
    let mut app = DashboardApp::empty();
    let cmd = app.handle_message(&AppMsg::Quit);
    assert!(cmd.is_some());
}

#[test]
fn toggle_help_shows_and_hides_overlay() {
    let mut app = DashboardApp::empty();
    assert!(!app.show_help);

    app.handle_message(&AppMsg::ToggleHelp);
    assert!(app.show_help);

    let view = app.view();
    assert!(view.contains("Keyboard Shortcuts"));

    app.handle_message(&AppMsg::ToggleHelp);
    assert!(!app.show_help);
}

#[test]
fn resize_adjusts_table_height() {
    let mut app = DashboardApp::empty();
    app.handle_message(&AppMsg::WindowResized {
        width: 120,
        height: 50,
    });
    assert_eq!(app.company_table.visible_height(), 22);

    app.handle_message(&AppMsg::WindowResized {
        width: 120,
        height: 10,
    });
    assert_eq!(
        app.company_table.visible_height(),
        4,
        "height never collapses below the minimum"
    );
}

#[test]
fn cycle_value_wraps_and_recovers_from_stale_values() {
    let options = vec!["A".to_owned(), "B".to_owned()];

    assert_eq!(cycle_value(None, &options), Some("A".to_owned()));
    assert_eq!(
        cycle_value(Some(&"A".to_owned()), &options),
        Some("B".to_owned())
    );
    assert_eq!(cycle_value(Some(&"B".to_owned()), &options), None);
    assert_eq!(
        cycle_value(Some(&"stale".to_owned()), &options),
        Some("A".to_owned())
    );
}
