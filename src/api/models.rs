//! Data models representing companies, time series, and filter options.
//!
//! Domain structs carry the short field names used throughout the crate; the
//! `Api*` structs mirror the backend's wire format (GICS-prefixed company
//! fields, `subIndustries` in the options payload) and convert via `From`.

use chrono::NaiveDate;
use serde::Deserialize;

/// One S&P 500 constituent company.
///
/// Immutable once fetched; a record lives for one fetch cycle and is replaced
/// wholesale on refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    /// Stock exchange ticker symbol, the unique key for all lookups.
    pub symbol: String,
    /// Security (company) name.
    pub security: String,
    /// GICS sector classification.
    pub sector: String,
    /// GICS sub-industry classification.
    pub sub_industry: String,
    /// Headquarters location.
    pub headquarters_location: String,
    /// Date the company was added to the index, when known.
    pub date_added: Option<NaiveDate>,
    /// SEC Central Index Key identifier.
    pub cik: u64,
    /// Founding year as free text; often a 4-digit year, sometimes
    /// annotated (`"2013 (1888)"`) or unparsable (`"unknown"`).
    pub founded: String,
}

impl Company {
    /// Parses the founding year from the leading decimal digits of the
    /// `founded` text.
    ///
    /// Annotated values such as `"2013 (1888)"` parse as 2013; values with
    /// no leading digits yield `None`, which exempts the company from any
    /// founded-year bounds. That exemption mirrors the behaviour of the
    /// original front end and is a documented quirk rather than a
    /// correctness guarantee.
    #[must_use]
    pub fn founded_year(&self) -> Option<i32> {
        let digits: String = self
            .founded
            .trim()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().ok()
    }
}

/// One point of a per-symbol price series.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    /// Observation date.
    pub date: NaiveDate,
    /// Ticker symbol the observation belongs to.
    pub ticker: String,
    /// Metric name (e.g. `Close`, `Volume`).
    pub metric: String,
    /// Observed value.
    pub value: f64,
}

/// One point of a per-symbol quarterly financials series.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialPoint {
    /// Reporting date.
    pub date: NaiveDate,
    /// Ticker symbol the record belongs to.
    pub ticker: String,
    /// Reported variable name (e.g. `Total Revenue`).
    pub variable: String,
    /// Reported value; the backend serves null for unavailable figures.
    pub value: Option<f64>,
}

/// Selectable values served by the filter-options endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// All selectable ticker symbols.
    pub symbols: Vec<String>,
    /// All selectable GICS sectors.
    pub sectors: Vec<String>,
    /// All selectable GICS sub-industries.
    pub sub_industries: Vec<String>,
}

/// Server-side scoping for a company listing read.
///
/// Each populated field is sent as a repeated bracketed query key; an empty
/// field places no constraint. The interactive dashboard fetches unscoped
/// and filters client-side, while snapshot mode scopes by symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyScope {
    /// Ticker symbols to restrict the listing to.
    pub symbols: Vec<String>,
    /// GICS sectors to restrict the listing to.
    pub sectors: Vec<String>,
    /// GICS sub-industries to restrict the listing to.
    pub sub_industries: Vec<String>,
}

impl CompanyScope {
    /// Scope restricted to a single ticker symbol.
    #[must_use]
    pub fn for_symbol(symbol: &str) -> Self {
        Self {
            symbols: vec![symbol.to_owned()],
            ..Self::default()
        }
    }

    /// Returns true when no field constrains the listing.
    #[must_use]
    pub fn is_unscoped(&self) -> bool {
        self.symbols.is_empty() && self.sectors.is_empty() && self.sub_industries.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiCompany {
    pub(super) symbol: String,
    pub(super) security: String,
    pub(super) gics_sector: String,
    pub(super) gics_sub_industry: String,
    pub(super) headquarters_location: String,
    pub(super) date_added: Option<NaiveDate>,
    pub(super) cik: u64,
    pub(super) founded: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPricePoint {
    pub(super) date: NaiveDate,
    pub(super) ticker: String,
    pub(super) metric: String,
    pub(super) value: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiFinancialPoint {
    pub(super) date: NaiveDate,
    pub(super) ticker: String,
    pub(super) variable: String,
    pub(super) value: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiFilterOptions {
    pub(super) symbols: Vec<String>,
    pub(super) sectors: Vec<String>,
    #[serde(rename = "subIndustries")]
    pub(super) sub_industries: Vec<String>,
}

impl From<ApiCompany> for Company {
    fn from(value: ApiCompany) -> Self {
        Self {
            symbol: value.symbol,
            security: value.security,
            sector: value.gics_sector,
            sub_industry: value.gics_sub_industry,
            headquarters_location: value.headquarters_location,
            date_added: value.date_added,
            cik: value.cik,
            founded: value.founded,
        }
    }
}

impl From<ApiPricePoint> for PricePoint {
    fn from(value: ApiPricePoint) -> Self {
        Self {
            date: value.date,
            ticker: value.ticker,
            metric: value.metric,
            value: value.value,
        }
    }
}

impl From<ApiFinancialPoint> for FinancialPoint {
    fn from(value: ApiFinancialPoint) -> Self {
        Self {
            date: value.date,
            ticker: value.ticker,
            variable: value.variable,
            value: value.value,
        }
    }
}

impl From<ApiFilterOptions> for FilterOptions {
    fn from(value: ApiFilterOptions) -> Self {
        Self {
            symbols: value.symbols,
            sectors: value.sectors,
            sub_industries: value.sub_industries,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn company_founded(founded: &str) -> Company {
        Company {
            symbol: "TEST".to_owned(),
            security: "Test Corp".to_owned(),
            sector: "Industrials".to_owned(),
            sub_industry: "Building Products".to_owned(),
            headquarters_location: "Chicago, Illinois".to_owned(),
            date_added: None,
            cik: 1,
            founded: founded.to_owned(),
        }
    }

    #[rstest]
    #[case::plain_year("1976", Some(1976))]
    #[case::annotated_year("2013 (1888)", Some(2013))]
    #[case::padded_year("  1902 ", Some(1902))]
    #[case::unknown("unknown", None)]
    #[case::empty("", None)]
    #[case::leading_text("circa 1900", None)]
    fn founded_year_takes_leading_digits(#[case] founded: &str, #[case] expected: Option<i32>) {
        assert_eq!(company_founded(founded).founded_year(), expected);
    }

    #[test]
    fn company_wire_format_uses_gics_field_names() {
        let payload = serde_json::json!({
            "id": 7,
            "symbol": "MMM",
            "security": "3M",
            "gics_sector": "Industrials",
            "gics_sub_industry": "Industrial Conglomerates",
            "headquarters_location": "Saint Paul, Minnesota",
            "date_added": "1957-03-04",
            "cik": 66740,
            "founded": "1902"
        });

        let api: ApiCompany =
            serde_json::from_value(payload).expect("company payload should deserialise");
        let company = Company::from(api);

        assert_eq!(company.symbol, "MMM");
        assert_eq!(company.sector, "Industrials");
        assert_eq!(company.sub_industry, "Industrial Conglomerates");
        assert_eq!(
            company.date_added,
            NaiveDate::from_ymd_opt(1957, 3, 4)
        );
        assert_eq!(company.cik, 66740);
    }

    #[test]
    fn filter_options_wire_format_uses_camel_case_sub_industries() {
        let payload = serde_json::json!({
            "symbols": ["AAPL"],
            "sectors": ["Information Technology"],
            "subIndustries": ["Technology Hardware, Storage & Peripherals"]
        });

        let api: ApiFilterOptions =
            serde_json::from_value(payload).expect("options payload should deserialise");
        let options = FilterOptions::from(api);

        assert_eq!(options.sub_industries.len(), 1);
    }

    #[test]
    fn financial_point_accepts_null_value() {
        let payload = serde_json::json!({
            "id": 1,
            "date": "2023-06-30",
            "ticker": "AAPL",
            "variable": "Total Revenue",
            "value": null
        });

        let api: ApiFinancialPoint =
            serde_json::from_value(payload).expect("financial payload should deserialise");
        assert_eq!(FinancialPoint::from(api).value, None);
    }

    #[test]
    fn scope_for_symbol_constrains_only_symbols() {
        let scope = CompanyScope::for_symbol("AAPL");
        assert!(!scope.is_unscoped());
        assert_eq!(scope.symbols, vec!["AAPL".to_owned()]);
        assert!(scope.sectors.is_empty());
    }
}
