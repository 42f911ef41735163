//! Overview statistics for the filtered company universe.
//!
//! Mirrors the dashboard's summary cards: total companies plus unique
//! sector and sub-industry counts, computed by set deduplication.

use std::collections::HashSet;

use crate::api::models::Company;

/// Renders the one-line statistics row for the given companies.
pub(crate) fn render_stats_row(companies: &[&Company]) -> String {
    let sectors: HashSet<&str> = companies.iter().map(|c| c.sector.as_str()).collect();
    let sub_industries: HashSet<&str> = companies
        .iter()
        .map(|c| c.sub_industry.as_str())
        .collect();

    format!(
        "Companies: {}   Sectors: {}   Sub-industries: {}\n",
        companies.len(),
        sectors.len(),
        sub_industries.len()
    )
}
