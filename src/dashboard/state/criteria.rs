//! Immutable filter criteria for the company universe.
//!
//! The criteria are an explicit struct passed into the filter rather than
//! ambient UI state, keeping the filter pure and independently testable.
//! Filtering is order-preserving, side-effect-free predicate application:
//! the result is always a subset of the input in input order.

use std::collections::HashSet;

use crate::api::models::Company;

/// First value taken by the minimum founded-year bound when seeded.
const MIN_YEAR_SEED: i32 = 1900;
/// First value taken by the maximum founded-year bound when seeded.
const MAX_YEAR_SEED: i32 = 2000;
/// Year-bound adjustment per key press.
const YEAR_STEP: i32 = 10;
/// Stepping a bound outside this range clears it.
const YEAR_FLOOR: i32 = 1600;
/// Upper end of the steppable year range.
const YEAR_CEILING: i32 = 2100;

/// Filter criteria over the company universe.
///
/// An empty set places no constraint on its field; unset year bounds place
/// no constraint on the founding year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Ticker symbols to keep.
    pub symbols: HashSet<String>,
    /// GICS sectors to keep.
    pub sectors: HashSet<String>,
    /// GICS sub-industries to keep.
    pub sub_industries: HashSet<String>,
    /// Headquarters locations to keep.
    pub locations: HashSet<String>,
    /// Minimum founding year, inclusive.
    pub min_year: Option<i32>,
    /// Maximum founding year, inclusive.
    pub max_year: Option<i32>,
}

impl FilterCriteria {
    /// Creates criteria with every field unconstrained.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when no field constrains the universe.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
            && self.sectors.is_empty()
            && self.sub_industries.is_empty()
            && self.locations.is_empty()
            && self.min_year.is_none()
            && self.max_year.is_none()
    }

    /// Returns true if the company satisfies every active criterion.
    ///
    /// Companies whose `founded` text has no leading digits are exempt from
    /// the year bounds — they pass regardless of `min_year`/`max_year`. This
    /// mirrors the original front end and is a documented quirk rather than
    /// a correctness guarantee.
    #[must_use]
    pub fn matches(&self, company: &Company) -> bool {
        if !self.symbols.is_empty() && !self.symbols.contains(&company.symbol) {
            return false;
        }
        if !self.sectors.is_empty() && !self.sectors.contains(&company.sector) {
            return false;
        }
        if !self.sub_industries.is_empty() && !self.sub_industries.contains(&company.sub_industry)
        {
            return false;
        }
        if !self.locations.is_empty() && !self.locations.contains(&company.headquarters_location)
        {
            return false;
        }

        if let Some(year) = company.founded_year() {
            if self.min_year.is_some_and(|min| year < min) {
                return false;
            }
            if self.max_year.is_some_and(|max| year > max) {
                return false;
            }
        }

        true
    }

    /// Applies the criteria to a slice of companies.
    ///
    /// The result preserves input ordering and borrows from the input; it is
    /// always a (possibly empty) subset and the call never fails.
    #[must_use]
    pub fn filter<'a>(&self, companies: &'a [Company]) -> Vec<&'a Company> {
        companies
            .iter()
            .filter(|company| self.matches(company))
            .collect()
    }

    /// Toggles a symbol's membership in the symbol criterion.
    pub fn toggle_symbol(&mut self, symbol: &str) {
        if !self.symbols.remove(symbol) {
            self.symbols.insert(symbol.to_owned());
        }
    }

    /// Replaces the sector criterion with a single value, or clears it.
    pub fn set_sector(&mut self, sector: Option<String>) {
        self.sectors = sector.into_iter().collect();
    }

    /// Replaces the sub-industry criterion with a single value, or clears it.
    pub fn set_sub_industry(&mut self, sub_industry: Option<String>) {
        self.sub_industries = sub_industry.into_iter().collect();
    }

    /// Replaces the location criterion with a single value, or clears it.
    pub fn set_location(&mut self, location: Option<String>) {
        self.locations = location.into_iter().collect();
    }

    /// Steps the minimum founded-year bound.
    ///
    /// The first step seeds the bound at 1900; each further step moves it by
    /// ten years per unit, and stepping outside the 1600–2100 range clears
    /// the bound again.
    pub fn step_min_year(&mut self, steps: i32) {
        self.min_year = step_year(self.min_year, MIN_YEAR_SEED, steps);
    }

    /// Steps the maximum founded-year bound.
    ///
    /// Same semantics as [`Self::step_min_year`], seeded at 2000.
    pub fn step_max_year(&mut self, steps: i32) {
        self.max_year = step_year(self.max_year, MAX_YEAR_SEED, steps);
    }

    /// Clears every criterion.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns a human-readable summary for display in the filter bar.
    #[must_use]
    pub fn label(&self) -> String {
        if self.is_empty() {
            return "none".to_owned();
        }

        let mut parts = Vec::new();
        if !self.symbols.is_empty() {
            parts.push(format!("symbols: {}", self.symbols.len()));
        }
        if let Some(part) = set_label("sector", &self.sectors) {
            parts.push(part);
        }
        if let Some(part) = set_label("sub-industry", &self.sub_industries) {
            parts.push(part);
        }
        if let Some(part) = set_label("location", &self.locations) {
            parts.push(part);
        }
        if self.min_year.is_some() || self.max_year.is_some() {
            let min = self
                .min_year
                .map_or_else(String::new, |year| year.to_string());
            let max = self
                .max_year
                .map_or_else(String::new, |year| year.to_string());
            parts.push(format!("founded: {min}..{max}"));
        }
        parts.join("  ")
    }
}

/// Formats a single-select criterion for the filter bar.
fn set_label(name: &str, values: &HashSet<String>) -> Option<String> {
    let mut sorted: Vec<&String> = values.iter().collect();
    sorted.sort();
    match sorted.as_slice() {
        [] => None,
        [only] => Some(format!("{name}: {only}")),
        many => Some(format!("{name}: {} selected", many.len())),
    }
}

/// Steps an optional year bound, seeding it on first use and clearing it
/// when stepped outside the supported range.
fn step_year(current: Option<i32>, seed: i32, steps: i32) -> Option<i32> {
    let next = match current {
        Some(year) => year.saturating_add(steps.saturating_mul(YEAR_STEP)),
        None => seed,
    };
    (YEAR_FLOOR..=YEAR_CEILING).contains(&next).then_some(next)
}
