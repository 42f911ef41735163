//! State management for the dashboard TUI.
//!
//! This module provides the core state types: the pure company filter
//! criteria and the cursor/scroll state over the filtered listing.

mod criteria;
mod filter_state;

pub use criteria::FilterCriteria;
pub use filter_state::FilterState;
