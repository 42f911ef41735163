//! High-level intake facade used by the CLI and dashboard start-up.

use super::error::DashboardError;
use super::gateway::MarketDataGateway;
use super::models::{Company, CompanyScope, FilterOptions};

/// Filter options plus the company universe loaded in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSnapshot {
    /// Selectable filter options.
    pub options: FilterOptions,
    /// Companies matching the requested scope.
    pub companies: Vec<Company>,
}

/// Aggregates filter options and companies using a gateway.
pub struct DashboardIntake<'client, Gateway>
where
    Gateway: MarketDataGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> DashboardIntake<'client, Gateway>
where
    Gateway: MarketDataGateway,
{
    /// Create a new intake facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Load the filter options and the company listing for the given scope.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway, including API
    /// status errors and network problems.
    pub async fn load(&self, scope: &CompanyScope) -> Result<DashboardSnapshot, DashboardError> {
        let options: FilterOptions = self.client.filter_options().await?;
        let companies: Vec<Company> = self.client.companies(scope).await?;
        Ok(DashboardSnapshot { options, companies })
    }
}
