//! IRS allowance aggregation
//!
//! Sums the National Standards, housing and utilities, transportation and
//! out-of-pocket health care allowances for a household.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::housing::HousingService;
use super::transportation::{TransportationAllowance, TransportationService};
use crate::error::MeansTestResult;
use crate::models::{HouseholdProfile, Money};
use crate::standards::StandardsTables;

/// Monthly IRS allowances for a household
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrsAllowances {
    pub national_standards: Money,
    pub housing_utilities: Money,
    pub transportation: TransportationAllowance,
    pub health_care: Money,
    pub total: Money,
    /// Housing came from an explicit county figure
    pub using_county_data: bool,
    /// Operating cost came from a named metro area
    pub using_metro_data: bool,
}

/// Service for allowance aggregation
pub struct AllowanceService<'a> {
    tables: &'a StandardsTables,
}

impl<'a> AllowanceService<'a> {
    /// Create a new allowance service
    pub fn new(tables: &'a StandardsTables) -> Self {
        Self { tables }
    }

    /// Calculate all allowances for a validated household profile
    pub fn calculate(&self, profile: &HouseholdProfile) -> MeansTestResult<IrsAllowances> {
        profile.validate()?;

        let size = profile.household_size;
        let county = profile.county.as_deref();

        let national_standards = self.tables.national_standard_total(size);
        let housing = HousingService::new(self.tables).resolve(&profile.state, county, size);
        let transportation = TransportationService::new(self.tables).calculate(
            &profile.state,
            county,
            profile.allowance_vehicle_count(),
            profile.uses_public_transportation,
        );
        let health_care = self
            .tables
            .health_care_total(size, profile.members_age_65_or_older());

        let total = national_standards + housing.amount + transportation.total + health_care;

        debug!(
            household_size = size,
            national = %national_standards,
            housing = %housing.amount,
            transportation = %transportation.total,
            health_care = %health_care,
            total = %total,
            "calculated IRS allowances"
        );

        Ok(IrsAllowances {
            national_standards,
            housing_utilities: housing.amount,
            using_county_data: housing.using_county_data(),
            using_metro_data: transportation.using_metro_data,
            transportation,
            health_care,
            total,
        })
    }
}
