//! Household profile model
//!
//! The facts about a debtor's household that drive both the median-income
//! comparison and the IRS allowance lookups.

use serde::{Deserialize, Serialize};

use crate::error::{MeansTestError, MeansTestResult};

/// Vehicle allowances are only ever claimed for up to two vehicles
pub const MAX_ALLOWANCE_VEHICLES: u32 = 2;

/// Age at which a household member moves to the 65-and-older health care rate
pub const SENIOR_AGE: u32 = 65;

/// Household facts supplied by intake
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdProfile {
    /// Two-letter state code (or full state name), case-insensitive
    pub state: String,

    /// County name as entered ("Los Angeles County", "cook", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,

    /// Persons counted for allowance and median purposes
    pub household_size: u32,

    /// Age of the primary debtor
    pub primary_age: u32,

    /// Vehicles owned or leased; only up to two earn an allowance
    #[serde(default)]
    pub vehicle_count: u32,

    /// Only meaningful when no vehicle is owned
    #[serde(default)]
    pub uses_public_transportation: bool,

    /// Optional per-member age roster used for the health care allowance
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub member_ages: Vec<u32>,
}

impl HouseholdProfile {
    /// Create a profile with no vehicles and no county
    pub fn new(state: impl Into<String>, household_size: u32, primary_age: u32) -> Self {
        Self {
            state: state.into(),
            county: None,
            household_size,
            primary_age,
            vehicle_count: 0,
            uses_public_transportation: false,
            member_ages: Vec::new(),
        }
    }

    /// Set the county of residence
    pub fn with_county(mut self, county: impl Into<String>) -> Self {
        self.county = Some(county.into());
        self
    }

    /// Set the number of vehicles
    pub fn with_vehicles(mut self, vehicle_count: u32) -> Self {
        self.vehicle_count = vehicle_count;
        self
    }

    /// Mark the household as relying on public transportation
    pub fn with_public_transportation(mut self, uses: bool) -> Self {
        self.uses_public_transportation = uses;
        self
    }

    /// Supply the ages of each household member
    pub fn with_member_ages(mut self, ages: Vec<u32>) -> Self {
        self.member_ages = ages;
        self
    }

    /// Vehicle count clamped to the number the allowance tables cover
    pub fn allowance_vehicle_count(&self) -> u32 {
        self.vehicle_count.min(MAX_ALLOWANCE_VEHICLES)
    }

    /// Validate the profile
    pub fn validate(&self) -> MeansTestResult<()> {
        if self.household_size == 0 {
            return Err(MeansTestError::Validation(
                "Household size must be at least 1".into(),
            ));
        }
        if self.state.trim().is_empty() {
            return Err(MeansTestError::Validation("State is required".into()));
        }
        if self.member_ages.len() > self.household_size as usize {
            return Err(MeansTestError::Validation(format!(
                "Member age roster lists {} people but household size is {}",
                self.member_ages.len(),
                self.household_size
            )));
        }
        Ok(())
    }

    /// Number of members counted at the 65-and-older health care rate
    ///
    /// With a roster, members are classified by age. Without one, one in
    /// four members is assumed to be 65 or older, and at least one when the
    /// primary debtor is.
    pub fn members_age_65_or_older(&self) -> u32 {
        if !self.member_ages.is_empty() {
            return self
                .member_ages
                .iter()
                .filter(|age| **age >= SENIOR_AGE)
                .count() as u32;
        }

        let mut seniors = self.household_size / 4;
        if self.primary_age >= SENIOR_AGE {
            seniors = seniors.max(1);
        }
        seniors.min(self.household_size)
    }
}
