//! Reference tables for the means test
//!
//! This module holds the immutable, versioned data the engine reads:
//! national and local IRS standards, state median incomes and the
//! geography that links states and counties to regions, metro areas and
//! housing brackets.

mod builtin;
pub mod geography;
pub mod tables;

pub use geography::{normalize_county, normalize_state, Region};
pub use tables::{
    HealthCareRates, HousingBracket, HousingDataLevel, MedianIncomeRow, MetroArea,
    NationalStandards, PresumptionThresholds, RegionalOperatingCosts, StandardsTables,
    VehicleRates,
};
