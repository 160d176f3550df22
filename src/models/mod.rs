//! Core data models for means-test
//!
//! Value objects describing a household and its income: money in cents,
//! calendar month keys, the household profile and monthly income entries.

pub mod household;
pub mod income;
pub mod money;
pub mod period;

pub use household::HouseholdProfile;
pub use income::{IncomeSource, IncomeValidationError, MonthlyIncomeEntry};
pub use money::{Money, MoneyParseError};
pub use period::{IncomeMonth, PeriodParseError};
