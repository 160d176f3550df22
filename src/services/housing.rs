//! Housing and utilities allowance
//!
//! Resolves the IRS Local Standard for housing and utilities: the county
//! figure when the tables carry one, otherwise the statewide figure,
//! otherwise a national default.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Money;
use crate::standards::{normalize_county, normalize_state, HousingDataLevel, StandardsTables};

/// Service for housing allowance lookups
pub struct HousingService<'a> {
    tables: &'a StandardsTables,
}

/// Resolved housing allowance and where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousingAllowance {
    pub amount: Money,
    pub level: HousingDataLevel,
}

impl HousingAllowance {
    /// True when an explicit county figure was used
    pub fn using_county_data(&self) -> bool {
        self.level == HousingDataLevel::County
    }
}

impl<'a> HousingService<'a> {
    /// Create a new housing service
    pub fn new(tables: &'a StandardsTables) -> Self {
        Self { tables }
    }

    /// Monthly housing and utilities allowance for a household
    pub fn resolve(&self, state: &str, county: Option<&str>, household_size: u32) -> HousingAllowance {
        let (bracket, level) = self.tables.housing_bracket(state, county);
        let amount = bracket.for_household(household_size);

        if level != HousingDataLevel::County {
            debug!(
                state = %normalize_state(state),
                county = ?county.and_then(normalize_county),
                ?level,
                "no county housing figure, using fallback"
            );
        }

        HousingAllowance { amount, level }
    }

    /// Whether the tables carry an explicit figure for this county
    pub fn has_county_data(&self, state: &str, county: Option<&str>) -> bool {
        self.tables.has_county_data(state, county)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_county_figure_used() {
        let tables = StandardsTables::builtin();
        let service = HousingService::new(&tables);

        let housing = service.resolve("CA", Some("Los Angeles County"), 2);
        assert_eq!(housing.level, HousingDataLevel::County);
        assert!(housing.using_county_data());
        assert_eq!(
            housing.amount,
            tables.county_housing["CA"]["LOS ANGELES"].for_household(2)
        );
    }

    #[test]
    fn test_state_default_for_unlisted_county() {
        let tables = StandardsTables::builtin();
        let service = HousingService::new(&tables);

        let housing = service.resolve("tx", Some("Lubbock"), 3);
        assert_eq!(housing.level, HousingDataLevel::State);
        assert!(!housing.using_county_data());
        assert_eq!(housing.amount, tables.state_housing["TX"].for_household(3));
    }

    #[test]
    fn test_national_default_for_unmapped_state() {
        let tables = StandardsTables::builtin();
        let service = HousingService::new(&tables);

        let housing = service.resolve("VI", None, 1);
        assert_eq!(housing.level, HousingDataLevel::National);
        assert_eq!(housing.amount, tables.national_housing.for_household(1));
    }

    #[test]
    fn test_large_household_reuses_last_bucket() {
        let tables = StandardsTables::builtin();
        let service = HousingService::new(&tables);

        let five = service.resolve("IL", Some("Cook"), 5).amount;
        let eight = service.resolve("IL", Some("Cook"), 8).amount;
        assert_eq!(five, eight);
    }

    #[test]
    fn test_has_county_data() {
        let tables = StandardsTables::builtin();
        let service = HousingService::new(&tables);

        assert!(service.has_county_data("NY", Some("Kings")));
        assert!(!service.has_county_data("NY", Some("Erie")));
        assert!(!service.has_county_data("NY", None));
    }
}
