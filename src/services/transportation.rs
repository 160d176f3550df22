//! Transportation allowance
//!
//! Mirrors the three transportation lines of Official Form 122A-2:
//! vehicle ownership and public transit are nationally uniform, operating
//! cost is the only local figure. Operating cost comes from the county's
//! metro area when it has one and from the state's Census region otherwise.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::household::MAX_ALLOWANCE_VEHICLES;
use crate::models::Money;
use crate::standards::{Region, StandardsTables};

/// Service for transportation allowance calculations
pub struct TransportationService<'a> {
    tables: &'a StandardsTables,
}

/// Transportation allowance breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportationAllowance {
    pub ownership: Money,
    pub operating: Money,
    pub public_transit: Money,
    pub total: Money,
    pub region: Region,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metro_area: Option<String>,
    pub using_metro_data: bool,
}

impl<'a> TransportationService<'a> {
    /// Create a new transportation service
    pub fn new(tables: &'a StandardsTables) -> Self {
        Self { tables }
    }

    /// Calculate the monthly transportation allowance
    ///
    /// `vehicle_count` is clamped to two. The public transportation flag
    /// only matters for households without a vehicle.
    pub fn calculate(
        &self,
        state: &str,
        county: Option<&str>,
        vehicle_count: u32,
        uses_public_transportation: bool,
    ) -> TransportationAllowance {
        let vehicles = vehicle_count.min(MAX_ALLOWANCE_VEHICLES);
        let region = self.tables.region_for_state(state);

        if vehicles == 0 {
            let public_transit = if uses_public_transportation {
                self.tables.public_transit
            } else {
                Money::zero()
            };
            return TransportationAllowance {
                ownership: Money::zero(),
                operating: Money::zero(),
                public_transit,
                total: public_transit,
                region,
                metro_area: None,
                using_metro_data: false,
            };
        }

        let ownership = self.tables.vehicle_ownership.for_vehicles(vehicles);
        let (operating, metro_area) = match self.tables.metro_area_for(state, county) {
            Some((name, metro)) => (metro.operating.for_vehicles(vehicles), Some(name.to_string())),
            None => {
                debug!(%region, "no metro area for county, using regional operating cost");
                (
                    self.tables
                        .regional_operating
                        .for_region(region)
                        .for_vehicles(vehicles),
                    None,
                )
            }
        };

        TransportationAllowance {
            ownership,
            operating,
            public_transit: Money::zero(),
            total: ownership + operating,
            region,
            using_metro_data: metro_area.is_some(),
            metro_area,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_vehicle_no_transit_is_zero() {
        let tables = StandardsTables::builtin();
        let t = TransportationService::new(&tables).calculate("CA", Some("Los Angeles"), 0, false);
        assert_eq!(t.total, Money::zero());
        assert_eq!(t.ownership, Money::zero());
        assert_eq!(t.operating, Money::zero());
        assert_eq!(t.public_transit, Money::zero());
        assert!(!t.using_metro_data);
    }

    #[test]
    fn test_no_vehicle_with_transit() {
        let tables = StandardsTables::builtin();
        let t = TransportationService::new(&tables).calculate("NY", Some("Kings"), 0, true);
        assert_eq!(t.public_transit, tables.public_transit);
        assert_eq!(t.total, tables.public_transit);
        assert_eq!(t.ownership, Money::zero());
        assert_eq!(t.operating, Money::zero());
    }

    #[test]
    fn test_one_vehicle_in_metro_county() {
        let tables = StandardsTables::builtin();
        let t = TransportationService::new(&tables).calculate("ca", Some("Los Angeles County"), 1, false);
        assert_eq!(t.operating, tables.metro_areas["Los Angeles"].operating.one_vehicle);
        assert_eq!(t.ownership, tables.vehicle_ownership.one_vehicle);
        assert_eq!(t.total, t.ownership + t.operating);
        assert_eq!(t.metro_area.as_deref(), Some("Los Angeles"));
        assert!(t.using_metro_data);
        assert_eq!(t.region, Region::West);
    }

    #[test]
    fn test_one_vehicle_outside_metro() {
        let tables = StandardsTables::builtin();
        let t = TransportationService::new(&tables).calculate("IL", Some("Sangamon"), 1, false);
        assert_eq!(t.operating, tables.regional_operating.midwest.one_vehicle);
        assert_eq!(t.region, Region::Midwest);
        assert_eq!(t.metro_area, None);
        assert!(!t.using_metro_data);
    }

    #[test]
    fn test_vehicle_count_clamped_to_two() {
        let tables = StandardsTables::builtin();
        let service = TransportationService::new(&tables);
        let two = service.calculate("TX", Some("Harris"), 2, false);
        let four = service.calculate("TX", Some("Harris"), 4, false);
        assert_eq!(two, four);
        assert_eq!(two.ownership, tables.vehicle_ownership.two_vehicles);
        assert_eq!(two.operating, tables.metro_areas["Houston"].operating.two_vehicles);
    }

    #[test]
    fn test_transit_flag_ignored_with_vehicle() {
        let tables = StandardsTables::builtin();
        let t = TransportationService::new(&tables).calculate("WA", Some("King"), 1, true);
        assert_eq!(t.public_transit, Money::zero());
    }

    #[test]
    fn test_unmapped_state_defaults_to_south() {
        let tables = StandardsTables::builtin();
        let t = TransportationService::new(&tables).calculate("PR", None, 1, false);
        assert_eq!(t.region, Region::South);
        assert_eq!(t.operating, tables.regional_operating.south.one_vehicle);
    }
}
