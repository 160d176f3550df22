//! The versioned standards table set
//!
//! A `StandardsTables` value holds every figure the engine reads: IRS
//! National and Local Standards, Census median incomes and the
//! presumption-of-abuse thresholds. A new year's figures replace the whole
//! set at once; nothing here mutates after construction.
//!
//! Lookups never fail. Missing geography resolves to a state, regional or
//! national figure and the caller is told which level answered.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::geography::{normalize_county_opt, normalize_state, Region};
use crate::error::{MeansTestError, MeansTestResult};
use crate::models::Money;

/// National Standards totals (food, clothing, housekeeping, personal care,
/// miscellaneous) by household size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalStandards {
    /// Households of one to four persons
    pub by_size: [Money; 4],
    /// Added for each person beyond four
    pub additional_person: Money,
}

impl NationalStandards {
    pub fn total_for(&self, household_size: u32) -> Money {
        let size = household_size.max(1);
        if size <= 4 {
            self.by_size[(size - 1) as usize]
        } else {
            self.by_size[3] + self.additional_person.times(i64::from(size - 4))
        }
    }
}

/// Out-of-pocket health care allowance per person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCareRates {
    pub under_65: Money,
    pub age_65_or_older: Money,
}

/// Median family income row: `[1, 2, 3, 4 persons, each additional person]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MedianIncomeRow(pub [Money; 5]);

impl MedianIncomeRow {
    pub fn for_household(&self, household_size: u32) -> Money {
        let size = household_size.max(1);
        if size <= 4 {
            self.0[(size - 1) as usize]
        } else {
            self.0[3] + self.0[4].times(i64::from(size - 4))
        }
    }
}

/// Monthly amounts for one and for two vehicles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRates {
    pub one_vehicle: Money,
    pub two_vehicles: Money,
}

impl VehicleRates {
    /// Rate for a clamped vehicle count; zero vehicles earn nothing
    pub fn for_vehicles(&self, vehicle_count: u32) -> Money {
        match vehicle_count {
            0 => Money::zero(),
            1 => self.one_vehicle,
            _ => self.two_vehicles,
        }
    }
}

/// Baseline operating costs for each Census region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalOperatingCosts {
    pub northeast: VehicleRates,
    pub midwest: VehicleRates,
    pub south: VehicleRates,
    pub west: VehicleRates,
}

impl RegionalOperatingCosts {
    pub fn for_region(&self, region: Region) -> &VehicleRates {
        match region {
            Region::Northeast => &self.northeast,
            Region::Midwest => &self.midwest,
            Region::South => &self.south,
            Region::West => &self.west,
        }
    }
}

/// A named Metropolitan Statistical Area with its own operating costs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetroArea {
    pub region: Region,
    pub operating: VehicleRates,
}

/// Housing and utilities allowance by household size bucket (1..=5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HousingBracket(pub [Money; 5]);

impl HousingBracket {
    /// Households larger than the last bucket reuse its value
    pub fn for_household(&self, household_size: u32) -> Money {
        let index = (household_size.max(1) as usize - 1).min(self.0.len() - 1);
        self.0[index]
    }
}

/// Which level of the housing table answered a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HousingDataLevel {
    County,
    State,
    National,
}

/// Presumption-of-abuse thresholds (11 U.S.C. § 707(b)(2)(A)(i))
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresumptionThresholds {
    /// Sixty-month disposable income at or above which abuse is presumed
    pub upper_sixty_month: Money,
    /// Share of nonpriority unsecured debt, in percent
    pub unsecured_debt_percent: u32,
}

/// Complete set of reference figures for one effective date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardsTables {
    /// First filing date these figures apply to
    pub effective_date: NaiveDate,
    /// Human-readable provenance label
    pub source: String,

    pub national_standards: NationalStandards,
    pub health_care: HealthCareRates,

    /// State code -> median family income row
    pub median_income: BTreeMap<String, MedianIncomeRow>,
    /// Conservative estimate used for states missing from `median_income`
    pub national_median_income: MedianIncomeRow,

    pub vehicle_ownership: VehicleRates,
    pub public_transit: Money,
    pub regional_operating: RegionalOperatingCosts,
    /// Metro area name -> operating costs
    pub metro_areas: BTreeMap<String, MetroArea>,
    /// State code -> normalized county -> metro area name
    pub county_metro: BTreeMap<String, BTreeMap<String, String>>,
    /// State code -> Census region
    pub state_regions: BTreeMap<String, Region>,

    /// State code -> normalized county -> housing bracket
    pub county_housing: BTreeMap<String, BTreeMap<String, HousingBracket>>,
    /// State code -> statewide housing bracket
    pub state_housing: BTreeMap<String, HousingBracket>,
    pub national_housing: HousingBracket,

    pub presumption: PresumptionThresholds,
}

impl StandardsTables {
    /// Load a table set from a JSON file and check it for consistency
    pub fn from_json_file(path: &Path) -> MeansTestResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            MeansTestError::Io(format!(
                "Failed to read standards file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&contents)
    }

    /// Parse a table set from JSON and check it for consistency
    pub fn from_json_str(contents: &str) -> MeansTestResult<Self> {
        let tables: StandardsTables = serde_json::from_str(contents)
            .map_err(|e| MeansTestError::Tables(format!("Failed to parse standards: {}", e)))?;
        tables.validate()?;
        Ok(tables)
    }

    /// Serialize the table set as pretty JSON
    pub fn to_json_string(&self) -> MeansTestResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MeansTestError::Export(format!("Failed to serialize standards: {}", e)))
    }

    /// Check the invariants lookups rely on
    ///
    /// Every figure must be non-negative and every county mapped to a metro
    /// area must point at a metro area that exists.
    pub fn validate(&self) -> MeansTestResult<()> {
        let mut amounts: Vec<(&str, Money)> = Vec::new();
        amounts.extend(self.national_standards.by_size.iter().map(|m| ("national standards", *m)));
        amounts.push(("national standards", self.national_standards.additional_person));
        amounts.push(("health care", self.health_care.under_65));
        amounts.push(("health care", self.health_care.age_65_or_older));
        amounts.push(("vehicle ownership", self.vehicle_ownership.one_vehicle));
        amounts.push(("vehicle ownership", self.vehicle_ownership.two_vehicles));
        amounts.push(("public transit", self.public_transit));
        amounts.push(("presumption threshold", self.presumption.upper_sixty_month));
        for region in [Region::Northeast, Region::Midwest, Region::South, Region::West] {
            let rates = self.regional_operating.for_region(region);
            amounts.push(("regional operating", rates.one_vehicle));
            amounts.push(("regional operating", rates.two_vehicles));
        }
        for metro in self.metro_areas.values() {
            amounts.push(("metro operating", metro.operating.one_vehicle));
            amounts.push(("metro operating", metro.operating.two_vehicles));
        }
        for row in self.median_income.values().chain(std::iter::once(&self.national_median_income)) {
            amounts.extend(row.0.iter().map(|m| ("median income", *m)));
        }
        let brackets = self
            .county_housing
            .values()
            .flat_map(|counties| counties.values())
            .chain(self.state_housing.values())
            .chain(std::iter::once(&self.national_housing));
        for bracket in brackets {
            amounts.extend(bracket.0.iter().map(|m| ("housing", *m)));
        }

        if let Some((table, amount)) = amounts.iter().find(|(_, m)| m.is_negative()) {
            return Err(MeansTestError::Tables(format!(
                "Negative {} figure: {}",
                table, amount
            )));
        }

        if self.presumption.unsecured_debt_percent > 100 {
            return Err(MeansTestError::Tables(format!(
                "Unsecured debt percentage {} exceeds 100",
                self.presumption.unsecured_debt_percent
            )));
        }

        for (state, counties) in &self.county_metro {
            for (county, metro) in counties {
                if !self.metro_areas.contains_key(metro) {
                    return Err(MeansTestError::Tables(format!(
                        "County {}, {} maps to unknown metro area '{}'",
                        county, state, metro
                    )));
                }
            }
        }

        Ok(())
    }

    /// National Standards total for a household size
    pub fn national_standard_total(&self, household_size: u32) -> Money {
        self.national_standards.total_for(household_size)
    }

    /// Health care allowance for a household with `seniors` members aged 65+
    pub fn health_care_total(&self, household_size: u32, seniors: u32) -> Money {
        let seniors = seniors.min(household_size);
        let under_65 = household_size - seniors;
        self.health_care.under_65.times(i64::from(under_65))
            + self.health_care.age_65_or_older.times(i64::from(seniors))
    }

    /// Median family income for a state and household size
    ///
    /// Unknown states use the national estimate row.
    pub fn state_median_income(&self, state: &str, household_size: u32) -> Money {
        self.median_row(state).0.for_household(household_size)
    }

    /// Median income row for a state, and whether the state was found
    pub fn median_row(&self, state: &str) -> (&MedianIncomeRow, bool) {
        match self.median_income.get(&normalize_state(state)) {
            Some(row) => (row, true),
            None => (&self.national_median_income, false),
        }
    }

    /// Census region for a state, `South` when unmapped
    pub fn region_for_state(&self, state: &str) -> Region {
        self.state_regions
            .get(&normalize_state(state))
            .copied()
            .unwrap_or(Region::FALLBACK)
    }

    /// Metro area a county belongs to, if it is mapped
    pub fn metro_area_for(&self, state: &str, county: Option<&str>) -> Option<(&str, &MetroArea)> {
        let county = normalize_county_opt(county)?;
        let name = self.county_metro.get(&normalize_state(state))?.get(&county)?;
        self.metro_areas
            .get_key_value(name)
            .map(|(name, metro)| (name.as_str(), metro))
    }

    /// Housing bracket for a location and the level that supplied it
    pub fn housing_bracket(&self, state: &str, county: Option<&str>) -> (&HousingBracket, HousingDataLevel) {
        let state = normalize_state(state);

        if let Some(county) = normalize_county_opt(county) {
            if let Some(bracket) = self
                .county_housing
                .get(&state)
                .and_then(|counties| counties.get(&county))
            {
                return (bracket, HousingDataLevel::County);
            }
        }

        match self.state_housing.get(&state) {
            Some(bracket) => (bracket, HousingDataLevel::State),
            None => (&self.national_housing, HousingDataLevel::National),
        }
    }

    /// Whether an explicit county-level housing figure exists
    pub fn has_county_data(&self, state: &str, county: Option<&str>) -> bool {
        matches!(self.housing_bracket(state, county).1, HousingDataLevel::County)
    }
}

impl Default for StandardsTables {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> StandardsTables {
        StandardsTables::builtin()
    }

    #[test]
    fn test_national_standards_table_values() {
        let t = tables();
        for size in 1..=4u32 {
            assert_eq!(
                t.national_standard_total(size),
                t.national_standards.by_size[(size - 1) as usize]
            );
        }
        assert_eq!(t.national_standard_total(1), Money::from_dollars(1065));
    }

    #[test]
    fn test_national_standards_extrapolate_past_four() {
        let t = tables();
        let four = t.national_standards.by_size[3];
        let extra = t.national_standards.additional_person;
        assert_eq!(t.national_standard_total(5), four + extra);
        assert_eq!(t.national_standard_total(7), four + extra.times(3));
    }

    #[test]
    fn test_state_median_table_values() {
        let t = tables();
        let row = t.median_income["CA"];
        for size in 1..=4u32 {
            assert_eq!(t.state_median_income("CA", size), row.0[(size - 1) as usize]);
        }
        assert_eq!(t.state_median_income("ca", 1), Money::from_dollars(77_221));
        assert_eq!(t.state_median_income("California", 1), Money::from_dollars(77_221));
    }

    #[test]
    fn test_state_median_extrapolates_past_four() {
        let t = tables();
        let row = t.median_income["TX"];
        assert_eq!(t.state_median_income("TX", 6), row.0[3] + row.0[4].times(2));
    }

    #[test]
    fn test_unknown_state_uses_national_estimate() {
        let t = tables();
        let (row, found) = t.median_row("GU");
        assert!(!found);
        assert_eq!(*row, t.national_median_income);
        assert_eq!(t.state_median_income("GU", 2), t.national_median_income.0[1]);
    }

    #[test]
    fn test_region_lookup_and_fallback() {
        let t = tables();
        assert_eq!(t.region_for_state("ny"), Region::Northeast);
        assert_eq!(t.region_for_state("IL"), Region::Midwest);
        assert_eq!(t.region_for_state("CA"), Region::West);
        assert_eq!(t.region_for_state("PR"), Region::South);
    }

    #[test]
    fn test_metro_lookup() {
        let t = tables();
        let (name, metro) = t.metro_area_for("CA", Some("Los Angeles County")).unwrap();
        assert_eq!(name, "Los Angeles");
        assert_eq!(metro.region, Region::West);
        assert!(t.metro_area_for("CA", Some("Modoc")).is_none());
        assert!(t.metro_area_for("CA", None).is_none());
    }

    #[test]
    fn test_housing_fallback_levels() {
        let t = tables();
        assert_eq!(t.housing_bracket("CA", Some("Los Angeles")).1, HousingDataLevel::County);
        assert_eq!(t.housing_bracket("CA", Some("Modoc")).1, HousingDataLevel::State);
        assert_eq!(t.housing_bracket("CA", None).1, HousingDataLevel::State);
        assert_eq!(t.housing_bracket("GU", Some("Anywhere")).1, HousingDataLevel::National);
        assert!(t.has_county_data("il", Some("cook county")));
        assert!(!t.has_county_data("IL", Some("Sangamon")));
    }

    #[test]
    fn test_housing_bracket_reuses_last_bucket() {
        let bracket = HousingBracket([
            Money::from_dollars(1),
            Money::from_dollars(2),
            Money::from_dollars(3),
            Money::from_dollars(4),
            Money::from_dollars(5),
        ]);
        assert_eq!(bracket.for_household(1), Money::from_dollars(1));
        assert_eq!(bracket.for_household(5), Money::from_dollars(5));
        assert_eq!(bracket.for_household(9), Money::from_dollars(5));
    }

    #[test]
    fn test_health_care_total() {
        let t = tables();
        let total = t.health_care_total(4, 1);
        assert_eq!(
            total,
            t.health_care.under_65.times(3) + t.health_care.age_65_or_older
        );
        // more seniors than members is capped
        assert_eq!(t.health_care_total(1, 3), t.health_care.age_65_or_older);
    }

    #[test]
    fn test_builtin_tables_are_consistent() {
        assert!(tables().validate().is_ok());
    }

    #[test]
    fn test_json_round_trip_preserves_tables() {
        let t = tables();
        let json = t.to_json_string().unwrap();
        let loaded = StandardsTables::from_json_str(&json).unwrap();
        assert_eq!(loaded, t);
    }

    #[test]
    fn test_validation_rejects_dangling_metro() {
        let mut t = tables();
        t.county_metro
            .entry("NV".into())
            .or_default()
            .insert("CLARK".into(), "Las Vegas".into());
        let err = t.validate().unwrap_err();
        assert!(matches!(err, MeansTestError::Tables(_)));
    }

    #[test]
    fn test_validation_rejects_negative_figures() {
        let mut t = tables();
        t.public_transit = Money::from_cents(-1);
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("standards.json");
        std::fs::write(&path, tables().to_json_string().unwrap()).unwrap();
        let loaded = StandardsTables::from_json_file(&path).unwrap();
        assert_eq!(loaded.effective_date, tables().effective_date);

        let missing = StandardsTables::from_json_file(&dir.path().join("nope.json"));
        assert!(matches!(missing, Err(MeansTestError::Io(_))));
    }
}
