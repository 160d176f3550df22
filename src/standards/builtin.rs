//! Bundled figures for cases filed on or after April 1, 2025
//!
//! IRS Collection Financial Standards and Census Bureau median family income
//! as used on Official Forms 122A-1 and 122A-2. Whole-dollar monthly amounts
//! except median income, which is annual.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::geography::Region;
use super::tables::{
    HealthCareRates, HousingBracket, MedianIncomeRow, MetroArea, NationalStandards,
    PresumptionThresholds, RegionalOperatingCosts, StandardsTables, VehicleRates,
};
use crate::models::Money;

const fn d(dollars: i64) -> Money {
    Money::from_dollars(dollars)
}

const fn vehicles(one: i64, two: i64) -> VehicleRates {
    VehicleRates {
        one_vehicle: d(one),
        two_vehicles: d(two),
    }
}

const fn bracket(amounts: [i64; 5]) -> HousingBracket {
    HousingBracket([
        d(amounts[0]),
        d(amounts[1]),
        d(amounts[2]),
        d(amounts[3]),
        d(amounts[4]),
    ])
}

const fn median(amounts: [i64; 5]) -> MedianIncomeRow {
    MedianIncomeRow([
        d(amounts[0]),
        d(amounts[1]),
        d(amounts[2]),
        d(amounts[3]),
        d(amounts[4]),
    ])
}

/// Per-person increment above four persons, uniform across states
const MEDIAN_ADDITIONAL_PERSON: i64 = 9_900;

const MEDIAN_INCOME: [(&str, [i64; 4]); 51] = [
    ("AK", [78_020, 100_346, 111_170, 129_025]),
    ("AL", [58_088, 71_025, 83_405, 97_431]),
    ("AR", [54_236, 66_815, 78_031, 91_060]),
    ("AZ", [67_025, 82_617, 92_062, 109_372]),
    ("CA", [77_221, 100_622, 112_785, 135_804]),
    ("CO", [80_306, 101_238, 118_053, 141_080]),
    ("CT", [78_152, 99_318, 121_580, 148_021]),
    ("DC", [83_468, 136_600, 136_600, 156_032]),
    ("DE", [69_244, 87_530, 104_017, 125_620]),
    ("FL", [64_281, 79_280, 89_513, 107_637]),
    ("GA", [62_100, 79_215, 92_208, 112_436]),
    ("HI", [78_442, 94_003, 111_062, 127_180]),
    ("IA", [60_100, 81_200, 95_030, 113_472]),
    ("ID", [64_818, 79_640, 89_960, 104_300]),
    ("IL", [68_400, 87_602, 105_640, 126_716]),
    ("IN", [59_800, 76_143, 88_632, 106_000]),
    ("KS", [60_630, 80_400, 92_720, 112_800]),
    ("KY", [56_400, 70_900, 83_850, 102_460]),
    ("LA", [55_000, 68_800, 78_950, 96_330]),
    ("MA", [85_200, 107_800, 133_500, 163_000]),
    ("MD", [80_500, 104_000, 124_620, 150_010]),
    ("ME", [66_000, 81_540, 100_880, 115_640]),
    ("MI", [63_600, 78_700, 96_200, 117_200]),
    ("MN", [70_100, 91_960, 113_150, 137_240]),
    ("MO", [59_000, 76_300, 91_110, 109_570]),
    ("MS", [51_800, 63_570, 73_990, 89_000]),
    ("MT", [62_140, 82_030, 91_600, 108_350]),
    ("NC", [60_100, 78_230, 90_350, 110_900]),
    ("ND", [66_550, 86_720, 104_790, 124_690]),
    ("NE", [62_800, 81_560, 97_180, 115_400]),
    ("NH", [83_000, 101_690, 124_650, 150_140]),
    ("NJ", [83_700, 104_960, 127_970, 156_190]),
    ("NM", [56_500, 72_760, 76_000, 90_600]),
    ("NV", [65_600, 83_000, 92_880, 105_270]),
    ("NY", [71_300, 90_180, 110_160, 135_040]),
    ("OH", [60_300, 77_000, 93_140, 113_350]),
    ("OK", [55_900, 71_100, 81_600, 92_630]),
    ("OR", [72_230, 88_340, 104_450, 125_530]),
    ("PA", [67_250, 82_330, 103_940, 126_030]),
    ("RI", [71_560, 92_190, 111_830, 132_520]),
    ("SC", [58_700, 76_600, 88_870, 104_130]),
    ("SD", [60_070, 81_250, 91_000, 112_400]),
    ("TN", [59_990, 75_340, 88_130, 103_280]),
    ("TX", [63_400, 80_600, 91_000, 108_430]),
    ("UT", [81_700, 88_800, 103_670, 117_650]),
    ("VA", [75_640, 98_440, 115_950, 138_280]),
    ("VT", [66_060, 89_040, 104_740, 119_470]),
    ("WA", [80_500, 100_120, 119_030, 142_460]),
    ("WI", [64_190, 83_430, 101_000, 122_470]),
    ("WV", [56_100, 66_150, 80_400, 94_990]),
    ("WY", [64_040, 84_900, 91_050, 114_700]),
];

/// Deliberately below most state medians so an unmapped state is never
/// treated more leniently than a mapped one
const NATIONAL_MEDIAN_ESTIMATE: [i64; 5] = [60_000, 76_000, 88_000, 104_000, MEDIAN_ADDITIONAL_PERSON];

const REGIONS: [(Region, &[&str]); 4] = [
    (
        Region::Northeast,
        &["CT", "MA", "ME", "NH", "NJ", "NY", "PA", "RI", "VT"],
    ),
    (
        Region::Midwest,
        &["IA", "IL", "IN", "KS", "MI", "MN", "MO", "ND", "NE", "OH", "SD", "WI"],
    ),
    (
        Region::South,
        &[
            "AL", "AR", "DC", "DE", "FL", "GA", "KY", "LA", "MD", "MS", "NC", "OK", "SC", "TN",
            "TX", "VA", "WV",
        ],
    ),
    (
        Region::West,
        &["AK", "AZ", "CA", "CO", "HI", "ID", "MT", "NM", "NV", "OR", "UT", "WA", "WY"],
    ),
];

const METRO_AREAS: [(&str, Region, i64, i64); 16] = [
    ("Atlanta", Region::South, 274, 548),
    ("Boston", Region::Northeast, 300, 600),
    ("Chicago", Region::Midwest, 276, 552),
    ("Dallas-Ft. Worth", Region::South, 281, 562),
    ("Denver", Region::West, 300, 600),
    ("Detroit", Region::Midwest, 328, 656),
    ("Houston", Region::South, 290, 580),
    ("Los Angeles", Region::West, 345, 690),
    ("Miami", Region::South, 325, 650),
    ("Minneapolis-St. Paul", Region::Midwest, 256, 512),
    ("New York", Region::Northeast, 337, 674),
    ("Philadelphia", Region::Northeast, 298, 596),
    ("Phoenix", Region::West, 282, 564),
    ("San Francisco", Region::West, 354, 708),
    ("Seattle", Region::West, 290, 580),
    ("Washington, D.C.", Region::South, 281, 562),
];

const COUNTY_METRO: [(&str, &str, &str); 31] = [
    ("AZ", "MARICOPA", "Phoenix"),
    ("AZ", "PINAL", "Phoenix"),
    ("CA", "ALAMEDA", "San Francisco"),
    ("CA", "CONTRA COSTA", "San Francisco"),
    ("CA", "LOS ANGELES", "Los Angeles"),
    ("CA", "ORANGE", "Los Angeles"),
    ("CA", "SAN FRANCISCO", "San Francisco"),
    ("CA", "SAN MATEO", "San Francisco"),
    ("CO", "DENVER", "Denver"),
    ("CO", "JEFFERSON", "Denver"),
    ("DC", "DISTRICT OF COLUMBIA", "Washington, D.C."),
    ("FL", "BROWARD", "Miami"),
    ("FL", "MIAMI-DADE", "Miami"),
    ("GA", "FULTON", "Atlanta"),
    ("GA", "DEKALB", "Atlanta"),
    ("IL", "COOK", "Chicago"),
    ("IL", "DUPAGE", "Chicago"),
    ("MA", "SUFFOLK", "Boston"),
    ("MD", "MONTGOMERY", "Washington, D.C."),
    ("MI", "WAYNE", "Detroit"),
    ("MN", "HENNEPIN", "Minneapolis-St. Paul"),
    ("NJ", "HUDSON", "New York"),
    ("NY", "BRONX", "New York"),
    ("NY", "KINGS", "New York"),
    ("NY", "NEW YORK", "New York"),
    ("NY", "QUEENS", "New York"),
    ("PA", "PHILADELPHIA", "Philadelphia"),
    ("TX", "DALLAS", "Dallas-Ft. Worth"),
    ("TX", "HARRIS", "Houston"),
    ("TX", "TARRANT", "Dallas-Ft. Worth"),
    ("WA", "KING", "Seattle"),
];

const STATE_HOUSING: [(&str, [i64; 5]); 14] = [
    ("AZ", [1_812, 2_128, 2_243, 2_501, 2_550]),
    ("CA", [2_450, 2_877, 3_032, 3_381, 3_447]),
    ("CO", [2_083, 2_446, 2_578, 2_875, 2_931]),
    ("FL", [2_020, 2_372, 2_500, 2_788, 2_843]),
    ("GA", [1_701, 1_998, 2_105, 2_347, 2_393]),
    ("IL", [1_840, 2_161, 2_277, 2_540, 2_590]),
    ("MA", [2_385, 2_801, 2_951, 3_291, 3_356]),
    ("MI", [1_620, 1_902, 2_005, 2_236, 2_280]),
    ("MN", [1_786, 2_097, 2_210, 2_465, 2_513]),
    ("NY", [2_190, 2_572, 2_710, 3_022, 3_082]),
    ("OH", [1_568, 1_841, 1_940, 2_164, 2_206]),
    ("PA", [1_733, 2_035, 2_145, 2_392, 2_439]),
    ("TX", [1_899, 2_230, 2_350, 2_620, 2_672]),
    ("WA", [2_236, 2_626, 2_767, 3_086, 3_147]),
];

const COUNTY_HOUSING: [(&str, &str, [i64; 5]); 20] = [
    ("AZ", "MARICOPA", [2_008, 2_358, 2_485, 2_771, 2_826]),
    ("CA", "ALAMEDA", [3_237, 3_801, 4_006, 4_467, 4_555]),
    ("CA", "LOS ANGELES", [2_717, 3_190, 3_362, 3_749, 3_823]),
    ("CA", "ORANGE", [3_010, 3_535, 3_725, 4_154, 4_236]),
    ("CA", "SAN FRANCISCO", [3_628, 4_261, 4_490, 5_007, 5_106]),
    ("CO", "DENVER", [2_284, 2_682, 2_826, 3_152, 3_214]),
    ("DC", "DISTRICT OF COLUMBIA", [2_854, 3_352, 3_532, 3_939, 4_016]),
    ("FL", "MIAMI-DADE", [2_526, 2_966, 3_126, 3_486, 3_555]),
    ("GA", "FULTON", [2_095, 2_460, 2_593, 2_891, 2_948]),
    ("IL", "COOK", [2_031, 2_385, 2_513, 2_803, 2_858]),
    ("MA", "SUFFOLK", [2_808, 3_298, 3_475, 3_875, 3_952]),
    ("MI", "WAYNE", [1_587, 1_864, 1_964, 2_190, 2_233]),
    ("MN", "HENNEPIN", [1_975, 2_319, 2_444, 2_725, 2_779]),
    ("NY", "KINGS", [3_055, 3_588, 3_781, 4_216, 4_299]),
    ("NY", "NEW YORK", [3_501, 4_112, 4_333, 4_832, 4_927]),
    ("PA", "PHILADELPHIA", [1_863, 2_188, 2_305, 2_571, 2_621]),
    ("TX", "DALLAS", [2_005, 2_355, 2_481, 2_767, 2_822]),
    ("TX", "HARRIS", [1_976, 2_321, 2_446, 2_727, 2_781]),
    ("TX", "TRAVIS", [2_350, 2_760, 2_908, 3_243, 3_307]),
    ("WA", "KING", [2_786, 3_272, 3_448, 3_845, 3_921]),
];

const NATIONAL_HOUSING: [i64; 5] = [1_850, 2_173, 2_290, 2_553, 2_604];

impl StandardsTables {
    /// The figures bundled with this release
    pub fn builtin() -> Self {
        let median_income = MEDIAN_INCOME
            .iter()
            .map(|(state, row)| {
                (
                    (*state).to_string(),
                    median([row[0], row[1], row[2], row[3], MEDIAN_ADDITIONAL_PERSON]),
                )
            })
            .collect();

        let state_regions = REGIONS
            .iter()
            .flat_map(|(region, states)| states.iter().map(move |s| ((*s).to_string(), *region)))
            .collect();

        let metro_areas = METRO_AREAS
            .iter()
            .map(|(name, region, one, two)| {
                (
                    (*name).to_string(),
                    MetroArea {
                        region: *region,
                        operating: vehicles(*one, *two),
                    },
                )
            })
            .collect();

        let mut county_metro: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        for (state, county, metro) in COUNTY_METRO {
            county_metro
                .entry(state.to_string())
                .or_default()
                .insert(county.to_string(), metro.to_string());
        }

        let mut county_housing: BTreeMap<String, BTreeMap<String, HousingBracket>> =
            BTreeMap::new();
        for (state, county, amounts) in COUNTY_HOUSING {
            county_housing
                .entry(state.to_string())
                .or_default()
                .insert(county.to_string(), bracket(amounts));
        }

        let state_housing = STATE_HOUSING
            .iter()
            .map(|(state, amounts)| ((*state).to_string(), bracket(*amounts)))
            .collect();

        Self {
            effective_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap_or_default(),
            source: "IRS Collection Financial Standards / Census median income, cases filed on or after 2025-04-01".to_string(),
            national_standards: NationalStandards {
                by_size: [d(1_065), d(1_709), d(2_031), d(2_471)],
                additional_person: d(431),
            },
            health_care: HealthCareRates {
                under_65: d(84),
                age_65_or_older: d(149),
            },
            median_income,
            national_median_income: median(NATIONAL_MEDIAN_ESTIMATE),
            vehicle_ownership: vehicles(662, 1_324),
            public_transit: d(244),
            regional_operating: RegionalOperatingCosts {
                northeast: vehicles(300, 600),
                midwest: vehicles(247, 494),
                south: vehicles(253, 506),
                west: vehicles(276, 552),
            },
            metro_areas,
            county_metro,
            state_regions,
            county_housing,
            state_housing,
            national_housing: bracket(NATIONAL_HOUSING),
            presumption: PresumptionThresholds {
                upper_sixty_month: d(15_150),
                unsecured_debt_percent: 25,
            },
        }
    }
}
