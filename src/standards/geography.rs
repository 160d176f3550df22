//! State and county normalization
//!
//! Intake records carry whatever the debtor typed: "ca", "California",
//! "Los Angeles County". Every table lookup goes through these helpers so
//! the keys always match the form the tables are built with.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Census region used for transportation operating costs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    Northeast,
    Midwest,
    South,
    West,
}

impl Region {
    /// Region assumed when a state is not mapped
    pub const FALLBACK: Region = Region::South;

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Northeast => "Northeast",
            Region::Midwest => "Midwest",
            Region::South => "South",
            Region::West => "West",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

const STATE_NAMES: [(&str, &str); 51] = [
    ("ALABAMA", "AL"),
    ("ALASKA", "AK"),
    ("ARIZONA", "AZ"),
    ("ARKANSAS", "AR"),
    ("CALIFORNIA", "CA"),
    ("COLORADO", "CO"),
    ("CONNECTICUT", "CT"),
    ("DELAWARE", "DE"),
    ("DISTRICT OF COLUMBIA", "DC"),
    ("FLORIDA", "FL"),
    ("GEORGIA", "GA"),
    ("HAWAII", "HI"),
    ("IDAHO", "ID"),
    ("ILLINOIS", "IL"),
    ("INDIANA", "IN"),
    ("IOWA", "IA"),
    ("KANSAS", "KS"),
    ("KENTUCKY", "KY"),
    ("LOUISIANA", "LA"),
    ("MAINE", "ME"),
    ("MARYLAND", "MD"),
    ("MASSACHUSETTS", "MA"),
    ("MICHIGAN", "MI"),
    ("MINNESOTA", "MN"),
    ("MISSISSIPPI", "MS"),
    ("MISSOURI", "MO"),
    ("MONTANA", "MT"),
    ("NEBRASKA", "NE"),
    ("NEVADA", "NV"),
    ("NEW HAMPSHIRE", "NH"),
    ("NEW JERSEY", "NJ"),
    ("NEW MEXICO", "NM"),
    ("NEW YORK", "NY"),
    ("NORTH CAROLINA", "NC"),
    ("NORTH DAKOTA", "ND"),
    ("OHIO", "OH"),
    ("OKLAHOMA", "OK"),
    ("OREGON", "OR"),
    ("PENNSYLVANIA", "PA"),
    ("RHODE ISLAND", "RI"),
    ("SOUTH CAROLINA", "SC"),
    ("SOUTH DAKOTA", "SD"),
    ("TENNESSEE", "TN"),
    ("TEXAS", "TX"),
    ("UTAH", "UT"),
    ("VERMONT", "VT"),
    ("VIRGINIA", "VA"),
    ("WASHINGTON", "WA"),
    ("WEST VIRGINIA", "WV"),
    ("WISCONSIN", "WI"),
    ("WYOMING", "WY"),
];

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a state to its upper-case two-letter code
///
/// Full names are mapped to their code; anything unrecognized is returned
/// upper-cased so it simply misses in the tables and takes the fallback.
pub fn normalize_state(raw: &str) -> String {
    let upper = collapse_whitespace(raw).to_ascii_uppercase();
    if upper.len() == 2 {
        return upper;
    }
    STATE_NAMES
        .iter()
        .find(|(name, _)| *name == upper)
        .map(|(_, code)| (*code).to_string())
        .unwrap_or(upper)
}

/// Normalize a county name: trim, upper-case and drop a trailing " COUNTY" word
///
/// Returns `None` for blank input.
pub fn normalize_county(raw: &str) -> Option<String> {
    let upper = collapse_whitespace(raw).to_ascii_uppercase();
    let stripped = if upper == "COUNTY" {
        ""
    } else {
        upper.strip_suffix(" COUNTY").unwrap_or(&upper)
    };
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

/// Normalize an optional county field
pub fn normalize_county_opt(raw: Option<&str>) -> Option<String> {
    raw.and_then(normalize_county)
}
