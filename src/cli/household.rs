//! Shared household arguments
//!
//! Every command that needs a household profile flattens these flags.

use clap::{Args, ValueEnum};

use crate::models::{HouseholdProfile, Money};

/// Household profile flags
#[derive(Debug, Clone, Args)]
pub struct HouseholdArgs {
    /// State code or name (e.g., "CA" or "California")
    #[arg(short, long)]
    pub state: String,

    /// County name (e.g., "Los Angeles")
    #[arg(short, long)]
    pub county: Option<String>,

    /// Number of people in the household
    #[arg(short = 'n', long, default_value = "1")]
    pub household_size: u32,

    /// Age of the primary debtor
    #[arg(short, long, default_value = "40")]
    pub age: u32,

    /// Number of vehicles with ownership or operating costs
    #[arg(short, long, default_value = "0")]
    pub vehicles: u32,

    /// Household relies on public transportation (only with no vehicle)
    #[arg(long)]
    pub public_transit: bool,

    /// Ages of all household members, comma separated (overrides the age estimate)
    #[arg(long, value_delimiter = ',')]
    pub member_ages: Vec<u32>,
}

impl HouseholdArgs {
    pub fn to_profile(&self) -> HouseholdProfile {
        let mut profile = HouseholdProfile::new(self.state.clone(), self.household_size, self.age)
            .with_vehicles(self.vehicles)
            .with_public_transportation(self.public_transit)
            .with_member_ages(self.member_ages.clone());
        if let Some(county) = &self.county {
            profile = profile.with_county(county.clone());
        }
        profile
    }
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Parse a money argument such as "4200", "4,200.50" or "$4200"
pub fn parse_money(s: &str) -> Result<Money, String> {
    let cleaned = s.trim().trim_start_matches('$');
    Money::parse(cleaned).map_err(|e| format!("invalid amount '{}': {}", s, e))
}
