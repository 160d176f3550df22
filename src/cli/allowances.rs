//! Allowance CLI command

use clap::Args;

use super::household::{HouseholdArgs, OutputFormat};
use crate::config::settings::Settings;
use crate::display::format_allowances;
use crate::error::{MeansTestError, MeansTestResult};
use crate::services::AllowanceService;
use crate::standards::StandardsTables;

/// Arguments for `means-test allowances`
#[derive(Debug, Clone, Args)]
pub struct AllowancesArgs {
    #[command(flatten)]
    pub household: HouseholdArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Handle the allowances command
pub fn handle_allowances_command(
    settings: &Settings,
    tables: &StandardsTables,
    args: AllowancesArgs,
) -> MeansTestResult<()> {
    let profile = args.household.to_profile();
    let allowances = AllowanceService::new(tables).calculate(&profile)?;

    match args.format {
        OutputFormat::Text => {
            println!(
                "IRS allowances for a household of {} in {} (tables effective {})",
                profile.household_size,
                crate::standards::normalize_state(&profile.state),
                tables.effective_date
            );
            println!();
            println!("{}", format_allowances(&allowances, &settings.currency_symbol));
            if !allowances.using_county_data {
                println!();
                println!("Note: no county housing figure on file; a default was used.");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&allowances)
                .map_err(|e| MeansTestError::Export(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&allowances)
                .map_err(|e| MeansTestError::Export(e.to_string()))?;
            print!("{}", yaml);
        }
    }

    Ok(())
}
