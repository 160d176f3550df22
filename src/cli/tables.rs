//! Standards table CLI commands
//!
//! Inspect and export the active table set, and look up state medians.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::config::settings::Settings;
use crate::error::{MeansTestError, MeansTestResult};
use crate::export::export_tables_json;
use crate::standards::{normalize_state, StandardsTables};

/// Table subcommands
#[derive(Subcommand)]
pub enum TablesCommands {
    /// Show version information for the active table set
    Show,

    /// Write the active table set as JSON
    Export {
        /// Output file (defaults to stdout)
        path: Option<PathBuf>,
    },
}

/// Arguments for `means-test median`
#[derive(Debug, Clone, Args)]
pub struct MedianArgs {
    /// State code or name
    #[arg(short, long)]
    pub state: String,

    /// Number of people in the household
    #[arg(short = 'n', long, default_value = "1")]
    pub household_size: u32,
}

/// Handle a tables command
///
/// `source` is the file the tables were loaded from, `None` for the builtin set.
pub fn handle_tables_command(
    source: Option<&Path>,
    tables: &StandardsTables,
    cmd: TablesCommands,
) -> MeansTestResult<()> {
    match cmd {
        TablesCommands::Show => {
            let source = match source {
                Some(path) => path.display().to_string(),
                None => "builtin".to_string(),
            };
            let county_count: usize = tables.county_housing.values().map(|c| c.len()).sum();

            println!("Standards Tables");
            println!("================");
            println!("Effective date:      {}", tables.effective_date);
            println!("Source:              {}", tables.source);
            println!("Loaded from:         {}", source);
            println!("States with medians: {}", tables.median_income.len());
            println!("Metro areas:         {}", tables.metro_areas.len());
            println!("Counties (housing):  {}", county_count);
            println!(
                "Upper threshold:     {} over 60 months",
                tables.presumption.upper_sixty_month
            );
        }

        TablesCommands::Export { path } => match path {
            Some(path) => {
                let file = File::create(&path).map_err(|e| {
                    MeansTestError::Io(format!("Failed to create {}: {}", path.display(), e))
                })?;
                let mut writer = BufWriter::new(file);
                export_tables_json(tables, &mut writer)?;
                writer.flush()?;
                println!(
                    "Exported tables effective {} to {}",
                    tables.effective_date,
                    path.display()
                );
            }
            None => export_tables_json(tables, &mut std::io::stdout().lock())?,
        },
    }

    Ok(())
}

/// Handle the median command
pub fn handle_median_command(
    settings: &Settings,
    tables: &StandardsTables,
    args: MedianArgs,
) -> MeansTestResult<()> {
    if args.household_size == 0 {
        return Err(MeansTestError::Validation(
            "Household size must be at least 1".into(),
        ));
    }

    let state = normalize_state(&args.state);
    let (_, found) = tables.median_row(&state);
    let median = tables.state_median_income(&state, args.household_size);

    println!(
        "Median family income, {} household of {}: {}",
        state,
        args.household_size,
        median.format_with_symbol(&settings.currency_symbol)
    );
    if !found {
        println!("Note: no median on file for {}; national estimate used.", state);
    }

    Ok(())
}
