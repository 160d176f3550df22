//! Current Monthly Income CLI command

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::settings::Settings;
use crate::display::format_cmi;
use crate::error::{MeansTestError, MeansTestResult};
use crate::export::export_cmi_csv;
use crate::services::{read_income_ledger_file, CmiService};

/// Output format for the CMI history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CmiFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Arguments for `means-test cmi`
#[derive(Debug, Clone, Args)]
pub struct CmiArgs {
    /// CSV income ledger (month,gross,net,source,payer)
    pub ledger: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = CmiFormat::Text)]
    pub format: CmiFormat,
}

/// Handle the cmi command
pub fn handle_cmi_command(settings: &Settings, args: CmiArgs) -> MeansTestResult<()> {
    let entries = read_income_ledger_file(&args.ledger)?;
    let cmi = CmiService::new().calculate(&entries)?;

    match args.format {
        CmiFormat::Text => print!("{}", format_cmi(&cmi, &settings.currency_symbol)),
        CmiFormat::Json => {
            let json = serde_json::to_string_pretty(&cmi)
                .map_err(|e| MeansTestError::Export(e.to_string()))?;
            println!("{}", json);
        }
        CmiFormat::Csv => export_cmi_csv(&cmi, std::io::stdout().lock())?,
    }

    Ok(())
}
