//! YAML Export functionality
//!
//! Writes a means test result as human-readable YAML.

use crate::error::{MeansTestError, MeansTestResult};
use crate::export::json::OutcomeExport;
use crate::services::MeansTestOutcome;
use std::io::Write;

/// Export a means test result to YAML
pub fn export_outcome_yaml<W: Write>(outcome: &MeansTestOutcome, writer: &mut W) -> MeansTestResult<()> {
    let export = OutcomeExport::new(outcome);
    let err = |e: std::io::Error| MeansTestError::Export(e.to_string());

    writeln!(writer, "# Means test result").map_err(err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(err)?;
    writeln!(writer, "# Tables effective: {}", outcome.effective_date).map_err(err)?;
    writeln!(writer, "# Money amounts are in cents.").map_err(err)?;
    writeln!(writer).map_err(err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| MeansTestError::Export(e.to_string()))?;

    Ok(())
}
