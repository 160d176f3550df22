//! JSON Export functionality
//!
//! Writes means test results and table sets as JSON with schema versioning.

use crate::error::{MeansTestError, MeansTestResult};
use crate::services::MeansTestOutcome;
use crate::standards::StandardsTables;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A means test result wrapped with version information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Application version that produced the result
    pub app_version: String,

    pub outcome: MeansTestOutcome,
}

impl OutcomeExport {
    pub fn new(outcome: &MeansTestOutcome) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            outcome: outcome.clone(),
        }
    }
}

/// Export a means test result to JSON
pub fn export_outcome_json<W: Write>(
    outcome: &MeansTestOutcome,
    writer: &mut W,
    pretty: bool,
) -> MeansTestResult<()> {
    let export = OutcomeExport::new(outcome);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| MeansTestError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| MeansTestError::Export(e.to_string()))?;
    Ok(())
}

/// Export a table set to JSON in the format `StandardsTables::from_json_file` reads
pub fn export_tables_json<W: Write>(tables: &StandardsTables, writer: &mut W) -> MeansTestResult<()> {
    serde_json::to_writer_pretty(&mut *writer, tables)
        .map_err(|e| MeansTestError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| MeansTestError::Export(e.to_string()))?;
    Ok(())
}
