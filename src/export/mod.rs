//! Export module for means-test
//!
//! Provides export of results and reference data:
//! - JSON: machine-readable results and complete table sets
//! - YAML: human-readable results
//! - CSV: month-by-month CMI history

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_cmi_csv;
pub use json::{export_outcome_json, export_tables_json, OutcomeExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_outcome_yaml;
