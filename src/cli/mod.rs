//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod allowances;
pub mod cmi;
pub mod evaluate;
pub mod household;
pub mod tables;

pub use allowances::{handle_allowances_command, AllowancesArgs};
pub use cmi::{handle_cmi_command, CmiArgs, CmiFormat};
pub use evaluate::{handle_evaluate_command, EvaluateArgs};
pub use household::{HouseholdArgs, OutputFormat};
pub use tables::{handle_median_command, handle_tables_command, MedianArgs, TablesCommands};
