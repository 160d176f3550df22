//! Display formatting for terminal output
//!
//! Provides utilities for formatting allowances, CMI history and means test
//! results for terminal display.

pub mod allowances;
pub mod cmi;
pub mod outcome;

pub use allowances::format_allowances;
pub use cmi::format_cmi;
pub use outcome::{format_outcome, verdict};
