//! means-test - Chapter 7 means test and IRS allowance engine
//!
//! This library implements the bankruptcy means test: six-month Current
//! Monthly Income averaging, the state median comparison and, for
//! above-median households, the disposable income test against the
//! presumption-of-abuse thresholds. Allowances come from the IRS Collection
//! Financial Standards, resolved by state, county and metro area.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Household and income value objects
//! - `standards`: Versioned reference tables and geography
//! - `services`: Allowance, CMI and means test calculations
//! - `display`: Terminal formatting
//! - `export`: JSON, YAML and CSV output
//! - `cli`: Command-line handlers
//!
//! # Example
//!
//! ```rust
//! use means_test::models::{HouseholdProfile, Money};
//! use means_test::services::{MeansTestEngine, MeansTestInput};
//! use means_test::standards::StandardsTables;
//!
//! let tables = StandardsTables::builtin();
//! let input = MeansTestInput::monthly(HouseholdProfile::new("CA", 1, 40), Money::from_dollars(3000));
//! let outcome = MeansTestEngine::new(&tables).evaluate(&input).unwrap();
//! assert!(outcome.passes);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod standards;
pub mod telemetry;

pub use error::{MeansTestError, MeansTestResult};
