//! Configuration module for means-test
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::MeansTestPaths;
pub use settings::Settings;
