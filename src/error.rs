//! Custom error types for the means test engine
//!
//! Missing jurisdiction data is never an error: lookups fall back to state,
//! regional or national figures. Errors are reserved for inputs an
//! eligibility determination must not be based on, and for the I/O around
//! the engine (settings, table files, ledgers, exports).

use thiserror::Error;

/// The main error type for means test operations
#[derive(Error, Debug)]
pub enum MeansTestError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Invalid numeric input (negative money, empty household, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A negative money amount where only non-negative values make sense
    #[error("{field} cannot be negative (got {cents} cents)")]
    NegativeAmount { field: &'static str, cents: i64 },

    /// A standards table set that failed its consistency checks
    #[error("Standards table error: {0}")]
    Tables(String),

    /// Income ledger import errors
    #[error("Import error on line {line}: {message}")]
    Import { line: u64, message: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl MeansTestError {
    /// Create a negative-amount validation error for the named field
    pub fn negative(field: &'static str, cents: i64) -> Self {
        Self::NegativeAmount { field, cents }
    }

    /// Create a validation error for a figure that does not fit in cents
    pub fn overflow(field: &'static str) -> Self {
        Self::Validation(format!("{} is too large to compute", field))
    }

    /// Check if this error rejects caller input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NegativeAmount { .. })
    }
}

impl From<std::io::Error> for MeansTestError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for means test operations
pub type MeansTestResult<T> = Result<T, MeansTestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeansTestError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_negative_amount_error() {
        let err = MeansTestError::negative("Monthly income", -500);
        assert_eq!(
            err.to_string(),
            "Monthly income cannot be negative (got -500 cents)"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_overflow_error() {
        let err = MeansTestError::overflow("Annual income");
        assert_eq!(err.to_string(), "Validation error: Annual income is too large to compute");
        assert!(err.is_validation());
    }

    #[test]
    fn test_import_error_display() {
        let err = MeansTestError::Import {
            line: 4,
            message: "unknown income source 'lottery'".into(),
        };
        assert_eq!(
            err.to_string(),
            "Import error on line 4: unknown income source 'lottery'"
        );
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MeansTestError = io_err.into();
        assert!(matches!(err, MeansTestError::Io(_)));
    }
}
