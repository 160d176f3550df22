//! Income ledger model
//!
//! One entry per payer per calendar month, as extracted from pay stubs,
//! benefit letters and bank statements upstream.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use super::period::IncomeMonth;

/// Validation errors for income entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    NegativeGross,
    NegativeNet,
}

impl fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeGross => write!(f, "Gross income cannot be negative"),
            Self::NegativeNet => write!(f, "Net income cannot be negative"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// Where an income entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeSource {
    Employment,
    SelfEmployment,
    Rental,
    Interest,
    Pension,
    Government,
    Spouse,
    Alimony,
    Contributions,
    Other,
}

impl IncomeSource {
    /// All sources, in display order
    pub const ALL: [IncomeSource; 10] = [
        Self::Employment,
        Self::SelfEmployment,
        Self::Rental,
        Self::Interest,
        Self::Pension,
        Self::Government,
        Self::Spouse,
        Self::Alimony,
        Self::Contributions,
        Self::Other,
    ];

    /// Wire name (snake_case)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employment => "employment",
            Self::SelfEmployment => "self_employment",
            Self::Rental => "rental",
            Self::Interest => "interest",
            Self::Pension => "pension",
            Self::Government => "government",
            Self::Spouse => "spouse",
            Self::Alimony => "alimony",
            Self::Contributions => "contributions",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for IncomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for IncomeSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .iter()
            .copied()
            .find(|source| source.as_str() == normalized)
            .ok_or_else(|| format!("unknown income source '{}'", s.trim()))
    }
}

/// A single month of income from one source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyIncomeEntry {
    pub income_month: IncomeMonth,
    pub gross_amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_amount: Option<Money>,
    pub income_source: IncomeSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer: Option<String>,
}

impl MonthlyIncomeEntry {
    /// Create an entry with only a gross amount
    pub fn new(income_month: IncomeMonth, gross_amount: Money, income_source: IncomeSource) -> Self {
        Self {
            income_month,
            gross_amount,
            net_amount: None,
            income_source,
            payer: None,
        }
    }

    /// Attach the net (take-home) amount
    pub fn with_net(mut self, net_amount: Money) -> Self {
        self.net_amount = Some(net_amount);
        self
    }

    /// Attach a payer label
    pub fn with_payer(mut self, payer: impl Into<String>) -> Self {
        self.payer = Some(payer.into());
        self
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.gross_amount.is_negative() {
            return Err(IncomeValidationError::NegativeGross);
        }
        if self.net_amount.is_some_and(|net| net.is_negative()) {
            return Err(IncomeValidationError::NegativeNet);
        }
        Ok(())
    }
}
