//! Current Monthly Income
//!
//! CMI is the average monthly income over the six calendar months before
//! filing. The total is always divided by six, even when fewer months have
//! recorded income: a month with no entries counts as a month of zero
//! income, exactly as the official form instructs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::error::{MeansTestError, MeansTestResult};
use crate::models::{IncomeMonth, IncomeSource, Money, MonthlyIncomeEntry};

/// Number of months in the lookback window
pub const CMI_MONTHS: usize = 6;

/// One month of grouped income
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyIncomeSummary {
    pub income_month: IncomeMonth,
    pub gross_total: Money,
    /// `None` when no entry for the month reported a net figure
    pub net_total: Option<Money>,
    /// Gross subtotal per income source
    pub by_source: BTreeMap<IncomeSource, Money>,
    pub entry_count: usize,
}

impl MonthlyIncomeSummary {
    fn empty(income_month: IncomeMonth) -> Self {
        Self {
            income_month,
            gross_total: Money::zero(),
            net_total: None,
            by_source: BTreeMap::new(),
            entry_count: 0,
        }
    }

    fn add(&mut self, entry: &MonthlyIncomeEntry) -> MeansTestResult<()> {
        let overflow = || MeansTestError::overflow("Monthly income total");

        self.gross_total = self
            .gross_total
            .checked_add(entry.gross_amount)
            .ok_or_else(overflow)?;
        if let Some(net) = entry.net_amount {
            let net_total = self.net_total.unwrap_or_default();
            self.net_total = Some(net_total.checked_add(net).ok_or_else(overflow)?);
        }
        let subtotal = self.by_source.entry(entry.income_source).or_default();
        *subtotal = subtotal.checked_add(entry.gross_amount).ok_or_else(overflow)?;
        self.entry_count += 1;
        Ok(())
    }
}

/// Result of the CMI calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmiCalculation {
    /// Months inside the window, newest first
    pub monthly_summaries: Vec<MonthlyIncomeSummary>,
    pub six_month_total: Money,
    /// Gross total per source across the window
    #[serde(default)]
    pub totals_by_source: BTreeMap<IncomeSource, Money>,
    pub current_monthly_income: Money,
    pub months_covered: usize,
    /// Advisory only; the formula does not change when incomplete
    pub is_complete: bool,
}

/// Service for Current Monthly Income calculations
pub struct CmiService;

impl CmiService {
    /// Create a new CMI service
    pub fn new() -> Self {
        Self
    }

    /// Group a ledger by month and average the six most recent months
    pub fn calculate(&self, entries: &[MonthlyIncomeEntry]) -> MeansTestResult<CmiCalculation> {
        for entry in entries {
            entry.validate().map_err(|e| {
                MeansTestError::Validation(format!("{} ({})", e, entry.income_month))
            })?;
        }

        let mut by_month: BTreeMap<IncomeMonth, MonthlyIncomeSummary> = BTreeMap::new();
        for entry in entries {
            by_month
                .entry(entry.income_month)
                .or_insert_with(|| MonthlyIncomeSummary::empty(entry.income_month))
                .add(entry)?;
        }

        let dropped = by_month.len().saturating_sub(CMI_MONTHS);
        if dropped > 0 {
            debug!(dropped, "ledger months outside the six-month window ignored");
        }

        let monthly_summaries: Vec<MonthlyIncomeSummary> =
            by_month.into_values().rev().take(CMI_MONTHS).collect();

        let six_month_total = Money::checked_sum(monthly_summaries.iter().map(|m| m.gross_total))
            .ok_or_else(|| MeansTestError::overflow("Six-month income total"))?;

        let mut totals_by_source: BTreeMap<IncomeSource, Money> = BTreeMap::new();
        for (source, amount) in monthly_summaries.iter().flat_map(|m| &m.by_source) {
            let total = totals_by_source.entry(*source).or_default();
            *total = total
                .checked_add(*amount)
                .ok_or_else(|| MeansTestError::overflow("Income source total"))?;
        }
        let current_monthly_income = six_month_total.div_round_half_even(CMI_MONTHS as i64);
        let months_covered = monthly_summaries.len();
        let is_complete = months_covered >= CMI_MONTHS;

        if !is_complete && months_covered > 0 {
            warn!(
                months_covered,
                "income ledger covers fewer than six months; missing months count as zero"
            );
        }

        Ok(CmiCalculation {
            monthly_summaries,
            six_month_total,
            totals_by_source,
            current_monthly_income,
            months_covered,
            is_complete,
        })
    }
}

impl Default for CmiService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month: u32) -> IncomeMonth {
        IncomeMonth::new(year, month).unwrap()
    }

    fn entry(m: IncomeMonth, dollars: i64) -> MonthlyIncomeEntry {
        MonthlyIncomeEntry::new(m, Money::from_dollars(dollars), IncomeSource::Employment)
    }

    #[test]
    fn test_empty_ledger() {
        let cmi = CmiService::new().calculate(&[]).unwrap();
        assert_eq!(cmi.six_month_total, Money::zero());
        assert_eq!(cmi.current_monthly_income, Money::zero());
        assert_eq!(cmi.months_covered, 0);
        assert!(!cmi.is_complete);
        assert!(cmi.monthly_summaries.is_empty());
    }

    #[test]
    fn test_only_six_most_recent_months_count() {
        // Eight months, Feb..Sep 2025; the value encodes the month number
        let mut entries = Vec::new();
        let mut m = month(2025, 9);
        for _ in 0..8 {
            entries.push(entry(m, 1000 * i64::from(m.month())));
            m = m.prev();
        }
        // shuffle the input order
        entries.reverse();

        let cmi = CmiService::new().calculate(&entries).unwrap();
        // Apr..Sep = 4+5+6+7+8+9 = 39 thousand
        assert_eq!(cmi.six_month_total, Money::from_dollars(39_000));
        assert_eq!(cmi.current_monthly_income, Money::from_dollars(6_500));
        assert_eq!(cmi.months_covered, 6);
        assert!(cmi.is_complete);
        assert_eq!(cmi.monthly_summaries[0].income_month, month(2025, 9));
        assert_eq!(cmi.monthly_summaries[5].income_month, month(2025, 4));
    }

    #[test]
    fn test_partial_ledger_still_divides_by_six() {
        let entries = vec![
            entry(month(2025, 1), 3000),
            entry(month(2025, 2), 3000),
            entry(month(2025, 3), 3000),
        ];

        let cmi = CmiService::new().calculate(&entries).unwrap();
        assert_eq!(cmi.six_month_total, Money::from_dollars(9000));
        assert_eq!(cmi.current_monthly_income, Money::from_dollars(1500));
        assert_eq!(cmi.months_covered, 3);
        assert!(!cmi.is_complete);
    }

    #[test]
    fn test_same_month_entries_grouped() {
        let jan = month(2025, 1);
        let entries = vec![
            entry(jan, 2000).with_net(Money::from_dollars(1600)),
            MonthlyIncomeEntry::new(jan, Money::from_dollars(500), IncomeSource::Rental),
            entry(jan, 1000).with_net(Money::from_dollars(800)),
        ];

        let cmi = CmiService::new().calculate(&entries).unwrap();
        assert_eq!(cmi.months_covered, 1);

        let summary = &cmi.monthly_summaries[0];
        assert_eq!(summary.gross_total, Money::from_dollars(3500));
        assert_eq!(summary.net_total, Some(Money::from_dollars(2400)));
        assert_eq!(summary.entry_count, 3);
        assert_eq!(summary.by_source[&IncomeSource::Employment], Money::from_dollars(3000));
        assert_eq!(summary.by_source[&IncomeSource::Rental], Money::from_dollars(500));
    }

    #[test]
    fn test_net_total_absent_without_net_entries() {
        let cmi = CmiService::new()
            .calculate(&[entry(month(2025, 5), 100)])
            .unwrap();
        assert_eq!(cmi.monthly_summaries[0].net_total, None);
    }

    #[test]
    fn test_rounds_half_even_to_cents() {
        // $100.01 / 6 = 16.668333.. -> 16.67
        let entries = vec![MonthlyIncomeEntry::new(
            month(2025, 1),
            Money::from_cents(10_001),
            IncomeSource::Interest,
        )];
        let cmi = CmiService::new().calculate(&entries).unwrap();
        assert_eq!(cmi.current_monthly_income, Money::from_cents(1_667));

        // $0.03 / 6 = 0.005 -> 0.00 (tie goes to even)
        let entries = vec![MonthlyIncomeEntry::new(
            month(2025, 1),
            Money::from_cents(3),
            IncomeSource::Interest,
        )];
        let cmi = CmiService::new().calculate(&entries).unwrap();
        assert_eq!(cmi.current_monthly_income, Money::zero());
    }

    #[test]
    fn test_negative_entry_rejected() {
        let entries = vec![entry(month(2025, 1), -10)];
        let err = CmiService::new().calculate(&entries).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_totals_by_source() {
        let entries = vec![
            entry(month(2025, 1), 1000),
            entry(month(2025, 2), 1000),
            MonthlyIncomeEntry::new(month(2025, 2), Money::from_dollars(300), IncomeSource::Alimony),
        ];
        let cmi = CmiService::new().calculate(&entries).unwrap();
        let totals = &cmi.totals_by_source;
        assert_eq!(totals[&IncomeSource::Employment], Money::from_dollars(2000));
        assert_eq!(totals[&IncomeSource::Alimony], Money::from_dollars(300));
    }

    #[test]
    fn test_month_total_overflow_rejected() {
        let jan = month(2025, 1);
        let entries = vec![
            MonthlyIncomeEntry::new(jan, Money::from_cents(i64::MAX), IncomeSource::Employment),
            MonthlyIncomeEntry::new(jan, Money::from_cents(1), IncomeSource::Rental),
        ];
        let err = CmiService::new().calculate(&entries).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Monthly income total"));
    }

    #[test]
    fn test_six_month_total_overflow_rejected() {
        let entries = vec![
            MonthlyIncomeEntry::new(month(2025, 1), Money::from_cents(i64::MAX / 2 + 1), IncomeSource::Employment),
            MonthlyIncomeEntry::new(month(2025, 2), Money::from_cents(i64::MAX / 2 + 1), IncomeSource::Employment),
        ];
        let err = CmiService::new().calculate(&entries).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Six-month income total"));
    }

    #[test]
    fn test_deterministic() {
        let entries = vec![
            entry(month(2024, 11), 4100),
            entry(month(2025, 1), 3900),
            entry(month(2024, 12), 5000),
        ];
        let first = CmiService::new().calculate(&entries).unwrap();
        let second = CmiService::new().calculate(&entries).unwrap();
        assert_eq!(first, second);
    }
}
