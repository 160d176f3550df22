//! Means test result formatting

use crate::models::Money;
use crate::services::MeansTestOutcome;

use super::allowances::format_allowances;

const WIDTH: usize = 60;

/// Headline verdict for an outcome
pub fn verdict(outcome: &MeansTestOutcome) -> &'static str {
    if outcome.presumption_test_pending {
        "UNDETERMINED"
    } else if outcome.passes {
        "PASS"
    } else {
        "PRESUMPTION OF ABUSE"
    }
}

/// Format a full means test result for the terminal
pub fn format_outcome(outcome: &MeansTestOutcome, currency_symbol: &str) -> String {
    let money = |m: Money| m.format_with_symbol(currency_symbol);
    let mut output = String::new();

    output.push_str(&format!("Means Test: {}\n", verdict(outcome)));
    output.push_str(&format!("{}\n", "═".repeat(WIDTH)));
    output.push_str(&format!(
        "State: {}   Household size: {}   Tables effective: {}\n",
        outcome.state, outcome.household_size, outcome.effective_date
    ));
    output.push('\n');

    output.push_str(&format!(
        "Current monthly income:  {:>14}\n",
        money(outcome.current_monthly_income)
    ));
    output.push_str(&format!(
        "Annualized income:       {:>14}\n",
        money(outcome.annual_income)
    ));
    output.push_str(&format!(
        "State median income:     {:>14}\n",
        money(outcome.median_income)
    ));
    output.push_str(&format!(
        "Above median:            {:>14}\n",
        if outcome.is_above_median { "yes" } else { "no" }
    ));

    if let Some(allowable) = outcome.allowable_expenses {
        output.push_str(&format!("Allowable expenses:      {:>14}\n", money(allowable)));
    }
    if let Some(disposable) = outcome.monthly_disposable_income {
        output.push_str(&format!("Monthly disposable:      {:>14}\n", money(disposable)));
    }
    if let Some(sixty) = outcome.sixty_month_disposable {
        output.push_str(&format!("60-month disposable:     {:>14}\n", money(sixty)));
    }
    if outcome.is_above_median {
        output.push_str(&format!("Stage B policy:          {:>14}\n", outcome.policy));
    }

    output.push('\n');
    output.push_str(&outcome.reason);
    output.push_str("\n\n");

    output.push_str("IRS allowances\n");
    output.push_str(&format!("{}\n", "─".repeat(WIDTH)));
    output.push_str(&format_allowances(&outcome.allowances, currency_symbol));
    output.push('\n');

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HouseholdProfile;
    use crate::services::{DisposableIncomePolicy, MeansTestEngine, MeansTestInput};
    use crate::standards::StandardsTables;

    #[test]
    fn test_below_median_output() {
        let tables = StandardsTables::builtin();
        let input = MeansTestInput::monthly(HouseholdProfile::new("CA", 1, 40), Money::from_dollars(3000));
        let outcome = MeansTestEngine::new(&tables).evaluate(&input).unwrap();

        let output = format_outcome(&outcome, "$");
        assert!(output.starts_with("Means Test: PASS"));
        assert!(output.contains("$36,000.00"));
        assert!(output.contains("$77,221.00"));
        assert!(output.contains("below median income"));
        assert!(output.contains("2025-04-01"));
        assert!(!output.contains("Stage B policy"));
    }

    #[test]
    fn test_deferred_output() {
        let tables = StandardsTables::builtin();
        let input = MeansTestInput::monthly(HouseholdProfile::new("CA", 1, 40), Money::from_dollars(8000));
        let outcome = MeansTestEngine::new(&tables)
            .with_policy(DisposableIncomePolicy::Deferred)
            .evaluate(&input)
            .unwrap();

        let output = format_outcome(&outcome, "$");
        assert!(output.starts_with("Means Test: UNDETERMINED"));
        assert!(output.contains("deferred"));
        assert!(!output.contains("Monthly disposable"));
    }

    #[test]
    fn test_verdicts() {
        let tables = StandardsTables::builtin();
        let input = MeansTestInput::monthly(HouseholdProfile::new("CA", 1, 40), Money::from_dollars(20_000));
        let outcome = MeansTestEngine::new(&tables).evaluate(&input).unwrap();
        assert_eq!(verdict(&outcome), "PRESUMPTION OF ABUSE");
    }
}
