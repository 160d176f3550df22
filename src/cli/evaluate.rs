//! Means test CLI command
//!
//! Runs the full two-stage determination for one household.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use super::household::{parse_money, HouseholdArgs, OutputFormat};
use crate::config::settings::Settings;
use crate::display::format_outcome;
use crate::error::{MeansTestError, MeansTestResult};
use crate::export::{export_outcome_json, export_outcome_yaml};
use crate::models::Money;
use crate::services::{
    read_income_ledger_file, DisposableIncomePolicy, IncomeBasis, MeansTestEngine, MeansTestInput,
};
use crate::standards::StandardsTables;

/// Arguments for `means-test evaluate`
#[derive(Debug, Clone, Args)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub household: HouseholdArgs,

    /// Current monthly income (e.g., "4200" or "4200.50")
    #[arg(short, long, value_parser = parse_money, conflicts_with = "ledger", required_unless_present = "ledger")]
    pub income: Option<Money>,

    /// CSV income ledger to compute current monthly income from
    #[arg(short, long)]
    pub ledger: Option<PathBuf>,

    /// Actual monthly expenses
    #[arg(short, long, value_parser = parse_money, default_value = "0")]
    pub expenses: Money,

    /// Total nonpriority unsecured debt
    #[arg(short, long, value_parser = parse_money, default_value = "0")]
    pub unsecured_debt: Money,

    /// Stage B policy for this run (overrides the settings file)
    #[arg(short, long)]
    pub policy: Option<DisposableIncomePolicy>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Handle the evaluate command
pub fn handle_evaluate_command(
    settings: &Settings,
    tables: &StandardsTables,
    args: EvaluateArgs,
) -> MeansTestResult<()> {
    let income = match (args.income, &args.ledger) {
        (Some(income), _) => IncomeBasis::Monthly(income),
        (None, Some(path)) => IncomeBasis::Ledger(read_income_ledger_file(path)?),
        (None, None) => {
            return Err(MeansTestError::Validation(
                "Either --income or --ledger is required".into(),
            ))
        }
    };

    let input = MeansTestInput {
        profile: args.household.to_profile(),
        income,
        monthly_expenses: args.expenses,
        unsecured_debt: args.unsecured_debt,
    };

    let policy = args.policy.unwrap_or(settings.disposable_income_policy);
    let outcome = MeansTestEngine::new(tables)
        .with_policy(policy)
        .evaluate(&input)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => {
            write!(out, "{}", format_outcome(&outcome, &settings.currency_symbol))?;
        }
        OutputFormat::Json => export_outcome_json(&outcome, &mut out, true)?,
        OutputFormat::Yaml => export_outcome_yaml(&outcome, &mut out)?,
    }

    Ok(())
}
