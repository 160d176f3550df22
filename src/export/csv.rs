//! CSV Export functionality
//!
//! Exports the month-by-month CMI history in spreadsheet-compatible form.

use crate::error::{MeansTestError, MeansTestResult};
use crate::models::{IncomeSource, Money};
use crate::services::CmiCalculation;
use std::io::Write;

/// Export the monthly summaries of a CMI calculation, newest month first
///
/// One column per income source follows the totals so that spreadsheet users
/// can reconcile the figures against the official form.
pub fn export_cmi_csv<W: Write>(cmi: &CmiCalculation, writer: W) -> MeansTestResult<()> {
    let err = |e: csv::Error| MeansTestError::Export(e.to_string());
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["month", "gross", "net", "entries"];
    header.extend(IncomeSource::ALL.iter().map(|s| s.as_str()));
    csv_writer.write_record(&header).map_err(err)?;

    for summary in &cmi.monthly_summaries {
        let mut record = vec![
            summary.income_month.to_string(),
            decimal(summary.gross_total),
            summary.net_total.map(decimal).unwrap_or_default(),
            summary.entry_count.to_string(),
        ];
        record.extend(IncomeSource::ALL.iter().map(|source| {
            summary
                .by_source
                .get(source)
                .copied()
                .map(decimal)
                .unwrap_or_default()
        }));
        csv_writer.write_record(&record).map_err(err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| MeansTestError::Export(e.to_string()))?;
    Ok(())
}

/// Plain decimal amount without symbol or grouping
fn decimal(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{}{}.{:02}", sign, amount.dollars().abs(), amount.cents_part())
}
