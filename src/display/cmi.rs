//! CMI history display

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Money;
use crate::services::{CmiCalculation, CMI_MONTHS};

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Gross")]
    gross: String,
    #[tabled(rename = "Net")]
    net: String,
    #[tabled(rename = "Entries")]
    entries: usize,
    #[tabled(rename = "Sources")]
    sources: String,
}

/// Format the month-by-month history followed by the CMI figure
pub fn format_cmi(cmi: &CmiCalculation, currency_symbol: &str) -> String {
    let money = |m: Money| m.format_with_symbol(currency_symbol);

    if cmi.monthly_summaries.is_empty() {
        return "No income entries found.".to_string();
    }

    let rows: Vec<MonthRow> = cmi
        .monthly_summaries
        .iter()
        .map(|summary| MonthRow {
            month: summary.income_month.to_string(),
            gross: money(summary.gross_total),
            net: summary.net_total.map(money).unwrap_or_else(|| "-".into()),
            entries: summary.entry_count,
            sources: summary
                .by_source
                .keys()
                .map(|source| source.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    let mut output = Table::new(rows)
        .with(Style::psql())
        .modify(Columns::new(1..3), Alignment::right())
        .to_string();

    output.push_str("\n\n");
    output.push_str(&format!(
        "Six-month total:        {}\n",
        money(cmi.six_month_total)
    ));
    output.push_str(&format!(
        "Current monthly income: {}\n",
        money(cmi.current_monthly_income)
    ));
    if cmi.totals_by_source.len() > 1 {
        output.push_str("\nBy source:\n");
        for (source, total) in &cmi.totals_by_source {
            output.push_str(&format!("  {:<22}{}\n", source.as_str(), money(*total)));
        }
    }
    if !cmi.is_complete {
        output.push_str(&format!(
            "\nNote: only {} of {} months have income entries; missing months count as zero.\n",
            cmi.months_covered, CMI_MONTHS
        ));
    }

    output
}
