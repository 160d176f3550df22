//! CSV income ledger import
//!
//! Reads a ledger of monthly income entries from CSV. The first row must be
//! a header; columns are located by name, so their order does not matter:
//!
//! ```text
//! month,gross,net,source,payer
//! 2025-03,4200.00,3310.55,employment,Acme Corp
//! 2025-03,650,,rental,
//! ```
//!
//! `net`, `source` and `payer` are optional. A blank source is recorded as
//! `other`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{MeansTestError, MeansTestResult};
use crate::models::{IncomeMonth, IncomeSource, Money, MonthlyIncomeEntry};

/// Positions of the ledger columns within a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerColumns {
    pub month: usize,
    pub gross: usize,
    pub net: Option<usize>,
    pub source: Option<usize>,
    pub payer: Option<usize>,
}

impl LedgerColumns {
    /// Locate ledger columns from a header record
    pub fn detect(headers: &StringRecord) -> MeansTestResult<Self> {
        let mut month = None;
        let mut gross = None;
        let mut net = None;
        let mut source = None;
        let mut payer = None;

        for (idx, header) in headers.iter().enumerate() {
            let h = header.trim().to_lowercase();
            match h.as_str() {
                "month" | "income_month" | "period" => month = month.or(Some(idx)),
                "gross" | "gross_amount" | "amount" => gross = gross.or(Some(idx)),
                "net" | "net_amount" => net = net.or(Some(idx)),
                "source" | "income_source" => source = source.or(Some(idx)),
                "payer" | "employer" => payer = payer.or(Some(idx)),
                _ => {}
            }
        }

        let month = month.ok_or_else(|| MeansTestError::Import {
            line: 1,
            message: "header has no 'month' column".into(),
        })?;
        let gross = gross.ok_or_else(|| MeansTestError::Import {
            line: 1,
            message: "header has no 'gross' column".into(),
        })?;

        Ok(Self {
            month,
            gross,
            net,
            source,
            payer,
        })
    }
}

/// Read an income ledger from any reader
pub fn read_income_ledger<R: Read>(reader: R) -> MeansTestResult<Vec<MonthlyIncomeEntry>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(|e| import_error(&e))?.clone();
    let columns = LedgerColumns::detect(&headers)?;

    let mut entries = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| import_error(&e))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let entry = parse_record(&record, &columns).map_err(|message| MeansTestError::Import {
            line,
            message,
        })?;
        entries.push(entry);
    }

    debug!(entries = entries.len(), "read income ledger");
    Ok(entries)
}

/// Read an income ledger from a CSV file
pub fn read_income_ledger_file(path: &Path) -> MeansTestResult<Vec<MonthlyIncomeEntry>> {
    let file = File::open(path).map_err(|e| {
        MeansTestError::Io(format!("Failed to open ledger {}: {}", path.display(), e))
    })?;
    read_income_ledger(file)
}

fn import_error(e: &csv::Error) -> MeansTestError {
    MeansTestError::Import {
        line: e.position().map(|p| p.line()).unwrap_or(0),
        message: e.to_string(),
    }
}

fn parse_record(record: &StringRecord, columns: &LedgerColumns) -> Result<MonthlyIncomeEntry, String> {
    let month_str = field(record, Some(columns.month)).ok_or("missing month")?;
    let income_month = IncomeMonth::parse(month_str).map_err(|e| e.to_string())?;

    let gross_str = field(record, Some(columns.gross)).ok_or("missing gross amount")?;
    let gross = parse_amount(gross_str)?;

    let source = match field(record, columns.source) {
        Some(s) => s.parse::<IncomeSource>()?,
        None => IncomeSource::Other,
    };

    let mut entry = MonthlyIncomeEntry::new(income_month, gross, source);
    if let Some(net_str) = field(record, columns.net) {
        entry = entry.with_net(parse_amount(net_str)?);
    }
    if let Some(payer) = field(record, columns.payer) {
        entry = entry.with_payer(payer);
    }

    entry.validate().map_err(|e| e.to_string())?;
    Ok(entry)
}

/// Non-empty field at an optional column
fn field(record: &StringRecord, column: Option<usize>) -> Option<&str> {
    column
        .and_then(|idx| record.get(idx))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn parse_amount(s: &str) -> Result<Money, String> {
    let cleaned: String = s.chars().filter(|c| *c != '$' && !c.is_whitespace()).collect();
    Money::parse(&cleaned).map_err(|e| format!("could not parse amount '{}': {}", s, e))
}
