//! Allowance display formatting
//!
//! Renders the IRS allowance breakdown as a table, one row per line of
//! Official Form 122A-2 that the engine covers.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::services::IrsAllowances;

#[derive(Tabled)]
struct AllowanceRow {
    #[tabled(rename = "Allowance")]
    line: &'static str,
    #[tabled(rename = "Monthly")]
    amount: String,
    #[tabled(rename = "Basis")]
    basis: String,
}

/// Format the allowance breakdown as a table
pub fn format_allowances(allowances: &IrsAllowances, currency_symbol: &str) -> String {
    let money = |m: crate::models::Money| m.format_with_symbol(currency_symbol);
    let t = &allowances.transportation;

    let housing_basis = if allowances.using_county_data {
        "county figure"
    } else {
        "state or national default"
    };
    let operating_basis = match &t.metro_area {
        Some(metro) => format!("{} metro area", metro),
        None => format!("{} region", t.region),
    };

    let mut rows = vec![
        AllowanceRow {
            line: "National Standards",
            amount: money(allowances.national_standards),
            basis: "food, clothing, housekeeping, personal care, misc.".into(),
        },
        AllowanceRow {
            line: "Housing & utilities",
            amount: money(allowances.housing_utilities),
            basis: housing_basis.into(),
        },
    ];

    if t.ownership.is_positive() || t.operating.is_positive() {
        rows.push(AllowanceRow {
            line: "Vehicle ownership",
            amount: money(t.ownership),
            basis: "national rate".into(),
        });
        rows.push(AllowanceRow {
            line: "Vehicle operating",
            amount: money(t.operating),
            basis: operating_basis,
        });
    } else {
        rows.push(AllowanceRow {
            line: "Public transportation",
            amount: money(t.public_transit),
            basis: if t.public_transit.is_positive() {
                "national rate".into()
            } else {
                "no vehicle, no transit".into()
            },
        });
    }

    rows.push(AllowanceRow {
        line: "Health care",
        amount: money(allowances.health_care),
        basis: "out-of-pocket, by age band".into(),
    });
    rows.push(AllowanceRow {
        line: "Total",
        amount: money(allowances.total),
        basis: String::new(),
    });

    Table::new(rows)
        .with(Style::psql())
        .modify(Columns::single(1), Alignment::right())
        .to_string()
}
