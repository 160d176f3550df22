//! Service layer for means-test
//!
//! Services borrow an immutable [`StandardsTables`](crate::standards::StandardsTables)
//! and turn household and income value objects into allowances, CMI and
//! means test determinations.

pub mod allowances;
pub mod cmi;
pub mod housing;
pub mod import;
pub mod transportation;

pub use allowances::{AllowanceService, IrsAllowances};
pub use cmi::{CmiCalculation, CmiService, MonthlyIncomeSummary, CMI_MONTHS};
pub use housing::{HousingAllowance, HousingService};
pub use import::{read_income_ledger, read_income_ledger_file};
pub use means_test::{
    DisposableIncomePolicy, IncomeBasis, MeansTestEngine, MeansTestInput, MeansTestOutcome,
};
pub use transportation::{TransportationAllowance, TransportationService};
