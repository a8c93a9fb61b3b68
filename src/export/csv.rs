//! CSV export of a loan's accrual schedule
//!
//! One row per accrued day, spreadsheet-compatible.

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Loan;

#[derive(Serialize)]
struct ScheduleRow<'a> {
    loan_id: &'a str,
    currency: &'static str,
    accrual_date: NaiveDate,
    days_elapsed: u32,
    daily_interest_without_margin: f64,
    daily_interest_accrued: f64,
    total_interest: f64,
}

/// Export a loan's schedule to CSV
pub fn export_schedule_csv<W: Write>(loan: &Loan, writer: &mut W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let currency = loan.terms().currency.code();

    for entry in loan.schedule() {
        csv_writer
            .serialize(ScheduleRow {
                loan_id: loan.id().as_str(),
                currency,
                accrual_date: entry.accrual_date,
                days_elapsed: entry.days_elapsed,
                daily_interest_without_margin: entry.daily_interest_without_margin,
                daily_interest_accrued: entry.daily_interest_accrued,
                total_interest: entry.total_interest,
            })
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
