//! JSON export of a single loan
//!
//! The record is `{"loan_details": {...}, "daily_interest": [...]}` with dates
//! as `YYYY-MM-DD` and amounts/rates as decimal numbers.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Loan;

/// Export a loan to JSON
pub fn export_loan_json<W: Write>(loan: &Loan, writer: &mut W, pretty: bool) -> LedgerResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, loan)
    } else {
        serde_json::to_writer(&mut *writer, loan)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

/// Import a loan from a JSON export
pub fn import_loan_json(json_str: &str) -> LedgerResult<Loan> {
    let value: serde_json::Value =
        serde_json::from_str(json_str).map_err(|e| LedgerError::Import(e.to_string()))?;
    super::check_currency(value["loan_details"]["currency"].as_str())?;

    let loan: Loan =
        serde_json::from_value(value).map_err(|e| LedgerError::Import(e.to_string()))?;

    super::verify_imported(loan)
}
