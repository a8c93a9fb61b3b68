//! YAML export of a single loan
//!
//! Same record shape as the JSON export, for human-readable output.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Loan;

/// Export a loan to YAML
pub fn export_loan_yaml<W: Write>(loan: &Loan, writer: &mut W) -> LedgerResult<()> {
    writeln!(writer, "# Loan {} ({} days of accrued interest)", loan.id(), loan.schedule().len())
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated by loan-ledger {}", env!("CARGO_PKG_VERSION"))
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, loan).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

/// Import a loan from a YAML export
pub fn import_loan_yaml(yaml_str: &str) -> LedgerResult<Loan> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(yaml_str).map_err(|e| LedgerError::Import(e.to_string()))?;
    super::check_currency(value["loan_details"]["currency"].as_str())?;

    let loan: Loan =
        serde_yaml::from_value(value).map_err(|e| LedgerError::Import(e.to_string()))?;

    super::verify_imported(loan)
}
