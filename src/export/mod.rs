//! Export module for the loan ledger
//!
//! - JSON: the export contract (`loan_details` + `daily_interest`)
//! - YAML: the same record, human-readable
//! - CSV: the accrual schedule, spreadsheet-compatible

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_schedule_csv;
pub use json::{export_loan_json, import_loan_json};
pub use yaml::{export_loan_yaml, import_loan_yaml};

use std::fmt;
use std::io::Write;

use clap::ValueEnum;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Currency, Loan};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// JSON record (loan details and daily interest)
    #[default]
    Json,
    /// YAML record, human-readable
    Yaml,
    /// CSV rows, one per accrued day
    Csv,
}

impl ExportFormat {
    /// Parse a format name (case-insensitive)
    pub fn parse(s: &str) -> LedgerResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            other => Err(LedgerError::InvalidInput(format!(
                "unknown export format '{}', expected json, yaml or csv",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Write a loan in the requested format
pub fn export_loan<W: Write>(
    loan: &Loan,
    format: ExportFormat,
    writer: &mut W,
    pretty_json: bool,
) -> LedgerResult<()> {
    match format {
        ExportFormat::Json => export_loan_json(loan, writer, pretty_json),
        ExportFormat::Yaml => export_loan_yaml(loan, writer),
        ExportFormat::Csv => export_schedule_csv(loan, writer),
    }
}

/// Reject a currency code outside the allow-list before full deserialization
///
/// A missing or non-string code is left for deserialization to report.
fn check_currency(code: Option<&str>) -> LedgerResult<()> {
    match code {
        Some(code) => Currency::parse(code).map(|_| ()),
        None => Ok(()),
    }
}

/// Check an imported record against its own terms
///
/// The schedule is rebuilt from the terms; the imported entries must cover the
/// same days, otherwise the record was edited or truncated.
fn verify_imported(imported: Loan) -> LedgerResult<Loan> {
    imported
        .terms()
        .validate()
        .map_err(|e| LedgerError::Import(e.to_string()))?;

    let loan = Loan::new(imported.terms().clone());

    let same_days = loan.schedule().len() == imported.schedule().len()
        && loan
            .schedule()
            .iter()
            .zip(imported.schedule())
            .all(|(a, b)| a.accrual_date == b.accrual_date && a.days_elapsed == b.days_elapsed);

    if !same_days {
        return Err(LedgerError::Import(format!(
            "daily interest for loan {} does not match its loan details",
            loan.id()
        )));
    }

    Ok(loan)
}
