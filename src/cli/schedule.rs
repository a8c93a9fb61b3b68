//! One-shot schedule computation
//!
//! Computes and prints the accrual schedule for a set of terms without
//! storing anything.

use std::io::Write;

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::display::{format_loan_details, format_schedule_table};
use crate::error::LedgerResult;
use crate::export::{export_loan, ExportFormat};
use crate::models::{Currency, Loan, LoanId, LoanTerms};

use super::prompt::{parse_amount, parse_date, parse_rate};

/// Output format for the schedule command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ScheduleFormat {
    /// Loan details and a schedule table
    #[default]
    Table,
    /// JSON record (loan details and daily interest)
    Json,
    /// YAML record, human-readable
    Yaml,
    /// CSV rows, one per accrued day
    Csv,
}

impl ScheduleFormat {
    fn export_format(self) -> Option<ExportFormat> {
        match self {
            Self::Table => None,
            Self::Json => Some(ExportFormat::Json),
            Self::Yaml => Some(ExportFormat::Yaml),
            Self::Csv => Some(ExportFormat::Csv),
        }
    }
}

/// Arguments for `schedule`
#[derive(Args, Debug, Clone)]
pub struct ScheduleArgs {
    /// First day of the loan (YYYY-MM-DD)
    #[arg(long)]
    pub start: String,

    /// Day the loan ends, not accrued (YYYY-MM-DD)
    #[arg(long)]
    pub end: String,

    /// Principal amount, at most 2 decimal places
    #[arg(long, allow_hyphen_values = true)]
    pub amount: String,

    /// Currency code (EUR, GBP or USD)
    #[arg(long)]
    pub currency: String,

    /// Base interest rate in percent
    #[arg(long, allow_hyphen_values = true)]
    pub rate: String,

    /// Margin in percent
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub margin: String,

    /// Loan ID to show in the output (generated when omitted)
    #[arg(long)]
    pub id: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: ScheduleFormat,
}

impl ScheduleArgs {
    /// Parse and validate the arguments into loan terms
    pub fn to_terms(&self) -> LedgerResult<LoanTerms> {
        let id = match &self.id {
            Some(id) => id.parse()?,
            None => LoanId::generate(),
        };

        let terms = LoanTerms {
            id,
            start_date: parse_date(&self.start)?,
            end_date: parse_date(&self.end)?,
            currency: Currency::parse(&self.currency)?,
            principal_amount: parse_amount(&self.amount)?,
            base_interest_rate: parse_rate(&self.rate)?,
            margin: parse_rate(&self.margin)?,
        };
        terms.validate()?;

        Ok(terms)
    }
}

/// Handle the `schedule` command
pub fn handle_schedule_command<W: Write>(
    args: &ScheduleArgs,
    settings: &Settings,
    color: bool,
    out: &mut W,
) -> LedgerResult<()> {
    let loan = Loan::new(args.to_terms()?);
    tracing::debug!(loan_id = %loan.id(), days = loan.schedule().len(), "Computed schedule");

    match args.format.export_format() {
        Some(format) => export_loan(&loan, format, out, settings.pretty_json),
        None => {
            writeln!(out, "{}", format_loan_details(&loan, color).trim_end())?;
            writeln!(out, "{}", format_schedule_table(&loan))?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;

    fn args(format: ScheduleFormat) -> ScheduleArgs {
        ScheduleArgs {
            start: "2024-01-01".into(),
            end: "2024-01-11".into(),
            amount: "1000".into(),
            currency: "eur".into(),
            rate: "10".into(),
            margin: "1".into(),
            id: Some("L1".into()),
            format,
        }
    }

    fn run(args: &ScheduleArgs) -> LedgerResult<String> {
        let mut out = Vec::new();
        handle_schedule_command(args, &Settings::default(), false, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_table_output() {
        let output = run(&args(ScheduleFormat::Table)).unwrap();
        assert!(output.contains("Loan ID: L1"));
        assert!(output.contains("Total Interest: €3.013699"));
        assert!(output.contains("2024-01-10"));
    }

    #[test]
    fn test_json_output() {
        let output = run(&args(ScheduleFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["loan_details"]["id"], "L1");
        assert_eq!(value["daily_interest"].as_array().unwrap().len(), 10);
    }

    #[test]
    fn test_generated_id() {
        let mut args = args(ScheduleFormat::Csv);
        args.id = None;
        let terms = args.to_terms().unwrap();
        assert_eq!(terms.id.as_str().len(), 8);
    }

    #[test]
    fn test_invalid_arguments() {
        let mut bad_currency = args(ScheduleFormat::Table);
        bad_currency.currency = "JPY".into();
        assert!(matches!(run(&bad_currency), Err(LedgerError::InvalidCurrency(_))));

        let mut reversed = args(ScheduleFormat::Table);
        reversed.end = "2023-12-31".into();
        assert!(matches!(run(&reversed), Err(LedgerError::InvalidInput(_))));

        let mut precise = args(ScheduleFormat::Table);
        precise.amount = "10.001".into();
        assert!(run(&precise).is_err());
    }
}
