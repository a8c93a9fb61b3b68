//! Loan display formatting
//!
//! Formats loans for terminal output in detail and table views.

use std::collections::BTreeMap;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{paint, LABEL_COLOR};
use crate::models::{Loan, LoanId};
use crate::services::ScheduleSummary;

#[derive(Tabled)]
struct ScheduleRow {
    #[tabled(rename = "Day")]
    day: u32,
    #[tabled(rename = "Accrual Date")]
    date: String,
    #[tabled(rename = "Interest without Margin")]
    without_margin: String,
    #[tabled(rename = "Interest Accrued")]
    accrued: String,
    #[tabled(rename = "Total Interest")]
    total: String,
}

#[derive(Tabled)]
struct LoanRow {
    #[tabled(rename = "Loan ID")]
    id: String,
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Principal")]
    principal: String,
    #[tabled(rename = "Start Date")]
    start: String,
    #[tabled(rename = "End Date")]
    end: String,
    #[tabled(rename = "Days")]
    days: usize,
    #[tabled(rename = "Total Interest")]
    total: String,
}

/// Format an interest amount with its currency symbol
fn format_interest(symbol: &str, amount: f64) -> String {
    format!("{}{:.6}", symbol, amount)
}

/// Format a loan's terms and interest totals
pub fn format_loan_details(loan: &Loan, color: bool) -> String {
    let terms = loan.terms();
    let symbol = terms.currency.symbol();
    let summary = ScheduleSummary::from_schedule(loan.schedule());
    let label = |name: &str| paint(name, LABEL_COLOR, color);

    let mut output = String::new();

    output.push_str(&format!("{}: {}\n", label("Loan ID"), terms.id));
    output.push_str(&format!("{}: {}\n", label("Start Date"), terms.start_date));
    output.push_str(&format!("{}: {}\n", label("End Date"), terms.end_date));
    output.push_str(&format!(
        "{}: {}\n",
        label("Loan Amount"),
        terms.principal_amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("{}: {}\n", label("Loan Currency"), terms.currency));
    output.push_str(&format!(
        "{}: {}\n",
        label("Base Interest Rate"),
        terms.base_interest_rate
    ));
    output.push_str(&format!("{}: {}\n", label("Margin"), terms.margin));
    output.push_str(&format!("{}: {}\n", label("Days Accrued"), summary.days));
    output.push_str(&format!(
        "{}: {}\n",
        label("Interest without Margin"),
        format_interest(symbol, summary.interest_without_margin)
    ));
    output.push_str(&format!(
        "{}: {}\n",
        label("Total Interest"),
        format_interest(symbol, summary.interest_with_margin)
    ));

    output
}

/// Format a loan's accrual schedule as a table
pub fn format_schedule_table(loan: &Loan) -> String {
    if loan.schedule().is_empty() {
        return "No interest has accrued.".to_string();
    }

    let symbol = loan.terms().currency.symbol();
    let rows = loan.schedule().iter().map(|entry| ScheduleRow {
        day: entry.days_elapsed,
        date: entry.accrual_date.to_string(),
        without_margin: format_interest(symbol, entry.daily_interest_without_margin),
        accrued: format_interest(symbol, entry.daily_interest_accrued),
        total: format_interest(symbol, entry.total_interest),
    });

    Table::new(rows).with(Style::modern()).to_string()
}

/// Format all loans as a summary table
pub fn format_loan_list(loans: &BTreeMap<LoanId, Loan>) -> String {
    if loans.is_empty() {
        return "There are no loans to be listed".to_string();
    }

    let rows = loans.values().map(|loan| {
        let terms = loan.terms();
        let symbol = terms.currency.symbol();
        LoanRow {
            id: terms.id.to_string(),
            currency: terms.currency.to_string(),
            principal: terms.principal_amount.format_with_symbol(symbol),
            start: terms.start_date.to_string(),
            end: terms.end_date.to_string(),
            days: loan.schedule().len(),
            total: format_interest(symbol, loan.total_interest()),
        }
    });

    Table::new(rows).with(Style::modern()).to_string()
}
