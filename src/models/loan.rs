//! Loan model
//!
//! A loan is its terms plus the daily accrual schedule derived from them.
//! The schedule is never edited in place: building a `Loan` always computes it
//! in full from the terms.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::ids::LoanId;
use super::money::Money;
use super::rate::Rate;
use crate::error::{LedgerError, LedgerResult};
use crate::services::interest::{accrual_schedule, total_days};

/// Longest accepted loan term, in days (100 years)
pub const MAX_TERM_DAYS: usize = 36_500;

/// The terms a loan was agreed on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Unique identifier for the loan
    pub id: LoanId,

    /// First day of the loan period
    pub start_date: NaiveDate,

    /// End of the loan period (exclusive)
    pub end_date: NaiveDate,

    /// Currency the principal is denominated in
    pub currency: Currency,

    /// Initial loaned amount
    pub principal_amount: Money,

    /// Annual base interest rate, in percent
    pub base_interest_rate: Rate,

    /// Additional annual interest on top of the base rate, in percent
    pub margin: Rate,
}

impl LoanTerms {
    /// Base rate plus margin
    ///
    /// Saturates instead of overflowing; `validate` rejects terms where the
    /// sum does not fit.
    pub fn total_rate(&self) -> Rate {
        self.base_interest_rate.saturating_add(self.margin)
    }

    /// Validate the terms
    pub fn validate(&self) -> LedgerResult<()> {
        if self.id.is_empty() {
            return Err(LedgerError::InvalidInput("loan ID cannot be empty".into()));
        }

        if self.end_date <= self.start_date {
            return Err(LedgerError::InvalidInput(
                "end date needs to be after start date".into(),
            ));
        }

        if self.principal_amount.is_negative() {
            return Err(LedgerError::InvalidInput(
                "principal amount must not be negative".into(),
            ));
        }

        if self.base_interest_rate.is_negative() {
            return Err(LedgerError::InvalidInput(
                "base interest rate must not be negative".into(),
            ));
        }

        if self.margin.is_negative() {
            return Err(LedgerError::InvalidInput("margin must not be negative".into()));
        }

        if self.base_interest_rate.checked_add(self.margin).is_none() {
            return Err(LedgerError::InvalidInput(
                "base interest rate plus margin is too large".into(),
            ));
        }

        if total_days(self.start_date, self.end_date) > MAX_TERM_DAYS {
            return Err(LedgerError::InvalidInput(format!(
                "loan term must not exceed {} days",
                MAX_TERM_DAYS
            )));
        }

        Ok(())
    }
}

/// Interest accrued on a single day of the loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccrualEntry {
    /// The day the interest accrued on
    pub accrual_date: NaiveDate,

    /// 1-based count of days since the start date
    pub days_elapsed: u32,

    /// Daily interest at the base rate only
    pub daily_interest_without_margin: f64,

    /// Daily interest at the base rate plus margin
    pub daily_interest_accrued: f64,

    /// Running total of `daily_interest_accrued` up to and including this day
    pub total_interest: f64,
}

/// A loan and its day-by-day accrual schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    #[serde(rename = "loan_details")]
    terms: LoanTerms,

    #[serde(rename = "daily_interest")]
    schedule: Vec<AccrualEntry>,
}

impl Loan {
    /// Build a loan, computing its full accrual schedule
    pub fn new(terms: LoanTerms) -> Self {
        let schedule = accrual_schedule(&terms);
        Self { terms, schedule }
    }

    pub fn id(&self) -> &LoanId {
        &self.terms.id
    }

    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    /// Accrual entries in chronological order
    pub fn schedule(&self) -> &[AccrualEntry] {
        &self.schedule
    }

    /// Cumulative interest (with margin) over the whole schedule
    pub fn total_interest(&self) -> f64 {
        self.schedule.last().map_or(0.0, |e| e.total_interest)
    }
}
