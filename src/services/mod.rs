//! Service layer for the loan ledger
//!
//! The interest engine computes accrual schedules; the loan service applies
//! validation and auditing on top of the storage layer.

pub mod interest;
pub mod loan;

pub use interest::{accrual_schedule, daily_rate, ScheduleSummary};
pub use loan::LoanService;
