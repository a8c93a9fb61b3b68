//! loan-ledger - Terminal loan ledger with daily simple interest
//!
//! Keeps fixed-term loans in memory and computes, for each, a day-by-day
//! schedule of simple interest on the principal at the base rate plus margin.
//!
//! # Architecture
//!
//! - `models`: money, rates, currencies and loans
//! - `services`: the interest engine and the loan service
//! - `storage`: the loan repository contract and its in-memory store
//! - `export`: JSON, YAML and CSV export, JSON and YAML import
//! - `display`: console formatting
//! - `cli`: the interactive shell and one-shot commands
//! - `config`: paths and settings
//! - `audit`: append-only log of loan changes
//!
//! # Example
//!
//! ```rust,ignore
//! use loan_ledger::models::{Currency, Loan, LoanId, LoanTerms, Money, Rate};
//!
//! let loan = Loan::new(LoanTerms {
//!     id: LoanId::generate(),
//!     start_date: "2024-01-01".parse()?,
//!     end_date: "2024-01-11".parse()?,
//!     currency: Currency::Eur,
//!     principal_amount: Money::parse("1000")?,
//!     base_interest_rate: Rate::parse("10")?,
//!     margin: Rate::parse("1")?,
//! });
//! assert_eq!(loan.schedule().len(), 10);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
