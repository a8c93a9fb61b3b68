//! Daily simple-interest accrual
//!
//! Interest accrues independently each day on the principal (no compounding)
//! using a fixed 365-day year. Leap years are not adjusted for, and a partial
//! final day is not prorated.

use chrono::NaiveDate;

use crate::models::{AccrualEntry, LoanTerms, Rate};

/// Days per year used to derive a daily rate from an annual one
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Divide an annual percentage into a daily fraction
pub fn daily_rate(rate: Rate) -> f64 {
    rate.as_percent() / 100.0 / DAYS_PER_YEAR
}

/// Whole days between two dates, zero when `end` is not after `start`
pub fn total_days(start: NaiveDate, end: NaiveDate) -> usize {
    end.signed_duration_since(start).num_days().max(0) as usize
}

/// Compute one accrual entry per whole day in `[start_date, end_date)`
///
/// Pure and infallible: terms are expected to be validated by the caller.
pub fn accrual_schedule(terms: &LoanTerms) -> Vec<AccrualEntry> {
    let days = total_days(terms.start_date, terms.end_date);
    let principal = terms.principal_amount.as_f64();

    let daily_without_margin = daily_rate(terms.base_interest_rate) * principal;
    let daily_with_margin = daily_rate(terms.total_rate()) * principal;

    let mut total_interest = 0.0;
    terms
        .start_date
        .iter_days()
        .take(days)
        .zip(1u32..)
        .map(|(accrual_date, days_elapsed)| {
            total_interest += daily_with_margin;
            AccrualEntry {
                accrual_date,
                days_elapsed,
                daily_interest_without_margin: daily_without_margin,
                daily_interest_accrued: daily_with_margin,
                total_interest,
            }
        })
        .collect()
}

/// Totals derived from an accrual schedule
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScheduleSummary {
    pub days: usize,
    pub interest_without_margin: f64,
    pub interest_with_margin: f64,
}

impl ScheduleSummary {
    pub fn from_schedule(schedule: &[AccrualEntry]) -> Self {
        Self {
            days: schedule.len(),
            interest_without_margin: schedule
                .iter()
                .map(|e| e.daily_interest_without_margin)
                .sum(),
            interest_with_margin: schedule.last().map_or(0.0, |e| e.total_interest),
        }
    }

    /// Interest attributable to the margin alone
    pub fn margin_interest(&self) -> f64 {
        self.interest_with_margin - self.interest_without_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, LoanId, Money};

    const TOLERANCE: f64 = 1e-9;

    fn terms(start: &str, end: &str, principal: i64, base: i64, margin: i64) -> LoanTerms {
        LoanTerms {
            id: LoanId::new("test"),
            start_date: start.parse().unwrap(),
            end_date: end.parse().unwrap(),
            currency: Currency::Eur,
            principal_amount: Money::from_units_cents(principal, 0),
            base_interest_rate: Rate::from_percent(base),
            margin: Rate::from_percent(margin),
        }
    }

    #[test]
    fn test_daily_rate() {
        assert!((daily_rate(Rate::from_percent(10)) - 10.0 / 100.0 / 365.0).abs() < TOLERANCE);
        assert_eq!(daily_rate(Rate::default()), 0.0);
    }

    #[test]
    fn test_ten_day_schedule() {
        let schedule = accrual_schedule(&terms("2024-01-01", "2024-01-11", 1000, 10, 1));
        assert_eq!(schedule.len(), 10);

        let without_margin = 10.0 / 100.0 / 365.0 * 1000.0;
        let with_margin = 11.0 / 100.0 / 365.0 * 1000.0;
        let start: NaiveDate = "2024-01-01".parse().unwrap();

        for (i, entry) in schedule.iter().enumerate() {
            assert_eq!(entry.accrual_date, start + chrono::Days::new(i as u64));
            assert_eq!(entry.days_elapsed as usize, i + 1);
            assert!((entry.daily_interest_without_margin - without_margin).abs() < TOLERANCE);
            assert!((entry.daily_interest_accrued - with_margin).abs() < TOLERANCE);
            assert!((entry.total_interest - with_margin * (i + 1) as f64).abs() < TOLERANCE);
        }

        assert!((schedule[0].daily_interest_without_margin - 0.27397).abs() < 1e-5);
        assert!((schedule[0].daily_interest_accrued - 0.30137).abs() < 1e-5);
        assert!((schedule[9].total_interest - 3.0137).abs() < 1e-4);
    }

    #[test]
    fn test_entry_count_matches_day_span() {
        let cases = [
            ("2024-01-01", "2024-01-02", 1),
            ("2024-02-01", "2024-03-01", 29),
            ("2023-02-01", "2023-03-01", 28),
            ("2024-01-01", "2025-01-01", 366),
        ];
        for (start, end, expected) in cases {
            let schedule = accrual_schedule(&terms(start, end, 500, 5, 0));
            assert_eq!(schedule.len(), expected, "{} -> {}", start, end);
        }
    }

    #[test]
    fn test_days_elapsed_increasing_and_total_non_decreasing() {
        let schedule = accrual_schedule(&terms("2024-03-01", "2024-06-15", 2500, 4, 2));
        for pair in schedule.windows(2) {
            assert_eq!(pair[1].days_elapsed, pair[0].days_elapsed + 1);
            assert!(pair[1].total_interest >= pair[0].total_interest);
        }
        assert_eq!(schedule.first().unwrap().days_elapsed, 1);
    }

    #[test]
    fn test_empty_span_yields_no_entries() {
        assert!(accrual_schedule(&terms("2024-01-01", "2024-01-01", 1000, 10, 1)).is_empty());
        assert!(accrual_schedule(&terms("2024-01-05", "2024-01-01", 1000, 10, 1)).is_empty());
    }

    #[test]
    fn test_zero_rates_accrue_nothing() {
        let schedule = accrual_schedule(&terms("2024-01-01", "2024-01-04", 1000, 0, 0));
        assert_eq!(schedule.len(), 3);
        assert!(schedule.iter().all(|e| e.total_interest == 0.0));
    }

    #[test]
    fn test_summary() {
        let schedule = accrual_schedule(&terms("2024-01-01", "2024-01-11", 1000, 10, 1));
        let summary = ScheduleSummary::from_schedule(&schedule);
        assert_eq!(summary.days, 10);
        assert!((summary.interest_with_margin - 3.0137).abs() < 1e-4);
        assert!((summary.interest_without_margin - 2.7397).abs() < 1e-4);
        assert!((summary.margin_interest() - 0.27397).abs() < 1e-4);
    }
}
