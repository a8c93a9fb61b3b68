//! Audit log display formatting

use std::path::Path;

use crate::audit::AuditEntry;

/// Format the most recent audit entries, oldest first
pub fn format_audit_log(path: &Path, entries: &[AuditEntry], total: usize) -> String {
    if entries.is_empty() {
        return format!("No audit entries in {}", path.display());
    }

    let mut output = format!(
        "Showing {} of {} audit entries from {}\n",
        entries.len(),
        total,
        path.display()
    );
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, LoanId, LoanTerms, Money, Rate};

    fn terms() -> LoanTerms {
        LoanTerms {
            id: LoanId::new("a1b2c3d4"),
            start_date: "2024-01-01".parse().unwrap(),
            end_date: "2024-01-11".parse().unwrap(),
            currency: Currency::Gbp,
            principal_amount: Money::from_units_cents(500, 0),
            base_interest_rate: Rate::from_percent(5),
            margin: Rate::from_percent(0),
        }
    }

    #[test]
    fn test_format_entries() {
        let before = terms();
        let mut after = terms();
        after.end_date = "2024-02-01".parse().unwrap();
        let entries = vec![AuditEntry::create(&before), AuditEntry::update(&before, &after)];

        let output = format_audit_log(Path::new("audit.log"), &entries, 5);

        assert!(output.starts_with("Showing 2 of 5 audit entries from audit.log"));
        assert!(output.contains("CREATE Loan a1b2c3d4"));
        assert!(output.contains("UPDATE Loan a1b2c3d4"));
        assert!(output.contains("end_date: 2024-01-11 -> 2024-02-01"));
    }

    #[test]
    fn test_format_empty_log() {
        assert_eq!(
            format_audit_log(Path::new("audit.log"), &[], 0),
            "No audit entries in audit.log"
        );
    }
}
