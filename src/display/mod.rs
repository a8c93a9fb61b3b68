//! Display formatting for terminal output
//!
//! Formats loans for the console (coloured detail blocks and schedule tables)
//! and recent audit entries.

pub mod audit;
pub mod loan;

pub use audit::format_audit_log;
pub use loan::{format_loan_details, format_loan_list, format_schedule_table};

use crossterm::style::{style, Color, Stylize};

/// Colour for field labels and identifiers
pub const LABEL_COLOR: Color = Color::Cyan;

/// Colour for errors and cancellations
pub const ERROR_COLOR: Color = Color::Red;

/// Wrap text in ANSI colour codes when colour output is enabled
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        style(text).with(color).to_string()
    } else {
        text.to_string()
    }
}

/// Format an error message for the console, with a leading tab
pub fn format_error(message: &str, color: bool) -> String {
    format!("\t{}", paint(message, ERROR_COLOR, color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_disabled() {
        assert_eq!(paint("Loan ID", LABEL_COLOR, false), "Loan ID");
    }

    #[test]
    fn test_paint_enabled() {
        let painted = paint("Loan ID", LABEL_COLOR, true);
        assert!(painted.contains("Loan ID"));
        // crossterm honours NO_COLOR on its own
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(painted.contains('\u{1b}'));
        }
    }

    #[test]
    fn test_format_error() {
        assert_eq!(format_error("Boom", false), "\tBoom");
    }
}
