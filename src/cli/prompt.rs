//! Line-oriented prompts with input validation
//!
//! `Prompter` reads answers from any `BufRead` and writes prompts to any
//! `Write`, so the interactive shell can be driven from stdin or from tests.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::display::{format_error, paint, LABEL_COLOR};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Currency, LoanId, LoanTerms, Money, Rate};

/// Date format accepted for all date fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| {
        LedgerError::InvalidInput(format!("'{}' is not a valid date, expected YYYY-MM-DD", s))
    })
}

/// Parse a non-negative amount with at most two decimal places
pub fn parse_amount(s: &str) -> LedgerResult<Money> {
    let amount = Money::parse(s)?;
    if amount.is_negative() {
        return Err(LedgerError::InvalidInput("value must not be negative".into()));
    }
    Ok(amount)
}

/// Parse a non-negative percentage with at most two decimal places
pub fn parse_rate(s: &str) -> LedgerResult<Rate> {
    let rate = Rate::parse(s)?;
    if rate.is_negative() {
        return Err(LedgerError::InvalidInput("value must not be negative".into()));
    }
    Ok(rate)
}

/// Reads and validates answers to console prompts
pub struct Prompter<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// The underlying writer, for bulk output such as exports
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Write a line of output
    pub fn say(&mut self, text: &str) -> LedgerResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Report a recoverable error in red
    pub fn report(&mut self, err: &LedgerError) -> LedgerResult<()> {
        let line = format_error(&err.to_string(), self.color);
        self.say(&line)
    }

    /// Print a prompt and read one trimmed line, which may be empty
    ///
    /// End of input is reported as `InputClosed`.
    pub fn read_line(&mut self, name: &str, hint: &str) -> LedgerResult<String> {
        let label = if hint.is_empty() {
            format!("{}: ", name)
        } else {
            format!("{} ({}): ", name, hint)
        };
        write!(self.output, "{}", paint(&label, LABEL_COLOR, self.color))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(LedgerError::InputClosed);
        }

        Ok(line.trim().to_string())
    }

    /// Read a required, non-empty answer
    pub fn ask(&mut self, name: &str, hint: &str) -> LedgerResult<String> {
        let answer = self.read_line(name, hint)?;
        if answer.is_empty() {
            return Err(LedgerError::InvalidInput(format!("{} is required", name)));
        }
        Ok(answer)
    }

    /// Repeat a prompt until it yields a value; fatal errors still propagate
    pub fn ask_until<T, F>(&mut self, mut attempt: F) -> LedgerResult<T>
    where
        F: FnMut(&mut Self) -> LedgerResult<T>,
    {
        loop {
            match attempt(self) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => self.report(&err)?,
            }
        }
    }

    pub fn ask_loan_id(&mut self) -> LedgerResult<LoanId> {
        self.ask("Loan ID", "8 character ID")?.parse()
    }

    pub fn ask_date(&mut self, name: &str) -> LedgerResult<NaiveDate> {
        parse_date(&self.ask(name, "YYYY-MM-DD")?)
    }

    /// Ask for a date strictly after `after`
    pub fn ask_date_after(&mut self, name: &str, after: NaiveDate) -> LedgerResult<NaiveDate> {
        let date = self.ask_date(name)?;
        if date <= after {
            return Err(LedgerError::InvalidInput(
                "end date needs to be after start date".into(),
            ));
        }
        Ok(date)
    }

    pub fn ask_amount(&mut self, name: &str, hint: &str) -> LedgerResult<Money> {
        parse_amount(&self.ask(name, hint)?)
    }

    pub fn ask_rate(&mut self, name: &str) -> LedgerResult<Rate> {
        parse_rate(&self.ask(name, "percentage")?)
    }

    /// Ask for a currency; an empty answer picks `default` when one is set
    pub fn ask_currency(&mut self, name: &str, default: Option<Currency>) -> LedgerResult<Currency> {
        let hint = match default {
            Some(currency) => format!("{} [{}]", Currency::allowed_codes(), currency),
            None => Currency::allowed_codes(),
        };

        let answer = self.read_line(name, &hint)?;
        match (answer.is_empty(), default) {
            (true, Some(currency)) => Ok(currency),
            (true, None) => Err(LedgerError::InvalidInput(format!("{} is required", name))),
            (false, _) => Currency::parse(&answer),
        }
    }

    /// Ask a yes/no question until one of y, yes, n or no is given
    pub fn confirm(&mut self, question: &str) -> LedgerResult<bool> {
        loop {
            match self.read_line(question, "yes/no")?.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => continue,
            }
        }
    }

    /// Walk through the loan form, re-asking each field until it is valid
    pub fn ask_loan_terms(
        &mut self,
        id: LoanId,
        default_currency: Option<Currency>,
    ) -> LedgerResult<LoanTerms> {
        self.say("")?;
        self.say("Input the values for the loan")?;

        let start_date = self.ask_until(|p| p.ask_date("Start Date"))?;
        let end_date = self.ask_until(|p| p.ask_date_after("End Date", start_date))?;
        let principal_amount =
            self.ask_until(|p| p.ask_amount("Loan Amount", "principal amount being loaned"))?;
        let currency = self.ask_until(|p| p.ask_currency("Loan Currency", default_currency))?;
        let base_interest_rate = self.ask_until(|p| p.ask_rate("Base Interest Rate"))?;
        let margin = self.ask_until(|p| p.ask_rate("Margin"))?;

        Ok(LoanTerms {
            id,
            start_date,
            end_date,
            currency,
            principal_amount,
            base_interest_rate,
            margin,
        })
    }
}
