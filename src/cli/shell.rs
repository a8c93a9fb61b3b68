//! Interactive loan shell
//!
//! A menu loop over the loan service. Validation, store, file and audit log
//! errors are reported and the loop continues; end of input ends the session
//! and a failed console read or write is returned to the caller.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::config::Settings;
use crate::display::{
    format_audit_log, format_loan_details, format_loan_list, format_schedule_table, paint,
};
use crate::display::{ERROR_COLOR, LABEL_COLOR};
use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_loan, import_loan_json, import_loan_yaml, ExportFormat};
use crate::models::{Loan, LoanId};
use crate::services::LoanService;

use super::prompt::Prompter;

const ACTIONS_HINT: &str =
    "create, history, export, import, list, update, delete, audit, help or exit";

/// Audit entries shown by the `audit` action
pub const RECENT_AUDIT_ENTRIES: usize = 10;

/// Menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    History,
    Export,
    Import,
    List,
    Update,
    Delete,
    Audit,
    Help,
    Exit,
}

impl FromStr for Action {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "create" => Ok(Self::Create),
            "history" => Ok(Self::History),
            "export" => Ok(Self::Export),
            "import" => Ok(Self::Import),
            "list" => Ok(Self::List),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            "audit" => Ok(Self::Audit),
            "help" => Ok(Self::Help),
            "exit" | "quit" => Ok(Self::Exit),
            other => Err(LedgerError::InvalidInput(format!("unknown action '{}'", other))),
        }
    }
}

/// The interactive shell
pub struct Shell<'a, R, W> {
    prompter: Prompter<R, W>,
    service: LoanService<'a>,
    settings: &'a Settings,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(prompter: Prompter<R, W>, service: LoanService<'a>, settings: &'a Settings) -> Self {
        Self {
            prompter,
            service,
            settings,
        }
    }

    /// Run the menu loop until `exit` or end of input
    pub fn run(&mut self) -> LedgerResult<()> {
        self.prompter.say("Simple Daily Interest Loan Calculator")?;

        loop {
            self.prompter.say("")?;

            match self.step() {
                Ok(Action::Exit) | Err(LedgerError::InputClosed) => {
                    tracing::debug!("Shell session ended");
                    return Ok(());
                }
                Ok(_) => {}
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    tracing::debug!(error = %err, "Shell command failed");
                    self.prompter.report(&err)?;
                }
            }
        }
    }

    fn step(&mut self) -> LedgerResult<Action> {
        let action: Action = self.prompter.ask("Action", ACTIONS_HINT)?.parse()?;

        match action {
            Action::Create => self.handle_create()?,
            Action::History => self.handle_history()?,
            Action::Export => self.handle_export()?,
            Action::Import => self.handle_import()?,
            Action::List => self.handle_list()?,
            Action::Update => self.handle_update()?,
            Action::Delete => self.handle_delete()?,
            Action::Audit => self.handle_audit()?,
            Action::Help => self.handle_help()?,
            Action::Exit => {}
        }

        Ok(action)
    }

    fn handle_create(&mut self) -> LedgerResult<()> {
        let terms = self
            .prompter
            .ask_loan_terms(LoanId::generate(), self.settings.default_currency)?;
        let loan = self.service.create(terms)?;

        self.announce("Created loan", loan.id(), "with following details")?;
        self.print_loan(&loan)
    }

    fn handle_history(&mut self) -> LedgerResult<()> {
        let id = self.prompter.ask_loan_id()?;
        let loan = self.service.get(&id)?;

        self.announce("Fetched history for loan", loan.id(), "")?;
        self.print_loan(&loan)
    }

    fn handle_export(&mut self) -> LedgerResult<()> {
        let id = self.prompter.ask_loan_id()?;
        let loan = self.service.get(&id)?;

        let format = self.prompter.ask_until(|p| {
            let answer = p.read_line("Format", "json, yaml or csv [json]")?;
            if answer.is_empty() {
                Ok(ExportFormat::default())
            } else {
                ExportFormat::parse(&answer)
            }
        })?;
        let destination = self
            .prompter
            .read_line("Output file", "leave empty to print")?;

        let pretty = self.settings.pretty_json;
        if destination.is_empty() {
            self.announce("Exported history for loan", loan.id(), &format!("to {}", format))?;
            return export_loan(&loan, format, self.prompter.output(), pretty);
        }

        let file = File::create(&destination).map_err(|e| {
            LedgerError::Export(format!("Failed to create file {}: {}", destination, e))
        })?;
        let mut writer = BufWriter::new(file);
        export_loan(&loan, format, &mut writer, pretty)?;
        writer
            .flush()
            .map_err(|e| LedgerError::Export(e.to_string()))?;

        self.announce("Exported history for loan", loan.id(), &format!("to {}", destination))
    }

    fn handle_import(&mut self) -> LedgerResult<()> {
        let source = self.prompter.ask("Input file", "JSON or YAML export")?;
        let contents = std::fs::read_to_string(&source)
            .map_err(|e| LedgerError::Import(format!("Failed to read {}: {}", source, e)))?;

        let is_yaml = Path::new(&source)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        let imported = if is_yaml {
            import_loan_yaml(&contents)?
        } else {
            import_loan_json(&contents)?
        };

        let loan = self.service.create(imported.terms().clone())?;
        self.announce("Imported loan", loan.id(), &format!("from {}", source))
    }

    fn handle_list(&mut self) -> LedgerResult<()> {
        let loans = self.service.list()?;
        let table = format_loan_list(&loans);
        self.prompter.say(&table)
    }

    fn handle_update(&mut self) -> LedgerResult<()> {
        let id = self.prompter.ask_loan_id()?;
        // Fail before the form when there is nothing to update
        let current = self.service.get(&id)?;

        let terms = self
            .prompter
            .ask_loan_terms(id, Some(current.terms().currency))?;
        let loan = self.service.update(terms)?;

        self.announce("Updated loan", loan.id(), "with following details")?;
        self.print_loan(&loan)
    }

    fn handle_delete(&mut self) -> LedgerResult<()> {
        let id = self.prompter.ask_loan_id()?;
        self.service.get(&id)?;

        if !self.prompter.confirm("Are you sure you want to continue?")? {
            let line = format!("\t{}", paint("Delete was cancelled", ERROR_COLOR, self.prompter.color()));
            return self.prompter.say(&line);
        }

        let removed = self.service.delete(&id)?;
        self.announce("Deleted loan", removed.id(), "")
    }

    fn handle_audit(&mut self) -> LedgerResult<()> {
        let Some(logger) = self.service.audit_log() else {
            return self.prompter.say("The audit log is disabled");
        };

        let unreadable = |e: LedgerError| LedgerError::Audit(e.to_string());
        let entries = logger.read_recent(RECENT_AUDIT_ENTRIES).map_err(unreadable)?;
        let total = logger.entry_count().map_err(unreadable)?;
        let output = format_audit_log(logger.path(), &entries, total);
        self.prompter.say(output.trim_end())
    }

    fn handle_help(&mut self) -> LedgerResult<()> {
        let lines = [
            "Available actions:",
            "  create   Enter the terms of a new loan and compute its daily interest",
            "  history  Show a loan's details and daily interest",
            "  export   Write a loan as JSON, YAML or CSV to the console or a file",
            "  import   Create a loan from a JSON or YAML export",
            "  list     List all loans",
            "  update   Replace a loan's terms and recompute its daily interest",
            "  delete   Remove a loan",
            "  audit    Show the most recent changes from the audit log",
            "  exit     Leave the calculator",
        ];
        for line in lines {
            self.prompter.say(line)?;
        }
        Ok(())
    }

    /// Print "<prefix> (<id>) <suffix>" with the ID highlighted
    fn announce(&mut self, prefix: &str, id: &LoanId, suffix: &str) -> LedgerResult<()> {
        let id = paint(id.as_str(), LABEL_COLOR, self.prompter.color());
        let line = format!("{} ({}) {}", prefix, id, suffix);
        self.prompter.say("")?;
        self.prompter.say(line.trim_end())
    }

    fn print_loan(&mut self, loan: &Loan) -> LedgerResult<()> {
        let details = format_loan_details(loan, self.prompter.color());
        self.prompter.say(details.trim_end())?;
        self.prompter.say(&format_schedule_table(loan))
    }
}
