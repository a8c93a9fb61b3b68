//! CLI command handlers
//!
//! This module bridges clap argument parsing and the interactive shell with
//! the loan service.

pub mod prompt;
pub mod schedule;
pub mod shell;

pub use prompt::Prompter;
pub use schedule::{handle_schedule_command, ScheduleArgs, ScheduleFormat};
pub use shell::Shell;
