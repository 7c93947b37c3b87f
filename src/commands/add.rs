//! Task creation command.
//!
//! `taskflow add "Buy milk" --due 2026-08-10` creates a task directly;
//! without arguments the command prompts for text and due date. A due
//! date in the past is accepted but flagged with a warning.

use crate::{
    libs::{messages::Message, validate},
    msg_error, msg_success, msg_warning,
    store::tasks::Tasks,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task text
    text: Option<String>,
    /// Due date in YYYY-MM-DD format
    #[arg(short, long)]
    due: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let (text, raw_due) = match args.text {
        Some(text) => (text, args.due.unwrap_or_default()),
        None => {
            let text: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskText.to_string())
                .interact_text()?;
            let due: String = match args.due {
                Some(due) => due,
                None => Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptDueDate.to_string())
                    .allow_empty(true)
                    .interact_text()?,
            };
            (text, due)
        }
    };

    let due_date = match parse_due(&raw_due) {
        Ok(due_date) => due_date,
        Err(e) => {
            msg_error!(e);
            return Ok(());
        }
    };

    if let Some(date) = due_date {
        if validate::is_past(date, Local::now().date_naive()) {
            msg_warning!(Message::DueDateInPast);
        }
    }

    let mut tasks = Tasks::new()?;
    match tasks.create(&text, due_date) {
        Ok(task) => msg_success!(Message::TaskAdded(task.text)),
        Err(e) => msg_error!(e),
    }

    Ok(())
}

fn parse_due(raw: &str) -> Result<Option<NaiveDate>, crate::libs::task::TaskError> {
    match raw.trim() {
        "" => Ok(None),
        raw => validate::due_date(raw).map(Some),
    }
}
