//! Task editing command.
//!
//! Replaces a task's text and due date in place; id, completion state,
//! and creation timestamp are untouched. Values not given as flags are
//! collected interactively, pre-filled with the current ones. Passing
//! `--due none` (or clearing the prompt) removes the due date.

use super::resolve_or_select;
use crate::{
    libs::{messages::Message, validate},
    msg_bail_anyhow, msg_error, msg_info, msg_success, msg_warning,
    store::tasks::Tasks,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task id or unique id prefix
    id: Option<String>,
    /// New task text
    #[arg(short, long)]
    text: Option<String>,
    /// New due date in YYYY-MM-DD format, or "none" to clear it
    #[arg(short, long)]
    due: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let id = match resolve_or_select(tasks.all(), args.id)? {
        Some(id) => id,
        None => return Ok(()),
    };
    let current = match tasks.get(&id) {
        Some(task) => task.clone(),
        // The id came out of the collection a moment ago.
        None => msg_bail_anyhow!(Message::TaskNotFound(id)),
    };

    let text = match args.text {
        Some(text) => text,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskText.to_string())
            .default(current.text.clone())
            .interact_text()?,
    };
    let raw_due = match args.due {
        Some(due) => due,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDueDate.to_string())
            .default(current.due_date.map(|date| date.to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?,
    };

    let due_date = match raw_due.trim() {
        "" | "none" => None,
        raw => match validate::due_date(raw) {
            Ok(date) => Some(date),
            Err(e) => {
                msg_error!(e);
                return Ok(());
            }
        },
    };

    if text.trim() == current.text && due_date == current.due_date {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    if let Some(date) = due_date {
        if validate::is_past(date, Local::now().date_naive()) {
            msg_warning!(Message::DueDateInPast);
        }
    }

    match tasks.update(&id, &text, due_date) {
        Ok(task) => msg_success!(Message::TaskUpdated(task.text)),
        Err(e) => msg_error!(e),
    }

    Ok(())
}
