//! Single task deletion command.
//!
//! Deletion is permanent, so it asks for confirmation first unless
//! `--yes` is given.

use super::resolve_or_select;
use crate::{
    libs::messages::Message,
    msg_error, msg_info, msg_success,
    store::tasks::Tasks,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id or unique id prefix
    id: Option<String>,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let id = match resolve_or_select(tasks.all(), args.id)? {
        Some(id) => id,
        None => return Ok(()),
    };
    let text = match tasks.get(&id) {
        Some(task) => task.text.clone(),
        None => {
            msg_error!(Message::TaskNotFound(id));
            return Ok(());
        }
    };

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(text.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    match tasks.delete(&id) {
        Ok(task) => msg_success!(Message::TaskDeleted(task.text)),
        Err(e) => msg_error!(e),
    }

    Ok(())
}
