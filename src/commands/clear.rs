//! Delete-all command.
//!
//! Wipes the whole collection after a confirmation showing the count.
//! An already empty collection gets its own message instead of a
//! pointless confirmation.

use crate::{
    libs::messages::Message,
    msg_error, msg_info, msg_success,
    store::tasks::Tasks,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: ClearArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    if tasks.all().is_empty() {
        msg_info!(Message::NoTasksToDelete);
        return Ok(());
    }

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteAll(tasks.all().len()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    match tasks.delete_all() {
        Ok(count) => msg_success!(Message::AllTasksDeleted(count)),
        Err(e) => msg_error!(e),
    }

    Ok(())
}
