//! Completion toggling command.
//!
//! Flips a task between pending and done. The reported message follows
//! the task's new state.

use super::resolve_or_select;
use crate::{
    libs::messages::Message,
    msg_error, msg_info, msg_success,
    store::tasks::Tasks,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task id or unique id prefix
    id: Option<String>,
}

pub fn cmd(args: DoneArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let id = match resolve_or_select(tasks.all(), args.id)? {
        Some(id) => id,
        None => return Ok(()),
    };

    match tasks.toggle(&id) {
        Ok(task) if task.completed => msg_success!(Message::TaskMarkedDone(task.text)),
        Ok(task) => msg_info!(Message::TaskMarkedPending(task.text)),
        Err(e) => msg_error!(e),
    }

    Ok(())
}
