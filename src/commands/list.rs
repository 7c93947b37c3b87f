//! Task listing command.
//!
//! Renders the derived view: status filter, then case-insensitive
//! substring search, then a stable sort, followed by a one-line
//! statistics summary computed over the whole collection. Filter and
//! sort are closed enum sets; an unknown value is a parse error, never a
//! silent fallback.

use crate::{
    libs::{config::Config, messages::Message, query, task::TaskFilter, task::TaskSort, view::View},
    msg_info, msg_print,
    store::tasks::Tasks,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Status filter
    #[arg(short, long, value_enum, default_value = "all")]
    filter: TaskFilter,
    /// Sort order
    #[arg(short, long, value_enum, default_value = "date-added")]
    sort: TaskSort,
    /// Case-insensitive substring search over task text
    #[arg(long, default_value = "")]
    search: String,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let tasks = Tasks::new()?;
    let list = query::run(tasks.all(), args.filter, args.sort, &args.search);

    if list.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    let config = Config::read()?;
    msg_print!(Message::TasksHeader, true);
    View::tasks(&list, Local::now().date_naive(), &config.date_format())?;
    View::summary(&query::stats(tasks.all()));

    Ok(())
}
