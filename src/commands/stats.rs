//! Statistics command.
//!
//! Shows the aggregate counters and completion progress over the whole
//! collection.

use crate::{
    libs::{messages::Message, query, view::View},
    msg_print,
    store::tasks::Tasks,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let tasks = Tasks::new()?;
    let stats = query::stats(tasks.all());

    msg_print!(Message::StatsHeader, true);
    View::stats(&stats)?;

    Ok(())
}
