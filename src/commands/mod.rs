//! Command-line interface for the taskflow application.
//!
//! Each subcommand lives in its own module with a `cmd` entry point.
//! Commands are thin glue: they parse arguments or prompt interactively,
//! invoke the task store or the query engine, and render the outcome
//! through the message macros and table views.

pub mod add;
pub mod clear;
pub mod delete;
pub mod done;
pub mod edit;
pub mod init;
pub mod list;
pub mod stats;

use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::{msg_error, msg_info};
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "List tasks with filtering, sorting, and search")]
    List(list::ListArgs),
    #[command(about = "Toggle a task between pending and done")]
    Done(done::DoneArgs),
    #[command(about = "Edit a task's text or due date")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Delete all tasks")]
    Clear(clear::ClearArgs),
    #[command(about = "Show task statistics")]
    Stats,
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Done(args) => done::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Clear(args) => clear::cmd(args),
            Commands::Stats => stats::cmd(),
            Commands::Init(args) => init::cmd(args),
        }
    }
}

enum IdMatch {
    One(String),
    NoMatch,
    Ambiguous,
}

// Tables show an 8-character short id; accept the full id or any
// unambiguous prefix of one.
fn match_task_id(tasks: &[Task], needle: &str) -> IdMatch {
    if tasks.iter().any(|task| task.id == needle) {
        return IdMatch::One(needle.to_string());
    }

    let mut matches = tasks.iter().filter(|task| task.id.starts_with(needle));
    match (matches.next(), matches.next()) {
        (Some(task), None) => IdMatch::One(task.id.clone()),
        (Some(_), Some(_)) => IdMatch::Ambiguous,
        _ => IdMatch::NoMatch,
    }
}

/// Resolves the id argument to a full task id, or falls back to an
/// interactive picker when no id was given. `None` means there is
/// nothing to act on and the appropriate message was already shown.
fn resolve_or_select(tasks: &[Task], id_arg: Option<String>) -> Result<Option<String>> {
    match id_arg {
        Some(needle) => match match_task_id(tasks, &needle) {
            IdMatch::One(id) => Ok(Some(id)),
            IdMatch::NoMatch => {
                msg_error!(Message::TaskNotFound(needle));
                Ok(None)
            }
            IdMatch::Ambiguous => {
                msg_error!(Message::AmbiguousTaskId(needle));
                Ok(None)
            }
        },
        None => {
            if tasks.is_empty() {
                msg_info!(Message::NoTasksFound);
                return Ok(None);
            }

            let labels: Vec<&str> = tasks.iter().map(|task| task.text.as_str()).collect();
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSelectTask.to_string())
                .items(&labels)
                .interact()?;
            Ok(Some(tasks[selection].id.clone()))
        }
    }
}
