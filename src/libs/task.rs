//! The task record and its closed filter/sort mode sets.
//!
//! A task is a single to-do item. The collection is kept newest-first by
//! insertion; `added_at` exists only for the default sort order and never
//! changes after creation. Serialized field names (`dueDate`, `addedAt`)
//! follow the on-disk JSON format, so existing task files keep loading
//! across releases.

use chrono::{DateTime, Local, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, generated once at creation and never reused.
    pub id: String,
    /// Trimmed task text, at least three characters.
    pub text: String,
    /// Optional calendar due date, no time component.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    /// Creation timestamp, used only for the default ordering.
    pub added_at: DateTime<Local>,
}

impl Task {
    pub fn new(text: &str, due_date: Option<NaiveDate>) -> Self {
        Task {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            due_date,
            completed: false,
            added_at: Local::now(),
        }
    }
}

/// Status filter applied before search and sort.
///
/// A closed set: unknown filter names are rejected at argument parse
/// time instead of silently falling back to `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TaskFilter {
    All,
    Completed,
    Pending,
}

/// Sort order applied after filtering. All sorts are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TaskSort {
    /// Most recently created first.
    DateAdded,
    /// Earliest due date first, undated tasks last.
    DueDate,
    NameAsc,
    NameDesc,
    /// Pending before completed.
    Status,
}

/// Errors surfaced by task validation and store mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Task text cannot be empty")]
    EmptyText,
    #[error("Task text must be at least 3 characters")]
    TextTooShort,
    #[error("Invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),
    #[error("Task not found: {0}")]
    NotFound(String),
    #[error("Failed to persist tasks: {0}")]
    Persistence(String),
}
