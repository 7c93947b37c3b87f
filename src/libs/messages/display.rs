//! Display implementation for taskflow application messages.
//!
//! The single source of truth for user-facing wording: every `Message`
//! variant maps to its text here, with type-safe parameter
//! interpolation. Keeping the mapping in one place keeps phrasing
//! consistent and leaves the door open for localization later.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(text) => write!(f, "Task '{}' added", text),
            Message::TaskMarkedDone(text) => write!(f, "Task '{}' marked as done", text),
            Message::TaskMarkedPending(text) => write!(f, "Task '{}' marked as pending", text),
            Message::TaskUpdated(text) => write!(f, "Task '{}' updated", text),
            Message::TaskDeleted(text) => write!(f, "Task '{}' deleted", text),
            Message::AllTasksDeleted(count) => write!(f, "Deleted {} task(s)", count),
            Message::NoTasksToDelete => write!(f, "No tasks to delete"),
            Message::TaskNotFound(id) => write!(f, "Task not found: {}", id),
            Message::AmbiguousTaskId(id) => write!(f, "Task id '{}' matches more than one task", id),
            Message::NoTasksFound => write!(f, "No tasks found"),
            Message::NoChangesDetected => write!(f, "No changes detected"),
            Message::TasksHeader => write!(f, "📋 Tasks"),
            Message::DueDateInPast => write!(f, "Due date is in the past"),

            // === PROMPT MESSAGES ===
            Message::PromptTaskText => write!(f, "Task text"),
            Message::PromptDueDate => write!(f, "Due date (YYYY-MM-DD, empty for none)"),
            Message::PromptSelectTask => write!(f, "Select a task"),
            Message::ConfirmDeleteTask(text) => write!(f, "Delete task '{}'?", text),
            Message::ConfirmDeleteAll(count) => write!(f, "Delete all {} task(s)?", count),
            Message::OperationCancelled => write!(f, "Operation cancelled"),

            // === STATS MESSAGES ===
            Message::StatsHeader => write!(f, "📊 Task Statistics"),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigModuleDisplay => write!(f, "Display settings"),
            Message::PromptDateFormat => write!(f, "Due date display format (strftime)"),
            Message::ConfigSaved => write!(f, "Configuration saved successfully"),
            Message::ConfigDeleted => write!(f, "Configuration removed"),
        }
    }
}
