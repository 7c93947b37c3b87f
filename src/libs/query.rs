//! Derived views over the task collection.
//!
//! Pure functions only: nothing here mutates the stored collection or
//! touches persistence. The pipeline applies the status filter, then the
//! search filter, then a stable sort, and hands the resulting sequence to
//! the caller for rendering. Aggregate statistics are always computed
//! over the full collection, not the filtered view.

use crate::libs::task::{Task, TaskFilter, TaskSort};
use std::cmp::Ordering;

/// Aggregate counters displayed alongside the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Completion percentage, rounded to the nearest integer. Zero for an
    /// empty collection.
    pub progress_percent: u8,
}

/// Applies filter, search, and sort, returning a new ordered sequence.
///
/// The search string is trimmed and case-folded; an empty search passes
/// everything. All sorts are stable, so ties keep their prior relative
/// order.
pub fn run(tasks: &[Task], filter: TaskFilter, sort: TaskSort, search: &str) -> Vec<Task> {
    let needle = search.trim().to_lowercase();

    let mut list: Vec<Task> = tasks
        .iter()
        .filter(|task| match filter {
            TaskFilter::All => true,
            TaskFilter::Completed => task.completed,
            TaskFilter::Pending => !task.completed,
        })
        .filter(|task| needle.is_empty() || task.text.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    match sort {
        TaskSort::DateAdded => list.sort_by(|a, b| b.added_at.cmp(&a.added_at)),
        TaskSort::DueDate => list.sort_by(cmp_due_dates),
        TaskSort::NameAsc => list.sort_by(cmp_names),
        TaskSort::NameDesc => list.sort_by(|a, b| cmp_names(b, a)),
        TaskSort::Status => list.sort_by_key(|task| task.completed),
    }

    list
}

/// Counts totals and completion progress over the whole collection.
pub fn stats(tasks: &[Task]) -> Stats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed).count();
    let progress_percent = if total == 0 {
        0
    } else {
        (completed as f64 / total as f64 * 100.0).round() as u8
    };

    Stats {
        total,
        completed,
        pending: total - completed,
        progress_percent,
    }
}

// Undated tasks sort after every dated one, stable among themselves.
fn cmp_due_dates(a: &Task, b: &Task) -> Ordering {
    match (a.due_date, b.due_date) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// Case-insensitive comparison via Unicode lowercase folding.
fn cmp_names(a: &Task, b: &Task) -> Ordering {
    a.text.to_lowercase().cmp(&b.text.to_lowercase())
}
