//! Console table rendering for task lists and statistics.
//!
//! The view layer owns everything about presentation: short ids, due
//! date markers, status badges, the progress bar. User-controlled text
//! goes into table cells as plain text; no markup is ever produced from
//! it.

use super::due::DueStatus;
use super::query::Stats;
use super::task::Task;
use anyhow::Result;
use chrono::NaiveDate;
use prettytable::{row, Table};

/// Width of the textual progress bar in characters.
const PROGRESS_BAR_WIDTH: usize = 20;

/// Length of the id prefix shown in tables. Any unambiguous prefix is
/// accepted back on the command line.
const SHORT_ID_LEN: usize = 8;

pub struct View {}

impl View {
    /// Renders the derived task sequence as a table.
    ///
    /// `today` feeds the due date classification, which is recomputed on
    /// every render rather than stored with the task.
    pub fn tasks(tasks: &[Task], today: NaiveDate, date_format: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK", "DUE", "STATUS"]);
        for task in tasks {
            let due = DueStatus::of(task.due_date, today).label(date_format);
            let status = if task.completed { "✓ Done" } else { "● Pending" };
            table.add_row(row![short_id(&task.id), task.text, due, status]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders the aggregate statistics as a table plus a progress bar.
    pub fn stats(stats: &Stats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TOTAL", "DONE", "PENDING", "PROGRESS"]);
        table.add_row(row![
            stats.total,
            stats.completed,
            stats.pending,
            format!("{}%", stats.progress_percent)
        ]);
        table.printstd();
        println!("{}", progress_bar(stats.progress_percent));

        Ok(())
    }

    /// One-line statistics summary appended under the task list.
    pub fn summary(stats: &Stats) {
        println!(
            "{} total · {} done · {} pending · {}%",
            stats.total, stats.completed, stats.pending, stats.progress_percent
        );
    }
}

/// Shortened task id for display. Uuids are ASCII, so byte slicing is
/// char-safe here.
pub fn short_id(id: &str) -> &str {
    &id[..id.len().min(SHORT_ID_LEN)]
}

fn progress_bar(percent: u8) -> String {
    let filled = PROGRESS_BAR_WIDTH * percent as usize / 100;
    format!("[{}{}] {}%", "█".repeat(filled), "░".repeat(PROGRESS_BAR_WIDTH - filled), percent)
}
