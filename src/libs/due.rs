//! Display-time due date classification.
//!
//! The marker depends on "today", which changes across midnight, so the
//! classification is recomputed on every render and never cached.

use chrono::NaiveDate;

/// Default strftime pattern for rendering due dates, e.g. "Jan 5, 2026".
pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";

/// How a task's due date relates to the current calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    NoDueDate,
    Overdue(NaiveDate),
    Today,
    Upcoming(NaiveDate),
}

impl DueStatus {
    /// Classifies a due date against the given calendar day.
    pub fn of(due_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        match due_date {
            None => DueStatus::NoDueDate,
            Some(date) if date < today => DueStatus::Overdue(date),
            Some(date) if date == today => DueStatus::Today,
            Some(date) => DueStatus::Upcoming(date),
        }
    }

    /// Renders the marker text for table cells.
    ///
    /// `date_format` is the configured strftime pattern; overdue dates
    /// carry a warning sign, today's date collapses to the word "Today".
    pub fn label(&self, date_format: &str) -> String {
        match self {
            DueStatus::NoDueDate => "No due date".to_string(),
            DueStatus::Overdue(date) => format!("⚠ {}", date.format(date_format)),
            DueStatus::Today => "Today".to_string(),
            DueStatus::Upcoming(date) => date.format(date_format).to_string(),
        }
    }
}
