//! Input validation rules for task fields.
//!
//! Text and date syntax are blocking: a failed check rejects the whole
//! operation and nothing is stored. A due date in the past is valid input
//! and only produces a non-blocking advisory, which the command layer may
//! surface as a warning without preventing submission.

use crate::libs::task::TaskError;
use chrono::NaiveDate;

/// Minimum task text length after trimming.
pub const MIN_TEXT_LEN: usize = 3;

/// Input format for due dates on the command line and in prompts.
pub const DUE_DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Validates task text and returns the trimmed value that gets stored.
pub fn task_text(raw: &str) -> Result<String, TaskError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskError::EmptyText);
    }
    if trimmed.chars().count() < MIN_TEXT_LEN {
        return Err(TaskError::TextTooShort);
    }
    Ok(trimmed.to_string())
}

/// Parses a due date string, rejecting anything that is not a real
/// calendar date in `YYYY-MM-DD` form.
pub fn due_date(raw: &str) -> Result<NaiveDate, TaskError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DUE_DATE_INPUT_FORMAT).map_err(|_| TaskError::InvalidDueDate(trimmed.to_string()))
}

/// The non-blocking advisory: true when the due date lies strictly
/// before today. Time of day is ignored on both sides.
pub fn is_past(due: NaiveDate, today: NaiveDate) -> bool {
    due < today
}
