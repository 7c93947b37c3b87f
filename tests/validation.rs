#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taskflow::libs::due::{DueStatus, DEFAULT_DATE_FORMAT};
    use taskflow::libs::task::TaskError;
    use taskflow::libs::validate;

    fn date(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_task_text_rejects_empty() {
        assert_eq!(validate::task_text(""), Err(TaskError::EmptyText));
        assert_eq!(validate::task_text("   "), Err(TaskError::EmptyText));
    }

    #[test]
    fn test_task_text_rejects_too_short() {
        assert_eq!(validate::task_text("ab"), Err(TaskError::TextTooShort));
        // Trimming happens before the length check.
        assert_eq!(validate::task_text("  ab  "), Err(TaskError::TextTooShort));
    }

    #[test]
    fn test_task_text_returns_trimmed_value() {
        assert_eq!(validate::task_text("  Buy milk  ").unwrap(), "Buy milk");
        assert_eq!(validate::task_text("abc").unwrap(), "abc");
    }

    #[test]
    fn test_due_date_parses_iso_dates() {
        assert_eq!(validate::due_date("2026-08-10").unwrap(), date("2026-08-10"));
        assert_eq!(validate::due_date(" 2026-08-10 ").unwrap(), date("2026-08-10"));
    }

    #[test]
    fn test_due_date_rejects_malformed_input() {
        for raw in ["not-a-date", "2026-13-01", "2026-02-30", "10/08/2026", "2026-8"] {
            assert_eq!(validate::due_date(raw), Err(TaskError::InvalidDueDate(raw.to_string())));
        }
    }

    #[test]
    fn test_past_due_date_is_advisory_only() {
        let today = date("2026-08-07");

        // Strictly earlier days warn; today and later do not.
        assert!(validate::is_past(date("2026-08-06"), today));
        assert!(!validate::is_past(today, today));
        assert!(!validate::is_past(date("2026-08-08"), today));
    }

    #[test]
    fn test_due_status_classification() {
        let today = date("2026-08-07");

        assert_eq!(DueStatus::of(None, today), DueStatus::NoDueDate);
        assert_eq!(DueStatus::of(Some(date("2026-08-06")), today), DueStatus::Overdue(date("2026-08-06")));
        assert_eq!(DueStatus::of(Some(today), today), DueStatus::Today);
        assert_eq!(DueStatus::of(Some(date("2026-08-08")), today), DueStatus::Upcoming(date("2026-08-08")));
    }

    #[test]
    fn test_due_status_labels() {
        let today = date("2026-08-07");

        assert_eq!(DueStatus::of(None, today).label(DEFAULT_DATE_FORMAT), "No due date");
        assert_eq!(DueStatus::of(Some(today), today).label(DEFAULT_DATE_FORMAT), "Today");
        assert_eq!(
            DueStatus::of(Some(date("2026-08-09")), today).label(DEFAULT_DATE_FORMAT),
            "Aug 9, 2026"
        );
        assert_eq!(
            DueStatus::of(Some(date("2026-01-05")), today).label(DEFAULT_DATE_FORMAT),
            "⚠ Jan 5, 2026"
        );
    }
}
