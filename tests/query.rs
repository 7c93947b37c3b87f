#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate, TimeZone};
    use taskflow::libs::query;
    use taskflow::libs::task::{Task, TaskFilter, TaskSort};

    fn task(text: &str, completed: bool, due: Option<&str>) -> Task {
        let mut task = Task::new(text, due.map(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()));
        task.completed = completed;
        task
    }

    #[test]
    fn test_filter_pending_keeps_relative_order() {
        let tasks = vec![
            task("Completed one", true, None),
            task("Pending one", false, None),
            task("Completed two", true, None),
            task("Pending two", false, None),
        ];

        let result = query::run(&tasks, TaskFilter::Pending, TaskSort::Status, "");
        let texts: Vec<&str> = result.iter().map(|task| task.text.as_str()).collect();
        assert_eq!(texts, vec!["Pending one", "Pending two"]);
    }

    #[test]
    fn test_filter_completed() {
        let tasks = vec![
            task("Completed one", true, None),
            task("Pending one", false, None),
            task("Completed two", true, None),
        ];

        let result = query::run(&tasks, TaskFilter::Completed, TaskSort::Status, "");
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|task| task.completed));
    }

    #[test]
    fn test_search_is_case_insensitive_and_stable() {
        let tasks = vec![
            task("Buy milk", false, None),
            task("Walk dog", false, None),
            task("MILK run", true, None),
        ];

        let result = query::run(&tasks, TaskFilter::All, TaskSort::Status, "milk");
        let texts: Vec<&str> = result.iter().map(|task| task.text.as_str()).collect();
        // Status sort is stable, so the pending match stays first.
        assert_eq!(texts, vec!["Buy milk", "MILK run"]);
    }

    #[test]
    fn test_search_trims_and_empty_is_noop() {
        let tasks = vec![task("Buy milk", false, None), task("Walk dog", false, None)];

        assert_eq!(query::run(&tasks, TaskFilter::All, TaskSort::Status, "   ").len(), 2);
        assert_eq!(query::run(&tasks, TaskFilter::All, TaskSort::Status, "  MILK ").len(), 1);
    }

    #[test]
    fn test_sort_date_added_newest_first() {
        let mut oldest = task("Oldest task", false, None);
        oldest.added_at = Local.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap();
        let mut middle = task("Middle task", false, None);
        middle.added_at = Local.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let mut newest = task("Newest task", false, None);
        newest.added_at = Local.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap();

        let tasks = vec![middle, newest, oldest];
        let result = query::run(&tasks, TaskFilter::All, TaskSort::DateAdded, "");
        let texts: Vec<&str> = result.iter().map(|task| task.text.as_str()).collect();
        assert_eq!(texts, vec!["Newest task", "Middle task", "Oldest task"]);
    }

    #[test]
    fn test_sort_due_date_puts_undated_last() {
        let tasks = vec![
            task("May task", false, Some("2024-05-01")),
            task("Undated task", false, None),
            task("January task", false, Some("2024-01-01")),
        ];

        let result = query::run(&tasks, TaskFilter::All, TaskSort::DueDate, "");
        let texts: Vec<&str> = result.iter().map(|task| task.text.as_str()).collect();
        assert_eq!(texts, vec!["January task", "May task", "Undated task"]);
    }

    #[test]
    fn test_sort_name_ignores_case() {
        let tasks = vec![
            task("banana bread", false, None),
            task("Apple pie", false, None),
            task("cherry cake", false, None),
        ];

        let asc = query::run(&tasks, TaskFilter::All, TaskSort::NameAsc, "");
        let texts: Vec<&str> = asc.iter().map(|task| task.text.as_str()).collect();
        assert_eq!(texts, vec!["Apple pie", "banana bread", "cherry cake"]);

        let desc = query::run(&tasks, TaskFilter::All, TaskSort::NameDesc, "");
        let texts: Vec<&str> = desc.iter().map(|task| task.text.as_str()).collect();
        assert_eq!(texts, vec!["cherry cake", "banana bread", "Apple pie"]);
    }

    #[test]
    fn test_sort_status_pending_first_and_stable() {
        let tasks = vec![
            task("Done one", true, None),
            task("Pending one", false, None),
            task("Done two", true, None),
            task("Pending two", false, None),
        ];

        let result = query::run(&tasks, TaskFilter::All, TaskSort::Status, "");
        let texts: Vec<&str> = result.iter().map(|task| task.text.as_str()).collect();
        assert_eq!(texts, vec!["Pending one", "Pending two", "Done one", "Done two"]);
    }

    #[test]
    fn test_query_does_not_mutate_input() {
        let tasks = vec![task("Zebra", false, None), task("Apple", false, None)];
        let snapshot = tasks.clone();

        let _ = query::run(&tasks, TaskFilter::All, TaskSort::NameAsc, "");
        assert_eq!(tasks, snapshot);
    }

    #[test]
    fn test_stats_empty_collection() {
        let stats = query::stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.progress_percent, 0);
    }

    #[test]
    fn test_stats_counts_and_rounding() {
        let tasks = vec![
            task("Done one", true, None),
            task("Pending one", false, None),
            task("Pending two", false, None),
        ];

        let stats = query::stats(&tasks);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 2);
        // 1/3 rounds to 33.
        assert_eq!(stats.progress_percent, 33);
    }

    #[test]
    fn test_stats_all_completed() {
        let tasks = vec![task("Done one", true, None), task("Done two", true, None)];

        let stats = query::stats(&tasks);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.progress_percent, 100);
    }
}
