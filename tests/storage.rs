#[cfg(test)]
mod tests {
    use std::fs;
    use taskflow::libs::task::Task;
    use taskflow::store::store::JsonStore;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StorageTestContext {
        temp_dir: TempDir,
    }

    impl StorageTestContext {
        fn store(&self) -> JsonStore {
            JsonStore::with_path(self.temp_dir.path().join("tasks.json"))
        }
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            StorageTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_absent_file_loads_empty(ctx: &mut StorageTestContext) {
        assert!(ctx.store().load().is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_malformed_content_loads_empty(ctx: &mut StorageTestContext) {
        let path = ctx.temp_dir.path().join("tasks.json");

        for content in ["not json at all", "{\"wrong\": \"shape\"}", "[{\"id\": 1}]", ""] {
            fs::write(&path, content).unwrap();
            assert!(ctx.store().load().is_empty());
        }
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_load_roundtrip(ctx: &mut StorageTestContext) {
        let store = ctx.store();
        let due = chrono::NaiveDate::from_ymd_opt(2026, 8, 20).unwrap();

        let mut second = Task::new("Second task", Some(due));
        second.completed = true;
        let tasks = vec![second, Task::new("First task", None)];

        store.save(&tasks).unwrap();
        assert_eq!(store.load(), tasks);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_overwrites_previous_content(ctx: &mut StorageTestContext) {
        let store = ctx.store();

        store.save(&[Task::new("First task", None)]).unwrap();
        store.save(&[]).unwrap();
        assert!(store.load().is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_serialized_field_names(ctx: &mut StorageTestContext) {
        let store = ctx.store();
        let due = chrono::NaiveDate::from_ymd_opt(2026, 8, 20).unwrap();

        store.save(&[Task::new("First task", Some(due))]).unwrap();
        let raw = fs::read_to_string(ctx.temp_dir.path().join("tasks.json")).unwrap();

        // The on-disk format keeps the original field names.
        assert!(raw.contains("\"dueDate\""));
        assert!(raw.contains("\"addedAt\""));
        assert!(raw.contains("\"completed\""));
        assert!(raw.contains("\"2026-08-20\""));
    }
}
