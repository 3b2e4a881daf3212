#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taskmate::db::tasks::Tasks;
    use taskmate::libs::task::{Priority, Status, Task};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            TaskTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl TaskTestContext {
        fn tasks(&self) -> Tasks {
            Tasks::open(self.temp_dir.path().join("taskmate.db")).unwrap()
        }
    }

    fn sample_task(title: &str) -> Task {
        Task::new(
            title,
            "Some details",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            Priority::Medium,
            Status::Todo,
            Some("home".to_string()),
        )
        .unwrap()
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_then_get_returns_equal_task(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();

        let task = sample_task("Water the plants");
        let id = tasks.create(&task).unwrap();

        let stored = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.id, Some(id));
        assert_eq!(stored.title, task.title);
        assert_eq!(stored.description, task.description);
        assert_eq!(stored.due_date, task.due_date);
        assert_eq!(stored.priority, task.priority);
        assert_eq!(stored.status, task.status);
        assert_eq!(stored.category, task.category);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get_by_id_absent_is_none(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        assert!(tasks.get_by_id(42).unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_replaces_full_record(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();

        let id = tasks.create(&sample_task("Original")).unwrap();
        let mut task = tasks.get_by_id(id).unwrap().unwrap();

        task.title = "Renamed".to_string();
        task.description = "New details".to_string();
        task.due_date = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
        task.priority = Priority::High;
        task.status = Status::Completed;
        task.category = None;
        assert!(tasks.update(&task).unwrap());

        let updated = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.description, "New details");
        assert_eq!(updated.due_date, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(updated.status, Status::Completed);
        assert_eq!(updated.category, None);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_nonexistent_id_returns_false(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        tasks.create(&sample_task("Only task")).unwrap();

        let mut ghost = sample_task("Ghost");
        ghost.id = Some(999);
        assert!(!tasks.update(&ghost).unwrap());

        // The existing row is untouched.
        let all = tasks.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Only task");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_without_id_is_an_error(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        let task = sample_task("Never persisted");
        assert!(tasks.update(&task).is_err());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_is_idempotent_in_effect(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        let id = tasks.create(&sample_task("Disposable")).unwrap();

        assert!(tasks.delete(id).unwrap());
        assert!(!tasks.delete(id).unwrap());
        assert!(tasks.fetch_all().unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_title_length_constraint_is_enforced(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        let task = sample_task(&"x".repeat(101));
        assert!(tasks.create(&task).is_err());
        assert!(tasks.fetch_all().unwrap().is_empty());
    }

    #[test]
    fn test_empty_title_is_rejected_before_construction() {
        let result = Task::new(
            "   ",
            "",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            Priority::Low,
            Status::Todo,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_selection_lists_cover_all_variants_in_order() {
        // These arrays feed the interactive priority and status prompts.
        assert_eq!(Priority::ALL, [Priority::Low, Priority::Medium, Priority::High]);
        assert_eq!(Status::ALL, [Status::Todo, Status::InProgress, Status::Completed]);
    }

    #[test]
    fn test_malformed_date_text_is_rejected() {
        use taskmate::libs::task::parse_date;

        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("01/05/2024").is_err());
        assert!(parse_date("not a date").is_err());
        assert_eq!(parse_date(" 2024-01-05 ").unwrap(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn test_enum_text_is_rejected_not_coerced() {
        assert!("URGENT".parse::<Priority>().is_err());
        assert!("DONE".parse::<Status>().is_err());
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("in_progress".parse::<Status>().unwrap(), Status::InProgress);
    }
}
