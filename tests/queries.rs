#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, NaiveDate};
    use taskmate::db::tasks::Tasks;
    use taskmate::libs::task::{Priority, Status, Task};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct QueryTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for QueryTestContext {
        fn setup() -> Self {
            QueryTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl QueryTestContext {
        fn tasks(&self) -> Tasks {
            Tasks::open(self.temp_dir.path().join("taskmate.db")).unwrap()
        }
    }

    fn task(title: &str, description: &str, due: NaiveDate, priority: Priority, category: Option<&str>) -> Task {
        Task::new(title, description, due, priority, Status::Todo, category.map(String::from)).unwrap()
    }

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_search_is_a_union_across_fields(ctx: &mut QueryTestContext) {
        let mut tasks = ctx.tasks();
        // The keyword appears only in the category of one task and only in
        // the description of another.
        tasks.create(&task("Buy milk", "", due(), Priority::Low, Some("errands"))).unwrap();
        tasks.create(&task("Call bank", "errands before noon", due(), Priority::Low, None)).unwrap();
        tasks.create(&task("Unrelated", "nothing here", due(), Priority::Low, None)).unwrap();

        let found = tasks.search("errands").unwrap();
        assert_eq!(found.len(), 2);
        let titles: Vec<&str> = found.iter().map(|t| t.title.as_str()).collect();
        assert!(titles.contains(&"Buy milk"));
        assert!(titles.contains(&"Call bank"));
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_search_matches_title_substring(ctx: &mut QueryTestContext) {
        let mut tasks = ctx.tasks();
        tasks.create(&task("Prepare quarterly report", "", due(), Priority::High, None)).unwrap();

        let found = tasks.search("quarter").unwrap();
        assert_eq!(found.len(), 1);
        assert!(tasks.search("missing").unwrap().is_empty());
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_filter_by_category_is_exact(ctx: &mut QueryTestContext) {
        let mut tasks = ctx.tasks();
        tasks.create(&task("A", "", due(), Priority::Low, Some("work"))).unwrap();
        tasks.create(&task("B", "", due(), Priority::Low, Some("work-items"))).unwrap();
        tasks.create(&task("C", "", due(), Priority::Low, None)).unwrap();

        let found = tasks.filter_by_category("work").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "A");
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_sort_by_priority_uses_declaration_order(ctx: &mut QueryTestContext) {
        let mut tasks = ctx.tasks();
        // Alphabetical would be HIGH, LOW, MEDIUM.
        tasks.create(&task("h", "", due(), Priority::High, None)).unwrap();
        tasks.create(&task("l", "", due(), Priority::Low, None)).unwrap();
        tasks.create(&task("m", "", due(), Priority::Medium, None)).unwrap();

        let sorted = tasks.sorted_by("priority").unwrap();
        let order: Vec<Priority> = sorted.iter().map(|t| t.priority).collect();
        assert_eq!(order, vec![Priority::Low, Priority::Medium, Priority::High]);
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_sort_by_status_uses_declaration_order(ctx: &mut QueryTestContext) {
        let mut tasks = ctx.tasks();
        let mut completed = task("c", "", due(), Priority::Low, None);
        completed.status = Status::Completed;
        let mut in_progress = task("i", "", due(), Priority::Low, None);
        in_progress.status = Status::InProgress;

        tasks.create(&completed).unwrap();
        tasks.create(&task("t", "", due(), Priority::Low, None)).unwrap();
        tasks.create(&in_progress).unwrap();

        let sorted = tasks.sorted_by("status").unwrap();
        let order: Vec<Status> = sorted.iter().map(|t| t.status).collect();
        assert_eq!(order, vec![Status::Todo, Status::InProgress, Status::Completed]);
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_sort_by_due_date_and_title(ctx: &mut QueryTestContext) {
        let mut tasks = ctx.tasks();
        tasks
            .create(&task("beta", "", NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(), Priority::Low, None))
            .unwrap();
        tasks
            .create(&task("alpha", "", NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), Priority::Low, None))
            .unwrap();

        let by_date = tasks.sorted_by("due_date").unwrap();
        assert_eq!(by_date[0].title, "alpha");

        let by_title = tasks.sorted_by("title").unwrap();
        assert_eq!(by_title[0].title, "alpha");
        assert_eq!(by_title[1].title, "beta");
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_unknown_sort_field_returns_full_set(ctx: &mut QueryTestContext) {
        let mut tasks = ctx.tasks();
        tasks.create(&task("A", "", due(), Priority::Low, None)).unwrap();
        tasks.create(&task("B", "", due(), Priority::Low, None)).unwrap();

        let result = tasks.sorted_by("flavor").unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_due_window_is_inclusive_on_both_ends(ctx: &mut QueryTestContext) {
        let mut tasks = ctx.tasks();
        let today = Local::now().date_naive();

        tasks.create(&task("yesterday", "", today - Duration::days(1), Priority::Low, None)).unwrap();
        tasks.create(&task("today", "", today, Priority::Low, None)).unwrap();
        tasks.create(&task("boundary", "", today + Duration::days(7), Priority::Low, None)).unwrap();
        tasks.create(&task("beyond", "", today + Duration::days(8), Priority::Low, None)).unwrap();

        let upcoming = tasks.due_within_days(7).unwrap();
        let titles: Vec<&str> = upcoming.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(upcoming.len(), 2);
        assert!(titles.contains(&"today"));
        assert!(titles.contains(&"boundary"));
    }
}
