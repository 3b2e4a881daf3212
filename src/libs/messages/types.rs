#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskNotFound(i64),
    TaskMissingId,
    NoTasksFound,
    TasksHeader(usize),
    DeleteCancelled,

    // === VALIDATION MESSAGES ===
    EmptyTitle,
    InvalidDate(String),
    InvalidPriority(String),
    InvalidStatus(String),

    // === EDIT MESSAGES ===
    EditingTask(i64),
    InvalidPriorityKept(String, String), // input, kept value
    InvalidStatusKept(String, String),   // input, kept value
    InvalidDateKept(String, String),     // input, kept value
    NoChangesDetected,

    // === QUERY MESSAGES ===
    NoMatchingTasks(String),    // keyword
    NoTasksInCategory(String),  // category
    UnknownSortField(String),   // field name
    NoUpcomingTasks(i64),       // window in days
    UpcomingHeader(i64),        // window in days

    // === STATISTICS MESSAGES ===
    StatsHeader,

    // === PROMPTS ===
    PromptTitle,
    PromptDescription,
    PromptDueDate,
    PromptPriority,
    PromptStatus,
    PromptCategory,
    ConfirmDeleteTask(i64),
}
