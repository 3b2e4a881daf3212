//! Display implementation for taskmate application messages.
//!
//! Converts structured `Message` variants into the human-readable text shown
//! on the terminal. All user-facing wording lives here, in one place, so the
//! rest of the application works with typed messages instead of string
//! literals.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let message = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task created with id {}", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFound(id) => format!("No task found with id {}", id),
            Message::TaskMissingId => "Task has no id; it was never persisted".to_string(),
            Message::NoTasksFound => "No tasks recorded yet".to_string(),
            Message::TasksHeader(count) => format!("Tasks ({})", count),
            Message::DeleteCancelled => "Deletion cancelled".to_string(),

            // === VALIDATION MESSAGES ===
            Message::EmptyTitle => "Title must not be empty".to_string(),
            Message::InvalidDate(input) => format!("Invalid date '{}', expected format YYYY-MM-DD", input),
            Message::InvalidPriority(input) => format!("Invalid priority '{}', expected LOW, MEDIUM or HIGH", input),
            Message::InvalidStatus(input) => format!("Invalid status '{}', expected TODO, IN_PROGRESS or COMPLETED", input),

            // === EDIT MESSAGES ===
            Message::EditingTask(id) => format!("Editing task {} (press Enter to keep the current value)", id),
            Message::InvalidPriorityKept(input, kept) => format!("Invalid priority '{}', keeping '{}'", input, kept),
            Message::InvalidStatusKept(input, kept) => format!("Invalid status '{}', keeping '{}'", input, kept),
            Message::InvalidDateKept(input, kept) => format!("Invalid date '{}', keeping '{}'", input, kept),
            Message::NoChangesDetected => "No changes detected".to_string(),

            // === QUERY MESSAGES ===
            Message::NoMatchingTasks(keyword) => format!("No tasks match '{}'", keyword),
            Message::NoTasksInCategory(category) => format!("No tasks in category '{}'", category),
            Message::UnknownSortField(field) => format!("Unknown sort field '{}', showing tasks unsorted", field),
            Message::NoUpcomingTasks(days) => format!("No tasks due within the next {} days", days),
            Message::UpcomingHeader(days) => format!("Tasks due within {} days", days),

            // === STATISTICS MESSAGES ===
            Message::StatsHeader => "📊 Task statistics".to_string(),

            // === PROMPTS ===
            Message::PromptTitle => "Title".to_string(),
            Message::PromptDescription => "Description".to_string(),
            Message::PromptDueDate => "Due date (YYYY-MM-DD)".to_string(),
            Message::PromptPriority => "Priority".to_string(),
            Message::PromptStatus => "Status".to_string(),
            Message::PromptCategory => "Category (empty for none)".to_string(),
            Message::ConfirmDeleteTask(id) => format!("Delete task {}?", id),
        };
        write!(f, "{}", message)
    }
}
