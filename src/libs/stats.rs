//! Aggregate statistics over the task set.
//!
//! A pure recomputation on every invocation, never cached: six counters come
//! from a single pass over a snapshot of all tasks, while the upcoming-week
//! count is re-read through the due-window query so it always agrees with
//! the `upcoming` command.

use crate::db::tasks::Tasks;
use crate::libs::task::{Priority, Status, Task};
use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};

/// Default window, in days, for the upcoming-tasks view.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct TaskStats {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    /// completed / total as a percentage; 0.0 for an empty task set.
    pub completion_rate: f64,
    /// Tasks due exactly today, regardless of status.
    pub due_today_tasks: usize,
    /// Tasks past their due date and not completed.
    pub overdue_tasks: usize,
    /// Tasks due in [today, today + 7] inclusive.
    pub due_next_week_tasks: usize,
    pub high_priority_tasks: usize,
}

impl TaskStats {
    /// Computes statistics against the current date.
    ///
    /// The next-week count comes from a fresh due-window query rather than
    /// the snapshot, matching what `due_within_days(7)` would return.
    pub fn compute(tasks: &mut Tasks) -> Result<TaskStats> {
        let snapshot = tasks.fetch_all()?;
        let mut stats = Self::from_snapshot(&snapshot, Local::now().date_naive());
        stats.due_next_week_tasks = tasks.due_within_days(UPCOMING_WINDOW_DAYS)?.len();
        Ok(stats)
    }

    /// Derives all counters from a snapshot in a single pass.
    pub fn from_snapshot(snapshot: &[Task], today: NaiveDate) -> TaskStats {
        let week_end = today + Duration::days(UPCOMING_WINDOW_DAYS);
        let mut stats = TaskStats {
            total_tasks: snapshot.len(),
            completed_tasks: 0,
            completion_rate: 0.0,
            due_today_tasks: 0,
            overdue_tasks: 0,
            due_next_week_tasks: 0,
            high_priority_tasks: 0,
        };

        for task in snapshot {
            if task.status == Status::Completed {
                stats.completed_tasks += 1;
            }
            if task.due_date == today {
                stats.due_today_tasks += 1;
            }
            // A completed task past its due date is never overdue.
            if task.due_date < today && task.status != Status::Completed {
                stats.overdue_tasks += 1;
            }
            if task.due_date >= today && task.due_date <= week_end {
                stats.due_next_week_tasks += 1;
            }
            if task.priority == Priority::High {
                stats.high_priority_tasks += 1;
            }
        }

        if stats.total_tasks > 0 {
            stats.completion_rate = stats.completed_tasks as f64 * 100.0 / stats.total_tasks as f64;
        }
        stats
    }
}
