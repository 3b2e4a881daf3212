use super::stats::TaskStats;
use super::task::{Task, DATE_FORMAT};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DUE DATE", "PRIORITY", "STATUS", "CATEGORY"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.title,
                task.due_date.format(DATE_FORMAT),
                task.priority,
                task.status,
                task.category.as_deref().unwrap_or("-")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn task(task: &Task) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id.unwrap_or(0)]);
        table.add_row(row!["TITLE", task.title]);
        table.add_row(row!["DESCRIPTION", task.description]);
        table.add_row(row!["DUE DATE", task.due_date.format(DATE_FORMAT)]);
        table.add_row(row!["PRIORITY", task.priority]);
        table.add_row(row!["STATUS", task.status]);
        table.add_row(row!["CATEGORY", task.category.as_deref().unwrap_or("-")]);
        table.printstd();

        Ok(())
    }

    pub fn stats(stats: &TaskStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Total tasks", stats.total_tasks]);
        table.add_row(row!["Completed", stats.completed_tasks]);
        table.add_row(row!["Completion rate", format!("{:.1}%", stats.completion_rate)]);
        table.add_row(row!["Due today", stats.due_today_tasks]);
        table.add_row(row!["Overdue", stats.overdue_tasks]);
        table.add_row(row!["Due next week", stats.due_next_week_tasks]);
        table.add_row(row!["High priority", stats.high_priority_tasks]);
        table.printstd();

        Ok(())
    }
}
