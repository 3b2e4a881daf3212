use super::db::Db;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Duration, Local};
use rusqlite::{params, Connection, OptionalExtension, Row};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL CHECK(length(title) <= 100),
    description TEXT NOT NULL DEFAULT '',
    due_date TEXT NOT NULL,
    priority TEXT NOT NULL,
    status TEXT NOT NULL,
    category TEXT CHECK(category IS NULL OR length(category) <= 50)
)";
const INSERT_TASK: &str = "INSERT INTO tasks (title, description, due_date, priority, status, category) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_TASKS: &str = "SELECT id, title, description, due_date, priority, status, category FROM tasks";
const SELECT_TASK_BY_ID: &str = "SELECT id, title, description, due_date, priority, status, category FROM tasks WHERE id = ?1";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, due_date = ?4, priority = ?5, status = ?6, category = ?7 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const WHERE_KEYWORD: &str = "WHERE title LIKE ?1 OR description LIKE ?1 OR (category IS NOT NULL AND category LIKE ?1)";
const WHERE_CATEGORY: &str = "WHERE category = ?1";
const WHERE_DUE_BETWEEN: &str = "WHERE due_date BETWEEN ?1 AND ?2";
// Priority and status sort in declaration order, not lexicographically.
const ORDER_DUE_DATE: &str = "ORDER BY due_date";
const ORDER_TITLE: &str = "ORDER BY title";
const ORDER_PRIORITY: &str = "ORDER BY CASE priority WHEN 'LOW' THEN 0 WHEN 'MEDIUM' THEN 1 WHEN 'HIGH' THEN 2 END";
const ORDER_STATUS: &str = "ORDER BY CASE status WHEN 'TODO' THEN 0 WHEN 'IN_PROGRESS' THEN 1 WHEN 'COMPLETED' THEN 2 END";

/// Storage interface for the tasks table.
///
/// Each method executes a single statement; atomicity comes from SQLite
/// itself, no cross-call transaction is held.
pub struct Tasks {
    pub conn: Connection,
}

/// Maps a sortable field name to its ORDER BY clause, `None` when the
/// field is not recognized.
pub fn sort_order(field: &str) -> Option<&'static str> {
    match field.trim().to_lowercase().as_str() {
        "due_date" | "duedate" | "due" => Some(ORDER_DUE_DATE),
        "priority" => Some(ORDER_PRIORITY),
        "status" => Some(ORDER_STATUS),
        "title" => Some(ORDER_TITLE),
        _ => None,
    }
}

fn map_task_row(row: &Row) -> rusqlite::Result<Task> {
    let priority: String = row.get(4)?;
    let status: String = row.get(5)?;
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        due_date: row.get(3)?,
        priority: priority
            .parse()
            .map_err(|e: anyhow::Error| rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, e.into()))?,
        status: status
            .parse()
            .map_err(|e: anyhow::Error| rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, e.into()))?,
        category: row.get(6)?,
    })
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        Self::from_db(Db::new()?)
    }

    /// Opens the task table in a database at an explicit path.
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Tasks> {
        Self::from_db(Db::open(path)?)
    }

    fn from_db(db: Db) -> Result<Tasks> {
        db.conn.execute(SCHEMA_TASKS, [])?;

        Ok(Tasks { conn: db.conn })
    }

    /// Persists a new task and returns the generated id.
    pub fn create(&mut self, task: &Task) -> Result<i64> {
        self.conn.execute(
            INSERT_TASK,
            params![task.title, task.description, task.due_date, task.priority.as_str(), task.status.as_str(), task.category],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Returns every stored task, order unspecified.
    pub fn fetch_all(&mut self) -> Result<Vec<Task>> {
        self.fetch(SELECT_TASKS, [])
    }

    /// Returns the task with the given id, or `None` when no row matches.
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        self.conn.query_row(SELECT_TASK_BY_ID, params![id], map_task_row).optional().map_err(Into::into)
    }

    /// Replaces the full record identified by `task.id`.
    ///
    /// Returns `false` when no row matches. A task without an id is an
    /// invalid argument, not a missing row.
    pub fn update(&mut self, task: &Task) -> Result<bool> {
        let id = task.id.ok_or_else(|| msg_error_anyhow!(Message::TaskMissingId))?;
        let affected = self.conn.execute(
            UPDATE_TASK,
            params![id, task.title, task.description, task.due_date, task.priority.as_str(), task.status.as_str(), task.category],
        )?;
        Ok(affected > 0)
    }

    /// Deletes the task with the given id; `false` when no row matched.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        Ok(affected > 0)
    }

    /// Substring search across title, description and category (union).
    pub fn search(&mut self, keyword: &str) -> Result<Vec<Task>> {
        let pattern = format!("%{}%", keyword);
        self.fetch(&format!("{} {}", SELECT_TASKS, WHERE_KEYWORD), params![pattern])
    }

    /// Exact category match.
    pub fn filter_by_category(&mut self, category: &str) -> Result<Vec<Task>> {
        self.fetch(&format!("{} {}", SELECT_TASKS, WHERE_CATEGORY), params![category])
    }

    /// Returns all tasks ordered by the named field.
    ///
    /// Recognized fields: `due_date`, `priority`, `status`, `title`.
    /// An unrecognized field falls back to unordered retrieval.
    pub fn sorted_by(&mut self, field: &str) -> Result<Vec<Task>> {
        match sort_order(field) {
            Some(order) => self.fetch(&format!("{} {}", SELECT_TASKS, order), []),
            None => self.fetch_all(),
        }
    }

    /// Tasks due in the inclusive window [today, today + days],
    /// evaluated against the current date at call time.
    pub fn due_within_days(&mut self, days: i64) -> Result<Vec<Task>> {
        let today = Local::now().date_naive();
        let end = today + Duration::days(days);
        self.fetch(&format!("{} {}", SELECT_TASKS, WHERE_DUE_BETWEEN), params![today, end])
    }

    fn fetch<P: rusqlite::Params>(&mut self, sql: &str, params: P) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(sql)?;
        let task_iter = stmt.query_map(params, map_task_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }
}
