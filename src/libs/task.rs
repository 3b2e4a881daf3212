use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date format used for all task input and output.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Task urgency level. Variant order defines sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "LOW" => Ok(Priority::Low),
            "MEDIUM" => Ok(Priority::Medium),
            "HIGH" => Ok(Priority::High),
            other => Err(msg_error_anyhow!(Message::InvalidPriority(other.to_string()))),
        }
    }
}

/// Task progress state. Variant order defines sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Status {
    Todo,
    InProgress,
    Completed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "TODO",
            Status::InProgress => "IN_PROGRESS",
            Status::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "TODO" => Ok(Status::Todo),
            "IN_PROGRESS" => Ok(Status::InProgress),
            "COMPLETED" => Ok(Status::Completed),
            other => Err(msg_error_anyhow!(Message::InvalidStatus(other.to_string()))),
        }
    }
}

/// A single trackable work item.
///
/// Tasks are values: edits replace the whole record identified by `id`.
/// `id` is `None` until the task has been persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub status: Status,
    pub category: Option<String>,
}

impl Task {
    pub fn new(title: &str, description: &str, due_date: NaiveDate, priority: Priority, status: Status, category: Option<String>) -> Result<Self> {
        if title.trim().is_empty() {
            msg_bail_anyhow!(Message::EmptyTitle);
        }
        Ok(Task {
            id: None,
            title: title.to_string(),
            description: description.to_string(),
            due_date,
            priority,
            status,
            category,
        })
    }
}

/// Parses a `%Y-%m-%d` date string, rejecting malformed input.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    match NaiveDate::parse_from_str(s.trim(), DATE_FORMAT) {
        Ok(date) => Ok(date),
        Err(_) => msg_bail_anyhow!(Message::InvalidDate(s.trim().to_string())),
    }
}
