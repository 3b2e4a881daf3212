//! # Taskmate - personal task tracker
//!
//! A command-line utility for recording tasks and querying them: due dates,
//! priorities, progress statuses and optional categories, stored in a local
//! SQLite database.
//!
//! ## Features
//!
//! - **Task Management**: Add, view, edit and delete tasks
//! - **Queries**: Keyword search, category filter, field-ordered listing
//! - **Due Windows**: Upcoming-tasks view over an inclusive date window
//! - **Statistics**: Completion rate, overdue and due-today counts
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmate::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
