//! Database layer for the taskmate application.
//!
//! A thin persistence layer over SQLite: one table of tasks, with
//! create/read/update/delete plus the filtered and sorted select variants
//! the query commands need.

/// Core database connection module.
///
/// Opens the SQLite connection at the configured path.
pub mod db;

/// Task table operations.
///
/// CRUD plus keyword search, category filter, field-ordered retrieval and
/// due-date window selection.
pub mod tasks;
