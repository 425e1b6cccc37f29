use rusqlite::Connection;
use std::sync::{Arc, Mutex};

// Application repository modules, each representing specific database entity operations.
pub mod assessment_repository;
pub mod course_repository;
pub mod enrollment_repository;
pub mod support_repository;
pub mod user_repository;

// Database-related utilities and managers.
pub mod database_manager;
pub(crate) mod sqlite;

/// A thread-safe, shared connection to an ``SQLite`` database,
/// used across multiple repository layers.
pub(crate) type SharedSqliteConnection = Arc<Mutex<Connection>>;
