use crate::error::DeduciaError;
use crate::repository::SharedSqliteConnection;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub(crate) mod sqlite_assessment_repo;
pub(crate) mod sqlite_course_repo;
pub(crate) mod sqlite_enrollment_repo;
pub(crate) mod sqlite_support_repo;
pub(crate) mod sqlite_user_repo;

/// Creates the entire database schema by running schema creation functions for all entities.
pub(crate) fn create_schema(connection: &SharedSqliteConnection) -> Result<(), DeduciaError> {
    sqlite_user_repo::create_users_table(connection)?;
    sqlite_course_repo::create_courses_table(connection)?;
    sqlite_assessment_repo::create_tests_table(connection)?;
    sqlite_assessment_repo::create_questions_table(connection)?;
    sqlite_enrollment_repo::create_enrollments_table(connection)?;
    sqlite_enrollment_repo::create_results_table(connection)?;
    sqlite_support_repo::create_mentor_requests_table(connection)?;
    sqlite_support_repo::create_support_messages_table(connection)?;
    Ok(())
}

pub(crate) fn create_connection(dbms_path: &Path) -> Result<Connection, DeduciaError> {
    if let Some(parent) = dbms_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|err| DeduciaError::OpenDbms {
                path: dbms_path.display().to_string(),
                reason: err.to_string(),
            })?;
        }
    }
    let connection = Connection::open(dbms_path)?;
    Ok(connection)
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::error::DeduciaError;
    use crate::repository::database_manager::{DatabaseConfig, DatabaseManager};

    /// Creates a `DatabaseManager` with an in-memory database suitable for testing.
    pub fn test_database_manager() -> Result<DatabaseManager, DeduciaError> {
        DatabaseManager::new(&DatabaseConfig::SqliteInMemory)
    }
}
