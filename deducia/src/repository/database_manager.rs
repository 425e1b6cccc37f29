use crate::config::DatabaseConfiguration;
use crate::error::DeduciaError;
use crate::repository::sqlite;
use crate::repository::sqlite::sqlite_assessment_repo::SqliteAssessmentRepository;
use crate::repository::sqlite::sqlite_course_repo::SqliteCourseRepository;
use crate::repository::sqlite::sqlite_enrollment_repo::SqliteEnrollmentRepository;
use crate::repository::sqlite::sqlite_support_repo::SqliteSupportRepository;
use crate::repository::sqlite::sqlite_user_repo::SqliteUserRepository;
use crate::repository::SharedSqliteConnection;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Represents parameters for initializing the database connection
pub enum DatabaseConfig {
    /// SQLite database with a specific file path
    SqliteOnDisk { path: PathBuf },

    /// SQLite database that runs entirely in memory
    SqliteInMemory,

    /// A hosted MySQL deployment (the production target of the original
    /// dashboard backend; not wired up in this build)
    MySql {
        host: String,
        user: String,
        password: String,
        database_name: String,
        connection_limit: u32,
    },
}

impl DatabaseConfig {
    /// Maps the environment-driven configuration onto a concrete backend
    /// choice. An external DBMS section takes precedence over the local file.
    #[must_use]
    pub fn from_configuration(config: &DatabaseConfiguration) -> Self {
        match &config.external {
            Some(external) => DatabaseConfig::MySql {
                host: external.host.clone(),
                user: external.user.clone(),
                password: external.password.clone(),
                database_name: external.database_name.clone(),
                connection_limit: external.connection_limit,
            },
            None => DatabaseConfig::SqliteOnDisk {
                path: config.file.clone(),
            },
        }
    }
}

pub struct DatabaseManager {
    connection: SharedSqliteConnection,
}

impl DatabaseManager {
    /// Creates a new `DatabaseManager` based on the provided configuration.
    ///
    /// # Errors
    /// * Returns a `DeduciaError` if the connection cannot be opened, if the
    ///   schema cannot be created, or if the configured backend is not
    ///   supported by this build.
    pub fn new(config: &DatabaseConfig) -> Result<Self, DeduciaError> {
        let connection = match config {
            DatabaseConfig::SqliteOnDisk { path } => sqlite::create_connection(path)?,

            DatabaseConfig::SqliteInMemory => rusqlite::Connection::open_in_memory()?,

            DatabaseConfig::MySql { host, .. } => {
                return Err(DeduciaError::UnsupportedDbms(format!(
                    "MySQL support is not yet implemented (DB_HOST={host})"
                )));
            }
        };

        let connection = Arc::new(Mutex::new(connection));

        // Initialize the schema (idempotent across restarts)
        sqlite::create_schema(&connection)?;

        Ok(Self { connection })
    }

    /// Provide access to the shared database connection.
    pub(crate) fn get_connection(&self) -> SharedSqliteConnection {
        self.connection.clone()
    }

    pub(crate) fn create_user_repository(&self) -> Arc<SqliteUserRepository> {
        Arc::new(SqliteUserRepository::new(self.get_connection()))
    }

    pub(crate) fn create_course_repository(&self) -> Arc<SqliteCourseRepository> {
        Arc::new(SqliteCourseRepository::new(self.get_connection()))
    }

    pub(crate) fn create_assessment_repository(&self) -> Arc<SqliteAssessmentRepository> {
        Arc::new(SqliteAssessmentRepository::new(self.get_connection()))
    }

    pub(crate) fn create_enrollment_repository(&self) -> Arc<SqliteEnrollmentRepository> {
        Arc::new(SqliteEnrollmentRepository::new(self.get_connection()))
    }

    pub(crate) fn create_support_repository(&self) -> Arc<SqliteSupportRepository> {
        Arc::new(SqliteSupportRepository::new(self.get_connection()))
    }
}
