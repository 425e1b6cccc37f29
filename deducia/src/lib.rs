use crate::config::AppConfiguration;
use crate::error::DeduciaError;
use crate::repository::database_manager::{DatabaseConfig, DatabaseManager};
use crate::service::assessment::AssessmentService;
use crate::service::catalog::CatalogService;
use crate::service::enrollment::EnrollmentService;
use crate::service::identity::IdentityService;
use crate::service::support::SupportService;
use std::path::PathBuf;

pub mod config;
pub mod error;
pub mod repository;
pub mod service;
pub mod types;

/// Owns the wired-up services of the platform. One instance is created at
/// startup and shared by every request handler.
pub struct ApplicationRuntime {
    identity: IdentityService,
    catalog: CatalogService,
    assessment: AssessmentService,
    enrollment: EnrollmentService,
    support: SupportService,
}

impl ApplicationRuntime {
    /// Creates a runtime from the loaded application configuration.
    ///
    /// # Errors
    ///
    /// - Returns an error if the database cannot be opened or its schema
    ///   cannot be created.
    /// - Returns an error if the configuration selects a database backend
    ///   this build does not support.
    pub fn new(config: &AppConfiguration) -> Result<Self, DeduciaError> {
        Self::from_database_config(&DatabaseConfig::from_configuration(&config.database))
    }

    fn from_database_config(database: &DatabaseConfig) -> Result<Self, DeduciaError> {
        let manager = DatabaseManager::new(database)?;
        Ok(ApplicationRuntime {
            identity: IdentityService::new(manager.create_user_repository()),
            catalog: CatalogService::new(manager.create_course_repository()),
            assessment: AssessmentService::new(manager.create_assessment_repository()),
            enrollment: EnrollmentService::new(manager.create_enrollment_repository()),
            support: SupportService::new(manager.create_support_repository()),
        })
    }

    pub fn identity(&self) -> &IdentityService {
        &self.identity
    }

    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    pub fn assessment(&self) -> &AssessmentService {
        &self.assessment
    }

    pub fn enrollment(&self) -> &EnrollmentService {
        &self.enrollment
    }

    pub fn support(&self) -> &SupportService {
        &self.support
    }
}

/// Builds an `ApplicationRuntime` against a chosen database, primarily so
/// tests can run against an in-memory store.
#[derive(Default)]
pub struct ApplicationRuntimeBuilder {
    database: Option<DatabaseConfig>,
}

impl ApplicationRuntimeBuilder {
    #[must_use]
    pub fn use_in_memory_db(mut self) -> Self {
        self.database = Some(DatabaseConfig::SqliteInMemory);
        self
    }

    #[must_use]
    pub fn use_database_file(mut self, path: PathBuf) -> Self {
        self.database = Some(DatabaseConfig::SqliteOnDisk { path });
        self
    }

    /// Builds the runtime. Without an explicit choice the default on-disk
    /// database location is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn build(self) -> Result<ApplicationRuntime, DeduciaError> {
        let database = self.database.unwrap_or_else(|| DatabaseConfig::SqliteOnDisk {
            path: config::database_file(),
        });
        ApplicationRuntime::from_database_config(&database)
    }
}
