use thiserror::Error;

#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug)]
pub enum DeduciaError {
    #[error("Required field missing: {0}")]
    MissingField(&'static str),
    #[error("No account registered for phone number {0}")]
    UnknownUser(String),
    #[error("SQL dbms error: {0}")]
    Sql(String),
    #[error("Unable to open DBMS in file {path}: {reason}")]
    OpenDbms { path: String, reason: String },
    #[error("Mutex locking error")]
    LockPoisoned,
    #[error("Unable to create database SQL schema: {0}")]
    DatabaseError(String),
    #[error("Unsupported database backend: {0}")]
    UnsupportedDbms(String),
}

impl From<rusqlite::Error> for DeduciaError {
    fn from(err: rusqlite::Error) -> Self {
        DeduciaError::Sql(format!("Sqlite error {err}"))
    }
}
