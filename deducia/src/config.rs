use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CONNECTION_LIMIT: u32 = 10;

/// Application configuration struct.
/// Holds the data we need to bind the listener and reach the database.
#[derive(Debug, PartialEq, Clone)]
pub struct AppConfiguration {
    pub server: ServerConfiguration,
    pub database: DatabaseConfiguration,
}

#[derive(Debug, PartialEq, Clone)]
pub struct ServerConfiguration {
    /// TCP port the HTTP listener binds to.
    pub port: u16,
}

#[derive(Debug, PartialEq, Clone)]
pub struct DatabaseConfiguration {
    /// Path of the local SQLite database file.
    pub file: PathBuf,

    /// Connection parameters for an external DBMS deployment.
    /// Populated when `DB_HOST` is set; takes precedence over `file`.
    pub external: Option<ExternalDbmsConfiguration>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct ExternalDbmsConfiguration {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database_name: String,
    pub connection_limit: u32,
}

/// Loads the configuration from the process environment.
///
/// Recognized variables: `PORT`, `DEDUCIA_DB`, `DB_HOST`, `DB_USER`,
/// `DB_PASSWORD`, `DB_NAME` and `DB_CONNECTION_LIMIT`. Unset variables fall
/// back to defaults; a missing `DB_HOST` means the local SQLite file is used.
#[must_use]
pub fn load() -> AppConfiguration {
    let external = env_opt("DB_HOST").map(|host| ExternalDbmsConfiguration {
        host,
        user: env_opt("DB_USER").unwrap_or_default(),
        password: env_opt("DB_PASSWORD").unwrap_or_default(),
        database_name: env_opt("DB_NAME").unwrap_or_default(),
        connection_limit: parse_or_default(env_opt("DB_CONNECTION_LIMIT"), DEFAULT_CONNECTION_LIMIT),
    });

    AppConfiguration {
        server: ServerConfiguration {
            port: parse_or_default(env_opt("PORT"), DEFAULT_PORT),
        },
        database: DatabaseConfiguration {
            file: env_opt("DEDUCIA_DB").map_or_else(database_file, PathBuf::from),
            external,
        },
    }
}

/// Filename of the SQLite DBMS holding the platform data.
#[must_use]
pub fn database_file() -> PathBuf {
    project_dirs().data_dir().join("deducia.db")
}

fn project_dirs() -> ProjectDirs {
    ProjectDirs::from("com", "deducia", "deducia")
        .expect("Unable to determine the name of the 'project_dirs' directory name")
}

fn env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

fn parse_or_default<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|value| value.parse().ok()).unwrap_or(default)
}
