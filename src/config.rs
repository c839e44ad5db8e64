//! Store configuration read from `DB_*` environment variables.

use crate::error::ConfigError;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio_postgres::config::SslMode;

pub const DB_DRIVER: &str = "DB_DRIVER";
pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_NAME: &str = "DB_NAME";

/// PostgreSQL connection settings. TLS is always disabled for the session.
#[derive(Clone, PartialEq, Eq)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
}

impl PostgresConfig {
    pub fn to_pg_config(&self) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .user(&self.user)
            .password(&self.password)
            .dbname(&self.dbname)
            .ssl_mode(SslMode::Disable);
        config
    }
}

// Keeps the password out of logs and panics.
impl fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PostgresConfig({self})")
    }
}

impl fmt::Display for PostgresConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "host={} port={} user={} password=*** dbname={} sslmode=disable",
            self.host, self.port, self.user, self.dbname
        )
    }
}

/// SQLite database file settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteConfig {
    /// Path to the SQLite database file
    pub db_path: PathBuf,
}

impl SqliteConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

/// Which backend to open and how to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Postgres(PostgresConfig),
    Sqlite(SqliteConfig),
}

impl StoreConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which returns `None` for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let driver = lookup(DB_DRIVER).unwrap_or_else(|| "postgres".to_string());
        match driver.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => {
                let port = required(DB_PORT)?;
                let port = port
                    .trim()
                    .parse::<u16>()
                    .map_err(|_| ConfigError::Invalid {
                        key: DB_PORT,
                        value: port.clone(),
                    })?;
                Ok(Self::Postgres(PostgresConfig {
                    host: required(DB_HOST)?,
                    port,
                    user: required(DB_USER)?,
                    password: required(DB_PASSWORD)?,
                    dbname: required(DB_NAME)?,
                }))
            }
            "sqlite" => Ok(Self::Sqlite(SqliteConfig::new(required(DB_NAME)?))),
            _ => Err(ConfigError::Invalid {
                key: DB_DRIVER,
                value: driver,
            }),
        }
    }
}

impl fmt::Display for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres(config) => write!(f, "postgres {config}"),
            Self::Sqlite(config) => write!(f, "sqlite {}", config.db_path.display()),
        }
    }
}

/// Load `.env` from the working directory into the process environment.
///
/// A missing file is fine; a file that cannot be parsed is not.
pub fn load_dotenv() -> Result<Option<PathBuf>, ConfigError> {
    load_dotenv_from(Path::new(".env"))
}

/// Load the env file at `path`, returning the path when it existed.
pub fn load_dotenv_from(path: &Path) -> Result<Option<PathBuf>, ConfigError> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(Some(path.to_path_buf())),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(ConfigError::Dotenv(err)),
    }
}
