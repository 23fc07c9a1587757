//! Database connection management

use std::str::FromStr;
use std::time::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use crate::utils::errors::RegistrarError;

pub type DatabasePool = SqlitePool;

/// Students table; the schema is fixed for the lifetime of the bot
const CREATE_STUDENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        age INTEGER NOT NULL,
        grade TEXT NOT NULL
    )
"#;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub busy_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://school_data.db".to_string(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
            busy_timeout: Duration::from_secs(5),
        }
    }
}

impl From<&crate::config::DatabaseConfig> for DatabaseConfig {
    fn from(config: &crate::config::DatabaseConfig) -> Self {
        Self {
            url: config.url.clone(),
            max_connections: config.max_connections,
            acquire_timeout: config.timeout(),
            busy_timeout: config.timeout(),
        }
    }
}

/// Create a new database connection pool
///
/// The database file is created if missing. In-memory databases are limited
/// to a single connection so every query sees the same data.
pub async fn create_pool(config: &DatabaseConfig) -> Result<DatabasePool, RegistrarError> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(config.busy_timeout)
        .create_if_missing(true);

    let pool_options = if config.url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    let pool = pool_options
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await?;

    health_check(&pool).await?;

    tracing::info!(url = %config.url, "Database connection pool created successfully");
    Ok(pool)
}

/// Create the students table if it does not exist yet
pub async fn init_schema(pool: &DatabasePool) -> Result<(), RegistrarError> {
    tracing::info!("Ensuring database schema...");

    sqlx::query(CREATE_STUDENTS_TABLE)
        .execute(pool)
        .await?;

    tracing::info!("Database schema ready");
    Ok(())
}

/// Check database health
pub async fn health_check(pool: &DatabasePool) -> Result<(), RegistrarError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await?;

    Ok(())
}
