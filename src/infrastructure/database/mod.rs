pub mod entities;
pub mod functions;
pub mod migrator;
pub mod repositories;
pub mod seed;

#[cfg(test)]
pub(crate) mod testing;

use std::str::FromStr;

use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::{DatabaseConnection, SqlxSqliteConnector};
use tracing::info;

use crate::support::errors::BootstrapError;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./bornes.db?mode=rwc")
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./bornes.db?mode=rwc".to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Private in-memory database, gone when the connection closes
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
        }
    }
}

/// Open the single store connection.
///
/// The pool holds exactly one connection that never idles out, so an
/// in-memory database lives as long as the returned handle. Foreign keys are
/// enforced and `power` is registered before the connection is handed out.
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, BootstrapError> {
    info!("Connecting to database: {}", config.url);

    let options = SqliteConnectOptions::from_str(&config.url)?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .after_connect(|conn, _meta| Box::pin(async move { functions::register_power(conn).await }))
        .connect_with(options)
        .await?;

    info!("Database connected successfully");
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}
