//! Seed data loader
//!
//! Runs a SQL insert script once, when the store holds no company yet. The
//! whole script is applied in one transaction.

use std::path::PathBuf;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, TransactionTrait};
use tracing::info;

use super::entities::company;
use crate::support::errors::BootstrapError;

/// Sample dataset shipped with the binary.
pub const DEFAULT_SEED: &str = include_str!("seed.sql");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    Embedded,
    File(PathBuf),
}

impl SeedSource {
    async fn load(&self) -> Result<String, BootstrapError> {
        match self {
            SeedSource::Embedded => Ok(DEFAULT_SEED.to_string()),
            SeedSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| BootstrapError::SeedScript {
                        path: path.display().to_string(),
                        source,
                    })
            }
        }
    }
}

/// Apply the seed script if the store is empty. Returns whether it ran.
pub async fn seed_if_empty(
    db: &DatabaseConnection,
    source: &SeedSource,
) -> Result<bool, BootstrapError> {
    let companies = company::Entity::find().count(db).await?;
    if companies > 0 {
        info!("Store already holds {} companies, skipping seed", companies);
        return Ok(false);
    }

    let script = source.load().await?;
    apply_script(db, &script).await?;
    info!("Seed data loaded ({:?})", source);
    Ok(true)
}

/// Execute a multi-statement SQL script atomically.
pub async fn apply_script(db: &DatabaseConnection, script: &str) -> Result<(), DbErr> {
    let txn = db.begin().await?;
    txn.execute_unprepared(script).await?;
    txn.commit().await
}
