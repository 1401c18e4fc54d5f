//! Application handle
//!
//! Builds the store connection, applies schema and seed data, and wires the
//! services. Construct it once at startup and pass it by reference to
//! whatever drives the workflows.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{info, warn};

use crate::application::services::{StationService, VehicleRegistrationService};
use crate::config::AppConfig;
use crate::domain::RepositoryProvider;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::database::seed;
use crate::infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
use crate::support::errors::BootstrapError;

// ── Options ────────────────────────────────────────────────────────

/// Options for opening the application.
pub struct AppOptions {
    /// Application configuration.
    pub config: AppConfig,
    /// Apply schema migrations on startup (default: true).
    pub auto_migrate: bool,
    /// Load seed data into an empty store (default: true).
    pub seed: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
            seed: true,
        }
    }
}

// ── AppHandle ──────────────────────────────────────────────────────

/// The process-wide session: one store connection and the services on top.
///
/// # Examples
///
/// ```rust,no_run
/// use bornes::runtime::{AppHandle, AppOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let app = AppHandle::open(AppOptions::default()).await?;
///     for row in app.stations.list_type2_stations().await? {
///         println!("{:?}", row);
///     }
///     app.close().await;
///     Ok(())
/// }
/// ```
pub struct AppHandle {
    pub stations: StationService,
    pub vehicles: VehicleRegistrationService,
    pub config: AppConfig,

    db: DatabaseConnection,
}

impl AppHandle {
    /// Open the store and run the bootstrap steps enabled in `opts`.
    ///
    /// Core operations assume schema and seed are in place; nothing re-checks
    /// them afterwards.
    pub async fn open(opts: AppOptions) -> Result<Self, BootstrapError> {
        let app_cfg = opts.config;

        let db_config = DatabaseConfig::from(&app_cfg.database);
        let db = init_database(&db_config).await?;

        if opts.auto_migrate {
            info!("Running database migrations...");
            Migrator::up(&db, None).await?;
            info!("Migrations completed");
        }

        if opts.seed {
            seed::seed_if_empty(&db, &app_cfg.database.seed_source()).await?;
        }

        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

        Ok(Self {
            stations: StationService::new(repos.clone()),
            vehicles: VehicleRegistrationService::new(repos),
            config: app_cfg,
            db,
        })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Close the store connection.
    pub async fn close(self) {
        if let Err(e) = self.db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("Database connection closed");
        }
    }
}

/// Install the global tracing subscriber. `RUST_LOG` wins over the config.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}
