//! # Bornes
//!
//! Directory of EV charging stations ("bornes"): where they are, what they
//! cost, who maintains them, and which vehicle models may charge at them.
//!
//! ## Architecture
//!
//! - **domain**: models, repository traits and errors
//! - **application**: station queries and the vehicle-registration,
//!   location-update and station-removal workflows
//! - **infrastructure**: SQLite store via SeaORM (entities, migrations, seed
//!   loader, `power` SQL function, repositories)
//! - **runtime**: `AppHandle`, the session object built once at startup

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod runtime;
pub mod support;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

pub use runtime::{init_tracing, AppHandle, AppOptions};
