//! Configuration module
//!
//! TOML file, by default at `~/.config/bornes/config.toml`:
//!
//! ```toml
//! [database]
//! path = "bornes.db"
//! # url = "sqlite::memory:"        # overrides `path`
//! # seed_script = "seed.sql"       # defaults to the bundled sample data
//!
//! [logging]
//! level = "info"
//! format = "pretty"                # or "json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::infrastructure::database::seed::SeedSource;
use crate::infrastructure::DatabaseConfig;
use crate::support::errors::ConfigError;

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV: &str = "BORNES_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    /// SQLite file, created if missing
    pub path: PathBuf,
    /// Full connection URL; takes precedence over `path`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// SQL insert script loaded into an empty store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_script: Option<PathBuf>,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from("bornes.db"),
            url: None,
            seed_script: None,
        }
    }
}

impl DatabaseSection {
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!("sqlite://{}?mode=rwc", self.path.display()),
        }
    }

    pub fn seed_source(&self) -> SeedSource {
        match &self.seed_script {
            Some(path) => SeedSource::File(path.clone()),
            None => SeedSource::Embedded,
        }
    }
}

impl From<&DatabaseSection> for DatabaseConfig {
    fn from(section: &DatabaseSection) -> Self {
        DatabaseConfig {
            url: section.connection_url(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// `$BORNES_CONFIG`, else `<config dir>/bornes/config.toml`.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bornes")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = AppConfig::from_toml("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.database.connection_url(), "sqlite://bornes.db?mode=rwc");
        assert_eq!(cfg.database.seed_source(), SeedSource::Embedded);
    }

    #[test]
    fn url_overrides_path() {
        let cfg = AppConfig::from_toml(
            r#"
            [database]
            path = "ignored.db"
            url = "sqlite::memory:"
            seed_script = "/srv/bornes/seed.sql"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.database.connection_url(), "sqlite::memory:");
        assert_eq!(
            cfg.database.seed_source(),
            SeedSource::File(PathBuf::from("/srv/bornes/seed.sql"))
        );
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.logging.format, "pretty");
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!("bornes-config-{}", std::process::id()));
        let path = dir.join("config.toml");

        let mut cfg = AppConfig::default();
        cfg.logging.format = "json".to_string();
        cfg.save(&path).unwrap();

        assert_eq!(AppConfig::load(&path).unwrap(), cfg);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let err = AppConfig::from_toml("[database\npath = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
