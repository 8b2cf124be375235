//! Application configuration

use super::default_data_dir;
use crate::infra::db::schema::SchemaOptions;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const CONFIG_FILE: &str = "pulpit.json";

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
	/// Config schema version
	pub version: u32,

	/// Data directory path
	pub data_dir: PathBuf,

	/// Database URL, a SQLite file in the data directory when unset
	#[serde(default)]
	pub database_url: Option<String>,

	/// Logging level
	pub log_level: String,

	/// Schema layer options shared by all migrations
	#[serde(default)]
	pub schema: SchemaOptions,
}

impl AppConfig {
	/// Load configuration from the default location
	pub fn load() -> Result<Self> {
		let data_dir = default_data_dir()?;
		Self::load_from(&data_dir)
	}

	/// Load configuration from a specific data directory, writing defaults if absent
	pub fn load_from(data_dir: &Path) -> Result<Self> {
		let config_path = data_dir.join(CONFIG_FILE);

		if config_path.exists() {
			info!("Loading config from {:?}", config_path);
			let json = fs::read_to_string(&config_path)?;
			let config: AppConfig = serde_json::from_str(&json)?;

			if config.version > Self::target_version() {
				bail!(
					"config at {:?} is v{}, this build understands up to v{}",
					config_path,
					config.version,
					Self::target_version()
				);
			}

			Ok(config)
		} else {
			warn!("No config found, creating default at {:?}", config_path);
			let config = Self::default_with_dir(data_dir.to_path_buf());
			config.save()?;
			Ok(config)
		}
	}

	/// Create default configuration with specific data directory
	pub fn default_with_dir(data_dir: PathBuf) -> Self {
		Self {
			version: Self::target_version(),
			data_dir,
			database_url: None,
			log_level: "info".to_string(),
			schema: SchemaOptions::default(),
		}
	}

	pub fn target_version() -> u32 {
		1
	}

	/// Save configuration to disk
	pub fn save(&self) -> Result<()> {
		// Ensure directory exists
		fs::create_dir_all(&self.data_dir)?;

		let config_path = self.data_dir.join(CONFIG_FILE);
		let json = serde_json::to_string_pretty(self)?;
		fs::write(&config_path, json)?;
		info!("Saved config to {:?}", config_path);
		Ok(())
	}

	/// Get the path for logs directory
	pub fn logs_dir(&self) -> PathBuf {
		self.data_dir.join("logs")
	}

	/// Default SQLite database file
	pub fn database_path(&self) -> PathBuf {
		self.data_dir.join("pulpit.db")
	}

	/// Configured URL, or the SQLite file in the data directory
	pub fn database_url(&self) -> String {
		self.database_url
			.clone()
			.unwrap_or_else(|| format!("sqlite://{}?mode=rwc", self.database_path().display()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::infra::db::schema::IdStrategy;
	use pretty_assertions::assert_eq;
	use tempfile::TempDir;

	#[test]
	fn test_creates_default_config() {
		let temp = TempDir::new().unwrap();

		let config = AppConfig::load_from(temp.path()).unwrap();

		assert_eq!(config, AppConfig::default_with_dir(temp.path().to_path_buf()));
		assert!(temp.path().join(CONFIG_FILE).exists());
		assert!(config.database_url().starts_with("sqlite://"));
		assert!(config.database_url().ends_with("pulpit.db?mode=rwc"));
	}

	#[test]
	fn test_round_trips_through_disk() {
		let temp = TempDir::new().unwrap();
		let mut config = AppConfig::default_with_dir(temp.path().to_path_buf());
		config.database_url = Some("postgres://pulpit@localhost/pulpit".to_string());
		config.schema.id_strategy = IdStrategy::Application;
		config.save().unwrap();

		let loaded = AppConfig::load_from(temp.path()).unwrap();

		assert_eq!(loaded, config);
		assert_eq!(loaded.database_url(), "postgres://pulpit@localhost/pulpit");
	}

	#[test]
	fn test_missing_schema_section_uses_defaults() {
		let temp = TempDir::new().unwrap();
		let json = format!(
			r#"{{"version": 1, "data_dir": {:?}, "log_level": "debug"}}"#,
			temp.path()
		);
		fs::write(temp.path().join(CONFIG_FILE), json).unwrap();

		let loaded = AppConfig::load_from(temp.path()).unwrap();

		assert_eq!(loaded.schema, SchemaOptions::default());
		assert_eq!(loaded.database_url, None);
		assert_eq!(loaded.log_level, "debug");
	}

	#[test]
	fn test_rejects_newer_config() {
		let temp = TempDir::new().unwrap();
		let mut config = AppConfig::default_with_dir(temp.path().to_path_buf());
		config.version = AppConfig::target_version() + 1;
		config.save().unwrap();

		assert!(AppConfig::load_from(temp.path()).is_err());
	}
}
