//! Database infrastructure using SeaORM

use sea_orm::{ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod entities;
pub mod error;
pub mod migration;
pub mod schema;

pub use error::{DatabaseError, Violation};
use migration::Migrator;

/// Applied state of one migration unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
	pub name: String,
	pub applied: bool,
}

/// Database wrapper holding the pooled connection
pub struct Database {
	conn: DatabaseConnection,
}

impl Database {
	/// Connect to any supported database URL (`sqlite://`, `postgres://`)
	pub async fn connect(url: &str) -> Result<Self, DatabaseError> {
		let mut opt = ConnectOptions::new(url.to_owned());
		opt.max_connections(10)
			.min_connections(1)
			.connect_timeout(Duration::from_secs(8))
			.idle_timeout(Duration::from_secs(8))
			.sqlx_logging(false); // We'll use tracing instead

		let conn = SeaDatabase::connect(opt)
			.await
			.map_err(DatabaseError::Connection)?;

		info!(backend = ?conn.get_database_backend(), "Connected to database");

		Ok(Self { conn })
	}

	/// Create a new SQLite database at the specified path
	pub async fn create(path: &Path) -> Result<Self, DatabaseError> {
		// Ensure parent directory exists
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}

		let db = Self::connect(&format!("sqlite://{}?mode=rwc", path.display())).await?;
		info!("Created new database at {:?}", path);

		Ok(db)
	}

	/// Open an existing SQLite database
	pub async fn open(path: &Path) -> Result<Self, DatabaseError> {
		if !path.exists() {
			return Err(DatabaseError::NotFound(path.display().to_string()));
		}

		let db = Self::connect(&format!("sqlite://{}", path.display())).await?;
		info!("Opened database at {:?}", path);

		Ok(db)
	}

	/// Apply all pending migrations
	pub async fn migrate(&self) -> Result<(), DatabaseError> {
		self.up(None).await
	}

	/// Apply `steps` pending migrations, all of them when `None`
	pub async fn up(&self, steps: Option<u32>) -> Result<(), DatabaseError> {
		Migrator::up(&self.conn, steps)
			.await
			.map_err(DatabaseError::Migration)?;
		info!("Database migrations completed successfully");
		Ok(())
	}

	/// Roll back `steps` applied migrations, all of them when `None`
	pub async fn down(&self, steps: Option<u32>) -> Result<(), DatabaseError> {
		Migrator::down(&self.conn, steps)
			.await
			.map_err(DatabaseError::Migration)?;
		info!(?steps, "Rolled back database migrations");
		Ok(())
	}

	/// Drop every table and reapply all migrations
	pub async fn fresh(&self) -> Result<(), DatabaseError> {
		Migrator::fresh(&self.conn)
			.await
			.map_err(DatabaseError::Migration)
	}

	/// Roll back all migrations, then reapply them
	pub async fn refresh(&self) -> Result<(), DatabaseError> {
		Migrator::refresh(&self.conn)
			.await
			.map_err(DatabaseError::Migration)
	}

	/// Roll back all migrations
	pub async fn reset(&self) -> Result<(), DatabaseError> {
		Migrator::reset(&self.conn)
			.await
			.map_err(DatabaseError::Migration)
	}

	/// Every known migration in application order, with whether it has been applied
	pub async fn status(&self) -> Result<Vec<MigrationState>, DatabaseError> {
		let applied: HashSet<String> = Migrator::get_applied_migrations(&self.conn)
			.await
			.map_err(DatabaseError::Migration)?
			.iter()
			.map(|m| m.name().to_owned())
			.collect();

		Ok(Migrator::migrations()
			.iter()
			.map(|m| MigrationState {
				name: m.name().to_owned(),
				applied: applied.contains(m.name()),
			})
			.collect())
	}

	/// Get the database connection
	pub fn conn(&self) -> &DatabaseConnection {
		&self.conn
	}
}
