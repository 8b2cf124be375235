//! Throwaway databases and parent rows for integration tests

use pulpit_core::infra::db::entities::{sermon, sermon_series, theme};
use pulpit_core::Database;
use sea_orm::{
	ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DbBackend, Set, Statement,
};
use sea_orm_migration::SchemaManager;
use tempfile::TempDir;

/// Empty SQLite database in a temp dir; keep the `TempDir` alive for the test
pub async fn empty_db() -> (Database, TempDir) {
	let temp_dir = TempDir::new().unwrap();
	let db = Database::create(&temp_dir.path().join("pulpit.db"))
		.await
		.unwrap();
	(db, temp_dir)
}

/// Database with every migration applied
pub async fn migrated_db() -> (Database, TempDir) {
	let (db, temp_dir) = empty_db().await;
	db.migrate().await.unwrap();
	(db, temp_dir)
}

pub async fn insert_series(db: &Database, title: &str) -> sermon_series::Model {
	sermon_series::ActiveModel {
		title: Set(title.to_string()),
		..ActiveModelBehavior::new()
	}
	.insert(db.conn())
	.await
	.unwrap()
}

pub async fn insert_sermon(
	db: &Database,
	title: &str,
	series: Option<&sermon_series::Model>,
) -> sermon::Model {
	sermon::ActiveModel {
		title: Set(title.to_string()),
		series_id: Set(series.map(|s| s.id)),
		..ActiveModelBehavior::new()
	}
	.insert(db.conn())
	.await
	.unwrap()
}

pub async fn insert_theme(db: &Database, name: &str) -> theme::Model {
	theme::ActiveModel {
		name: Set(name.to_string()),
		..ActiveModelBehavior::new()
	}
	.insert(db.conn())
	.await
	.unwrap()
}

pub async fn has_table(db: &Database, table: &str) -> bool {
	SchemaManager::new(db.conn()).has_table(table).await.unwrap()
}

pub async fn has_index(db: &Database, table: &str, index: &str) -> bool {
	SchemaManager::new(db.conn())
		.has_index(table, index)
		.await
		.unwrap()
}

/// `(name, sql)` of the table and every index SQLite keeps for it
pub async fn schema_objects(db: &Database, table: &str) -> Vec<(String, Option<String>)> {
	db.conn()
		.query_all(Statement::from_sql_and_values(
			DbBackend::Sqlite,
			"SELECT name, sql FROM sqlite_master WHERE tbl_name = ? ORDER BY type, name",
			[table.into()],
		))
		.await
		.unwrap()
		.iter()
		.map(|row| {
			(
				row.try_get::<String>("", "name").unwrap(),
				row.try_get::<Option<String>>("", "sql").unwrap(),
			)
		})
		.collect()
}
