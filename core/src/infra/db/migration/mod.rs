//! Database migrations

use sea_orm_migration::prelude::*;

use super::schema::TableSpec;

mod m20240101_000001_create_content_tables;
mod m20240301_000001_create_sermon_themes;
mod m20240301_000002_create_series_themes;

pub use m20240301_000001_create_sermon_themes::SERMON_THEMES;
pub use m20240301_000002_create_series_themes::SERIES_THEMES;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
	fn migrations() -> Vec<Box<dyn MigrationTrait>> {
		vec![
			Box::new(m20240101_000001_create_content_tables::Migration),
			Box::new(m20240301_000001_create_sermon_themes::Migration),
			Box::new(m20240301_000002_create_series_themes::Migration),
		]
	}
}

/// Tables each migration creates, keyed by migration name, in application order
pub fn planned_tables() -> Vec<(String, Vec<TableSpec>)> {
	vec![
		(
			m20240101_000001_create_content_tables::Migration
				.name()
				.to_owned(),
			m20240101_000001_create_content_tables::tables(),
		),
		(
			m20240301_000001_create_sermon_themes::Migration
				.name()
				.to_owned(),
			m20240301_000001_create_sermon_themes::tables(),
		),
		(
			m20240301_000002_create_series_themes::Migration
				.name()
				.to_owned(),
			m20240301_000002_create_series_themes::tables(),
		),
	]
}
