//! Content tables the theme associations hang off
//!
//! Sermon series, sermons and themes. Sermons optionally belong to a series; losing
//! the series leaves the sermon in place.

use sea_orm_migration::prelude::*;

use crate::infra::db::schema::{
	self, ColumnKind, ColumnSpec, ForeignKeySpec, Referential, TableSpec,
};

/// In creation order, parents before children
pub fn tables() -> Vec<TableSpec> {
	vec![sermon_series(), sermons(), themes()]
}

fn sermon_series() -> TableSpec {
	TableSpec::new("sermon_series")
		.column(ColumnSpec::id("id"))
		.column(ColumnSpec::new("title", ColumnKind::Text).not_null())
		.column(ColumnSpec::new("description", ColumnKind::Text))
		.timestamps()
}

fn sermons() -> TableSpec {
	TableSpec::new("sermons")
		.column(ColumnSpec::id("id"))
		.column(ColumnSpec::new("series_id", ColumnKind::Uuid))
		.column(ColumnSpec::new("title", ColumnKind::Text).not_null())
		.column(ColumnSpec::new("scripture_reference", ColumnKind::Text))
		.timestamps()
		.foreign_key(ForeignKeySpec {
			on_delete: Referential::SetNull,
			..ForeignKeySpec::cascading("series_id", "sermon_series")
		})
		.index("series_id")
}

fn themes() -> TableSpec {
	TableSpec::new("themes")
		.column(ColumnSpec::id("id"))
		.column(
			ColumnSpec::new("name", ColumnKind::String)
				.not_null()
				.unique(),
		)
		.column(ColumnSpec::new("description", ColumnKind::Text))
		.timestamps()
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
	async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		for table in tables() {
			table.create(manager, schema::options()).await?;
		}

		Ok(())
	}

	async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		for table in tables().iter().rev() {
			table.drop(manager).await?;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::infra::db::schema::SchemaOptions;
	use pretty_assertions::assert_eq;
	use sea_orm_migration::sea_orm::DbBackend;

	#[test]
	fn test_content_columns() {
		let sql: Vec<String> = tables()
			.iter()
			.flat_map(|table| table.to_sql(DbBackend::Postgres, &SchemaOptions::default()))
			.collect();

		let series = &sql[0];
		assert!(series.contains(r#""title" text NOT NULL"#));
		assert!(series.contains(r#""description" text"#));

		let sermons = &sql[1];
		assert!(sermons.contains(r#""title" text NOT NULL"#));
		assert!(sermons.contains(r#""scripture_reference" text"#));
		assert!(sermons.contains("ON DELETE SET NULL"));
		assert!(sermons.contains("ON UPDATE CASCADE"));
		assert_eq!(
			sql[2],
			r#"CREATE INDEX "idx_sermons_series_id" ON "sermons" ("series_id")"#
		);

		let themes = &sql[3];
		assert!(themes.contains(r#""name" varchar NOT NULL"#));
		assert!(!sql.iter().any(|s| s.contains("RESTRICT") || s.contains("NO ACTION")));
	}

	#[test]
	fn test_theme_name_is_keyable_on_mysql() {
		let themes = themes().to_sql(DbBackend::MySql, &SchemaOptions::default());
		assert!(themes[0].contains("`name` varchar(255) NOT NULL"));
		assert!(themes[0].contains("UNIQUE"));
	}
}
