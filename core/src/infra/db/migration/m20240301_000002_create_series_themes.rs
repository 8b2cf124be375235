//! Create the series_themes association table

use sea_orm_migration::prelude::*;

use crate::infra::db::schema::{self, JoinTableSpec, Reference, ScoreColumn, TableSpec};

pub const SERIES_THEMES: JoinTableSpec = JoinTableSpec {
	table: "series_themes",
	owner: Reference {
		column: "series_id",
		table: "sermon_series",
	},
	target: Reference {
		column: "theme_id",
		table: "themes",
	},
	flag: "is_primary_theme",
	score: ScoreColumn {
		name: "emphasis_level",
		min: 1,
		max: 5,
	},
	notes: "series_connection",
};

pub fn tables() -> Vec<TableSpec> {
	vec![SERIES_THEMES.table()]
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
	async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		SERIES_THEMES
			.table()
			.create(manager, schema::options())
			.await
	}

	async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		SERIES_THEMES.table().drop(manager).await
	}
}
