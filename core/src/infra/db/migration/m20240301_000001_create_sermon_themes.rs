//! Create the sermon_themes association table
//!
//! Links a sermon to the themes it touches, with a relevance score and notes on
//! how the sermon connects to each theme.

use sea_orm_migration::prelude::*;

use crate::infra::db::schema::{self, JoinTableSpec, Reference, ScoreColumn, TableSpec};

pub const SERMON_THEMES: JoinTableSpec = JoinTableSpec {
	table: "sermon_themes",
	owner: Reference {
		column: "sermon_id",
		table: "sermons",
	},
	target: Reference {
		column: "theme_id",
		table: "themes",
	},
	flag: "is_primary_theme",
	score: ScoreColumn {
		name: "relevance_score",
		min: 1,
		max: 10,
	},
	notes: "connection_notes",
};

pub fn tables() -> Vec<TableSpec> {
	vec![SERMON_THEMES.table()]
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
	async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		SERMON_THEMES
			.table()
			.create(manager, schema::options())
			.await
	}

	async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		SERMON_THEMES.table().drop(manager).await
	}
}
