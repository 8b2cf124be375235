//! Theme entity

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "themes")]
pub struct Model {
	#[sea_orm(primary_key, auto_increment = false)]
	pub id: Uuid,
	#[sea_orm(unique)]
	pub name: String,
	#[sea_orm(column_type = "Text", nullable)]
	pub description: Option<String>,
	pub created_at: DateTimeUtc,
	pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(has_many = "super::sermon_theme::Entity")]
	SermonThemes,
	#[sea_orm(has_many = "super::series_theme::Entity")]
	SeriesThemes,
}

impl Related<super::sermon_theme::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::SermonThemes.def()
	}
}

impl Related<super::series_theme::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::SeriesThemes.def()
	}
}

impl Related<super::sermon::Entity> for Entity {
	fn to() -> RelationDef {
		super::sermon_theme::Relation::Sermon.def()
	}

	fn via() -> Option<RelationDef> {
		Some(super::sermon_theme::Relation::Theme.def().rev())
	}
}

impl Related<super::sermon_series::Entity> for Entity {
	fn to() -> RelationDef {
		super::series_theme::Relation::Series.def()
	}

	fn via() -> Option<RelationDef> {
		Some(super::series_theme::Relation::Theme.def().rev())
	}
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
	fn new() -> Self {
		Self {
			id: Set(Uuid::new_v4()),
			created_at: Set(Utc::now()),
			updated_at: Set(Utc::now()),
			..ActiveModelTrait::default()
		}
	}

	async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
	where
		C: ConnectionTrait,
	{
		if !insert {
			self.updated_at = Set(Utc::now());
		}
		Ok(self)
	}
}
