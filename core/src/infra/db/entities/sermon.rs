//! Sermon entity

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sermons")]
pub struct Model {
	#[sea_orm(primary_key, auto_increment = false)]
	pub id: Uuid,
	pub series_id: Option<Uuid>,
	pub title: String,
	pub scripture_reference: Option<String>,
	pub created_at: DateTimeUtc,
	pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(
		belongs_to = "super::sermon_series::Entity",
		from = "Column::SeriesId",
		to = "super::sermon_series::Column::Id",
		on_update = "Cascade",
		on_delete = "SetNull"
	)]
	Series,
	#[sea_orm(has_many = "super::sermon_theme::Entity")]
	SermonThemes,
}

impl Related<super::sermon_series::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Series.def()
	}
}

impl Related<super::sermon_theme::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::SermonThemes.def()
	}
}

impl Related<super::theme::Entity> for Entity {
	fn to() -> RelationDef {
		super::sermon_theme::Relation::Theme.def()
	}

	fn via() -> Option<RelationDef> {
		Some(super::sermon_theme::Relation::Sermon.def().rev())
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
