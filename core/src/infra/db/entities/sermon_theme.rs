//! Sermon ↔ theme association
//!
//! Junction table carrying how strongly a sermon relates to a theme. Rows go away
//! with either parent.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sermon_themes")]
pub struct Model {
	#[sea_orm(primary_key, auto_increment = false)]
	pub id: Uuid,
	pub sermon_id: Uuid,
	pub theme_id: Uuid,
	pub is_primary_theme: bool,
	pub relevance_score: Option<i32>, // 1..=10
	#[sea_orm(column_type = "Text", nullable)]
	pub connection_notes: Option<String>,
	pub created_at: DateTimeUtc,
	pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(
		belongs_to = "super::sermon::Entity",
		from = "Column::SermonId",
		to = "super::sermon::Column::Id",
		on_update = "Cascade",
		on_delete = "Cascade"
	)]
	Sermon,

	#[sea_orm(
		belongs_to = "super::theme::Entity",
		from = "Column::ThemeId",
		to = "super::theme::Column::Id",
		on_update = "Cascade",
		on_delete = "Cascade"
	)]
	Theme,
}

impl Related<super::sermon::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Sermon.def()
	}
}

impl Related<super::theme::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Theme.def()
	}
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
	fn new() -> Self {
		Self {
			id: Set(Uuid::new_v4()),
			is_primary_theme: Set(false),
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

impl ActiveModel {
	/// Fresh association between `sermon_id` and `theme_id`
	pub fn link(sermon_id: Uuid, theme_id: Uuid) -> Self {
		Self {
			sermon_id: Set(sermon_id),
			theme_id: Set(theme_id),
			..<Self as ActiveModelBehavior>::new()
		}
	}
}
