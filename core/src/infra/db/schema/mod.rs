//! Declarative schema description
//!
//! Migrations describe their tables as data ([`TableSpec`], or [`JoinTableSpec`] for
//! association tables) and the renderer in [`render`] turns that description into
//! sea-query statements for whichever backend the migration runs against.

use once_cell::sync::OnceCell;
use sea_orm_migration::{prelude::*, sea_orm::DbBackend};
use serde::{Deserialize, Serialize};

use super::error::DatabaseError;

pub mod join;
pub mod render;
pub mod table;

pub use join::{JoinTableSpec, Reference, ScoreColumn};
pub use table::{
	CheckSpec, ColumnDefault, ColumnKind, ColumnSpec, ForeignKeySpec, IndexSpec, Referential,
	TableSpec, UniqueSpec,
};

static OPTIONS: OnceCell<SchemaOptions> = OnceCell::new();

/// How primary key identifiers are produced for new rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
	/// The database fills `id` through a column default
	#[default]
	Generated,
	/// No column default, every insert must carry its own id
	Application,
}

impl IdStrategy {
	/// Column default expression for an id column on `backend`, if any.
	///
	/// SQLite has no UUID function, so it gets 16 random bytes, which is also the
	/// representation sqlx uses when binding a `Uuid` there.
	pub fn default_expr(&self, backend: DbBackend) -> Option<SimpleExpr> {
		match self {
			Self::Application => None,
			Self::Generated => Some(match backend {
				DbBackend::Postgres => Expr::cust("gen_random_uuid()"),
				DbBackend::MySql => Expr::cust("(UUID_TO_BIN(UUID()))"),
				DbBackend::Sqlite => Expr::cust("(randomblob(16))"),
			}),
		}
	}
}

/// Options shared by every migration unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaOptions {
	#[serde(default)]
	pub id_strategy: IdStrategy,
}

/// Install the options migrations will read for the rest of the process.
///
/// Installing the same options twice is fine; installing different ones after the
/// first call (or after [`options`] fell back to the defaults) is an error.
pub fn install(options: SchemaOptions) -> Result<(), DatabaseError> {
	let current = OPTIONS.get_or_init(|| options.clone());
	if *current == options {
		Ok(())
	} else {
		Err(DatabaseError::SchemaOptionsConflict {
			installed: current.clone(),
			requested: options,
		})
	}
}

/// Options in effect, defaults if nothing was installed.
pub fn options() -> &'static SchemaOptions {
	OPTIONS.get_or_init(SchemaOptions::default)
}
