//! Table description types

use sea_orm_migration::prelude::ForeignKeyAction;

/// Storage class of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
	Uuid,
	Boolean,
	Integer,
	/// Bounded string, safe to put under a unique constraint on every backend
	String,
	Text,
	Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnDefault {
	Bool(bool),
	CurrentTimestamp,
	/// Identifier produced according to the installed id strategy
	GeneratedId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
	pub name: &'static str,
	pub kind: ColumnKind,
	pub nullable: bool,
	pub primary_key: bool,
	pub unique: bool,
	pub default: Option<ColumnDefault>,
}

impl ColumnSpec {
	/// Nullable column without default
	pub fn new(name: &'static str, kind: ColumnKind) -> Self {
		Self {
			name,
			kind,
			nullable: true,
			primary_key: false,
			unique: false,
			default: None,
		}
	}

	/// UUID primary key filled by the id strategy
	pub fn id(name: &'static str) -> Self {
		Self::new(name, ColumnKind::Uuid)
			.not_null()
			.primary_key()
			.default(ColumnDefault::GeneratedId)
	}

	/// Timestamp column stamped with the current time on insert
	pub fn timestamp(name: &'static str) -> Self {
		Self::new(name, ColumnKind::Timestamp)
			.not_null()
			.default(ColumnDefault::CurrentTimestamp)
	}

	pub fn not_null(mut self) -> Self {
		self.nullable = false;
		self
	}

	pub fn primary_key(mut self) -> Self {
		self.primary_key = true;
		self
	}

	pub fn unique(mut self) -> Self {
		self.unique = true;
		self
	}

	pub fn default(mut self, default: ColumnDefault) -> Self {
		self.default = Some(default);
		self
	}
}

/// Referential action on delete/update of the parent row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Referential {
	Cascade,
	SetNull,
}

impl From<Referential> for ForeignKeyAction {
	fn from(action: Referential) -> Self {
		match action {
			Referential::Cascade => ForeignKeyAction::Cascade,
			Referential::SetNull => ForeignKeyAction::SetNull,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeySpec {
	pub column: &'static str,
	pub references_table: &'static str,
	pub references_column: &'static str,
	pub on_delete: Referential,
	pub on_update: Referential,
}

impl ForeignKeySpec {
	/// Reference to `table(id)` that follows the parent on delete and update
	pub fn cascading(column: &'static str, table: &'static str) -> Self {
		Self {
			column,
			references_table: table,
			references_column: "id",
			on_delete: Referential::Cascade,
			on_update: Referential::Cascade,
		}
	}
}

/// `column IS NULL OR column BETWEEN min AND max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSpec {
	pub column: &'static str,
	pub min: i32,
	pub max: i32,
}

impl CheckSpec {
	pub fn accepts(&self, value: Option<i32>) -> bool {
		value.map_or(true, |v| (self.min..=self.max).contains(&v))
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueSpec {
	pub columns: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpec {
	pub column: &'static str,
}

/// Ordered description of one table: columns first, then constraints and indexes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
	pub name: &'static str,
	pub columns: Vec<ColumnSpec>,
	pub foreign_keys: Vec<ForeignKeySpec>,
	pub checks: Vec<CheckSpec>,
	pub uniques: Vec<UniqueSpec>,
	pub indexes: Vec<IndexSpec>,
}

impl TableSpec {
	pub fn new(name: &'static str) -> Self {
		Self {
			name,
			columns: Vec::new(),
			foreign_keys: Vec::new(),
			checks: Vec::new(),
			uniques: Vec::new(),
			indexes: Vec::new(),
		}
	}

	pub fn column(mut self, column: ColumnSpec) -> Self {
		self.columns.push(column);
		self
	}

	/// `created_at` and `updated_at`
	pub fn timestamps(self) -> Self {
		self.column(ColumnSpec::timestamp("created_at"))
			.column(ColumnSpec::timestamp("updated_at"))
	}

	pub fn foreign_key(mut self, foreign_key: ForeignKeySpec) -> Self {
		self.foreign_keys.push(foreign_key);
		self
	}

	pub fn check(mut self, check: CheckSpec) -> Self {
		self.checks.push(check);
		self
	}

	pub fn unique(mut self, columns: &[&'static str]) -> Self {
		self.uniques.push(UniqueSpec {
			columns: columns.to_vec(),
		});
		self
	}

	pub fn index(mut self, column: &'static str) -> Self {
		self.indexes.push(IndexSpec { column });
		self
	}

	pub fn column_spec(&self, name: &str) -> Option<&ColumnSpec> {
		self.columns.iter().find(|c| c.name == name)
	}

	pub fn foreign_key_name(&self, foreign_key: &ForeignKeySpec) -> String {
		format!("fk_{}_{}", self.name, foreign_key.column)
	}

	pub fn unique_name(&self, unique: &UniqueSpec) -> String {
		format!("uq_{}_{}", self.name, unique.columns.join("_"))
	}

	pub fn index_name(&self, index: &IndexSpec) -> String {
		format!("idx_{}_{}", self.name, index.column)
	}
}
