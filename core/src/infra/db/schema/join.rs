//! Join tables with attributes
//!
//! An association between some owner (a sermon, a series) and a theme that also
//! carries a primary flag, a bounded score and free-form notes.

use super::{CheckSpec, ColumnDefault, ColumnKind, ColumnSpec, ForeignKeySpec, TableSpec};

/// Required, cascading reference to `table(id)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
	pub column: &'static str,
	pub table: &'static str,
}

/// Optional integer column constrained to `min..=max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreColumn {
	pub name: &'static str,
	pub min: i32,
	pub max: i32,
}

impl ScoreColumn {
	pub fn check(&self) -> CheckSpec {
		CheckSpec {
			column: self.name,
			min: self.min,
			max: self.max,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinTableSpec {
	pub table: &'static str,
	pub owner: Reference,
	pub target: Reference,
	/// Boolean column, false unless set
	pub flag: &'static str,
	pub score: ScoreColumn,
	pub notes: &'static str,
}

impl JoinTableSpec {
	/// Expand into a full table description.
	///
	/// Nothing here limits the flag to one row per owner.
	pub fn table(&self) -> TableSpec {
		TableSpec::new(self.table)
			.column(ColumnSpec::id("id"))
			.column(ColumnSpec::new(self.owner.column, ColumnKind::Uuid).not_null())
			.column(ColumnSpec::new(self.target.column, ColumnKind::Uuid).not_null())
			.column(
				ColumnSpec::new(self.flag, ColumnKind::Boolean)
					.not_null()
					.default(ColumnDefault::Bool(false)),
			)
			.column(ColumnSpec::new(self.score.name, ColumnKind::Integer))
			.column(ColumnSpec::new(self.notes, ColumnKind::Text))
			.timestamps()
			.foreign_key(ForeignKeySpec::cascading(
				self.owner.column,
				self.owner.table,
			))
			.foreign_key(ForeignKeySpec::cascading(
				self.target.column,
				self.target.table,
			))
			.check(self.score.check())
			.unique(&[self.owner.column, self.target.column])
			.index(self.owner.column)
			.index(self.target.column)
			.index(self.flag)
			.index(self.score.name)
	}
}
