//! Rendering of [`TableSpec`] into sea-query statements

use sea_orm_migration::{prelude::*, sea_orm::DbBackend};
use tracing::debug;

use super::{ColumnDefault, ColumnKind, ColumnSpec, SchemaOptions, TableSpec};

impl TableSpec {
	/// `CREATE TABLE` with columns in declaration order, foreign keys, range checks
	/// and named unique constraints. Deliberately not `IF NOT EXISTS`: creating a
	/// table twice is an error the runner must see.
	pub fn create_statement(
		&self,
		backend: DbBackend,
		options: &SchemaOptions,
	) -> TableCreateStatement {
		let mut stmt = Table::create();
		stmt.table(Alias::new(self.name));

		for column in &self.columns {
			stmt.col(&mut self.column_def(column, backend, options));
		}

		for foreign_key in &self.foreign_keys {
			stmt.foreign_key(
				ForeignKey::create()
					.name(self.foreign_key_name(foreign_key))
					.from(Alias::new(self.name), Alias::new(foreign_key.column))
					.to(
						Alias::new(foreign_key.references_table),
						Alias::new(foreign_key.references_column),
					)
					.on_delete(foreign_key.on_delete.into())
					.on_update(foreign_key.on_update.into()),
			);
		}

		for unique in &self.uniques {
			let mut index = Index::create();
			index.name(self.unique_name(unique)).unique();
			for column in &unique.columns {
				index.col(Alias::new(*column));
			}
			stmt.index(&mut index);
		}

		stmt.to_owned()
	}

	/// One `CREATE INDEX` per declared index
	pub fn index_statements(&self) -> Vec<IndexCreateStatement> {
		self.indexes
			.iter()
			.map(|index| {
				Index::create()
					.name(self.index_name(index))
					.table(Alias::new(self.name))
					.col(Alias::new(index.column))
					.to_owned()
			})
			.collect()
	}

	/// `DROP TABLE IF EXISTS`, so rolling back twice is harmless
	pub fn drop_statement(&self) -> TableDropStatement {
		Table::drop()
			.table(Alias::new(self.name))
			.if_exists()
			.to_owned()
	}

	/// Create the table and then its indexes, stopping at the first failure
	pub async fn create(
		&self,
		manager: &SchemaManager<'_>,
		options: &SchemaOptions,
	) -> Result<(), DbErr> {
		let backend = manager.get_database_backend();
		debug!(table = self.name, ?backend, "Creating table");

		manager
			.create_table(self.create_statement(backend, options))
			.await?;

		for index in self.index_statements() {
			manager.create_index(index).await?;
		}

		Ok(())
	}

	pub async fn drop(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
		debug!(table = self.name, "Dropping table");
		manager.drop_table(self.drop_statement()).await
	}

	/// Forward DDL as SQL text, table first then indexes
	pub fn to_sql(&self, backend: DbBackend, options: &SchemaOptions) -> Vec<String> {
		let mut sql = vec![backend.build(&self.create_statement(backend, options)).sql];
		sql.extend(
			self.index_statements()
				.iter()
				.map(|index| backend.build(index).sql),
		);
		sql
	}

	fn column_def(
		&self,
		column: &ColumnSpec,
		backend: DbBackend,
		options: &SchemaOptions,
	) -> ColumnDef {
		let mut def = ColumnDef::new(Alias::new(column.name));

		match column.kind {
			ColumnKind::Uuid => def.uuid(),
			ColumnKind::Boolean => def.boolean(),
			ColumnKind::Integer => def.integer(),
			ColumnKind::String => def.string(),
			ColumnKind::Text => def.text(),
			ColumnKind::Timestamp => def.timestamp_with_time_zone(),
		};

		if column.nullable {
			def.null();
		} else {
			def.not_null();
		}
		if column.primary_key {
			def.primary_key();
		}
		if column.unique {
			def.unique_key();
		}

		match column.default {
			Some(ColumnDefault::Bool(value)) => {
				def.default(value);
			}
			Some(ColumnDefault::CurrentTimestamp) => {
				def.default(Expr::current_timestamp());
			}
			Some(ColumnDefault::GeneratedId) => {
				if let Some(expr) = options.id_strategy.default_expr(backend) {
					def.default(expr);
				}
			}
			None => {}
		}

		for check in self.checks.iter().filter(|c| c.column == column.name) {
			def.check(
				Expr::col(Alias::new(check.column))
					.is_null()
					.or(Expr::col(Alias::new(check.column)).between(check.min, check.max)),
			);
		}

		def.to_owned()
	}
}
