//! Database errors and constraint violation classification

use sea_orm::{DbErr, RuntimeErr, SqlErr};
use thiserror::Error;

use super::schema::SchemaOptions;

#[derive(Error, Debug)]
pub enum DatabaseError {
	#[error("failed to connect to the database: {0}")]
	Connection(#[source] DbErr),
	#[error("migration failed: {0}")]
	Migration(#[source] DbErr),
	#[error("database query error: {0}")]
	Query(#[from] DbErr),
	#[error("database does not exist: {0}")]
	NotFound(String),
	#[error("failed to create database directory: {0}")]
	Io(#[from] std::io::Error),
	#[error("schema options already installed as {installed:?}, refusing {requested:?}")]
	SchemaOptionsConflict {
		installed: SchemaOptions,
		requested: SchemaOptions,
	},
}

/// Kind of integrity constraint a statement ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
	Unique,
	ForeignKey,
	Check,
	NotNull,
}

impl Violation {
	/// Classify `err`, `None` when it is not a constraint violation.
	///
	/// sea-orm only recognizes unique and foreign key violations, check and not-null
	/// failures are read from the driver's error code or message.
	pub fn of(err: &DbErr) -> Option<Self> {
		match err.sql_err() {
			Some(SqlErr::UniqueConstraintViolation(_)) => return Some(Self::Unique),
			Some(SqlErr::ForeignKeyConstraintViolation(_)) => return Some(Self::ForeignKey),
			_ => {}
		}

		let (code, message) = match err {
			DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e)) => {
				match e.as_database_error() {
					Some(db_err) => (
						db_err.code().map(|c| c.into_owned()),
						db_err.message().to_owned(),
					),
					None => return None,
				}
			}
			_ => return None,
		};

		match code.as_deref() {
			// SQLITE_CONSTRAINT_CHECK / postgres check_violation / mysql ER_CHECK_CONSTRAINT_VIOLATED
			Some("275") | Some("23514") | Some("3819") => Some(Self::Check),
			// SQLITE_CONSTRAINT_NOTNULL / postgres not_null_violation
			Some("1299") | Some("23502") => Some(Self::NotNull),
			_ if message.contains("CHECK constraint failed") => Some(Self::Check),
			_ if message.contains("NOT NULL constraint failed") => Some(Self::NotNull),
			_ => None,
		}
	}
}
