//! Schema layer for the pulpit content store
//!
//! Sermons, sermon series, themes and the association tables that link them,
//! expressed as ordered sea-orm migrations built from declarative table specs.

pub mod config;
pub mod infra;

pub use infra::db::{migration::Migrator, Database, DatabaseError, Violation};
