// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! Tabular data store access for the Gridgate gateway.
//!
//! The gateway only ever prepares, binds and runs statements; locking,
//! durability and timeouts belong to the store itself. Failures surface
//! as-is — retry semantics depend on statement idempotence, which the
//! gateway cannot guarantee for inserts.

pub mod error;
pub mod sqlite;

use gridgate_sql::Statement;
use serde_json::{Map, Value};

pub use error::StoreError;
pub use sqlite::SqliteStore;

/// One result row, keyed by column name.
pub type Row = Map<String, Value>;

/// A store that executes parameterized statements.
///
/// Both operations prepare the statement text, bind every positional value
/// in order and execute; `all` additionally collects the result rows.
pub trait DataStore: Send + Sync {
	/// Execute a statement, discarding any rows it produces.
	fn run(&self, statement: &Statement) -> Result<(), StoreError>;

	/// Execute a statement and collect every result row.
	fn all(&self, statement: &Statement) -> Result<Vec<Row>, StoreError>;
}
