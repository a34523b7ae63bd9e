// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! SQLite-backed store.

use std::{path::Path, sync::Mutex, time::Duration};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use gridgate_sql::Statement;
use rusqlite::{Connection, types::ValueRef};
use serde_json::{Map, Number, Value};

use crate::{DataStore, Row, error::StoreError};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// A store over a single SQLite connection.
///
/// The connection lives behind a mutex; execution is serialized here and
/// expected to run on a blocking thread, one statement per call.
pub struct SqliteStore {
	conn: Mutex<Connection>,
}

impl SqliteStore {
	/// Open (or create) a database file.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
		let conn = Connection::open(path).map_err(|e| StoreError::Open(e.to_string()))?;
		Self::configure(conn)
	}

	/// Open a fresh in-memory database.
	pub fn open_in_memory() -> Result<Self, StoreError> {
		let conn = Connection::open_in_memory().map_err(|e| StoreError::Open(e.to_string()))?;
		Self::configure(conn)
	}

	fn configure(conn: Connection) -> Result<Self, StoreError> {
		conn.pragma_update(None, "journal_mode", "WAL").map_err(|e| StoreError::Open(e.to_string()))?;
		conn.busy_timeout(BUSY_TIMEOUT).map_err(|e| StoreError::Open(e.to_string()))?;

		Ok(Self {
			conn: Mutex::new(conn),
		})
	}
}

impl DataStore for SqliteStore {
	fn run(&self, statement: &Statement) -> Result<(), StoreError> {
		let conn = self.conn.lock().unwrap();
		let mut stmt = conn.prepare(&statement.text).map_err(|e| StoreError::Prepare(e.to_string()))?;

		bind(&mut stmt, &statement.values)?;
		stmt.raw_execute().map_err(|e| StoreError::Execute(e.to_string()))?;

		Ok(())
	}

	fn all(&self, statement: &Statement) -> Result<Vec<Row>, StoreError> {
		let conn = self.conn.lock().unwrap();
		let mut stmt = conn.prepare(&statement.text).map_err(|e| StoreError::Prepare(e.to_string()))?;

		let column_names: Vec<String> = stmt.column_names().iter().map(|n| n.to_string()).collect();

		bind(&mut stmt, &statement.values)?;

		let mut rows = stmt.raw_query();
		let mut results = Vec::new();

		while let Some(row) = rows.next().map_err(|e| StoreError::Execute(e.to_string()))? {
			let mut result = Map::with_capacity(column_names.len());
			for (index, name) in column_names.iter().enumerate() {
				let value = row.get_ref(index).map_err(|e| StoreError::Execute(e.to_string()))?;
				result.insert(name.clone(), from_sql(value));
			}
			results.push(result);
		}

		Ok(results)
	}
}

fn bind(stmt: &mut rusqlite::Statement<'_>, values: &[Value]) -> Result<(), StoreError> {
	for (index, value) in values.iter().enumerate() {
		stmt.raw_bind_parameter(index + 1, to_sql(value))
			.map_err(|e| StoreError::Execute(e.to_string()))?;
	}
	Ok(())
}

/// JSON value to SQLite value. Arrays and objects are stored as their JSON
/// text.
fn to_sql(value: &Value) -> rusqlite::types::Value {
	match value {
		Value::Null => rusqlite::types::Value::Null,
		Value::Bool(b) => rusqlite::types::Value::Integer(*b as i64),
		Value::Number(n) => match n.as_i64() {
			Some(i) => rusqlite::types::Value::Integer(i),
			None => rusqlite::types::Value::Real(n.as_f64().unwrap_or(0.0)),
		},
		Value::String(s) => rusqlite::types::Value::Text(s.clone()),
		other => rusqlite::types::Value::Text(other.to_string()),
	}
}

/// SQLite value to JSON value. Blobs surface as standard-base64 text; a
/// non-finite real has no JSON number and becomes null.
fn from_sql(value: ValueRef<'_>) -> Value {
	match value {
		ValueRef::Null => Value::Null,
		ValueRef::Integer(i) => Value::Number(i.into()),
		ValueRef::Real(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
		ValueRef::Text(t) => Value::String(String::from_utf8_lossy(t).into_owned()),
		ValueRef::Blob(b) => Value::String(STANDARD.encode(b)),
	}
}
