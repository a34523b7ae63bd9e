// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! Builders for the three statement kinds the gateway emits.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{error::SqlError, ident, statement::Statement};

/// A table to create: a name plus raw column definitions.
///
/// Column definition text (name, type, constraints) goes into the
/// statement verbatim, so table creation must only be exposed to callers
/// trusted with schema text. The table name itself still passes identifier
/// validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableSpec {
	pub name: String,
	pub columns: Vec<String>,
}

/// Rows to insert: the declared column order plus one value map per row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RowSet {
	pub columns: Vec<String>,
	pub rows: Vec<Map<String, Value>>,
}

/// Build `CREATE TABLE IF NOT EXISTS "name"(...)`. No bound values.
pub fn create_table(spec: &TableSpec) -> Result<Statement, SqlError> {
	if spec.columns.is_empty() {
		return Err(SqlError::EmptyColumns);
	}

	let name = ident::quote(&spec.name)?;

	Ok(Statement::new(format!("CREATE TABLE IF NOT EXISTS {name}({})", spec.columns.join(", "))))
}

/// Build `SELECT ... FROM "table"`. No bound values.
///
/// An empty column list selects `*`; otherwise every column is emitted
/// table-qualified as `"table"."column"`, comma-joined.
pub fn select(table: &str, columns: &[String]) -> Result<Statement, SqlError> {
	let table = ident::quote(table)?;

	let result_columns = if columns.is_empty() {
		"*".to_string()
	} else {
		columns.iter()
			.map(|column| Ok(format!("{table}.{}", ident::quote(column)?)))
			.collect::<Result<Vec<_>, SqlError>>()?
			.join(", ")
	};

	Ok(Statement::new(format!("SELECT {result_columns} FROM {table}")))
}

/// Build a multi-row `INSERT INTO "table" (...) VALUES (?, ...), ...`.
///
/// One placeholder group per row. Bound values are materialized eagerly in
/// row-major, column-minor order: for each row in order, each declared
/// column's value in order. Rows are zipped positionally against the
/// declared columns, never validated by name; a row without a declared
/// column binds null. The placeholder count always equals
/// `rows.len() * columns.len()`.
pub fn insert(table: &str, rows: &RowSet) -> Result<Statement, SqlError> {
	if rows.columns.is_empty() {
		return Err(SqlError::EmptyColumns);
	}
	if rows.rows.is_empty() {
		return Err(SqlError::EmptyRows);
	}

	let table = ident::quote(table)?;
	let columns = rows.columns.iter().map(|c| ident::quote(c)).collect::<Result<Vec<_>, _>>()?;

	let group = format!("({})", vec!["?"; rows.columns.len()].join(", "));
	let groups = vec![group.as_str(); rows.rows.len()].join(", ");

	let mut values = Vec::with_capacity(rows.rows.len() * rows.columns.len());
	for row in &rows.rows {
		for column in &rows.columns {
			values.push(row.get(column).cloned().unwrap_or(Value::Null));
		}
	}

	Ok(Statement::with_values(
		format!("INSERT INTO {table} ({}) VALUES {groups}", columns.join(", ")),
		values,
	))
}
