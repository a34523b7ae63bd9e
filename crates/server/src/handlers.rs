// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! Request handlers for the DDL and DML sub-routers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use gridgate_sql::{RowSet, TableSpec, builder};
use gridgate_store::Row;
use serde_json::Value;

use crate::{error::GatewayError, execute, state::AppState};

/// `POST /DDL/table` - create every table spec in the batch.
///
/// Specs run sequentially and stop at the first failure; tables created
/// before that point stay created, so callers must treat a failed batch
/// as possibly partially applied. Column definition text is trusted
/// schema input, which is why this operation sits behind its own
/// capability flag.
pub async fn create_tables(
	State(state): State<AppState>,
	Json(specs): Json<Vec<TableSpec>>,
) -> Result<StatusCode, GatewayError> {
	if !state.config().capabilities.ddl_create {
		return Err(GatewayError::NotFound);
	}

	for spec in &specs {
		let statement = builder::create_table(spec)?;
		execute::run(state.store(), statement).await?;
	}

	Ok(StatusCode::NO_CONTENT)
}

/// `GET /DML/{table}` - select every column.
pub async fn select_all(
	State(state): State<AppState>,
	Path(table): Path<String>,
) -> Result<Json<Vec<Row>>, GatewayError> {
	select(state, table, Vec::new()).await
}

/// `GET /DML/{table}/{columns...}` - select the named columns, in path
/// order.
pub async fn select_columns(
	State(state): State<AppState>,
	Path((table, columns)): Path<(String, String)>,
) -> Result<Json<Vec<Row>>, GatewayError> {
	let columns = columns.split('/').filter(|s| !s.is_empty()).map(str::to_string).collect();
	select(state, table, columns).await
}

async fn select(state: AppState, table: String, columns: Vec<String>) -> Result<Json<Vec<Row>>, GatewayError> {
	let statement = builder::select(&table, &columns)?;
	let rows = execute::all(state.store(), statement).await?;
	Ok(Json(rows))
}

/// `POST /DML/{table}` - batch insert.
pub async fn insert_rows(
	State(state): State<AppState>,
	Path(table): Path<String>,
	Json(rows): Json<RowSet>,
) -> Result<StatusCode, GatewayError> {
	let statement = builder::insert(&table, &rows)?;
	execute::run(state.store(), statement).await?;
	Ok(StatusCode::NO_CONTENT)
}

/// `GET /sch` - the configured schema document, when the deployment
/// carries one.
pub async fn schema_doc(State(state): State<AppState>) -> Result<Json<Value>, GatewayError> {
	state.config().schema_doc.clone().map(Json).ok_or(GatewayError::NotFound)
}

/// `GET /cnf` - the configured config document.
pub async fn config_doc(State(state): State<AppState>) -> Result<Json<Value>, GatewayError> {
	state.config().config_doc.clone().map(Json).ok_or(GatewayError::NotFound)
}

/// Catch-all for unmatched routes, methods and unimplemented sub-paths.
pub async fn not_found() -> GatewayError {
	GatewayError::NotFound
}
