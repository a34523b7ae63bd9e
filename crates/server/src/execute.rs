// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! Statement execution off the async runtime.
//!
//! Store calls are synchronous, so each one runs on a blocking thread;
//! awaiting the join handle is the single suspension point per statement.

use std::sync::Arc;

use gridgate_sql::Statement;
use gridgate_store::{DataStore, Row};

use crate::error::GatewayError;

/// Execute a statement, discarding rows.
pub async fn run(store: Arc<dyn DataStore>, statement: Statement) -> Result<(), GatewayError> {
	match tokio::task::spawn_blocking(move || store.run(&statement)).await {
		Ok(outcome) => outcome.map_err(GatewayError::from),
		Err(join) => Err(GatewayError::Internal(format!("statement task failed: {join}"))),
	}
}

/// Execute a statement and collect every result row.
pub async fn all(store: Arc<dyn DataStore>, statement: Statement) -> Result<Vec<Row>, GatewayError> {
	match tokio::task::spawn_blocking(move || store.all(&statement)).await {
		Ok(outcome) => outcome.map_err(GatewayError::from),
		Err(join) => Err(GatewayError::Internal(format!("statement task failed: {join}"))),
	}
}
