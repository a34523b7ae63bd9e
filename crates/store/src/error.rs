// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use thiserror::Error;

/// Failures surfaced by a data store.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
	#[error("failed to open store: {0}")]
	Open(String),
	#[error("failed to prepare statement: {0}")]
	Prepare(String),
	#[error("failed to execute statement: {0}")]
	Execute(String),
}
