// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use thiserror::Error;

/// Failures produced while constructing a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
	/// Identifier fell outside the `[A-Za-z_][A-Za-z0-9_]*` allow-list.
	#[error("invalid identifier: {0:?}")]
	InvalidIdentifier(String),
	/// A table spec or row set declared no columns.
	#[error("no columns declared")]
	EmptyColumns,
	/// An insert carried no rows.
	#[error("no rows to insert")]
	EmptyRows,
}
