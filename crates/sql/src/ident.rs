// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! Identifier validation and quoting.

use crate::error::SqlError;

/// Longest accepted identifier, in bytes.
pub const MAX_LEN: usize = 128;

/// Validate an identifier against the allow-list and wrap it in double
/// quotes.
///
/// Accepts `[A-Za-z_][A-Za-z0-9_]*` up to [`MAX_LEN`] bytes; everything
/// else is rejected rather than escaped. Identifiers cannot be bound as
/// placeholders, so this allow-list is the boundary that keeps request
/// input out of statement text.
pub fn quote(name: &str) -> Result<String, SqlError> {
	if !is_valid(name) {
		return Err(SqlError::InvalidIdentifier(name.to_string()));
	}
	Ok(format!("\"{name}\""))
}

fn is_valid(name: &str) -> bool {
	if name.is_empty() || name.len() > MAX_LEN {
		return false;
	}
	let mut chars = name.chars();
	matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
