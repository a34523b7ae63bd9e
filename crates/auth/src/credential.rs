// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! Basic-credential parsing and verification.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use subtle::ConstantTimeEq;

use crate::error::AuthError;

const SCHEME: &str = "Basic";

/// A user/password pair recovered from a Basic authorization header.
///
/// Lives for a single request; nothing in the gateway retains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
	pub user: String,
	pub pass: String,
}

/// Parse a `Basic <base64(user:pass)>` authorization header value.
///
/// The header must be exactly two tokens separated by a single space, the
/// first being the `Basic` scheme name. The second must base64-decode to
/// valid UTF-8 free of control characters (0x00-0x1F and 0x7F) and contain
/// at least one colon. The first colon separates user from password; the
/// password keeps any further colons.
pub fn parse_basic(header_value: &str) -> Result<Credential, AuthError> {
	let (scheme, encoded) = header_value.split_once(' ').ok_or(AuthError::MalformedHeader)?;
	if scheme != SCHEME || encoded.is_empty() {
		return Err(AuthError::MalformedHeader);
	}

	let bytes = STANDARD.decode(encoded).map_err(|_| AuthError::InvalidEncoding)?;
	let decoded = String::from_utf8(bytes).map_err(|_| AuthError::InvalidEncoding)?;

	if decoded.chars().any(|c| matches!(c, '\u{0000}'..='\u{001f}' | '\u{007f}')) {
		return Err(AuthError::InvalidEncoding);
	}

	let (user, pass) = decoded.split_once(':').ok_or(AuthError::MalformedHeader)?;

	Ok(Credential {
		user: user.to_string(),
		pass: pass.to_string(),
	})
}

/// Check a parsed credential against the configured pair.
///
/// Both fields are compared in constant time.
pub fn verify(credential: &Credential, user: &str, pass: &str) -> Result<(), AuthError> {
	let user_ok = credential.user.as_bytes().ct_eq(user.as_bytes());
	let pass_ok = credential.pass.as_bytes().ct_eq(pass.as_bytes());

	if bool::from(user_ok & pass_ok) {
		Ok(())
	} else {
		Err(AuthError::InvalidCredentials)
	}
}
