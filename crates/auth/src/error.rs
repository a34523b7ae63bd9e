// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use thiserror::Error;

/// Failures produced while authenticating a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
	/// The connection did not arrive over an encrypted channel.
	#[error("connection is not encrypted")]
	InsecureTransport,
	/// No authorization header was supplied.
	#[error("no authorization header")]
	MissingHeader,
	/// The authorization header does not have the `Basic <token>` shape,
	/// or the decoded credential carries no colon separator.
	#[error("malformed authorization header")]
	MalformedHeader,
	/// The credential token failed base64 or UTF-8 decoding, or the
	/// decoded text contains control characters.
	#[error("invalid authorization value")]
	InvalidEncoding,
	/// The supplied user/password pair does not match the configured one.
	#[error("invalid credentials")]
	InvalidCredentials,
	/// The pre-shared key header is missing or wrong.
	#[error("invalid pre-shared key")]
	Forbidden,
}
